macro_rules! define_strings {
    (
        $($name:ident = $value:literal);*$(;)?
    ) => {
        $(
            pub const $name: &str = $value;
        )*
    };
}

pub mod common {
    define_strings! {
        INPUT =
            "Annotation table with the Contig, Hit Name, Hit, Upstream and \
            Downstream columns.";
        DELIMITER =
            "Field delimiter of the annotation table.";
        OUTPUT_TABLE =
            "Path for the generated CSV table. Printed to stdout when omitted.";
        VERBOSE =
            "Increase logging verbosity (-v info, -vv debug, -vvv trace). \
            RUST_LOG takes precedence.";
        PROGRESS =
            "Display a progress bar.";
    }
}

pub mod export {
    define_strings! {
        OUTPUT =
            "Directory receiving one <Hit Name>.fasta file per toxin family. \
            Existing files are overwritten.";
        FAIL_FAST =
            "Abort on the first family file that cannot be written instead of \
            reporting all failures at the end.";
    }
}

pub mod filter {
    define_strings! {
        HIT_NAME =
            "Toxin family to keep. Only records on contigs holding exactly two \
            hits of this family are reported.";
    }
}

pub mod pairs {
    define_strings! {
        FIRST =
            "First column of the pair (Contig, Hit Name, Hit, Upstream, Downstream).";
        SECOND =
            "Second column of the pair.";
        FAMILY =
            "Count only records of contigs holding exactly two hits of this \
            family.";
    }
}

pub mod randomize {
    define_strings! {
        FIELD =
            "Column whose values are permuted across records.";
        TIMES =
            "Number of successive permutations.";
        SEED =
            "Seed of the random generator. A random seed is used when omitted.";
    }
}
