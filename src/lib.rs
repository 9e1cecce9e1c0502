//! # toxinpairs
//!
//! `toxinpairs` is a Rust library and command-line tool for turning tabular
//! toxin-antitoxin (TA) annotation tables into per-family FASTA files ready
//! for multiple sequence alignment.
//!
//! The input is a CSV table (by default `Toxins.csv`) produced by an upstream
//! sequence-search pipeline, with one row per toxin hit and the required
//! columns `Contig`, `Hit Name`, `Hit`, `Upstream` and `Downstream`. The
//! antitoxin columns hold either a sequence or the `-` sentinel.
//!
//! ## Key Features
//!
//! * **Typed records**: rows are loaded into [`AnnotationRecord`](data_structs::AnnotationRecord)s with a
//!   stable [`RecordId`](data_structs::RecordId) and stored in an immutable [`RecordStore`](data_structs::RecordStore). Columns
//!   are addressed with the [`RecordField`](data_structs::RecordField) enum instead of string keys.
//! * **Pair filtering**: [`filter_pairable`](tools::filter_pairable) keeps the records of contigs
//!   holding exactly two hits of a given family.
//! * **Duplicate resolution**: [`resolve_duplicates`](tools::resolve_duplicates) keeps records from
//!   duplicated `(contig, hit name)` loci and drops the ambiguous ones which
//!   carry both an upstream and a downstream antitoxin.
//! * **FASTA export**: [`FastaExporter`](io::FastaExporter) writes one `<hit name>.fasta` file per
//!   family, alternating toxin and antitoxin entries.
//! * **Analysis helpers**: [`count_pairs`](tools::count_pairs) tabulates value combinations of any
//!   two columns and [`Randomizer`](tools::Randomizer) builds permutation null models.
//!
//! ## Usage
//!
//! ```no_run
//! use toxinpairs::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = PipelineConfig::default()
//!         .with_input("Toxins.csv".into())
//!         .with_output_dir("msa_input".into());
//!
//!     let report = run_export(&config)?;
//!     for path in report.written() {
//!         println!("Wrote {}", path.display());
//!     }
//!     report.into_result()?;
//!     Ok(())
//! }
//! ```
//!
//! ### Counting column combinations on a filtered view
//!
//! ```no_run
//! use toxinpairs::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let store = RecordStore::from_csv("Toxins.csv")?;
//!     let view = filter_pairable(&store, "HicB");
//!     let counts = count_pairs(&view, RecordField::Upstream, RecordField::Downstream);
//!     println!("{}", counts.to_dataframe(RecordField::Upstream, RecordField::Downstream)?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod data_structs;
pub mod exports;
pub mod io;
pub mod prelude;
pub mod tools;
pub mod utils;
