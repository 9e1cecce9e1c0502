pub use crate::config::PipelineConfig;
pub use crate::data_structs::typedef::{
    SeqStr,
    ABSENT_SEQ,
};
pub use crate::data_structs::{
    AnnotationRecord,
    RecordField,
    RecordId,
    RecordStore,
};
pub use crate::io::{
    write_dataframe,
    ExportFailure,
    ExportReport,
    FastaExporter,
    RecordReader,
    RecordWriter,
};
pub use crate::tools::{
    count_pairs,
    filter_pairable,
    resolve_duplicates,
    run_export,
    PairCount,
    PairCounts,
    Permutations,
    Randomizer,
    Resolution,
};
