//! Input and output of annotation data.
//!
//! - [`table`]: CSV annotation tables, read into and written from a
//!   [`RecordStore`](crate::data_structs::RecordStore), plus CSV output of
//!   arbitrary polars frames.
//! - [`fasta`]: per-family FASTA export of resolved toxin-antitoxin pairs.

pub mod fasta;
pub mod table;

pub use fasta::{
    ExportFailure,
    ExportReport,
    FastaExporter,
};
pub use table::{
    write_dataframe,
    RecordReader,
    RecordWriter,
};
