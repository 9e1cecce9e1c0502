//! Filtering, resolution and analysis steps over a
//! [`RecordStore`](crate::data_structs::RecordStore).
//!
//! - [`contig_filter`]: per-family view of contigs holding exactly one
//!   toxin-antitoxin pair.
//! - [`duplicates`]: selection of export-eligible records from duplicated
//!   loci.
//! - [`pairs`]: value-pair counts between two columns.
//! - [`randomize`]: column permutations for null models.
//! - [`pipeline`]: the load, resolve and export chain.

pub mod contig_filter;
pub mod duplicates;
pub mod pairs;
pub mod pipeline;
pub mod randomize;

pub use contig_filter::filter_pairable;
pub use duplicates::{
    resolve_duplicates,
    Resolution,
};
pub use pairs::{
    count_pairs,
    PairCount,
    PairCounts,
};
pub use pipeline::run_export;
pub use randomize::{
    Permutations,
    Randomizer,
};
