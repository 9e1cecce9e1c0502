use std::fs;

use anyhow::Context;
use log::info;

use crate::config::PipelineConfig;
use crate::data_structs::RecordStore;
use crate::io::{
    ExportReport,
    FastaExporter,
    RecordReader,
};
use crate::tools::duplicates::resolve_duplicates;

/// Loads the annotation table named by `config`.
pub fn load_records(config: &PipelineConfig) -> anyhow::Result<RecordStore> {
    RecordReader::default()
        .with_delimiter(config.delimiter())
        .read_path(config.input())
}

/// Exporter writing into the directory named by `config`, creating it when
/// needed.
pub fn exporter(config: &PipelineConfig) -> anyhow::Result<FastaExporter> {
    fs::create_dir_all(config.output_dir()).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.output_dir().display()
        )
    })?;
    Ok(FastaExporter::new(config.output_dir().clone()).with_fail_fast(config.fail_fast()))
}

/// Loads the table, resolves duplicated loci and writes the per-family FASTA
/// files.
///
/// A load error aborts before anything is written. Export failures are
/// collected in the returned report unless fail-fast is configured.
pub fn run_export(config: &PipelineConfig) -> anyhow::Result<ExportReport> {
    let store = load_records(config)?;
    let resolution = resolve_duplicates(&store);
    let report = exporter(config)?.export(&resolution.kept)?;
    info!(
        "Exported {} families to {}",
        report.written().len(),
        config.output_dir().display()
    );
    Ok(report)
}
