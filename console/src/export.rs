use std::path::PathBuf;

use clap::Args;
use console::style;
use log::info;
use toxinpairs::io::fasta::group_by_family;
use toxinpairs::prelude::*;
use toxinpairs::tools::pipeline::{
    exporter,
    load_records,
};

use crate::strings::export as strings;
use crate::utils::{
    init_progress,
    InputArgs,
    PipelineCommand,
    UtilsArgs,
};

#[derive(Args, Debug, Clone)]
pub(crate) struct ExportArgs {
    #[clap(flatten)]
    input: InputArgs,

    #[arg(short, long, default_value = ".", help = strings::OUTPUT)]
    output: PathBuf,

    #[arg(long, default_value_t = false, help = strings::FAIL_FAST)]
    fail_fast: bool,
}

impl PipelineCommand for ExportArgs {
    fn run(
        &self,
        utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        let config = self
            .input
            .config()?
            .with_output_dir(self.output.clone())
            .with_fail_fast(self.fail_fast);

        let store = load_records(&config)?;
        let resolution = resolve_duplicates(&store);
        info!(
            "{} records left after removing {} single-locus and {} ambiguous records",
            resolution.kept.len(),
            resolution.singletons,
            resolution.ambiguous
        );

        let exporter = exporter(&config)?;
        let progress_bar =
            init_progress(group_by_family(&resolution.kept).len(), utils.progress)?;
        let report = exporter.export_with(&resolution.kept, |family| {
            progress_bar.set_message(family.to_string());
            progress_bar.inc(1);
        })?;
        progress_bar.finish_and_clear();

        for path in report.written() {
            println!("[{}] {}", style("V").green(), path.display());
        }
        for failure in report.failures() {
            eprintln!(
                "[{}] {}: {:#}",
                style("X").red(),
                failure.path.display(),
                failure.error
            );
        }
        report.into_result()?;
        Ok(())
    }
}
