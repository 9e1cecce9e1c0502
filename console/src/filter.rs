use std::path::PathBuf;

use clap::Args;
use log::info;
use toxinpairs::prelude::*;

use crate::strings::{
    common,
    filter as strings,
};
use crate::utils::{
    write_store,
    InputArgs,
    PipelineCommand,
    UtilsArgs,
};

#[derive(Args, Debug, Clone)]
pub(crate) struct FilterArgs {
    #[arg(required = true, help = strings::HIT_NAME)]
    hit_name: String,

    #[clap(flatten)]
    input: InputArgs,

    #[arg(short, long, help = common::OUTPUT_TABLE)]
    output: Option<PathBuf>,
}

impl PipelineCommand for FilterArgs {
    fn run(
        &self,
        _utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        let delimiter = self.input.delimiter()?;
        let store = RecordReader::default()
            .with_delimiter(delimiter)
            .read_path(&self.input.input)?;

        let filtered = filter_pairable(&store, &self.hit_name);
        info!(
            "{} records of {} on paired contigs",
            filtered.len(),
            self.hit_name
        );
        write_store(&filtered, self.output.as_ref(), delimiter)
    }
}
