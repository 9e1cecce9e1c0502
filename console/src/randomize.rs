use std::path::PathBuf;

use clap::Args;
use log::info;
use toxinpairs::prelude::*;

use crate::strings::{
    common,
    randomize as strings,
};
use crate::utils::{
    write_store,
    InputArgs,
    PipelineCommand,
    UtilsArgs,
};

#[derive(Args, Debug, Clone)]
pub(crate) struct RandomizeArgs {
    #[arg(required = true, help = strings::FIELD)]
    field: RecordField,

    #[arg(short = 'n', long, default_value_t = 1, help = strings::TIMES)]
    times: usize,

    #[arg(short, long, help = strings::SEED)]
    seed: Option<u64>,

    #[clap(flatten)]
    input: InputArgs,

    #[arg(short, long, help = common::OUTPUT_TABLE)]
    output: Option<PathBuf>,
}

impl PipelineCommand for RandomizeArgs {
    fn run(
        &self,
        _utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        let delimiter = self.input.delimiter()?;
        let store = RecordReader::default()
            .with_delimiter(delimiter)
            .read_path(&self.input.input)?;

        let mut randomizer = match self.seed {
            Some(seed) => Randomizer::from_seed(seed),
            None => Randomizer::from_entropy(),
        };
        let randomized = randomizer.randomize(&store, self.times, self.field);
        info!("Permuted {} {} times", self.field, self.times);

        write_store(&randomized, self.output.as_ref(), delimiter)
    }
}
