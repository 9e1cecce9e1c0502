use std::path::PathBuf;

use clap::Args;
use toxinpairs::prelude::*;

use crate::strings::{
    common,
    pairs as strings,
};
use crate::utils::{
    output_sink,
    InputArgs,
    PipelineCommand,
    UtilsArgs,
};

#[derive(Args, Debug, Clone)]
pub(crate) struct PairsArgs {
    #[arg(required = true, help = strings::FIRST)]
    first: RecordField,

    #[arg(required = true, help = strings::SECOND)]
    second: RecordField,

    #[arg(short, long, help = strings::FAMILY)]
    family: Option<String>,

    #[clap(flatten)]
    input: InputArgs,

    #[arg(short, long, help = common::OUTPUT_TABLE)]
    output: Option<PathBuf>,
}

impl PipelineCommand for PairsArgs {
    fn run(
        &self,
        _utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        let delimiter = self.input.delimiter()?;
        let mut store = RecordReader::default()
            .with_delimiter(delimiter)
            .read_path(&self.input.input)?;
        if let Some(family) = &self.family {
            store = filter_pairable(&store, family);
        }

        let counts = count_pairs(&store, self.first, self.second);
        let mut df = counts.to_dataframe(self.first, self.second)?;
        match &self.output {
            Some(_) => write_dataframe(&mut df, output_sink(self.output.as_ref())?, delimiter),
            None => {
                println!("{}", df);
                Ok(())
            },
        }
    }
}
