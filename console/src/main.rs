mod export;
mod filter;
mod pairs;
mod randomize;
mod strings;
mod utils;

use clap::{
    Parser,
    Subcommand,
};
use export::ExportArgs;
use filter::FilterArgs;
use pairs::PairsArgs;
use randomize::RandomizeArgs;
use utils::{
    PipelineCommand,
    UtilsArgs,
};
use wild::ArgsOs;

#[derive(Parser, Debug)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,)]
struct Cli {
    #[command(subcommand)]
    command: MainMenu,
}

#[derive(Subcommand, Debug)]
enum MainMenu {
    /// Resolve duplicated loci and write one FASTA file per toxin family.
    Export {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  ExportArgs,
    },

    /// Records of one family on contigs holding exactly one pair.
    Filter {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  FilterArgs,
    },

    /// Count distinct value pairs of two columns.
    Pairs {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  PairsArgs,
    },

    /// Permute the values of one column.
    Randomize {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  RandomizeArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let args: ArgsOs = wild::args_os();
    let cli = Cli::parse_from(args);

    let (utils, command): (UtilsArgs, Box<dyn PipelineCommand>) = match cli.command {
        MainMenu::Export { utils, args } => (utils, Box::new(args)),
        MainMenu::Filter { utils, args } => (utils, Box::new(args)),
        MainMenu::Pairs { utils, args } => (utils, Box::new(args)),
        MainMenu::Randomize { utils, args } => (utils, Box::new(args)),
    };
    utils.setup()?;
    command.run(&utils)
}
