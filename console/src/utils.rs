use std::fs::File;
use std::io::{
    BufWriter,
    Write,
};
use std::path::PathBuf;

use anyhow::{
    ensure,
    Context,
};
use clap::Args;
use indicatif::{
    ProgressBar,
    ProgressStyle,
};
use log::LevelFilter;
use toxinpairs::config::DEFAULT_INPUT;
use toxinpairs::exports::pretty_env_logger;
use toxinpairs::prelude::*;

use crate::strings::common as strings;

#[derive(Args, Debug, Clone)]
pub(crate) struct UtilsArgs {
    #[arg(short, long, action = clap::ArgAction::Count, help = strings::VERBOSE)]
    pub verbose:  u8,
    #[arg(long, default_value_t = false, help = strings::PROGRESS)]
    pub progress: bool,
}

impl UtilsArgs {
    pub fn setup(&self) -> anyhow::Result<()> {
        let level = match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        pretty_env_logger::formatted_builder()
            .filter_level(level)
            .parse_default_env()
            .try_init()
            .context("Failed to set up logger")
    }
}

#[derive(Args, Debug, Clone)]
pub(crate) struct InputArgs {
    #[arg(short, long, default_value = DEFAULT_INPUT, help = strings::INPUT)]
    pub input:     PathBuf,
    #[arg(short, long, default_value_t = ',', help = strings::DELIMITER)]
    pub delimiter: char,
}

impl InputArgs {
    pub fn delimiter(&self) -> anyhow::Result<u8> {
        ensure!(
            self.delimiter.is_ascii(),
            "Delimiter must be an ASCII character, got '{}'",
            self.delimiter
        );
        Ok(self.delimiter as u8)
    }

    pub fn config(&self) -> anyhow::Result<PipelineConfig> {
        Ok(PipelineConfig::default()
            .with_input(self.input.clone())
            .with_delimiter(self.delimiter()?))
    }
}

pub(crate) trait PipelineCommand {
    fn run(
        &self,
        utils: &UtilsArgs,
    ) -> anyhow::Result<()>;
}

pub(crate) fn init_progress(
    total: usize,
    enabled: bool,
) -> anyhow::Result<ProgressBar> {
    if !enabled {
        return Ok(ProgressBar::hidden());
    }
    let progress_bar = ProgressBar::new(total as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}, ETA: {eta}] [{bar:40.cyan/blue}] {pos:>5.green}/{len:5} {msg}")?
            .progress_chars("#>-"),
    );
    progress_bar.set_message("Processing...");
    Ok(progress_bar)
}

/// Opens `path` for writing, or stdout when no path is given.
pub(crate) fn output_sink(path: Option<&PathBuf>) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        },
        None => Ok(Box::new(std::io::stdout().lock())),
    }
}

pub(crate) fn write_store(
    store: &RecordStore,
    path: Option<&PathBuf>,
    delimiter: u8,
) -> anyhow::Result<()> {
    let mut writer = RecordWriter::new(output_sink(path)?, delimiter);
    writer.write_store(store)?;
    writer.finish()
}
