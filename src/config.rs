use std::path::{
    Path,
    PathBuf,
};

use crate::{
    getter_fn,
    with_field_fn,
};

/// Name of the annotation table read when no input is given.
pub const DEFAULT_INPUT: &str = "Toxins.csv";

/// Settings of the export pipeline.
///
/// ```
/// use toxinpairs::config::PipelineConfig;
///
/// let config = PipelineConfig::default()
///     .with_output_dir("out".into())
///     .with_fail_fast(true);
/// assert_eq!(config.input().to_str(), Some("Toxins.csv"));
/// assert_eq!(config.family_path("HicB").to_str(), Some("out/HicB.fasta"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Annotation table to load.
    input:      PathBuf,
    /// Directory receiving the `<hit name>.fasta` files.
    output_dir: PathBuf,
    /// Field delimiter of the annotation table.
    delimiter:  u8,
    /// Abort the export on the first family that cannot be written.
    fail_fast:  bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input:      PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from("."),
            delimiter:  b',',
            fail_fast:  false,
        }
    }
}

impl PipelineConfig {
    getter_fn!(input, PathBuf);

    getter_fn!(output_dir, PathBuf);

    with_field_fn!(input, PathBuf);

    with_field_fn!(output_dir, PathBuf);

    with_field_fn!(delimiter, u8);

    with_field_fn!(fail_fast, bool);

    pub fn delimiter(&self) -> u8 { self.delimiter }

    pub fn fail_fast(&self) -> bool { self.fail_fast }

    /// Path of the FASTA file written for `family`.
    pub fn family_path(
        &self,
        family: &str,
    ) -> PathBuf {
        family_path(&self.output_dir, family)
    }
}

pub(crate) fn family_path(
    dir: &Path,
    family: &str,
) -> PathBuf {
    dir.join(format!("{}.fasta", family))
}
