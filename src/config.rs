//! Run configuration for feature extraction.

use clap::ValueEnum;
use derive_builder::Builder;
use serde::Serialize;
use std::path::PathBuf;
use strum::{Display, EnumString};

/// Sentences tagged in parallel per batch when more than one job is requested.
pub const DEFAULT_BATCH_SIZE: usize = 512;

/// Which GENIA shared-task corpus a run processes.
///
/// The mode only chooses default file names; explicit input and output paths
/// always win.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, ValueEnum, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// JNLPBA training data.
    #[default]
    Train,
    /// JNLPBA evaluation data.
    Test,
}

impl Mode {
    pub fn default_input(self) -> &'static str {
        match self {
            Mode::Train => "Genia4ERtask1.iob2",
            Mode::Test => "Genia4EReval1.iob2",
        }
    }

    pub fn default_output(self) -> &'static str {
        match self {
            Mode::Train => "GENIA-CRF-TRAIN.txt",
            Mode::Test => "GENIA-CRF-TEST.txt",
        }
    }
}

/// What happens to tokens buffered after the last sentence boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TrailingSentence {
    /// Discard the unterminated sentence (the GENIA reference tooling does this).
    #[default]
    Drop,
    /// Emit it as if a boundary line followed.
    Flush,
}

/// Everything a single extraction run needs.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct ExtractionConfig {
    #[builder(default)]
    pub mode: Mode,
    #[builder(setter(into, strip_option), default)]
    pub input: Option<PathBuf>,
    #[builder(setter(into, strip_option), default)]
    pub output: Option<PathBuf>,
    #[builder(default)]
    pub trailing: TrailingSentence,
    /// Word/tag lookup table; the rule tagger is used when absent.
    #[builder(setter(into, strip_option), default)]
    pub pos_lexicon: Option<PathBuf>,
    /// 1 runs sequentially, 0 uses every core.
    #[builder(default = "1")]
    pub jobs: usize,
    #[builder(default = "DEFAULT_BATCH_SIZE")]
    pub batch_size: usize,
    /// Where to write a CRF++ template matching the output columns.
    #[builder(setter(into, strip_option), default)]
    pub template: Option<PathBuf>,
    /// Where to write the JSON run report.
    #[builder(setter(into, strip_option), default)]
    pub report: Option<PathBuf>,
}

impl ExtractionConfig {
    pub fn input_path(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.mode.default_input()))
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.mode.default_output()))
    }
}
