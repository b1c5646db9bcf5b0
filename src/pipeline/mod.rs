//! Drives a full run: read sentences, tag them, build feature rows, write.

mod process;
mod report;

pub use process::{extract, run};
pub use report::{ExtractionReport, write_report};

use serde::Serialize;

use crate::config::{DEFAULT_BATCH_SIZE, TrailingSentence};

/// Knobs for [`extract`] that do not concern file locations.
#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    pub trailing: TrailingSentence,
    /// 1 runs sequentially, 0 uses every core.
    pub jobs: usize,
    pub batch_size: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            trailing: TrailingSentence::default(),
            jobs: 1,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// Counts collected during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    pub lines_read: usize,
    pub sentences: usize,
    /// Token lines written.
    pub tokens: usize,
    pub dropped_trailing_tokens: usize,
}
