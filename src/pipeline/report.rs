use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::to_string_pretty;

use crate::config::{ExtractionConfig, Mode, TrailingSentence};
use crate::features::FIELD_NAMES;

use super::ExtractionStats;

pub const TOOL_NAME: &str = env!("CARGO_PKG_NAME");

/// Summary of one extraction run, serialized as JSON.
#[derive(Serialize, Debug)]
pub struct ExtractionReport {
    pub tool_name: String,
    pub tool_version: String,
    pub mode: Mode,
    pub tagger: String,
    pub trailing: TrailingSentence,
    pub jobs: usize,
    pub input: String,
    pub output: String,
    pub start_timestamp: String,
    pub end_timestamp: String,
    pub duration: f64,
    pub stats: ExtractionStats,
    pub feature_columns: Vec<String>,
}

impl ExtractionReport {
    pub fn new(
        config: &ExtractionConfig,
        tagger: &str,
        input: &Path,
        output: &Path,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        stats: ExtractionStats,
    ) -> Self {
        let duration =
            (end_time - start_time).num_nanoseconds().unwrap_or(0) as f64 / 1_000_000_000.0;
        Self {
            tool_name: TOOL_NAME.to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            mode: config.mode,
            tagger: tagger.to_string(),
            trailing: config.trailing,
            jobs: config.jobs,
            input: input.display().to_string(),
            output: output.display().to_string(),
            start_timestamp: start_time.to_rfc3339(),
            end_timestamp: end_time.to_rfc3339(),
            duration,
            stats,
            feature_columns: FIELD_NAMES.iter().map(|name| name.to_string()).collect(),
        }
    }
}

pub fn write_report(path: &Path, report: &ExtractionReport) -> anyhow::Result<()> {
    let json = to_string_pretty(report).context("Failed to serialize run report")?;
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create report {}", path.display()))?;
    file.write_all(json.as_bytes())?;
    Ok(())
}
