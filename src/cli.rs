use clap::Parser;
use std::path::PathBuf;

use crate::config::{
    DEFAULT_BATCH_SIZE, ExtractionConfig, ExtractionConfigBuilder, Mode, TrailingSentence,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Which GENIA corpus to process; picks the default input and output files
    #[arg(long, value_enum, default_value_t = Mode::Train)]
    pub mode: Mode,

    /// Input corpus (`token label` per line, blank line between sentences)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output feature table
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit a final sentence that is not followed by a blank line instead of dropping it
    #[arg(long)]
    pub flush_trailing: bool,

    /// Tab-separated `token tag` lexicon consulted before the rule tagger
    #[arg(long)]
    pub pos_lexicon: Option<PathBuf>,

    /// Tagging threads (1 runs sequentially, 0 uses every core)
    #[arg(short, long, default_value = "1")]
    pub jobs: usize,

    /// Sentences per parallel batch
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Also write a CRF++ feature template for the output columns
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Write a JSON run report
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Hide the progress spinner
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn to_config(&self) -> anyhow::Result<ExtractionConfig> {
        let mut builder = ExtractionConfigBuilder::default();
        builder
            .mode(self.mode)
            .trailing(if self.flush_trailing {
                TrailingSentence::Flush
            } else {
                TrailingSentence::Drop
            })
            .jobs(self.jobs)
            .batch_size(self.batch_size);
        if let Some(input) = &self.input {
            builder.input(input.clone());
        }
        if let Some(output) = &self.output {
            builder.output(output.clone());
        }
        if let Some(lexicon) = &self.pos_lexicon {
            builder.pos_lexicon(lexicon.clone());
        }
        if let Some(template) = &self.template {
            builder.template(template.clone());
        }
        if let Some(report) = &self.report {
            builder.report(report.clone());
        }
        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["iobfeat"]);
        let config = cli.to_config().unwrap();
        assert_eq!(config.mode, Mode::Train);
        assert_eq!(config.trailing, TrailingSentence::Drop);
        assert_eq!(config.jobs, 1);
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(config.input_path(), PathBuf::from("Genia4ERtask1.iob2"));
        assert!(config.template.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::parse_from([
            "iobfeat",
            "--mode",
            "test",
            "-i",
            "in.iob2",
            "-o",
            "out.txt",
            "--flush-trailing",
            "--pos-lexicon",
            "lex.tsv",
            "-j",
            "0",
            "--batch-size",
            "64",
            "--template",
            "template.txt",
            "--report",
            "report.json",
            "-q",
        ]);
        let config = cli.to_config().unwrap();
        assert_eq!(config.mode, Mode::Test);
        assert_eq!(config.input_path(), PathBuf::from("in.iob2"));
        assert_eq!(config.output_path(), PathBuf::from("out.txt"));
        assert_eq!(config.trailing, TrailingSentence::Flush);
        assert_eq!(config.pos_lexicon, Some(PathBuf::from("lex.tsv")));
        assert_eq!(config.jobs, 0);
        assert_eq!(config.batch_size, 64);
        assert_eq!(config.template, Some(PathBuf::from("template.txt")));
        assert_eq!(config.report, Some(PathBuf::from("report.json")));
        assert!(cli.quiet);
    }

    #[test]
    fn test_invalid_mode_rejected() {
        assert!(Cli::try_parse_from(["iobfeat", "--mode", "dev"]).is_err());
    }
}
