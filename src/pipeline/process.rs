use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

use anyhow::Context;
use chrono::Utc;
use indicatif::ProgressBar;
use log::{debug, info};
use rayon::prelude::*;

use crate::config::ExtractionConfig;
use crate::corpus::{CorpusReader, CorpusWriter, Sentence};
use crate::error::Result;
use crate::features::{FeatureVector, build_sentence, write_template};
use crate::pos::{LexiconTagger, PosTagger, RuleTagger, tag_sentence};

use super::report::{ExtractionReport, write_report};
use super::{ExtractionStats, PipelineOptions};

/// Turn a `token label` corpus into CRF++ feature rows.
///
/// Sentences are written in input order whatever the job count. The
/// progress bar is advanced once per sentence written.
pub fn extract<R: BufRead, W: Write>(
    input: R,
    output: W,
    tagger: &dyn PosTagger,
    options: &PipelineOptions,
    progress: &ProgressBar,
) -> Result<ExtractionStats> {
    let mut reader = CorpusReader::new(input, options.trailing);
    let mut writer = CorpusWriter::new(output);

    if options.jobs == 1 {
        for sentence in reader.by_ref() {
            let sentence = sentence?;
            let tags = tag_sentence(tagger, &sentence)?;
            writer.write_sentence(&build_sentence(&sentence, &tags)?)?;
            progress.inc(1);
        }
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(options.jobs)
            .build()?;
        let batch_size = options.batch_size.max(1);
        debug!(
            "Tagging on {} threads in batches of {}",
            pool.current_num_threads(),
            batch_size
        );

        loop {
            let batch: Vec<Sentence> = reader.by_ref().take(batch_size).collect::<Result<_>>()?;
            if batch.is_empty() {
                break;
            }
            let tagged: Vec<Vec<String>> = pool.install(|| {
                batch
                    .par_iter()
                    .map(|sentence| tag_sentence(tagger, sentence))
                    .collect::<Result<_>>()
            })?;
            let rows: Vec<Vec<FeatureVector<'_>>> = pool.install(|| {
                batch
                    .par_iter()
                    .zip(tagged.par_iter())
                    .map(|(sentence, tags)| build_sentence(sentence, tags))
                    .collect::<Result<_>>()
            })?;

            for vectors in &rows {
                writer.write_sentence(vectors)?;
            }
            progress.inc(batch.len() as u64);
            debug!(
                "Wrote batch of {} sentences (through input line {})",
                batch.len(),
                reader.lines_read()
            );
        }
    }

    let stats = ExtractionStats {
        lines_read: reader.lines_read(),
        sentences: writer.sentences(),
        tokens: writer.lines(),
        dropped_trailing_tokens: reader.dropped_tokens(),
    };
    writer.finish()?;
    Ok(stats)
}

/// Run a configured extraction against the file system.
pub fn run(config: &ExtractionConfig, progress: &ProgressBar) -> anyhow::Result<ExtractionReport> {
    let start_time = Utc::now();
    let input_path = config.input_path();
    let output_path = config.output_path();

    let tagger: Box<dyn PosTagger> = match &config.pos_lexicon {
        Some(path) => Box::new(LexiconTagger::from_path(path)?),
        None => Box::new(RuleTagger::new()),
    };

    let input = File::open(&input_path)
        .with_context(|| format!("Failed to open corpus {}", input_path.display()))?;
    let output = File::create(&output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;

    info!(
        "Extracting features from {} into {} ({} tagger, mode {})",
        input_path.display(),
        output_path.display(),
        tagger.name(),
        config.mode
    );

    let options = PipelineOptions {
        trailing: config.trailing,
        jobs: config.jobs,
        batch_size: config.batch_size,
    };
    let stats = extract(
        BufReader::new(input),
        BufWriter::new(output),
        tagger.as_ref(),
        &options,
        progress,
    )
    .with_context(|| format!("Failed to extract features from {}", input_path.display()))?;

    info!(
        "Wrote {} sentences ({} tokens) to {}",
        stats.sentences,
        stats.tokens,
        output_path.display()
    );

    if let Some(path) = &config.template {
        let file = File::create(path)
            .with_context(|| format!("Failed to create template {}", path.display()))?;
        write_template(BufWriter::new(file))
            .with_context(|| format!("Failed to write template {}", path.display()))?;
        info!("CRF++ template written to {}", path.display());
    }

    let report = ExtractionReport::new(
        config,
        tagger.name(),
        &input_path,
        &output_path,
        start_time,
        Utc::now(),
        stats,
    );
    if let Some(path) = &config.report {
        write_report(path, &report)?;
        info!("Run report written to {}", path.display());
    }
    Ok(report)
}
