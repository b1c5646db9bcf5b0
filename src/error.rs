//! Error types for corpus feature extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a feature extraction run.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// An input line carried a single field: a token without a label or vice versa.
    #[error("malformed record on line {line}: expected `token label`, found {content:?}")]
    MalformedRecord {
        /// 1-based input line number.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },

    /// The POS tagger returned a tag sequence of the wrong length.
    #[error(
        "POS tagger returned {tags} tags for {tokens} tokens in sentence {sentence} (starting on line {line})"
    )]
    TagAlignment {
        /// 1-based sentence ordinal.
        sentence: usize,
        /// Input line of the sentence's first token.
        line: usize,
        tokens: usize,
        tags: usize,
    },

    /// A POS lexicon file could not be loaded.
    #[error("invalid POS lexicon {path}:{line}: {reason}")]
    Lexicon {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// The worker pool for parallel tagging could not be started.
    #[error("failed to build tagging thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// I/O error while reading the corpus or writing features.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for corpus operations.
pub type Result<T> = std::result::Result<T, CorpusError>;
