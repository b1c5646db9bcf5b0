pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod features;
pub mod pipeline;
pub mod pos;

pub use config::{ExtractionConfig, ExtractionConfigBuilder, Mode, TrailingSentence};
pub use corpus::{CorpusReader, CorpusWriter, Sentence};
pub use error::{CorpusError, Result};
pub use features::{FeatureVector, build_sentence, shape};
pub use pipeline::{ExtractionReport, ExtractionStats, PipelineOptions, extract, run};
pub use pos::{LexiconTagger, PosTagger, RuleTagger};
