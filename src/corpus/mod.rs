//! Corpus input and output.
//!
//! Reads GENIA-style `token label` files into sentences and writes feature
//! tables in the CRF++ column format.

mod assembler;
mod reader;
mod types;
mod writer;

pub use assembler::{EndOfInput, SentenceAssembler};
pub use reader::{CorpusReader, parse_record};
pub use types::{Record, Sentence};
pub use writer::CorpusWriter;
