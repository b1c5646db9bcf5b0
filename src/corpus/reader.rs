//! Reader for whitespace-separated `token label` corpora.
//!
//! GENIA `.iob2` files carry one token per line followed by its IOB label;
//! a blank line ends a sentence. [`CorpusReader`] turns such a stream into
//! finished [`Sentence`]s.

use std::io::BufRead;

use log::warn;

use crate::config::TrailingSentence;
use crate::error::{CorpusError, Result};

use super::assembler::{EndOfInput, SentenceAssembler};
use super::types::{Record, Sentence};

/// Split one input line into a record.
///
/// Blank and whitespace-only lines are boundaries. Fields beyond the second
/// are ignored. A single field cannot be paired with a label and is rejected.
pub fn parse_record(line: &str, line_number: usize) -> Result<Record<'_>> {
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next()) {
        (None, _) => Ok(Record::Boundary),
        (Some(token), Some(label)) => Ok(Record::Pair { token, label }),
        (Some(_), None) => Err(CorpusError::MalformedRecord {
            line: line_number,
            content: line.trim().to_string(),
        }),
    }
}

/// Iterator over the sentences of a tagged corpus.
///
/// Yields an error at most once; iteration stops after it.
pub struct CorpusReader<R> {
    input: R,
    buffer: String,
    line: usize,
    assembler: SentenceAssembler,
    dropped_tokens: usize,
    done: bool,
}

impl<R: BufRead> CorpusReader<R> {
    pub fn new(input: R, trailing: TrailingSentence) -> Self {
        Self {
            input,
            buffer: String::new(),
            line: 0,
            assembler: SentenceAssembler::new(trailing),
            dropped_tokens: 0,
            done: false,
        }
    }

    /// Lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line
    }

    /// Tokens discarded because the input ended without a boundary line.
    pub fn dropped_tokens(&self) -> usize {
        self.dropped_tokens
    }

    fn end_of_input(&mut self) -> Option<Result<Sentence>> {
        self.done = true;
        match self.assembler.finish() {
            EndOfInput::Clean => None,
            EndOfInput::Flushed(sentence) => Some(Ok(sentence)),
            EndOfInput::Dropped { tokens, start_line } => {
                warn!(
                    "Input ended without a sentence boundary; dropped {} tokens starting on line {}",
                    tokens, start_line
                );
                self.dropped_tokens = tokens;
                None
            }
        }
    }
}

impl<R: BufRead> Iterator for CorpusReader<R> {
    type Item = Result<Sentence>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            self.buffer.clear();
            match self.input.read_line(&mut self.buffer) {
                Ok(0) => return self.end_of_input(),
                Ok(_) => {
                    self.line += 1;
                    match parse_record(&self.buffer, self.line) {
                        Ok(record) => {
                            if let Some(sentence) = self.assembler.push(record, self.line) {
                                return Some(Ok(sentence));
                            }
                        }
                        Err(e) => {
                            self.done = true;
                            return Some(Err(e));
                        }
                    }
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}
