//! Sentence assembly from a flat record stream.
//!
//! Tokens and labels accumulate until a boundary record arrives, which hands
//! the finished sentence downstream and starts a fresh one. Boundaries with
//! nothing buffered (runs of blank lines) produce nothing.

use std::mem;

use crate::config::TrailingSentence;

use super::types::{Record, Sentence};

/// How the input ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndOfInput {
    /// Nothing was buffered.
    Clean,
    /// The unterminated sentence, emitted under [`TrailingSentence::Flush`].
    Flushed(Sentence),
    /// The unterminated sentence was discarded under [`TrailingSentence::Drop`].
    Dropped { tokens: usize, start_line: usize },
}

/// Buffers one sentence at a time.
#[derive(Debug)]
pub struct SentenceAssembler {
    trailing: TrailingSentence,
    current: Sentence,
    emitted: usize,
}

impl SentenceAssembler {
    pub fn new(trailing: TrailingSentence) -> Self {
        Self {
            trailing,
            current: Sentence::new(1, 0),
            emitted: 0,
        }
    }

    /// Feed the record read from input line `line`.
    ///
    /// Returns the finished sentence when `record` is a boundary closing a
    /// non-empty sentence.
    pub fn push(&mut self, record: Record<'_>, line: usize) -> Option<Sentence> {
        match record {
            Record::Pair { token, label } => {
                if self.current.is_empty() {
                    self.current.start_line = line;
                }
                self.current.push(token, label);
                None
            }
            Record::Boundary if self.current.is_empty() => None,
            Record::Boundary => Some(self.take()),
        }
    }

    /// Close the stream, applying the trailing-sentence policy.
    pub fn finish(&mut self) -> EndOfInput {
        if self.current.is_empty() {
            return EndOfInput::Clean;
        }
        match self.trailing {
            TrailingSentence::Flush => EndOfInput::Flushed(self.take()),
            TrailingSentence::Drop => {
                let next = Sentence::new(self.emitted + 1, 0);
                let dropped = mem::replace(&mut self.current, next);
                EndOfInput::Dropped {
                    tokens: dropped.len(),
                    start_line: dropped.start_line,
                }
            }
        }
    }

    /// Tokens buffered for the sentence in progress.
    pub fn pending(&self) -> usize {
        self.current.len()
    }

    /// Sentences handed out so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    fn take(&mut self) -> Sentence {
        self.emitted += 1;
        let next = Sentence::new(self.emitted + 1, 0);
        mem::replace(&mut self.current, next)
    }
}
