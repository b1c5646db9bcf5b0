//! Writer for CRF++ feature tables.
//!
//! One tab-separated line per token and a blank line after every sentence,
//! the same delimiting the input corpus uses. Values are written verbatim:
//! a tab or newline inside a token or label corrupts the table.

use std::io::{self, Write};

use crate::features::FeatureVector;

pub struct CorpusWriter<W: Write> {
    out: W,
    sentences: usize,
    lines: usize,
}

impl<W: Write> CorpusWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            sentences: 0,
            lines: 0,
        }
    }

    /// Write one sentence block followed by its blank separator line.
    pub fn write_sentence(&mut self, vectors: &[FeatureVector<'_>]) -> io::Result<()> {
        for vector in vectors {
            writeln!(self.out, "{vector}")?;
        }
        self.out.write_all(b"\n")?;
        self.sentences += 1;
        self.lines += vectors.len();
        Ok(())
    }

    /// Sentence blocks written.
    pub fn sentences(&self) -> usize {
        self.sentences
    }

    /// Token lines written (separator lines excluded).
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
