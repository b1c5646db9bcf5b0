/// One input line, already split into fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record<'a> {
    /// A `token label` line.
    Pair { token: &'a str, label: &'a str },
    /// A blank line closing the current sentence.
    Boundary,
}

/// A finished sentence: tokens and their IOB labels, aligned by position.
///
/// Built only by pushing `(token, label)` pairs, so both sequences always
/// have the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// 1-based position of the sentence in the corpus.
    pub ordinal: usize,
    /// 1-based input line of the first token.
    pub start_line: usize,
    tokens: Vec<String>,
    labels: Vec<String>,
}

impl Sentence {
    pub fn new(ordinal: usize, start_line: usize) -> Self {
        Self {
            ordinal,
            start_line,
            tokens: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Build a sentence from `(token, label)` pairs.
    pub fn from_pairs<'a, I>(ordinal: usize, start_line: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut sentence = Self::new(ordinal, start_line);
        for (token, label) in pairs {
            sentence.push(token, label);
        }
        sentence
    }

    pub fn push(&mut self, token: &str, label: &str) {
        self.tokens.push(token.to_string());
        self.labels.push(label.to_string());
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
