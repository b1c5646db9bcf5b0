//! Boolean pattern matching for token features.
//!
//! Every feature flag is a regex searched anywhere in the token. Matching runs
//! over the token's bytes with Unicode mode off, so case-insensitive patterns
//! fold ASCII letters only and classes like `[A-Z]` never see non-ASCII text
//! as letters.

use regex::bytes::{Regex, RegexBuilder};

/// A compiled feature pattern.
#[derive(Debug, Clone)]
pub struct BoolPattern {
    regex: Regex,
}

impl BoolPattern {
    pub fn new(pattern: &str, case_insensitive: bool) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(case_insensitive)
            .unicode(false)
            .build()?;
        Ok(Self { regex })
    }

    /// True if the pattern occurs anywhere in `token`.
    pub fn is_match(&self, token: &str) -> bool {
        self.regex.is_match(token.as_bytes())
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// One-shot form of [`BoolPattern::is_match`].
///
/// Compiles `pattern` on every call; feature extraction uses the
/// precompiled tables in `builder` instead.
pub fn matches(pattern: &str, token: &str, case_insensitive: bool) -> Result<bool, regex::Error> {
    Ok(BoolPattern::new(pattern, case_insensitive)?.is_match(token))
}

/// Builds an alternation that matches any of `terms` literally.
pub fn any_of(terms: &[&str]) -> String {
    terms
        .iter()
        .map(|term| regex::escape(term))
        .collect::<Vec<_>>()
        .join("|")
}
