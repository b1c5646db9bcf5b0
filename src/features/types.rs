//! Core types for per-token features.
//!
//! This module defines:
//! - The output column layout ([`FIELD_NAMES`], [`FIELD_COUNT`])
//! - Orthographic and lexical flag groups ([`Orthographic`], [`Lexical`])
//! - The [`FeatureVector`] emitted for every token

use std::fmt;

/// Number of tab-separated columns per output line.
pub const FIELD_COUNT: usize = 23;

/// Output columns, in order. CRF++ templates address columns by index, so
/// this order must never change.
pub const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "token",
    "pos",
    "hyphen",
    "comma",
    "cap_letter",
    "number",
    "backslash",
    "colon",
    "semicolon",
    "bracket",
    "paren",
    "word_shape",
    "greek",
    "rna",
    "cell",
    "gene",
    "jurkat",
    "transcript",
    "factor",
    "common_string",
    "any_lex",
    "cap_alone",
    "label",
];

/// Column index of a named field.
pub fn column(name: &str) -> Option<usize> {
    FIELD_NAMES.iter().position(|field| *field == name)
}

/// Renders a flag the way CRF++ columns expect it.
pub fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// Punctuation and character-class flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Orthographic {
    pub hyphen: bool,
    pub comma: bool,
    pub cap_letter: bool,
    pub number: bool,
    pub backslash: bool,
    pub colon: bool,
    pub semicolon: bool,
    pub bracket: bool,
    pub paren: bool,
}

impl Orthographic {
    /// Flags in column order.
    pub fn flags(&self) -> [bool; 9] {
        [
            self.hyphen,
            self.comma,
            self.cap_letter,
            self.number,
            self.backslash,
            self.colon,
            self.semicolon,
            self.bracket,
            self.paren,
        ]
    }
}

/// Domain vocabulary flags (all case-insensitive substring tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lexical {
    pub greek: bool,
    pub rna: bool,
    pub cell: bool,
    pub gene: bool,
    pub jurkat: bool,
    pub transcript: bool,
    pub factor: bool,
    pub common_string: bool,
}

impl Lexical {
    /// Flags in column order, without `any_lex`.
    pub fn flags(&self) -> [bool; 8] {
        [
            self.greek,
            self.rna,
            self.cell,
            self.gene,
            self.jurkat,
            self.transcript,
            self.factor,
            self.common_string,
        ]
    }

    /// The `any_lex` column.
    pub fn any(&self) -> bool {
        self.flags().into_iter().any(|set| set)
    }
}

/// Features for a single token, borrowing its strings from the sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureVector<'a> {
    pub token: &'a str,
    pub pos: &'a str,
    pub orthographic: Orthographic,
    pub shape: String,
    pub lexical: Lexical,
    /// Token is a single uppercase ASCII letter.
    pub cap_alone: bool,
    pub label: &'a str,
}

impl FeatureVector<'_> {
    /// Column values in output order.
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        let [hyphen, comma, cap_letter, number, backslash, colon, semicolon, bracket, paren] =
            self.orthographic.flags().map(flag);
        let [greek, rna, cell, gene, jurkat, transcript, factor, common_string] =
            self.lexical.flags().map(flag);

        [
            self.token,
            self.pos,
            hyphen,
            comma,
            cap_letter,
            number,
            backslash,
            colon,
            semicolon,
            bracket,
            paren,
            self.shape.as_str(),
            greek,
            rna,
            cell,
            gene,
            jurkat,
            transcript,
            factor,
            common_string,
            flag(self.lexical.any()),
            flag(self.cap_alone),
            self.label,
        ]
    }
}

impl fmt::Display for FeatureVector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields().iter().enumerate() {
            if i > 0 {
                f.write_str("\t")?;
            }
            f.write_str(field)?;
        }
        Ok(())
    }
}
