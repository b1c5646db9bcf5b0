//! Per-token feature computation.
//!
//! Patterns are compiled once and shared by every sentence. The `any_lex`
//! column is derived from the eight lexical flags rather than matched
//! separately.

use std::sync::LazyLock;

use crate::corpus::Sentence;
use crate::error::Result;
use crate::pos::check_alignment;

use super::matcher::{BoolPattern, any_of};
use super::shape::shape;
use super::types::{FeatureVector, Lexical, Orthographic};

pub const GREEK_LETTERS: &[&str] = &[
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "theta", "kappa", "lambda",
];

/// Fragments common in protein and cell-line names.
pub const COMMON_STRINGS: &[&str] = &["prot", "mono", "nucle", "integr", "macro", "il-"];

struct OrthographicPatterns {
    hyphen: BoolPattern,
    comma: BoolPattern,
    cap_letter: BoolPattern,
    number: BoolPattern,
    backslash: BoolPattern,
    colon: BoolPattern,
    semicolon: BoolPattern,
    brackets: [BoolPattern; 2],
    parens: [BoolPattern; 2],
}

struct LexicalPatterns {
    greek: BoolPattern,
    rna: BoolPattern,
    cell: BoolPattern,
    gene: BoolPattern,
    jurkat: BoolPattern,
    transcript: BoolPattern,
    factor: BoolPattern,
    common_string: BoolPattern,
}

/// All compiled feature patterns.
struct FeaturePatterns {
    orthographic: OrthographicPatterns,
    lexical: LexicalPatterns,
}

/// Global compiled patterns, initialized once.
static FEATURE_PATTERNS: LazyLock<FeaturePatterns> = LazyLock::new(|| {
    let exact = |pattern: &str| compile(pattern, false);
    let folded = |pattern: &str| compile(pattern, true);

    FeaturePatterns {
        orthographic: OrthographicPatterns {
            hyphen: exact(r"\-"),
            comma: exact(","),
            cap_letter: exact("[A-Z]"),
            number: exact("[0-9]"),
            backslash: exact(r"\\"),
            colon: exact(":"),
            semicolon: exact(";"),
            brackets: [exact(r"\["), exact(r"\]")],
            parens: [exact(r"\("), exact(r"\)")],
        },
        lexical: LexicalPatterns {
            greek: folded(&any_of(GREEK_LETTERS)),
            rna: folded("rna"),
            cell: folded("cell"),
            gene: folded("gene"),
            jurkat: folded("jurkat"),
            transcript: folded("transcript"),
            factor: folded("factor"),
            common_string: folded(&any_of(COMMON_STRINGS)),
        },
    }
});

fn compile(pattern: &str, case_insensitive: bool) -> BoolPattern {
    BoolPattern::new(pattern, case_insensitive)
        .unwrap_or_else(|e| panic!("Failed to compile feature pattern '{}': {}", pattern, e))
}

pub fn orthographic(token: &str) -> Orthographic {
    let p = &FEATURE_PATTERNS.orthographic;
    Orthographic {
        hyphen: p.hyphen.is_match(token),
        comma: p.comma.is_match(token),
        cap_letter: p.cap_letter.is_match(token),
        number: p.number.is_match(token),
        backslash: p.backslash.is_match(token),
        colon: p.colon.is_match(token),
        semicolon: p.semicolon.is_match(token),
        bracket: p.brackets.iter().any(|b| b.is_match(token)),
        paren: p.parens.iter().any(|b| b.is_match(token)),
    }
}

pub fn lexical(token: &str) -> Lexical {
    let p = &FEATURE_PATTERNS.lexical;
    Lexical {
        greek: p.greek.is_match(token),
        rna: p.rna.is_match(token),
        cell: p.cell.is_match(token),
        gene: p.gene.is_match(token),
        jurkat: p.jurkat.is_match(token),
        transcript: p.transcript.is_match(token),
        factor: p.factor.is_match(token),
        common_string: p.common_string.is_match(token),
    }
}

/// True if `token` is exactly one uppercase ASCII letter.
pub fn is_capital_alone(token: &str) -> bool {
    matches!(token.as_bytes(), [b] if b.is_ascii_uppercase())
}

/// Compute the features of a single token.
pub fn build_vector<'a>(token: &'a str, pos: &'a str, label: &'a str) -> FeatureVector<'a> {
    FeatureVector {
        token,
        pos,
        orthographic: orthographic(token),
        shape: shape(token),
        lexical: lexical(token),
        cap_alone: is_capital_alone(token),
        label,
    }
}

/// Compute feature vectors for every token of `sentence`, in order.
///
/// `pos_tags` must hold exactly one tag per token.
pub fn build_sentence<'a>(
    sentence: &'a Sentence,
    pos_tags: &'a [String],
) -> Result<Vec<FeatureVector<'a>>> {
    check_alignment(sentence, pos_tags)?;

    Ok(sentence
        .tokens()
        .iter()
        .zip(pos_tags)
        .zip(sentence.labels())
        .map(|((token, pos), label)| build_vector(token, pos, label))
        .collect())
}
