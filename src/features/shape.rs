//! Word shape normalization.
//!
//! Rewrites a token into a coarse shape string: capitals become `A`,
//! lowercase letters `a` (runs longer than three capped at `aaa`), digits `d`
//! and anything else `_`. The passes run in a fixed order over the output of
//! the previous pass.

use std::sync::LazyLock;

use regex::Regex;

static UPPERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new("[A-Z]").unwrap());
static LOWERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new("[a-z]").unwrap());
static LONG_LOWER_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new("a{4,}").unwrap());
static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new("[0-9]").unwrap());
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new("[^A-Za-z0-9_]").unwrap());

/// Normalize `token` into its word shape.
///
/// Only ASCII letters and digits are classified; every other character,
/// including non-ASCII letters, becomes one `_`.
pub fn shape(token: &str) -> String {
    let shaped = UPPERCASE.replace_all(token, "A");
    let shaped = LOWERCASE.replace_all(&shaped, "a");
    let shaped = LONG_LOWER_RUN.replace_all(&shaped, "aaa");
    let shaped = DIGIT.replace_all(&shaped, "d");
    let shaped = NON_WORD.replace_all(&shaped, "_");
    shaped.into_owned()
}
