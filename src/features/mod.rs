//! Feature extraction for IOB-tagged tokens.
//!
//! Every token becomes a fixed row of columns:
//! 1. The token and its POS tag
//! 2. Nine orthographic flags (hyphen, comma, capital, digit, backslash,
//!    colon, semicolon, bracket, parenthesis)
//! 3. The normalized word shape
//! 4. Eight domain vocabulary flags plus their union
//! 5. A standalone-capital flag and the gold IOB label

mod builder;
mod matcher;
mod shape;
mod template;
mod types;

#[cfg(test)]
mod builder_test;

pub use builder::{
    COMMON_STRINGS, GREEK_LETTERS, build_sentence, build_vector, is_capital_alone, lexical,
    orthographic,
};
pub use matcher::{BoolPattern, any_of, matches};
pub use shape::shape;
pub use template::{template, write_template};
pub use types::{FIELD_COUNT, FIELD_NAMES, FeatureVector, Lexical, Orthographic, column, flag};
