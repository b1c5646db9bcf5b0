//! Part-of-speech tagging.
//!
//! Feature extraction needs one POS tag per token, computed over the whole
//! sentence. Any tagger can be plugged in through [`PosTagger`]; the crate
//! ships a rule-based [`RuleTagger`] and a lookup-table [`LexiconTagger`].

mod lexicon;
mod patterns;
mod rules;

pub use lexicon::LexiconTagger;
pub use rules::RuleTagger;

use crate::corpus::Sentence;
use crate::error::{CorpusError, Result};

/// Maps a sentence's tokens to POS tags.
///
/// Implementations must return exactly one tag per token, in token order.
/// The pipeline verifies the length and aborts the run on a mismatch.
pub trait PosTagger: Send + Sync {
    fn tag(&self, tokens: &[String]) -> Vec<String>;

    /// Short name recorded in run reports.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> PosTagger for F
where
    F: Fn(&[String]) -> Vec<String> + Send + Sync,
{
    fn tag(&self, tokens: &[String]) -> Vec<String> {
        self(tokens)
    }
}

/// Ensure `tags` lines up with the tokens of `sentence`.
pub fn check_alignment(sentence: &Sentence, tags: &[String]) -> Result<()> {
    if tags.len() == sentence.len() {
        return Ok(());
    }
    Err(CorpusError::TagAlignment {
        sentence: sentence.ordinal,
        line: sentence.start_line,
        tokens: sentence.len(),
        tags: tags.len(),
    })
}

/// Tag `sentence` and verify the result.
pub fn tag_sentence(tagger: &dyn PosTagger, sentence: &Sentence) -> Result<Vec<String>> {
    let tags = tagger.tag(sentence.tokens());
    check_alignment(sentence, &tags)?;
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_tagger() {
        let tagger = |tokens: &[String]| vec!["NN".to_string(); tokens.len()];
        let sentence = Sentence::from_pairs(1, 1, [("gene", "O"), ("cells", "O")]);
        assert_eq!(tag_sentence(&tagger, &sentence).unwrap(), ["NN", "NN"]);
        assert_eq!(tagger.name(), "custom");
    }

    #[test]
    fn test_short_tag_sequence_rejected() {
        let tagger = |_: &[String]| vec!["NN".to_string()];
        let sentence = Sentence::from_pairs(2, 5, [("gene", "O"), ("cells", "O")]);
        match tag_sentence(&tagger, &sentence) {
            Err(CorpusError::TagAlignment { tokens, tags, .. }) => {
                assert_eq!((tokens, tags), (2, 1));
            }
            other => panic!("expected alignment error, got {other:?}"),
        }
    }

    #[test]
    fn test_long_tag_sequence_rejected() {
        let tagger = |tokens: &[String]| vec!["NN".to_string(); tokens.len() + 1];
        let sentence = Sentence::from_pairs(1, 1, [("gene", "O")]);
        assert!(tag_sentence(&tagger, &sentence).is_err());
    }
}
