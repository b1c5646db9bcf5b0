//! Rule-based Penn Treebank tagger.
//!
//! Pipeline: closed-class lookup → ordered regex guesses → contextual fixes.
//! Deterministic and dependency-free, tuned for biomedical abstracts where
//! most open-class words are nouns, participles, and adjectives.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::PosTagger;
use super::patterns::COMPILED_PATTERNS;

/// Function words grouped by tag.
const CLOSED_CLASS_GROUPS: &[(&str, &[&str])] = &[
    (
        "DT",
        &[
            "the", "a", "an", "this", "that", "these", "those", "each", "every", "some",
            "any", "no", "all", "both", "another", "either", "neither",
        ],
    ),
    (
        "IN",
        &[
            "of", "in", "on", "at", "by", "for", "with", "from", "into", "onto", "upon",
            "within", "without", "between", "among", "through", "during", "after",
            "before", "about", "against", "across", "under", "over", "via", "than",
            "because", "although", "though", "while", "whereas", "if", "since", "unless",
            "until", "as", "like", "per", "whether", "throughout", "toward", "towards",
        ],
    ),
    ("CC", &["and", "or", "but", "nor", "plus"]),
    ("TO", &["to"]),
    ("EX", &["there"]),
    (
        "PRP",
        &[
            "i", "you", "he", "she", "it", "we", "they", "him", "us", "them", "itself",
            "themselves",
        ],
    ),
    ("PRP$", &["its", "their", "our", "his", "her", "my", "your"]),
    ("WDT", &["which", "whatever"]),
    ("WP", &["who", "whom", "what"]),
    ("WP$", &["whose"]),
    ("WRB", &["when", "where", "why", "how"]),
    ("MD", &["can", "could", "may", "might", "must", "shall", "should", "will", "would"]),
    ("VB", &["be"]),
    ("VBZ", &["is", "has", "does", "appears", "seems"]),
    ("VBP", &["are", "have", "do"]),
    ("VBD", &["was", "were", "had", "did"]),
    ("VBN", &["been"]),
    ("VBG", &["being"]),
    (
        "RB",
        &[
            "not", "also", "however", "thus", "therefore", "only", "very", "further",
            "respectively", "previously", "here", "then", "still", "even", "both",
            "together", "moreover", "furthermore", "indeed",
        ],
    ),
    ("RBR", &["more", "less"]),
    ("RBS", &["most", "least"]),
    (
        "CD",
        &[
            "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
        ],
    ),
    ("JJ", &["such", "other", "several", "many", "same", "different", "new"]),
];

/// Function words, keyed by lowercase form.
static CLOSED_CLASS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut words = HashMap::new();
    for (tag, members) in CLOSED_CLASS_GROUPS {
        for word in *members {
            // First group wins for words listed twice.
            words.entry(*word).or_insert(*tag);
        }
    }
    words
});

/// Tags that a word following `to` or a modal is likely to carry by mistake.
const BASE_VERB_CANDIDATES: &[&str] = &["NN", "VBP", "VBN", "VBD"];

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleTagger;

impl RuleTagger {
    pub fn new() -> Self {
        Self
    }

    /// Tag a single word without sentence context.
    pub fn tag_word(&self, word: &str) -> &'static str {
        let lower = word.to_ascii_lowercase();
        if let Some(&tag) = CLOSED_CLASS.get(lower.as_str()) {
            return tag;
        }
        COMPILED_PATTERNS.match_token(word)
    }

    fn apply_context(&self, tokens: &[String], tags: &mut [&'static str]) {
        // A capitalized first word is usually an ordinary word, not a name.
        if let (Some(first), Some(tag)) = (tokens.first(), tags.first_mut()) {
            if *tag == "NNP" && is_title_case(first) {
                *tag = self.tag_word(&first.to_ascii_lowercase());
            }
        }

        for i in 1..tags.len() {
            let previous = tags[i - 1];
            if (previous == "TO" || previous == "MD")
                && BASE_VERB_CANDIDATES.contains(&tags[i])
                && is_lowercase_word(&tokens[i])
            {
                tags[i] = "VB";
            }
        }
    }
}

impl PosTagger for RuleTagger {
    fn tag(&self, tokens: &[String]) -> Vec<String> {
        let mut tags: Vec<&'static str> = tokens.iter().map(|t| self.tag_word(t)).collect();
        self.apply_context(tokens, &mut tags);
        tags.into_iter().map(String::from).collect()
    }

    fn name(&self) -> &str {
        "rules"
    }
}

fn is_title_case(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && chars.clone().any(|c| c.is_ascii_lowercase())
        && !chars.any(|c| c.is_ascii_uppercase())
}

fn is_lowercase_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(words: &[&str]) -> Vec<String> {
        let tokens: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        RuleTagger::new().tag(&tokens)
    }

    #[test]
    fn test_one_tag_per_token() {
        let tags = tag(&["IL-2", "gene", "expression", "requires", "NF-kappaB", "."]);
        assert_eq!(tags.len(), 6);
    }

    #[test]
    fn test_empty_sentence() {
        assert!(tag(&[]).is_empty());
    }

    #[test]
    fn test_closed_class_lookup_is_case_insensitive() {
        let tagger = RuleTagger::new();
        assert_eq!(tagger.tag_word("the"), "DT");
        assert_eq!(tagger.tag_word("The"), "DT");
        assert_eq!(tagger.tag_word("OF"), "IN");
        assert_eq!(tagger.tag_word("and"), "CC");
        assert_eq!(tagger.tag_word("to"), "TO");
        assert_eq!(tagger.tag_word("was"), "VBD");
        // Listed as both DT and RB; the first group wins.
        assert_eq!(tagger.tag_word("both"), "DT");
    }

    #[test]
    fn test_sentence() {
        assert_eq!(
            tag(&["The", "expression", "of", "IL-2", "in", "Jurkat", "cells", "."]),
            ["DT", "NN", "IN", "NN", "IN", "NNP", "NNS", "."]
        );
    }

    #[test]
    fn test_sentence_initial_capital_retagged() {
        assert_eq!(tag(&["Activated", "T", "cells"]), ["VBN", "NNP", "NNS"]);
        // All-caps acronyms keep their tag.
        assert_eq!(tag(&["HIV", "infection"])[0], "NNP");
    }

    #[test]
    fn test_base_verb_after_to_and_modal() {
        assert_eq!(
            tag(&["unable", "to", "activate", "transcription"]),
            ["JJ", "TO", "VB", "NN"]
        );
        assert_eq!(tag(&["may", "bind", "DNA"]), ["MD", "VB", "NNP"]);
        // Names after `to` are left alone.
        assert_eq!(tag(&["to", "IL-2"])[1], "NN");
    }

    #[test]
    fn test_name() {
        assert_eq!(RuleTagger::new().name(), "rules");
    }
}
