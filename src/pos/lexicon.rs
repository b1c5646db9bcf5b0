//! Lookup-table tagger loaded from a `token<TAB>tag` file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{CorpusError, Result};

use super::{PosTagger, RuleTagger};

/// Tags tokens found in a lexicon by exact match and defers the rest to
/// [`RuleTagger`].
///
/// The lexicon format is one `token tag` pair per line, separated by
/// whitespace. Blank lines and lines starting with `#` are skipped. When a
/// token is listed twice the later entry wins.
#[derive(Debug, Clone, Default)]
pub struct LexiconTagger {
    entries: HashMap<String, String>,
    fallback: RuleTagger,
}

impl LexiconTagger {
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| CorpusError::Lexicon {
            path: path.to_path_buf(),
            line: 0,
            reason: e.to_string(),
        })?;
        let tagger = Self::parse(&content, path)?;
        debug!("Loaded {} POS lexicon entries from {:?}", tagger.len(), path);
        Ok(tagger)
    }

    /// Parse lexicon text. `path` is only used in error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let mut entries = HashMap::new();
        for (index, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = trimmed.split_whitespace().collect();
            let [token, tag] = fields.as_slice() else {
                return Err(CorpusError::Lexicon {
                    path: path.to_path_buf(),
                    line: index + 1,
                    reason: format!("expected `token tag`, found {} fields", fields.len()),
                });
            };
            entries.insert(token.to_string(), tag.to_string());
        }
        Ok(Self {
            entries,
            fallback: RuleTagger::new(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, tokens: &[String]) -> Vec<String> {
        let mut tags = self.fallback.tag(tokens);
        for (token, tag) in tokens.iter().zip(tags.iter_mut()) {
            if let Some(entry) = self.entries.get(token) {
                tag.clone_from(entry);
            }
        }
        tags
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_lexicon_overrides_rules() {
        let tagger =
            LexiconTagger::parse("# biomedical verbs\nbind\tVBP\n\nJurkat NNP\n", Path::new("x"))
                .unwrap();
        assert_eq!(tagger.len(), 2);
        assert_eq!(
            tagger.tag(&tokens(&["proteins", "bind", "Jurkat", "DNA"])),
            ["NNS", "VBP", "NNP", "NNP"]
        );
        assert_eq!(tagger.name(), "lexicon");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let tagger = LexiconTagger::parse("gene\tVB\n", Path::new("x")).unwrap();
        assert_eq!(tagger.tag(&tokens(&["Gene", "gene"]))[1], "VB");
        assert_ne!(tagger.tag(&tokens(&["Gene", "gene"]))[0], "VB");
    }

    #[test]
    fn test_later_entry_wins() {
        let tagger = LexiconTagger::parse("cells NN\ncells NNS\n", Path::new("x")).unwrap();
        assert_eq!(tagger.len(), 1);
        assert_eq!(tagger.tag(&tokens(&["cells"])), ["NNS"]);
    }

    #[test]
    fn test_malformed_line_reports_position() {
        let err = LexiconTagger::parse("gene NN\nbroken\n", Path::new("lex.tsv")).unwrap_err();
        match err {
            CorpusError::Lexicon { path, line, .. } => {
                assert_eq!(path, Path::new("lex.tsv"));
                assert_eq!(line, 2);
            }
            other => panic!("expected lexicon error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "IL-2\tNN").unwrap();
        writeln!(file, "activate\tVB").unwrap();
        let tagger = LexiconTagger::from_path(file.path()).unwrap();
        assert_eq!(tagger.len(), 2);
        assert!(!tagger.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = LexiconTagger::from_path(Path::new("/nonexistent/lexicon.tsv")).unwrap_err();
        assert!(matches!(err, CorpusError::Lexicon { line: 0, .. }));
    }
}
