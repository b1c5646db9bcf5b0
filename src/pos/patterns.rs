//! Regex patterns for open-class POS guessing.
//!
//! Patterns are tried in order and the first match wins; tokens nothing
//! matches are common nouns. Closed-class words never reach this table, see
//! the closed-class table in `rules`.

use std::sync::LazyLock;

use regex::Regex;

/// A compiled pattern entry: regex + the Penn Treebank tag it maps to.
struct PatternEntry {
    regex: Regex,
    tag: &'static str,
}

/// All compiled patterns, in order. First match wins.
pub(super) struct CompiledPatterns {
    patterns: Vec<PatternEntry>,
}

impl CompiledPatterns {
    /// Returns `NN` if no pattern matches (catch-all).
    pub(super) fn match_token(&self, value: &str) -> &'static str {
        for entry in &self.patterns {
            if entry.regex.is_match(value) {
                return entry.tag;
            }
        }
        "NN"
    }
}

/// Global compiled patterns, initialized once.
pub(super) static COMPILED_PATTERNS: LazyLock<CompiledPatterns> = LazyLock::new(|| {
    let patterns = build_pattern_list()
        .into_iter()
        .map(|(regex_str, tag)| PatternEntry {
            regex: Regex::new(regex_str)
                .unwrap_or_else(|e| panic!("Failed to compile regex '{}': {}", regex_str, e)),
            tag,
        })
        .collect();
    CompiledPatterns { patterns }
});

/// The ordered list of (regex, tag) pairs.
fn build_pattern_list() -> Vec<(&'static str, &'static str)> {
    vec![
        // Punctuation. `...` before the sentence-final rule.
        (r"^\.\.\.$", ":"),
        (r"^[.!?]+$", "."),
        (r"^,$", ","),
        (r"^(:|;|-+)$", ":"),
        (r"^[(\[{]$", "("),
        (r"^[)\]}]$", ")"),
        (r#"^(``|")$"#, "``"),
        (r"^''$", "''"),
        (r"^\$$", "$"),
        (r"^#$", "#"),
        (r"^[%&*+/<=>@^|~]+$", "SYM"),
        // Numbers: 5, -0.3, 1,000, 1/2, 25%.
        (r"^[+\-]?[0-9]+([.,/:][0-9]+)*%?$", "CD"),
        (r"^[0-9]+(st|nd|rd|th)$", "JJ"),
        (r"^[0-9]+[\-/][0-9]+$", "CD"),
        // Compound modifiers: NF-kappaB-dependent, LPS-induced, T-cell-specific.
        (
            r"(?i)^[a-z0-9]+(-[a-z0-9]+)*-(dependent|independent|induced|mediated|specific|like|related|associated|binding|derived|positive|negative|responsive|inducible|activated|stimulated|treated|containing)$",
            "JJ",
        ),
        // Alphanumeric names: IL-2, p50, CD28, 3H.
        (r"[0-9]", "NN"),
        // Mixed case: mRNA, NFkappaB, cDNA.
        (r"^[a-z]+[A-Z][A-Za-z]*$", "NN"),
        // Acronyms and capitalized words.
        (r"^[A-Z][A-Z\-]+s$", "NNPS"),
        (r"^[A-Z][A-Z\-]*$", "NNP"),
        (r"^[A-Z][a-z]+(-[A-Za-z]+)*$", "NNP"),
        // Suffix morphology on lowercase words.
        (r"^[a-z\-]+(sis|ss|us)$", "NN"),
        (r"^[a-z\-]+(ment|ness|tion|sion|ity|ism|ance|ence|ure|ogy|ase)s$", "NNS"),
        (r"^[a-z\-]+(ment|ness|tion|sion|ity|ism|ance|ence|ure|ogy|ase)$", "NN"),
        (r"^[a-z\-]+ly$", "RB"),
        (r"^[a-z\-]+ing$", "VBG"),
        (r"^[a-z\-]+ed$", "VBN"),
        (r"^[a-z\-]+(ous|ive|able|ible|ical|ic|ful|less|ary|ory|al|ant|ent|ar)$", "JJ"),
        (r"^[a-z\-]+(ize|ise|ify)$", "VB"),
        (r"^[a-z\-]+(izes|ises|ifies)$", "VBZ"),
        (r"^[a-z\-]*[^su\-]s$", "NNS"),
    ]
}
