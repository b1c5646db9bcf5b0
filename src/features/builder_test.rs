#[cfg(test)]
mod tests {
    use crate::corpus::Sentence;
    use crate::error::CorpusError;
    use crate::features::{
        COMMON_STRINGS, FIELD_COUNT, GREEK_LETTERS, Lexical, Orthographic, build_sentence,
        build_vector, is_capital_alone, lexical, orthographic,
    };

    /// Deterministic token generator over characters the features care about.
    struct TokenGen(u64);

    impl TokenGen {
        const ALPHABET: &'static [u8] = b"abcdeghijklmnoprstuvzACEGIJKLMNPRT0123456789-,:;\\[]()_./";

        fn next_u64(&mut self) -> u64 {
            let mut x = self.0;
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            self.0 = x;
            x
        }

        fn token(&mut self) -> String {
            let len = (self.next_u64() % 12) as usize;
            (0..len)
                .map(|_| {
                    let i = (self.next_u64() % Self::ALPHABET.len() as u64) as usize;
                    Self::ALPHABET[i] as char
                })
                .collect()
        }
    }

    #[test]
    fn test_orthographic_flags() {
        let o = orthographic("IL-2");
        assert!(o.hyphen && o.cap_letter && o.number);
        assert!(!o.comma && !o.backslash && !o.colon && !o.semicolon && !o.bracket && !o.paren);

        assert!(orthographic("a,b").comma);
        assert!(orthographic(r"a\b").backslash);
        assert!(orthographic("a:b").colon);
        assert!(orthographic("a;b").semicolon);
        assert!(orthographic("[").bracket);
        assert!(orthographic("x]").bracket);
        assert!(orthographic("(").paren);
        assert!(orthographic("x)").paren);
        assert!(!orthographic("cells").cap_letter);
    }

    #[test]
    fn test_orthographic_flags_empty_token() {
        assert_eq!(orthographic(""), Orthographic::default());
        assert_eq!(lexical(""), Lexical::default());
    }

    #[test]
    fn test_lexical_terms_case_insensitive() {
        assert!(lexical("NF-KAPPA").greek);
        assert!(lexical("TNF-alpha").greek);
        assert!(lexical("mRNA").rna);
        assert!(lexical("T-Cells").cell);
        assert!(lexical("Genes").gene);
        assert!(lexical("JURKAT").jurkat);
        assert!(lexical("transcription").transcript);
        assert!(lexical("Factors").factor);
        assert!(lexical("IL-2").common_string);
    }

    #[test]
    fn test_common_string_near_misses() {
        assert!(lexical("protein").common_string);
        assert!(lexical("monocyte").common_string);
        assert!(lexical("nucleus").common_string);
        assert!(lexical("integrin").common_string);
        assert!(lexical("macrophage").common_string);
        // "il" without the hyphen is not a match.
        assert!(!lexical("IL2").common_string);
        assert!(!lexical("oil").common_string);
    }

    #[test]
    fn test_every_term_sets_its_flag() {
        for term in GREEK_LETTERS {
            assert!(lexical(term).greek, "term: {term}");
            assert!(lexical(&term.to_uppercase()).greek, "term: {term}");
        }
        for term in COMMON_STRINGS {
            assert!(lexical(term).common_string, "term: {term}");
        }
    }

    #[test]
    fn test_any_lex_matches_union_of_flags() {
        let mut tokens: Vec<String> = GREEK_LETTERS
            .iter()
            .chain(COMMON_STRINGS)
            .chain(&["rna", "cell", "gene", "jurkat", "transcript", "factor"])
            .map(|t| t.to_string())
            .collect();
        tokens.extend(
            ["protein", "monocyte", "IL-2", "IL2", "cel", "genome", "Jurka", "the", ""]
                .iter()
                .map(|t| t.to_string()),
        );
        let mut generator = TokenGen(0x9E37_79B9_7F4A_7C15);
        tokens.extend((0..2000).map(|_| generator.token()));

        for token in &tokens {
            let flags = lexical(token);
            let expected = flags.flags().iter().any(|&f| f);
            assert_eq!(flags.any(), expected, "token: {token:?}");

            let union = GREEK_LETTERS
                .iter()
                .chain(COMMON_STRINGS)
                .chain(&["rna", "cell", "gene", "jurkat", "transcript", "factor"])
                .any(|term| token.to_ascii_lowercase().contains(term));
            assert_eq!(flags.any(), union, "token: {token:?}");
        }
    }

    #[test]
    fn test_capital_alone() {
        assert!(is_capital_alone("B"));
        assert!(!is_capital_alone("b"));
        assert!(!is_capital_alone("BB"));
        assert!(!is_capital_alone("1"));
        assert!(!is_capital_alone(""));
        assert!(!is_capital_alone("É"));
    }

    #[test]
    fn test_build_vector_il2() {
        let v = build_vector("IL-2", "NN", "B-protein");
        assert!(v.orthographic.hyphen);
        assert!(v.lexical.common_string);
        assert!(v.lexical.any());
        assert_eq!(v.shape, "AA_d");
        assert!(!v.cap_alone);

        let fields = v.fields();
        assert_eq!(fields.len(), FIELD_COUNT);
        assert_eq!(fields[0], "IL-2");
        assert_eq!(fields[1], "NN");
        assert_eq!(fields[2], "1"); // hyphen
        assert_eq!(fields[19], "1"); // common_string
        assert_eq!(fields[20], "1"); // any_lex
        assert_eq!(fields[22], "B-protein");
    }

    #[test]
    fn test_build_sentence_preserves_order() {
        let sentence = Sentence::from_pairs(1, 1, [("gene", "I-DNA"), ("expression", "O")]);
        let tags = vec!["NN".to_string(), "NN".to_string()];
        let vectors = build_sentence(&sentence, &tags).unwrap();

        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[0].token, "gene");
        assert_eq!(vectors[0].label, "I-DNA");
        assert!(vectors[0].lexical.gene);
        assert!(vectors[0].lexical.any());
        assert_eq!(vectors[1].token, "expression");
        assert_eq!(vectors[1].label, "O");
        assert!(!vectors[1].lexical.any());
    }

    #[test]
    fn test_build_sentence_rejects_misaligned_tags() {
        let sentence = Sentence::from_pairs(4, 12, [("gene", "O"), ("expression", "O")]);
        let tags = vec!["NN".to_string()];
        match build_sentence(&sentence, &tags) {
            Err(CorpusError::TagAlignment {
                sentence,
                line,
                tokens,
                tags,
            }) => {
                assert_eq!((sentence, line, tokens, tags), (4, 12, 2, 1));
            }
            other => panic!("expected alignment error, got {other:?}"),
        }
    }
}
