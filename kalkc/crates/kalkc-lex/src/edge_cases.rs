//! Edge case tests for kalkc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Category, Line, Punctuation, Token};
    use kalkc_util::CompileError;

    fn lex(code: &str) -> (Vec<Token>, Vec<u8>) {
        let mut errors: Vec<CompileError> = Vec::new();
        let tokens = tokenize(&Line::new(1, 0, code), &mut errors);
        (tokens, errors.iter().map(CompileError::issue).collect())
    }

    fn raw(code: &str, tokens: &[Token]) -> String {
        let chars: Vec<char> = code.chars().collect();
        tokens.iter().flat_map(|t| chars[t.from..t.to].iter()).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_single_characters() {
        for code in ["a", "Z", "7", "(", ":", "-", "=", "`", "\"", "'", "#", " "] {
            let (tokens, _) = lex(code);
            assert_eq!(tokens.len(), 1, "{:?}", code);
            assert_eq!((tokens[0].from, tokens[0].to), (0, 1), "{:?}", code);
        }
    }

    #[test]
    fn test_edge_long_name() {
        let name = "a".repeat(10_000);
        let (tokens, issues) = lex(&name);
        assert!(issues.is_empty());
        assert_eq!(tokens[0].len(), 10_000);
    }

    #[test]
    fn test_edge_unicode_names() {
        let (tokens, issues) = lex("Straße größe Ωmega жук");
        assert!(issues.is_empty());
        let names: Vec<Category> = tokens
            .iter()
            .filter(|t| t.category != Category::Whitespace)
            .map(|t| t.category)
            .collect();
        assert_eq!(
            names,
            vec![
                Category::CapitalizedName,
                Category::UncapitalizedName,
                Category::CapitalizedName,
                Category::UncapitalizedName,
            ]
        );
        assert_eq!((tokens[2].from, tokens[2].to), (7, 12));
    }

    #[test]
    fn test_edge_empty_literals() {
        let (tokens, issues) = lex("\"\" ''");
        assert!(issues.is_empty());
        assert_eq!(tokens[0].lexeme.as_str(), "");
        assert_eq!(tokens[2].category, Category::RawString);
        assert_eq!(tokens[2].lexeme.as_str(), "");
    }

    #[test]
    fn test_edge_lone_quote_closes_at_end() {
        let (tokens, issues) = lex("'");
        assert!(issues.is_empty());
        assert_eq!(tokens[0].category, Category::RawString);
        assert_eq!(tokens[0].lexeme.as_str(), "");
    }

    #[test]
    fn test_edge_hash_inside_string_is_content() {
        let (tokens, _) = lex("\"a # b\"");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].lexeme.as_str(), "a # b");
    }

    #[test]
    fn test_edge_trailing_point() {
        let (tokens, issues) = lex("3.");
        assert!(issues.is_empty());
        assert_eq!(tokens[1].category, Category::Fraction);
        assert_eq!(tokens[1].lexeme.as_str(), "");
    }

    #[test]
    fn test_edge_binary_fraction_digits() {
        let (_, issues) = lex("0b1.012");
        assert_eq!(issues, vec![16]);
    }

    #[test]
    fn test_edge_hex_prefix_uppercase() {
        let (tokens, issues) = lex("0XaB B'10'");
        assert!(issues.is_empty());
        assert_eq!(tokens[0].category, Category::HexadecimalInteger);
        assert_eq!(tokens[0].lexeme.as_str(), "aB");
        assert_eq!(tokens[2].category, Category::Binary);
    }

    #[test]
    fn test_edge_radix_prefix_without_digits() {
        let (tokens, issues) = lex("0b 0x");
        assert!(issues.is_empty());
        assert_eq!(tokens[0].category, Category::BinaryInteger);
        assert_eq!(tokens[0].lexeme.as_str(), "");
        assert_eq!((tokens[0].from, tokens[0].to), (0, 2));
        assert_eq!(tokens[2].category, Category::HexadecimalInteger);
        assert_eq!(tokens[2].lexeme.as_str(), "");
        assert_eq!((tokens[2].from, tokens[2].to), (3, 5));
    }

    #[test]
    fn test_edge_hex_prefix_then_point() {
        let (tokens, issues) = lex("0x.");
        assert!(issues.is_empty());
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].category, Category::HexadecimalInteger);
        assert_eq!(tokens[0].lexeme.as_str(), "");
        assert_eq!(tokens[1].category, Category::Fraction);
        assert_eq!((tokens[1].from, tokens[1].to), (2, 3));
    }

    #[test]
    fn test_edge_zero_then_other_letter() {
        let (tokens, issues) = lex("0o7");
        assert_eq!(issues, vec![15]);
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].invalid);
    }

    #[test]
    fn test_edge_repetend_then_second_paren() {
        let (tokens, issues) = lex("0.(3(");
        assert_eq!(issues, vec![21]);
        assert!(tokens.last().is_some_and(|t| t.is_punctuation(Punctuation::TupleBegin)));
    }

    #[test]
    fn test_edge_symbol_runs() {
        let (tokens, issues) = lex("::=");
        assert!(issues.is_empty());
        assert!(tokens[0].is_punctuation(Punctuation::TypeHinter));
        assert!(tokens[1].is_punctuation(Punctuation::Definer));

        let (tokens, _) = lex("---x");
        assert!(tokens[0].is_punctuation(Punctuation::Reducing));
        assert_eq!(tokens.last().map(|t| t.category), Some(Category::Label));
    }

    #[test]
    fn test_edge_tabs_only() {
        let (tokens, issues) = lex("\t\t");
        assert_eq!(issues, vec![11, 12]);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].to, 2);
    }

    #[test]
    fn test_edge_illegal_characters_tile() {
        let code = "x€y ° \u{0}";
        let (tokens, issues) = lex(code);
        assert_eq!(raw(code, &tokens), code);
        assert_eq!(issues, vec![14, 13, 13]);
    }

    #[test]
    fn test_edge_documentation_only() {
        let (tokens, issues) = lex("###");
        assert!(issues.is_empty());
        assert_eq!(tokens[0].category, Category::Documentation);
        assert_eq!(tokens[0].lexeme.as_str(), "");
    }
}
