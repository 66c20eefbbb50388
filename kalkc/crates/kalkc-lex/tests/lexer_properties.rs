//! Property-based tests for linearizing and tokenizing.

use kalkc_lex::{linearize, tokenize, Category, Line, Token};
use kalkc_util::{CompileError, ComponentId, Indentation};
use proptest::prelude::*;

/// Characters that exercise every lexing mode
const DENSE: &str = "[ \ta-zA-Z0-9:=<>()+\\-*/.?'\"#_|,`]{0,60}";

fn lex(code: &str) -> (Vec<Token>, Vec<CompileError>) {
    let mut errors = Vec::new();
    let tokens = tokenize(&Line::new(1, 0, code), &mut errors);
    (tokens, errors)
}

fn assert_tiles(code: &str, tokens: &[Token]) {
    let len = code.chars().count();
    let mut at = 0;
    for token in tokens {
        assert_eq!(token.from, at, "gap before {} in {:?}", token, code);
        assert!(token.to > token.from, "empty {} in {:?}", token, code);
        at = token.to;
    }
    assert_eq!(at, len, "untiled end of {:?}", code);
}

proptest! {
    #[test]
    fn test_property_tokens_tile_dense_lines(code in DENSE) {
        let (tokens, _) = lex(&code);
        assert_tiles(&code, &tokens);
    }

    #[test]
    fn test_property_tokens_tile_arbitrary_lines(code in "[^\n]{0,80}") {
        let (tokens, _) = lex(&code);
        assert_tiles(&code, &tokens);
    }

    #[test]
    fn test_property_round_trip(code in DENSE) {
        let chars: Vec<char> = code.chars().collect();
        let (tokens, _) = lex(&code);
        let rebuilt: String = tokens.iter().flat_map(|t| chars[t.from..t.to].iter()).collect();
        prop_assert_eq!(rebuilt, code);
    }

    #[test]
    fn test_property_idempotent(code in DENSE) {
        let line = Line::new(3, 1, code.as_str());
        let mut first_errors = Vec::new();
        let mut second_errors = Vec::new();
        let first = tokenize(&line, &mut first_errors);
        let second = tokenize(&line, &mut second_errors);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first_errors, second_errors);
    }

    #[test]
    fn test_property_error_locations_inside_line(code in DENSE) {
        let len = code.chars().count();
        let (_, errors) = lex(&code);
        for error in &errors {
            for location in error.locations().iter() {
                prop_assert_eq!(location.line, 1);
                prop_assert!(location.from < location.to);
                prop_assert!(location.to <= len + 1);
            }
        }
    }

    #[test]
    fn test_property_only_whitespace_has_no_lexeme(code in DENSE) {
        let (tokens, _) = lex(&code);
        for token in tokens {
            prop_assert_eq!(token.lexeme.is_none(), token.category == Category::Whitespace);
        }
    }

    #[test]
    fn test_property_names_are_single_tokens(name in "[a-z][a-z0-9]{0,20}") {
        let (tokens, errors) = lex(&name);
        prop_assert!(errors.is_empty());
        prop_assert_eq!(tokens.len(), 1);
        prop_assert!(matches!(tokens[0].category, Category::UncapitalizedName | Category::Keyword));
    }

    #[test]
    fn test_property_hex_literals(digits in "[0-9a-fA-F]{1,16}") {
        let (tokens, errors) = lex(&format!("0x{}", digits));
        prop_assert!(errors.is_empty());
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].category, Category::HexadecimalInteger);
        prop_assert_eq!(tokens[0].lexeme.as_str(), digits.as_str());
    }

    #[test]
    fn test_property_string_literals(content in "[^\"\\\\\n]{0,60}") {
        let (tokens, errors) = lex(&format!("\"{}\"", content));
        prop_assert!(errors.is_empty());
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].category, Category::String);
        prop_assert_eq!(tokens[0].lexeme.as_str(), content.as_str());
    }

    #[test]
    fn test_property_linearized_lines_are_clean(source in "[ \ta-z#\n]{0,200}", width in 1u8..8) {
        for indentation in [Indentation::Tab, Indentation::spaces(width).unwrap()] {
            let unit = linearize(&source, ComponentId::parse("P"), indentation);
            let mut previous = 0;
            for (nr, line) in unit.lines() {
                prop_assert!(*nr > previous);
                previous = *nr;
                prop_assert!(!line.code().trim().is_empty());
                prop_assert!(!line.code().starts_with(indentation.character()));
                prop_assert!(!line.code().contains('#'));
                prop_assert_eq!(line.code(), line.code().trim_end());
            }
        }
    }
}
