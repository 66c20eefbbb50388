//! kalkc-lex - Lexical Analyzer for the Kalkyl Programming Language
//!
//! This crate turns the source text of one component into logical lines and
//! each line into categorized tokens, reporting every lexical problem as a
//! located [`CompileError`](kalkc_util::CompileError) instead of stopping.
//!
//! # Overview
//!
//! Lexing runs in two passes:
//!
//! 1. [`linearize`] splits the text into [`Line`]s, measuring and removing
//!    indentation and dropping blank and comment lines.
//! 2. [`Unit::tokenize`] runs the lexer state machine over every line,
//!    optionally in parallel, attaching tokens and collecting errors.
//!
//! # Example Usage
//!
//! ```
//! use kalkc_lex::{lex, Category};
//! use kalkc_util::{ComponentId, Presets};
//!
//! let source = "type Point\n\tx: Integer = 0x1F\n";
//! let unit = lex(source, ComponentId::parse("Geometry"), &Presets::default()).unwrap();
//!
//! assert!(!unit.has_errors());
//! let categories: Vec<Category> = unit
//!     .tokens()
//!     .filter(|(_, t)| t.category != Category::Whitespace)
//!     .map(|(_, t)| t.category)
//!     .collect();
//! assert_eq!(categories[0], Category::Keyword);
//! assert_eq!(categories.last(), Some(&Category::HexadecimalInteger));
//! ```
//!
//! # Module Structure
//!
//! - [`codepoint`] - Character classification
//! - [`token`] - Keyword and punctuation registries, token model
//! - [`cursor`] - Character cursor over one line
//! - [`line`] / [`unit`] - Lexed state of lines and components
//! - [`linearizer`] - Source text to lines
//! - [`lexer`] - Per-line state machine
//!
//! # Token Categories
//!
//! - **Whitespace**: runs of spaces (tabs are reported but kept)
//! - **Keyword**: `if`, `type`, `is?`, ... (52 total)
//! - **Punctuation**: `:`, `::`, `->`, `=<`, ... (54 total)
//! - **Names**: `value`, `Point`, labels `-size`, predicates `empty?`
//! - **Numbers**: `42`, `0b1010`, `0x1F`, fractions `3.14`, repetends `0.(3)`
//! - **Quoted**: `"text"`, raw `'text'`, `b'0101'`, `x'ff'`
//! - **Documentation**: `# ...` to the end of the line

pub mod codepoint;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod line;
pub mod linearizer;
pub mod token;
pub mod unit;

mod edge_cases;

// Re-export main types for convenience
pub use codepoint::{Codepoint, Presort};
pub use error::{LexError, LexResult};
pub use lexer::tokenize;
pub use line::Line;
pub use linearizer::linearize;
pub use token::{Category, Keyword, Lexeme, Punctuation, Reserved, Token};
pub use unit::{Stage, Unit};

use kalkc_util::{ComponentId, Presets};

/// Linearizes and tokenizes one component.
///
/// # Errors
///
/// Lexical problems end up in [`Unit::errors`]; the result is only an `Err`
/// when the unit's lifecycle is violated, which cannot happen for a fresh
/// unit.
pub fn lex(source: &str, id: ComponentId, presets: &Presets) -> LexResult<Unit> {
    let mut unit = linearize(source, id, presets.indentation);
    unit.tokenize(presets.parallel)?;
    Ok(unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kalkc_util::{CompileError, Indentation};

    const COLLATZ: &str = "\
## Collatz sequence
component Test.Collatz

collatz(n: Integer) :: Integer
\tif n = 1 then return 0      # done
\tlet next = if even? n then n // 2 else 3 * n + 1
\treturn 1 + collatz next
";

    #[test]
    fn test_collatz_program() {
        let unit = lex(COLLATZ, ComponentId::parse("Test.Collatz"), &Presets::default()).unwrap();

        assert!(!unit.has_errors(), "{:?}", unit.errors());
        assert_eq!(unit.lines().keys().copied().collect::<Vec<_>>(), vec![2, 4, 5, 6, 7]);
        assert_eq!(unit.line(5).map(Line::level), Some(1));

        let tokens: Vec<&Token> = unit.tokens().map(|(_, t)| t).collect();
        assert!(tokens.iter().any(|t| t.is_keyword(Keyword::Component)));
        assert!(tokens.iter().any(|t| t.is_punctuation(Punctuation::TypeHinter)));
        assert!(tokens.iter().any(|t| t.is_punctuation(Punctuation::Extracting)));
        assert!(tokens.iter().any(|t| t.category == Category::Predicate));
        assert!(tokens.iter().all(|t| !t.invalid));
    }

    #[test]
    fn test_lex_with_spaces() {
        let presets = Presets {
            indentation: Indentation::spaces(2).unwrap(),
            parallel: true,
        };
        let unit = lex("a\n  b\n", ComponentId::default(), &presets).unwrap();
        assert_eq!(unit.line(2).map(Line::level), Some(1));
        assert_eq!(unit.stage(), Stage::Tokenized);
    }

    #[test]
    fn test_errors_reach_the_unit() {
        let unit = lex("x = 12a\n\ty\tz", ComponentId::default(), &Presets::default()).unwrap();
        let codes: Vec<String> = unit.errors().iter().map(CompileError::code).collect();
        assert_eq!(codes, vec!["S.15", "S.12"]);
    }
}
