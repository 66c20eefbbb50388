//! Error types for the kalkc-lex crate
//!
//! Lexical problems in source text are never returned as `Err`; they are
//! reported as [`kalkc_util::CompileError`]s. The errors here guard the
//! once-only lifecycle of lines and units.

use thiserror::Error;

/// Error type for lexing operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// Tokens were attached to a line a second time
    #[error("Line {line} has already been tokenized")]
    AlreadyTokenized { line: u32 },

    /// A unit was tokenized a second time
    #[error("Component '{component}' has already been tokenized")]
    UnitAlreadyTokenized { component: String },
}

/// Result type alias for lexing operations
pub type LexResult<T> = std::result::Result<T, LexError>;
