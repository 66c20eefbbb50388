//! Error handling module for the kalkt CLI.
//!
//! Lexical problems in the source are not errors of the tool: they are
//! printed as diagnostics. Only a failed `check` turns them into
//! [`KalktError::CompileErrors`].

use kalkc_lex::LexError;
use thiserror::Error;

/// Main error type for the kalkt CLI application.
#[derive(Error, Debug)]
pub enum KalktError {
    /// Error when a configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when reading a source file fails.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when a unit is driven through its stages out of order.
    #[error("Lexer error: {0}")]
    Lex(#[from] LexError),

    /// The checked source has lexical errors.
    #[error("{0} lexical error(s) found")]
    CompileErrors(usize),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using KalktError.
pub type Result<T> = std::result::Result<T, KalktError>;
