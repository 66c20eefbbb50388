//! Core error types for kalkc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for diagnostic operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagnosticError {
    /// No message template is registered for the code
    #[error("'{abbr}.{issue}' is not a valid error code (number {number})")]
    InvalidCode {
        abbr: &'static str,
        issue: u8,
        number: u16,
    },

    /// Phase digit outside of the known phases
    #[error("Invalid phase: {0}")]
    InvalidPhase(u8),
}

/// Error type for compiler presets
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PresetError {
    /// Space indentation of width zero
    #[error("Indentation width must be positive")]
    ZeroIndentWidth,

    /// Unparseable indentation setting
    #[error("Invalid indentation '{0}': expected 'tab' or a positive number of spaces")]
    InvalidIndentation(String),
}

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;

/// Result type alias for preset operations
pub type PresetResult<T> = std::result::Result<T, PresetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_code_display() {
        let err = DiagnosticError::InvalidCode {
            abbr: "S",
            issue: 99,
            number: 299,
        };
        assert_eq!(
            err.to_string(),
            "'S.99' is not a valid error code (number 299)"
        );
    }

    #[test]
    fn test_preset_error_display() {
        assert_eq!(
            PresetError::ZeroIndentWidth.to_string(),
            "Indentation width must be positive"
        );
        assert!(PresetError::InvalidIndentation("wide".into())
            .to_string()
            .contains("'wide'"));
    }
}
