//! Diagnostic module - Compile error reporting infrastructure.
//!
//! This module provides types for creating and collecting compile errors.
//! A [`CompileError`] is identified by its [`Phase`] and a two-digit issue
//! code, carries zero, one or two source locations, and renders its message
//! from a registered template.
//!
//! # Examples
//!
//! ## Constructing a checked error
//!
//! ```
//! use kalkc_util::diagnostic::{CompileError, ErrorLocation, Locations, Phase};
//!
//! let location = ErrorLocation::new(3, 0, 4, 5);
//! let error = CompileError::new(Phase::Parsing, 13, Locations::Single(location), &[]).unwrap();
//! assert_eq!(error.code(), "S.13");
//! assert_eq!(error.message(), "illegal character");
//!
//! assert!(CompileError::new(Phase::Parsing, 99, Locations::None, &[]).is_err());
//! ```

mod codes;
mod phase;

pub use codes::{error_number, message_template, substitute, SyntaxIssue, MESSAGES, WILDCARD};
pub use phase::Phase;

use std::fmt;

use crate::error::{DiagnosticError, DiagnosticResult};

// ============================================================================
// LOCATIONS
// ============================================================================

/// Position of an error inside one logical line
///
/// Columns are character offsets into the line's code text, half-open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ErrorLocation {
    /// 1-based source line number
    pub line: u32,
    /// Indentation level of the line
    pub level: usize,
    /// First column (inclusive)
    pub from: usize,
    /// Last column (exclusive)
    pub to: usize,
}

impl ErrorLocation {
    /// Create a new location
    ///
    /// # Arguments
    ///
    /// * `line` - 1-based source line number
    /// * `level` - Indentation level of that line
    /// * `from` - First column, inclusive
    /// * `to` - Last column, exclusive
    #[inline]
    pub const fn new(line: u32, level: usize, from: usize, to: usize) -> Self {
        Self {
            line,
            level,
            from,
            to,
        }
    }

    /// Number of columns covered
    #[inline]
    pub const fn width(&self) -> usize {
        self.to.saturating_sub(self.from)
    }
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:L{}+{}:{}", self.line, self.level, self.from + 1, self.to + 1)
    }
}

/// Source locations attached to an error
///
/// Build-level errors have none; most lexical errors point at a single
/// range; missing-demarcation errors point at both sides of a gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Locations {
    #[default]
    None,
    Single(ErrorLocation),
    Pair(ErrorLocation, ErrorLocation),
}

impl Locations {
    /// Number of locations
    pub const fn len(&self) -> usize {
        match self {
            Locations::None => 0,
            Locations::Single(_) => 1,
            Locations::Pair(..) => 2,
        }
    }

    /// Returns true if there is no location
    pub const fn is_empty(&self) -> bool {
        matches!(self, Locations::None)
    }

    /// First location, if any
    pub const fn first(&self) -> Option<&ErrorLocation> {
        match self {
            Locations::None => None,
            Locations::Single(location) | Locations::Pair(location, _) => Some(location),
        }
    }

    /// Last location, if any
    pub const fn last(&self) -> Option<&ErrorLocation> {
        match self {
            Locations::None => None,
            Locations::Single(location) | Locations::Pair(_, location) => Some(location),
        }
    }

    /// Iterate over the locations in order
    pub fn iter(&self) -> impl Iterator<Item = &ErrorLocation> {
        let (first, second) = match self {
            Locations::None => (None, None),
            Locations::Single(a) => (Some(a), None),
            Locations::Pair(a, b) => (Some(a), Some(b)),
        };
        first.into_iter().chain(second)
    }
}

// ============================================================================
// COMPILE ERROR
// ============================================================================

/// An error raised while compiling a component
///
/// The error number `phase * 100 + issue` is guaranteed to have a registered
/// message template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileError {
    phase: Phase,
    issue: u8,
    locations: Locations,
    ids: Vec<String>,
}

impl CompileError {
    /// Create an error, checking that its code is registered
    ///
    /// # Arguments
    ///
    /// * `phase` - Phase that raised the error
    /// * `issue` - Two-digit issue code
    /// * `locations` - Where the error occurred
    /// * `ids` - Identifiers substituted into the message, in order
    ///
    /// # Returns
    ///
    /// `DiagnosticError::InvalidCode` if no template exists for the code.
    pub fn new(
        phase: Phase,
        issue: u8,
        locations: Locations,
        ids: &[&str],
    ) -> DiagnosticResult<Self> {
        let number = error_number(phase, issue);
        if issue >= 100 || message_template(number).is_none() {
            return Err(DiagnosticError::InvalidCode {
                abbr: phase.abbr(),
                issue,
                number,
            });
        }

        Ok(Self {
            phase,
            issue,
            locations,
            ids: ids.iter().map(|id| (*id).to_owned()).collect(),
        })
    }

    /// Create a parsing-phase error from a typed issue
    ///
    /// # Examples
    ///
    /// ```
    /// use kalkc_util::diagnostic::{CompileError, Locations, SyntaxIssue};
    ///
    /// let error = CompileError::syntax(SyntaxIssue::UnknownPunctuation, Locations::None);
    /// assert_eq!(error.number(), 228);
    /// ```
    pub fn syntax(issue: SyntaxIssue, locations: Locations) -> Self {
        Self {
            phase: Phase::Parsing,
            issue: issue.code(),
            locations,
            ids: Vec::new(),
        }
    }

    /// Phase that raised the error
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Two-digit issue code
    #[inline]
    pub fn issue(&self) -> u8 {
        self.issue
    }

    /// Public error number (`phase * 100 + issue`)
    #[inline]
    pub fn number(&self) -> u16 {
        error_number(self.phase, self.issue)
    }

    /// Error code as shown to programmers, e.g. `S.13`
    pub fn code(&self) -> String {
        format!("{}.{}", self.phase.abbr(), self.issue)
    }

    /// Source locations
    #[inline]
    pub fn locations(&self) -> &Locations {
        &self.locations
    }

    /// Identifiers substituted into the message
    #[inline]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Template the message is rendered from
    pub fn template(&self) -> &'static str {
        message_template(self.number()).unwrap_or(WILDCARD)
    }

    /// Message with all identifiers inserted
    pub fn message(&self) -> String {
        substitute(self.template(), &self.ids)
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.phase.name(), self.code(), self.message())?;
        for location in self.locations.iter() {
            write!(f, " @ {}", location)?;
        }
        Ok(())
    }
}

// ============================================================================
// SINKS
// ============================================================================

/// Destination for errors raised during a pass
pub trait ErrorSink {
    /// Record one error
    fn report(&mut self, error: CompileError);
}

impl ErrorSink for Vec<CompileError> {
    fn report(&mut self, error: CompileError) {
        self.push(error);
    }
}

static_assertions::assert_impl_all!(CompileError: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    fn at(from: usize, to: usize) -> ErrorLocation {
        ErrorLocation::new(1, 0, from, to)
    }

    #[test]
    fn test_new_accepts_registered_code() {
        let err = CompileError::new(Phase::Building, 4, Locations::None, &["--indent"]).unwrap();
        assert_eq!(err.number(), 104);
        assert_eq!(err.code(), "B.4");
        assert_eq!(err.message(), "wrong argument for option --indent");
    }

    #[test]
    fn test_new_rejects_unknown_code() {
        let err = CompileError::new(Phase::Resolving, 1, Locations::None, &[]).unwrap_err();
        assert_eq!(
            err,
            DiagnosticError::InvalidCode {
                abbr: "N",
                issue: 1,
                number: 301
            }
        );
    }

    #[test]
    fn test_new_rejects_three_digit_issue() {
        // 100 + 113 would alias 213 on the parsing phase
        assert!(CompileError::new(Phase::Building, 113, Locations::None, &[]).is_err());
    }

    #[test]
    fn test_syntax_error_code() {
        let err = CompileError::syntax(SyntaxIssue::IllegalCharacter, Locations::Single(at(2, 3)));
        assert_eq!(err.phase(), Phase::Parsing);
        assert_eq!(err.code(), "S.13");
        assert_eq!(err.number(), 213);
        assert_eq!(err.locations().len(), 1);
    }

    #[test]
    fn test_message_keeps_surplus_markers() {
        let err = CompileError::new(Phase::Parsing, 8, Locations::None, &[]).unwrap();
        assert_eq!(err.message(), "too long string literal for type #");
    }

    #[test]
    fn test_locations_iteration() {
        assert_eq!(Locations::None.iter().count(), 0);
        assert_eq!(Locations::Single(at(0, 1)).iter().count(), 1);

        let pair = Locations::Pair(at(3, 4), at(4, 5));
        let froms: Vec<_> = pair.iter().map(|l| l.from).collect();
        assert_eq!(froms, vec![3, 4]);
        assert_eq!(pair.first().map(|l| l.from), Some(3));
        assert_eq!(pair.last().map(|l| l.from), Some(4));
        assert!(!pair.is_empty());
    }

    #[test]
    fn test_location_display_is_one_based() {
        assert_eq!(ErrorLocation::new(7, 2, 0, 3).to_string(), "7:L2+1:4");
        assert_eq!(ErrorLocation::new(7, 2, 0, 3).width(), 3);
    }

    #[test]
    fn test_display() {
        let err = CompileError::syntax(SyntaxIssue::IllegalTab, Locations::Single(at(4, 5)));
        assert_eq!(
            err.to_string(),
            "Syntax Error S.12: illegal tabulator character @ 1:L0+5:6"
        );
    }

    #[test]
    fn test_vec_is_a_sink() {
        let mut sink: Vec<CompileError> = Vec::new();
        sink.report(CompileError::syntax(SyntaxIssue::UnknownStringPrefix, Locations::None));
        assert_eq!(sink[0].number(), 227);
    }
}
