//! Compilation phases that diagnostics are attributed to.

use std::fmt;

use crate::error::{DiagnosticError, DiagnosticResult};

/// Compiler phase a diagnostic belongs to
///
/// The phase digit is the hundreds digit of the public error number, so an
/// issue `13` raised while parsing has the number `213` and is displayed as
/// `S.13`.
///
/// # Examples
///
/// ```
/// use kalkc_util::diagnostic::Phase;
///
/// assert_eq!(Phase::Parsing.abbr(), "S");
/// assert_eq!(format!("{}", Phase::Parsing), "Syntax Error");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Phase {
    /// Non-fatal style or lint note
    Warning = 0,
    /// Command line and project structure
    Building = 1,
    /// Lexical and syntactic analysis
    Parsing = 2,
    /// Name resolution
    Resolving = 3,
    /// Static analysis
    Analyzing = 4,
    /// Execution
    Running = 5,
}

impl Phase {
    /// All phases in numeric order
    pub const ALL: [Phase; 6] = [
        Phase::Warning,
        Phase::Building,
        Phase::Parsing,
        Phase::Resolving,
        Phase::Analyzing,
        Phase::Running,
    ];

    /// Single-digit phase number
    #[inline]
    pub const fn digit(self) -> u8 {
        self as u8
    }

    /// One-letter abbreviation used in displayed error codes
    pub const fn abbr(self) -> &'static str {
        match self {
            Phase::Warning => "W",
            Phase::Building => "B",
            Phase::Parsing => "S",
            Phase::Resolving => "N",
            Phase::Analyzing => "A",
            Phase::Running => "R",
        }
    }

    /// Human-readable title
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Warning => "Warning",
            Phase::Building => "Build Error",
            Phase::Parsing => "Syntax Error",
            Phase::Resolving => "Name Resolution Error",
            Phase::Analyzing => "Static Analysis Error",
            Phase::Running => "Runtime Error",
        }
    }

    /// Look up a phase by its digit
    ///
    /// # Examples
    ///
    /// ```
    /// use kalkc_util::diagnostic::Phase;
    ///
    /// assert_eq!(Phase::from_digit(2).unwrap(), Phase::Parsing);
    /// assert!(Phase::from_digit(9).is_err());
    /// ```
    pub fn from_digit(digit: u8) -> DiagnosticResult<Self> {
        Self::ALL
            .get(digit as usize)
            .copied()
            .ok_or(DiagnosticError::InvalidPhase(digit))
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_digits_are_positions() {
        for (i, phase) in Phase::ALL.iter().enumerate() {
            assert_eq!(phase.digit() as usize, i);
            assert_eq!(Phase::from_digit(i as u8).unwrap(), *phase);
        }
    }

    #[test]
    fn test_phase_abbreviations_unique() {
        let mut abbrs: Vec<_> = Phase::ALL.iter().map(|p| p.abbr()).collect();
        abbrs.sort_unstable();
        abbrs.dedup();
        assert_eq!(abbrs.len(), Phase::ALL.len());
    }

    #[test]
    fn test_invalid_phase_digit() {
        assert_eq!(Phase::from_digit(6), Err(DiagnosticError::InvalidPhase(6)));
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Building.to_string(), "Build Error");
        assert_eq!(Phase::Resolving.to_string(), "Name Resolution Error");
    }
}
