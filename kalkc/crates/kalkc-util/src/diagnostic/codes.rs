//! Message templates and typed issue codes.
//!
//! Every public error number (`phase * 100 + issue`) that may be raised has
//! exactly one template in [`MESSAGES`]. A `#` in a template is a wildcard
//! that is replaced by the error's identifiers, in order.
//!
//! # Examples
//!
//! ```
//! use kalkc_util::diagnostic::{message_template, SyntaxIssue};
//!
//! assert_eq!(message_template(213), Some("illegal character"));
//! assert_eq!(SyntaxIssue::IllegalCharacter.number(), 213);
//! ```

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::Phase;

/// Wildcard marker inside message templates
pub const WILDCARD: &str = "#";

/// Registered message templates, keyed by error number
pub static MESSAGES: &[(u16, &str)] = &[
    // =========================================================================
    // BUILD ERRORS / COMMAND LINE
    // =========================================================================
    (101, "unknown subcommand"),
    (102, "unknown option"),
    (103, "wrong arguments"),
    (104, "wrong argument for option #"),
    // =========================================================================
    // BUILD ERRORS / PROJECT DIRECTORY
    // =========================================================================
    (121, "invalid plan name"),
    (122, "invalid source file name"),
    (123, "invalid folder name"),
    (124, "plan directory not found"),
    (125, "resource directory not found"),
    // =========================================================================
    // SYNTAX ERRORS / LIMITS
    // =========================================================================
    (201, "too many lines of code"),
    (202, "too long code line"),
    (203, "too many levels of indentation"),
    (204, "too long name"),
    (205, "too many namespaces"),
    (206, "too many parameters"),
    (207, "too nested data"),
    (208, "too long string literal for type #"),
    (209, "too long number literal for type #"),
    (210, "too long documentation"),
    // =========================================================================
    // SYNTAX ERRORS / LEXICAL ANALYSIS
    // =========================================================================
    (211, "indentation with tabulator"),
    (212, "illegal tabulator character"),
    (213, "illegal character"),
    (214, "illegal character within a word"),
    (215, "illegal character within a number literal"),
    (216, "illegal character within a binary literal"),
    (217, "illegal character within a hexadecimal literal"),
    (218, "invalid number literal"),
    (219, "invalid number literal: missing integer part before fraction part"),
    (220, "invalid number literal: missing decimal point before repetend"),
    (221, "invalid number literal: uncompleted repetend"),
    (222, "invalid string literal"),
    (223, "missing demarcation"),
    (224, "missing demarcation between literals"),
    (225, "missing demarcation from number literal"),
    (226, "missing demarcation from string literal"),
    (227, "unknown string prefix"),
    (228, "unknown punctuation"),
];

static MESSAGE_INDEX: LazyLock<FxHashMap<u16, &'static str>> =
    LazyLock::new(|| MESSAGES.iter().copied().collect());

/// Get the template registered for an error number
#[inline]
pub fn message_template(number: u16) -> Option<&'static str> {
    MESSAGE_INDEX.get(&number).copied()
}

/// Compose the public error number of a phase and an issue
#[inline]
pub const fn error_number(phase: Phase, issue: u8) -> u16 {
    phase.digit() as u16 * 100 + issue as u16
}

/// Replace each wildcard in `template` by the next id
///
/// Surplus wildcards stay in place when fewer ids are given; surplus ids
/// are ignored.
///
/// # Examples
///
/// ```
/// use kalkc_util::diagnostic::substitute;
///
/// assert_eq!(substitute("option #", &["-x"]), "option -x");
/// assert_eq!(substitute("# and #", &["a"]), "a and #");
/// ```
pub fn substitute<S: AsRef<str>>(template: &str, ids: &[S]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut ids = ids.iter();
    let mut parts = template.split(WILDCARD).peekable();

    while let Some(part) = parts.next() {
        result.push_str(part);
        if parts.peek().is_some() {
            match ids.next() {
                Some(id) => result.push_str(id.as_ref()),
                None => result.push_str(WILDCARD),
            }
        }
    }

    result
}

/// Issues of the parsing phase
///
/// The discriminant is the two-digit issue code. Each variant has a
/// registered template, which makes [`CompileError::syntax`] infallible.
///
/// [`CompileError::syntax`]: super::CompileError::syntax
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SyntaxIssue {
    TooManyLines = 1,
    TooLongLine = 2,
    TooManyIndentationLevels = 3,
    TooLongName = 4,
    TooManyNamespaces = 5,
    TooManyParameters = 6,
    TooNestedData = 7,
    TooLongStringLiteral = 8,
    TooLongNumberLiteral = 9,
    TooLongDocumentation = 10,
    IndentationWithTab = 11,
    IllegalTab = 12,
    IllegalCharacter = 13,
    IllegalCharacterInWord = 14,
    IllegalCharacterInNumber = 15,
    IllegalCharacterInBinary = 16,
    IllegalCharacterInHex = 17,
    InvalidNumber = 18,
    MissingIntegerPart = 19,
    MissingDecimalPoint = 20,
    UncompletedRepetend = 21,
    InvalidString = 22,
    MissingDemarcation = 23,
    MissingDemarcationBetweenLiterals = 24,
    MissingDemarcationFromNumber = 25,
    MissingDemarcationFromString = 26,
    UnknownStringPrefix = 27,
    UnknownPunctuation = 28,
}

impl SyntaxIssue {
    /// All syntax issues in code order
    pub const ALL: [SyntaxIssue; 28] = [
        SyntaxIssue::TooManyLines,
        SyntaxIssue::TooLongLine,
        SyntaxIssue::TooManyIndentationLevels,
        SyntaxIssue::TooLongName,
        SyntaxIssue::TooManyNamespaces,
        SyntaxIssue::TooManyParameters,
        SyntaxIssue::TooNestedData,
        SyntaxIssue::TooLongStringLiteral,
        SyntaxIssue::TooLongNumberLiteral,
        SyntaxIssue::TooLongDocumentation,
        SyntaxIssue::IndentationWithTab,
        SyntaxIssue::IllegalTab,
        SyntaxIssue::IllegalCharacter,
        SyntaxIssue::IllegalCharacterInWord,
        SyntaxIssue::IllegalCharacterInNumber,
        SyntaxIssue::IllegalCharacterInBinary,
        SyntaxIssue::IllegalCharacterInHex,
        SyntaxIssue::InvalidNumber,
        SyntaxIssue::MissingIntegerPart,
        SyntaxIssue::MissingDecimalPoint,
        SyntaxIssue::UncompletedRepetend,
        SyntaxIssue::InvalidString,
        SyntaxIssue::MissingDemarcation,
        SyntaxIssue::MissingDemarcationBetweenLiterals,
        SyntaxIssue::MissingDemarcationFromNumber,
        SyntaxIssue::MissingDemarcationFromString,
        SyntaxIssue::UnknownStringPrefix,
        SyntaxIssue::UnknownPunctuation,
    ];

    /// Two-digit issue code
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Public error number
    #[inline]
    pub const fn number(self) -> u16 {
        error_number(Phase::Parsing, self.code())
    }

    /// Message template of this issue
    pub fn template(self) -> &'static str {
        message_template(self.number()).unwrap_or(WILDCARD)
    }

    /// Is this one of the missing-demarcation issues?
    pub const fn is_demarcation(self) -> bool {
        matches!(
            self,
            SyntaxIssue::MissingDemarcation
                | SyntaxIssue::MissingDemarcationBetweenLiterals
                | SyntaxIssue::MissingDemarcationFromNumber
                | SyntaxIssue::MissingDemarcationFromString
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_syntax_issue_has_template() {
        for issue in SyntaxIssue::ALL {
            assert!(
                message_template(issue.number()).is_some(),
                "no template for {:?}",
                issue
            );
        }
    }

    #[test]
    fn test_syntax_issue_codes_are_contiguous() {
        for (i, issue) in SyntaxIssue::ALL.iter().enumerate() {
            assert_eq!(issue.code() as usize, i + 1);
        }
    }

    #[test]
    fn test_messages_sorted_and_unique() {
        for pair in MESSAGES.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} !< {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn test_message_numbers_belong_to_phases() {
        for (number, _) in MESSAGES {
            let digit = (number / 100) as u8;
            assert!(Phase::from_digit(digit).is_ok());
            assert!(number % 100 > 0);
        }
    }

    #[test]
    fn test_error_number() {
        assert_eq!(error_number(Phase::Building, 4), 104);
        assert_eq!(error_number(Phase::Parsing, 28), 228);
    }

    #[test]
    fn test_substitute_in_order() {
        assert_eq!(substitute("# then #", &["a", "b"]), "a then b");
    }

    #[test]
    fn test_substitute_leaves_surplus_markers() {
        assert_eq!(substitute("# # #", &["x"]), "x # #");
        assert_eq!(substitute("no markers", &["x"]), "no markers");
    }

    #[test]
    fn test_substitute_without_ids() {
        let none: [&str; 0] = [];
        assert_eq!(substitute("too long string literal for type #", &none), "too long string literal for type #");
    }

    #[test]
    fn test_template_lookup() {
        assert_eq!(
            SyntaxIssue::UncompletedRepetend.template(),
            "invalid number literal: uncompleted repetend"
        );
        assert_eq!(message_template(299), None);
    }

    #[quickcheck_macros::quickcheck]
    fn prop_substitute_without_markers_is_identity(text: String, ids: Vec<String>) -> bool {
        let text = text.replace(WILDCARD, "");
        substitute(&text, &ids) == text
    }

    #[quickcheck_macros::quickcheck]
    fn prop_substitute_consumes_markers(ids: Vec<u8>) -> bool {
        let ids: Vec<String> = ids.iter().map(|n| n.to_string()).collect();
        let template = vec![WILDCARD; ids.len()].join(" ");
        substitute(&template, &ids) == ids.join(" ")
    }
}
