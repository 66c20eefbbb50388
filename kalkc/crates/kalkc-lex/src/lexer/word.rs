//! Name and keyword lexing.
//!
//! Names may contain letters, digits and signs. Keywords are recognized when
//! the finished word is emitted. A single-letter word directly before a
//! single quote is a string prefix.

use kalkc_util::{ErrorSink, SyntaxIssue};

use super::core::{Lexer, Mode, Pending, Step};
use crate::codepoint::{Codepoint, Presort};
use crate::token::Category;

impl<S: ErrorSink> Lexer<'_, S> {
    pub(super) fn word(&mut self, pending: Pending, c: char, presort: Presort) -> Step {
        let i = self.cursor.position();

        match presort {
            Presort::Sign | Presort::Digit | Presort::CapitalLetter | Presort::SmallLetter => {
                Step::next(Mode::Word(pending))
            }
            Presort::Demarcator if c == Codepoint::QUESTION_MARK => {
                let predicate = Pending {
                    category: Category::Predicate,
                    ..pending
                };
                self.push(predicate, i + 1);
                Step::next(Mode::Undemarcated)
            }
            Presort::Punctuation | Presort::Other => {
                self.issue(SyntaxIssue::IllegalCharacterInWord, i, i + 1);
                Step::next(Mode::Word(pending.invalidated()))
            }
            Presort::SingleQuote if pending.width(i) == 1 => self.prefixed_string(pending),
            _ => {
                self.push(pending, i);
                Step::again(Mode::Undemarcated)
            }
        }
    }

    /// Turns a one-letter word into the prefix of a single-quoted literal.
    fn prefixed_string(&mut self, pending: Pending) -> Step {
        let prefix = self.cursor.char_at(pending.from).map(Codepoint::new);

        let category = match prefix {
            Some(p) if p.is_bin_prefix() => Category::Binary,
            Some(p) if p.is_hex_prefix() => Category::Hex,
            _ => {
                self.issue(SyntaxIssue::UnknownStringPrefix, pending.from, pending.from + 1);
                Category::RawString
            }
        };

        let literal = Pending {
            category,
            from: pending.from,
            offset: 2,
            invalid: pending.invalid || category == Category::RawString,
        };
        Step::next(Mode::SingleQuoteString(literal))
    }
}
