//! Number literal lexing.
//!
//! # Number Formats
//!
//! - Integer: `42`
//! - Binary: `0b1010`, lexeme `1010`
//! - Hexadecimal: `0x1F`, lexeme `1F`
//! - Fraction: `3.14` lexes as `Integer(3)` `Fraction(14)`
//! - Repeating decimal: `0.(3)` lexes as `Integer(0)` `Fraction()` `Repetend(3)`
//!
//! The radix of the integer part also governs the digits of its fraction and
//! repetend. `1..5` is an integer, an ellipsis and another integer.

use kalkc_util::{ErrorSink, SyntaxIssue};

use super::core::{Lexer, Mode, Pending, Radix, Step};
use crate::codepoint::{Codepoint, Presort};
use crate::token::{Category, Punctuation};

impl<S: ErrorSink> Lexer<'_, S> {
    pub(super) fn number(&mut self, pending: Pending, radix: Radix, c: char, presort: Presort) -> Step {
        let i = self.cursor.position();

        match presort {
            Presort::Digit => {
                if radix == Radix::Binary && !Codepoint::new(c).is_bin_digit() {
                    self.issue(SyntaxIssue::IllegalCharacterInBinary, i, i + 1);
                    return Step::next(Mode::Number(pending.invalidated(), radix));
                }
                Step::next(Mode::Number(pending, radix))
            }
            Presort::CapitalLetter | Presort::SmallLetter => self.letter_in_number(pending, radix, c),
            Presort::Demarcator => match c {
                Codepoint::PERIOD => self.decimal_point(pending, radix),
                Codepoint::LEFT_PARENTHESIS => self.open_repetend(pending, radix),
                Codepoint::RIGHT_PARENTHESIS if pending.category == Category::Repetend => {
                    self.push_span(pending, i, i + 1);
                    Step::next(Mode::Undemarcated)
                }
                _ => {
                    self.close_number(pending, i);
                    Step::again(Mode::Undemarcated)
                }
            },
            Presort::Sign | Presort::Punctuation => {
                self.gap(SyntaxIssue::MissingDemarcationFromNumber, i);
                self.close_number(pending, i);
                Step::again(Mode::Demarcated)
            }
            _ => {
                self.close_number(pending, i);
                Step::again(Mode::Undemarcated)
            }
        }
    }

    fn letter_in_number(&mut self, pending: Pending, radix: Radix, c: char) -> Step {
        let i = self.cursor.position();
        let letter = Codepoint::new(c);

        let lone_zero = pending.category == Category::Integer
            && pending.width(i) == 1
            && self.cursor.char_at(pending.from) == Some(Codepoint::ZERO);

        if lone_zero && letter.is_bin_prefix() {
            let typed = Pending {
                category: Category::BinaryInteger,
                ..pending
            };
            return Step::next(Mode::Number(typed.skipping(2), Radix::Binary));
        }
        if lone_zero && letter.is_hex_prefix() {
            let typed = Pending {
                category: Category::HexadecimalInteger,
                ..pending
            };
            return Step::next(Mode::Number(typed.skipping(2), Radix::Hexadecimal));
        }

        let issue = match radix {
            Radix::Hexadecimal if letter.is_hex_digit() => {
                return Step::next(Mode::Number(pending, radix));
            }
            Radix::Hexadecimal => SyntaxIssue::IllegalCharacterInHex,
            Radix::Binary => SyntaxIssue::IllegalCharacterInBinary,
            Radix::Decimal => SyntaxIssue::IllegalCharacterInNumber,
        };
        self.issue(issue, i, i + 1);
        Step::next(Mode::Number(pending.invalidated(), radix))
    }

    /// Handles `.` inside a number literal.
    fn decimal_point(&mut self, pending: Pending, radix: Radix) -> Step {
        let i = self.cursor.position();

        if pending.category.is_integer() {
            self.push(pending, i);
            let fraction = Pending::new(Category::Fraction, i).skipping(1);
            return Step::next(Mode::Number(fraction, radix));
        }

        // A second point right after the first one is a range.
        if pending.category == Category::Fraction && pending.width(i) == 1 {
            self.push_symbol(Punctuation::Ellipsis, pending.from, i + 1);
            return Step::next(Mode::Demarcated);
        }

        let previous = pending.from;
        self.close_number(pending, i);
        self.issue(SyntaxIssue::InvalidNumber, previous, i + 1);
        let fraction = Pending::new(Category::Fraction, i).skipping(1).invalidated();
        Step::next(Mode::Number(fraction, radix))
    }

    /// Handles `(` inside a number literal.
    fn open_repetend(&mut self, pending: Pending, radix: Radix) -> Step {
        let i = self.cursor.position();
        let repetend = Pending::new(Category::Repetend, i).skipping(1);

        match pending.category {
            Category::Fraction => {
                self.push(pending, i);
                Step::next(Mode::Number(repetend, radix))
            }
            Category::Repetend => {
                self.close_number(pending, i);
                Step::again(Mode::Undemarcated)
            }
            _ => {
                self.push(pending, i);
                self.issue(SyntaxIssue::MissingDecimalPoint, pending.from, i + 1);
                Step::next(Mode::Number(repetend.invalidated(), radix))
            }
        }
    }

    /// Emits a number literal ending at `to`.
    ///
    /// A repetend closed here lacks its `)`.
    pub(super) fn close_number(&mut self, pending: Pending, to: usize) {
        if pending.category == Category::Repetend {
            self.issue(SyntaxIssue::UncompletedRepetend, pending.from, to);
            self.push(pending.invalidated(), to);
        } else {
            self.push(pending, to);
        }
    }
}
