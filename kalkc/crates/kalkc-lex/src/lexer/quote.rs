//! Quoted literal lexing.
//!
//! Double-quoted strings end at a quote not preceded by a backslash. Inside
//! single-quoted literals a doubled quote stands for one quote character.
//! Escapes are kept verbatim.

use kalkc_util::ErrorSink;

use super::core::{Lexer, Mode, Pending, Step};
use crate::codepoint::Codepoint;

impl<S: ErrorSink> Lexer<'_, S> {
    pub(super) fn double_quoted(&mut self, pending: Pending, c: char) -> Step {
        let escaped = self.cursor.previous() == Some(Codepoint::BACKSLASH);
        if c == Codepoint::DOUBLE_QUOTE && !escaped {
            self.close_quoted(pending)
        } else {
            Step::next(Mode::DoubleQuoteString(pending))
        }
    }

    pub(super) fn single_quoted(&mut self, pending: Pending, c: char) -> Step {
        if c != Codepoint::SINGLE_QUOTE {
            return Step::next(Mode::SingleQuoteString(pending));
        }
        if self.cursor.peek(1) == Some(Codepoint::SINGLE_QUOTE) {
            return Step::skip(Mode::SingleQuoteString(pending), 2);
        }
        self.close_quoted(pending)
    }

    /// Emits the literal, closing quote in the span but not in the lexeme.
    fn close_quoted(&mut self, pending: Pending) -> Step {
        let i = self.cursor.position();
        self.push_span(pending, i, i + 1);
        Step::next(Mode::Undemarcated)
    }
}
