//! Punctuation and operator lexing.
//!
//! Unambiguous symbols commit on their first character. Ambiguous ones are
//! buffered for one character and combined with the next symbol character
//! when the pair is a registered symbol. A buffered sign directly followed
//! by a letter starts a name instead.

use kalkc_util::{ErrorSink, SyntaxIssue};

use super::core::{Lexer, Mode, Pending, Step};
use crate::codepoint::{Codepoint, Presort};
use crate::token::{Category, Punctuation};

impl<S: ErrorSink> Lexer<'_, S> {
    /// Mode after emitting `punctuation`
    fn after(punctuation: Punctuation) -> Mode {
        if punctuation.is_demarcating() {
            Mode::Demarcated
        } else {
            Mode::Undemarcated
        }
    }

    /// Opens a symbol at `i`.
    pub(super) fn symbol(&mut self, c: char, i: usize) -> Step {
        match Punctuation::from_char(c) {
            Some(punctuation) if punctuation.is_unambiguous() => {
                self.push_symbol(punctuation, i, i + 1);
                Step::next(Self::after(punctuation))
            }
            _ => Step::next(Mode::Punctuation(Pending::new(Category::Punctuation, i))),
        }
    }

    /// Continues after one buffered symbol character.
    pub(super) fn punctuation(&mut self, pending: Pending, c: char, presort: Presort) -> Step {
        let i = self.cursor.position();
        let Some(first) = self.cursor.char_at(pending.from) else {
            return Step::again(Mode::Demarcated);
        };

        if presort.is_symbolic() {
            let pair: String = [first, c].iter().collect();
            if let Some(punctuation) = Punctuation::lookup(&pair) {
                self.push_symbol(punctuation, pending.from, i + 1);
                return Step::next(Self::after(punctuation));
            }
        } else if presort.is_letter() && Codepoint::new(first).is_sign() {
            let category = match (first, presort) {
                ('-', Presort::SmallLetter) => Category::Label,
                (_, Presort::CapitalLetter) => Category::CapitalizedName,
                _ => Category::UncapitalizedName,
            };
            return Step::next(Mode::Word(Pending { category, ..pending }));
        }

        let mode = self.close_symbol(pending, i);
        Step::again(mode)
    }

    /// Emits the buffered symbol and returns the mode it leads into.
    pub(super) fn close_symbol(&mut self, pending: Pending, to: usize) -> Mode {
        let text = self.cursor.slice(pending.from, to);
        match Punctuation::lookup(&text) {
            Some(punctuation) => {
                self.push_symbol(punctuation, pending.from, to);
                Self::after(punctuation)
            }
            None => {
                self.issue(SyntaxIssue::UnknownPunctuation, pending.from, to);
                self.push(pending.invalidated(), to);
                Mode::Demarcated
            }
        }
    }
}
