//! Core lexer implementation.
//!
//! This module contains the per-line `Lexer`, the lexing modes, the step
//! dispatch and the token/issue emission shared by the other lexer modules.

use kalkc_util::{CompileError, ErrorLocation, ErrorSink, Locations, SyntaxIssue};
use tracing::trace;

use crate::codepoint::{Codepoint, Presort};
use crate::cursor::Cursor;
use crate::line::Line;
use crate::token::{Category, Lexeme, Punctuation, Token};

/// Tokenizes one line.
///
/// Lexical issues are reported into `sink` in scan order; the returned tokens
/// tile the line's code from left to right.
///
/// # Example
///
/// ```
/// use kalkc_lex::{tokenize, Category, Line};
/// use kalkc_util::CompileError;
///
/// let line = Line::new(1, 0, "0b101");
/// let mut errors: Vec<CompileError> = Vec::new();
/// let tokens = tokenize(&line, &mut errors);
///
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].category, Category::BinaryInteger);
/// assert_eq!(tokens[0].lexeme.as_str(), "101");
/// assert!(errors.is_empty());
/// ```
pub fn tokenize<S: ErrorSink>(line: &Line, sink: &mut S) -> Vec<Token> {
    let chars: Vec<char> = line.code().chars().collect();
    let mut lexer = Lexer::new(line.nr(), line.level(), &chars, sink);
    lexer.run();
    lexer.tokens
}

// ============================================================================
// MODES
// ============================================================================

/// Lexing mode, carrying the token under construction where there is one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Mode {
    /// Start of line or after a demarcating lexeme
    Demarcated,
    Whitespace(Pending),
    /// One buffered symbol character awaiting a possible second one
    Punctuation(Pending),
    Word(Pending),
    Number(Pending, Radix),
    DoubleQuoteString(Pending),
    SingleQuoteString(Pending),
    /// Rest of the line is documentation
    Documentation,
    /// After a non-demarcating lexeme
    Undemarcated,
}

/// Digit base of the current number literal
///
/// Carried from an integer into its fraction and repetend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Radix {
    Decimal,
    Binary,
    Hexadecimal,
}

/// A token that has been opened but not yet emitted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Pending {
    pub category: Category,
    pub from: usize,
    /// Leading characters of the span that are not part of the lexeme
    pub offset: usize,
    pub invalid: bool,
}

impl Pending {
    pub fn new(category: Category, from: usize) -> Self {
        Self {
            category,
            from,
            offset: 0,
            invalid: false,
        }
    }

    pub fn skipping(self, offset: usize) -> Self {
        Self { offset, ..self }
    }

    pub fn invalidated(self) -> Self {
        Self {
            invalid: true,
            ..self
        }
    }

    /// Characters consumed so far, given the cursor position
    pub fn width(&self, position: usize) -> usize {
        position - self.from
    }
}

/// Result of one transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Step {
    pub mode: Mode,
    pub advance: usize,
}

impl Step {
    /// Consume the current character
    pub fn next(mode: Mode) -> Self {
        Self { mode, advance: 1 }
    }

    /// Process the current character again in `mode`
    pub fn again(mode: Mode) -> Self {
        Self { mode, advance: 0 }
    }

    pub fn skip(mode: Mode, advance: usize) -> Self {
        Self { mode, advance }
    }
}

// ============================================================================
// LEXER
// ============================================================================

/// State machine over a single line.
///
/// Nothing here outlives the line: every call of [`tokenize`] builds a fresh
/// lexer, so lines can be lexed independently and in parallel.
pub(super) struct Lexer<'a, S: ErrorSink> {
    /// Character cursor over the line's code.
    pub cursor: Cursor<'a>,

    /// Receiver of lexical issues.
    sink: &'a mut S,

    line: u32,
    level: usize,

    /// Tokens emitted so far.
    pub tokens: Vec<Token>,
}

impl<'a, S: ErrorSink> Lexer<'a, S> {
    pub fn new(line: u32, level: usize, chars: &'a [char], sink: &'a mut S) -> Self {
        Self {
            cursor: Cursor::new(chars),
            sink,
            line,
            level,
            tokens: Vec::new(),
        }
    }

    /// Runs the state machine over the whole line.
    pub fn run(&mut self) {
        let mut mode = Mode::Demarcated;
        while let Some(c) = self.cursor.current() {
            let presort = Codepoint::new(c).presort();
            let step = self.step(mode, c, presort);
            mode = step.mode;
            self.cursor.advance(step.advance);
        }
        self.finish(mode);
    }

    fn step(&mut self, mode: Mode, c: char, presort: Presort) -> Step {
        match mode {
            Mode::Demarcated => self.begin(c, presort, false),
            Mode::Undemarcated => self.begin(c, presort, true),
            Mode::Whitespace(pending) => self.whitespace(pending, presort),
            Mode::Punctuation(pending) => self.punctuation(pending, c, presort),
            Mode::Word(pending) => self.word(pending, c, presort),
            Mode::Number(pending, radix) => self.number(pending, radix, c, presort),
            Mode::DoubleQuoteString(pending) => self.double_quoted(pending, c),
            Mode::SingleQuoteString(pending) => self.single_quoted(pending, c),
            Mode::Documentation => Step::next(mode),
        }
    }

    /// Starts a new lexeme at the cursor.
    ///
    /// After a non-demarcating lexeme, names, numbers and quoted literals
    /// need a separator first; without one a demarcation issue is logged and
    /// the new token is marked invalid.
    fn begin(&mut self, c: char, presort: Presort, undemarcated: bool) -> Step {
        let i = self.cursor.position();

        match presort {
            Presort::Tab => {
                let issue = if i == 0 {
                    SyntaxIssue::IndentationWithTab
                } else {
                    SyntaxIssue::IllegalTab
                };
                self.issue(issue, i, i + 1);
                Step::next(Mode::Whitespace(
                    Pending::new(Category::Whitespace, i).invalidated(),
                ))
            }
            Presort::Space => Step::next(Mode::Whitespace(Pending::new(Category::Whitespace, i))),
            Presort::Hash => self.documentation(i),
            Presort::Digit => {
                let pending = self.open(
                    Category::Integer,
                    undemarcated,
                    SyntaxIssue::MissingDemarcationFromNumber,
                );
                Step::next(Mode::Number(pending, Radix::Decimal))
            }
            Presort::CapitalLetter => {
                let pending = self.open(
                    Category::CapitalizedName,
                    undemarcated,
                    SyntaxIssue::MissingDemarcation,
                );
                Step::next(Mode::Word(pending))
            }
            Presort::SmallLetter => {
                let pending = self.open(
                    Category::UncapitalizedName,
                    undemarcated,
                    SyntaxIssue::MissingDemarcation,
                );
                Step::next(Mode::Word(pending))
            }
            Presort::DoubleQuote => {
                let pending = self.open(
                    Category::String,
                    undemarcated,
                    SyntaxIssue::MissingDemarcationFromString,
                );
                Step::next(Mode::DoubleQuoteString(pending.skipping(1)))
            }
            Presort::SingleQuote => {
                let pending = self.open(
                    Category::RawString,
                    undemarcated,
                    SyntaxIssue::MissingDemarcationFromString,
                );
                Step::next(Mode::SingleQuoteString(pending.skipping(1)))
            }
            Presort::Sign | Presort::Demarcator | Presort::Punctuation => self.symbol(c, i),
            Presort::Other => {
                self.issue(SyntaxIssue::IllegalCharacter, i, i + 1);
                let mut buf = [0u8; 4];
                self.tokens.push(Token::new(
                    Category::Punctuation,
                    Some(c.encode_utf8(&mut buf)),
                    i,
                    i + 1,
                    true,
                ));
                Step::next(Mode::Demarcated)
            }
        }
    }

    fn open(&mut self, category: Category, undemarcated: bool, issue: SyntaxIssue) -> Pending {
        let i = self.cursor.position();
        let pending = Pending::new(category, i);
        if undemarcated {
            self.gap(issue, i);
            pending.invalidated()
        } else {
            pending
        }
    }

    fn whitespace(&mut self, pending: Pending, presort: Presort) -> Step {
        let i = self.cursor.position();
        match presort {
            Presort::Space => Step::next(Mode::Whitespace(pending)),
            Presort::Tab => {
                self.issue(SyntaxIssue::IllegalTab, i, i + 1);
                Step::next(Mode::Whitespace(pending.invalidated()))
            }
            _ => {
                self.push(pending, i);
                Step::again(Mode::Demarcated)
            }
        }
    }

    /// Emits the rest of the line as documentation.
    fn documentation(&mut self, i: usize) -> Step {
        let end = self.cursor.len();
        let text = self.cursor.slice(i, end);
        let content = text.trim_start_matches(Codepoint::HASH).trim();
        self.tokens
            .push(Token::new(Category::Documentation, Some(content), i, end, false));
        Step::skip(Mode::Documentation, end - i)
    }

    /// Closes whatever is still open at the end of the line.
    fn finish(&mut self, mode: Mode) {
        let end = self.cursor.len();
        match mode {
            Mode::Demarcated | Mode::Undemarcated | Mode::Documentation => {}
            Mode::Punctuation(pending) => {
                self.close_symbol(pending, end);
            }
            Mode::Number(pending, _) => self.close_number(pending, end),
            Mode::Whitespace(pending)
            | Mode::Word(pending)
            | Mode::DoubleQuoteString(pending)
            | Mode::SingleQuoteString(pending) => self.push(pending, end),
        }
    }

    // ========================================================================
    // EMISSION
    // ========================================================================

    /// Emits `pending` spanning up to `to`.
    pub fn push(&mut self, pending: Pending, to: usize) {
        self.push_span(pending, to, to);
    }

    /// Emits `pending` spanning up to `to`, with its lexeme ending at
    /// `content_to`.
    pub fn push_span(&mut self, pending: Pending, content_to: usize, to: usize) {
        let token = if pending.category == Category::Whitespace {
            Token::whitespace(pending.from, to, pending.invalid)
        } else {
            let lexeme = self.cursor.slice(pending.from + pending.offset, content_to);
            Token::new(pending.category, Some(&lexeme), pending.from, to, pending.invalid)
        };
        self.tokens.push(token);
    }

    /// Emits a known punctuation symbol.
    pub fn push_symbol(&mut self, punctuation: Punctuation, from: usize, to: usize) {
        self.tokens.push(Token {
            category: Category::Punctuation,
            lexeme: Lexeme::Punctuation(punctuation),
            from,
            to,
            invalid: false,
        });
    }

    /// Logs an issue over `from..to`.
    pub fn issue(&mut self, issue: SyntaxIssue, from: usize, to: usize) {
        let location = ErrorLocation::new(self.line, self.level, from, to);
        self.report(CompileError::syntax(issue, Locations::Single(location)));
    }

    /// Logs a missing-demarcation issue between `at - 1` and `at`.
    pub fn gap(&mut self, issue: SyntaxIssue, at: usize) {
        let before = ErrorLocation::new(self.line, self.level, at.saturating_sub(1), at);
        let after = ErrorLocation::new(self.line, self.level, at, at + 1);
        self.report(CompileError::syntax(issue, Locations::Pair(before, after)));
    }

    fn report(&mut self, error: CompileError) {
        trace!(code = %error.code(), location = ?error.locations().first(), "lexical issue");
        self.sink.report(error);
    }
}
