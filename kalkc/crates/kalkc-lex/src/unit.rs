//! Lexed state of one source component.

use std::fmt;

use indexmap::IndexMap;
use kalkc_util::{CompileError, ComponentId, Phase};
use rayon::prelude::*;
use tracing::{debug, debug_span};

use crate::error::{LexError, LexResult};
use crate::lexer::tokenize;
use crate::line::Line;
use crate::token::Token;

/// How far a unit has been processed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    Linearized,
    Tokenized,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Linearized => f.write_str("linearized"),
            Stage::Tokenized => f.write_str("tokenized"),
        }
    }
}

/// Lines and errors of one component
///
/// Lines are keyed by their 1-based source line number and kept in
/// increasing order; blank and comment lines are absent. Errors are only
/// ever appended, line by line in scan order.
#[derive(Clone, Debug)]
pub struct Unit {
    id: ComponentId,
    lines: IndexMap<u32, Line>,
    errors: Vec<CompileError>,
    stage: Stage,
}

impl Unit {
    /// Creates an empty, linearized unit.
    pub fn new(id: ComponentId) -> Self {
        Self {
            id,
            lines: IndexMap::new(),
            errors: Vec::new(),
            stage: Stage::Linearized,
        }
    }

    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Lines in source order
    pub fn lines(&self) -> &IndexMap<u32, Line> {
        &self.lines
    }

    /// Line with the given source line number
    pub fn line(&self, nr: u32) -> Option<&Line> {
        self.lines.get(&nr)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Errors in scan order
    pub fn errors(&self) -> &[CompileError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Errors of one phase, in order
    pub fn errors_of(&self, phase: Phase) -> impl Iterator<Item = &CompileError> {
        self.errors.iter().filter(move |e| e.phase() == phase)
    }

    /// All tokens with their line numbers, in source order
    pub fn tokens(&self) -> impl Iterator<Item = (u32, &Token)> {
        self.lines
            .iter()
            .flat_map(|(nr, line)| line.tokens().unwrap_or_default().iter().map(move |t| (*nr, t)))
    }

    /// Appends a line; line numbers must increase.
    pub(crate) fn push_line(&mut self, line: Line) {
        debug_assert!(
            self.lines.last().map_or(true, |(nr, _)| *nr < line.nr()),
            "line {} out of order",
            line.nr()
        );
        self.lines.insert(line.nr(), line);
    }

    /// Lexes every line and attaches the tokens.
    ///
    /// With `parallel`, lines are lexed on the rayon pool. Errors are
    /// appended in line order either way.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::UnitAlreadyTokenized`] on a second call.
    ///
    /// # Example
    ///
    /// ```
    /// use kalkc_lex::{linearize, Stage};
    /// use kalkc_util::{ComponentId, Indentation};
    ///
    /// let mut unit = linearize("let x = 1\n\tx", ComponentId::parse("Main"), Indentation::Tab);
    /// unit.tokenize(false).unwrap();
    ///
    /// assert_eq!(unit.stage(), Stage::Tokenized);
    /// assert!(!unit.has_errors());
    /// assert_eq!(unit.line(2).unwrap().level(), 1);
    /// ```
    pub fn tokenize(&mut self, parallel: bool) -> LexResult<()> {
        if self.stage == Stage::Tokenized {
            return Err(LexError::UnitAlreadyTokenized {
                component: self.id.to_string(),
            });
        }

        let span = debug_span!("tokenize", component = %self.id, parallel);
        let _enter = span.enter();

        let results: Vec<(Vec<Token>, Vec<CompileError>)> = if parallel {
            self.lines.par_values().map(lex_line).collect()
        } else {
            self.lines.values().map(lex_line).collect()
        };

        let mut token_count = 0;
        for (line, (tokens, errors)) in self.lines.values_mut().zip(results) {
            token_count += tokens.len();
            line.attach_tokens(tokens)?;
            self.errors.extend(errors);
        }
        self.stage = Stage::Tokenized;

        debug!(
            lines = self.lines.len(),
            tokens = token_count,
            errors = self.errors.len(),
            "tokenized"
        );
        Ok(())
    }
}

fn lex_line(line: &Line) -> (Vec<Token>, Vec<CompileError>) {
    let mut errors = Vec::new();
    let tokens = tokenize(line, &mut errors);
    (tokens, errors)
}
