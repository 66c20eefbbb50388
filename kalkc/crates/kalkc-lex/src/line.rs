//! Logical source lines.

use std::hash::Hasher;

use rustc_hash::FxHasher;

use crate::error::{LexError, LexResult};
use crate::token::Token;

/// One stored line of a component
///
/// The code text excludes indentation and trailing whitespace. Tokens are
/// attached exactly once, by the lexer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    nr: u32,
    level: usize,
    code: String,
    hash: u64,
    tokens: Option<Vec<Token>>,
}

impl Line {
    /// Creates a line and computes its content hash.
    ///
    /// # Arguments
    ///
    /// * `nr` - 1-based source line number
    /// * `level` - indentation level
    /// * `code` - code text without indentation
    pub fn new(nr: u32, level: usize, code: impl Into<String>) -> Self {
        let code = code.into();
        let hash = content_hash(&code);
        Self {
            nr,
            level,
            code,
            hash,
            tokens: None,
        }
    }

    /// 1-based source line number
    #[inline]
    pub fn nr(&self) -> u32 {
        self.nr
    }

    /// Indentation level
    #[inline]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Code text
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Content hash of the code text
    ///
    /// Advisory: equal text gives an equal hash, so unchanged lines can be
    /// recognized between runs.
    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Tokens, once attached
    pub fn tokens(&self) -> Option<&[Token]> {
        self.tokens.as_deref()
    }

    pub fn is_tokenized(&self) -> bool {
        self.tokens.is_some()
    }

    /// Attaches the lexer's output.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::AlreadyTokenized`] if tokens are already attached.
    pub fn attach_tokens(&mut self, tokens: Vec<Token>) -> LexResult<()> {
        if self.tokens.is_some() {
            return Err(LexError::AlreadyTokenized { line: self.nr });
        }
        self.tokens = Some(tokens);
        Ok(())
    }
}

fn content_hash(code: &str) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(code.as_bytes());
    hasher.finish()
}
