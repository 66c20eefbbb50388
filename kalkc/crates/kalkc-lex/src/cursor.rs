//! Character cursor for traversing one line of code.
//!
//! This module provides the `Cursor` struct which keeps the scan position
//! while the lexer walks a line. Positions are character offsets, the unit
//! used by token spans and error locations.

/// A cursor over the characters of a single line.
///
/// # Example
///
/// ```
/// use kalkc_lex::cursor::Cursor;
///
/// let chars: Vec<char> = "let x".chars().collect();
/// let mut cursor = Cursor::new(&chars);
///
/// assert_eq!(cursor.current(), Some('l'));
/// cursor.advance(1);
/// assert_eq!(cursor.current(), Some('e'));
/// assert_eq!(cursor.previous(), Some('l'));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The characters being traversed.
    chars: &'a [char],

    /// Current character offset.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `chars`.
    pub fn new(chars: &'a [char]) -> Self {
        Self { chars, position: 0 }
    }

    /// Current character offset
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of characters in the line
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at the cursor, `None` at the end of the line.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.peek(0)
    }

    /// Character `offset` places ahead of the cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use kalkc_lex::cursor::Cursor;
    ///
    /// let chars: Vec<char> = "ab".chars().collect();
    /// let cursor = Cursor::new(&chars);
    /// assert_eq!(cursor.peek(1), Some('b'));
    /// assert_eq!(cursor.peek(2), None);
    /// ```
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.position + offset).copied()
    }

    /// Character at an absolute offset of the line.
    #[inline]
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Character right before the cursor.
    #[inline]
    pub fn previous(&self) -> Option<char> {
        self.position
            .checked_sub(1)
            .and_then(|i| self.chars.get(i).copied())
    }

    /// Moves the cursor forward by `n` characters, clamped to the end.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.position = (self.position + n).min(self.chars.len());
    }

    /// Collects the characters in `from..to` into a string.
    pub fn slice(&self, from: usize, to: usize) -> String {
        let to = to.min(self.chars.len());
        let from = from.min(to);
        self.chars[from..to].iter().collect()
    }
}
