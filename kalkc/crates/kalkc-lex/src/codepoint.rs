//! Codepoint classification for the Kalkyl lexer.
//!
//! Letter casing is decided from fixed Unicode ranges (Basic Latin, Latin-1
//! Supplement, Latin Extended-A/B, Latin Extended Additional, Greek and
//! Cyrillic) instead of the locale-dependent case mapping of the standard
//! library, so that the same source lexes identically everywhere.

use crate::token::Punctuation;

/// Coarse lexical class of a character
///
/// Exactly one presort applies to every character; see
/// [`Codepoint::presort`] for the order in which they are tested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Presort {
    Tab,
    Space,
    Hash,
    /// `+` or `-`
    Sign,
    Digit,
    CapitalLetter,
    SmallLetter,
    DoubleQuote,
    SingleQuote,
    /// Single-character punctuation that may abut other lexemes
    Demarcator,
    /// Single-character punctuation that needs separation
    Punctuation,
    Other,
}

impl Presort {
    /// Does this class open or continue punctuation?
    #[inline]
    pub fn is_symbolic(self) -> bool {
        matches!(self, Presort::Sign | Presort::Demarcator | Presort::Punctuation)
    }

    /// Is this class a letter?
    #[inline]
    pub fn is_letter(self) -> bool {
        matches!(self, Presort::CapitalLetter | Presort::SmallLetter)
    }
}

/// A single Unicode scalar value with lexical predicates
///
/// # Example
///
/// ```
/// use kalkc_lex::codepoint::{Codepoint, Presort};
///
/// assert_eq!(Codepoint::new('Ж').presort(), Presort::CapitalLetter);
/// assert_eq!(Codepoint::new('ß').presort(), Presort::SmallLetter);
/// assert_eq!(Codepoint::new('(').presort(), Presort::Demarcator);
/// assert_eq!(Codepoint::new('=').presort(), Presort::Punctuation);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Codepoint(char);

impl Codepoint {
    pub const TAB: char = '\t';
    pub const SPACE: char = ' ';
    pub const HASH: char = '#';
    pub const DOUBLE_QUOTE: char = '"';
    pub const SINGLE_QUOTE: char = '\'';
    pub const LEFT_PARENTHESIS: char = '(';
    pub const RIGHT_PARENTHESIS: char = ')';
    pub const PERIOD: char = '.';
    pub const ZERO: char = '0';
    pub const QUESTION_MARK: char = '?';
    pub const BACKSLASH: char = '\\';

    /// Wrap a character
    #[inline]
    pub const fn new(c: char) -> Self {
        Self(c)
    }

    /// The wrapped character
    #[inline]
    pub const fn char(self) -> char {
        self.0
    }

    #[inline]
    fn value(self) -> u32 {
        self.0 as u32
    }

    /// Is this a letter of one of the supported scripts?
    pub fn is_letter(self) -> bool {
        let v = self.value();
        matches!(v,
            0x0041..=0x005A             // 'A' … 'Z'
            | 0x0061..=0x007A           // 'a' … 'z'
            | 0x00C0..=0x00D6           // Latin-1 Supplement
            | 0x00D8..=0x00FF
            | 0x0100..=0x017F           // Latin Extended-A
            | 0x1E00..=0x1EFF           // Latin Extended Additional
            | 0x0370..=0x03A1           // Greek
            | 0x03A3..=0x03A9
            | 0x03B1..=0x03C9
            | 0x0400..=0x052F           // Cyrillic
            | 0x2DE0..=0x2DFF           // Cyrillic Extended-A
        )
    }

    /// Is this a capital letter?
    ///
    /// In the extended Latin and Cyrillic blocks, capitals and small letters
    /// alternate, capitals taking the even code points.
    pub fn is_capital_letter(self) -> bool {
        let v = self.value();
        let even = v % 2 == 0;
        match v {
            0x0041..=0x005A | 0x00C0..=0x00D6 | 0x00D8..=0x00DE => true,
            0x0100..=0x0176 | 0x01F8..=0x021E | 0x0220..=0x0232 => even,
            0x1E00..=0x1EF8 => even,
            0x0391..=0x03A1 | 0x03A3..=0x03A9 => true,
            0x0410..=0x042F => true,
            0x0460..=0x04C0 => even,
            _ => false,
        }
    }

    /// Is this a small letter?
    pub fn is_small_letter(self) -> bool {
        let v = self.value();
        let odd = v % 2 == 1;
        match v {
            0x0061..=0x007A | 0x00DF..=0x00F6 | 0x00F8..=0x00FF => true,
            0x0101..=0x0177 => odd,
            0x0178 | 0x023F => true,
            0x017A..=0x021F | 0x0223..=0x0233 => odd,
            0x1E01..=0x1EF9 => odd,
            0x03B1..=0x03C9 => true,
            0x0430..=0x044F => true,
            0x0461..=0x04C1 => odd,
            _ => false,
        }
    }

    /// Is this an ASCII decimal digit?
    #[inline]
    pub fn is_digit(self) -> bool {
        self.0.is_ascii_digit()
    }

    /// Is this `0` or `1`?
    #[inline]
    pub fn is_bin_digit(self) -> bool {
        matches!(self.0, '0' | '1')
    }

    /// Is this a hexadecimal digit (either case)?
    #[inline]
    pub fn is_hex_digit(self) -> bool {
        self.0.is_ascii_hexdigit()
    }

    /// Is this `b` or `B`?
    #[inline]
    pub fn is_bin_prefix(self) -> bool {
        matches!(self.0, 'b' | 'B')
    }

    /// Is this `x` or `X`?
    #[inline]
    pub fn is_hex_prefix(self) -> bool {
        matches!(self.0, 'x' | 'X')
    }

    /// Is this `+` or `-`?
    #[inline]
    pub fn is_sign(self) -> bool {
        matches!(self.0, '+' | '-')
    }

    /// Can this character appear inside a name?
    #[inline]
    pub fn is_word_character(self) -> bool {
        self.is_letter() || self.is_digit() || self.is_sign()
    }

    /// Classify the character
    ///
    /// Tests run in this order: tab, space, hash, sign, digit, capital
    /// letter, small letter, double quote, single quote, punctuation (split
    /// by its demarcating flag), and finally other.
    pub fn presort(self) -> Presort {
        match self.0 {
            Self::TAB => Presort::Tab,
            Self::SPACE => Presort::Space,
            Self::HASH => Presort::Hash,
            _ if self.is_sign() => Presort::Sign,
            _ if self.is_digit() => Presort::Digit,
            _ if self.is_capital_letter() => Presort::CapitalLetter,
            _ if self.is_small_letter() => Presort::SmallLetter,
            Self::DOUBLE_QUOTE => Presort::DoubleQuote,
            Self::SINGLE_QUOTE => Presort::SingleQuote,
            c => match Punctuation::from_char(c) {
                Some(p) if p.is_demarcating() => Presort::Demarcator,
                Some(_) => Presort::Punctuation,
                None => Presort::Other,
            },
        }
    }
}

impl From<char> for Codepoint {
    fn from(c: char) -> Self {
        Self(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presort_whitespace_and_hash() {
        assert_eq!(Codepoint::new('\t').presort(), Presort::Tab);
        assert_eq!(Codepoint::new(' ').presort(), Presort::Space);
        assert_eq!(Codepoint::new('#').presort(), Presort::Hash);
    }

    #[test]
    fn test_presort_sign_before_punctuation() {
        assert_eq!(Codepoint::new('+').presort(), Presort::Sign);
        assert_eq!(Codepoint::new('-').presort(), Presort::Sign);
    }

    #[test]
    fn test_presort_quotes() {
        assert_eq!(Codepoint::new('"').presort(), Presort::DoubleQuote);
        assert_eq!(Codepoint::new('\'').presort(), Presort::SingleQuote);
    }

    #[test]
    fn test_presort_demarcators() {
        for c in ['(', ')', '[', ']', '{', '}', ',', ';', ':', '.', '?', '!', '~', '*', '/', '@', '%', '$', '&', '^', '\\'] {
            assert_eq!(Codepoint::new(c).presort(), Presort::Demarcator, "{:?}", c);
        }
    }

    #[test]
    fn test_presort_non_demarcating_punctuation() {
        for c in ['=', '<', '>', '|', '_'] {
            assert_eq!(Codepoint::new(c).presort(), Presort::Punctuation, "{:?}", c);
        }
    }

    #[test]
    fn test_presort_other() {
        for c in ['`', '°', '€', '中', '\u{0}'] {
            assert_eq!(Codepoint::new(c).presort(), Presort::Other, "{:?}", c);
        }
    }

    #[test]
    fn test_latin_casing() {
        assert!(Codepoint::new('Ä').is_capital_letter());
        assert!(Codepoint::new('ä').is_small_letter());
        assert!(Codepoint::new('Ā').is_capital_letter()); // U+0100
        assert!(Codepoint::new('ā').is_small_letter()); // U+0101
        assert!(!Codepoint::new('×').is_letter()); // U+00D7
    }

    #[test]
    fn test_greek_and_cyrillic_casing() {
        assert!(Codepoint::new('Ω').is_capital_letter());
        assert!(Codepoint::new('ω').is_small_letter());
        assert!(Codepoint::new('Я').is_capital_letter());
        assert!(Codepoint::new('я').is_small_letter());
    }

    #[test]
    fn test_digit_predicates() {
        assert!(Codepoint::new('1').is_bin_digit());
        assert!(!Codepoint::new('2').is_bin_digit());
        assert!(Codepoint::new('f').is_hex_digit());
        assert!(Codepoint::new('F').is_hex_digit());
        assert!(!Codepoint::new('g').is_hex_digit());
    }

    #[test]
    fn test_prefixes() {
        assert!(Codepoint::new('b').is_bin_prefix());
        assert!(Codepoint::new('B').is_bin_prefix());
        assert!(Codepoint::new('x').is_hex_prefix());
        assert!(Codepoint::new('X').is_hex_prefix());
        assert!(!Codepoint::new('o').is_hex_prefix());
    }

    #[test]
    fn test_word_characters() {
        assert!(Codepoint::new('-').is_word_character());
        assert!(Codepoint::new('7').is_word_character());
        assert!(!Codepoint::new('_').is_word_character());
    }

    #[test]
    fn test_every_letter_presort_is_a_letter() {
        for v in 0u32..0x0600 {
            if let Some(c) = char::from_u32(v) {
                let cp = Codepoint::new(c);
                if cp.presort().is_letter() {
                    assert!(cp.is_capital_letter() || cp.is_small_letter());
                }
            }
        }
    }
}
