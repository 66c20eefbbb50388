//! Token definitions and lexeme registries for the Kalkyl lexer.
//!
//! Reserved lexemes live in two constant tables, [`KEYWORDS`] and
//! [`PUNCTUATION`]. Their identities are numbered in two disjoint,
//! contiguous ranges (keywords first), and row `i` of each table holds the
//! identity `FIRST + i`, so every identity has exactly one row.
//!
//! Adding a symbol is a one-line table edit plus a variant; the layout is
//! checked at compile time and by the tests below.

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use static_assertions::{const_assert, const_assert_eq};

// ============================================================================
// KEYWORDS
// ============================================================================

/// Identity of the first keyword
pub const FIRST_KEYWORD: u8 = 1;

/// Number of keywords
pub const KEYWORD_COUNT: usize = 52;

/// Reserved words
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Keyword {
    // Declarations :: introductory
    Alias = FIRST_KEYWORD,
    Component,
    Concept,
    Install,
    Metric,
    Nonmetric,
    Preinstall,
    Section,
    Subtype,
    Supertype,
    Type,
    Use,

    // Declarations :: supplementary
    Adopts,
    As,
    Deriving,
    Ex,
    Forall,
    Given,
    Has,
    Is,
    Provides,
    Under,
    Unqualified,
    Where,
    With,

    // Expressions
    Auto,
    Break,
    Case,
    Continue,
    Do,
    Else,
    For,
    If,
    In,
    Let,
    Loop,
    Module,
    Of,
    Return,
    Then,
    Unless,
    Using,
    While,

    // Expressions :: verbal operators
    And,
    InQuery,
    IsQuery,
    Nand,
    Nor,
    Not,
    Or,
    Xnor,
    Xor,
}

/// Keyword registry, ordered by identity
pub static KEYWORDS: [(&str, Keyword); KEYWORD_COUNT] = [
    ("alias", Keyword::Alias),
    ("component", Keyword::Component),
    ("concept", Keyword::Concept),
    ("install", Keyword::Install),
    ("metric", Keyword::Metric),
    ("nonmetric", Keyword::Nonmetric),
    ("preinstall", Keyword::Preinstall),
    ("section", Keyword::Section),
    ("subtype", Keyword::Subtype),
    ("supertype", Keyword::Supertype),
    ("type", Keyword::Type),
    ("use", Keyword::Use),
    ("adopts", Keyword::Adopts),
    ("as", Keyword::As),
    ("deriving", Keyword::Deriving),
    ("ex", Keyword::Ex),
    ("forall", Keyword::Forall),
    ("given", Keyword::Given),
    ("has", Keyword::Has),
    ("is", Keyword::Is),
    ("provides", Keyword::Provides),
    ("under", Keyword::Under),
    ("unqualified", Keyword::Unqualified),
    ("where", Keyword::Where),
    ("with", Keyword::With),
    ("auto", Keyword::Auto),
    ("break", Keyword::Break),
    ("case", Keyword::Case),
    ("continue", Keyword::Continue),
    ("do", Keyword::Do),
    ("else", Keyword::Else),
    ("for", Keyword::For),
    ("if", Keyword::If),
    ("in", Keyword::In),
    ("let", Keyword::Let),
    ("loop", Keyword::Loop),
    ("module", Keyword::Module),
    ("of", Keyword::Of),
    ("return", Keyword::Return),
    ("then", Keyword::Then),
    ("unless", Keyword::Unless),
    ("using", Keyword::Using),
    ("while", Keyword::While),
    ("and", Keyword::And),
    ("in?", Keyword::InQuery),
    ("is?", Keyword::IsQuery),
    ("nand", Keyword::Nand),
    ("nor", Keyword::Nor),
    ("not", Keyword::Not),
    ("or", Keyword::Or),
    ("xnor", Keyword::Xnor),
    ("xor", Keyword::Xor),
];

impl Keyword {
    /// Numeric identity
    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Source spelling
    pub fn lexeme(self) -> &'static str {
        KEYWORDS[(self.id() - FIRST_KEYWORD) as usize].0
    }

    /// Look up a keyword by its spelling
    pub fn lookup(lexeme: &str) -> Option<Self> {
        match Reserved::lookup(lexeme)? {
            Reserved::Keyword(k) => Some(k),
            Reserved::Punctuation(_) => None,
        }
    }

    /// Look up a keyword by its identity
    pub fn from_id(id: u8) -> Option<Self> {
        let index = id.checked_sub(FIRST_KEYWORD)? as usize;
        KEYWORDS.get(index).map(|(_, k)| *k)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lexeme())
    }
}

// ============================================================================
// PUNCTUATION
// ============================================================================

/// Identity of the first punctuation symbol
pub const FIRST_PUNCTUATION: u8 = 61;

/// Number of punctuation symbols
pub const PUNCTUATION_COUNT: usize = 54;

/// Punctuation and operator symbols
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Punctuation {
    // Declarer
    Specifier = FIRST_PUNCTUATION,
    Definer,
    OmissionOrDefault,

    // Separating
    Lister,
    End,

    // Grouping
    TupleBegin,
    TupleEnd,
    IndexBegin,
    IndexEnd,
    SetBegin,
    SetEnd,

    // Qualifiers
    ValueCaller,
    MethodCaller,
    QualifierOrNumbering,
    TypeHinter,
    DereferOrPointer,

    // Pattern syntax
    Arrow,
    Ellipsis,
    Function,
    Placeholder,
    VariantSeparator,

    // Type operators
    Mutable,
    Optional,

    // General operators
    Adding,
    Reducing,
    Tolerating,
    UniqueOrMultiplying,
    Potentiating,
    Dividing,
    Extracting,

    // Comparison
    Equal,
    Unequal,
    Less,
    NotGreater,
    LessOrEqual,
    Greater,
    NotLess,
    GreaterOrEqual,

    // Data operators
    Concating,
    PairBuilder,
    Crossing,
    AttributingLeft,
    AttributingRight,
    Nesting,

    // Sequencing
    FlowLeft,
    FlowRight,
    TransmitLeft,
    TransmitRight,
    Parallel,

    // Assignment
    Binding,
    Assignment,
    Borrowing,

    // Memory management
    Address,

    // Units of measurement
    Percent,
}

/// One row of the punctuation registry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PunctuationData {
    /// Source spelling, one or two characters
    pub lexeme: &'static str,
    /// Identity
    pub punctuation: Punctuation,
    /// Never a prefix of a longer symbol, so it commits immediately
    pub unambiguous: bool,
    /// May directly abut a lexeme of another kind
    pub demarcating: bool,
}

const fn pd(
    lexeme: &'static str,
    punctuation: Punctuation,
    unambiguous: bool,
    demarcating: bool,
) -> PunctuationData {
    PunctuationData {
        lexeme,
        punctuation,
        unambiguous,
        demarcating,
    }
}

/// Punctuation registry, ordered by identity
#[rustfmt::skip]
pub static PUNCTUATION: [PunctuationData; PUNCTUATION_COUNT] = {
    use Punctuation::*;
    [
        pd(":",  Specifier,           false, true),
        pd("=",  Definer,             false, false),
        pd("~",  OmissionOrDefault,   true,  true),
        pd(",",  Lister,              true,  true),
        pd(";",  End,                 true,  true),
        pd("(",  TupleBegin,          true,  true),
        pd(")",  TupleEnd,            true,  true),
        pd("[",  IndexBegin,          true,  true),
        pd("]",  IndexEnd,            true,  true),
        pd("{",  SetBegin,            true,  true),
        pd("}",  SetEnd,              true,  true),
        pd("$",  ValueCaller,         true,  true),
        pd("&",  MethodCaller,        true,  true),
        pd(".",  QualifierOrNumbering, false, true),
        pd("::", TypeHinter,          true,  true),
        pd("^",  DereferOrPointer,    true,  true),
        pd("->", Arrow,               true,  false),
        pd("..", Ellipsis,            true,  true),
        pd("\\", Function,            true,  true),
        pd("_",  Placeholder,         true,  false),
        pd("|",  VariantSeparator,    false, false),
        pd("!",  Mutable,             true,  true),
        pd("?",  Optional,            true,  true),
        pd("+",  Adding,              false, false),
        pd("-",  Reducing,            false, false),
        pd("+-", Tolerating,          true,  false),
        pd("*",  UniqueOrMultiplying, false, true),
        pd("**", Potentiating,        true,  true),
        pd("/",  Dividing,            false, true),
        pd("//", Extracting,          true,  true),
        pd("==", Equal,               true,  false),
        pd("/=", Unequal,             true,  false),
        pd("<",  Less,                false, false),
        pd("/>", NotGreater,          true,  false),
        pd("=<", LessOrEqual,         true,  false),
        pd(">",  Greater,             false, false),
        pd("/<", NotLess,             true,  false),
        pd(">=", GreaterOrEqual,      true,  false),
        pd("<>", Concating,           true,  false),
        pd("=>", PairBuilder,         true,  false),
        pd("><", Crossing,            true,  false),
        pd("<:", AttributingLeft,     true,  false),
        pd(":>", AttributingRight,    true,  false),
        pd("</", Nesting,             true,  false),
        pd("<<", FlowLeft,            true,  false),
        pd(">>", FlowRight,           true,  false),
        pd("<*", TransmitLeft,        true,  false),
        pd("*>", TransmitRight,       true,  false),
        pd("||", Parallel,            true,  false),
        pd("<-", Binding,             true,  false),
        pd(":=", Assignment,          true,  false),
        pd("<=", Borrowing,           true,  false),
        pd("@",  Address,             true,  true),
        pd("%",  Percent,             true,  true),
    ]
};

const_assert_eq!(
    Keyword::Xor as usize - Keyword::Alias as usize + 1,
    KEYWORD_COUNT
);
const_assert_eq!(
    Punctuation::Percent as usize - Punctuation::Specifier as usize + 1,
    PUNCTUATION_COUNT
);
const_assert!((Keyword::Xor as u8) < FIRST_PUNCTUATION);

impl Punctuation {
    /// Numeric identity
    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Registry row of this symbol
    #[inline]
    pub fn data(self) -> &'static PunctuationData {
        &PUNCTUATION[(self.id() - FIRST_PUNCTUATION) as usize]
    }

    /// Source spelling
    #[inline]
    pub fn lexeme(self) -> &'static str {
        self.data().lexeme
    }

    /// Is this symbol never the prefix of a longer one?
    #[inline]
    pub fn is_unambiguous(self) -> bool {
        self.data().unambiguous
    }

    /// May this symbol directly abut other lexemes?
    #[inline]
    pub fn is_demarcating(self) -> bool {
        self.data().demarcating
    }

    /// Look up a symbol by its spelling
    pub fn lookup(lexeme: &str) -> Option<Self> {
        match Reserved::lookup(lexeme)? {
            Reserved::Punctuation(p) => Some(p),
            Reserved::Keyword(_) => None,
        }
    }

    /// Look up a single-character symbol
    pub fn from_char(c: char) -> Option<Self> {
        let mut buf = [0u8; 4];
        Self::lookup(c.encode_utf8(&mut buf))
    }

    /// Look up a symbol by its identity
    pub fn from_id(id: u8) -> Option<Self> {
        let index = id.checked_sub(FIRST_PUNCTUATION)? as usize;
        PUNCTUATION.get(index).map(|row| row.punctuation)
    }

    /// All demarcating symbols with their unambiguous flag
    pub fn demarcators() -> impl Iterator<Item = (&'static str, bool)> {
        PUNCTUATION
            .iter()
            .filter(|row| row.demarcating)
            .map(|row| (row.lexeme, row.unambiguous))
    }
}

impl fmt::Display for Punctuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lexeme())
    }
}

// ============================================================================
// RESERVED LOOKUP
// ============================================================================

/// A keyword or punctuation identity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reserved {
    Keyword(Keyword),
    Punctuation(Punctuation),
}

static RESERVED: LazyLock<FxHashMap<&'static str, Reserved>> = LazyLock::new(|| {
    let keywords = KEYWORDS
        .iter()
        .map(|(lexeme, k)| (*lexeme, Reserved::Keyword(*k)));
    let symbols = PUNCTUATION
        .iter()
        .map(|row| (row.lexeme, Reserved::Punctuation(row.punctuation)));
    keywords.chain(symbols).collect()
});

impl Reserved {
    /// Look up a reserved lexeme
    ///
    /// # Example
    ///
    /// ```
    /// use kalkc_lex::token::{Keyword, Punctuation, Reserved};
    ///
    /// assert_eq!(Reserved::lookup("is?"), Some(Reserved::Keyword(Keyword::IsQuery)));
    /// assert_eq!(Reserved::lookup("::"), Some(Reserved::Punctuation(Punctuation::TypeHinter)));
    /// assert_eq!(Reserved::lookup("count"), None);
    /// ```
    #[inline]
    pub fn lookup(lexeme: &str) -> Option<Self> {
        RESERVED.get(lexeme).copied()
    }

    /// Numeric identity
    pub fn id(self) -> u8 {
        match self {
            Reserved::Keyword(k) => k.id(),
            Reserved::Punctuation(p) => p.id(),
        }
    }

    /// Look up a reserved lexeme by identity
    pub fn from_id(id: u8) -> Option<Self> {
        Keyword::from_id(id)
            .map(Reserved::Keyword)
            .or_else(|| Punctuation::from_id(id).map(Reserved::Punctuation))
    }
}

// ============================================================================
// TOKENS
// ============================================================================

/// Lexical category of a token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Whitespace,
    Punctuation,
    Keyword,

    // Names
    UncapitalizedName,
    Label,
    Predicate,
    CapitalizedName,

    // Number literals
    Integer,
    BinaryInteger,
    HexadecimalInteger,
    Fraction,
    Repetend,

    // String literals
    String,
    RawString,
    Binary,
    Hex,

    Documentation,
}

impl Category {
    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Category::Whitespace => "Whitespace",
            Category::Punctuation => "Punctuation",
            Category::Keyword => "Keyword",
            Category::UncapitalizedName => "UncapitalizedName",
            Category::Label => "Label",
            Category::Predicate => "Predicate",
            Category::CapitalizedName => "CapitalizedName",
            Category::Integer => "Integer",
            Category::BinaryInteger => "BinaryInteger",
            Category::HexadecimalInteger => "HexadecimalInteger",
            Category::Fraction => "Fraction",
            Category::Repetend => "Repetend",
            Category::String => "String",
            Category::RawString => "RawString",
            Category::Binary => "Binary",
            Category::Hex => "Hex",
            Category::Documentation => "Documentation",
        }
    }

    pub fn is_name(self) -> bool {
        matches!(
            self,
            Category::UncapitalizedName
                | Category::Label
                | Category::Predicate
                | Category::CapitalizedName
        )
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Category::Integer | Category::BinaryInteger | Category::HexadecimalInteger
        )
    }

    pub fn is_fraction(self) -> bool {
        self == Category::Fraction
    }

    pub fn is_repetend(self) -> bool {
        self == Category::Repetend
    }

    pub fn is_number(self) -> bool {
        self.is_integer() || self.is_fraction() || self.is_repetend()
    }

    pub fn is_quoting(self) -> bool {
        matches!(
            self,
            Category::String | Category::RawString | Category::Binary | Category::Hex
        )
    }

    /// Is the lexeme of this category its raw source slice?
    ///
    /// Only such tokens are re-tagged as keyword or punctuation; literals
    /// and documentation carry their content without delimiters.
    pub fn is_reservable(self) -> bool {
        self.is_name() || matches!(self, Category::Punctuation | Category::Keyword)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Recognized content of a token
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Lexeme {
    /// Whitespace has no lexeme
    None,
    Keyword(Keyword),
    Punctuation(Punctuation),
    Text(String),
}

impl Lexeme {
    /// Text content, if not reserved
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Lexeme::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Spelling of the lexeme, empty for whitespace
    pub fn as_str(&self) -> &str {
        match self {
            Lexeme::None => "",
            Lexeme::Keyword(k) => k.lexeme(),
            Lexeme::Punctuation(p) => p.lexeme(),
            Lexeme::Text(text) => text,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Lexeme::None)
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lexeme::None => f.write_str("null"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// A categorized lexeme with its span in the line's code
///
/// `from..to` is a half-open range of character offsets; `to > from`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub category: Category,
    pub lexeme: Lexeme,
    pub from: usize,
    pub to: usize,
    pub invalid: bool,
}

impl Token {
    /// Create a token, re-tagging reserved lexemes
    ///
    /// A `None` lexeme makes a whitespace token. For raw-slice categories a
    /// lexeme found in the keyword or punctuation registry overrides the
    /// proposed category.
    ///
    /// # Example
    ///
    /// ```
    /// use kalkc_lex::token::{Category, Keyword, Lexeme, Token};
    ///
    /// let token = Token::new(Category::UncapitalizedName, Some("while"), 0, 5, false);
    /// assert_eq!(token.category, Category::Keyword);
    /// assert_eq!(token.lexeme, Lexeme::Keyword(Keyword::While));
    /// ```
    pub fn new(category: Category, lexeme: Option<&str>, from: usize, to: usize, invalid: bool) -> Self {
        debug_assert!(to > from, "empty token span {}..{}", from, to);

        let (category, lexeme) = match lexeme {
            None => (Category::Whitespace, Lexeme::None),
            Some(text) if category.is_reservable() => match Reserved::lookup(text) {
                Some(Reserved::Keyword(k)) => (Category::Keyword, Lexeme::Keyword(k)),
                Some(Reserved::Punctuation(p)) => (Category::Punctuation, Lexeme::Punctuation(p)),
                None => (category, Lexeme::Text(text.to_owned())),
            },
            Some(text) => (category, Lexeme::Text(text.to_owned())),
        };

        Self {
            category,
            lexeme,
            from,
            to,
            invalid,
        }
    }

    /// Create a whitespace token
    pub fn whitespace(from: usize, to: usize, invalid: bool) -> Self {
        Self::new(Category::Whitespace, None, from, to, invalid)
    }

    /// Number of characters covered
    #[inline]
    pub fn len(&self) -> usize {
        self.to - self.from
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.to == self.from
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.lexeme == Lexeme::Keyword(keyword)
    }

    pub fn is_punctuation(&self, punctuation: Punctuation) -> bool {
        self.lexeme == Lexeme::Punctuation(punctuation)
    }

    pub fn is_name(&self) -> bool {
        self.category.is_name()
    }

    pub fn is_integer(&self) -> bool {
        self.category.is_integer()
    }

    pub fn is_fraction(&self) -> bool {
        self.category.is_fraction()
    }

    pub fn is_repetend(&self) -> bool {
        self.category.is_repetend()
    }

    pub fn is_number(&self) -> bool {
        self.category.is_number()
    }

    pub fn is_quoting(&self) -> bool {
        self.category.is_quoting()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}..{} {}", self.category, self.from, self.to, self.lexeme)?;
        if self.invalid {
            f.write_str(" (invalid)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_rows_match_identities() {
        for (i, (lexeme, keyword)) in KEYWORDS.iter().enumerate() {
            assert_eq!(keyword.id() as usize, FIRST_KEYWORD as usize + i, "{}", lexeme);
            assert_eq!(keyword.lexeme(), *lexeme);
            assert_eq!(Keyword::from_id(keyword.id()), Some(*keyword));
        }
    }

    #[test]
    fn test_punctuation_rows_match_identities() {
        for (i, row) in PUNCTUATION.iter().enumerate() {
            assert_eq!(row.punctuation.id() as usize, FIRST_PUNCTUATION as usize + i, "{}", row.lexeme);
            assert_eq!(row.punctuation.data(), row);
            assert_eq!(Punctuation::from_id(row.punctuation.id()), Some(row.punctuation));
        }
    }

    #[test]
    fn test_every_lexeme_is_unique() {
        assert_eq!(RESERVED.len(), KEYWORD_COUNT + PUNCTUATION_COUNT);
    }

    #[test]
    fn test_punctuation_lexemes_are_short() {
        for row in PUNCTUATION.iter() {
            let len = row.lexeme.chars().count();
            assert!(len == 1 || len == 2, "{}", row.lexeme);
        }
    }

    #[test]
    fn test_unambiguous_flag_matches_prefixes() {
        // A symbol is unambiguous exactly when no longer symbol extends it.
        for row in PUNCTUATION.iter() {
            let extended = PUNCTUATION
                .iter()
                .any(|other| other.lexeme.len() > row.lexeme.len() && other.lexeme.starts_with(row.lexeme));
            assert_eq!(row.unambiguous, !extended, "{}", row.lexeme);
        }
    }

    #[test]
    fn test_identity_ranges_are_disjoint() {
        for id in 0..=u8::MAX {
            let keyword = Keyword::from_id(id).is_some();
            let punctuation = Punctuation::from_id(id).is_some();
            assert!(!(keyword && punctuation));
            assert_eq!(Reserved::from_id(id).is_some(), keyword || punctuation);
        }
        assert_eq!(Reserved::from_id(52), Some(Reserved::Keyword(Keyword::Xor)));
        assert_eq!(Reserved::from_id(53), None);
        assert_eq!(Reserved::from_id(61), Some(Reserved::Punctuation(Punctuation::Specifier)));
    }

    #[test]
    fn test_lookup_forms() {
        assert_eq!(Keyword::lookup("in?"), Some(Keyword::InQuery));
        assert_eq!(Keyword::lookup("::"), None);
        assert_eq!(Punctuation::lookup("=<"), Some(Punctuation::LessOrEqual));
        assert_eq!(Punctuation::from_char('\\'), Some(Punctuation::Function));
        assert_eq!(Punctuation::from_char('a'), None);
    }

    #[test]
    fn test_demarcators() {
        let demarcators: Vec<_> = Punctuation::demarcators().map(|(l, _)| l).collect();
        assert!(demarcators.contains(&"("));
        assert!(demarcators.contains(&"::"));
        assert!(!demarcators.contains(&"="));
    }

    #[test]
    fn test_pairs_start_with_single_symbols() {
        for row in PUNCTUATION.iter().filter(|row| row.lexeme.chars().count() == 2) {
            let first = row.lexeme.chars().next().unwrap();
            assert!(Punctuation::from_char(first).is_some(), "{}", row.lexeme);
        }
    }

    #[test]
    fn test_token_retags_punctuation() {
        let token = Token::new(Category::Punctuation, Some("::"), 3, 5, false);
        assert_eq!(token.lexeme, Lexeme::Punctuation(Punctuation::TypeHinter));
        assert!(token.is_punctuation(Punctuation::TypeHinter));
    }

    #[test]
    fn test_token_keeps_literal_content() {
        let token = Token::new(Category::String, Some("if"), 0, 4, false);
        assert_eq!(token.category, Category::String);
        assert_eq!(token.lexeme.as_text(), Some("if"));
    }

    #[test]
    fn test_token_unknown_punctuation_stays_text() {
        let token = Token::new(Category::Punctuation, Some("`"), 0, 1, true);
        assert_eq!(token.category, Category::Punctuation);
        assert_eq!(token.lexeme, Lexeme::Text("`".into()));
    }

    #[test]
    fn test_whitespace_token() {
        let token = Token::whitespace(2, 4, false);
        assert_eq!(token.category, Category::Whitespace);
        assert!(token.lexeme.is_none());
        assert_eq!(token.len(), 2);
    }

    #[test]
    fn test_category_predicates() {
        assert!(Category::Label.is_name());
        assert!(Category::HexadecimalInteger.is_integer());
        assert!(Category::Repetend.is_number());
        assert!(Category::Hex.is_quoting());
        assert!(!Category::Documentation.is_reservable());
        assert!(!Category::Integer.is_reservable());
    }
}
