//! Lexer module.
//!
//! This module organizes the per-line state machine into smaller, focused components:
//! - `core` - Lexer struct, modes, dispatch and emission
//! - `word` - Name, keyword and string prefix lexing
//! - `number` - Integer, fraction and repetend lexing
//! - `quote` - Double- and single-quoted literal lexing
//! - `punctuation` - Punctuation and operator lexing

mod core;
mod number;
mod punctuation;
mod quote;
mod word;

pub use self::core::tokenize;
