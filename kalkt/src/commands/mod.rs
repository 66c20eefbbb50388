//! Command modules for the kalkt CLI.
//!
//! Every subcommand reads one source file, lexes it with the resolved
//! presets and prints a plain-text report to the given writer.

pub mod common;

pub mod check;
pub mod lex;
pub mod lines;

pub use check::{run_check, CheckArgs};
pub use lex::{run_lex, LexArgs};
pub use lines::{run_lines, LinesArgs};
