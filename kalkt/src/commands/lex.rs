//! Lex command: prints every token of a source file, then its errors.

use std::io::Write;

use crate::commands::common::{load_unit, write_errors, SourceArgs};
use crate::error::Result;

/// Arguments for the lex command.
#[derive(Debug, Clone)]
pub struct LexArgs {
    pub source: SourceArgs,
    /// Leave whitespace tokens out of the listing
    pub skip_whitespace: bool,
}

/// Prints `nr from..to level category lexeme` per token.
///
/// Invalid tokens are marked with `!`.
pub fn run_lex(args: LexArgs, out: &mut impl Write) -> Result<()> {
    let unit = load_unit(&args.source)?;

    for line in unit.lines().values() {
        for token in line.tokens().unwrap_or_default() {
            if args.skip_whitespace && token.lexeme.is_none() {
                continue;
            }
            let span = format!("{}..{}", token.from, token.to);
            writeln!(
                out,
                "{:>5} {:<9} L{:<2} {:<18} {}{}",
                line.nr(),
                span,
                line.level(),
                token.category,
                token.lexeme,
                if token.invalid { " !" } else { "" }
            )?;
        }
    }

    write_errors(out, &unit)
}
