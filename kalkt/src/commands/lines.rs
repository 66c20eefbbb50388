//! Lines command: prints the linearized lines of a source file.

use std::io::Write;

use crate::commands::common::{load_lines, SourceArgs};
use crate::error::Result;

/// Arguments for the lines command.
#[derive(Debug, Clone)]
pub struct LinesArgs {
    pub source: SourceArgs,
}

/// Prints `nr level hash code` for every stored line.
pub fn run_lines(args: LinesArgs, out: &mut impl Write) -> Result<()> {
    let unit = load_lines(&args.source)?;
    for line in unit.lines().values() {
        writeln!(
            out,
            "{:>5} L{:<2} {:016x} {}",
            line.nr(),
            line.level(),
            line.hash(),
            line.code()
        )?;
    }
    Ok(())
}
