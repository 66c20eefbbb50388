//! Check command: lexes a source file and fails on lexical errors.

use std::io::Write;

use tracing::debug;

use crate::commands::common::{load_unit, write_errors, SourceArgs};
use crate::error::{KalktError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    pub source: SourceArgs,
}

/// Prints the errors of the file and returns
/// [`KalktError::CompileErrors`] when there are any.
pub fn run_check(args: CheckArgs, out: &mut impl Write) -> Result<()> {
    let unit = load_unit(&args.source)?;
    write_errors(out, &unit)?;

    if unit.has_errors() {
        return Err(KalktError::CompileErrors(unit.error_count()));
    }

    debug!(component = %unit.id(), "clean");
    writeln!(out, "{}: ok ({} lines)", unit.id(), unit.line_count())?;
    Ok(())
}
