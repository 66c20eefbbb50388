//! Common types and utilities for kalkt commands.

use std::io::Write;
use std::path::{Path, PathBuf};

use kalkc_lex::{linearize, Unit};
use kalkc_util::{ComponentId, Presets};
use tracing::{debug, info};

use crate::error::{KalktError, Result};

/// Source file and presets shared by every command.
#[derive(Debug, Clone)]
pub struct SourceArgs {
    pub file: PathBuf,
    pub presets: Presets,
    pub verbose: bool,
}

/// Component identifier derived from the file name, `geometry.kal` -> `geometry`.
pub fn component_id(path: &Path) -> ComponentId {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(ComponentId::parse)
        .unwrap_or_default()
}

/// Reads the source file of a command.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(KalktError::FileOperation(format!(
            "Input path is not a file: {}",
            path.display()
        )));
    }
    std::fs::read_to_string(path)
        .map_err(|e| KalktError::FileOperation(format!("{}: {}", path.display(), e)))
}

/// Linearizes the source file without tokenizing it.
pub fn load_lines(args: &SourceArgs) -> Result<Unit> {
    let source = read_source(&args.file)?;
    let unit = linearize(&source, component_id(&args.file), args.presets.indentation);
    debug!(file = %args.file.display(), lines = unit.line_count(), "loaded");
    Ok(unit)
}

/// Linearizes and tokenizes the source file.
pub fn load_unit(args: &SourceArgs) -> Result<Unit> {
    let mut unit = load_lines(args)?;
    unit.tokenize(args.presets.parallel)?;
    if args.verbose {
        info!(
            component = %unit.id(),
            lines = unit.line_count(),
            errors = unit.error_count(),
            "tokenized"
        );
    }
    Ok(unit)
}

/// Prints the errors of a unit, one per line.
pub fn write_errors(out: &mut impl Write, unit: &Unit) -> Result<()> {
    for error in unit.errors() {
        writeln!(out, "{}: {}", unit.id(), error)?;
    }
    Ok(())
}
