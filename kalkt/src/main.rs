//! Kalkt CLI - command-line front end for the Kalkyl lexer.
//!
//! Reads a component source file, linearizes and tokenizes it, and prints
//! lines, tokens or lexical errors. Presets come from `kalkt.toml` and can
//! be overridden per invocation.

mod commands;
mod config;
mod error;

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kalkc_util::Indentation;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::SourceArgs, run_check, run_lex, run_lines, CheckArgs, LexArgs, LinesArgs,
};
use config::Config;
use error::{KalktError, Result};

/// Kalkt - inspect how the Kalkyl lexer reads a component
#[derive(Parser, Debug)]
#[command(name = "kalkt")]
#[command(author = "Kalkyl Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical front end for Kalkyl components", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "KALKT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "KALKT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "KALKT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the kalkt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the logical lines of a source file
    ///
    /// Shows line number, indentation level, content hash and code of every
    /// line left after removing blank lines and comments.
    Lines(SourceCommand),

    /// Print the tokens of a source file
    ///
    /// Lists every token with its span and category, followed by the
    /// lexical errors.
    Lex(LexCommand),

    /// Check a source file for lexical errors
    ///
    /// Exits with a failure status when any error is found.
    Check(SourceCommand),
}

/// Source file and preset overrides.
#[derive(Parser, Debug)]
struct SourceCommand {
    /// Component source file
    file: PathBuf,

    /// Indentation: "tab" or the number of spaces per level
    #[arg(short, long)]
    indent: Option<Indentation>,

    /// Lex lines in parallel
    #[arg(short, long)]
    parallel: bool,
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    #[command(flatten)]
    source: SourceCommand,

    /// Leave whitespace tokens out
    #[arg(long)]
    skip_whitespace: bool,
}

/// Main entry point for the kalkt CLI.
fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, cli.verbose, config)
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over `--verbose`. Logs go to stderr so
/// listings on stdout stay machine readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| KalktError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Sizes the global thread pool used for parallel lexing.
fn init_thread_pool(jobs: usize) -> Result<()> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build_global()
        .map_err(|e| KalktError::Config(format!("Failed to start {} lexer threads: {}", jobs, e)))
}

fn source_args(command: SourceCommand, verbose: bool, config: &Config) -> Result<SourceArgs> {
    let presets = config.presets(command.indent, command.parallel);
    if presets.parallel {
        init_thread_pool(config.lexer.jobs)?;
    }
    debug!(indentation = %presets.indentation, parallel = presets.parallel, "presets");

    Ok(SourceArgs {
        file: command.file,
        presets,
        verbose,
    })
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    let mut out = io::stdout().lock();
    match command {
        Commands::Lines(args) => {
            let source = source_args(args, verbose, &config)?;
            run_lines(LinesArgs { source }, &mut out)
        }
        Commands::Lex(args) => {
            let source = source_args(args.source, verbose, &config)?;
            let lex_args = LexArgs {
                source,
                skip_whitespace: args.skip_whitespace,
            };
            run_lex(lex_args, &mut out)
        }
        Commands::Check(args) => {
            let source = source_args(args, verbose, &config)?;
            run_check(CheckArgs { source }, &mut out)
        }
    }
}
