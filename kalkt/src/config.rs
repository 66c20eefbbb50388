//! Configuration module for the kalkt CLI.
//!
//! A `kalkt.toml` holds the lexer presets of a project:
//!
//! ```toml
//! [lexer]
//! indentation = 4      # or "tab"
//! parallel = true
//! jobs = 8
//! ```

use dirs::{config_dir, home_dir};
use kalkc_util::{Indentation, Presets};
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{KalktError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "kalkt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Lexer presets.
    #[serde(default)]
    pub lexer: LexerConfig,
}

/// Lexer configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexerConfig {
    /// Indentation style of the source files.
    #[serde(default)]
    pub indentation: Indentation,

    /// Lex the lines of a component in parallel.
    #[serde(default)]
    pub parallel: bool,

    /// Worker threads for parallel lexing.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: usize,
}

fn default_parallel_jobs() -> usize {
    get_num_cpus()
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            indentation: Indentation::default(),
            parallel: false,
            jobs: default_parallel_jobs(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches the current directory, then `~/.config/kalkt`, then the
    /// system configuration directory. Returns the default configuration
    /// if no file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(KalktError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            KalktError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        if config.lexer.jobs == 0 {
            return Err(KalktError::Config("lexer.jobs must be positive".to_string()));
        }
        Ok(config)
    }

    /// Presets for the lexer, with command line overrides applied.
    pub fn presets(&self, indentation: Option<Indentation>, parallel: bool) -> Presets {
        Presets {
            indentation: indentation.unwrap_or(self.lexer.indentation),
            parallel: parallel || self.lexer.parallel,
        }
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("kalkt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("kalkt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
