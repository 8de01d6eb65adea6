//! CLI argument definitions for the DocChat application.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use std::path::PathBuf;

use clap::Parser;
use docchat_core::config::expand_home;

/// DocChat: ask questions about your documents, or about your database.
#[derive(Parser, Debug)]
#[command(name = "docchat", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// SQLite database used by the text-to-SQL mode.
    #[arg(short = 'd', long = "database")]
    pub database: Option<PathBuf>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > DOCCHAT_CONFIG env var > ~/.docchat/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("DOCCHAT_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the log level: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }

    /// Resolve the database path: --database flag > config file value.
    pub fn resolve_database(&self, config_path: &str) -> PathBuf {
        match self.database {
            Some(ref p) => p.clone(),
            None => expand_home(config_path),
        }
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    expand_home("~/.docchat/config.toml")
}
