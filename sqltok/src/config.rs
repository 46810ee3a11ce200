//! Configuration module for the sqltok CLI.
//!
//! This module handles locating and loading configuration
//! settings for the sqltok application.

use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use serde::Deserialize;
use shardlex_lex::DialectKind;
use std::path::{Path, PathBuf};

use crate::commands::common::OutputFormat;
use crate::error::{Result, SqltokError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "sqltok.toml";

/// Application configuration structure.
///
/// Command-line flags override every value here.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Dialect used when `--dialect` is not given.
    #[serde(default)]
    pub dialect: DialectKind,

    /// Token output format used when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,

    /// Check-specific configuration.
    #[serde(default)]
    pub check: CheckConfig,
}

/// Check-specific configuration options.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CheckConfig {
    /// Number of files lexed in parallel.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: usize,

    /// Stop checking new files after the first failure.
    #[serde(default)]
    pub fail_fast: bool,
}

/// Number of available CPUs, never less than one.
fn default_parallel_jobs() -> usize {
    get_num_cpus().max(1)
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            jobs: default_parallel_jobs(),
            fail_fast: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User's home directory
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SqltokError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            SqltokError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        if config.check.jobs == 0 {
            return Err(SqltokError::Config(
                "check.jobs must be at least 1".to_string(),
            ));
        }

        tracing::debug!(path = %path.display(), dialect = %config.dialect, "loaded configuration");
        Ok(config)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("sqltok").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("sqltok").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
