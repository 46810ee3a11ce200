//! Common types and utilities for sqltok commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use shardlex_lex::DialectKind;

use crate::config::Config;
use crate::error::{Result, SqltokError};

// ============================================================================
// Output Format
// ============================================================================

/// Supported token output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line: type, text, end offset
    #[default]
    Text,
    /// A JSON array of token objects
    Json,
}

// ============================================================================
// Input Utilities
// ============================================================================

/// Where a statement comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlSource {
    /// Given on the command line
    Inline(String),
    /// Read from a file
    File(PathBuf),
    /// Read from standard input
    Stdin,
}

impl SqlSource {
    /// Pick the source from the mutually exclusive `SQL` and `--file` inputs.
    pub fn from_args(sql: Option<String>, file: Option<PathBuf>) -> Result<Self> {
        match (sql, file) {
            (Some(_), Some(_)) => Err(SqltokError::Validation(
                error_messages::SQL_AND_FILE.to_string(),
            )),
            (Some(sql), None) if sql == "-" => Ok(Self::Stdin),
            (Some(sql), None) => Ok(Self::Inline(sql)),
            (None, Some(path)) => Ok(Self::File(path)),
            (None, None) => Ok(Self::Stdin),
        }
    }

    /// Name shown in diagnostics.
    pub fn origin(&self) -> String {
        match self {
            Self::Inline(_) => "<arg>".to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "<stdin>".to_string(),
        }
    }

    /// Read the statement text.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::Inline(sql) => Ok(sql.clone()),
            Self::File(path) => read_sql_file(path),
            Self::Stdin => {
                let mut sql = String::new();
                std::io::stdin().read_to_string(&mut sql)?;
                Ok(sql)
            },
        }
    }
}

/// Read a statement file, rejecting directories and missing paths.
pub fn read_sql_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(SqltokError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(SqltokError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// The command-line dialect, or the configured one.
pub fn resolve_dialect(arg: Option<DialectKind>, config: &Config) -> DialectKind {
    arg.unwrap_or(config.dialect)
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
///
/// These constants provide consistent error messages across all commands.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when both inline SQL and a file are given.
    pub const SQL_AND_FILE: &str = "Give either SQL text or --file, not both";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when jobs is zero.
    pub const INVALID_JOBS: &str = "Number of jobs must be at least 1";

    /// Error when files failed the check.
    pub const FILES_FAILED: &str = "file(s) failed lexical check";
}

// ============================================================================
// Output Messages
// ============================================================================

/// Standard output message templates.
pub mod output_messages {
    /// Generic info message prefix.
    pub const INFO: &str = "ℹ️";

    /// Message prefix when a file passes.
    pub const FILE_OK: &str = "✅";

    /// Message prefix when a file fails.
    pub const FILE_FAILED: &str = "❌";

    /// Summary prefix.
    pub const SUMMARY: &str = "📊";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_serde() {
        let json = serde_json::to_string(&OutputFormat::Json).unwrap();
        assert_eq!(json, "\"json\"");
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_sql_source_from_args() {
        assert_eq!(
            SqlSource::from_args(Some("SELECT 1".into()), None).unwrap(),
            SqlSource::Inline("SELECT 1".into())
        );
        assert_eq!(SqlSource::from_args(Some("-".into()), None).unwrap(), SqlSource::Stdin);
        assert_eq!(SqlSource::from_args(None, None).unwrap(), SqlSource::Stdin);
        assert!(matches!(
            SqlSource::from_args(Some("SELECT 1".into()), Some("q.sql".into())),
            Err(SqltokError::Validation(_))
        ));
    }

    #[test]
    fn test_sql_source_origin() {
        assert_eq!(SqlSource::Inline("x".into()).origin(), "<arg>");
        assert_eq!(SqlSource::File("q.sql".into()).origin(), "q.sql");
        assert_eq!(SqlSource::Stdin.origin(), "<stdin>");
    }

    #[test]
    fn test_read_sql_file_errors() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        assert!(matches!(
            read_sql_file(&temp_dir.path().join("missing.sql")),
            Err(SqltokError::Validation(_))
        ));
        assert!(matches!(read_sql_file(temp_dir.path()), Err(SqltokError::Validation(_))));
    }

    #[test]
    fn test_resolve_dialect() {
        let config = Config {
            dialect: DialectKind::Oracle,
            ..Config::default()
        };
        assert_eq!(resolve_dialect(None, &config), DialectKind::Oracle);
        assert_eq!(resolve_dialect(Some(DialectKind::MySql), &config), DialectKind::MySql);
    }
}
