//! Error handling module for the sqltok CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use std::fmt;

use shardlex_lex::LexicalError;
use thiserror::Error;

/// Main error type for the sqltok CLI application.
///
/// This enum represents all possible errors that can occur
/// during the execution of sqltok commands.
#[derive(Error)]
pub enum SqltokError {
    /// Error when the configuration cannot be loaded or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a statement cannot be tokenized.
    #[error("Lexical error: {0}")]
    Lexical(#[from] LexicalError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// `main` reports errors through `Debug`; show the message, not the variant.
impl fmt::Debug for SqltokError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Result type alias using SqltokError.
pub type Result<T> = std::result::Result<T, SqltokError>;
