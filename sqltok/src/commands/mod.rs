//! Command modules for the sqltok CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod traits;
pub mod common;

pub mod tokenize;
pub mod check;
pub mod keywords;

// Re-export command types and functions
pub use tokenize::{TokenizeArgs, run_tokenize};
pub use check::{CheckArgs, run_check};
pub use keywords::{KeywordsArgs, run_keywords};
