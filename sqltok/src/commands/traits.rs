//! Command trait and common types for the sqltok CLI.
//!
//! This module defines the standard command traits that all commands
//! implement to ensure consistency across the application.

use crate::error::Result;

/// Standard command trait that all sqltok commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Trait for providing command descriptions and help text.
pub trait CommandDescription {
    /// Get a short description of the command.
    fn description() -> &'static str;

    /// Get detailed help text for the command.
    fn help() -> &'static str;
}

/// Command execution result with metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult<T = ()> {
    /// The command output data.
    pub data: T,

    /// Number of items processed (statements, files).
    pub items_processed: usize,

    /// Number of items that failed.
    pub items_failed: usize,

    /// Execution time in milliseconds.
    pub execution_time_ms: u64,
}

impl<T> CommandResult<T> {
    /// Create a new command result.
    pub fn new(data: T) -> Self {
        Self {
            data,
            items_processed: 0,
            items_failed: 0,
            execution_time_ms: 0,
        }
    }

    /// Whether every item succeeded.
    pub fn is_success(&self) -> bool {
        self.items_failed == 0
    }

    /// Set the number of items processed.
    pub fn with_items_processed(mut self, count: usize) -> Self {
        self.items_processed = count;
        self
    }

    /// Set the number of items failed.
    pub fn with_items_failed(mut self, count: usize) -> Self {
        self.items_failed = count;
        self
    }

    /// Set the execution time.
    pub fn with_execution_time_ms(mut self, time_ms: u64) -> Self {
        self.execution_time_ms = time_ms;
        self
    }
}
