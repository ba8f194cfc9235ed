//! CLI error types.

use std::path::PathBuf;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Invalid band threshold.
    #[error("Invalid threshold: {0}. Must be a finite non-negative number.")]
    InvalidThreshold(f64),

    /// Missing required argument with no configured fallback.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// The price file has no rows.
    #[error("Price history is empty: {}", .0.display())]
    EmptyHistory(PathBuf),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
