//! Error types for file loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for file operations.
pub type FileResult<T> = Result<T, FileError>;

/// Errors raised while reading price or portfolio files.
#[derive(Error, Debug)]
pub enum FileError {
    /// The file could not be opened or read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON for the expected shape.
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        /// File being read.
        path: PathBuf,
        /// Underlying error, with line and column.
        #[source]
        source: serde_json::Error,
    },

    /// The CSV file could not be opened or its header is unusable.
    #[error("Invalid CSV in {path}: {source}")]
    Csv {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: csv::Error,
    },

    /// A single data row could not be parsed.
    #[error("Invalid row {row} in {path}: {reason}")]
    InvalidRow {
        /// File being read.
        path: PathBuf,
        /// One-based data row number (header excluded).
        row: usize,
        /// What was wrong with the row.
        reason: String,
    },

    /// The file extension is neither `.json` nor `.csv`.
    #[error("Unsupported file format: {path} (expected .json or .csv)")]
    UnsupportedFormat {
        /// Offending path.
        path: PathBuf,
    },

    /// No portfolio with the requested name exists in the catalog.
    #[error("Portfolio not found: {name}")]
    PortfolioNotFound {
        /// Requested name.
        name: String,
    },
}

impl FileError {
    /// Creates an I/O error for a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a JSON error for a path.
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// Creates a CSV error for a path.
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid row error.
    pub fn invalid_row(path: impl Into<PathBuf>, row: usize, reason: impl Into<String>) -> Self {
        Self::InvalidRow {
            path: path.into(),
            row,
            reason: reason.into(),
        }
    }

    /// Creates a portfolio not found error.
    pub fn portfolio_not_found(name: impl Into<String>) -> Self {
        Self::PortfolioNotFound { name: name.into() }
    }
}
