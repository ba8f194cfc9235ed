//! Error types for Tessera core primitives.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised when constructing core primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Ticker symbol is empty or malformed.
    #[error("Invalid ticker '{symbol}': {reason}")]
    InvalidTicker {
        /// The rejected symbol.
        symbol: String,
        /// Reason for rejection.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid ticker error.
    #[must_use]
    pub fn invalid_ticker(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTicker {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));

        let err = CoreError::invalid_ticker("", "empty symbol");
        assert!(err.to_string().contains("empty symbol"));
    }
}
