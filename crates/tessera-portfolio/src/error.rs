//! Error types for portfolio analytics.
//!
//! The analytics themselves never fail on missing data; they degrade by
//! excluding what cannot be priced. Errors are reserved for inputs the
//! caller controls: absent collections, unparseable dates, and invalid
//! portfolio definitions.

use tessera_core::CoreError;
use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// A required input was absent or malformed.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: String,
    },

    /// Invalid portfolio configuration.
    #[error("Invalid portfolio: {reason}")]
    InvalidPortfolio {
        /// The reason the portfolio is invalid.
        reason: String,
    },

    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// The same ticker appears more than once in a portfolio.
    #[error("Duplicate holding '{ticker}' in portfolio")]
    DuplicateHolding {
        /// The repeated ticker.
        ticker: String,
    },

    /// A core primitive could not be constructed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl PortfolioError {
    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create an invalid portfolio error.
    #[must_use]
    pub fn invalid_portfolio(reason: impl Into<String>) -> Self {
        Self::InvalidPortfolio {
            reason: reason.into(),
        }
    }

    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a duplicate holding error.
    #[must_use]
    pub fn duplicate_holding(ticker: impl Into<String>) -> Self {
        Self::DuplicateHolding {
            ticker: ticker.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::invalid_input("price history is absent");
        assert!(err.to_string().starts_with("Invalid input"));
        assert!(err.to_string().contains("price history"));

        let err = PortfolioError::missing_field("name");
        assert!(err.to_string().contains("name"));

        let err = PortfolioError::duplicate_holding("AAPL");
        assert!(err.to_string().contains("AAPL"));
    }

    #[test]
    fn test_from_core_error() {
        let err: PortfolioError = CoreError::invalid_date("Cannot parse: x").into();
        assert!(err.to_string().contains("Invalid date"));
    }
}
