//! Security ticker symbol.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// A security ticker symbol, e.g. `AAPL`.
///
/// Symbols are compared exactly (case-sensitive); the only normalisation
/// applied is trimming surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Creates a ticker from a symbol.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTicker` if the symbol is empty or contains
    /// whitespace.
    pub fn new(symbol: impl AsRef<str>) -> CoreResult<Self> {
        let raw = symbol.as_ref();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::invalid_ticker(raw, "empty symbol"));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(CoreError::invalid_ticker(raw, "symbol contains whitespace"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Ticker {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Ticker {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Ticker {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Ticker> for String {
    fn from(ticker: Ticker) -> Self {
        ticker.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_new_trims() {
        let ticker = Ticker::new(" MSFT ").unwrap();
        assert_eq!(ticker.as_str(), "MSFT");
        assert_eq!(ticker.to_string(), "MSFT");
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert!(Ticker::new("").is_err());
        assert!(Ticker::new("   ").is_err());
        assert!(Ticker::new("BRK B").is_err());
    }

    #[test]
    fn test_case_sensitive() {
        assert_ne!(Ticker::new("aapl").unwrap(), Ticker::new("AAPL").unwrap());
    }

    #[test]
    fn test_borrow_lookup() {
        let mut map = HashMap::new();
        map.insert(Ticker::new("AAPL").unwrap(), 1);
        assert_eq!(map.get("AAPL"), Some(&1));
    }

    #[test]
    fn test_serde() {
        let ticker = Ticker::new("GOOGL").unwrap();
        let json = serde_json::to_string(&ticker).unwrap();
        assert_eq!(json, "\"GOOGL\"");
        let parsed: Ticker = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ticker);

        assert!(serde_json::from_str::<Ticker>("\"\"").is_err());
    }
}
