//! Portfolio holdings.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tessera_core::Ticker;

use crate::error::PortfolioResult;

/// A (ticker, share count) position within a portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Security symbol.
    pub ticker: Ticker,

    /// Number of shares held. Zero and negative counts are allowed.
    pub shares: f64,
}

impl Holding {
    /// Creates a holding from an already validated ticker.
    #[must_use]
    pub fn new(ticker: Ticker, shares: f64) -> Self {
        Self { ticker, shares }
    }

    /// Creates a holding from a raw symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol is not a valid ticker.
    pub fn from_symbol(symbol: &str, shares: f64) -> PortfolioResult<Self> {
        Ok(Self::new(Ticker::new(symbol)?, shares))
    }
}

/// A holding after duplicate tickers have been collapsed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolvedHolding<'a> {
    pub ticker: &'a Ticker,
    pub shares: f64,
}

/// Collapses holdings to one entry per ticker.
///
/// Each ticker keeps the position of its first occurrence and the share
/// count of its last occurrence (the ticker → shares lookup is built in
/// input order, so later entries overwrite earlier ones).
pub(crate) fn resolve_holdings(holdings: &[Holding]) -> Vec<ResolvedHolding<'_>> {
    let shares_by_ticker: HashMap<&str, f64> = holdings
        .iter()
        .map(|h| (h.ticker.as_str(), h.shares))
        .collect();

    let mut resolved = Vec::with_capacity(shares_by_ticker.len());
    let mut emitted: HashSet<&str> = HashSet::with_capacity(shares_by_ticker.len());
    for holding in holdings {
        let ticker = holding.ticker.as_str();
        if !emitted.insert(ticker) {
            continue;
        }
        resolved.push(ResolvedHolding {
            ticker: &holding.ticker,
            shares: shares_by_ticker.get(ticker).copied().unwrap_or(holding.shares),
        });
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holding(symbol: &str, shares: f64) -> Holding {
        Holding::from_symbol(symbol, shares).unwrap()
    }

    #[test]
    fn test_from_symbol_rejects_empty() {
        assert!(Holding::from_symbol("", 1.0).is_err());
    }

    #[test]
    fn test_resolve_preserves_order() {
        let holdings = vec![holding("CCC", 1.0), holding("AAA", 2.0), holding("BBB", 3.0)];
        let resolved = resolve_holdings(&holdings);
        let tickers: Vec<&str> = resolved.iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["CCC", "AAA", "BBB"]);
    }

    #[test]
    fn test_resolve_duplicates_last_write_wins() {
        let holdings = vec![holding("AAA", 10.0), holding("BBB", 5.0), holding("AAA", 30.0)];
        let resolved = resolve_holdings(&holdings);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].ticker.as_str(), "AAA");
        assert_eq!(resolved[0].shares, 30.0);
        assert_eq!(resolved[1].shares, 5.0);
    }

    #[test]
    fn test_serde() {
        let json = r#"{"ticker":"AAPL","shares":25}"#;
        let parsed: Holding = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, holding("AAPL", 25.0));
    }
}
