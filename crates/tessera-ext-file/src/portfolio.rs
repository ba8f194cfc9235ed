//! Portfolio definition files.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tessera_portfolio::{Holding, Portfolio};
use tracing::{debug, warn};

use crate::error::{FileError, FileResult};

/// On-disk shape of a portfolio file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioFile {
    /// Display name; the file stem is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Holdings in display order.
    pub portfolio: Vec<Holding>,
}

impl PortfolioFile {
    /// Converts to a [`Portfolio`], naming it `fallback_name` if unnamed.
    ///
    /// Duplicate tickers are kept (the analytics resolve them) but logged.
    pub fn into_portfolio(self, fallback_name: &str) -> Portfolio {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| fallback_name.to_string());

        let mut seen = HashSet::with_capacity(self.portfolio.len());
        for holding in &self.portfolio {
            if !seen.insert(holding.ticker.as_str()) {
                warn!(
                    portfolio = %name,
                    ticker = %holding.ticker,
                    "Duplicate ticker in portfolio; last share count wins"
                );
            }
        }

        Portfolio::new(name, self.portfolio)
    }
}

/// Loads a portfolio from a JSON file.
///
/// The portfolio is named by its `name` field, or by the file stem.
pub fn load_portfolio(path: impl AsRef<Path>) -> FileResult<Portfolio> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FileError::io(path, e))?;
    let fallback = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("portfolio");

    let portfolio = read_portfolio_json(BufReader::new(file), path, fallback)?;
    debug!(
        path = %path.display(),
        name = %portfolio.name,
        holdings = portfolio.holding_count(),
        "Loaded portfolio"
    );
    Ok(portfolio)
}

/// Reads a portfolio from JSON.
pub fn read_portfolio_json<R: Read>(
    reader: R,
    source: &Path,
    fallback_name: &str,
) -> FileResult<Portfolio> {
    let file: PortfolioFile =
        serde_json::from_reader(reader).map_err(|e| FileError::json(source, e))?;
    Ok(file.into_portfolio(fallback_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_unnamed() {
        let json = r#"{"portfolio": [{"ticker": "AAPL", "shares": 10}, {"ticker": "XOM", "shares": 5.5}]}"#;
        let portfolio = read_portfolio_json(json.as_bytes(), Path::new("a.json"), "portfolioA")
            .unwrap();
        assert_eq!(portfolio.name, "portfolioA");
        assert_eq!(portfolio.holding_count(), 2);
        assert_eq!(portfolio.get("XOM").map(|h| h.shares), Some(5.5));
    }

    #[test]
    fn test_read_named() {
        let json = r#"{"name": "Income", "portfolio": []}"#;
        let portfolio = read_portfolio_json(json.as_bytes(), Path::new("b.json"), "b").unwrap();
        assert_eq!(portfolio.name, "Income");
        assert!(portfolio.is_empty());
    }

    #[test]
    fn test_duplicates_kept() {
        let json = r#"{"portfolio": [{"ticker": "AAPL", "shares": 1}, {"ticker": "AAPL", "shares": 2}]}"#;
        let portfolio = read_portfolio_json(json.as_bytes(), Path::new("d.json"), "d").unwrap();
        assert_eq!(portfolio.holding_count(), 2);
        assert!(portfolio.validate().is_err());
    }

    #[test]
    fn test_missing_holdings_key() {
        let err = read_portfolio_json(r#"{"holdings": []}"#.as_bytes(), Path::new("x.json"), "x")
            .unwrap_err();
        assert!(matches!(err, FileError::Json { .. }));
    }

    #[test]
    fn test_blank_ticker_rejected() {
        let json = r#"{"portfolio": [{"ticker": " ", "shares": 1}]}"#;
        assert!(read_portfolio_json(json.as_bytes(), Path::new("x.json"), "x").is_err());
    }
}
