//! Directory-backed portfolio catalog.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tessera_portfolio::Portfolio;
use tracing::{info, warn};

use crate::error::{FileError, FileResult};
use crate::portfolio::load_portfolio;

/// Portfolios keyed by name.
#[derive(Debug, Clone, Default)]
pub struct PortfolioCatalog {
    portfolios: BTreeMap<String, Portfolio>,
}

impl PortfolioCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every `*.json` file in `dir`.
    ///
    /// Files are read in path order; when two files declare the same name
    /// the later one replaces the earlier.
    pub fn from_dir(dir: impl AsRef<Path>) -> FileResult<Self> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir).map_err(|e| FileError::io(dir, e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| FileError::io(dir, e))?.path();
            let is_json = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("json"));
            if path.is_file() && is_json {
                paths.push(path);
            }
        }
        paths.sort();

        let mut catalog = Self::new();
        for path in paths {
            catalog.insert(load_portfolio(&path)?);
        }

        info!(
            dir = %dir.display(),
            portfolios = catalog.len(),
            "Loaded portfolio catalog"
        );
        Ok(catalog)
    }

    /// Adds a portfolio, replacing any with the same name.
    pub fn insert(&mut self, portfolio: Portfolio) {
        if let Some(previous) = self.portfolios.insert(portfolio.name.clone(), portfolio) {
            warn!(name = %previous.name, "Portfolio name declared twice; keeping the later file");
        }
    }

    /// Returns the portfolio with the given name.
    pub fn get(&self, name: &str) -> FileResult<&Portfolio> {
        self.portfolios
            .get(name)
            .ok_or_else(|| FileError::portfolio_not_found(name))
    }

    /// Portfolio names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.portfolios.keys().map(String::as_str)
    }

    /// Number of portfolios.
    #[must_use]
    pub fn len(&self) -> usize {
        self.portfolios.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.portfolios.is_empty()
    }

    /// Iterates over portfolios in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Portfolio> {
        self.portfolios.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_portfolio::Holding;

    #[test]
    fn test_get_unknown() {
        let catalog = PortfolioCatalog::new();
        let err = catalog.get("portfolioZ").unwrap_err();
        assert!(matches!(err, FileError::PortfolioNotFound { ref name } if name == "portfolioZ"));
    }

    #[test]
    fn test_insert_replaces() {
        let mut catalog = PortfolioCatalog::new();
        catalog.insert(Portfolio::new("A", vec![]));
        catalog.insert(Portfolio::new(
            "A",
            vec![Holding::from_symbol("AAPL", 1.0).unwrap()],
        ));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("A").unwrap().holding_count(), 1);
    }
}
