//! Portfolio struct and core methods.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tessera_core::{Date, Ticker};

use crate::contribution::{compute_contribution, ContributionReport};
use crate::trailing::{portfolio_trailing_returns, HoldingTrailingReturns};
use crate::types::{AnalyticsConfig, Holding, PriceRecord};
use crate::valuation::{value_portfolio, PortfolioValuation};
use crate::{PortfolioError, PortfolioResult};

/// A named, ordered set of equity holdings.
///
/// Holding order is significant: every analytic reports holdings in the
/// order they appear here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Portfolio name, used to select it from a catalog.
    pub name: String,

    /// Holdings in display order.
    pub holdings: Vec<Holding>,
}

impl Portfolio {
    /// Creates a portfolio without validation.
    ///
    /// Use [`Portfolio::builder`] or call [`Portfolio::validate`] when
    /// duplicate tickers should be rejected.
    #[must_use]
    pub fn new(name: impl Into<String>, holdings: Vec<Holding>) -> Self {
        Self {
            name: name.into(),
            holdings,
        }
    }

    /// Creates a new portfolio builder.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> super::PortfolioBuilder {
        super::PortfolioBuilder::new().name(name)
    }

    /// Returns the number of holdings.
    #[must_use]
    pub fn holding_count(&self) -> usize {
        self.holdings.len()
    }

    /// Returns true if the portfolio has no holdings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Returns the tickers in holding order.
    #[must_use]
    pub fn tickers(&self) -> Vec<&Ticker> {
        self.holdings.iter().map(|h| &h.ticker).collect()
    }

    /// Returns the holding for a ticker (the last one if duplicated).
    #[must_use]
    pub fn get(&self, ticker: &str) -> Option<&Holding> {
        self.holdings
            .iter()
            .rev()
            .find(|h| h.ticker.as_str() == ticker)
    }

    /// Contribution to return for every priced holding between two dates.
    #[must_use]
    pub fn contribution(
        &self,
        price_history: &[PriceRecord],
        start_date: Date,
        end_date: Date,
    ) -> ContributionReport {
        compute_contribution(price_history, &self.holdings, start_date, end_date)
    }

    /// Values the portfolio at the close of `date`.
    #[must_use]
    pub fn value_on(&self, price_history: &[PriceRecord], date: Date) -> PortfolioValuation {
        value_portfolio(price_history, &self.holdings, date)
    }

    /// Trailing returns for every holding around `anchor`.
    #[must_use]
    pub fn trailing_returns(
        &self,
        price_history: &[PriceRecord],
        anchor: Date,
        config: &AnalyticsConfig,
    ) -> Vec<HoldingTrailingReturns> {
        portfolio_trailing_returns(price_history, &self.holdings, anchor, config)
    }

    /// Validates the portfolio.
    ///
    /// Checks for:
    /// - A non-blank name
    /// - Finite share counts
    /// - Unique tickers
    pub fn validate(&self) -> PortfolioResult<()> {
        if self.name.trim().is_empty() {
            return Err(PortfolioError::invalid_portfolio("name is blank"));
        }

        let mut seen = HashSet::with_capacity(self.holdings.len());
        for holding in &self.holdings {
            if !holding.shares.is_finite() {
                return Err(PortfolioError::invalid_portfolio(format!(
                    "shares for '{}' are not finite",
                    holding.ticker
                )));
            }
            if !seen.insert(holding.ticker.as_str()) {
                return Err(PortfolioError::duplicate_holding(holding.ticker.as_str()));
            }
        }

        Ok(())
    }
}
