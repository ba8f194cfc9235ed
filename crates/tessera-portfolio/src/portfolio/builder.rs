//! Portfolio builder for fluent construction.

use crate::types::Holding;
use crate::{Portfolio, PortfolioError, PortfolioResult};

/// Builder for constructing a validated [`Portfolio`].
///
/// # Example
///
/// ```rust
/// use tessera_portfolio::prelude::*;
///
/// let portfolio = PortfolioBuilder::new()
///     .name("portfolioA")
///     .add_holding(Holding::from_symbol("AAPL", 10.0)?)
///     .add_holding(Holding::from_symbol("MSFT", 20.0)?)
///     .build()?;
/// assert_eq!(portfolio.holding_count(), 2);
/// # Ok::<(), PortfolioError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PortfolioBuilder {
    name: Option<String>,
    holdings: Vec<Holding>,
}

impl PortfolioBuilder {
    /// Creates a new portfolio builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the portfolio name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a holding to the portfolio.
    #[must_use]
    pub fn add_holding(mut self, holding: Holding) -> Self {
        self.holdings.push(holding);
        self
    }

    /// Adds multiple holdings to the portfolio.
    #[must_use]
    pub fn add_holdings(mut self, holdings: impl IntoIterator<Item = Holding>) -> Self {
        self.holdings.extend(holdings);
        self
    }

    /// Sets all holdings (replacing any existing).
    #[must_use]
    pub fn holdings(mut self, holdings: Vec<Holding>) -> Self {
        self.holdings = holdings;
        self
    }

    /// Builds the portfolio.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is missing
    /// - Validation fails (blank name, non-finite shares, duplicate tickers)
    pub fn build(self) -> PortfolioResult<Portfolio> {
        let name = self
            .name
            .ok_or_else(|| PortfolioError::missing_field("name"))?;

        let portfolio = Portfolio {
            name,
            holdings: self.holdings,
        };

        portfolio.validate()?;

        Ok(portfolio)
    }
}
