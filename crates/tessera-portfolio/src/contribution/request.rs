//! Validated entry points for untyped callers.
//!
//! [`compute_contribution`](super::compute_contribution) takes typed inputs
//! and never fails. Callers holding text dates or deserialized payloads go
//! through here instead, where absent collections and unparseable dates are
//! rejected up front.

use serde::{Deserialize, Serialize};
use tessera_core::Date;

use super::{compute_contribution, ContributionReport};
use crate::error::{PortfolioError, PortfolioResult};
use crate::types::{Holding, PriceRecord};

/// A contribution query as received from an external caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContributionRequest {
    /// Daily price records.
    #[serde(default)]
    pub price_history: Option<Vec<PriceRecord>>,

    /// Portfolio holdings.
    #[serde(default)]
    pub portfolio: Option<Vec<Holding>>,

    /// Start date, `YYYY-MM-DD`.
    pub start_date: String,

    /// End date, `YYYY-MM-DD`.
    pub end_date: String,
}

impl ContributionRequest {
    /// Parses a request from JSON.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::InvalidInput` if the payload is not a valid
    /// request.
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| PortfolioError::invalid_input(format!("malformed request: {e}")))
    }

    /// Validates the request and computes the contribution report.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::InvalidInput` if the price history or
    /// portfolio is absent, or either date does not parse.
    pub fn evaluate(&self) -> PortfolioResult<ContributionReport> {
        let price_history = self
            .price_history
            .as_deref()
            .ok_or_else(|| PortfolioError::invalid_input("price history is absent"))?;
        let portfolio = self
            .portfolio
            .as_deref()
            .ok_or_else(|| PortfolioError::invalid_input("portfolio is absent"))?;

        compute_contribution_str(price_history, portfolio, &self.start_date, &self.end_date)
    }
}

/// Computes contribution to return with `YYYY-MM-DD` date strings.
///
/// # Errors
///
/// Returns `PortfolioError::InvalidInput` if either date does not parse.
pub fn compute_contribution_str(
    price_history: &[PriceRecord],
    holdings: &[Holding],
    start_date: &str,
    end_date: &str,
) -> PortfolioResult<ContributionReport> {
    let start = parse_input_date("start date", start_date)?;
    let end = parse_input_date("end date", end_date)?;
    Ok(compute_contribution(price_history, holdings, start, end))
}

fn parse_input_date(label: &str, value: &str) -> PortfolioResult<Date> {
    Date::parse(value).map_err(|e| PortfolioError::invalid_input(format!("{label}: {e}")))
}
