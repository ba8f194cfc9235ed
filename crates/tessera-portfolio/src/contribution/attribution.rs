//! Contribution to return.
//!
//! Each holding's contribution is its starting-value weight times its price
//! return over the range:
//! - Return = (end price - start price) / start price
//! - Weight = start value / total start value of priced holdings
//! - Contribution = weight × return
//!
//! The contributions sum to the value-weighted portfolio return.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tessera_core::{Date, Ticker};
use tracing::debug;

use crate::types::{resolve_holdings, Holding, PriceRecord};

/// Return and contribution for a single holding over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnRecord {
    /// Holding ticker.
    pub ticker: Ticker,

    /// Shares held.
    pub shares: f64,

    /// Close on the start date.
    pub start_price: f64,

    /// Close on the end date.
    pub end_price: f64,

    /// shares × start price.
    pub start_value: f64,

    /// shares × end price.
    pub end_value: f64,

    /// Price return over the range (decimal, 0.05 = 5%).
    pub return_pct: f64,

    /// Share of total start value (0-1 for long-only portfolios).
    pub weight: f64,

    /// weight × return (decimal).
    pub contribution_pct: f64,
}

/// Contribution to return for a portfolio over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionReport {
    /// Start of the range.
    pub start_date: Date,

    /// End of the range.
    pub end_date: Date,

    /// Priced holdings in portfolio order.
    pub per_holding: Vec<ReturnRecord>,

    /// Sum of contributions (value-weighted portfolio return).
    pub total_return: f64,

    /// Sum of start values of priced holdings.
    pub total_start_value: f64,

    /// Sum of end values of priced holdings.
    pub total_end_value: f64,

    /// Holdings dropped for lacking a start or end price, in portfolio order.
    pub excluded: Vec<Ticker>,
}

impl ContributionReport {
    /// An empty report for the given range.
    #[must_use]
    pub fn empty(start_date: Date, end_date: Date) -> Self {
        Self {
            start_date,
            end_date,
            per_holding: Vec::new(),
            total_return: 0.0,
            total_start_value: 0.0,
            total_end_value: 0.0,
            excluded: Vec::new(),
        }
    }

    /// Returns true if no holding could be priced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.per_holding.is_empty()
    }

    /// Returns the record for a ticker, if it was priced.
    #[must_use]
    pub fn get(&self, ticker: &str) -> Option<&ReturnRecord> {
        self.per_holding
            .iter()
            .find(|r| r.ticker.as_str() == ticker)
    }

    /// Change in portfolio value over the range.
    #[must_use]
    pub fn value_change(&self) -> f64 {
        self.total_end_value - self.total_start_value
    }
}

/// Calculates each holding's contribution to portfolio return.
///
/// Dates are matched exactly. A holding is included only when the price
/// history has a close for its ticker on both `start_date` and `end_date`;
/// otherwise it is excluded from the records and from the weighting
/// denominator. Duplicate (ticker, date) rows resolve to the last one in
/// input order. A zero total start value yields zero weights and a zero
/// total rather than NaN.
///
/// # Arguments
///
/// * `price_history` - Daily records, in any order
/// * `holdings` - Portfolio holdings; output follows this order
/// * `start_date` - First day of the range
/// * `end_date` - Last day of the range
///
/// # Example
///
/// ```rust
/// use tessera_portfolio::prelude::*;
///
/// let d1 = Date::parse("2020-01-01").unwrap();
/// let d2 = Date::parse("2020-12-31").unwrap();
/// let aaa = Ticker::new("AAA").unwrap();
/// let history = vec![
///     PriceRecord::close_only(d1, aaa.clone(), 100.0),
///     PriceRecord::close_only(d2, aaa.clone(), 150.0),
/// ];
/// let holdings = vec![Holding::new(aaa, 10.0)];
///
/// let report = compute_contribution(&history, &holdings, d1, d2);
/// assert!((report.total_return - 0.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn compute_contribution(
    price_history: &[PriceRecord],
    holdings: &[Holding],
    start_date: Date,
    end_date: Date,
) -> ContributionReport {
    let resolved = resolve_holdings(holdings);
    let wanted: HashSet<&str> = resolved.iter().map(|h| h.ticker.as_str()).collect();

    let start_prices = close_prices_on(price_history, start_date, &wanted);
    let end_prices = close_prices_on(price_history, end_date, &wanted);

    let mut per_holding: Vec<ReturnRecord> = Vec::with_capacity(resolved.len());
    let mut excluded = Vec::new();
    let mut total_start_value = 0.0;
    let mut total_end_value = 0.0;

    for holding in resolved {
        let ticker = holding.ticker.as_str();
        let (Some(&start_price), Some(&end_price)) =
            (start_prices.get(ticker), end_prices.get(ticker))
        else {
            debug!(ticker, %start_date, %end_date, "Holding excluded: missing price");
            excluded.push(holding.ticker.clone());
            continue;
        };

        let start_value = holding.shares * start_price;
        let end_value = holding.shares * end_price;
        total_start_value += start_value;
        total_end_value += end_value;

        per_holding.push(ReturnRecord {
            ticker: holding.ticker.clone(),
            shares: holding.shares,
            start_price,
            end_price,
            start_value,
            end_value,
            return_pct: price_return(start_price, end_price),
            weight: 0.0,
            contribution_pct: 0.0,
        });
    }

    // Weights need the full denominator, so they are filled in a second pass.
    let mut total_return = 0.0;
    if total_start_value != 0.0 {
        for record in &mut per_holding {
            record.weight = record.start_value / total_start_value;
            record.contribution_pct = record.weight * record.return_pct;
            total_return += record.contribution_pct;
        }
    }

    debug!(
        priced = per_holding.len(),
        excluded = excluded.len(),
        total_return,
        "Contribution computed"
    );

    ContributionReport {
        start_date,
        end_date,
        per_holding,
        total_return,
        total_start_value,
        total_end_value,
        excluded,
    }
}

/// Builds ticker → close for one date, restricted to portfolio tickers.
///
/// Later rows overwrite earlier ones for the same ticker.
fn close_prices_on<'a>(
    price_history: &'a [PriceRecord],
    date: Date,
    wanted: &HashSet<&str>,
) -> HashMap<&'a str, f64> {
    price_history
        .iter()
        .filter(|r| r.date == date)
        .filter(|r| wanted.contains(r.ticker.as_str()))
        .map(|r| (r.ticker.as_str(), r.close))
        .collect()
}

/// Simple price return; zero when the start price is zero.
fn price_return(start_price: f64, end_price: f64) -> f64 {
    if start_price == 0.0 {
        return 0.0;
    }
    (end_price - start_price) / start_price
}
