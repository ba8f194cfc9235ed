//! Holding-level valuation on one date.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tessera_core::{Date, Ticker};
use tracing::debug;

use super::{bucket_by_sector, SectorValuation};
use crate::types::{resolve_holdings, Holding, PriceRecord};

/// A holding valued at one day's close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingValuation {
    /// Holding ticker.
    pub ticker: Ticker,

    /// Sector from the price record.
    pub sector: String,

    /// Shares held.
    pub shares: f64,

    /// Opening price.
    pub open: f64,

    /// Intraday high.
    pub high: f64,

    /// Intraday low.
    pub low: f64,

    /// Closing price.
    pub close: f64,

    /// shares × close.
    pub value: f64,

    /// Share of total portfolio value.
    pub weight: f64,
}

/// Portfolio valuation snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioValuation {
    /// Valuation date.
    pub date: Date,

    /// Sum of holding values.
    pub total_value: f64,

    /// Priced holdings in portfolio order.
    pub holdings: Vec<HoldingValuation>,

    /// Sector totals, largest first.
    pub sectors: Vec<SectorValuation>,

    /// Holdings with no record on `date`, in portfolio order.
    pub unpriced: Vec<Ticker>,
}

impl PortfolioValuation {
    /// Returns true if no holding could be priced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Returns the valuation for a ticker.
    #[must_use]
    pub fn get(&self, ticker: &str) -> Option<&HoldingValuation> {
        self.holdings.iter().find(|h| h.ticker.as_str() == ticker)
    }

    /// Returns the sector entry by name.
    #[must_use]
    pub fn sector(&self, name: &str) -> Option<&SectorValuation> {
        self.sectors.iter().find(|s| s.sector == name)
    }
}

/// Values holdings at the close of `date`.
///
/// Only exact date matches price a holding; holdings without a record are
/// listed in `unpriced`. Duplicate rows for the same ticker resolve to the
/// last one. Weights are zero when the total value is zero.
#[must_use]
pub fn value_portfolio(
    price_history: &[PriceRecord],
    holdings: &[Holding],
    date: Date,
) -> PortfolioValuation {
    let resolved = resolve_holdings(holdings);
    let wanted: HashSet<&str> = resolved.iter().map(|h| h.ticker.as_str()).collect();

    let rows: HashMap<&str, &PriceRecord> = price_history
        .iter()
        .filter(|r| r.date == date && wanted.contains(r.ticker.as_str()))
        .map(|r| (r.ticker.as_str(), r))
        .collect();

    let mut valued = Vec::with_capacity(resolved.len());
    let mut unpriced = Vec::new();
    for holding in resolved {
        let Some(row) = rows.get(holding.ticker.as_str()) else {
            unpriced.push(holding.ticker.clone());
            continue;
        };
        valued.push(HoldingValuation {
            ticker: holding.ticker.clone(),
            sector: row.sector.clone(),
            shares: holding.shares,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            value: holding.shares * row.close,
            weight: 0.0,
        });
    }

    let total_value: f64 = valued.iter().map(|h| h.value).sum();
    if total_value != 0.0 {
        for holding in &mut valued {
            holding.weight = holding.value / total_value;
        }
    }

    let sectors = bucket_by_sector(&valued, total_value);

    debug!(
        %date,
        priced = valued.len(),
        unpriced = unpriced.len(),
        total_value,
        "Portfolio valued"
    );

    PortfolioValuation {
        date,
        total_value,
        holdings: valued,
        sectors,
        unpriced,
    }
}
