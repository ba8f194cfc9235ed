//! Trailing return calculation for single tickers and whole portfolios.

use serde::{Deserialize, Serialize};
use tessera_core::{Date, Ticker};
use tracing::debug;

use super::closest_entry;
use crate::parallel::maybe_parallel_map;
use crate::types::{
    resolve_holdings, series_by_ticker, ticker_series, AnalyticsConfig, Holding, PriceRecord,
};

/// Close-to-close return over a trailing period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailingReturn {
    /// Security symbol.
    pub ticker: Ticker,

    /// Look-back in calendar years.
    pub period_years: u32,

    /// Trading day nearest the start of the period.
    pub from_date: Date,

    /// Trading day nearest the anchor.
    pub to_date: Date,

    /// Close on `from_date`.
    pub from_close: f64,

    /// Close on `to_date`.
    pub to_close: f64,

    /// `to_close / from_close - 1` (decimal).
    pub return_pct: f64,
}

impl TrailingReturn {
    /// Short label such as `"3Y"`.
    #[must_use]
    pub fn period_label(&self) -> String {
        format!("{}Y", self.period_years)
    }
}

/// Trailing returns for one holding, one entry per resolvable period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingTrailingReturns {
    /// Holding ticker.
    pub ticker: Ticker,

    /// Returns in requested period order.
    pub returns: Vec<TrailingReturn>,
}

impl HoldingTrailingReturns {
    /// Returns the entry for a look-back, if it resolved.
    #[must_use]
    pub fn for_period(&self, years: u32) -> Option<&TrailingReturn> {
        self.returns.iter().find(|r| r.period_years == years)
    }
}

/// Trailing return for `ticker` over `years` calendar years ending near `anchor`.
///
/// The start of the period is `anchor` moved back `years` years; February 29
/// becomes March 1 when the earlier year is not a leap year. Both ends snap
/// to the closest record in the ticker's history.
///
/// Returns `None` if the ticker has no records or the earlier close is zero.
#[must_use]
pub fn trailing_return(
    price_history: &[PriceRecord],
    ticker: &str,
    anchor: Date,
    years: u32,
) -> Option<TrailingReturn> {
    let series = ticker_series(price_history, ticker);
    trailing_from_series(&series, anchor, years)
}

/// Trailing returns for `ticker` over several look-backs.
///
/// Periods that cannot be resolved are skipped; the rest keep the order of
/// `periods`.
#[must_use]
pub fn trailing_returns(
    price_history: &[PriceRecord],
    ticker: &str,
    anchor: Date,
    periods: &[u32],
) -> Vec<TrailingReturn> {
    let series = ticker_series(price_history, ticker);
    periods
        .iter()
        .filter_map(|&years| trailing_from_series(&series, anchor, years))
        .collect()
}

/// Trailing returns for every holding over `config.trailing_periods`.
///
/// The history is grouped by ticker once. Holdings are processed with
/// [`maybe_parallel_map`], so large portfolios run on rayon when the
/// `parallel` feature is enabled. Output follows portfolio order with
/// duplicate tickers collapsed to their first position.
#[must_use]
pub fn portfolio_trailing_returns(
    price_history: &[PriceRecord],
    holdings: &[Holding],
    anchor: Date,
    config: &AnalyticsConfig,
) -> Vec<HoldingTrailingReturns> {
    let grouped = series_by_ticker(price_history);
    let resolved = resolve_holdings(holdings);
    let periods = &config.trailing_periods;

    let results = maybe_parallel_map(&resolved, config, |holding| {
        let returns = grouped
            .get(holding.ticker.as_str())
            .map(|series| {
                periods
                    .iter()
                    .filter_map(|&years| trailing_from_series(series, anchor, years))
                    .collect()
            })
            .unwrap_or_default();
        HoldingTrailingReturns {
            ticker: holding.ticker.clone(),
            returns,
        }
    });

    debug!(
        holdings = results.len(),
        periods = periods.len(),
        %anchor,
        "Trailing returns computed"
    );
    results
}

/// Expects `series` sorted ascending by date.
fn trailing_from_series(series: &[&PriceRecord], anchor: Date, years: u32) -> Option<TrailingReturn> {
    let current = closest_entry(series.iter().copied(), anchor)?;
    let past = closest_entry(series.iter().copied(), anchor.years_before(years))?;

    if past.close == 0.0 {
        debug!(ticker = %past.ticker, date = %past.date, "Trailing return skipped: zero close");
        return None;
    }

    Some(TrailingReturn {
        ticker: current.ticker.clone(),
        period_years: years,
        from_date: past.date,
        to_date: current.date,
        from_close: past.close,
        to_close: current.close,
        return_pct: current.close / past.close - 1.0,
    })
}
