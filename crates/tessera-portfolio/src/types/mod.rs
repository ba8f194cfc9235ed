//! Domain types for portfolio analytics.
//!
//! - [`PriceRecord`]: one daily observation for one security
//! - [`PriceHistory`]: owned collection of records with date/ticker views
//! - [`Holding`]: a (ticker, shares) position
//! - [`AnalyticsConfig`]: configuration for analytics computation

mod config;
mod history;
mod holding;
mod price;

pub use config::{AnalyticsConfig, DEFAULT_BAND_THRESHOLD, DEFAULT_TRAILING_PERIODS};
pub use history::PriceHistory;
pub use holding::Holding;
pub use price::PriceRecord;

pub(crate) use history::{series_by_ticker, ticker_series};
pub(crate) use holding::resolve_holdings;
