//! # Tessera Portfolio
//!
//! Return attribution and valuation analytics for equity portfolios.
//!
//! All analytics are pure functions over caller-supplied daily price history
//! and holdings. Nothing is cached and nothing is read from disk; missing
//! prices degrade results by exclusion rather than by error.
//!
//! ## Features
//!
//! - **Contribution to Return**: per-holding return, start-value weight and
//!   contribution over a date range, summing to the portfolio return
//! - **Contribution Bands**: High / Neutral / Low split around a threshold
//! - **Valuation**: holding and sector values at one day's close
//! - **Trailing Returns**: 1/3/5-year close-to-close returns around an
//!   anchor date, snapping to the nearest trading day
//!
//! ## Quick Start
//!
//! ```rust
//! use tessera_portfolio::prelude::*;
//!
//! # fn main() -> Result<(), PortfolioError> {
//! let d1 = Date::parse("2020-01-01")?;
//! let d2 = Date::parse("2020-12-31")?;
//! let history = PriceHistory::from(vec![
//!     PriceRecord::close_only(d1, Ticker::new("AAA")?, 100.0),
//!     PriceRecord::close_only(d2, Ticker::new("AAA")?, 150.0),
//!     PriceRecord::close_only(d1, Ticker::new("BBB")?, 50.0),
//!     PriceRecord::close_only(d2, Ticker::new("BBB")?, 40.0),
//! ]);
//!
//! let portfolio = Portfolio::builder("portfolioA")
//!     .add_holding(Holding::from_symbol("AAA", 10.0)?)
//!     .add_holding(Holding::from_symbol("BBB", 20.0)?)
//!     .build()?;
//!
//! let report = portfolio.contribution(history.records(), d1, d2);
//! assert!((report.total_return - 0.15).abs() < 1e-12);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`contribution`] - Contribution to return and banding
//! - [`portfolio`] - Portfolio and builder types
//! - [`trailing`] - Trailing N-year returns
//! - [`types`] - Price records, holdings, history and config
//! - [`valuation`] - Point-in-time valuation by holding and sector
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel processing for large portfolios

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod contribution;
pub mod error;
pub mod parallel;
pub mod portfolio;
pub mod trailing;
pub mod types;
pub mod valuation;

// Re-export error types at crate root
pub use error::{PortfolioError, PortfolioResult};

// Re-export core primitives
pub use tessera_core::{Date, Ticker};

// Re-export main types
pub use types::{
    AnalyticsConfig, Holding, PriceHistory, PriceRecord, DEFAULT_BAND_THRESHOLD,
    DEFAULT_TRAILING_PERIODS,
};

// Re-export portfolio types
pub use portfolio::{Portfolio, PortfolioBuilder};

// Re-export contribution types and functions
pub use contribution::{
    compute_contribution, compute_contribution_str, ContributionBand, ContributionReport,
    ContributionRequest, ReturnRecord,
};

// Re-export trailing return types and functions
pub use trailing::{
    closest_entry, portfolio_trailing_returns, trailing_return, trailing_returns,
    HoldingTrailingReturns, TrailingReturn,
};

// Re-export valuation types and functions
pub use valuation::{
    bucket_by_sector, value_portfolio, HoldingValuation, PortfolioValuation, SectorValuation,
};

pub use parallel::maybe_parallel_map;

/// Prelude module for convenient imports.
///
/// ```rust
/// use tessera_portfolio::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{PortfolioError, PortfolioResult};

    // Primitives
    pub use tessera_core::{Date, Ticker};

    // Inputs and config
    pub use crate::types::{AnalyticsConfig, Holding, PriceHistory, PriceRecord};

    // Portfolio
    pub use crate::portfolio::{Portfolio, PortfolioBuilder};

    // Contribution
    pub use crate::contribution::{
        compute_contribution, compute_contribution_str, ContributionBand, ContributionReport,
        ContributionRequest, ReturnRecord,
    };

    // Trailing returns
    pub use crate::trailing::{
        portfolio_trailing_returns, trailing_return, trailing_returns, HoldingTrailingReturns,
        TrailingReturn,
    };

    // Valuation
    pub use crate::valuation::{value_portfolio, HoldingValuation, PortfolioValuation};
}
