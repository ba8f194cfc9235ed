//! Contribution to return analysis.
//!
//! Provides return attribution over a date range:
//! - Per-holding price return, start/end value and start-value weight
//! - Contribution = weight × return, summing to the portfolio return
//! - High/Low/Neutral banding of contributions
//! - Validated entry points for string dates and deserialized requests
//!
//! # Example
//!
//! ```rust,ignore
//! use tessera_portfolio::contribution::compute_contribution;
//!
//! let report = compute_contribution(history.records(), &portfolio.holdings, start, end);
//! for r in &report.per_holding {
//!     println!("{}: {:.2}% of return", r.ticker, r.contribution_pct * 100.0);
//! }
//! ```

mod attribution;
mod band;
mod request;

pub use attribution::*;
pub use band::*;
pub use request::*;
