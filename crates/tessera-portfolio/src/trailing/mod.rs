//! Trailing N-year returns.
//!
//! A trailing return compares the close nearest an anchor date with the
//! close nearest the same calendar day N years earlier. Neither date has to
//! be a trading day; each snaps to the closest record in the ticker's
//! history.
//!
//! # Example
//!
//! ```rust,ignore
//! use tessera_portfolio::trailing::trailing_returns;
//!
//! for r in trailing_returns(history.records(), "AAPL", anchor, &[1, 3, 5]) {
//!     println!("{} {}: {:.2}%", r.ticker, r.period_label(), r.return_pct * 100.0);
//! }
//! ```

mod closest;
mod returns;

pub use closest::closest_entry;
pub use returns::*;
