//! Domain types.
//!
//! - [`Date`]: calendar day used to key daily prices
//! - [`Ticker`]: security symbol

mod date;
mod ticker;

pub use date::Date;
pub use ticker::Ticker;
