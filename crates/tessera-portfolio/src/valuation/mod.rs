//! Point-in-time portfolio valuation.
//!
//! Values each holding at the close of a single trading day and aggregates
//! the result by sector.

mod sector;
mod snapshot;

pub use sector::{bucket_by_sector, SectorValuation, UNCLASSIFIED_SECTOR};
pub use snapshot::*;
