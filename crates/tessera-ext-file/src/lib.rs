//! # Tessera Ext File
//!
//! File-based price history and portfolio definitions for Tessera.
//!
//! This crate turns files on disk into the in-memory inputs the analytics
//! expect:
//! - JSON or CSV daily price history (one row per ticker per day)
//! - JSON portfolio definitions (`{ "portfolio": [ {ticker, shares} ] }`)
//! - A directory of portfolio files, selectable by name

#![warn(missing_docs)]
#![warn(clippy::all)]

mod catalog;
mod error;
mod portfolio;
mod prices;

pub use catalog::*;
pub use error::*;
pub use portfolio::*;
pub use prices::*;
