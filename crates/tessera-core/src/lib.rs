//! # Tessera Core
//!
//! Core types shared by the Tessera portfolio analytics crates.
//!
//! - **Types**: calendar [`Date`] and security [`Ticker`]
//! - **Errors**: [`CoreError`] for malformed primitive inputs
//!
//! ## Example
//!
//! ```rust
//! use tessera_core::prelude::*;
//!
//! let start = Date::parse("2020-01-01").unwrap();
//! let end = Date::parse("2020-12-31").unwrap();
//! assert_eq!(start.days_between(&end), 365);
//!
//! let ticker = Ticker::new("AAPL").unwrap();
//! assert_eq!(ticker.as_str(), "AAPL");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Date, Ticker};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Date, Ticker};
