//! Configuration for portfolio analytics computation.

use serde::{Deserialize, Serialize};

/// Default High/Low contribution band threshold (10%).
pub const DEFAULT_BAND_THRESHOLD: f64 = 0.10;

/// Default trailing return windows in years.
pub const DEFAULT_TRAILING_PERIODS: [u32; 3] = [1, 3, 5];

/// Configuration for portfolio analytics computation.
///
/// Controls parallelism, contribution banding, and trailing return windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Holdings count at which parallel processing starts (inclusive).
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,

    /// Contributions above `+band_threshold` are High, below
    /// `-band_threshold` are Low, everything else Neutral.
    pub band_threshold: f64,

    /// Trailing return windows in whole years.
    pub trailing_periods: Vec<u32>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 100, // Use parallel from 100 holdings up
            band_threshold: DEFAULT_BAND_THRESHOLD,
            trailing_periods: DEFAULT_TRAILING_PERIODS.to_vec(),
        }
    }
}

impl AnalyticsConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Sets the contribution band threshold. Negative values are mirrored.
    #[must_use]
    pub fn with_band_threshold(mut self, threshold: f64) -> Self {
        self.band_threshold = threshold.abs();
        self
    }

    /// Sets the trailing return windows.
    #[must_use]
    pub fn with_trailing_periods(mut self, periods: Vec<u32>) -> Self {
        self.trailing_periods = periods;
        self
    }

    /// Returns true if parallel processing should be used for the given count,
    /// that is when `count >= parallel_threshold`.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}
