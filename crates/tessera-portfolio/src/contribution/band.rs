//! High / Low / Neutral contribution bands.

use serde::{Deserialize, Serialize};
use std::fmt;
use tessera_core::Ticker;

use super::ContributionReport;

/// Coarse classification of a holding's contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContributionBand {
    /// Contribution above `+threshold`.
    High,
    /// Contribution within `[-threshold, +threshold]`.
    Neutral,
    /// Contribution below `-threshold`.
    Low,
}

impl ContributionBand {
    /// Classifies a contribution against a symmetric threshold.
    ///
    /// Bounds are exclusive: a contribution exactly at the threshold is
    /// Neutral.
    #[must_use]
    pub fn classify(contribution_pct: f64, threshold: f64) -> Self {
        let threshold = threshold.abs();
        if contribution_pct > threshold {
            Self::High
        } else if contribution_pct < -threshold {
            Self::Low
        } else {
            Self::Neutral
        }
    }

    /// Returns a human-readable name for the band.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Neutral => "Neutral",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for ContributionBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl ContributionReport {
    /// Band for every priced holding, in portfolio order.
    #[must_use]
    pub fn bands(&self, threshold: f64) -> Vec<(&Ticker, ContributionBand)> {
        self.per_holding
            .iter()
            .map(|r| (&r.ticker, ContributionBand::classify(r.contribution_pct, threshold)))
            .collect()
    }
}
