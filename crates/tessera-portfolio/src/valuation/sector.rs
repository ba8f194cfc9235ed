//! Sector-based aggregation of valued holdings.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::HoldingValuation;

/// Label used for holdings whose price record carries no sector.
pub const UNCLASSIFIED_SECTOR: &str = "Unclassified";

/// Aggregated value for one sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorValuation {
    /// Sector name.
    pub sector: String,

    /// Number of holdings in this sector.
    pub holding_count: usize,

    /// Total value of the sector's holdings.
    pub value: f64,

    /// Share of total portfolio value.
    pub weight: f64,
}

/// Groups valued holdings by sector.
///
/// Sectors are sorted by value descending, ties broken by name. Weights are
/// zero when `total_value` is zero.
#[must_use]
pub fn bucket_by_sector(holdings: &[HoldingValuation], total_value: f64) -> Vec<SectorValuation> {
    let mut grouped: HashMap<&str, (usize, f64)> = HashMap::new();
    for holding in holdings {
        let name = if holding.sector.trim().is_empty() {
            UNCLASSIFIED_SECTOR
        } else {
            holding.sector.as_str()
        };
        let entry = grouped.entry(name).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += holding.value;
    }

    let mut sectors: Vec<SectorValuation> = grouped
        .into_iter()
        .map(|(sector, (holding_count, value))| SectorValuation {
            sector: sector.to_string(),
            holding_count,
            value,
            weight: if total_value == 0.0 {
                0.0
            } else {
                value / total_value
            },
        })
        .collect();

    sectors.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.sector.cmp(&b.sector))
    });
    sectors
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::Ticker;

    fn valued(ticker: &str, sector: &str, value: f64) -> HoldingValuation {
        HoldingValuation {
            ticker: Ticker::new(ticker).unwrap(),
            sector: sector.to_string(),
            shares: 1.0,
            open: value,
            high: value,
            low: value,
            close: value,
            value,
            weight: 0.0,
        }
    }

    #[test]
    fn test_ties_sorted_by_name() {
        let holdings = vec![
            valued("A", "Utilities", 50.0),
            valued("B", "Energy", 50.0),
            valued("C", "Health Care", 100.0),
        ];
        let sectors = bucket_by_sector(&holdings, 200.0);
        let names: Vec<&str> = sectors.iter().map(|s| s.sector.as_str()).collect();
        assert_eq!(names, vec!["Health Care", "Energy", "Utilities"]);
    }

    #[test]
    fn test_blank_sector_unclassified() {
        let holdings = vec![valued("A", "", 10.0), valued("B", " ", 5.0)];
        let sectors = bucket_by_sector(&holdings, 15.0);
        assert_eq!(sectors.len(), 1);
        assert_eq!(sectors[0].sector, UNCLASSIFIED_SECTOR);
        assert_eq!(sectors[0].holding_count, 2);
        assert!((sectors[0].weight - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty() {
        assert!(bucket_by_sector(&[], 0.0).is_empty());
    }
}
