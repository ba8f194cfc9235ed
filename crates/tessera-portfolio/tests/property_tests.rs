//! Property-based tests for return attribution invariants.
//!
//! These tests verify properties that should hold for any input:
//! - Contributions sum to the total return
//! - Start values sum to the total start value
//! - Unpriced holdings are excluded from records and the denominator
//! - A zero-length range has zero return
//! - Results are deterministic and follow portfolio order

use tessera_portfolio::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

const START: &str = "2017-02-07";
const END: &str = "2018-02-07";

fn date(s: &str) -> Date {
    Date::parse(s).unwrap()
}

/// Generates a portfolio of N holdings and a two-day price history.
///
/// Roughly one holding in seven has no end price and one in eleven has no
/// start price, so every generated case exercises exclusion.
fn generate_case(n: usize, seed: u64) -> (Vec<PriceRecord>, Vec<Holding>) {
    let start = date(START);
    let end = date(END);
    let mut history = Vec::with_capacity(n * 2);
    let mut holdings = Vec::with_capacity(n);

    for i in 0..n {
        let hash = simple_hash(seed, i as u64);
        let ticker = Ticker::new(format!("T{i:04}")).unwrap();
        let shares = 1.0 + (hash % 1_000) as f64;
        let start_price = 5.0 + (hash % 400) as f64 / 2.0;
        let end_price = start_price * (0.5 + (hash % 100) as f64 / 100.0);

        if hash % 11 != 0 {
            history.push(PriceRecord::close_only(start, ticker.clone(), start_price));
        }
        if hash % 7 != 0 {
            history.push(PriceRecord::close_only(end, ticker.clone(), end_price));
        }
        holdings.push(Holding::new(ticker, shares));
    }

    // Interleave dates so lookups cannot rely on input order.
    history.reverse();
    (history, holdings)
}

fn simple_hash(seed: u64, i: u64) -> u64 {
    let mut x = seed.wrapping_add(i).wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x = x.wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x
}

// =============================================================================
// PROPERTY: WEIGHTING IDENTITY
// =============================================================================

#[test]
fn property_contributions_sum_to_total() {
    for seed in 0..20 {
        let (history, holdings) = generate_case(50, seed);
        let report = compute_contribution(&history, &holdings, date(START), date(END));

        let sum: f64 = report.per_holding.iter().map(|r| r.contribution_pct).sum();
        assert!(
            (sum - report.total_return).abs() < 1e-9,
            "seed {seed}: contributions {sum} != total {}",
            report.total_return
        );
    }
}

#[test]
fn property_start_values_sum_to_total() {
    for seed in 0..20 {
        let (history, holdings) = generate_case(50, seed);
        let report = compute_contribution(&history, &holdings, date(START), date(END));

        let sum: f64 = report.per_holding.iter().map(|r| r.start_value).sum();
        assert!((sum - report.total_start_value).abs() < 1e-6 * report.total_start_value.max(1.0));

        let weights: f64 = report.per_holding.iter().map(|r| r.weight).sum();
        if !report.is_empty() {
            assert!((weights - 1.0).abs() < 1e-9, "seed {seed}: weights sum to {weights}");
        }
    }
}

#[test]
fn property_total_equals_value_weighted_return() {
    for seed in 0..20 {
        let (history, holdings) = generate_case(40, seed);
        let report = compute_contribution(&history, &holdings, date(START), date(END));
        if report.total_start_value == 0.0 {
            continue;
        }
        let expected = report.value_change() / report.total_start_value;
        assert!((report.total_return - expected).abs() < 1e-9);
    }
}

// =============================================================================
// PROPERTY: EXCLUSION
// =============================================================================

#[test]
fn property_unpriced_holdings_excluded() {
    for seed in 0..20 {
        let (history, holdings) = generate_case(60, seed);
        let report = compute_contribution(&history, &holdings, date(START), date(END));

        assert_eq!(report.per_holding.len() + report.excluded.len(), holdings.len());
        for ticker in &report.excluded {
            assert!(report.get(ticker.as_str()).is_none());
            let start_priced = history
                .iter()
                .any(|r| r.ticker == *ticker && r.date == date(START));
            let end_priced = history
                .iter()
                .any(|r| r.ticker == *ticker && r.date == date(END));
            assert!(!(start_priced && end_priced));
        }
    }
}

#[test]
fn property_adding_unpriced_holding_changes_nothing() {
    for seed in 0..10 {
        let (history, mut holdings) = generate_case(30, seed);
        let before = compute_contribution(&history, &holdings, date(START), date(END));

        holdings.insert(0, Holding::from_symbol("NOPRICE", 1_000.0).unwrap());
        let after = compute_contribution(&history, &holdings, date(START), date(END));

        assert_eq!(before.per_holding, after.per_holding);
        assert_eq!(before.total_return, after.total_return);
    }
}

// =============================================================================
// PROPERTY: ZERO RANGE
// =============================================================================

#[test]
fn property_zero_range_has_zero_return() {
    for seed in 0..10 {
        let (history, holdings) = generate_case(30, seed);
        let report = compute_contribution(&history, &holdings, date(START), date(START));

        assert!(report.per_holding.iter().all(|r| r.return_pct == 0.0));
        assert_eq!(report.total_return, 0.0);
    }
}

// =============================================================================
// PROPERTY: DETERMINISM AND ORDER
// =============================================================================

#[test]
fn property_deterministic() {
    let (history, holdings) = generate_case(100, 42);
    let first = compute_contribution(&history, &holdings, date(START), date(END));
    let second = compute_contribution(&history, &holdings, date(START), date(END));
    assert_eq!(first, second);
}

#[test]
fn property_output_follows_portfolio_order() {
    for seed in 0..10 {
        let (history, holdings) = generate_case(40, seed);
        let report = compute_contribution(&history, &holdings, date(START), date(END));

        let positions: Vec<usize> = report
            .per_holding
            .iter()
            .map(|r| holdings.iter().position(|h| h.ticker == r.ticker).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn property_history_order_irrelevant() {
    let (mut history, holdings) = generate_case(50, 7);
    let forward = compute_contribution(&history, &holdings, date(START), date(END));
    history.reverse();
    let backward = compute_contribution(&history, &holdings, date(START), date(END));
    assert_eq!(forward, backward);
}

// =============================================================================
// PROPERTY: VALUATION
// =============================================================================

#[test]
fn property_valuation_weights_sum_to_one() {
    for seed in 0..10 {
        let (history, holdings) = generate_case(40, seed);
        let valuation = value_portfolio(&history, &holdings, date(END));
        if valuation.total_value == 0.0 {
            continue;
        }

        let holding_weights: f64 = valuation.holdings.iter().map(|h| h.weight).sum();
        let sector_weights: f64 = valuation.sectors.iter().map(|s| s.weight).sum();
        assert!((holding_weights - 1.0).abs() < 1e-9);
        assert!((sector_weights - 1.0).abs() < 1e-9);
        assert_eq!(
            valuation.holdings.len() + valuation.unpriced.len(),
            holdings.len()
        );
    }
}
