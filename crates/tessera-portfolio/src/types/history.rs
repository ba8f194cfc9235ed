//! Owned price history with date and ticker views.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use tessera_core::Date;

use super::PriceRecord;

/// A collection of daily price records.
///
/// Records are kept in the order they were supplied; nothing here assumes
/// the input is sorted. Lookups that need an order (per-ticker series,
/// trading dates) sort on the way out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceHistory {
    records: Vec<PriceRecord>,
}

impl PriceHistory {
    /// Creates a history from records in any order.
    #[must_use]
    pub fn new(records: Vec<PriceRecord>) -> Self {
        Self { records }
    }

    /// Returns the records in input order.
    #[must_use]
    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose date equals `date`, in input order.
    pub fn on_date(&self, date: Date) -> impl Iterator<Item = &PriceRecord> {
        self.records.iter().filter(move |r| r.date == date)
    }

    /// One ticker's records sorted ascending by date.
    ///
    /// The sort is stable, so same-day duplicates keep their input order.
    #[must_use]
    pub fn for_ticker(&self, ticker: &str) -> Vec<&PriceRecord> {
        ticker_series(&self.records, ticker)
    }

    /// Every ticker's records, each sorted ascending by date.
    #[must_use]
    pub fn series_by_ticker(&self) -> HashMap<&str, Vec<&PriceRecord>> {
        series_by_ticker(&self.records)
    }

    /// Distinct trading dates in ascending order.
    #[must_use]
    pub fn trading_dates(&self) -> Vec<Date> {
        self.records
            .iter()
            .map(|r| r.date)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// First and last trading date, or `None` for an empty history.
    #[must_use]
    pub fn date_range(&self) -> Option<(Date, Date)> {
        let first = self.records.iter().map(|r| r.date).min()?;
        let last = self.records.iter().map(|r| r.date).max()?;
        Some((first, last))
    }

    /// Distinct tickers in ascending order.
    #[must_use]
    pub fn tickers(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.ticker.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl From<Vec<PriceRecord>> for PriceHistory {
    fn from(records: Vec<PriceRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<PriceRecord> for PriceHistory {
    fn from_iter<I: IntoIterator<Item = PriceRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl AsRef<[PriceRecord]> for PriceHistory {
    fn as_ref(&self) -> &[PriceRecord] {
        &self.records
    }
}

/// One ticker's records sorted ascending by date (stable).
pub(crate) fn ticker_series<'a>(records: &'a [PriceRecord], ticker: &str) -> Vec<&'a PriceRecord> {
    let mut series: Vec<&PriceRecord> = records
        .iter()
        .filter(|r| r.ticker.as_str() == ticker)
        .collect();
    series.sort_by_key(|r| r.date);
    series
}

/// Groups records by ticker, each group sorted ascending by date (stable).
pub(crate) fn series_by_ticker(records: &[PriceRecord]) -> HashMap<&str, Vec<&PriceRecord>> {
    let mut grouped: HashMap<&str, Vec<&PriceRecord>> = HashMap::new();
    for record in records {
        grouped.entry(record.ticker.as_str()).or_default().push(record);
    }
    for series in grouped.values_mut() {
        series.sort_by_key(|r| r.date);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::Ticker;

    fn record(ticker: &str, date: &str, close: f64) -> PriceRecord {
        PriceRecord::close_only(Date::parse(date).unwrap(), Ticker::new(ticker).unwrap(), close)
    }

    fn sample() -> PriceHistory {
        PriceHistory::new(vec![
            record("BBB", "2020-12-31", 40.0),
            record("AAA", "2020-12-31", 150.0),
            record("AAA", "2020-01-01", 100.0),
            record("BBB", "2020-01-01", 50.0),
            record("AAA", "2020-06-30", 120.0),
        ])
    }

    #[test]
    fn test_trading_dates_sorted_distinct() {
        let dates = sample().trading_dates();
        let rendered: Vec<String> = dates.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["2020-01-01", "2020-06-30", "2020-12-31"]);
    }

    #[test]
    fn test_date_range() {
        let (first, last) = sample().date_range().unwrap();
        assert_eq!(first.to_string(), "2020-01-01");
        assert_eq!(last.to_string(), "2020-12-31");
        assert!(PriceHistory::default().date_range().is_none());
    }

    #[test]
    fn test_for_ticker_sorted() {
        let history = sample();
        let series = history.for_ticker("AAA");
        let closes: Vec<f64> = series.iter().map(|r| r.close).collect();
        assert_eq!(closes, vec![100.0, 120.0, 150.0]);
        assert!(history.for_ticker("ZZZ").is_empty());
    }

    #[test]
    fn test_on_date() {
        let history = sample();
        let date = Date::parse("2020-01-01").unwrap();
        assert_eq!(history.on_date(date).count(), 2);
    }

    #[test]
    fn test_tickers() {
        assert_eq!(sample().tickers(), vec!["AAA", "BBB"]);
    }

    #[test]
    fn test_series_by_ticker() {
        let history = sample();
        let grouped = history.series_by_ticker();
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped["BBB"].len(), 2);
        assert_eq!(grouped["BBB"][0].close, 50.0);
    }
}
