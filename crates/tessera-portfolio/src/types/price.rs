//! Daily price observations.

use serde::{Deserialize, Serialize};
use tessera_core::{Date, Ticker};

/// One daily observation for one security.
///
/// Field names follow the source dataset, where the ticker column is
/// called `Name`; `ticker` is accepted as an alias when deserializing.
/// Only `date`, the ticker and `close` are required: absent or null
/// open/high/low take the close, absent volume is 0 and absent sector is
/// empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PriceRow")]
pub struct PriceRecord {
    /// Trading day.
    pub date: Date,

    /// Security symbol.
    #[serde(rename = "Name", alias = "ticker")]
    pub ticker: Ticker,

    /// Opening price.
    pub open: f64,

    /// Intraday high.
    pub high: f64,

    /// Intraday low.
    pub low: f64,

    /// Closing price. The only price used for returns and valuation.
    pub close: f64,

    /// Shares traded.
    pub volume: u64,

    /// Sector classification, used for grouping only.
    pub sector: String,
}

/// Wire shape of a price row before defaults are filled in.
#[derive(Deserialize)]
struct PriceRow {
    date: Date,
    #[serde(rename = "Name", alias = "ticker")]
    ticker: Ticker,
    #[serde(default)]
    open: Option<f64>,
    #[serde(default)]
    high: Option<f64>,
    #[serde(default)]
    low: Option<f64>,
    close: f64,
    #[serde(default)]
    volume: Option<u64>,
    #[serde(default)]
    sector: Option<String>,
}

impl From<PriceRow> for PriceRecord {
    fn from(row: PriceRow) -> Self {
        Self {
            date: row.date,
            ticker: row.ticker,
            open: row.open.unwrap_or(row.close),
            high: row.high.unwrap_or(row.close),
            low: row.low.unwrap_or(row.close),
            close: row.close,
            volume: row.volume.unwrap_or_default(),
            sector: row.sector.unwrap_or_default(),
        }
    }
}

impl PriceRecord {
    /// Creates a record with only a close price; open/high/low mirror the close.
    ///
    /// Handy for fixtures and for sources that only publish closes.
    #[must_use]
    pub fn close_only(date: Date, ticker: Ticker, close: f64) -> Self {
        Self {
            date,
            ticker,
            open: close,
            high: close,
            low: close,
            close,
            volume: 0,
            sector: String::new(),
        }
    }

    /// Sets the sector.
    #[must_use]
    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = sector.into();
        self
    }

    /// Intraday range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_dataset_row() {
        let json = r#"{
            "date": "2018-02-07",
            "open": 163.085,
            "high": 163.4,
            "low": 159.0685,
            "close": 159.54,
            "volume": 51608580,
            "Name": "AAPL",
            "sector": "Information Technology"
        }"#;

        let record: PriceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.ticker.as_str(), "AAPL");
        assert_eq!(record.date, Date::from_ymd(2018, 2, 7).unwrap());
        assert!((record.close - 159.54).abs() < 1e-12);
        assert_eq!(record.volume, 51_608_580);
        assert_eq!(record.sector, "Information Technology");
    }

    #[test]
    fn test_deserialize_ticker_alias() {
        let json = r#"{"date":"2020-01-01","ticker":"AAA","open":1,"high":1,"low":1,"close":1}"#;
        let record: PriceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.ticker.as_str(), "AAA");
        assert_eq!(record.volume, 0);
        assert!(record.sector.is_empty());
    }

    #[test]
    fn test_deserialize_close_only_row() {
        let json = r#"{"ticker":"AAA","date":"2020-01-01","close":100}"#;
        let record: PriceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.open, 100.0);
        assert_eq!(record.high, 100.0);
        assert_eq!(record.low, 100.0);
        assert_eq!(record.close, 100.0);
    }

    #[test]
    fn test_null_prices_fall_back_to_close() {
        let json = r#"{"date":"2017-08-10","Name":"DXC","open":null,"high":88.1,"low":null,"close":87.5,"volume":null}"#;
        let record: PriceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.open, 87.5);
        assert_eq!(record.high, 88.1);
        assert_eq!(record.low, 87.5);
        assert_eq!(record.volume, 0);
    }

    #[test]
    fn test_missing_close_rejected() {
        let json = r#"{"ticker":"AAA","date":"2020-01-01","open":100}"#;
        assert!(serde_json::from_str::<PriceRecord>(json).is_err());
    }

    #[test]
    fn test_rejects_bad_date() {
        let json = r#"{"date":"02/07/2018","Name":"AAA","open":1,"high":1,"low":1,"close":1}"#;
        assert!(serde_json::from_str::<PriceRecord>(json).is_err());
    }

    #[test]
    fn test_close_only() {
        let record = PriceRecord::close_only(
            Date::from_ymd(2020, 1, 1).unwrap(),
            Ticker::new("AAA").unwrap(),
            100.0,
        )
        .with_sector("Energy");
        assert_eq!(record.open, 100.0);
        assert_eq!(record.range(), 0.0);
        assert_eq!(record.sector, "Energy");
    }
}
