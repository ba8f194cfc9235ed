//! Daily price history loaders.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tessera_core::{Date, Ticker};
use tessera_portfolio::{PriceHistory, PriceRecord};
use tracing::info;

use crate::error::{FileError, FileResult};

// =============================================================================
// DISPATCH
// =============================================================================

/// Loads price history from a `.json` or `.csv` file.
///
/// JSON files hold an array of row objects; CSV files have a header row.
/// Both accept the ticker column as `Name` or `ticker`.
pub fn load_price_history(path: impl AsRef<Path>) -> FileResult<PriceHistory> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let history = match extension.as_deref() {
        Some("json") => {
            let file = File::open(path).map_err(|e| FileError::io(path, e))?;
            read_price_json(BufReader::new(file), path)?
        }
        Some("csv") => {
            let file = File::open(path).map_err(|e| FileError::io(path, e))?;
            read_price_csv(file, path)?
        }
        _ => {
            return Err(FileError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    info!(
        path = %path.display(),
        rows = history.len(),
        "Loaded price history"
    );
    Ok(history)
}

// =============================================================================
// JSON
// =============================================================================

/// Reads a JSON array of price rows.
///
/// Missing or null open/high/low take the close, as blank CSV cells do.
/// `source` is only used to label errors.
pub fn read_price_json<R: Read>(reader: R, source: &Path) -> FileResult<PriceHistory> {
    let records: Vec<PriceRecord> =
        serde_json::from_reader(reader).map_err(|e| FileError::json(source, e))?;
    Ok(PriceHistory::new(records))
}

// =============================================================================
// CSV
// =============================================================================

/// CSV row. Some daily datasets leave open/high/low blank on thin days, so
/// those fall back to the close.
#[derive(Debug, Deserialize)]
struct CsvPriceRow {
    date: String,
    #[serde(rename = "Name", alias = "ticker")]
    ticker: String,
    open: Option<f64>,
    high: Option<f64>,
    low: Option<f64>,
    close: f64,
    #[serde(default)]
    volume: Option<u64>,
    #[serde(default)]
    sector: Option<String>,
}

impl CsvPriceRow {
    fn into_record(self) -> Result<PriceRecord, String> {
        let date = Date::parse(&self.date).map_err(|e| e.to_string())?;
        let ticker = Ticker::new(&self.ticker).map_err(|e| e.to_string())?;
        Ok(PriceRecord {
            date,
            ticker,
            open: self.open.unwrap_or(self.close),
            high: self.high.unwrap_or(self.close),
            low: self.low.unwrap_or(self.close),
            close: self.close,
            volume: self.volume.unwrap_or_default(),
            sector: self.sector.unwrap_or_default(),
        })
    }
}

/// Reads CSV price rows with a header.
///
/// `source` is only used to label errors. A row that fails to parse aborts
/// the load with its one-based row number.
pub fn read_price_csv<R: Read>(reader: R, source: &Path) -> FileResult<PriceHistory> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    reader.headers().map_err(|e| FileError::csv(source, e))?;

    let mut records = Vec::new();
    for (index, result) in reader.deserialize::<CsvPriceRow>().enumerate() {
        let row = index + 1;
        let parsed = result.map_err(|e| FileError::invalid_row(source, row, e.to_string()))?;
        let record = parsed
            .into_record()
            .map_err(|reason| FileError::invalid_row(source, row, reason))?;
        records.push(record);
    }
    Ok(PriceHistory::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
date,open,high,low,close,volume,Name
2013-02-08,15.07,15.12,14.63,14.75,8407500,AAL
2013-02-11,,,,14.46,8882000,AAL
2013-02-08,67.7142,68.4014,66.8928,67.8542,158168416,AAPL
";

    #[test]
    fn test_read_csv() {
        let history = read_price_csv(CSV.as_bytes(), Path::new("prices.csv")).unwrap();
        assert_eq!(history.len(), 3);

        let first = &history.records()[0];
        assert_eq!(first.ticker.as_str(), "AAL");
        assert_eq!(first.volume, 8_407_500);
        assert!(first.sector.is_empty());
    }

    #[test]
    fn test_csv_blank_open_uses_close() {
        let history = read_price_csv(CSV.as_bytes(), Path::new("prices.csv")).unwrap();
        let thin = &history.records()[1];
        assert_eq!(thin.open, 14.46);
        assert_eq!(thin.high, 14.46);
        assert_eq!(thin.low, 14.46);
    }

    #[test]
    fn test_csv_ticker_header_and_sector() {
        let csv = "date,ticker,open,high,low,close,sector\n2018-02-07,MSFT,90.49,91.77,89.2,89.61,Information Technology\n";
        let history = read_price_csv(csv.as_bytes(), Path::new("p.csv")).unwrap();
        assert_eq!(history.records()[0].ticker.as_str(), "MSFT");
        assert_eq!(history.records()[0].sector, "Information Technology");
    }

    #[test]
    fn test_csv_bad_date_reports_row() {
        let csv = "date,open,high,low,close,Name\n2018-02-07,1,1,1,1,AAA\n07/02/2018,1,1,1,1,AAA\n";
        let err = read_price_csv(csv.as_bytes(), Path::new("p.csv")).unwrap_err();
        match err {
            FileError::InvalidRow { row, .. } => assert_eq!(row, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_csv_missing_close_reports_row() {
        let csv = "date,open,high,low,close,Name\n2018-02-07,1,1,1,,AAA\n";
        let err = read_price_csv(csv.as_bytes(), Path::new("p.csv")).unwrap_err();
        assert!(matches!(err, FileError::InvalidRow { row: 1, .. }));
    }

    #[test]
    fn test_read_json() {
        let json = r#"[
            {"date": "2018-02-07", "open": 1.0, "high": 2.0, "low": 0.5, "close": 1.5, "volume": 10, "Name": "AAA", "sector": "Energy"},
            {"date": "2018-02-07", "open": 1.0, "high": 2.0, "low": 0.5, "close": 1.5, "ticker": "BBB"}
        ]"#;
        let history = read_price_json(json.as_bytes(), Path::new("p.json")).unwrap();
        assert_eq!(history.tickers(), vec!["AAA", "BBB"]);
        assert_eq!(history.records()[0].sector, "Energy");
    }

    #[test]
    fn test_json_null_open_matches_csv_blank() {
        let json = r#"[
            {"date": "2013-02-11", "open": null, "high": null, "low": null, "close": 14.46, "volume": 8882000, "Name": "AAL"}
        ]"#;
        let from_json = read_price_json(json.as_bytes(), Path::new("p.json")).unwrap();
        let from_csv = read_price_csv(CSV.as_bytes(), Path::new("p.csv")).unwrap();
        assert_eq!(from_json.records()[0], from_csv.records()[1]);
        assert_eq!(from_json.records()[0].open, 14.46);
    }

    #[test]
    fn test_read_json_invalid() {
        let err = read_price_json("[{\"date\": \"nope\"}]".as_bytes(), Path::new("p.json"))
            .unwrap_err();
        assert!(matches!(err, FileError::Json { .. }));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_price_history("prices.parquet").unwrap_err();
        assert!(matches!(err, FileError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_price_history("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, FileError::Io { .. }));
    }
}
