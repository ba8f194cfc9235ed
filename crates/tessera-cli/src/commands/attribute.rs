//! Attribute command implementation.
//!
//! Calculates each holding's contribution to portfolio return over a date
//! range and classifies it into High / Neutral / Low bands.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tabled::Tabled;

use tessera_portfolio::{ContributionBand, ContributionReport, ReturnRecord};

use crate::cli::OutputFormat;
use crate::commands::{load_history, parse_date_or, resolve_portfolio, validate_threshold, Context};
use crate::output::{
    format_number, format_percent, print_header, print_output, print_warning, KeyValue,
};

/// Arguments for the attribute command.
#[derive(Args, Debug)]
pub struct AttributeArgs {
    /// Price history file (.json or .csv). Defaults to the configured prices_file.
    #[arg(short, long)]
    pub prices: Option<PathBuf>,

    /// Portfolio file, or a portfolio name in the configured portfolio_dir
    #[arg(long)]
    pub portfolio: String,

    /// Start date (YYYY-MM-DD). Defaults to the first date in the history.
    #[arg(short, long)]
    pub start: Option<String>,

    /// End date (YYYY-MM-DD). Defaults to the last date in the history.
    #[arg(short, long)]
    pub end: Option<String>,

    /// Band threshold as a decimal (0.10 = 10%). Defaults to the configured band_threshold.
    #[arg(short, long)]
    pub threshold: Option<f64>,
}

/// One holding's row in the attribution table.
#[derive(Debug, Serialize, Tabled)]
struct AttributionRow {
    #[tabled(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Shares")]
    shares: String,
    #[tabled(rename = "Start Price")]
    start_price: String,
    #[tabled(rename = "End Price")]
    end_price: String,
    #[tabled(rename = "Start Value")]
    start_value: String,
    #[tabled(rename = "Return")]
    return_pct: String,
    #[tabled(rename = "Weight")]
    weight: String,
    #[tabled(rename = "Contribution")]
    contribution: String,
    #[tabled(rename = "Band")]
    band: String,
}

impl AttributionRow {
    fn new(record: &ReturnRecord, band: ContributionBand, precision: usize) -> Self {
        Self {
            ticker: record.ticker.to_string(),
            shares: format_number(record.shares, precision),
            start_price: format_number(record.start_price, precision),
            end_price: format_number(record.end_price, precision),
            start_value: format_number(record.start_value, precision),
            return_pct: format_percent(record.return_pct, precision),
            weight: format_percent(record.weight, precision),
            contribution: format_percent(record.contribution_pct, precision),
            band: band.to_string(),
        }
    }
}

/// Unformatted CSV row.
#[derive(Debug, Serialize)]
struct AttributionCsvRow<'a> {
    ticker: &'a str,
    shares: f64,
    start_price: f64,
    end_price: f64,
    start_value: f64,
    end_value: f64,
    return_pct: f64,
    weight: f64,
    contribution_pct: f64,
    band: ContributionBand,
}

/// JSON document for the attribute command.
#[derive(Debug, Serialize)]
struct AttributionOutput<'a> {
    portfolio: &'a str,
    threshold: f64,
    #[serde(flatten)]
    report: &'a ContributionReport,
    bands: Vec<TickerBand<'a>>,
}

#[derive(Debug, Serialize)]
struct TickerBand<'a> {
    ticker: &'a str,
    band: ContributionBand,
}

/// Execute the attribute command.
pub fn execute(args: AttributeArgs, ctx: &Context) -> Result<()> {
    let threshold = validate_threshold(args.threshold.unwrap_or(ctx.settings.band_threshold))?;
    let (_, history) = load_history(args.prices.as_deref(), ctx)?;
    let portfolio = resolve_portfolio(&args.portfolio, ctx)?;

    // load_history rejects empty files, so the range exists.
    let (first, last) = history
        .date_range()
        .ok_or_else(|| anyhow::anyhow!("Price history has no dates"))?;
    let start = parse_date_or(args.start.as_deref(), first)?;
    let end = parse_date_or(args.end.as_deref(), last)?;

    if start > end && !ctx.quiet {
        print_warning(&format!("Start date {start} is after end date {end}"));
    }

    let report = portfolio.contribution(history.records(), start, end);
    let bands = report.bands(threshold);

    if !report.excluded.is_empty() && !ctx.quiet {
        let excluded: Vec<&str> = report.excluded.iter().map(|t| t.as_str()).collect();
        print_warning(&format!(
            "No price on {start} or {end} for: {}",
            excluded.join(", ")
        ));
    }

    let precision = ctx.precision();
    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header(&format!("Contribution to Return: {}", portfolio.name));
            }
            let rows: Vec<AttributionRow> = report
                .per_holding
                .iter()
                .zip(&bands)
                .map(|(record, (_, band))| AttributionRow::new(record, *band, precision))
                .collect();
            print_output(&rows, ctx.format)?;

            let summary = vec![
                KeyValue::new("Start Date", start.to_string()),
                KeyValue::new("End Date", end.to_string()),
                KeyValue::from_number("Start Value", report.total_start_value, precision),
                KeyValue::from_number("End Value", report.total_end_value, precision),
                KeyValue::from_percent("Total Return", report.total_return, precision),
                KeyValue::new("Holdings Priced", report.per_holding.len().to_string()),
                KeyValue::new("Holdings Excluded", report.excluded.len().to_string()),
                KeyValue::from_percent("Band Threshold", threshold, precision),
            ];
            if !ctx.quiet {
                print_header("Summary");
            }
            print_output(&summary, ctx.format)?;
        }
        OutputFormat::Json => {
            let output = AttributionOutput {
                portfolio: &portfolio.name,
                threshold,
                report: &report,
                bands: bands
                    .iter()
                    .map(|(ticker, band)| TickerBand {
                        ticker: ticker.as_str(),
                        band: *band,
                    })
                    .collect(),
            };
            crate::output::print_json(&output)?;
        }
        OutputFormat::Csv => {
            let rows: Vec<AttributionCsvRow> = report
                .per_holding
                .iter()
                .zip(&bands)
                .map(|(r, (_, band))| AttributionCsvRow {
                    ticker: r.ticker.as_str(),
                    shares: r.shares,
                    start_price: r.start_price,
                    end_price: r.end_price,
                    start_value: r.start_value,
                    end_value: r.end_value,
                    return_pct: r.return_pct,
                    weight: r.weight,
                    contribution_pct: r.contribution_pct,
                    band: *band,
                })
                .collect();
            crate::output::print_csv(&rows)?;
        }
        OutputFormat::Minimal => {
            println!("{}", format_percent(report.total_return, precision));
        }
    }

    Ok(())
}
