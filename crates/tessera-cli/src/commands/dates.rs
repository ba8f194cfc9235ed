//! Dates command implementation.
//!
//! Lists the distinct trading dates in a price file, which bound the
//! ranges accepted by `attribute` and `value`.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use tessera_core::Date;

use crate::cli::OutputFormat;
use crate::commands::{load_history, Context};
use crate::output::{print_header, print_output, KeyValue};

/// Arguments for the dates command.
#[derive(Args, Debug)]
pub struct DatesArgs {
    /// Price history file (.json or .csv). Defaults to the configured prices_file.
    #[arg(short, long)]
    pub prices: Option<PathBuf>,

    /// Print every date, not just the summary
    #[arg(long)]
    pub all: bool,
}

#[derive(Debug, Serialize)]
struct DatesOutput<'a> {
    first: Date,
    last: Date,
    count: usize,
    tickers: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    dates: Option<&'a [Date]>,
}

#[derive(Debug, Serialize)]
struct DateRow {
    date: Date,
}

/// Execute the dates command.
pub fn execute(args: DatesArgs, ctx: &Context) -> Result<()> {
    let (path, history) = load_history(args.prices.as_deref(), ctx)?;
    let dates = history.trading_dates();
    let (first, last) = match (dates.first(), dates.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Err(anyhow::anyhow!("Price history has no dates")),
    };

    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header(&format!("Trading Dates: {}", path.display()));
            }
            let summary = vec![
                KeyValue::new("First", first.to_string()),
                KeyValue::new("Last", last.to_string()),
                KeyValue::new("Trading Days", dates.len().to_string()),
                KeyValue::new("Tickers", history.tickers().len().to_string()),
            ];
            print_output(&summary, ctx.format)?;
            if args.all {
                for date in &dates {
                    println!("{date}");
                }
            }
        }
        OutputFormat::Json => {
            let output = DatesOutput {
                first,
                last,
                count: dates.len(),
                tickers: history.tickers().len(),
                dates: args.all.then_some(dates.as_slice()),
            };
            crate::output::print_json(&output)?;
        }
        OutputFormat::Csv => {
            let rows: Vec<DateRow> = dates.iter().map(|&date| DateRow { date }).collect();
            crate::output::print_csv(&rows)?;
        }
        OutputFormat::Minimal => {
            for date in &dates {
                println!("{date}");
            }
        }
    }

    Ok(())
}
