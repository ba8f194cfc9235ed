//! Value command implementation.
//!
//! Values a portfolio at one day's close, by holding and by sector.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tabled::Tabled;

use tessera_portfolio::{HoldingValuation, SectorValuation};

use crate::cli::OutputFormat;
use crate::commands::{load_history, parse_date_or, resolve_portfolio, Context};
use crate::output::{
    format_number, format_percent, print_header, print_output, print_warning, KeyValue,
};

/// Arguments for the value command.
#[derive(Args, Debug)]
pub struct ValueArgs {
    /// Price history file (.json or .csv). Defaults to the configured prices_file.
    #[arg(short, long)]
    pub prices: Option<PathBuf>,

    /// Portfolio file, or a portfolio name in the configured portfolio_dir
    #[arg(long)]
    pub portfolio: String,

    /// Valuation date (YYYY-MM-DD). Defaults to the last date in the history.
    #[arg(short, long)]
    pub date: Option<String>,
}

#[derive(Debug, serde::Serialize, Tabled)]
struct HoldingRow {
    #[tabled(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Sector")]
    sector: String,
    #[tabled(rename = "Shares")]
    shares: String,
    #[tabled(rename = "Close")]
    close: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Weight")]
    weight: String,
}

impl HoldingRow {
    fn new(h: &HoldingValuation, precision: usize) -> Self {
        Self {
            ticker: h.ticker.to_string(),
            sector: h.sector.clone(),
            shares: format_number(h.shares, precision),
            close: format_number(h.close, precision),
            value: format_number(h.value, precision),
            weight: format_percent(h.weight, precision),
        }
    }
}

#[derive(Debug, serde::Serialize, Tabled)]
struct SectorRow {
    #[tabled(rename = "Sector")]
    sector: String,
    #[tabled(rename = "Holdings")]
    holdings: usize,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Weight")]
    weight: String,
}

impl SectorRow {
    fn new(s: &SectorValuation, precision: usize) -> Self {
        Self {
            sector: s.sector.clone(),
            holdings: s.holding_count,
            value: format_number(s.value, precision),
            weight: format_percent(s.weight, precision),
        }
    }
}

/// Execute the value command.
pub fn execute(args: ValueArgs, ctx: &Context) -> Result<()> {
    let (_, history) = load_history(args.prices.as_deref(), ctx)?;
    let portfolio = resolve_portfolio(&args.portfolio, ctx)?;

    let (_, last) = history
        .date_range()
        .ok_or_else(|| anyhow::anyhow!("Price history has no dates"))?;
    let date = parse_date_or(args.date.as_deref(), last)?;

    let valuation = portfolio.value_on(history.records(), date);

    if !valuation.unpriced.is_empty() && !ctx.quiet {
        let unpriced: Vec<&str> = valuation.unpriced.iter().map(|t| t.as_str()).collect();
        print_warning(&format!("No price on {date} for: {}", unpriced.join(", ")));
    }

    let precision = ctx.precision();
    match ctx.format {
        OutputFormat::Table => {
            let holdings: Vec<HoldingRow> = valuation
                .holdings
                .iter()
                .map(|h| HoldingRow::new(h, precision))
                .collect();
            let sectors: Vec<SectorRow> = valuation
                .sectors
                .iter()
                .map(|s| SectorRow::new(s, precision))
                .collect();

            if !ctx.quiet {
                print_header(&format!("Holdings: {} on {date}", portfolio.name));
            }
            print_output(&holdings, ctx.format)?;
            if !ctx.quiet {
                print_header("Sectors");
            }
            print_output(&sectors, ctx.format)?;
            print_output(
                &[KeyValue::from_number("Total Value", valuation.total_value, precision)],
                ctx.format,
            )?;
        }
        OutputFormat::Json => crate::output::print_json(&valuation)?,
        OutputFormat::Csv => crate::output::print_csv(&valuation.holdings)?,
        OutputFormat::Minimal => println!("{}", format_number(valuation.total_value, precision)),
    }

    Ok(())
}
