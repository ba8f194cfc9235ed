//! Trailing command implementation.
//!
//! Trailing N-year close-to-close returns for a single ticker or for every
//! holding in a portfolio.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tabled::Tabled;

use tessera_portfolio::{
    portfolio_trailing_returns, trailing_returns, AnalyticsConfig, TrailingReturn,
    DEFAULT_TRAILING_PERIODS,
};

use crate::cli::OutputFormat;
use crate::commands::{load_history, parse_date_or, resolve_portfolio, Context};
use crate::output::{format_number, format_percent, print_header, print_output, print_warning};

/// Arguments for the trailing command.
#[derive(Args, Debug)]
pub struct TrailingArgs {
    /// Price history file (.json or .csv). Defaults to the configured prices_file.
    #[arg(short, long)]
    pub prices: Option<PathBuf>,

    /// Ticker symbol
    #[arg(short, long, required_unless_present = "portfolio", conflicts_with = "portfolio")]
    pub ticker: Option<String>,

    /// Portfolio file or name; reports every holding
    #[arg(long)]
    pub portfolio: Option<String>,

    /// Anchor date (YYYY-MM-DD). Defaults to the last date in the history.
    #[arg(short, long)]
    pub date: Option<String>,

    /// Look-back periods in years
    #[arg(short, long, value_delimiter = ',', default_values_t = DEFAULT_TRAILING_PERIODS.to_vec())]
    pub years: Vec<u32>,
}

#[derive(Debug, Serialize, Tabled)]
struct TrailingRow {
    #[tabled(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "From")]
    from_date: String,
    #[tabled(rename = "To")]
    to_date: String,
    #[tabled(rename = "From Close")]
    from_close: String,
    #[tabled(rename = "To Close")]
    to_close: String,
    #[tabled(rename = "Return")]
    return_pct: String,
}

impl TrailingRow {
    fn new(r: &TrailingReturn, precision: usize) -> Self {
        Self {
            ticker: r.ticker.to_string(),
            period: r.period_label(),
            from_date: r.from_date.to_string(),
            to_date: r.to_date.to_string(),
            from_close: format_number(r.from_close, precision),
            to_close: format_number(r.to_close, precision),
            return_pct: format_percent(r.return_pct, precision),
        }
    }
}

/// Execute the trailing command.
pub fn execute(args: TrailingArgs, ctx: &Context) -> Result<()> {
    let (_, history) = load_history(args.prices.as_deref(), ctx)?;
    let (_, last) = history
        .date_range()
        .ok_or_else(|| anyhow::anyhow!("Price history has no dates"))?;
    let anchor = parse_date_or(args.date.as_deref(), last)?;

    let (title, returns): (String, Vec<TrailingReturn>) = match (&args.ticker, &args.portfolio) {
        (Some(ticker), _) => {
            if history.for_ticker(ticker).is_empty() {
                return Err(anyhow::anyhow!("No prices for ticker {ticker}"));
            }
            (
                ticker.clone(),
                trailing_returns(history.records(), ticker, anchor, &args.years),
            )
        }
        (None, Some(name)) => {
            let portfolio = resolve_portfolio(name, ctx)?;
            let config = AnalyticsConfig::default().with_trailing_periods(args.years.clone());
            let returns = portfolio_trailing_returns(
                history.records(),
                &portfolio.holdings,
                anchor,
                &config,
            )
            .into_iter()
            .flat_map(|h| h.returns)
            .collect();
            (portfolio.name, returns)
        }
        (None, None) => return Err(anyhow::anyhow!("Either --ticker or --portfolio is required")),
    };

    if returns.is_empty() && !ctx.quiet {
        print_warning(&format!("No trailing returns for {title} around {anchor}"));
    }

    let precision = ctx.precision();
    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header(&format!("Trailing Returns: {title} as of {anchor}"));
            }
            let rows: Vec<TrailingRow> = returns.iter().map(|r| TrailingRow::new(r, precision)).collect();
            print_output(&rows, ctx.format)?;
        }
        OutputFormat::Json => crate::output::print_json(&returns)?,
        OutputFormat::Csv => crate::output::print_csv(&returns)?,
        OutputFormat::Minimal => {
            for r in &returns {
                println!(
                    "{} {} {}",
                    r.ticker,
                    r.period_label(),
                    format_percent(r.return_pct, precision)
                );
            }
        }
    }

    Ok(())
}
