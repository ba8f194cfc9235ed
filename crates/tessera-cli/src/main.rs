//! Tessera CLI - Command-line interface for portfolio return analytics.
//!
//! # Usage
//!
//! ```bash
//! # Contribution to return over the full history
//! tessera attribute --prices all_stocks.json --portfolio portfolioA.json
//!
//! # Contribution over a range, selecting a portfolio by name
//! tessera attribute --prices all_stocks.csv --portfolio portfolioB \
//!     --start 2016-01-04 --end 2017-12-29
//!
//! # Holding and sector values on one day
//! tessera value --prices all_stocks.json --portfolio portfolioA.json --date 2018-02-07
//!
//! # Trailing 1/3/5-year returns
//! tessera trailing --prices all_stocks.json --ticker AAPL --date 2018-02-07
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::config::Settings;
use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Config commands must run on invalid stored values so they can repair them.
    let settings = match &cli.command {
        Commands::Config(_) => Settings::load().unwrap_or_else(|e| {
            warn!(error = %e, "Ignoring invalid configuration");
            Settings::default()
        }),
        _ => Settings::load()?,
    };
    if !settings.use_colors {
        colored::control::set_override(false);
    }

    let ctx = Context {
        format: cli.format.unwrap_or(settings.default_format),
        quiet: cli.quiet,
        settings,
    };

    match cli.command {
        Commands::Attribute(args) => commands::attribute::execute(args, &ctx)?,
        Commands::Value(args) => commands::value::execute(args, &ctx)?,
        Commands::Trailing(args) => commands::trailing::execute(args, &ctx)?,
        Commands::Dates(args) => commands::dates::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, ctx.format)?,
    }

    Ok(())
}

/// Logs go to stderr so table and JSON output stay clean on stdout.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "tessera_cli=info,tessera_ext_file=info,tessera_portfolio=info",
        2 => "tessera_cli=debug,tessera_ext_file=debug,tessera_portfolio=debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
