//! CLI command implementations.

pub mod attribute;
pub mod config;
pub mod dates;
pub mod trailing;
pub mod value;

// Re-export submodules for convenience
pub use attribute::AttributeArgs;
pub use config::ConfigArgs;
pub use dates::DatesArgs;
pub use trailing::TrailingArgs;
pub use value::ValueArgs;

use std::path::{Path, PathBuf};

use tessera_core::Date;
use tessera_ext_file::{load_portfolio, load_price_history, PortfolioCatalog};
use tessera_portfolio::{Portfolio, PriceHistory};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use config::Settings;

/// Resolved global options shared by every analytics command.
pub struct Context {
    /// Output format after applying the configured default.
    pub format: OutputFormat,
    /// Suppress headers and informational lines.
    pub quiet: bool,
    /// Persisted settings.
    pub settings: Settings,
}

impl Context {
    /// Decimal places for numeric output.
    pub fn precision(&self) -> usize {
        self.settings.decimal_precision
    }
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Parses an optional date, falling back to `default`.
pub fn parse_date_or(s: Option<&str>, default: Date) -> CliResult<Date> {
    s.map_or(Ok(default), parse_date)
}

/// Validates a band threshold.
pub fn validate_threshold(threshold: f64) -> CliResult<f64> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(CliError::InvalidThreshold(threshold));
    }
    Ok(threshold)
}

/// Loads price history from `--prices` or the configured `prices_file`.
pub fn load_history(arg: Option<&Path>, ctx: &Context) -> anyhow::Result<(PathBuf, PriceHistory)> {
    let path = arg
        .map(Path::to_path_buf)
        .or_else(|| ctx.settings.prices_file.clone())
        .ok_or_else(|| {
            CliError::MissingArgument(
                "--prices (or set prices_file with `tessera config set`)".to_string(),
            )
        })?;

    let history = load_price_history(&path)?;
    if history.is_empty() {
        return Err(CliError::EmptyHistory(path).into());
    }
    Ok((path, history))
}

/// Resolves `--portfolio` as a file path, or as a portfolio name in the
/// configured `portfolio_dir`.
pub fn resolve_portfolio(arg: &str, ctx: &Context) -> anyhow::Result<Portfolio> {
    let as_path = Path::new(arg);
    if as_path.is_file() {
        debug!(path = %as_path.display(), "Portfolio given as a file");
        return Ok(load_portfolio(as_path)?);
    }

    let dir = ctx.settings.portfolio_dir.as_ref().ok_or_else(|| {
        CliError::MissingArgument(format!(
            "portfolio file '{arg}' not found and no portfolio_dir is configured"
        ))
    })?;
    let catalog = PortfolioCatalog::from_dir(dir)?;
    Ok(catalog.get(arg)?.clone())
}
