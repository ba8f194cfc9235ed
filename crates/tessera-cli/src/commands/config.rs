//! Config command implementation.
//!
//! Manages persisted CLI settings. Values are stored as strings in a JSON
//! file and parsed into [`Settings`] at startup.

use anyhow::Result;
use clap::{Args, Subcommand};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use tessera_portfolio::DEFAULT_BAND_THRESHOLD;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{print_header, print_info, print_success, print_warning, KeyValue};

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "TESSERA_CONFIG_DIR";

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// List available configuration keys
    List,

    /// Reset configuration to defaults
    Reset(ResetArgs),

    /// Show configuration file location
    Path,
}

/// Arguments for get subcommand.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

/// Arguments for set subcommand.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    pub value: String,
}

/// Arguments for reset subcommand.
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Reset all settings (not just one)
    #[arg(long)]
    pub all: bool,

    /// Specific key to reset (optional)
    pub key: Option<String>,
}

/// CLI configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// Default output format
    DefaultFormat,
    /// Price file used when `--prices` is omitted
    PricesFile,
    /// Directory of portfolio files for name lookup
    PortfolioDir,
    /// Contribution band threshold
    BandThreshold,
    /// Precision for decimal output
    DecimalPrecision,
    /// Whether to use colors
    UseColors,
}

impl ConfigKey {
    fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default_format" | "format" => Some(Self::DefaultFormat),
            "prices_file" | "prices" => Some(Self::PricesFile),
            "portfolio_dir" | "portfolios" => Some(Self::PortfolioDir),
            "band_threshold" | "threshold" => Some(Self::BandThreshold),
            "decimal_precision" | "precision" => Some(Self::DecimalPrecision),
            "use_colors" | "colors" => Some(Self::UseColors),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "default_format",
            Self::PricesFile => "prices_file",
            Self::PortfolioDir => "portfolio_dir",
            Self::BandThreshold => "band_threshold",
            Self::DecimalPrecision => "decimal_precision",
            Self::UseColors => "use_colors",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "Default output format (table, json, csv, minimal)",
            Self::PricesFile => "Price history file (.json or .csv) used when --prices is omitted",
            Self::PortfolioDir => "Directory of portfolio .json files selectable by name",
            Self::BandThreshold => "Contribution band threshold as a decimal (0.10 = 10%)",
            Self::DecimalPrecision => "Number of decimal places for output (0-10)",
            Self::UseColors => "Enable colored output (true, false)",
        }
    }

    fn default_value(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "table",
            Self::PricesFile | Self::PortfolioDir => "",
            Self::BandThreshold => "0.10",
            Self::DecimalPrecision => "2",
            Self::UseColors => "true",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::DefaultFormat,
            Self::PricesFile,
            Self::PortfolioDir,
            Self::BandThreshold,
            Self::DecimalPrecision,
            Self::UseColors,
        ]
    }
}

/// Simple config storage.
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
struct Config {
    #[serde(flatten)]
    values: HashMap<String, String>,
}

impl Config {
    fn load() -> Result<Self> {
        let path = config_path()?;
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    fn save(&self) -> Result<()> {
        let path = config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    fn get(&self, key: &str) -> Option<&String> {
        self.values.get(key)
    }

    /// Stored value, or the key's default.
    fn value(&self, key: ConfigKey) -> &str {
        self.get(key.as_str())
            .map(String::as_str)
            .unwrap_or(key.default_value())
    }

    fn set(&mut self, key: String, value: String) {
        self.values.insert(key, value);
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// Typed view of the persisted configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Output format when `--format` is omitted.
    pub default_format: OutputFormat,
    /// Price file when `--prices` is omitted.
    pub prices_file: Option<PathBuf>,
    /// Directory searched for named portfolios.
    pub portfolio_dir: Option<PathBuf>,
    /// Contribution band threshold.
    pub band_threshold: f64,
    /// Decimal places for numeric output.
    pub decimal_precision: usize,
    /// Whether colored output is enabled.
    pub use_colors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Table,
            prices_file: None,
            portfolio_dir: None,
            band_threshold: DEFAULT_BAND_THRESHOLD,
            decimal_precision: 2,
            use_colors: true,
        }
    }
}

impl Settings {
    /// Loads settings from the config file, applying defaults.
    pub fn load() -> Result<Self> {
        Self::from_config(&Config::load()?)
    }

    fn from_config(config: &Config) -> Result<Self> {
        for key in ConfigKey::all() {
            validate_config_value(*key, config.value(*key))
                .map_err(|e| CliError::Config(format!("{}: {e}", key.as_str())))?;
        }

        let optional_path = |key: ConfigKey| {
            let value = config.value(key).trim();
            (!value.is_empty()).then(|| PathBuf::from(value))
        };

        Ok(Self {
            default_format: OutputFormat::from_name(config.value(ConfigKey::DefaultFormat))
                .unwrap_or_default(),
            prices_file: optional_path(ConfigKey::PricesFile),
            portfolio_dir: optional_path(ConfigKey::PortfolioDir),
            band_threshold: config.value(ConfigKey::BandThreshold).trim().parse()?,
            decimal_precision: config.value(ConfigKey::DecimalPrecision).trim().parse()?,
            use_colors: parse_bool(config.value(ConfigKey::UseColors)),
        })
    }
}

/// Get the config file path.
fn config_path() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir).join("config.json"));
    }
    let home = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    Ok(home.join("tessera").join("config.json"))
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, format: OutputFormat) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(format),
        ConfigCommand::Get(get_args) => execute_get(get_args, format),
        ConfigCommand::Set(set_args) => execute_set(set_args),
        ConfigCommand::List => execute_list(format),
        ConfigCommand::Reset(reset_args) => execute_reset(reset_args),
        ConfigCommand::Path => execute_path(),
    }
}

/// Show current configuration.
fn execute_show(format: OutputFormat) -> Result<()> {
    let config = Config::load()?;

    let results: Vec<KeyValue> = ConfigKey::all()
        .iter()
        .map(|key| KeyValue::new(key.as_str(), config.value(*key)))
        .collect();

    match format {
        OutputFormat::Table => {
            print_header("Current Configuration");
            crate::output::print_output(&results, format)?;
        }
        OutputFormat::Json => {
            let output: BTreeMap<&str, &str> = ConfigKey::all()
                .iter()
                .map(|key| (key.as_str(), config.value(*key)))
                .collect();
            crate::output::print_json(&output)?;
        }
        OutputFormat::Csv => {
            crate::output::print_output(&results, format)?;
        }
        OutputFormat::Minimal => {
            for key in ConfigKey::all() {
                println!("{}={}", key.as_str(), config.value(*key));
            }
        }
    }

    Ok(())
}

/// Get a configuration value.
fn execute_get(args: GetArgs, format: OutputFormat) -> Result<()> {
    let config = Config::load()?;

    let key = ConfigKey::from_str(&args.key)
        .ok_or_else(|| anyhow::anyhow!("Unknown configuration key: {}", args.key))?;
    let value = config.value(key);

    match format {
        OutputFormat::Table | OutputFormat::Csv => {
            println!("{}: {}", key.as_str(), value);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "key": key.as_str(),
                "value": value
            });
            crate::output::print_json(&output)?;
        }
        OutputFormat::Minimal => {
            println!("{}", value);
        }
    }

    Ok(())
}

/// Set a configuration value.
fn execute_set(args: SetArgs) -> Result<()> {
    let key = ConfigKey::from_str(&args.key)
        .ok_or_else(|| anyhow::anyhow!("Unknown configuration key: {}", args.key))?;

    validate_config_value(key, &args.value)?;

    let mut config = Config::load()?;
    config.set(key.as_str().to_string(), args.value.clone());
    config.save()?;

    print_success(&format!("Set {} = {}", key.as_str(), args.value));
    Ok(())
}

/// List available configuration keys.
fn execute_list(format: OutputFormat) -> Result<()> {
    let results: Vec<KeyValue> = ConfigKey::all()
        .iter()
        .map(|key| {
            KeyValue::new(
                key.as_str(),
                format!("{} (default: {})", key.description(), key.default_value()),
            )
        })
        .collect();

    match format {
        OutputFormat::Table => {
            print_header("Available Configuration Keys");
            crate::output::print_output(&results, format)?;
        }
        OutputFormat::Json => {
            let output: Vec<_> = ConfigKey::all()
                .iter()
                .map(|key| {
                    serde_json::json!({
                        "key": key.as_str(),
                        "description": key.description(),
                        "default": key.default_value()
                    })
                })
                .collect();
            crate::output::print_json(&output)?;
        }
        OutputFormat::Csv => {
            crate::output::print_output(&results, format)?;
        }
        OutputFormat::Minimal => {
            for key in ConfigKey::all() {
                println!("{}", key.as_str());
            }
        }
    }

    Ok(())
}

/// Reset configuration.
fn execute_reset(args: ResetArgs) -> Result<()> {
    if args.all {
        // Overwrite without reading so an unparseable file can be recovered.
        Config::default().save()?;
        print_success("Reset all configuration to defaults");
    } else if let Some(key_str) = args.key {
        let mut config = Config::load()?;
        let key = ConfigKey::from_str(&key_str)
            .ok_or_else(|| anyhow::anyhow!("Unknown configuration key: {}", key_str))?;
        config.remove(key.as_str());
        config.save()?;
        print_success(&format!(
            "Reset {} to default ({})",
            key.as_str(),
            key.default_value()
        ));
    } else {
        print_warning("Use --all to reset all settings, or specify a key to reset");
    }

    Ok(())
}

/// Show configuration file path.
fn execute_path() -> Result<()> {
    let path = config_path()?;
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}

fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}

/// Validate a configuration value.
fn validate_config_value(key: ConfigKey, value: &str) -> Result<()> {
    match key {
        ConfigKey::DefaultFormat => {
            if OutputFormat::from_name(value).is_none() {
                return Err(anyhow::anyhow!(
                    "Invalid format: {}. Use table, json, csv, or minimal.",
                    value
                ));
            }
        }
        ConfigKey::PricesFile => {
            let trimmed = value.trim().to_lowercase();
            if !trimmed.is_empty() && !trimmed.ends_with(".json") && !trimmed.ends_with(".csv") {
                return Err(anyhow::anyhow!(
                    "Invalid prices file: {}. Must end in .json or .csv.",
                    value
                ));
            }
        }
        ConfigKey::PortfolioDir => {}
        ConfigKey::BandThreshold => {
            let threshold: f64 = value
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid threshold: {}. Must be a number.", value))?;
            crate::commands::validate_threshold(threshold)?;
        }
        ConfigKey::DecimalPrecision => {
            let precision: u32 = value
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid precision: {}. Must be a number.", value))?;
            if precision > 10 {
                return Err(anyhow::anyhow!(
                    "Invalid precision: {}. Must be between 0 and 10.",
                    precision
                ));
            }
        }
        ConfigKey::UseColors => {
            if !["true", "false", "1", "0", "yes", "no"].contains(&value.trim().to_lowercase().as_str())
            {
                return Err(anyhow::anyhow!(
                    "Invalid boolean: {}. Use true or false.",
                    value
                ));
            }
        }
    }
    Ok(())
}
