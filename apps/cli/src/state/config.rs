//! # Configuration State
//!
//! Settings loaded once at startup from environment variables, with
//! fallback to defaults.
//!
//! | Variable | Default |
//! |---|---|
//! | `MINISTORE_STORE_NAME` | `Mini-Store` |
//! | `MINISTORE_CURRENCY_SYMBOL` | `$` |
//! | `MINISTORE_CURRENCY_DECIMALS` | `1` |
//! | `MINISTORE_DOTTED_THOUSANDS` | `false` |
//! | `MINISTORE_CONFIRM_PURCHASES` | `true` |
//! | `MINISTORE_OUTPUT` | `text` |
//!
//! ## Thread Safety
//! Read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use std::env;

use ministore_core::Money;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (banner and receipt)
    pub store_name: String,

    /// Currency symbol put before subtotals and totals
    pub currency_symbol: String,

    /// Decimal places shown for amounts (0 to 2)
    pub currency_decimals: u8,

    /// Read `5.500` as five thousand five hundred when parsing prices
    pub dotted_thousands: bool,

    /// Ask "Confirm the purchase?" before committing
    pub confirm_purchases: bool,

    /// How results are printed
    pub output: OutputFormat,
}

/// Result rendering mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,

    /// One JSON document per result
    Json,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Mini-Store".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 1,
            dotted_thousands: false,
            confirm_purchases: true,
            output: OutputFormat::Text,
        }
    }
}

impl ConfigState {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ConfigState::default();

        let currency_decimals = match lookup("MINISTORE_CURRENCY_DECIMALS") {
            Some(raw) => raw
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|decimals| *decimals <= 2)
                .ok_or_else(|| ConfigError::InvalidValue("MINISTORE_CURRENCY_DECIMALS".to_string()))?,
            None => defaults.currency_decimals,
        };

        let output = match lookup("MINISTORE_OUTPUT") {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => return Err(ConfigError::InvalidValue("MINISTORE_OUTPUT".to_string())),
            },
            None => defaults.output,
        };

        let config = ConfigState {
            store_name: lookup("MINISTORE_STORE_NAME")
                .map(|name| name.trim().to_string())
                .unwrap_or(defaults.store_name),

            currency_symbol: lookup("MINISTORE_CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),

            currency_decimals,

            dotted_thousands: parse_flag(&lookup, "MINISTORE_DOTTED_THOUSANDS", defaults.dotted_thousands)?,

            confirm_purchases: parse_flag(&lookup, "MINISTORE_CONFIRM_PURCHASES", defaults.confirm_purchases)?,

            output,
        };

        if config.store_name.is_empty() {
            return Err(ConfigError::MissingRequired("MINISTORE_STORE_NAME".to_string()));
        }

        Ok(config)
    }

    /// Formats an amount without the currency symbol (price columns).
    pub fn format_amount(&self, money: Money) -> String {
        money.format_decimals(self.currency_decimals)
    }

    /// Formats an amount with the currency symbol (subtotals, totals).
    pub fn format_money(&self, money: Money) -> String {
        format!("{}{}", self.currency_symbol, self.format_amount(money))
    }
}

fn parse_flag<F>(lookup: &F, key: &str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue(key.to_string())),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
