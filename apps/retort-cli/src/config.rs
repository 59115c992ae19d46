//! # CLI Configuration
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--json`)
//! 2. Environment variables (`RETORT_*`)
//! 3. Defaults (this file)
//!
//! The packaging tier table is NOT configurable; it is compiled into
//! `retort-core`.

use std::env;
use std::fmt;
use std::str::FromStr;

use retort_core::format::RUPIAH_SYMBOL;
use serde::{Deserialize, Serialize};

/// Environment variable selecting the output format.
pub const ENV_OUTPUT: &str = "RETORT_OUTPUT";

/// Environment variable overriding the currency prefix.
pub const ENV_CURRENCY_SYMBOL: &str = "RETORT_CURRENCY_SYMBOL";

/// Log filter used when `RUST_LOG` is not set.
pub const ENV_LOG: &str = "RETORT_LOG";

/// Default tracing filter.
pub const DEFAULT_LOG_FILTER: &str = "info,retort=debug";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned table with rupiah formatting.
    #[default]
    Text,

    /// Exact values plus formatted strings, as JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                key: ENV_OUTPUT.to_string(),
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliConfig {
    /// Output format for results
    pub output: OutputFormat,

    /// Currency prefix for display (default: "Rp")
    pub currency_symbol: String,

    /// Tracing filter from `RETORT_LOG`, if set
    pub log_filter: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            output: OutputFormat::Text,
            currency_symbol: RUPIAH_SYMBOL.to_string(),
            log_filter: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// ## Environment Variables
    /// - `RETORT_OUTPUT`: `text` or `json`
    /// - `RETORT_CURRENCY_SYMBOL`: display prefix (e.g. "IDR")
    /// - `RETORT_LOG`: tracing filter used when `RUST_LOG` is unset
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CliConfig::default();

        if let Some(output) = lookup(ENV_OUTPUT) {
            config.output = output.parse()?;
        }

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            let symbol = symbol.trim();
            if symbol.is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: ENV_CURRENCY_SYMBOL.to_string(),
                    value: symbol.to_string(),
                });
            }
            config.currency_symbol = symbol.to_string();
        }

        config.log_filter = lookup(ENV_LOG).filter(|filter| !filter.trim().is_empty());

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}
