//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::Serialize;
use std::env;
use std::str::FromStr;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One pretty-printed JSON report
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("AREA_OUTPUT".to_string())),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CliConfig {
    /// Output format (AREA_OUTPUT, default: text)
    pub output: OutputFormat,

    /// Log filter directive overriding RUST_LOG (AREA_LOG)
    pub log_filter: Option<String>,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = CliConfig {
            output: lookup("AREA_OUTPUT")
                .unwrap_or_else(|| "text".to_string())
                .parse()?,

            log_filter: lookup("AREA_LOG").filter(|filter| !filter.trim().is_empty()),
        };

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
