//! AgriChain configuration
//!
//! Read from TOML. Every field has a default, so an empty file is a valid
//! configuration that serves the built-in demo catalog.

use crate::error::ConfigError;
use agri_dashboard::format::{DEFAULT_CURRENCY, DEFAULT_DATE_PATTERN, DEFAULT_TIMESTAMP_PATTERN};
use agri_dashboard::{DateFormat, Grouping, NumberFormat};
use agri_scan::DEFAULT_SCAN_DELAY;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgriConfig {
    /// Seed fixture; the built-in demo is used when absent
    pub seed_path: Option<PathBuf>,
    /// Simulated scan delay in milliseconds
    pub scan_delay_ms: u64,
    /// Rendering settings
    pub display: DisplayConfig,
    /// Log output settings
    pub logging: LoggingConfig,
}

impl AgriConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse TOML text
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] on malformed TOML or unknown keys
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read a TOML file
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// With seed fixture
    #[inline]
    #[must_use]
    pub fn with_seed_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.seed_path = Some(path.into());
        self
    }

    /// With scan delay
    #[inline]
    #[must_use]
    pub fn with_scan_delay(mut self, delay: Duration) -> Self {
        self.scan_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// With display settings
    #[inline]
    #[must_use]
    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }

    /// With log settings
    #[inline]
    #[must_use]
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    /// Scan delay as a duration
    #[inline]
    #[must_use]
    pub fn scan_delay(&self) -> Duration {
        Duration::from_millis(self.scan_delay_ms)
    }
}

impl Default for AgriConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            scan_delay_ms: u64::try_from(DEFAULT_SCAN_DELAY.as_millis()).unwrap_or(2000),
            display: DisplayConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Rendering settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Prefix for money amounts
    pub currency_symbol: String,
    /// Digit grouping style
    pub grouping: Grouping,
    /// strftime pattern for calendar dates
    pub date_format: String,
    /// strftime pattern for timestamps
    pub timestamp_format: String,
}

impl DisplayConfig {
    /// Number formatter for these settings
    #[must_use]
    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::new()
            .with_grouping(self.grouping)
            .with_currency_symbol(self.currency_symbol.clone())
    }

    /// Date formatter for these settings
    ///
    /// # Errors
    /// Returns [`ConfigError::Display`] if a pattern is invalid
    pub fn date_format(&self) -> Result<DateFormat, ConfigError> {
        Ok(DateFormat::new(
            self.date_format.clone(),
            self.timestamp_format.clone(),
        )?)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY.to_string(),
            grouping: Grouping::Thousands,
            date_format: DEFAULT_DATE_PATTERN.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_PATTERN.to_string(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directives; `RUST_LOG` takes precedence
    pub filter: String,
    /// Output format
    pub format: LogFormat,
}

impl LoggingConfig {
    /// With format
    #[inline]
    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// With filter directives
    #[inline]
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(AgriConfig::from_toml_str("").unwrap(), AgriConfig::default());
    }

    #[test]
    fn defaults() {
        let config = AgriConfig::default();
        assert_eq!(config.scan_delay(), Duration::from_millis(2000));
        assert_eq!(config.display.currency_symbol, "₹");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.seed_path.is_none());
    }

    #[test]
    fn full_document() {
        let text = r#"
            seed_path = "fixtures/demo.yaml"
            scan_delay_ms = 250

            [display]
            currency_symbol = "Rs "
            grouping = "lakh"
            date_format = "%d/%m/%Y"

            [logging]
            filter = "agri_core=debug"
            format = "json"
        "#;
        let config = AgriConfig::from_toml_str(text).unwrap();
        assert_eq!(config.seed_path, Some(PathBuf::from("fixtures/demo.yaml")));
        assert_eq!(config.scan_delay(), Duration::from_millis(250));
        assert_eq!(config.display.grouping, Grouping::Lakh);
        assert_eq!(config.display.timestamp_format, DEFAULT_TIMESTAMP_PATTERN);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.display.number_format().currency(2_850_000), "Rs 28,50,000");
    }

    #[test]
    fn unknown_key_rejected() {
        let err = AgriConfig::from_toml_str("scan_delay = 5").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn bad_date_pattern_rejected() {
        let display = DisplayConfig {
            date_format: "%Q".to_string(),
            ..DisplayConfig::default()
        };
        assert!(matches!(display.date_format(), Err(ConfigError::Display(_))));
    }

    #[test]
    fn builders() {
        let config = AgriConfig::new()
            .with_seed_path("seed.json")
            .with_scan_delay(Duration::from_millis(10))
            .with_logging(LoggingConfig::default().with_format(LogFormat::Json));
        assert_eq!(config.scan_delay_ms, 10);
        assert_eq!(config.logging.format, LogFormat::Json);
    }
}
