//! Error types for the AgriChain facade

use agri_dashboard::DisplayError;
use agri_query::CriteriaError;
use agri_scan::ScanError;
use agri_seed::SeedError;
use std::path::PathBuf;

/// Main AgriChain error type
#[derive(Debug, thiserror::Error)]
pub enum AgriError {
    /// Seed data could not be loaded
    #[error("seed error: {0}")]
    Seed(#[from] SeedError),

    /// Filter input was rejected
    #[error("invalid criteria: {0}")]
    Criteria(#[from] CriteriaError),

    /// Scan failed
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    /// Configuration is unusable
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors reading or applying configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Display settings are unusable
    #[error(transparent)]
    Display(#[from] DisplayError),

    /// A setting has an unusable value
    #[error("invalid value for {field}: {message}")]
    InvalidValue {
        /// Setting name
        field: &'static str,
        /// What is wrong with it
        message: String,
    },

    /// Global logger was already installed
    #[error("logging already initialised: {0}")]
    LoggingInstalled(String),
}

impl ConfigError {
    /// Create invalid-value error
    pub fn invalid_value(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}

/// Result type for facade operations
pub type Result<T> = std::result::Result<T, AgriError>;
