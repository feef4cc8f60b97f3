//! Tracing subscriber setup

use crate::config::{LogFormat, LoggingConfig};
use crate::error::ConfigError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber
///
/// `RUST_LOG` overrides the configured filter. Events go to stderr so that
/// command output on stdout stays clean.
///
/// # Errors
/// Returns [`ConfigError`] if the filter does not parse or a subscriber is
/// already installed
pub fn init(config: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.filter)
            .map_err(|e| ConfigError::invalid_value("logging.filter", e.to_string()))?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match config.format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };
    installed.map_err(|e| ConfigError::LoggingInstalled(e.to_string()))
}
