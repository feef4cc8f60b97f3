//! AgriChain Core
//!
//! Facade over a validated catalog, plus the configuration, logging and
//! text views used by the `agrichain` command-line shell.
//!
//! # Overview
//!
//! - **AgriChain**: filtering, lookup, dashboards and scans over one catalog
//! - **AgriConfig**: TOML configuration (seed path, scan delay, display, logging)
//! - **logging**: tracing subscriber setup
//! - **render**: plain-text views with explicit empty states
//!
//! # Example
//!
//! ```rust
//! use agri_core::AgriChain;
//! use agri_query::ProductCriteria;
//!
//! let chain = AgriChain::demo().unwrap();
//! let criteria = ProductCriteria::new().constraint("type", "Dairy").unwrap();
//! let hits = chain.products(&criteria);
//! assert_eq!(hits[0].name, "Organic Milk");
//! ```

#![warn(missing_docs)]

pub mod chain;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;

pub use chain::{AgriChain, ProductDetail};
pub use config::{AgriConfig, DisplayConfig, LogFormat, LoggingConfig};
pub use error::{AgriError, ConfigError, Result};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with AgriChain
    pub use crate::{AgriChain, AgriConfig, AgriError};
    pub use agri_model::prelude::*;
    pub use agri_query::prelude::*;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
