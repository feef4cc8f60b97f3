//! AgriChain Seed
//!
//! Loads the immutable seed dataset and validates it at the boundary.
//!
//! # Overview
//!
//! - **SeedData**: the raw document (`users`, `products`, `transactions`,
//!   `notifications`, `analytics`)
//! - **SeedParser**: JSON and YAML readers, selected by file extension
//! - **validate**: uniqueness and referential checks
//! - **Catalog**: seed data that passed validation, plus the built-in demo
//!
//! # Example
//!
//! ```rust
//! use agri_seed::Catalog;
//!
//! let catalog = Catalog::demo().unwrap();
//! assert_eq!(catalog.products()[1].name, "Fresh Tomatoes");
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod data;
pub mod error;
pub mod parser;
pub mod validate;

pub use catalog::Catalog;
pub use data::{seed_schema, SeedData};
pub use error::SeedError;
pub use parser::{JsonSeedParser, SeedParser, SeedParsers, YamlSeedParser};
pub use validate::validate;

/// Read, parse and validate the seed file at `path`
///
/// # Errors
/// Returns [`SeedError`] on I/O, parse or validation failure
pub fn load_from_path(path: impl AsRef<std::path::Path>) -> Result<Catalog, SeedError> {
    Catalog::load(path.as_ref())
}

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for seed loading
    pub use crate::{load_from_path, Catalog, SeedData, SeedError};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
