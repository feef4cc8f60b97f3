//! AgriChain Query
//!
//! Pure, order-preserving filtering of catalog records.
//!
//! # Overview
//!
//! The query engine provides:
//! - **Record**: what a filterable entity exposes (search fields, facets)
//! - **Criteria**: free-text terms plus exact-match facets, combined with AND
//! - **filter**: the stable subsequence of records matching a criteria value
//! - **Lookup**: exact code/id lookup with an explicit not-found outcome
//!
//! Criteria are validated when they are built. Once built, filtering cannot
//! fail and never reorders, deduplicates or mutates its input.
//!
//! # Example
//!
//! ```rust,ignore
//! use agri_query::{filter, ProductCriteria};
//!
//! let criteria = ProductCriteria::new()
//!     .search("tomato")
//!     .constraint("status", "all")?;
//!
//! let matches = filter(&products, &criteria);
//! ```

#![warn(missing_docs)]

pub mod constraint;
pub mod criteria;
pub mod engine;
pub mod error;
pub mod lookup;
pub mod record;

// Re-exports
pub use constraint::Constraint;
pub use criteria::{Criteria, ProductCriteria, TransactionCriteria};
pub use engine::{count, filter, filter_iter};
pub use error::CriteriaError;
pub use lookup::{find_by_code, find_by_id, Lookup};
pub use record::{Facet, ProductFacet, Record, TransactionFacet, TEXT_ANY};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for filtering records
    pub use crate::{
        filter, find_by_code, Constraint, Criteria, CriteriaError, Lookup, ProductCriteria,
        ProductFacet, Record, TransactionCriteria, TransactionFacet,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
