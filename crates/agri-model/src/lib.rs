//! AgriChain Model
//!
//! Typed entities for the supply-chain catalog.
//!
//! # Overview
//!
//! The model provides:
//! - **Product** / **Transaction**: the records the query engine filters
//! - **User** / **Notification**: account data surfaced by the dashboard
//! - **AnalyticsSnapshot**: precomputed figures selected per role
//! - **LedgerHash**: opaque, fixed-length ledger reference
//!
//! All entities are immutable seed data. Nothing in this crate mutates them.
//!
//! # Example
//!
//! ```rust
//! use agri_model::{ProductStatus, QualityGrade};
//!
//! let status: ProductStatus = "in-transit".parse().unwrap();
//! assert_eq!(status.label(), "In Transit");
//! assert!(QualityGrade::APlus < QualityGrade::C);
//! ```

#![warn(missing_docs)]

pub mod analytics;
pub mod entity;
pub mod error;
pub mod hash;
pub mod id;
pub mod kind;

// Re-exports
pub use analytics::{AnalyticsSnapshot, ConsumerFigures, CropCount, FarmerFigures};
pub use entity::{Notification, Product, Transaction, User};
pub use error::ModelError;
pub use hash::LedgerHash;
pub use id::{NotificationId, ProductId, QrCode, TransactionId, UserId};
pub use kind::{ProductStatus, QualityGrade, Role, Severity, TransactionKind, Verification};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with catalog entities
    pub use crate::{
        AnalyticsSnapshot, LedgerHash, Product, ProductId, ProductStatus, QrCode, QualityGrade,
        Role, Transaction, TransactionKind, User, UserId, Verification,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
