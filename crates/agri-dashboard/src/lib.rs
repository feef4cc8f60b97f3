//! AgriChain Dashboard
//!
//! Stateless view helpers on top of the catalog.
//!
//! # Overview
//!
//! - **role**: the role capability table (names, titles, navigation)
//! - **stats**: per-role selection of precomputed figures
//! - **ledger**: ledger summary, product journey, unread counts
//! - **format**: digit grouping, currency and date rendering
//!
//! # Example
//!
//! ```rust
//! use agri_dashboard::{navigation, NumberFormat};
//! use agri_model::Role;
//!
//! let labels: Vec<_> = navigation(Role::Consumer).iter().map(|i| i.label).collect();
//! assert_eq!(labels[2], "QR Scanner");
//! assert_eq!(NumberFormat::new().currency(2_850_000), "₹2,850,000");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod format;
pub mod ledger;
pub mod role;
pub mod stats;

pub use error::DisplayError;
pub use format::{DateFormat, Grouping, NumberFormat};
pub use ledger::{notifications_for, product_journey, unread_count, LedgerSummary};
pub use role::{can_access, navigation, profile, NavItem, RoleProfile, Section, PROFILES};
pub use stats::{popular_crops, quality_rows, stats_for_role, StatPanel, StatValue};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for dashboard views
    pub use crate::{
        navigation, profile, stats_for_role, DateFormat, LedgerSummary, NumberFormat, Section,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
