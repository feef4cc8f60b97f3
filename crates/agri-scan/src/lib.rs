//! AgriChain Scan
//!
//! Simulated code scanning as a deferred completion.
//!
//! # Overview
//!
//! A scan does not read a camera. It waits for a delay on an injectable
//! [`Scheduler`], then picks a product with a [`Selector`]. The returned
//! [`Deferred`] can be awaited or cancelled.
//!
//! # Example
//!
//! ```rust
//! use agri_scan::{FixedSelector, ImmediateScheduler, ScanSession};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let session = ScanSession::new()
//!     .with_scheduler(Arc::new(ImmediateScheduler::new()))
//!     .with_selector(FixedSelector(0));
//! let products: Arc<[agri_model::Product]> = Vec::new().into();
//! assert!(session.start(products).is_err());
//! # }
//! ```

#![warn(missing_docs)]

pub mod deferred;
pub mod error;
pub mod scheduler;
pub mod selector;
pub mod session;

pub use deferred::Deferred;
pub use error::ScanError;
pub use scheduler::{ImmediateScheduler, Scheduler, TokioScheduler};
pub use selector::{FixedSelector, RandomSelector, Selector};
pub use session::{ScanSession, DEFAULT_SCAN_DELAY};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for scan simulation
    pub use crate::{Deferred, ScanError, ScanSession, Scheduler, Selector};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
