//! Error types for seed loading
//!
//! Parse failures carry the underlying serde error. Validation failures name
//! the offending identifier so a broken fixture can be fixed without a
//! debugger.

use agri_model::{NotificationId, ProductId, QrCode, TransactionId, UserId};
use std::path::PathBuf;

/// Errors raised while reading, parsing or validating seed data
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Seed file could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON document
    #[error("invalid JSON seed: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed YAML document
    #[error("invalid YAML seed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// No parser handles the file extension
    #[error("unsupported seed format '{}': expected one of {expected}", path.display())]
    UnsupportedFormat {
        /// File that was offered
        path: PathBuf,
        /// Accepted extensions
        expected: String,
    },

    /// Two products share an id
    #[error("duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    /// Two products share a traceability code
    #[error("duplicate QR code: {0}")]
    DuplicateQrCode(QrCode),

    /// Two users share an id
    #[error("duplicate user id: {0}")]
    DuplicateUser(UserId),

    /// Two ledger entries share an id
    #[error("duplicate transaction id: {0}")]
    DuplicateTransaction(TransactionId),

    /// A ledger entry names a product that is not in the catalog
    #[error("transaction {transaction} references unknown product {product}")]
    DanglingProduct {
        /// Offending entry
        transaction: TransactionId,
        /// Missing product
        product: ProductId,
    },

    /// A notification is addressed to a user that does not exist
    #[error("notification {notification} addressed to unknown user {user}")]
    DanglingOwner {
        /// Offending notification
        notification: NotificationId,
        /// Missing user
        user: UserId,
    },
}

impl SeedError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error came from boundary validation rather than parsing
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::DuplicateProduct(_)
                | Self::DuplicateQrCode(_)
                | Self::DuplicateUser(_)
                | Self::DuplicateTransaction(_)
                | Self::DanglingProduct { .. }
                | Self::DanglingOwner { .. }
        )
    }
}
