//! String identifiers
//!
//! Seed data uses short human-readable identifiers (`P001`, `T003`, `QR002`).
//! Each kind gets its own newtype so a product id cannot be passed where a
//! user id is expected.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier
            #[inline]
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrow the raw identifier
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Product identifier (`P001`)
    ProductId
);

string_id!(
    /// Ledger transaction identifier (`T001`)
    TransactionId
);

string_id!(
    /// Account identifier
    UserId
);

string_id!(
    /// Notification identifier (`N001`)
    NotificationId
);

string_id!(
    /// Printed traceability code attached to a product (`QR001`)
    QrCode
);
