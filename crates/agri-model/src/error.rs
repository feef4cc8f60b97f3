//! Error types for catalog entities

/// Errors raised while parsing entity values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Value does not name a variant of the enumeration
    #[error("unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        /// Enumeration name
        kind: &'static str,
        /// Rejected input
        value: String,
        /// Accepted spellings
        expected: String,
    },

    /// Ledger hash is not `0x` followed by the expected hex digits
    #[error("invalid ledger hash '{value}': {reason}")]
    InvalidHash {
        /// Rejected input
        value: String,
        /// Why it was rejected
        reason: String,
    },
}

impl ModelError {
    /// Create an unknown-variant error listing accepted values
    pub fn unknown_variant(kind: &'static str, value: impl Into<String>, expected: &[&str]) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
            expected: expected.join(", "),
        }
    }
}
