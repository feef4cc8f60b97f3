//! Criteria construction errors
//!
//! These are configuration errors: they are raised while criteria are built
//! from untyped input and never by the filter engine itself.

use agri_model::ModelError;

/// Rejected filter configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CriteriaError {
    /// Field name is not filterable for this record kind
    #[error("unknown {record} filter field '{field}' (expected one of: {expected})")]
    UnknownField {
        /// Record kind being filtered
        record: &'static str,
        /// Rejected field name
        field: String,
        /// Accepted field names
        expected: String,
    },

    /// Value cannot be parsed for the named field
    #[error("invalid value for filter field '{field}': {source}")]
    InvalidValue {
        /// Field the value was given for
        field: String,
        /// Underlying parse failure
        #[source]
        source: ModelError,
    },
}

impl CriteriaError {
    /// Create unknown-field error
    pub fn unknown_field(record: &'static str, field: impl Into<String>, expected: &[&str]) -> Self {
        Self::UnknownField {
            record,
            field: field.into(),
            expected: expected.join(", "),
        }
    }

    /// Create invalid-value error
    pub fn invalid_value(field: impl Into<String>, source: ModelError) -> Self {
        Self::InvalidValue {
            field: field.into(),
            source,
        }
    }
}
