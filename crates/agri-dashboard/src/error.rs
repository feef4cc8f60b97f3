//! Error types for display configuration

/// Invalid display settings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DisplayError {
    /// A chrono strftime pattern contains an unknown specifier
    #[error("invalid {kind} pattern '{pattern}'")]
    InvalidPattern {
        /// Which pattern (`date` or `timestamp`)
        kind: &'static str,
        /// Offending pattern
        pattern: String,
    },

    /// Grouping style is not recognised
    #[error("unknown grouping '{0}': expected thousands or lakh")]
    UnknownGrouping(String),
}
