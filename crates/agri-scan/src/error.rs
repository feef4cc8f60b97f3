//! Error types for the scan simulation

/// Errors raised by a scan
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// Nothing to select from
    #[error("cannot scan: the catalog is empty")]
    EmptyCatalog,

    /// A scan is already running in this session
    #[error("a scan is already in progress")]
    AlreadyScanning,

    /// The deferred completion was cancelled before it ran
    #[error("scan cancelled")]
    Cancelled,

    /// The background task failed
    #[error("scan task failed: {0}")]
    Task(String),
}
