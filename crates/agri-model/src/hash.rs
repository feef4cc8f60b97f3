//! Ledger hash
//!
//! Provides [`LedgerHash`], the opaque reference every product and
//! transaction carries. Nothing verifies it against a chain; it is only
//! checked for shape when seed data crosses the boundary.

use crate::error::ModelError;
use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Fixed-length ledger reference: `0x` followed by 32 hex digits
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LedgerHash(String);

impl LedgerHash {
    /// Number of payload bytes encoded after the prefix
    pub const BYTES: usize = 16;

    /// Hex prefix
    pub const PREFIX: &'static str = "0x";

    /// Parse and validate a hash string
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidHash`] if the prefix is missing, the
    /// payload is not hex, or the payload length is wrong
    pub fn parse(value: &str) -> Result<Self, ModelError> {
        let invalid = |reason: String| ModelError::InvalidHash {
            value: value.to_string(),
            reason,
        };

        let payload = value
            .strip_prefix(Self::PREFIX)
            .ok_or_else(|| invalid(format!("missing '{}' prefix", Self::PREFIX)))?;
        let bytes = hex::decode(payload).map_err(|e| invalid(e.to_string()))?;
        if bytes.len() != Self::BYTES {
            return Err(invalid(format!(
                "expected {} bytes, got {}",
                Self::BYTES,
                bytes.len()
            )));
        }

        Ok(Self(value.to_string()))
    }

    /// Full string form
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated form for tables (first 8 characters and an ellipsis)
    #[must_use]
    pub fn short(&self) -> String {
        format!("{}...", &self.0[..8])
    }
}

impl Display for LedgerHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LedgerHash {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LedgerHash {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LedgerHash> for String {
    fn from(hash: LedgerHash) -> Self {
        hash.0
    }
}

impl JsonSchema for LedgerHash {
    fn schema_name() -> String {
        "LedgerHash".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        <String as JsonSchema>::json_schema(gen)
    }
}
