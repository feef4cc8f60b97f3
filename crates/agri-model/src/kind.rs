//! Enumerated entity attributes
//!
//! Every enumeration round-trips through the same spelling the seed fixtures
//! use (`in-transit`, `A+`, `harvest`), via both serde and [`FromStr`].

use crate::error::ModelError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Resolve `value` against the wire spelling of each variant in `all`
fn parse_variant<T: Copy>(
    kind: &'static str,
    value: &str,
    all: &[T],
    wire: impl Fn(T) -> &'static str,
) -> Result<T, ModelError> {
    all.iter()
        .copied()
        .find(|variant| wire(*variant) == value)
        .ok_or_else(|| {
            let expected: Vec<&str> = all.iter().map(|v| wire(*v)).collect();
            ModelError::unknown_variant(kind, value, &expected)
        })
}

/// Quality grade, best first
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum QualityGrade {
    /// Premium
    #[serde(rename = "A+")]
    APlus,
    /// Standard first grade
    #[serde(rename = "A")]
    A,
    /// Second grade
    #[serde(rename = "B")]
    B,
    /// Third grade
    #[serde(rename = "C")]
    C,
}

impl QualityGrade {
    /// All grades in rank order
    pub const ALL: [QualityGrade; 4] = [Self::APlus, Self::A, Self::B, Self::C];

    /// Wire spelling
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl fmt::Display for QualityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QualityGrade {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("quality grade", s, &Self::ALL, Self::as_str)
    }
}

/// Product lifecycle status
///
/// The usual progression is harvested → in-transit → delivered → sold, but
/// nothing enforces it: any status may be assigned directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum ProductStatus {
    /// Collected at the farm
    Harvested,
    /// Moving between parties
    InTransit,
    /// Arrived at the retailer
    Delivered,
    /// Sold to a consumer
    Sold,
}

impl ProductStatus {
    /// All statuses in their customary order
    pub const ALL: [ProductStatus; 4] =
        [Self::Harvested, Self::InTransit, Self::Delivered, Self::Sold];

    /// Wire spelling
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Harvested => "harvested",
            Self::InTransit => "in-transit",
            Self::Delivered => "delivered",
            Self::Sold => "sold",
        }
    }

    /// Human-readable label
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Harvested => "Harvested",
            Self::InTransit => "In Transit",
            Self::Delivered => "Delivered",
            Self::Sold => "Sold",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("product status", s, &Self::ALL, Self::as_str)
    }
}

/// Ledger entry kind
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Produce recorded at the farm
    Harvest,
    /// Custody handed to another party
    Transfer,
    /// Arrival at destination
    Delivery,
    /// Final sale
    Sale,
}

impl TransactionKind {
    /// All kinds
    pub const ALL: [TransactionKind; 4] = [Self::Harvest, Self::Transfer, Self::Delivery, Self::Sale];

    /// Wire spelling
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Harvest => "harvest",
            Self::Transfer => "transfer",
            Self::Delivery => "delivery",
            Self::Sale => "sale",
        }
    }

    /// Human-readable label
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Harvest => "Harvest",
            Self::Transfer => "Transfer",
            Self::Delivery => "Delivery",
            Self::Sale => "Sale",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("transaction type", s, &Self::ALL, Self::as_str)
    }
}

/// Verification state of a ledger entry, derived from its `verified` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verification {
    /// Entry is confirmed
    Verified,
    /// Entry awaits confirmation
    Pending,
}

impl Verification {
    /// Both states
    pub const ALL: [Verification; 2] = [Self::Verified, Self::Pending];

    /// Map a `verified` flag onto a state
    #[inline]
    #[must_use]
    pub const fn from_flag(verified: bool) -> Self {
        if verified {
            Self::Verified
        } else {
            Self::Pending
        }
    }

    /// Wire spelling
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verification {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("verification status", s, &Self::ALL, Self::as_str)
    }
}

/// Account role; drives which views a user sees
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Grows and registers produce
    Farmer,
    /// Distributes and sells produce
    Retailer,
    /// Buys produce and checks its origin
    Consumer,
}

impl Role {
    /// All roles
    pub const ALL: [Role; 3] = [Self::Farmer, Self::Retailer, Self::Consumer];

    /// Wire spelling
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Farmer => "farmer",
            Self::Retailer => "retailer",
            Self::Consumer => "consumer",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Farmer
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("role", s, &Self::ALL, Self::as_str)
    }
}

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational
    Info,
    /// Needs attention
    Warning,
    /// Positive outcome
    Success,
    /// Failure
    Error,
}

impl Severity {
    /// All severities
    pub const ALL: [Severity; 4] = [Self::Info, Self::Warning, Self::Success, Self::Error];

    /// Wire spelling
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("severity", s, &Self::ALL, Self::as_str)
    }
}
