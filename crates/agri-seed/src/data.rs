//! Raw seed document

use agri_model::{AnalyticsSnapshot, Notification, Product, Transaction, User};
use schemars::schema::RootSchema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The immutable collections a catalog is built from
///
/// This is the shape of a seed fixture before validation. Use
/// [`crate::Catalog`] once the document has been checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    /// Account holders
    #[serde(default)]
    pub users: Vec<User>,
    /// Product catalog, in display order
    #[serde(default)]
    pub products: Vec<Product>,
    /// Ledger entries, in ledger order
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    /// Per-user messages
    #[serde(default)]
    pub notifications: Vec<Notification>,
    /// Precomputed dashboard figures
    pub analytics: AnalyticsSnapshot,
}

/// JSON schema describing a seed fixture
#[must_use]
pub fn seed_schema() -> RootSchema {
    schemars::schema_for!(SeedData)
}
