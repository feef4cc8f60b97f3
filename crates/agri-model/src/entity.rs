//! Catalog entities
//!
//! Field names follow the camelCase keys of the seed fixtures. The JS-style
//! `type` keys are mapped onto `category`, `kind` and `severity`.

use crate::hash::LedgerHash;
use crate::id::{NotificationId, ProductId, QrCode, TransactionId, UserId};
use crate::kind::{ProductStatus, QualityGrade, Role, Severity, TransactionKind, Verification};
use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A traceable batch of produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog-unique identifier
    pub id: ProductId,
    /// Display name
    pub name: String,
    /// Produce category (`Grains`, `Vegetables`, `Dairy`, ...)
    #[serde(rename = "type")]
    pub category: String,
    /// Owning farmer account
    pub farmer_id: UserId,
    /// Farmer display name
    pub farmer_name: String,
    /// Harvest day
    pub harvest_date: NaiveDate,
    /// Units available
    pub quantity: u64,
    /// Grade assigned at harvest
    pub quality: QualityGrade,
    /// Unit price in the display currency
    pub price: u64,
    /// Origin
    pub location: String,
    /// Free-text certification labels
    #[serde(default)]
    pub certifications: Vec<String>,
    /// Catalog-unique traceability code
    pub qr_code: QrCode,
    /// Lifecycle status
    pub status: ProductStatus,
    /// Ledger reference for the product record
    pub blockchain_hash: LedgerHash,
}

/// A ledger entry moving a product between parties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Ledger-unique identifier
    pub id: TransactionId,
    /// Product this entry concerns
    pub product_id: ProductId,
    /// Sending party
    pub from: String,
    /// Receiving party
    pub to: String,
    /// Time the entry was recorded
    pub timestamp: DateTime<Utc>,
    /// Entry kind
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Ledger reference
    pub hash: LedgerHash,
    /// Whether the entry is confirmed
    pub verified: bool,
    /// Monetary value, absent for non-monetary entries such as harvests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
}

impl Transaction {
    /// Verification state derived from the `verified` flag
    #[inline]
    #[must_use]
    pub fn verification(&self) -> Verification {
        Verification::from_flag(self.verified)
    }
}

/// An account holder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Account identifier
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Contact address
    pub email: String,
    /// Role that selects the visible views
    pub role: Role,
    /// Avatar image location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Home location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A message addressed to one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Notification identifier
    pub id: NotificationId,
    /// Recipient
    pub user_id: UserId,
    /// Headline
    pub title: String,
    /// Body text
    pub message: String,
    /// Severity
    #[serde(rename = "type")]
    pub severity: Severity,
    /// Whether the recipient has seen it
    pub read: bool,
    /// Creation time
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PRODUCT_JSON: &str = r#"{
        "id": "P002",
        "name": "Fresh Tomatoes",
        "type": "Vegetables",
        "farmerId": "1",
        "farmerName": "Rajesh Kumar",
        "harvestDate": "2024-01-20",
        "quantity": 200,
        "quality": "A",
        "price": 25,
        "location": "Punjab, India",
        "certifications": ["Pesticide-free", "Fresh"],
        "qrCode": "QR002",
        "status": "in-transit",
        "blockchainHash": "0x2b3c4d5e6f7890abcdef1234567890ab"
    }"#;

    #[test]
    fn product_reads_fixture_shape() {
        let product: Product = serde_json::from_str(PRODUCT_JSON).unwrap();
        assert_eq!(product.id, ProductId::new("P002"));
        assert_eq!(product.category, "Vegetables");
        assert_eq!(product.status, ProductStatus::InTransit);
        assert_eq!(product.harvest_date, NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
        assert_eq!(product.certifications, vec!["Pesticide-free", "Fresh"]);
    }

    #[test]
    fn product_rejects_negative_quantity() {
        let json = PRODUCT_JSON.replace("\"quantity\": 200", "\"quantity\": -1");
        assert!(serde_json::from_str::<Product>(&json).is_err());
    }

    #[test]
    fn transaction_amount_is_optional() {
        let json = r#"{
            "id": "T003",
            "productId": "P003",
            "from": "Farm",
            "to": "Rajesh Kumar (Farmer)",
            "timestamp": "2024-01-22T08:00:00Z",
            "type": "harvest",
            "hash": "0x3c4d5e6f7890abcdef1234567890abcd",
            "verified": false
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.amount, None);
        assert_eq!(tx.kind, TransactionKind::Harvest);
        assert_eq!(tx.verification(), Verification::Pending);

        let out = serde_json::to_value(&tx).unwrap();
        assert!(out.get("amount").is_none());
        assert_eq!(out["type"], "harvest");
    }
}
