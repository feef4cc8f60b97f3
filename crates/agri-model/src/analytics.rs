//! Precomputed analytics snapshot
//!
//! The dashboard never computes these figures; it only selects which ones to
//! show for a role. Per-role figures default to the demo values when a seed
//! fixture omits them.

use crate::kind::QualityGrade;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate figures for the whole network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    /// Products registered
    pub total_products: u64,
    /// Ledger entries recorded
    pub total_transactions: u64,
    /// Farmers onboarded
    pub total_farmers: u64,
    /// Retailers onboarded
    pub total_retailers: u64,
    /// Revenue for the current month, in the display currency
    pub monthly_revenue: u64,
    /// Share of produce per grade, in percent
    #[serde(default)]
    pub quality_distribution: BTreeMap<QualityGrade, u8>,
    /// Most traded crops, most popular first
    #[serde(default)]
    pub popular_crops: Vec<CropCount>,
    /// Figures shown on the farmer dashboard
    #[serde(default)]
    pub farmer: FarmerFigures,
    /// Figures shown on the consumer dashboard
    #[serde(default)]
    pub consumer: ConsumerFigures,
}

/// One row of the popular-crops chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CropCount {
    /// Crop name
    pub name: String,
    /// Batches traded
    pub count: u64,
}

/// Farmer dashboard figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FarmerFigures {
    /// Products the farmer has registered
    pub my_products: u64,
    /// Typical grade of the farmer's produce
    pub quality_score: QualityGrade,
    /// Orders not yet delivered
    pub active_orders: u64,
}

impl Default for FarmerFigures {
    fn default() -> Self {
        Self {
            my_products: 24,
            quality_score: QualityGrade::APlus,
            active_orders: 8,
        }
    }
}

/// Consumer dashboard figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerFigures {
    /// Codes the consumer has looked up
    pub products_scanned: u64,
    /// Farmers the consumer buys from repeatedly
    pub trusted_farmers: u64,
    /// Savings this month, in the display currency
    pub monthly_savings: u64,
    /// Share of purchases with verified origin, in percent
    pub quality_verified_pct: u8,
}

impl Default for ConsumerFigures {
    fn default() -> Self {
        Self {
            products_scanned: 45,
            trusted_farmers: 12,
            monthly_savings: 1250,
            quality_verified_pct: 98,
        }
    }
}
