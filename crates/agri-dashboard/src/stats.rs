//! Dashboard stat selection
//!
//! Stats are never computed here. Each role sees a fixed, ordered selection
//! of figures from the [`AnalyticsSnapshot`].

use crate::format::NumberFormat;
use agri_model::{AnalyticsSnapshot, CropCount, QualityGrade, Role};

/// Value of one stat panel, tagged with how it renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatValue {
    /// Plain count, digit-grouped
    Count(u64),
    /// Currency amount
    Currency(u64),
    /// Quality grade
    Grade(QualityGrade),
    /// Percentage
    Percent(u8),
}

impl StatValue {
    /// Render with `fmt`
    #[must_use]
    pub fn render(&self, fmt: &NumberFormat) -> String {
        match *self {
            Self::Count(n) => fmt.group(n),
            Self::Currency(n) => fmt.currency(n),
            Self::Grade(grade) => grade.to_string(),
            Self::Percent(p) => fmt.percent(p),
        }
    }
}

/// One labelled figure on a dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatPanel {
    /// Heading
    pub label: &'static str,
    /// Figure
    pub value: StatValue,
}

impl StatPanel {
    const fn new(label: &'static str, value: StatValue) -> Self {
        Self { label, value }
    }
}

/// Ordered stat panels for `role`
#[must_use]
pub fn stats_for_role(role: Role, snapshot: &AnalyticsSnapshot) -> Vec<StatPanel> {
    match role {
        Role::Farmer => {
            let farmer = &snapshot.farmer;
            vec![
                StatPanel::new("My Products", StatValue::Count(farmer.my_products)),
                StatPanel::new(
                    "This Month Revenue",
                    StatValue::Currency(snapshot.monthly_revenue / 100),
                ),
                StatPanel::new("Quality Score", StatValue::Grade(farmer.quality_score)),
                StatPanel::new("Active Orders", StatValue::Count(farmer.active_orders)),
            ]
        }
        Role::Retailer => vec![
            StatPanel::new("Total Inventory", StatValue::Count(snapshot.total_products)),
            StatPanel::new("Active Suppliers", StatValue::Count(snapshot.total_farmers)),
            StatPanel::new("Monthly Sales", StatValue::Currency(snapshot.monthly_revenue)),
            StatPanel::new("Transactions", StatValue::Count(snapshot.total_transactions)),
        ],
        Role::Consumer => {
            let consumer = &snapshot.consumer;
            vec![
                StatPanel::new("Products Scanned", StatValue::Count(consumer.products_scanned)),
                StatPanel::new("Trusted Farmers", StatValue::Count(consumer.trusted_farmers)),
                StatPanel::new(
                    "Savings This Month",
                    StatValue::Currency(consumer.monthly_savings),
                ),
                StatPanel::new(
                    "Quality Verified",
                    StatValue::Percent(consumer.quality_verified_pct),
                ),
            ]
        }
    }
}

/// Quality distribution rows, best grade first
#[must_use]
pub fn quality_rows(snapshot: &AnalyticsSnapshot) -> Vec<(QualityGrade, u8)> {
    snapshot
        .quality_distribution
        .iter()
        .map(|(grade, pct)| (*grade, *pct))
        .collect()
}

/// Popular crops in snapshot order
#[inline]
#[must_use]
pub fn popular_crops(snapshot: &AnalyticsSnapshot) -> &[CropCount] {
    &snapshot.popular_crops
}

#[cfg(test)]
mod tests {
    use super::*;
    use agri_test_utils::sample_analytics;
    use pretty_assertions::assert_eq;

    fn rendered(role: Role) -> Vec<(&'static str, String)> {
        let fmt = NumberFormat::new();
        stats_for_role(role, &sample_analytics())
            .into_iter()
            .map(|panel| (panel.label, panel.value.render(&fmt)))
            .collect()
    }

    #[test]
    fn farmer_panels() {
        assert_eq!(
            rendered(Role::Farmer),
            vec![
                ("My Products", "24".to_string()),
                ("This Month Revenue", "₹28,500".to_string()),
                ("Quality Score", "A+".to_string()),
                ("Active Orders", "8".to_string()),
            ]
        );
    }

    #[test]
    fn retailer_panels() {
        assert_eq!(
            rendered(Role::Retailer),
            vec![
                ("Total Inventory", "1,250".to_string()),
                ("Active Suppliers", "450".to_string()),
                ("Monthly Sales", "₹2,850,000".to_string()),
                ("Transactions", "3,400".to_string()),
            ]
        );
    }

    #[test]
    fn consumer_panels() {
        assert_eq!(
            rendered(Role::Consumer),
            vec![
                ("Products Scanned", "45".to_string()),
                ("Trusted Farmers", "12".to_string()),
                ("Savings This Month", "₹1,250".to_string()),
                ("Quality Verified", "98%".to_string()),
            ]
        );
    }

    #[test]
    fn quality_rows_are_grade_ordered() {
        let rows = quality_rows(&sample_analytics());
        assert_eq!(
            rows,
            vec![
                (QualityGrade::APlus, 45),
                (QualityGrade::A, 35),
                (QualityGrade::B, 15),
                (QualityGrade::C, 5),
            ]
        );
    }

    #[test]
    fn crops_keep_snapshot_order() {
        let snapshot = sample_analytics();
        let names: Vec<_> = popular_crops(&snapshot).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Rice", "Wheat", "Tomato", "Milk", "Potato"]);
    }
}
