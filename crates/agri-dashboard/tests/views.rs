use agri_dashboard::{
    navigation, product_journey, profile, stats_for_role, DateFormat, Grouping, LedgerSummary,
    NumberFormat, Section, StatValue,
};
use agri_model::Role;
use agri_test_utils::{sample_analytics, sample_products, sample_transactions};
use proptest::prelude::*;

#[test]
fn every_role_sees_dashboard_first_and_ledger() {
    for role in Role::ALL {
        let nav = navigation(role);
        assert_eq!(nav[0].section, Section::Dashboard);
        assert!(nav.iter().any(|item| item.section == Section::Ledger));
        assert_eq!(stats_for_role(role, &sample_analytics()).len(), 4);
    }
}

#[test]
fn product_nav_label_follows_role() {
    let product_label = |role| {
        navigation(role)
            .iter()
            .find(|item| item.section == Section::Products)
            .map(|item| item.label)
    };
    assert_eq!(product_label(Role::Farmer), Some("My Products"));
    assert_eq!(product_label(Role::Retailer), Some("Inventory"));
    assert_eq!(product_label(Role::Consumer), Some("Products"));
    assert_eq!(profile(Role::Farmer).display_name, "Farmer");
}

#[test]
fn lakh_grouping_on_retailer_sales() {
    let fmt = NumberFormat::new().with_grouping(Grouping::Lakh);
    let sales = stats_for_role(Role::Retailer, &sample_analytics())
        .into_iter()
        .find(|panel| panel.label == "Monthly Sales")
        .unwrap();
    assert_eq!(sales.value, StatValue::Currency(2_850_000));
    assert_eq!(sales.value.render(&fmt), "₹28,50,000");
}

#[test]
fn journey_rows_render_with_default_formats() {
    let products = sample_products();
    let transactions = sample_transactions();
    let fmt = DateFormat::default();

    let rows: Vec<String> = product_journey(&transactions, &products[1])
        .into_iter()
        .map(|tx| format!("{} -> {} @ {}", tx.from, tx.to, fmt.timestamp(tx.timestamp)))
        .collect();
    assert_eq!(
        rows,
        vec!["Rajesh Kumar (Farmer) -> Transport Co. @ 1/21/2024, 2:15:00 PM".to_string()]
    );

    let summary = LedgerSummary::from_transactions(&transactions);
    assert_eq!(NumberFormat::new().currency(summary.total_value), "₹47,500");
}

proptest! {
    #[test]
    fn prop_grouping_preserves_digits(value in any::<u64>(), lakh in any::<bool>()) {
        let grouping = if lakh { Grouping::Lakh } else { Grouping::Thousands };
        let rendered = NumberFormat::new().with_grouping(grouping).group(value);
        prop_assert_eq!(rendered.replace(',', ""), value.to_string());
    }

    #[test]
    fn prop_group_widths(value in any::<u64>(), lakh in any::<bool>()) {
        let (grouping, width) = if lakh { (Grouping::Lakh, 2) } else { (Grouping::Thousands, 3) };
        let rendered = NumberFormat::new().with_grouping(grouping).group(value);
        let groups: Vec<&str> = rendered.split(',').collect();
        let last = groups.len() - 1;
        for (i, group) in groups.iter().enumerate() {
            if i == last && last > 0 {
                prop_assert_eq!(group.len(), 3);
            } else if i == 0 {
                prop_assert!(!group.is_empty() && group.len() <= width.max(3));
            } else {
                prop_assert_eq!(group.len(), width);
            }
        }
    }
}
