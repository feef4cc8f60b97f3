use agri_model::{ProductStatus, Verification};
use agri_query::{filter, find_by_code, Constraint, CriteriaError, Lookup, ProductCriteria, TransactionCriteria};
use agri_test_utils::{sample_products, sample_transactions, ProductBuilder};
use pretty_assertions::assert_eq;

fn names(products: &[&agri_model::Product]) -> Vec<String> {
    products.iter().map(|p| p.name.clone()).collect()
}

#[test]
fn tomato_search_over_two_products() {
    let products = vec![
        ProductBuilder::new("P001", "Organic Basmati Rice")
            .farmer("1", "Rajesh Kumar")
            .build(),
        ProductBuilder::new("P002", "Fresh Tomatoes")
            .farmer("1", "Rajesh Kumar")
            .build(),
    ];

    let criteria = ProductCriteria::new().search("tomato");
    assert_eq!(names(&filter(&products, &criteria)), vec!["Fresh Tomatoes"]);
}

#[test]
fn dairy_category_over_demo_catalog() {
    let products = sample_products();
    let criteria = ProductCriteria::new().constraint("type", "Dairy").unwrap();

    let result = filter(&products, &criteria);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Organic Milk");
}

#[test]
fn category_match_is_exact() {
    let products = sample_products();
    let criteria = ProductCriteria::new().constraint("type", "dairy").unwrap();
    assert!(filter(&products, &criteria).is_empty());
}

#[test]
fn upper_and_lower_case_queries_agree() {
    let products = sample_products();
    let upper = filter(&products, &ProductCriteria::new().search("TOMATO"));
    let lower = filter(&products, &ProductCriteria::new().search("tomato"));
    assert_eq!(upper, lower);
    assert_eq!(names(&upper), vec!["Fresh Tomatoes"]);
}

#[test]
fn code_lookup_scenarios() {
    let products = sample_products();

    match find_by_code(&products, "QR002") {
        Lookup::Found(product) => assert_eq!(product.name, "Fresh Tomatoes"),
        other => panic!("expected tomatoes, got {other:?}"),
    }

    assert_eq!(find_by_code(&products, "QR999"), Lookup::NotFound { key: "QR999" });
}

#[test]
fn search_and_status_combine() {
    let products = sample_products();
    let criteria = ProductCriteria::new()
        .search("organic")
        .status(Constraint::Exactly(ProductStatus::Harvested));
    assert_eq!(names(&filter(&products, &criteria)), vec!["Organic Milk"]);
}

#[test]
fn ledger_search_on_counterparty() {
    let transactions = sample_transactions();
    let criteria = TransactionCriteria::new().search("transport");
    let ids: Vec<&str> = filter(&transactions, &criteria)
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, vec!["T002"]);
}

#[test]
fn ledger_pending_filter_on_demo_is_empty() {
    let transactions = sample_transactions();
    let criteria = TransactionCriteria::new().verification(Constraint::Exactly(Verification::Pending));
    assert!(filter(&transactions, &criteria).is_empty());
}

#[test]
fn product_journey_facet() {
    let transactions = sample_transactions();
    let id = agri_model::ProductId::new("P001");
    let criteria = TransactionCriteria::new().product(&id);
    let journey = filter(&transactions, &criteria);
    assert_eq!(journey.len(), 1);
    assert_eq!(journey[0].to, "Green Valley Retail");
}

#[test]
fn malformed_criteria_rejected_before_filtering() {
    let err = ProductCriteria::new().constraint("status", "shipped").unwrap_err();
    assert!(matches!(err, CriteriaError::InvalidValue { .. }));
    assert!(err.to_string().contains("status"));

    let err = TransactionCriteria::new().constraint("hash", "0x").unwrap_err();
    assert!(matches!(err, CriteriaError::UnknownField { record: "transaction", .. }));
}
