use agri_core::{render, AgriChain, AgriConfig, AgriError, ConfigError};
use agri_dashboard::Grouping;
use agri_model::Role;
use agri_query::{Lookup, ProductCriteria, TransactionCriteria};
use agri_scan::{FixedSelector, ImmediateScheduler, ScanError};
use agri_seed::SeedError;
use pretty_assertions::assert_eq;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

fn temp_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn config_file_selects_seed_and_display() {
    let demo = AgriChain::demo().unwrap().catalog().clone().into_inner();
    let seed = temp_file(".yaml", &serde_yaml::to_string(&demo).unwrap());
    let config_text = format!(
        "seed_path = {:?}\n[display]\ngrouping = \"lakh\"\n",
        seed.path().display().to_string()
    );
    let config_file = temp_file(".toml", &config_text);

    let config = AgriConfig::load(config_file.path()).unwrap();
    assert_eq!(config.display.grouping, Grouping::Lakh);

    let chain = AgriChain::from_config(&config).unwrap();
    let panels = chain.dashboard(Role::Retailer);
    assert_eq!(panels[2].value.render(chain.numbers()), "₹28,50,000");
}

#[test]
fn missing_seed_file_surfaces_seed_error() {
    let config = AgriConfig::default().with_seed_path("/nonexistent/agri-seed.json");
    let err = AgriChain::from_config(&config).unwrap_err();
    assert!(matches!(err, AgriError::Seed(SeedError::Io { .. })));
}

#[test]
fn invalid_date_pattern_is_config_error() {
    let config = AgriConfig::from_toml_str("[display]\ndate_format = \"%Q\"\n").unwrap();
    let err = AgriChain::from_config(&config).unwrap_err();
    assert!(matches!(err, AgriError::Config(ConfigError::Display(_))));
}

#[test]
fn time_only_date_pattern_is_config_error() {
    let config = AgriConfig::from_toml_str("[display]\ndate_format = \"%H:%M\"\n").unwrap();
    let err = AgriChain::from_config(&config).unwrap_err();
    assert!(matches!(err, AgriError::Config(ConfigError::Display(_))));
}

#[test]
fn criteria_errors_convert() {
    let err: AgriError = ProductCriteria::new()
        .constraint("quality", "Z")
        .unwrap_err()
        .into();
    assert!(err.to_string().starts_with("invalid criteria"));
}

#[test]
fn lookup_through_facade() {
    let chain = AgriChain::demo().unwrap();
    assert!(matches!(chain.lookup("QR001"), Lookup::Found(p) if p.name == "Organic Basmati Rice"));
    assert!(matches!(chain.lookup("QR999"), Lookup::NotFound { key: "QR999" }));
}

#[test]
fn pending_filter_keeps_whole_ledger_totals() {
    let chain = AgriChain::demo().unwrap();
    let criteria = TransactionCriteria::new().constraint("status", "pending").unwrap();
    let rows = chain.transactions(&criteria);
    assert!(rows.is_empty());

    let text = render::ledger(&chain, &chain.ledger_summary(), &rows).unwrap();
    assert!(text.contains("Total Transactions: 3  Verified: 3  Pending: 0  Total Value: ₹47,500"));
    assert!(text.contains("No transactions found"));
    assert!(text.contains(render::EMPTY_HINT));
}

#[test]
fn farmer_dashboard_text() {
    let chain = AgriChain::demo().unwrap();
    let text = render::dashboard(&chain, Role::Farmer, &chain.dashboard(Role::Farmer)).unwrap();
    assert!(text.starts_with("Welcome back, Rajesh Kumar (Farmer)\nUnread notifications: 2\n"));
    assert!(text.contains("This Month Revenue: ₹28,500"));
    assert!(!text.contains("Popular Crops"));
}

#[test]
fn retailer_dashboard_includes_analytics() {
    let chain = AgriChain::demo().unwrap();
    let text = render::dashboard(&chain, Role::Retailer, &chain.dashboard(Role::Retailer)).unwrap();
    assert!(text.contains("Monthly Sales: ₹2,850,000"));
    assert!(text.contains("  A+: 45%"));
    assert!(text.contains("  Rice: 180"));
}

#[test]
fn consumer_navigation_text() {
    let chain = AgriChain::demo().unwrap();
    assert_eq!(
        render::navigation(chain.navigation(Role::Consumer)).unwrap(),
        "Dashboard  (dashboard)\nProducts  (products)\nQR Scanner  (scanner)\nBlockchain Ledger  (blockchain)\n"
    );
}

#[tokio::test]
async fn scan_through_facade() {
    let chain = AgriChain::demo().unwrap();
    let scheduler = Arc::new(ImmediateScheduler::new());
    let session = chain
        .scan_session()
        .with_scheduler(scheduler.clone())
        .with_selector(FixedSelector(2));

    let product = session.start(chain.scan_candidates()).unwrap().wait().await.unwrap();
    assert_eq!(product.qr_code.as_str(), "QR003");
    assert_eq!(scheduler.requested(), vec![Duration::from_millis(2000)]);
    assert!(render::scanned(&chain, &product).starts_with("Scanned QR003: Organic Milk"));
}

#[tokio::test(start_paused = true)]
async fn cancelled_scan_through_facade() {
    let chain = AgriChain::demo().unwrap();
    let session = chain.scan_session();
    let scan = session.start(chain.scan_candidates()).unwrap();
    scan.cancel();
    assert_eq!(scan.wait().await.unwrap_err(), ScanError::Cancelled);
}
