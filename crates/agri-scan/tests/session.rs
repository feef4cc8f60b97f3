use agri_model::Product;
use agri_scan::{FixedSelector, ImmediateScheduler, RandomSelector, ScanError, ScanSession, TokioScheduler};
use agri_test_utils::sample_products;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;

fn catalog() -> Arc<[Product]> {
    sample_products().into()
}

#[tokio::test]
async fn immediate_fixed_scan_is_deterministic() {
    let scheduler = Arc::new(ImmediateScheduler::new());
    let session = ScanSession::new()
        .with_scheduler(scheduler.clone())
        .with_selector(FixedSelector(1));

    let product = session.start(catalog()).unwrap().wait().await.unwrap();
    assert_eq!(product.qr_code.as_str(), "QR002");
    assert_eq!(scheduler.requested(), vec![Duration::from_millis(2000)]);
    assert!(!session.is_scanning());
}

#[tokio::test(start_paused = true)]
async fn second_scan_rejected_while_in_flight() {
    let session = ScanSession::new()
        .with_scheduler(Arc::new(TokioScheduler))
        .with_selector(FixedSelector(0));

    let first = session.start(catalog()).unwrap();
    assert!(session.is_scanning());
    assert_eq!(session.start(catalog()).unwrap_err(), ScanError::AlreadyScanning);

    let product = first.wait().await.unwrap();
    assert_eq!(product.name, "Organic Basmati Rice");
    assert!(!session.is_scanning());

    assert!(session.start(catalog()).is_ok());
}

#[tokio::test(start_paused = true)]
async fn cancelled_scan_resolves_cancelled_and_frees_slot() {
    let session = ScanSession::new().with_selector(FixedSelector(0));

    let scan = session.start(catalog()).unwrap();
    scan.cancel();
    assert_eq!(scan.wait().await.unwrap_err(), ScanError::Cancelled);
    assert!(!session.is_scanning());

    let retry = session.start(catalog()).unwrap();
    assert!(retry.wait().await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn scan_waits_for_configured_delay() {
    let session = ScanSession::new()
        .with_delay(Duration::from_millis(500))
        .with_selector(RandomSelector::seeded(42));

    let start = tokio::time::Instant::now();
    let product = session.start(catalog()).unwrap().wait().await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(500));
    assert!(catalog().iter().any(|p| p.id == product.id));
}
