//! Scan session
//!
//! A scan waits for the configured delay, then picks one product through the
//! session's [`Selector`]. At most one scan runs per session; the slot is
//! released when the scan completes or is cancelled.

use crate::deferred::Deferred;
use crate::error::ScanError;
use crate::scheduler::{Scheduler, TokioScheduler};
use crate::selector::{RandomSelector, Selector};
use agri_model::Product;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Delay before a simulated scan resolves
pub const DEFAULT_SCAN_DELAY: Duration = Duration::from_millis(2000);

/// Owns the scheduler, selector and in-flight slot for scans
pub struct ScanSession {
    scheduler: Arc<dyn Scheduler>,
    selector: Arc<Mutex<Box<dyn Selector>>>,
    delay: Duration,
    in_flight: Arc<AtomicBool>,
}

impl ScanSession {
    /// Session with the real timer, OS-seeded selection and the default delay
    #[must_use]
    pub fn new() -> Self {
        Self {
            scheduler: Arc::new(TokioScheduler),
            selector: Arc::new(Mutex::new(Box::new(RandomSelector::from_os()))),
            delay: DEFAULT_SCAN_DELAY,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Replace the scheduler
    #[inline]
    #[must_use]
    pub fn with_scheduler(mut self, scheduler: Arc<dyn Scheduler>) -> Self {
        self.scheduler = scheduler;
        self
    }

    /// Replace the selector
    #[inline]
    #[must_use]
    pub fn with_selector(mut self, selector: impl Selector + 'static) -> Self {
        self.selector = Arc::new(Mutex::new(Box::new(selector)));
        self
    }

    /// Replace the delay
    #[inline]
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Configured delay
    #[inline]
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether a scan is running
    #[must_use]
    pub fn is_scanning(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Start a scan over `products`
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    /// Returns [`ScanError::EmptyCatalog`] if there is nothing to pick, or
    /// [`ScanError::AlreadyScanning`] if a scan is still running
    pub fn start(&self, products: Arc<[Product]>) -> Result<Deferred<Product>, ScanError> {
        if products.is_empty() {
            return Err(ScanError::EmptyCatalog);
        }
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ScanError::AlreadyScanning);
        }

        let slot = InFlight(Arc::clone(&self.in_flight));
        let selector = Arc::clone(&self.selector);
        tracing::info!(delay = ?self.delay, candidates = products.len(), "Scan started");

        Ok(Deferred::schedule(
            Arc::clone(&self.scheduler),
            self.delay,
            move || {
                let _slot = slot;
                let index = selector.lock().select(products.len()) % products.len();
                let product = products[index].clone();
                tracing::info!(product = %product.id, code = %product.qr_code, "Scan completed");
                product
            },
        ))
    }
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ScanSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanSession")
            .field("delay", &self.delay)
            .field("scanning", &self.is_scanning())
            .finish_non_exhaustive()
    }
}

/// Releases the in-flight slot when dropped
struct InFlight(Arc<AtomicBool>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ImmediateScheduler;
    use crate::selector::MockSelector;
    use agri_test_utils::sample_products;
    use mockall::predicate::eq;

    fn catalog() -> Arc<[Product]> {
        sample_products().into()
    }

    #[tokio::test]
    async fn selector_sees_catalog_length() {
        let mut selector = MockSelector::new();
        selector.expect_select().with(eq(3)).times(1).return_const(2usize);

        let session = ScanSession::new()
            .with_scheduler(Arc::new(ImmediateScheduler::new()))
            .with_selector(selector);

        let product = session.start(catalog()).unwrap().wait().await.unwrap();
        assert_eq!(product.name, "Organic Milk");
    }

    #[tokio::test]
    async fn empty_catalog_rejected() {
        let session = ScanSession::new().with_scheduler(Arc::new(ImmediateScheduler::new()));
        let empty: Arc<[Product]> = Vec::new().into();
        assert_eq!(session.start(empty).unwrap_err(), ScanError::EmptyCatalog);
        assert!(!session.is_scanning());
    }

    #[test]
    fn default_delay() {
        assert_eq!(ScanSession::default().delay(), Duration::from_millis(2000));
    }
}
