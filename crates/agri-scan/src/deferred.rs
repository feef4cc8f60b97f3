//! Cancellable deferred completion

use crate::error::ScanError;
use crate::scheduler::Scheduler;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// A value produced by `f` once a delay has elapsed
///
/// The work runs on a spawned tokio task. Dropping the handle does not stop
/// it; call [`Deferred::cancel`] for that.
#[derive(Debug)]
pub struct Deferred<T> {
    handle: JoinHandle<T>,
    delay: Duration,
}

impl<T: Send + 'static> Deferred<T> {
    /// Run `f` after `delay`, as measured by `scheduler`
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(scheduler: Arc<dyn Scheduler>, delay: Duration, f: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            scheduler.sleep(delay).await;
            f()
        });
        Self { handle, delay }
    }

    /// Delay this completion was scheduled with
    #[inline]
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether the work has finished or been cancelled
    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stop the work if it has not run yet
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Wait for the value
    ///
    /// # Errors
    /// Returns [`ScanError::Cancelled`] if the work was cancelled, or
    /// [`ScanError::Task`] if it panicked
    pub async fn wait(self) -> Result<T, ScanError> {
        self.handle.await.map_err(|e| {
            if e.is_cancelled() {
                ScanError::Cancelled
            } else {
                ScanError::Task(e.to_string())
            }
        })
    }
}
