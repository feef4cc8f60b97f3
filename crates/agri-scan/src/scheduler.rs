//! Delay source for deferred completions
//!
//! Production code waits on the tokio timer. Tests swap in
//! [`ImmediateScheduler`], which returns at once and records what was asked.

use parking_lot::Mutex;
use std::time::Duration;

/// Something that can wait for a delay
#[async_trait::async_trait]
pub trait Scheduler: Send + Sync {
    /// Resolve after `delay`
    async fn sleep(&self, delay: Duration);
}

/// Real timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

#[async_trait::async_trait]
impl Scheduler for TokioScheduler {
    async fn sleep(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

/// Zero-delay scheduler that records requested delays
#[derive(Debug, Default)]
pub struct ImmediateScheduler {
    requested: Mutex<Vec<Duration>>,
}

impl ImmediateScheduler {
    /// New scheduler with an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays requested so far, in order
    #[must_use]
    pub fn requested(&self) -> Vec<Duration> {
        self.requested.lock().clone()
    }
}

#[async_trait::async_trait]
impl Scheduler for ImmediateScheduler {
    async fn sleep(&self, delay: Duration) {
        self.requested.lock().push(delay);
        tokio::task::yield_now().await;
    }
}
