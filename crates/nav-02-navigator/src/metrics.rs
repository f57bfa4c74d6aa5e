//! Metrics for navigation intents
//!
//! Relaxed atomic counters; cheap enough to leave enabled in production.
//!
//! ## Usage
//!
//! ```ignore
//! use nav_02_navigator::metrics::NavigationMetrics;
//! use std::sync::Arc;
//!
//! let metrics = Arc::new(NavigationMetrics::new());
//! let navigator = NavigatorImpl::new(stack, |_| {})?.with_metrics(metrics.clone());
//!
//! let snapshot = metrics.snapshot();
//! println!("pushes: {}", snapshot.pushes);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics collector for navigation intents
#[derive(Debug, Default)]
pub struct NavigationMetrics {
    /// Successful pushes
    pub pushes: AtomicU64,
    /// Pushes rejected as duplicates of the current screen
    pub duplicate_pushes: AtomicU64,
    /// Records popped
    pub pops: AtomicU64,
    /// Pops that reached the root escape hatch
    pub root_pops: AtomicU64,
    /// Cursor moves toward the top
    pub forward_moves: AtomicU64,
    /// Cursor moves toward the root
    pub backward_moves: AtomicU64,
    /// Root resets
    pub resets: AtomicU64,
    /// Resets that brought back a saved snapshot
    pub restored_snapshots: AtomicU64,
    /// Intents fully handled by an interceptor
    pub intercepted: AtomicU64,
    /// Interceptor failures (consumed or not)
    pub interceptor_failures: AtomicU64,
    /// Interceptor rewrites
    pub rewrites: AtomicU64,
}

impl NavigationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_push(&self, accepted: bool) {
        if accepted {
            self.pushes.fetch_add(1, Ordering::Relaxed);
        } else {
            self.duplicate_pushes.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_pop(&self) {
        self.pops.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_root_pop(&self) {
        self.root_pops.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_forward(&self) {
        self.forward_moves.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_backward(&self) {
        self.backward_moves.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a root reset
    ///
    /// # Arguments
    /// * `restored` - Whether a saved snapshot replaced the live stack
    pub fn record_reset(&self, restored: bool) {
        self.resets.fetch_add(1, Ordering::Relaxed);
        if restored {
            self.restored_snapshots.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_intercepted(&self) {
        self.intercepted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_interceptor_failure(&self) {
        self.interceptor_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rewrite(&self) {
        self.rewrites.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            pushes: self.pushes.load(Ordering::Relaxed),
            duplicate_pushes: self.duplicate_pushes.load(Ordering::Relaxed),
            pops: self.pops.load(Ordering::Relaxed),
            root_pops: self.root_pops.load(Ordering::Relaxed),
            forward_moves: self.forward_moves.load(Ordering::Relaxed),
            backward_moves: self.backward_moves.load(Ordering::Relaxed),
            resets: self.resets.load(Ordering::Relaxed),
            restored_snapshots: self.restored_snapshots.load(Ordering::Relaxed),
            intercepted: self.intercepted.load(Ordering::Relaxed),
            interceptor_failures: self.interceptor_failures.load(Ordering::Relaxed),
            rewrites: self.rewrites.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.pushes.store(0, Ordering::Relaxed);
        self.duplicate_pushes.store(0, Ordering::Relaxed);
        self.pops.store(0, Ordering::Relaxed);
        self.root_pops.store(0, Ordering::Relaxed);
        self.forward_moves.store(0, Ordering::Relaxed);
        self.backward_moves.store(0, Ordering::Relaxed);
        self.resets.store(0, Ordering::Relaxed);
        self.restored_snapshots.store(0, Ordering::Relaxed);
        self.intercepted.store(0, Ordering::Relaxed);
        self.interceptor_failures.store(0, Ordering::Relaxed);
        self.rewrites.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub pushes: u64,
    pub duplicate_pushes: u64,
    pub pops: u64,
    pub root_pops: u64,
    pub forward_moves: u64,
    pub backward_moves: u64,
    pub resets: u64,
    pub restored_snapshots: u64,
    pub intercepted: u64,
    pub interceptor_failures: u64,
    pub rewrites: u64,
}

/// Trait for custom metrics recording implementations
///
/// Implement this trait to forward navigation counters to an external
/// metrics system.
pub trait MetricsRecorder: Send + Sync {
    fn record_push(&self, accepted: bool);
    fn record_pop(&self);
    fn record_root_pop(&self);
    fn record_forward(&self);
    fn record_backward(&self);
    fn record_reset(&self, restored: bool);
    fn record_intercepted(&self);
    fn record_interceptor_failure(&self);
    fn record_rewrite(&self);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Debug, Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_push(&self, _: bool) {}
    fn record_pop(&self) {}
    fn record_root_pop(&self) {}
    fn record_forward(&self) {}
    fn record_backward(&self) {}
    fn record_reset(&self, _: bool) {}
    fn record_intercepted(&self) {}
    fn record_interceptor_failure(&self) {}
    fn record_rewrite(&self) {}
}

impl MetricsRecorder for NavigationMetrics {
    fn record_push(&self, accepted: bool) {
        NavigationMetrics::record_push(self, accepted);
    }

    fn record_pop(&self) {
        NavigationMetrics::record_pop(self);
    }

    fn record_root_pop(&self) {
        NavigationMetrics::record_root_pop(self);
    }

    fn record_forward(&self) {
        NavigationMetrics::record_forward(self);
    }

    fn record_backward(&self) {
        NavigationMetrics::record_backward(self);
    }

    fn record_reset(&self, restored: bool) {
        NavigationMetrics::record_reset(self, restored);
    }

    fn record_intercepted(&self) {
        NavigationMetrics::record_intercepted(self);
    }

    fn record_interceptor_failure(&self) {
        NavigationMetrics::record_interceptor_failure(self);
    }

    fn record_rewrite(&self) {
        NavigationMetrics::record_rewrite(self);
    }
}
