//! Concrete observer implementations.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info};

use crate::constants::PROGRESS_REPORT_THRESHOLD;
use crate::observer::{ProgressObserver, ProgressUpdate};

/// Null object pattern — does nothing with progress updates.
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer that discards all progress updates.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for NoOpObserver {
    fn on_progress(&self, _update: &ProgressUpdate) {
        // Intentionally empty
    }
}

/// Observer that logs progress updates with temporal throttling.
pub struct LoggingObserver {
    last_reported: AtomicU64,
    min_interval_ms: u64,
    last_time: AtomicU64,
}

impl LoggingObserver {
    /// Create a new logging observer with the given minimum interval.
    #[must_use]
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            last_reported: AtomicU64::new(0),
            min_interval_ms,
            last_time: AtomicU64::new(0),
        }
    }
}

impl ProgressObserver for LoggingObserver {
    #[allow(clippy::cast_possible_truncation)]
    fn on_progress(&self, update: &ProgressUpdate) {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;

        let last_time = self.last_time.load(Ordering::Relaxed);
        if now - last_time < self.min_interval_ms && !update.done {
            return;
        }

        let last = f64::from_bits(self.last_reported.load(Ordering::Relaxed));
        if update.done || (update.progress - last) >= PROGRESS_REPORT_THRESHOLD {
            if update.done {
                info!(workload = %update.workload, "computation complete");
            } else {
                debug!(
                    workload = %update.workload,
                    progress = format!("{:.1}%", update.progress * 100.0),
                    step = update.current_step,
                    total = update.total_steps,
                    "progress update"
                );
            }
            self.last_reported
                .store(update.progress.to_bits(), Ordering::Relaxed);
            self.last_time.store(now, Ordering::Relaxed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_observer_does_nothing() {
        let observer = NoOpObserver::new();
        observer.on_progress(&ProgressUpdate::new("test", 0.5, 1, 2));
    }

    #[test]
    fn noop_observer_default() {
        let observer = NoOpObserver::default();
        observer.on_progress(&ProgressUpdate::done("test"));
    }

    #[test]
    fn logging_observer_throttles_without_panicking() {
        let observer = LoggingObserver::new(0);
        observer.on_progress(&ProgressUpdate::new("test", 0.015, 1, 100));
        // Delta below threshold — silently dropped
        observer.on_progress(&ProgressUpdate::new("test", 0.016, 2, 100));
        // Done bypasses both throttles
        observer.on_progress(&ProgressUpdate::done("test"));
    }

    #[test]
    fn logging_observer_temporal_throttle() {
        let observer = LoggingObserver::new(60_000);
        observer.on_progress(&ProgressUpdate::new("test", 0.05, 5, 100));
        // Within the interval — dropped even though the delta is large
        observer.on_progress(&ProgressUpdate::new("test", 0.5, 50, 100));
    }
}
