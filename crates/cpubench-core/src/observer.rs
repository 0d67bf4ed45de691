//! Progress reporting types.

/// Progress update sent from a running workload to observers.
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    /// Name of the workload producing this update.
    pub workload: &'static str,
    /// Current progress as a fraction in [0.0, 1.0].
    pub progress: f64,
    /// Current iteration/step number.
    pub current_step: u64,
    /// Total number of steps.
    pub total_steps: u64,
    /// Whether this is the final update.
    pub done: bool,
}

impl ProgressUpdate {
    /// Create a new progress update.
    #[must_use]
    pub fn new(workload: &'static str, progress: f64, current: u64, total: u64) -> Self {
        Self {
            workload,
            progress,
            current_step: current,
            total_steps: total,
            done: false,
        }
    }

    /// Create a completion update.
    #[must_use]
    pub fn done(workload: &'static str) -> Self {
        Self {
            workload,
            progress: 1.0,
            current_step: 0,
            total_steps: 0,
            done: true,
        }
    }
}

/// Observer trait for receiving progress updates.
///
/// Workloads report every step; observers are expected to throttle.
pub trait ProgressObserver: Send + Sync {
    /// Receive a progress update.
    fn on_progress(&self, update: &ProgressUpdate);
}
