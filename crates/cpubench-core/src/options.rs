//! Workload options and configuration.

/// Options for a benchmark run.
#[derive(Debug, Clone)]
pub struct Options {
    /// Worker count for the parallel prime workload (0 = one per host
    /// execution unit).
    pub workers: usize,
    /// Whether to show verbose output.
    pub verbose: bool,
    /// Whether to show detailed output.
    pub details: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            workers: 0,
            verbose: false,
            details: false,
        }
    }
}

impl Options {
    /// Normalize options, resolving automatic values.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.workers == 0 {
            self.workers = available_parallelism();
        }
        self
    }
}

/// Number of execution units available to this process.
#[must_use]
pub fn available_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZero::get)
        .unwrap_or(1)
}
