//! Single-workload execution and timing.

use std::time::{Duration, Instant};

use crate::observer::ProgressObserver;
use crate::options::Options;
use crate::workload::{BenchError, BenchOutput, Workload};

/// Result of one benchmark invocation.
#[derive(Debug)]
pub struct BenchReport {
    /// Workload name.
    pub workload: String,
    /// Input value the workload ran with.
    pub value: u64,
    /// The computed output or the failure that aborted it.
    pub outcome: Result<BenchOutput, BenchError>,
    /// Wall-clock duration of the run.
    pub duration: Duration,
}

/// Run one workload to completion and capture its wall time.
pub fn execute_workload(
    workload: &dyn Workload,
    value: u64,
    opts: &Options,
    observer: &dyn ProgressObserver,
) -> BenchReport {
    tracing::debug!(workload = workload.name(), value, "starting workload");
    let start = Instant::now();
    let outcome = workload.run(observer, value, opts);
    let duration = start.elapsed();
    tracing::debug!(
        workload = workload.name(),
        ok = outcome.is_ok(),
        ?duration,
        "workload finished"
    );

    BenchReport {
        workload: workload.name().to_string(),
        value,
        outcome,
        duration,
    }
}
