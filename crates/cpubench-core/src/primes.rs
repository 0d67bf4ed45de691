//! Parallel trial-division prime counter.
//!
//! Every candidate in [2, max] is tested by dividing against every smaller
//! integer down from 2 — deliberately O(max²). This workload exists to
//! saturate cores with simple integer arithmetic; replacing the test with a
//! sieve or an early square-root cutoff would change what is being measured.
//!
//! The range is statically partitioned into contiguous chunks, one per
//! worker. Each worker keeps a strictly local count; the pool join is the
//! only synchronization point, and the final total is the sum of the local
//! counts. Summation is associative and commutative, so the total is
//! independent of the worker count and partition boundaries.

use rayon::iter::{IntoParallelIterator, ParallelIterator};
use rayon::ThreadPoolBuilder;

use crate::observer::{ProgressObserver, ProgressUpdate};
use crate::options::Options;
use crate::workload::{BenchError, BenchOutput, Workload};

const WORKLOAD_NAME: &str = "TrialDivision";

/// Trial-division primality test.
fn is_prime(x: u64) -> bool {
    if x < 2 {
        return false;
    }
    for y in 2..x {
        if x % y == 0 {
            return false;
        }
    }
    true
}

/// Count primes in the inclusive sub-range assigned to one worker.
#[allow(clippy::cast_possible_truncation)]
fn count_in_range(lo: u64, hi: u64) -> u64 {
    (lo..=hi).filter(|&x| is_prime(x)).count() as u64
}

/// Split the candidates [2, max] into at most `workers` contiguous
/// sub-ranges of near-equal length. Empty when max < 2.
#[must_use]
pub fn partition_range(max: u64, workers: u64) -> Vec<(u64, u64)> {
    if max < 2 || workers == 0 {
        return Vec::new();
    }
    let span = max - 1;
    let workers = workers.min(span);
    let base = span / workers;
    let extra = span % workers;

    let mut ranges = Vec::with_capacity(usize::try_from(workers).unwrap_or(0));
    let mut lo = 2u64;
    for w in 0..workers {
        let len = base + u64::from(w < extra);
        let hi = lo + (len - 1);
        ranges.push((lo, hi));
        lo = hi.saturating_add(1);
    }
    ranges
}

/// Count primes below or equal to `max` on the current rayon pool.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn count_primes(max: u64) -> u64 {
    partition_range(max, rayon::current_num_threads() as u64)
        .into_par_iter()
        .map(|(lo, hi)| count_in_range(lo, hi))
        .sum()
}

/// Count primes on a dedicated pool of exactly `workers` threads.
///
/// The returned total is identical for any worker count; only the wall time
/// changes.
pub fn count_primes_with(max: u64, workers: usize) -> Result<u64, BenchError> {
    let workers = workers.max(1);
    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| BenchError::ResourceExhaustion(format!("failed to build worker pool: {e}")))?;

    let ranges = partition_range(max, workers as u64);
    Ok(pool.install(|| {
        ranges
            .into_par_iter()
            .map(|(lo, hi)| count_in_range(lo, hi))
            .sum()
    }))
}

/// Prime-counting workload over a fixed-size worker pool.
pub struct TrialDivision;

impl TrialDivision {
    /// Create a new prime-counting workload.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for TrialDivision {
    fn default() -> Self {
        Self::new()
    }
}

impl Workload for TrialDivision {
    fn run(
        &self,
        observer: &dyn ProgressObserver,
        value: u64,
        opts: &Options,
    ) -> Result<BenchOutput, BenchError> {
        tracing::debug!(max = value, workers = opts.workers, "counting primes");
        let total = count_primes_with(value, opts.workers)?;
        observer.on_progress(&ProgressUpdate::done(WORKLOAD_NAME));
        Ok(BenchOutput::Primes(total))
    }

    fn name(&self) -> &'static str {
        WORKLOAD_NAME
    }
}
