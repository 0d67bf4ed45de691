//! # cpubench-core
//!
//! Core library for the CpuBench CPU benchmarking utility. Implements the
//! Chudnovsky pi-digit series over pluggable precision kernels and a
//! parallel trial-division prime counter.

pub mod chudnovsky;
pub mod constants;
pub mod kernel;
pub mod kernel_bigint;
pub mod observer;
pub mod observers;
pub mod options;
pub mod primes;
pub mod registry;
pub mod runner;
pub mod workload;

#[cfg(feature = "gmp")]
pub mod kernel_gmp;

// Re-exports
pub use chudnovsky::{compute_pi_digits, compute_pi_digits_with, ChudnovskyPi};
pub use constants::{exit_codes, BITS_PER_DIGIT, DIGITS_PER_TERM, PROGRESS_REPORT_THRESHOLD};
pub use kernel::PrecisionKernel;
pub use kernel_bigint::BigIntKernel;
pub use observer::{ProgressObserver, ProgressUpdate};
pub use options::Options;
pub use primes::{count_primes, TrialDivision};
pub use registry::{DefaultFactory, WorkloadFactory};
pub use runner::{execute_workload, BenchReport};
pub use workload::{BenchError, BenchOutput, PiDigits, Workload};

/// Compute decimal digits of pi with the default kernel.
///
/// This is a convenience function for simple use cases. For backend
/// selection or progress reporting, use `compute_pi_digits_with` or the
/// `Workload` trait directly.
///
/// # Example
/// ```
/// assert_eq!(cpubench_core::pi_digits(5).unwrap(), "31415");
/// assert_eq!(cpubench_core::count_primes(10), 4);
/// ```
pub fn pi_digits(digits: u64) -> Result<String, BenchError> {
    compute_pi_digits(digits).map(|pi| pi.digits)
}
