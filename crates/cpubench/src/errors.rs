//! Error handling and exit codes.

use cpubench_core::constants::exit_codes;
use cpubench_core::workload::BenchError;

/// Map a run error to the process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<BenchError>() {
        Some(BenchError::Config(_)) => exit_codes::ERROR_CONFIG,
        _ => exit_codes::ERROR_GENERIC,
    }
}
