//! Result verification checksums.
//!
//! Checksums are computed over the raw digit string (no decimal point) for
//! the pi workload and over the decimal count string for the prime workload,
//! so two runs can be compared with a single line of output.

use cpubench_core::workload::BenchOutput;

/// Hex-encoded MD5 digest of a payload string.
#[must_use]
pub fn md5_hex(payload: &str) -> String {
    format!("{:x}", md5::compute(payload.as_bytes()))
}

/// Verification checksum for a workload output.
#[must_use]
pub fn output_checksum(output: &BenchOutput) -> String {
    match output {
        BenchOutput::Pi(pi) => md5_hex(&pi.digits),
        BenchOutput::Primes(count) => md5_hex(&count.to_string()),
    }
}
