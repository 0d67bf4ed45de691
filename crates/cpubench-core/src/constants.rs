//! Constants for the benchmark workloads.

/// Decimal digits contributed by each Chudnovsky series term (~14.18,
/// rounded down so the iteration count always overshoots).
pub const DIGITS_PER_TERM: u64 = 15;

/// Working-precision bits reserved per requested decimal digit.
/// This is the ceiling of log2(10); the fractional surplus (~0.68 bits
/// per digit) is the guard precision the series accumulation relies on.
pub const BITS_PER_DIGIT: u64 = 4;

/// Linear coefficient of the Chudnovsky numerator: 545140134·i + 13591409.
pub const SERIES_LINEAR: u64 = 545_140_134;

/// Constant coefficient of the Chudnovsky numerator.
pub const SERIES_OFFSET: u64 = 13_591_409;

/// Base of the 640320^(3i) denominator power.
pub const SERIES_BASE: u64 = 640_320;

/// Scale factor of the closing step: total = 426880·sqrt(10005) / sum.
pub const SERIES_SCALE: u64 = 426_880;

/// Argument of the square root in the closing step.
pub const SERIES_SQRT_ARG: u64 = 10_005;

/// Minimum progress change (1%) before observers report an update.
pub const PROGRESS_REPORT_THRESHOLD: f64 = 0.01;

/// Process exit codes used by the driver.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (invalid input, resource exhaustion, I/O).
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration (unknown workload mode).
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_per_digit_is_ceiling_log2_of_ten() {
        // 2^3 < 10 <= 2^4
        assert!(2u64.pow(u32::try_from(BITS_PER_DIGIT).unwrap() - 1) < 10);
        assert!(2u64.pow(u32::try_from(BITS_PER_DIGIT).unwrap()) >= 10);
    }

    #[test]
    fn series_constants() {
        assert_eq!(SERIES_LINEAR, 545_140_134);
        assert_eq!(SERIES_OFFSET, 13_591_409);
        assert_eq!(SERIES_BASE, 640_320);
        assert_eq!(SERIES_SCALE, 426_880);
        assert_eq!(SERIES_SQRT_ARG, 10_005);
    }
}
