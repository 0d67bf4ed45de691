//! Workload trait and result types.
//!
//! `Workload` is the public trait consumed by the driver: one call runs one
//! benchmark to completion and returns a single result value. Workloads keep
//! no state across calls and support no cancellation — a started computation
//! either finishes or fails fatally.

use crate::observer::ProgressObserver;
use crate::options::Options;

/// Error type for benchmark workloads.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// The requested value is outside the workload's domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The request exceeds what the arithmetic backend or host can allocate.
    #[error("resource exhaustion: {0}")]
    ResourceExhaustion(String),

    /// Driver-level configuration error (unknown workload mode).
    #[error("configuration error: {0}")]
    Config(String),

    /// Peripheral I/O failure (result dump); never affects the computation.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Decimal digits of pi plus the position of the implied decimal point.
///
/// `digits` holds exactly the requested number of significant digits with no
/// separator; `exponent` counts the digits before the point (1 for pi).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PiDigits {
    /// Significant digits, most significant first.
    pub digits: String,
    /// Decimal-point position: value = 0.digits × 10^exponent.
    pub exponent: i64,
}

impl PiDigits {
    /// Render with the decimal point inserted, e.g. `"3.14159"`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn decimal_string(&self) -> String {
        if self.digits.is_empty() {
            return "0".to_string();
        }
        if self.exponent <= 0 {
            let zeros = self.exponent.unsigned_abs() as usize;
            format!("0.{}{}", "0".repeat(zeros), self.digits)
        } else {
            let point = self.exponent as usize;
            if point >= self.digits.len() {
                format!("{}{}", self.digits, "0".repeat(point - self.digits.len()))
            } else {
                format!("{}.{}", &self.digits[..point], &self.digits[point..])
            }
        }
    }
}

/// Result of one workload run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BenchOutput {
    /// Digits of pi from the Chudnovsky workload.
    Pi(PiDigits),
    /// Total primes found by the trial-division workload.
    Primes(u64),
}

/// A benchmark workload, selected and run exactly once per invocation.
pub trait Workload: Send + Sync {
    /// Run the workload to completion for the given input value.
    fn run(
        &self,
        observer: &dyn ProgressObserver,
        value: u64,
        opts: &Options,
    ) -> Result<BenchOutput, BenchError>;

    /// Get the name of this workload.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_string_pi_convention() {
        let pi = PiDigits {
            digits: "31415".to_string(),
            exponent: 1,
        };
        assert_eq!(pi.decimal_string(), "3.1415");
    }

    #[test]
    fn decimal_string_single_digit() {
        let pi = PiDigits {
            digits: "3".to_string(),
            exponent: 1,
        };
        assert_eq!(pi.decimal_string(), "3");
    }

    #[test]
    fn decimal_string_subunit_value() {
        let v = PiDigits {
            digits: "333".to_string(),
            exponent: 0,
        };
        assert_eq!(v.decimal_string(), "0.333");

        let v = PiDigits {
            digits: "5".to_string(),
            exponent: -2,
        };
        assert_eq!(v.decimal_string(), "0.005");
    }

    #[test]
    fn decimal_string_integer_value() {
        let v = PiDigits {
            digits: "12".to_string(),
            exponent: 4,
        };
        assert_eq!(v.decimal_string(), "1200");
    }

    #[test]
    fn decimal_string_empty() {
        let v = PiDigits {
            digits: String::new(),
            exponent: 0,
        };
        assert_eq!(v.decimal_string(), "0");
    }

    #[test]
    fn bench_error_display() {
        let err = BenchError::InvalidInput("digit count must be at least 1".into());
        assert_eq!(
            err.to_string(),
            "invalid input: digit count must be at least 1"
        );

        let err = BenchError::Config("unknown workload: sqrt".into());
        assert_eq!(err.to_string(), "configuration error: unknown workload: sqrt");
    }
}
