//! Chudnovsky series evaluator for decimal digits of pi.
//!
//! Term i contributes
//!   (6i)!·(545140134·i + 13591409) / ((3i)!·(i!)³·640320^(3i)·±1)
//! and the series closes with total = 426880·sqrt(10005) / sum.
//!
//! Numerators and denominators are built as exact integers before being cast
//! to the working float precision — the ~14.18 digits-per-term convergence
//! depends on the factorial and power terms not rounding. The accumulation
//! loop is strictly sequential: the order of additions fixes the rounding of
//! the working-precision sum, so reordering could move the last digits.

use std::marker::PhantomData;

use crate::constants::{
    BITS_PER_DIGIT, DIGITS_PER_TERM, SERIES_BASE, SERIES_LINEAR, SERIES_OFFSET, SERIES_SCALE,
    SERIES_SQRT_ARG,
};
use crate::kernel::PrecisionKernel;
use crate::kernel_bigint::BigIntKernel;
use crate::observer::{ProgressObserver, ProgressUpdate};
use crate::observers::NoOpObserver;
use crate::options::Options;
use crate::workload::{BenchError, BenchOutput, PiDigits, Workload};

const WORKLOAD_NAME: &str = "Chudnovsky";

/// Series terms needed for the requested digit count.
#[must_use]
pub fn iterations_for(digits: u64) -> u64 {
    digits / DIGITS_PER_TERM + 1
}

/// Working precision in bits for the requested digit count.
pub fn precision_for(digits: u64) -> Result<u64, BenchError> {
    digits
        .checked_mul(BITS_PER_DIGIT)
        .and_then(|bits| bits.checked_add(1))
        .ok_or_else(|| {
            BenchError::ResourceExhaustion(format!(
                "digit count {digits} overflows the working precision"
            ))
        })
}

/// Compute `digits` decimal digits of pi with the default kernel.
pub fn compute_pi_digits(digits: u64) -> Result<PiDigits, BenchError> {
    compute_pi_digits_with::<BigIntKernel>(digits, &NoOpObserver::new())
}

/// Compute `digits` decimal digits of pi through the given kernel.
///
/// The kernel is opened at the derived working precision for this call only
/// and dropped before returning, so repeated calls are independent and
/// precision state never leaks between them.
#[allow(clippy::cast_precision_loss)]
pub fn compute_pi_digits_with<K: PrecisionKernel>(
    digits: u64,
    observer: &dyn ProgressObserver,
) -> Result<PiDigits, BenchError> {
    if digits == 0 {
        return Err(BenchError::InvalidInput(
            "digit count must be at least 1".into(),
        ));
    }

    let iters = iterations_for(digits);
    let precision = precision_for(digits)?;
    let kernel = K::with_precision(precision)?;

    tracing::debug!(
        backend = kernel.name(),
        digits,
        iters,
        precision,
        "evaluating series"
    );

    // 426880·sqrt(10005), reused by the closing step
    let scale = {
        let root = kernel.float_sqrt_u64(SERIES_SQRT_ARG);
        kernel.float_mul_u64(&root, SERIES_SCALE)
    };

    let mut acc = kernel.float_zero();
    for i in 0..iters {
        let ti = 3 * i;

        let numerator = {
            let lead = kernel.factorial(6 * i);
            let linear = kernel.int_add_u64(
                &kernel.int_mul_u64(&kernel.int_from_u64(SERIES_LINEAR), i),
                SERIES_OFFSET,
            );
            kernel.int_mul(&lead, &linear)
        };

        let denominator = {
            let fact3 = kernel.factorial(ti);
            let cube = kernel.int_pow(&kernel.factorial(i), 3);
            let power = kernel.int_pow_u64(SERIES_BASE, ti);
            let product = kernel.int_mul(&kernel.int_mul(&fact3, &cube), &power);
            // 3i is odd exactly when i is odd
            if i & 1 == 1 {
                kernel.int_neg(product)
            } else {
                product
            }
        };

        let term = kernel.float_div(
            &kernel.float_from_int(&numerator),
            &kernel.float_from_int(&denominator),
        );
        kernel.float_add_assign(&mut acc, term);

        observer.on_progress(&ProgressUpdate::new(
            WORKLOAD_NAME,
            (i + 1) as f64 / iters as f64,
            i + 1,
            iters,
        ));
    }

    let total = kernel.float_div(&scale, &acc);
    let (digit_string, exponent) = kernel.to_decimal(&total, digits);
    observer.on_progress(&ProgressUpdate::done(WORKLOAD_NAME));

    Ok(PiDigits {
        digits: digit_string,
        exponent,
    })
}

/// Pi-digit workload over a chosen precision kernel.
pub struct ChudnovskyPi<K: PrecisionKernel> {
    _kernel: PhantomData<K>,
}

impl<K: PrecisionKernel> ChudnovskyPi<K> {
    /// Create a new pi-digit workload.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _kernel: PhantomData,
        }
    }
}

impl<K: PrecisionKernel> Default for ChudnovskyPi<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PrecisionKernel> Workload for ChudnovskyPi<K> {
    fn run(
        &self,
        observer: &dyn ProgressObserver,
        value: u64,
        _opts: &Options,
    ) -> Result<BenchOutput, BenchError> {
        compute_pi_digits_with::<K>(value, observer).map(BenchOutput::Pi)
    }

    fn name(&self) -> &'static str {
        WORKLOAD_NAME
    }
}
