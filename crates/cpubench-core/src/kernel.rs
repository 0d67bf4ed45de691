//! The arbitrary-precision arithmetic capability consumed by the pi series.
//!
//! A kernel is opened at an explicit working precision for the duration of
//! one computation and dropped afterwards — precision never lives in process
//! globals, so concurrent computations at different precisions cannot
//! interfere. The series needs two value families: exact integers for term
//! numerators/denominators (factorials and powers must not round) and
//! floating values at the working precision for the accumulation and the
//! closing division.

use crate::workload::BenchError;

/// Call-scoped arbitrary-precision arithmetic backend.
pub trait PrecisionKernel: Send + Sync + Sized {
    /// Exact integer type (never rounds).
    type Int;
    /// Floating type carrying the kernel's working precision.
    type Float;

    /// Open a kernel at the given working precision in bits.
    fn with_precision(bits: u64) -> Result<Self, BenchError>;

    /// Backend name for logs.
    fn name(&self) -> &'static str;

    fn int_from_u64(&self, v: u64) -> Self::Int;

    /// Exact n!.
    fn factorial(&self, n: u64) -> Self::Int;

    fn int_mul(&self, a: &Self::Int, b: &Self::Int) -> Self::Int;

    fn int_mul_u64(&self, a: &Self::Int, k: u64) -> Self::Int;

    fn int_add_u64(&self, a: &Self::Int, k: u64) -> Self::Int;

    fn int_neg(&self, a: Self::Int) -> Self::Int;

    /// Exact a^exp.
    fn int_pow(&self, a: &Self::Int, exp: u64) -> Self::Int;

    /// Exact base^exp for a machine-word base.
    fn int_pow_u64(&self, base: u64, exp: u64) -> Self::Int;

    fn float_zero(&self) -> Self::Float;

    /// Convert an exact integer to the working precision.
    fn float_from_int(&self, v: &Self::Int) -> Self::Float;

    /// sqrt(v) at the working precision.
    fn float_sqrt_u64(&self, v: u64) -> Self::Float;

    fn float_mul_u64(&self, a: &Self::Float, k: u64) -> Self::Float;

    fn float_div(&self, num: &Self::Float, den: &Self::Float) -> Self::Float;

    fn float_add_assign(&self, acc: &mut Self::Float, rhs: Self::Float);

    /// Convert to `digits` significant decimal digits plus the decimal-point
    /// exponent: value = 0.digits × 10^exponent.
    fn to_decimal(&self, v: &Self::Float, digits: u64) -> (String, i64);
}
