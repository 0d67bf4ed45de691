//! GMP-backed precision kernel using the `rug` crate.
//!
//! Only available when the `gmp` feature is enabled. Every float is created
//! at the kernel's precision, so the precision stays scoped to one
//! computation rather than living in a process-wide default.

use rug::ops::Pow;
use rug::{Float, Integer};

use crate::kernel::PrecisionKernel;
use crate::workload::BenchError;

/// Arbitrary-precision backend over GMP/MPFR.
pub struct GmpKernel {
    prec: u32,
}

impl GmpKernel {
    // Factorial and power arguments stay under 6·iters, which is far below
    // u32::MAX whenever the precision itself fits in u32.
    #[allow(clippy::cast_possible_truncation, clippy::unused_self)]
    fn small(&self, v: u64) -> u32 {
        v as u32
    }
}

impl PrecisionKernel for GmpKernel {
    type Int = Integer;
    type Float = Float;

    fn with_precision(bits: u64) -> Result<Self, BenchError> {
        let prec = u32::try_from(bits).map_err(|_| {
            BenchError::ResourceExhaustion(format!(
                "working precision of {bits} bits exceeds the GMP float limit"
            ))
        })?;
        Ok(Self { prec })
    }

    fn name(&self) -> &'static str {
        "gmp"
    }

    fn int_from_u64(&self, v: u64) -> Integer {
        Integer::from(v)
    }

    fn factorial(&self, n: u64) -> Integer {
        Integer::from(Integer::factorial(self.small(n)))
    }

    fn int_mul(&self, a: &Integer, b: &Integer) -> Integer {
        Integer::from(a * b)
    }

    fn int_mul_u64(&self, a: &Integer, k: u64) -> Integer {
        Integer::from(a * k)
    }

    fn int_add_u64(&self, a: &Integer, k: u64) -> Integer {
        Integer::from(a + k)
    }

    fn int_neg(&self, a: Integer) -> Integer {
        -a
    }

    fn int_pow(&self, a: &Integer, exp: u64) -> Integer {
        Integer::from(a.pow(self.small(exp)))
    }

    fn int_pow_u64(&self, base: u64, exp: u64) -> Integer {
        Integer::from(Integer::from(base).pow(self.small(exp)))
    }

    fn float_zero(&self) -> Float {
        Float::new(self.prec)
    }

    fn float_from_int(&self, v: &Integer) -> Float {
        Float::with_val(self.prec, v)
    }

    fn float_sqrt_u64(&self, v: u64) -> Float {
        Float::with_val(self.prec, v).sqrt()
    }

    fn float_mul_u64(&self, a: &Float, k: u64) -> Float {
        Float::with_val(self.prec, a * k)
    }

    fn float_div(&self, num: &Float, den: &Float) -> Float {
        Float::with_val(self.prec, num / den)
    }

    fn float_add_assign(&self, acc: &mut Float, rhs: Float) {
        *acc += rhs;
    }

    #[allow(clippy::cast_possible_truncation)]
    fn to_decimal(&self, v: &Float, digits: u64) -> (String, i64) {
        let (negative, body, exp) = v.to_sign_string_exp(10, Some(digits as usize));
        let body = if negative { format!("-{body}") } else { body };
        (body, i64::from(exp.unwrap_or(0)))
    }
}
