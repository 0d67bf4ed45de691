//! Pure-Rust precision kernel over `num-bigint`.
//!
//! Floats are fixed-point: a value x is stored as the integer
//! round-toward-zero of x·2^precision. All operations truncate, which costs
//! less than one unit in the last place each; the per-digit guard bits in
//! the working precision absorb that.

use num_bigint::BigInt;
use num_traits::{One, Pow, Signed, Zero};

use crate::kernel::PrecisionKernel;
use crate::workload::BenchError;

/// Default arbitrary-precision backend (fixed-point over `BigInt`).
pub struct BigIntKernel {
    prec: usize,
}

impl PrecisionKernel for BigIntKernel {
    type Int = BigInt;
    type Float = BigInt;

    fn with_precision(bits: u64) -> Result<Self, BenchError> {
        let prec = usize::try_from(bits).map_err(|_| {
            BenchError::ResourceExhaustion(format!(
                "working precision of {bits} bits does not fit this host"
            ))
        })?;
        Ok(Self { prec })
    }

    fn name(&self) -> &'static str {
        "fixed-point"
    }

    fn int_from_u64(&self, v: u64) -> BigInt {
        BigInt::from(v)
    }

    fn factorial(&self, n: u64) -> BigInt {
        let mut acc = BigInt::one();
        for k in 2..=n {
            acc *= k;
        }
        acc
    }

    fn int_mul(&self, a: &BigInt, b: &BigInt) -> BigInt {
        a * b
    }

    fn int_mul_u64(&self, a: &BigInt, k: u64) -> BigInt {
        a * k
    }

    fn int_add_u64(&self, a: &BigInt, k: u64) -> BigInt {
        a + k
    }

    fn int_neg(&self, a: BigInt) -> BigInt {
        -a
    }

    fn int_pow(&self, a: &BigInt, exp: u64) -> BigInt {
        Pow::pow(a, exp)
    }

    fn int_pow_u64(&self, base: u64, exp: u64) -> BigInt {
        Pow::pow(&BigInt::from(base), exp)
    }

    fn float_zero(&self) -> BigInt {
        BigInt::zero()
    }

    fn float_from_int(&self, v: &BigInt) -> BigInt {
        v << self.prec
    }

    fn float_sqrt_u64(&self, v: u64) -> BigInt {
        // sqrt(v·2^(2p)) = sqrt(v)·2^p
        (BigInt::from(v) << (2 * self.prec)).sqrt()
    }

    fn float_mul_u64(&self, a: &BigInt, k: u64) -> BigInt {
        a * k
    }

    fn float_div(&self, num: &BigInt, den: &BigInt) -> BigInt {
        (num << self.prec) / den
    }

    fn float_add_assign(&self, acc: &mut BigInt, rhs: BigInt) {
        *acc += rhs;
    }

    #[allow(clippy::cast_possible_truncation)]
    fn to_decimal(&self, v: &BigInt, digits: u64) -> (String, i64) {
        let digits = digits as usize;
        if v.is_zero() || digits == 0 {
            return (String::new(), 0);
        }
        let negative = v.is_negative();
        let mantissa = v.abs();

        // Normalize so at least one digit sits before the point, tracking
        // how far the point moved.
        let (scaled, exponent) = if (&mantissa >> self.prec).is_zero() {
            let mut scaled = mantissa;
            let mut shifts: i64 = 0;
            while (&scaled >> self.prec).is_zero() {
                scaled *= 10u32;
                shifts += 1;
            }
            (scaled, 1 - shifts)
        } else {
            let int_len = (&mantissa >> self.prec).to_str_radix(10).len();
            (mantissa, int_len as i64)
        };

        let ip = &scaled >> self.prec;
        let ip_str = ip.to_str_radix(10);
        let body = if digits <= ip_str.len() {
            ip_str[..digits].to_string()
        } else {
            let frac_len = digits - ip_str.len();
            let frac = &scaled - (&ip << self.prec);
            let pow10: BigInt = Pow::pow(&BigInt::from(10u8), frac_len as u64);
            let frac_digits = ((&frac * &pow10) >> self.prec).to_str_radix(10);
            format!("{ip_str}{frac_digits:0>frac_len$}")
        };

        let body = if negative { format!("-{body}") } else { body };
        (body, exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kernel(bits: u64) -> BigIntKernel {
        BigIntKernel::with_precision(bits).unwrap()
    }

    #[test]
    fn factorial_small_values() {
        let k = kernel(16);
        assert_eq!(k.factorial(0), BigInt::from(1));
        assert_eq!(k.factorial(1), BigInt::from(1));
        assert_eq!(k.factorial(5), BigInt::from(120));
        assert_eq!(k.factorial(12), BigInt::from(479_001_600u64));
    }

    #[test]
    fn integer_powers() {
        let k = kernel(16);
        assert_eq!(k.int_pow(&BigInt::from(7), 3), BigInt::from(343));
        assert_eq!(k.int_pow_u64(2, 20), BigInt::from(1_048_576));
        assert_eq!(k.int_pow(&BigInt::from(5), 0), BigInt::from(1));
    }

    #[test]
    fn integer_linear_combination() {
        let k = kernel(16);
        // 545140134·3 + 13591409, the i=3 numerator coefficient
        let v = k.int_add_u64(&k.int_mul_u64(&k.int_from_u64(545_140_134), 3), 13_591_409);
        assert_eq!(v, BigInt::from(1_649_011_811u64));
    }

    #[test]
    fn negation() {
        let k = kernel(16);
        assert_eq!(k.int_neg(BigInt::from(42)), BigInt::from(-42));
    }

    #[test]
    fn sqrt_of_perfect_square_is_exact() {
        let k = kernel(8);
        // sqrt(4) = 2.0, i.e. 2·2^8 in fixed point
        assert_eq!(k.float_sqrt_u64(4), BigInt::from(512));
    }

    #[test]
    fn sqrt_truncates_toward_zero() {
        let k = kernel(8);
        // sqrt(2)·2^8 = 362.03…, truncated to 362
        assert_eq!(k.float_sqrt_u64(2), BigInt::from(362));
    }

    #[test]
    fn division_produces_known_digits() {
        let k = kernel(64);
        // 355/113 = 3.14159292…
        let q = k.float_div(
            &k.float_from_int(&BigInt::from(355)),
            &k.float_from_int(&BigInt::from(113)),
        );
        let (digits, exponent) = k.to_decimal(&q, 8);
        assert_eq!(digits, "31415929");
        assert_eq!(exponent, 1);
    }

    #[test]
    fn to_decimal_integer_value() {
        let k = kernel(32);
        let three = k.float_from_int(&BigInt::from(3));
        assert_eq!(k.to_decimal(&three, 5), ("30000".to_string(), 1));

        let big = k.float_from_int(&BigInt::from(1234));
        assert_eq!(k.to_decimal(&big, 2), ("12".to_string(), 4));
    }

    #[test]
    fn to_decimal_subunit_value() {
        let k = kernel(32);
        // 1/3 = 0.333…, exponent 0 by the 0.D×10^e convention
        let third = k.float_div(
            &k.float_from_int(&BigInt::from(1)),
            &k.float_from_int(&BigInt::from(3)),
        );
        assert_eq!(k.to_decimal(&third, 5), ("33333".to_string(), 0));

        // 1/300 = 0.00333…, exponent -2
        let small = k.float_div(
            &k.float_from_int(&BigInt::from(1)),
            &k.float_from_int(&BigInt::from(300)),
        );
        assert_eq!(k.to_decimal(&small, 3), ("333".to_string(), -2));
    }

    #[test]
    fn to_decimal_zero() {
        let k = kernel(32);
        assert_eq!(k.to_decimal(&BigInt::zero(), 5), (String::new(), 0));
    }

    #[test]
    fn to_decimal_negative_value() {
        let k = kernel(32);
        let v = k.float_from_int(&BigInt::from(-25));
        assert_eq!(k.to_decimal(&v, 3), ("-250".to_string(), 2));
    }

    #[test]
    fn accumulation_matches_exact_sum() {
        let k = kernel(32);
        let mut acc = k.float_zero();
        for v in [1u64, 2, 3, 4] {
            let f = k.float_from_int(&BigInt::from(v));
            k.float_add_assign(&mut acc, f);
        }
        assert_eq!(k.to_decimal(&acc, 2), ("10".to_string(), 2));
    }
}
