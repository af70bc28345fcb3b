//! Shared numerical primitives usable in `const` contexts.

/// Primary scalar type used across the crate.
pub type Scalar = f64;

/// Greatest common divisor of two integers, always non-negative.
///
/// `gcd(0, 0)` is defined as `0`.
#[must_use]
pub const fn gcd(a: i64, b: i64) -> i64 {
    gcd_unsigned(a.unsigned_abs() as u128, b.unsigned_abs() as u128) as i64
}

/// Greatest common divisor on magnitudes wide enough for products of two `i64`.
#[must_use]
pub const fn gcd_unsigned(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Raises `base` to an integer power using exponentiation by squaring.
///
/// Unlike [`f64::powi`] this is a `const fn`, so conversion factors of compound
/// units can be folded at compile time.
#[must_use]
pub const fn powi(base: Scalar, exponent: i32) -> Scalar {
    let mut result = 1.0;
    let mut factor = base;
    let mut n = exponent.unsigned_abs();
    while n > 0 {
        if n & 1 == 1 {
            result *= factor;
        }
        factor *= factor;
        n >>= 1;
    }
    if exponent < 0 {
        1.0 / result
    } else {
        result
    }
}

/// Raises `base` to the rational power `numerator / denominator`.
///
/// Integer powers go through [`f64::powi`], so `pow_ratio(x, 2, 1)` is exact
/// wherever squaring is.
#[must_use]
pub fn pow_ratio(base: Scalar, numerator: i64, denominator: i64) -> Scalar {
    match i32::try_from(numerator) {
        Ok(n) if denominator == 1 => base.powi(n),
        _ => base.powf(numerator as Scalar / denominator as Scalar),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn gcd_ignores_sign() {
        assert_eq!(gcd(12, -18), 6);
        assert_eq!(gcd(-7, 0), 7);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd_unsigned(1 << 100, 1 << 64), 1 << 64);
    }

    #[test]
    fn powi_matches_std() {
        for exponent in -4..=4 {
            assert_relative_eq!(powi(3.7, exponent), 3.7_f64.powi(exponent), max_relative = 1.0e-12);
        }
        assert_relative_eq!(powi(0.3048, 3), 0.028_316_846_592, max_relative = 1.0e-12);
    }

    #[test]
    fn pow_ratio_handles_roots() {
        assert_eq!(pow_ratio(3.0, 2, 1), 9.0);
        assert_relative_eq!(pow_ratio(16.0, 1, 2), 4.0);
        assert_relative_eq!(pow_ratio(8.0, -2, 3), 0.25, max_relative = 1.0e-12);
    }
}
