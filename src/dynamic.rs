//! Quantities whose dimension is only known at runtime.
//!
//! [`DynQuantity`] carries its [`DimensionVector`] as a value, so it can hold
//! anything the [`UnitRegistry`](crate::registry::UnitRegistry) parses,
//! including rational powers such as `m^(1/2)`. Additive operations check
//! compatibility and return [`DimensionalError::DimensionMismatch`] instead of
//! failing to compile. Crossing back into the typed world goes through
//! `TryFrom`, which verifies the dimension once at the boundary.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Div, Mul, Neg};

use crate::dimension::{Dimension, DimensionVector};
use crate::errors::{DimensionalError, Result};
use crate::exponent::Exponent;
use crate::math::{self, Scalar};
use crate::quantity::Quantity;

/// A canonical magnitude tagged with its dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DynQuantity {
    value: Scalar,
    dimension: DimensionVector,
}

impl DynQuantity {
    /// Wraps a canonical magnitude.
    #[must_use]
    pub const fn new(value: Scalar, dimension: DimensionVector) -> Self {
        Self { value, dimension }
    }

    /// A pure number.
    #[must_use]
    pub const fn dimensionless(value: Scalar) -> Self {
        Self::new(value, DimensionVector::DIMENSIONLESS)
    }

    /// Magnitude in canonical units.
    #[must_use]
    pub const fn value(&self) -> Scalar {
        self.value
    }

    /// The dimension.
    #[must_use]
    pub const fn dimension(&self) -> DimensionVector {
        self.dimension
    }

    /// `true` when both operands share a dimension.
    #[must_use]
    pub const fn is_compatible(&self, other: &Self) -> bool {
        self.dimension.const_eq(&other.dimension)
    }

    fn ensure_compatible(&self, other: &Self) -> Result<()> {
        if self.is_compatible(other) {
            Ok(())
        } else {
            Err(mismatch(self.dimension, other.dimension))
        }
    }

    /// Sum of two quantities of the same dimension.
    ///
    /// # Errors
    ///
    /// [`DimensionalError::DimensionMismatch`] when the dimensions differ.
    pub fn try_add(self, other: Self) -> Result<Self> {
        self.ensure_compatible(&other)?;
        Ok(Self::new(self.value + other.value, self.dimension))
    }

    /// Difference of two quantities of the same dimension.
    ///
    /// # Errors
    ///
    /// [`DimensionalError::DimensionMismatch`] when the dimensions differ.
    pub fn try_sub(self, other: Self) -> Result<Self> {
        self.ensure_compatible(&other)?;
        Ok(Self::new(self.value - other.value, self.dimension))
    }

    /// Ordering of two quantities of the same dimension.
    ///
    /// # Errors
    ///
    /// [`DimensionalError::DimensionMismatch`] when the dimensions differ.
    pub fn try_partial_cmp(&self, other: &Self) -> Result<Option<Ordering>> {
        self.ensure_compatible(other)?;
        Ok(self.value.partial_cmp(&other.value))
    }

    /// Product of two quantities; exponents add.
    ///
    /// # Errors
    ///
    /// [`DimensionalError::ExponentOverflow`] when an exponent leaves the `i64` range.
    pub fn try_mul(self, other: Self) -> Result<Self> {
        let dimension = self
            .dimension
            .checked_combine(other.dimension)
            .ok_or(DimensionalError::ExponentOverflow)?;
        Ok(Self::new(self.value * other.value, dimension))
    }

    /// Quotient of two quantities; exponents subtract.
    ///
    /// # Errors
    ///
    /// [`DimensionalError::ExponentOverflow`] when an exponent leaves the `i64` range.
    pub fn try_div(self, other: Self) -> Result<Self> {
        let dimension = self
            .dimension
            .checked_divide(other.dimension)
            .ok_or(DimensionalError::ExponentOverflow)?;
        Ok(Self::new(self.value / other.value, dimension))
    }

    /// Rational power; the dimension's exponents are scaled by `exponent`.
    ///
    /// # Errors
    ///
    /// [`DimensionalError::ExponentOverflow`] when an exponent leaves the `i64` range.
    pub fn pow(self, exponent: Exponent) -> Result<Self> {
        let dimension = self
            .dimension
            .checked_pow(exponent)
            .ok_or(DimensionalError::ExponentOverflow)?;
        let value = math::pow_ratio(self.value, exponent.numerator(), exponent.denominator());
        Ok(Self::new(value, dimension))
    }

    /// Integer power.
    ///
    /// # Errors
    ///
    /// [`DimensionalError::ExponentOverflow`] when an exponent leaves the `i64` range.
    pub fn powi(self, n: i32) -> Result<Self> {
        self.pow(Exponent::integer(i64::from(n)))
    }

    /// Square root; odd exponents become halves.
    ///
    /// # Errors
    ///
    /// [`DimensionalError::ExponentOverflow`] when a denominator leaves the `i64` range.
    pub fn sqrt(self) -> Result<Self> {
        self.root(2)
    }

    /// `n`-th root.
    ///
    /// # Errors
    ///
    /// [`DimensionalError::ZeroDenominator`] when `n == 0`, and
    /// [`DimensionalError::ExponentOverflow`] as for [`DynQuantity::pow`].
    pub fn root(self, n: i64) -> Result<Self> {
        let exponent = Exponent::try_new(1, n)?;
        let dimension = self
            .dimension
            .checked_pow(exponent)
            .ok_or(DimensionalError::ExponentOverflow)?;
        let value = match n {
            2 => self.value.sqrt(),
            3 => self.value.cbrt(),
            _ => math::pow_ratio(self.value, exponent.numerator(), exponent.denominator()),
        };
        Ok(Self::new(value, dimension))
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(self) -> Self {
        Self::new(self.value.abs(), self.dimension)
    }

    /// Converts into a statically typed quantity of dimension `D`.
    ///
    /// # Errors
    ///
    /// [`DimensionalError::DimensionMismatch`] when the dimension is not `D`.
    pub fn try_into_quantity<D: Dimension>(self) -> Result<Quantity<D>> {
        if self.dimension.const_eq(&D::VECTOR) {
            Ok(Quantity::from_canonical(self.value))
        } else {
            Err(mismatch(D::VECTOR, self.dimension))
        }
    }
}

pub(crate) fn mismatch(expected: DimensionVector, found: DimensionVector) -> DimensionalError {
    DimensionalError::DimensionMismatch {
        expected: expected.to_string(),
        found: found.to_string(),
    }
}

impl<D: Dimension> From<Quantity<D>> for DynQuantity {
    fn from(q: Quantity<D>) -> Self {
        Self::new(q.value(), D::VECTOR)
    }
}

impl<D: Dimension> TryFrom<DynQuantity> for Quantity<D> {
    type Error = DimensionalError;

    fn try_from(q: DynQuantity) -> Result<Self> {
        q.try_into_quantity()
    }
}

impl Mul<Scalar> for DynQuantity {
    type Output = Self;

    fn mul(self, rhs: Scalar) -> Self {
        Self::new(self.value * rhs, self.dimension)
    }
}

impl Div<Scalar> for DynQuantity {
    type Output = Self;

    fn div(self, rhs: Scalar) -> Self {
        Self::new(self.value / rhs, self.dimension)
    }
}

impl Neg for DynQuantity {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value, self.dimension)
    }
}

impl fmt::Display for DynQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        if !self.dimension.is_dimensionless() {
            write!(f, " {}", self.dimension.symbolic())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::dimension::{LengthDim, TimeDim};
    use crate::exponent::{BaseKind, UnitExponent};
    use crate::quantities::{Area, Force, Length};
    use crate::units::{Kilometers, Meters, Newtons, Seconds, SquareMeters};

    #[test]
    fn typed_values_cross_the_boundary() {
        let f = DynQuantity::from(4.0 * Newtons);
        let back: Force = f.try_into().unwrap();
        assert_relative_eq!(back.value_as::<Newtons>(), 4.0);

        let wrong: Result<Length> = f.try_into();
        assert!(matches!(wrong, Err(DimensionalError::DimensionMismatch { .. })));
    }

    #[test]
    fn addition_requires_matching_dimensions() {
        let a = DynQuantity::from(1.0 * Kilometers);
        let b = DynQuantity::from(500.0 * Meters);
        let t = DynQuantity::from(3.0 * Seconds);

        assert_relative_eq!(a.try_add(b).unwrap().value(), 1500.0);
        assert_relative_eq!(a.try_sub(b).unwrap().value(), 500.0);
        assert_eq!(a.try_partial_cmp(&b).unwrap(), Some(Ordering::Greater));

        let err = a.try_add(t).unwrap_err();
        assert_eq!(
            err,
            DimensionalError::DimensionMismatch {
                expected: "meters^1".into(),
                found: "seconds^1".into(),
            }
        );
        assert!(a.try_partial_cmp(&t).is_err());
    }

    #[test]
    fn products_track_dimensions() {
        let v = DynQuantity::from(10.0 * Meters)
            .try_div(DynQuantity::from(2.0 * Seconds))
            .unwrap();
        assert_relative_eq!(v.value(), 5.0);
        assert_eq!(v.dimension(), LengthDim::VECTOR.divide(TimeDim::VECTOR));
        assert_eq!(v.try_mul(DynQuantity::from(2.0 * Seconds)).unwrap().dimension(), LengthDim::VECTOR);
        assert_eq!((-v * 2.0 / 4.0).value(), -2.5);
    }

    #[test]
    fn rational_powers() {
        let area = DynQuantity::from(9.0 * SquareMeters);
        let side = area.sqrt().unwrap();
        assert_relative_eq!(side.value(), 3.0);
        let typed: Length = side.try_into().unwrap();
        assert_relative_eq!(typed.value(), 3.0);

        let root_length = DynQuantity::from(4.0 * Meters).sqrt().unwrap();
        assert_eq!(root_length.dimension().exponent(BaseKind::Length), Exponent::new(1, 2));
        assert_eq!(root_length.dimension().signature(), "meters^(1/2)");
        assert_relative_eq!(root_length.powi(2).unwrap().value(), 4.0);

        let back: Area = area
            .pow(Exponent::new(3, 2))
            .and_then(|q| q.root(3))
            .and_then(|q| q.powi(2))
            .and_then(DynQuantity::try_into_quantity)
            .unwrap();
        assert_relative_eq!(back.value(), 9.0, max_relative = 1e-12);
        assert_eq!(area.root(0), Err(DimensionalError::ZeroDenominator { numerator: 1 }));
    }

    #[test]
    fn exponent_overflow_is_an_error() {
        let huge = DynQuantity::new(
            2.0,
            DimensionVector::from_terms(&[UnitExponent::new(BaseKind::Length, i64::MAX, 1)]),
        );
        assert_eq!(huge.try_mul(huge), Err(DimensionalError::ExponentOverflow));
        assert_eq!(huge.powi(2), Err(DimensionalError::ExponentOverflow));
        assert_eq!(huge.pow(Exponent::integer(-2)), Err(DimensionalError::ExponentOverflow));
        assert!(huge.try_div(huge).unwrap().dimension().is_dimensionless());

        let narrow = DynQuantity::new(1.0, LengthDim::VECTOR.pow(Exponent::new(1, i64::MAX)));
        assert_eq!(narrow.sqrt(), Err(DimensionalError::ExponentOverflow));
        assert_eq!(narrow.root(i64::MIN), Err(DimensionalError::ExponentOverflow));
    }

    #[test]
    fn display_uses_symbols() {
        assert_eq!(DynQuantity::from(4.0 * Newtons).to_string(), "4 kg*m*s^-2");
        assert_eq!(DynQuantity::dimensionless(0.5).to_string(), "0.5");
        assert_eq!(DynQuantity::from(2.0 * Meters).sqrt().unwrap().abs().dimension().symbolic(), "m^(1/2)");
    }
}
