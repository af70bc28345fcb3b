//! Conversion factors between units of the same dimension.
//!
//! Every unit carries a [`ConversionRule`] that maps a raw value in that unit
//! onto the canonical unit of its dimension: `canonical = raw * slope + offset`.
//! Rules compose, so the rule between any two compatible units is derived at
//! compile time from their individual rules.

use core::marker::PhantomData;

use crate::dimension::Dimension;
use crate::math::{self, Scalar};
use crate::unit::Unit;

/// Affine map `raw -> raw * slope + offset` into a canonical unit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConversionRule {
    slope: Scalar,
    offset: Scalar,
}

impl ConversionRule {
    /// `(1, 0)`: the rule of a canonical unit.
    pub const IDENTITY: Self = Self::affine(1.0, 0.0);

    /// Pure scale factor.
    #[must_use]
    pub const fn linear(slope: Scalar) -> Self {
        Self::affine(slope, 0.0)
    }

    /// Scale factor followed by a shift.
    #[must_use]
    pub const fn affine(slope: Scalar, offset: Scalar) -> Self {
        Self { slope, offset }
    }

    /// Multiplier applied to raw values.
    #[must_use]
    pub const fn slope(&self) -> Scalar {
        self.slope
    }

    /// Shift added after scaling.
    #[must_use]
    pub const fn offset(&self) -> Scalar {
        self.offset
    }

    /// `true` when the offset is zero.
    #[must_use]
    pub const fn is_linear(&self) -> bool {
        self.offset == 0.0
    }

    /// Applies `self`, then `next`.
    #[must_use]
    pub const fn then(self, next: Self) -> Self {
        Self {
            slope: self.slope * next.slope,
            offset: self.offset * next.slope + next.offset,
        }
    }

    /// The rule undoing `self`.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self {
            slope: 1.0 / self.slope,
            offset: -self.offset / self.slope,
        }
    }

    /// Rule from the unit described by `self` to the unit described by `target`,
    /// both expressed against the same canonical unit.
    ///
    /// For linear rules this reduces to `self.slope / target.slope`.
    #[must_use]
    pub const fn between(self, target: Self) -> Self {
        self.then(target.inverse())
    }

    /// Slope raised to `n`; the offset is dropped.
    ///
    /// Only meaningful for linear rules, which is all compound units accept.
    #[must_use]
    pub const fn powi(self, n: i32) -> Self {
        Self::linear(math::powi(self.slope, n))
    }

    /// Rule of a product of two linear units.
    #[must_use]
    pub const fn product(self, other: Self) -> Self {
        Self::linear(self.slope * other.slope)
    }

    /// Maps an absolute raw reading into the canonical unit.
    #[must_use]
    pub const fn apply(&self, raw: Scalar) -> Scalar {
        raw * self.slope + self.offset
    }

    /// Maps an absolute canonical value back into the raw unit.
    #[must_use]
    pub const fn invert(&self, canonical: Scalar) -> Scalar {
        (canonical - self.offset) / self.slope
    }

    /// Maps a difference between two readings; the offset cancels.
    #[must_use]
    pub const fn apply_interval(&self, raw: Scalar) -> Scalar {
        raw * self.slope
    }

    /// Inverse of [`ConversionRule::apply_interval`].
    #[must_use]
    pub const fn invert_interval(&self, canonical: Scalar) -> Scalar {
        canonical / self.slope
    }
}

impl Default for ConversionRule {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Rule for a unit declared as `factor` times `Ref`.
///
/// `Ref` must already measure `D`, so declaring a unit against a reference of
/// another dimension is rejected by the compiler.
#[must_use]
pub const fn scaled<Ref, D>(factor: Scalar) -> ConversionRule
where
    Ref: Unit<Dimension = D>,
    D: Dimension,
{
    ConversionRule::linear(factor).then(Ref::RULE)
}

/// Rule for a unit whose readings map onto `Ref` as `raw * slope + offset`.
#[must_use]
pub const fn shifted<Ref, D>(slope: Scalar, offset: Scalar) -> ConversionRule
where
    Ref: Unit<Dimension = D>,
    D: Dimension,
{
    ConversionRule::affine(slope, offset).then(Ref::RULE)
}

/// Compile-time conversion between two units of the same dimension.
///
/// ```
/// use dimensional::conversion::Conversion;
/// use dimensional::units::{Kilometers, Miles};
///
/// let rule = Conversion::<Miles, Kilometers>::RULE;
/// assert!((rule.apply(1.0) - 1.609_344).abs() < 1e-12);
/// ```
///
/// Units of different dimensions have no conversion:
///
/// ```compile_fail
/// use dimensional::conversion::Conversion;
/// use dimensional::units::{Meters, Seconds};
///
/// let _ = Conversion::<Meters, Seconds>::RULE;
/// ```
pub struct Conversion<From, To>(PhantomData<fn() -> (From, To)>);

impl<From, To> Conversion<From, To>
where
    From: Unit,
    To: Unit<Dimension = From::Dimension>,
{
    /// Maps raw `From` readings onto raw `To` readings.
    pub const RULE: ConversionRule = From::RULE.between(To::RULE);
}

/// Function form of [`Conversion::RULE`].
#[must_use]
pub const fn resolve<From, To>() -> ConversionRule
where
    From: Unit,
    To: Unit<Dimension = From::Dimension>,
{
    Conversion::<From, To>::RULE
}

/// Converts an absolute reading, applying offsets.
#[must_use]
pub const fn convert<From, To>(raw: Scalar) -> Scalar
where
    From: Unit,
    To: Unit<Dimension = From::Dimension>,
{
    resolve::<From, To>().apply(raw)
}

/// Converts a difference between readings, ignoring offsets.
#[must_use]
pub const fn convert_interval<From, To>(raw: Scalar) -> Scalar
where
    From: Unit,
    To: Unit<Dimension = From::Dimension>,
{
    resolve::<From, To>().apply_interval(raw)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::units::{
        Atmospheres, Bar, Celsius, Fahrenheit, Feet, Hours, Kelvin, Kilometers, KilometersPerHour,
        Meters, MetersPerSecond, Miles, Pascals, Rankine, Torr,
    };

    #[test]
    fn composition_is_associative() {
        let a = ConversionRule::affine(2.0, 3.0);
        let b = ConversionRule::affine(0.5, -1.0);
        let c = ConversionRule::affine(4.0, 0.25);
        let left = a.then(b).then(c);
        let right = a.then(b.then(c));
        assert_relative_eq!(left.slope(), right.slope());
        assert_relative_eq!(left.offset(), right.offset());
    }

    #[test]
    fn inverse_round_trips() {
        let rule = ConversionRule::affine(1.8, 32.0);
        let round = rule.then(rule.inverse());
        assert_relative_eq!(round.slope(), 1.0, max_relative = 1e-12);
        assert_relative_eq!(round.offset(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(rule.invert(rule.apply(37.0)), 37.0, max_relative = 1e-12);
    }

    #[test]
    fn linear_between_is_ratio_of_slopes() {
        assert_relative_eq!(Conversion::<Kilometers, Miles>::RULE.slope(), 1000.0 / 1609.344, max_relative = 1e-12);
        assert_relative_eq!(Conversion::<Feet, Meters>::RULE.slope(), 0.3048);
        assert!(Conversion::<Hours, Hours>::RULE.is_linear());
    }

    #[test]
    fn affine_temperatures() {
        assert_relative_eq!(convert::<Celsius, Fahrenheit>(100.0), 212.0, max_relative = 1e-12);
        assert_relative_eq!(convert::<Fahrenheit, Kelvin>(32.0), 273.15, max_relative = 1e-12);
        assert_relative_eq!(convert::<Kelvin, Celsius>(0.0), -273.15, max_relative = 1e-12);
        assert_relative_eq!(convert::<Rankine, Kelvin>(9.0), 5.0, max_relative = 1e-12);
        assert_relative_eq!(convert_interval::<Celsius, Fahrenheit>(10.0), 18.0, max_relative = 1e-12);
    }

    #[test]
    fn compound_units_fold_their_terms() {
        assert_relative_eq!(
            Conversion::<KilometersPerHour, MetersPerSecond>::RULE.slope(),
            1.0 / 3.6,
            max_relative = 1e-12
        );
        assert_relative_eq!(convert::<Atmospheres, Pascals>(1.0), 101_325.0);
        assert_relative_eq!(convert::<Pascals, Bar>(1.0), 1e-5, epsilon = 1e-12);
        assert_relative_eq!(convert::<Atmospheres, Torr>(1.0), 760.0, max_relative = 1e-12);
    }
}
