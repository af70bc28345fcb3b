//! Absolute positions on a scale.
//!
//! A [`Point<D>`] is a reading such as a thermometer value: building one from
//! an affine unit applies the unit's full rule, offset included. Points and
//! quantities follow affine-space rules. The difference of two points is a
//! [`Quantity`], a point shifted by a quantity is a point, and two points
//! cannot be added:
//!
//! ```
//! use dimensional::point::Point;
//! use dimensional::units::{Celsius, Fahrenheit, Kelvin};
//!
//! let boiling = Point::new::<Celsius>(100.0);
//! assert!((boiling.value_as::<Fahrenheit>() - 212.0).abs() < 1e-9);
//!
//! let rise = boiling - Point::new::<Kelvin>(273.15);
//! assert!((rise.value_as::<Kelvin>() - 100.0).abs() < 1e-9);
//! ```
//!
//! ```compile_fail
//! use dimensional::point::Point;
//! use dimensional::units::Celsius;
//!
//! let _ = Point::new::<Celsius>(1.0) + Point::new::<Celsius>(2.0);
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::dimension::{Dimension, Signature};
use crate::math::Scalar;
use crate::quantity::Quantity;
use crate::unit::Unit;

/// An absolute reading of dimension `D`, stored in the canonical unit of `D`.
pub struct Point<D: Dimension> {
    value: Scalar,
    dimension: PhantomData<D>,
}

impl<D: Dimension> Point<D> {
    /// Canonical signature of `D`.
    pub const SIGNATURE: Signature = D::SIGNATURE;

    /// The origin of the canonical scale.
    pub const ORIGIN: Self = Self::from_canonical(0.0);

    /// Wraps a reading already expressed on the canonical scale.
    #[must_use]
    pub const fn from_canonical(value: Scalar) -> Self {
        Self {
            value,
            dimension: PhantomData,
        }
    }

    /// Builds a point from a reading in `U`, applying its offset.
    #[must_use]
    pub const fn new<U>(value: Scalar) -> Self
    where
        U: Unit<Dimension = D>,
    {
        Self::from_canonical(U::RULE.apply(value))
    }

    /// Reading on the canonical scale.
    #[must_use]
    pub const fn value(&self) -> Scalar {
        self.value
    }

    /// Reading expressed in `U`.
    #[must_use]
    pub const fn value_as<U>(&self) -> Scalar
    where
        U: Unit<Dimension = D>,
    {
        U::RULE.invert(self.value)
    }

    /// Displacement from the canonical origin.
    #[must_use]
    pub const fn offset_from_origin(&self) -> Quantity<D> {
        Quantity::from_canonical(self.value)
    }
}

impl<D: Dimension> Clone for Point<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension> Copy for Point<D> {}

impl<D: Dimension> fmt::Debug for Point<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Point")
            .field("value", &self.value)
            .field("dimension", &D::SIGNATURE.as_str())
            .finish()
    }
}

impl<D: Dimension> fmt::Display for Point<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.offset_from_origin(), f)
    }
}

impl<D: Dimension> PartialEq for Point<D> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<D: Dimension> PartialOrd for Point<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<D: Dimension> Sub for Point<D> {
    type Output = Quantity<D>;

    fn sub(self, rhs: Self) -> Quantity<D> {
        Quantity::from_canonical(self.value - rhs.value)
    }
}

impl<D: Dimension> Add<Quantity<D>> for Point<D> {
    type Output = Self;

    fn add(self, rhs: Quantity<D>) -> Self {
        Self::from_canonical(self.value + rhs.value())
    }
}

impl<D: Dimension> Sub<Quantity<D>> for Point<D> {
    type Output = Self;

    fn sub(self, rhs: Quantity<D>) -> Self {
        Self::from_canonical(self.value - rhs.value())
    }
}

impl<D: Dimension> Add<Point<D>> for Quantity<D> {
    type Output = Point<D>;

    fn add(self, rhs: Point<D>) -> Point<D> {
        rhs + self
    }
}

impl<D: Dimension> AddAssign<Quantity<D>> for Point<D> {
    fn add_assign(&mut self, rhs: Quantity<D>) {
        self.value += rhs.value();
    }
}

impl<D: Dimension> SubAssign<Quantity<D>> for Point<D> {
    fn sub_assign(&mut self, rhs: Quantity<D>) {
        self.value -= rhs.value();
    }
}

#[cfg(feature = "serde")]
impl<D: Dimension> serde::Serialize for Point<D> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.offset_from_origin().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, D: Dimension> serde::Deserialize<'de> for Point<D> {
    fn deserialize<De: serde::Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        Quantity::<D>::deserialize(deserializer).map(|q| Self::from_canonical(q.value()))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::dimension::TemperatureDim;
    use crate::quantities::{Energy, Temperature};
    use crate::units::{
        Celsius, Fahrenheit, Grams, Joules, JoulesPerGramKelvin, Kelvin, Kilograms, Meters, Rankine,
    };

    type Thermometer = Point<TemperatureDim>;

    #[test]
    fn readings_apply_offsets() {
        let freezing = Thermometer::new::<Celsius>(0.0);
        assert_relative_eq!(freezing.value(), 273.15);
        assert_relative_eq!(freezing.value_as::<Fahrenheit>(), 32.0, max_relative = 1e-12);
        assert_relative_eq!(freezing.value_as::<Rankine>(), 491.67, max_relative = 1e-12);
    }

    #[test]
    fn difference_of_readings_is_a_quantity() {
        let hot = Thermometer::new::<Celsius>(26.85);
        let cold = Thermometer::new::<Kelvin>(100.0);
        let rise: Temperature = hot - cold;
        assert_relative_eq!(rise.value_as::<Kelvin>(), 200.0, max_relative = 1e-12);

        let heat_capacity = 4.184 * JoulesPerGramKelvin;
        let heat: Energy = (2.0 * Kilograms) * heat_capacity * rise;
        assert_relative_eq!(heat.value_as::<Joules>(), 1_673_600.0, max_relative = 1e-9);
        assert_relative_eq!((2000.0 * Grams).value(), 2.0);
    }

    #[test]
    fn shifting_by_quantities() {
        let start = Thermometer::new::<Fahrenheit>(50.0);
        let warmer = start + Temperature::new::<Fahrenheit>(18.0);
        assert_relative_eq!(warmer.value_as::<Celsius>(), 20.0, max_relative = 1e-12);
        assert_relative_eq!((warmer - Temperature::new::<Celsius>(10.0)).value_as::<Celsius>(), 10.0, max_relative = 1e-12);

        let mut p = Temperature::new::<Kelvin>(5.0) + Thermometer::ORIGIN;
        p += Temperature::new::<Kelvin>(5.0);
        p -= Temperature::new::<Kelvin>(2.5);
        assert_relative_eq!(p.value(), 7.5);
        assert!(p < start);
    }

    #[test]
    fn display_matches_quantity() {
        let mark = Point::new::<Meters>(2.0);
        assert_eq!(mark.to_string(), "2 m");
        assert_eq!(Thermometer::SIGNATURE, "kelvin^1");
    }
}
