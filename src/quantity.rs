//! Typed physical quantities.
//!
//! A [`Quantity<D>`] is a single `f64` holding the magnitude in the canonical
//! unit of `D`. The dimension lives only in the type, so a quantity is as cheap
//! as the bare float and every dimensional mistake is a type error:
//!
//! ```
//! use dimensional::quantities::{Acceleration, Force, Mass};
//! use dimensional::units::{Kilograms, MetersPerSecondSquared, Newtons};
//!
//! let m = Mass::new::<Kilograms>(2.0);
//! let a = Acceleration::new::<MetersPerSecondSquared>(2.0);
//! let f: Force = m * a;
//! assert_eq!(f.value_as::<Newtons>(), 4.0);
//! ```
//!
//! ```compile_fail
//! use dimensional::units::{Meters, Seconds};
//!
//! let _ = 1.0 * Meters + 1.0 * Seconds;
//! ```
//!
//! ```compile_fail
//! use dimensional::quantities::Force;
//! use dimensional::units::{Kilograms, Meters};
//!
//! let _: Force = (2.0 * Kilograms) * (3.0 * Meters);
//! ```
//!
//! ```compile_fail
//! use dimensional::units::{Meters, Seconds};
//!
//! let _ = (1.0 * Meters).value_as::<Seconds>();
//! ```
//!
//! Quantities are differences: building one from an affine unit applies only
//! the unit's scale. Absolute readings are [`Point`](crate::point::Point)s.

use core::cmp::Ordering;
use core::fmt;
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use typenum::{Integer, P2, P3};

use crate::dimension::{
    AngleDim, DimInverse, DimPower, DimProduct, DimQuotient, DimRoot, Dimension, DimensionVector,
    Dimensionless, DivDim, InvDim, MulDim, PowDim, RootDim, Signature,
};
use crate::math::Scalar;
use crate::unit::Unit;

/// A magnitude of dimension `D`, stored in the canonical unit of `D`.
pub struct Quantity<D: Dimension> {
    value: Scalar,
    dimension: PhantomData<D>,
}

impl<D: Dimension> Quantity<D> {
    /// Canonical signature of `D`, e.g. `kilograms^1|meters^1|seconds^-2`.
    pub const SIGNATURE: Signature = D::SIGNATURE;

    /// Hash of [`Quantity::SIGNATURE`].
    pub const FINGERPRINT: u32 = D::FINGERPRINT;

    /// Zero in any unit.
    pub const ZERO: Self = Self::from_canonical(0.0);

    /// Wraps a magnitude already expressed in the canonical unit of `D`.
    #[must_use]
    pub const fn from_canonical(value: Scalar) -> Self {
        Self {
            value,
            dimension: PhantomData,
        }
    }

    /// Builds a quantity from a reading in `U`.
    #[must_use]
    pub const fn new<U>(value: Scalar) -> Self
    where
        U: Unit<Dimension = D>,
    {
        Self::from_canonical(U::RULE.apply_interval(value))
    }

    /// Same as [`Quantity::new`], with the unit passed as a value.
    #[must_use]
    pub fn of<U>(value: Scalar, _unit: U) -> Self
    where
        U: Unit<Dimension = D>,
    {
        Self::new::<U>(value)
    }

    /// Magnitude in the canonical unit.
    #[must_use]
    pub const fn value(&self) -> Scalar {
        self.value
    }

    /// Magnitude expressed in `U`.
    #[must_use]
    pub const fn value_as<U>(&self) -> Scalar
    where
        U: Unit<Dimension = D>,
    {
        U::RULE.invert_interval(self.value)
    }

    /// The dimension as a value.
    #[must_use]
    pub const fn dimension(&self) -> DimensionVector {
        D::VECTOR
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(self) -> Self {
        Self::from_canonical(self.value.abs())
    }

    /// `sqrt(self² + other²)` without intermediate overflow.
    #[must_use]
    pub fn hypot(self, other: Self) -> Self {
        Self::from_canonical(self.value.hypot(other.value))
    }

    /// The smaller of two quantities; NaN loses.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::from_canonical(self.value.min(other.value))
    }

    /// The larger of two quantities; NaN loses.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::from_canonical(self.value.max(other.value))
    }

    /// Restricts `self` to `[lo, hi]`. When `lo > hi` the result is `hi`.
    #[must_use]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    /// Integer power; the exponent is a `typenum` integer so the output
    /// dimension is known statically.
    ///
    /// ```
    /// use typenum::P3;
    /// use dimensional::units::{Meters, CubicMeters};
    ///
    /// let volume = (2.0 * Meters).powi(P3::new());
    /// assert_eq!(volume.value_as::<CubicMeters>(), 8.0);
    /// ```
    #[must_use]
    pub fn powi<E>(self, _exponent: E) -> Quantity<DimPower<D, E>>
    where
        E: Integer,
        D: PowDim<E>,
    {
        Quantity::from_canonical(self.value.powi(E::I32))
    }

    /// Square root; only defined when every exponent of `D` is even.
    ///
    /// ```compile_fail
    /// use dimensional::units::Meters;
    ///
    /// let _ = (4.0 * Meters).sqrt();
    /// ```
    #[must_use]
    pub fn sqrt(self) -> Quantity<DimRoot<D, P2>>
    where
        D: RootDim<P2>,
    {
        Quantity::from_canonical(self.value.sqrt())
    }

    /// Cube root; only defined when every exponent of `D` is a multiple of three.
    #[must_use]
    pub fn cbrt(self) -> Quantity<DimRoot<D, P3>>
    where
        D: RootDim<P3>,
    {
        Quantity::from_canonical(self.value.cbrt())
    }

    /// Rounds down to a whole number of `U`.
    #[must_use]
    pub fn floor_in<U>(self) -> Self
    where
        U: Unit<Dimension = D>,
    {
        Self::new::<U>(self.value_as::<U>().floor())
    }

    /// Rounds up to a whole number of `U`.
    #[must_use]
    pub fn ceil_in<U>(self) -> Self
    where
        U: Unit<Dimension = D>,
    {
        Self::new::<U>(self.value_as::<U>().ceil())
    }

    /// Rounds to the nearest whole number of `U`, half away from zero.
    #[must_use]
    pub fn round_in<U>(self) -> Self
    where
        U: Unit<Dimension = D>,
    {
        Self::new::<U>(self.value_as::<U>().round())
    }

    /// Drops the fractional part of the magnitude in `U`, rounding toward zero.
    #[must_use]
    pub fn trunc_in<U>(self) -> Self
    where
        U: Unit<Dimension = D>,
    {
        Self::new::<U>(self.value_as::<U>().trunc())
    }

    /// The part of the magnitude in `U` left after [`Quantity::trunc_in`].
    #[must_use]
    pub fn fract_in<U>(self) -> Self
    where
        U: Unit<Dimension = D>,
    {
        Self::new::<U>(self.value_as::<U>().fract())
    }

    /// Splits the magnitude in `U` into `(whole, fraction)`, both carrying the
    /// sign of `self`.
    #[must_use]
    pub fn modf_in<U>(self) -> (Self, Self)
    where
        U: Unit<Dimension = D>,
    {
        let raw = self.value_as::<U>();
        (Self::new::<U>(raw.trunc()), Self::new::<U>(raw.fract()))
    }

    /// Four-quadrant angle of the vector `(other, self)`.
    #[must_use]
    pub fn atan2(self, other: Self) -> Quantity<AngleDim> {
        Quantity::from_canonical(self.value.atan2(other.value))
    }

    /// `true` when the magnitude is neither infinite nor NaN.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}

impl Quantity<AngleDim> {
    /// Sine of the angle.
    #[must_use]
    pub fn sin(self) -> Scalar {
        self.value.sin()
    }

    /// Cosine of the angle.
    #[must_use]
    pub fn cos(self) -> Scalar {
        self.value.cos()
    }

    /// Tangent of the angle.
    #[must_use]
    pub fn tan(self) -> Scalar {
        self.value.tan()
    }
}

impl Quantity<Dimensionless> {
    /// Arcsine, as an angle.
    #[must_use]
    pub fn asin(self) -> Quantity<AngleDim> {
        Quantity::from_canonical(self.value.asin())
    }

    /// Arccosine, as an angle.
    #[must_use]
    pub fn acos(self) -> Quantity<AngleDim> {
        Quantity::from_canonical(self.value.acos())
    }

    /// Arctangent, as an angle.
    #[must_use]
    pub fn atan(self) -> Quantity<AngleDim> {
        Quantity::from_canonical(self.value.atan())
    }
}

impl From<Quantity<Dimensionless>> for Scalar {
    fn from(q: Quantity<Dimensionless>) -> Self {
        q.value
    }
}

impl From<Scalar> for Quantity<Dimensionless> {
    fn from(value: Scalar) -> Self {
        Self::from_canonical(value)
    }
}

impl<D: Dimension> Clone for Quantity<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension> Copy for Quantity<D> {}

impl<D: Dimension> Default for Quantity<D> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<D: Dimension> fmt::Debug for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("value", &self.value)
            .field("dimension", &D::SIGNATURE.as_str())
            .finish()
    }
}

/// Prints the canonical magnitude followed by the canonical unit symbols,
/// e.g. `4 kg*m*s^-2`. Formatting flags apply to the number.
impl<D: Dimension> fmt::Display for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        if !D::VECTOR.is_dimensionless() {
            write!(f, " {}", D::VECTOR.symbolic())?;
        }
        Ok(())
    }
}

impl<D: Dimension> PartialEq for Quantity<D> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<D: Dimension> PartialOrd for Quantity<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<D: Dimension> Add for Quantity<D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_canonical(self.value + rhs.value)
    }
}

impl<D: Dimension> Sub for Quantity<D> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_canonical(self.value - rhs.value)
    }
}

impl<D: Dimension> Rem for Quantity<D> {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        Self::from_canonical(self.value % rhs.value)
    }
}

impl<D: Dimension> AddAssign for Quantity<D> {
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<D: Dimension> SubAssign for Quantity<D> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}

impl<D: Dimension> RemAssign for Quantity<D> {
    fn rem_assign(&mut self, rhs: Self) {
        self.value %= rhs.value;
    }
}

impl<D: Dimension> Neg for Quantity<D> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_canonical(-self.value)
    }
}

impl<L, R> Mul<Quantity<R>> for Quantity<L>
where
    L: MulDim<R>,
    R: Dimension,
{
    type Output = Quantity<DimProduct<L, R>>;

    fn mul(self, rhs: Quantity<R>) -> Self::Output {
        Quantity::from_canonical(self.value * rhs.value)
    }
}

impl<L, R> Div<Quantity<R>> for Quantity<L>
where
    L: DivDim<R>,
    R: Dimension,
{
    type Output = Quantity<DimQuotient<L, R>>;

    fn div(self, rhs: Quantity<R>) -> Self::Output {
        Quantity::from_canonical(self.value / rhs.value)
    }
}

impl<D: Dimension> Mul<Scalar> for Quantity<D> {
    type Output = Self;

    fn mul(self, rhs: Scalar) -> Self {
        Self::from_canonical(self.value * rhs)
    }
}

impl<D: Dimension> Div<Scalar> for Quantity<D> {
    type Output = Self;

    fn div(self, rhs: Scalar) -> Self {
        Self::from_canonical(self.value / rhs)
    }
}

impl<D: Dimension> MulAssign<Scalar> for Quantity<D> {
    fn mul_assign(&mut self, rhs: Scalar) {
        self.value *= rhs;
    }
}

impl<D: Dimension> DivAssign<Scalar> for Quantity<D> {
    fn div_assign(&mut self, rhs: Scalar) {
        self.value /= rhs;
    }
}

impl<D: Dimension> Mul<Quantity<D>> for Scalar {
    type Output = Quantity<D>;

    fn mul(self, rhs: Quantity<D>) -> Quantity<D> {
        Quantity::from_canonical(self * rhs.value)
    }
}

impl<D: InvDim> Div<Quantity<D>> for Scalar {
    type Output = Quantity<DimInverse<D>>;

    fn div(self, rhs: Quantity<D>) -> Self::Output {
        Quantity::from_canonical(self / rhs.value)
    }
}

impl<D: Dimension> Sum for Quantity<D> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::from_canonical(iter.map(|q| q.value).sum())
    }
}

impl<'a, D: Dimension> Sum<&'a Self> for Quantity<D> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<D: Dimension> AbsDiffEq for Quantity<D> {
    type Epsilon = Scalar;

    fn default_epsilon() -> Scalar {
        Scalar::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Scalar) -> bool {
        self.value.abs_diff_eq(&other.value, epsilon)
    }
}

impl<D: Dimension> RelativeEq for Quantity<D> {
    fn default_max_relative() -> Scalar {
        Scalar::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Scalar, max_relative: Scalar) -> bool {
        self.value.relative_eq(&other.value, epsilon, max_relative)
    }
}

impl<D: Dimension> UlpsEq for Quantity<D> {
    fn default_max_ulps() -> u32 {
        Scalar::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Scalar, max_ulps: u32) -> bool {
        self.value.ulps_eq(&other.value, epsilon, max_ulps)
    }
}

/// Wire form of a quantity: the canonical magnitude plus the fingerprint of
/// its dimension signature.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
pub(crate) struct Fingerprinted {
    pub(crate) value: Scalar,
    pub(crate) fingerprint: u32,
}

#[cfg(feature = "serde")]
impl Fingerprinted {
    pub(crate) fn verify<D: Dimension>(self) -> crate::errors::Result<Scalar> {
        if self.fingerprint == D::FINGERPRINT {
            Ok(self.value)
        } else {
            Err(crate::errors::DimensionalError::SignatureMismatch {
                expected: D::FINGERPRINT,
                found: self.fingerprint,
            })
        }
    }
}

#[cfg(feature = "serde")]
impl<D: Dimension> serde::Serialize for Quantity<D> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Fingerprinted {
            value: self.value,
            fingerprint: D::FINGERPRINT,
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, D: Dimension> serde::Deserialize<'de> for Quantity<D> {
    fn deserialize<De: serde::Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let wire = Fingerprinted::deserialize(deserializer)?;
        wire.verify::<D>()
            .map(Self::from_canonical)
            .map_err(serde::de::Error::custom)
    }
}
