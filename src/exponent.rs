//! Base kinds and rational exponents.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use crate::errors::{DimensionalError, Result};
use crate::literal::const_str_cmp;
use crate::math::gcd_unsigned;

/// The seven base kinds every dimension is built from.
///
/// The declaration order is the slot order of a
/// [`DimensionVector`](crate::dimension::DimensionVector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaseKind {
    /// Mass, canonically kilograms.
    Mass,
    /// Length, canonically meters.
    Length,
    /// Time, canonically seconds.
    Time,
    /// Thermodynamic temperature, canonically kelvin.
    Temperature,
    /// Electric charge, canonically coulombs.
    Charge,
    /// Amount of substance, canonically moles.
    Amount,
    /// Plane angle, canonically radians.
    Angle,
}

impl BaseKind {
    /// Number of base kinds.
    pub const COUNT: usize = 7;

    /// All kinds in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Mass,
        Self::Length,
        Self::Time,
        Self::Temperature,
        Self::Charge,
        Self::Amount,
        Self::Angle,
    ];

    /// Slot index in declaration order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Name of the canonical internal unit.
    #[must_use]
    pub const fn canonical_unit(self) -> &'static str {
        match self {
            Self::Mass => "kilograms",
            Self::Length => "meters",
            Self::Time => "seconds",
            Self::Temperature => "kelvin",
            Self::Charge => "coulombs",
            Self::Amount => "moles",
            Self::Angle => "radians",
        }
    }

    /// Symbol of the canonical internal unit.
    #[must_use]
    pub const fn canonical_symbol(self) -> &'static str {
        match self {
            Self::Mass => "kg",
            Self::Length => "m",
            Self::Time => "s",
            Self::Temperature => "K",
            Self::Charge => "C",
            Self::Amount => "mol",
            Self::Angle => "rad",
        }
    }

    /// Orders kinds by the name of their canonical unit.
    #[must_use]
    pub const fn signature_cmp(self, other: Self) -> Ordering {
        const_str_cmp(self.canonical_unit(), other.canonical_unit())
    }
}

impl fmt::Display for BaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mass => "mass",
            Self::Length => "length",
            Self::Time => "time",
            Self::Temperature => "temperature",
            Self::Charge => "charge",
            Self::Amount => "amount",
            Self::Angle => "angle",
        };
        f.write_str(name)
    }
}

/// A rational exponent, always reduced with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(i64, i64)", into = "(i64, i64)")
)]
pub struct Exponent {
    num: i64,
    den: i64,
}

impl Exponent {
    /// `0/1`.
    pub const ZERO: Self = Self { num: 0, den: 1 };
    /// `1/1`.
    pub const ONE: Self = Self { num: 1, den: 1 };

    /// Builds `num/den` in reduced form.
    ///
    /// # Panics
    ///
    /// Panics when `den == 0`; in a `const` item this is a compilation error.
    ///
    /// ```compile_fail
    /// use dimensional::exponent::Exponent;
    /// const BROKEN: Exponent = Exponent::new(1, 0);
    /// ```
    #[must_use]
    pub const fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "exponent denominator must be non-zero");
        Self::reduced(num as i128, den as i128)
    }

    /// Runtime counterpart of [`Exponent::new`].
    ///
    /// # Errors
    ///
    /// Returns [`DimensionalError::ZeroDenominator`] when `den == 0`, and
    /// [`DimensionalError::ExponentOverflow`] when the reduced form does not fit
    /// in `i64` (only `i64::MIN` over a negative denominator).
    pub fn try_new(num: i64, den: i64) -> Result<Self> {
        if den == 0 {
            return Err(DimensionalError::ZeroDenominator { numerator: num });
        }
        Self::checked_reduced(num as i128, den as i128).ok_or(DimensionalError::ExponentOverflow)
    }

    /// Whole-number exponent.
    #[must_use]
    pub const fn integer(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    const fn reduced(num: i128, den: i128) -> Self {
        match Self::checked_reduced(num, den) {
            Some(exponent) => exponent,
            None => panic!("exponent overflows i64"),
        }
    }

    /// Reduces `num/den` to lowest terms with a positive denominator, or
    /// `None` when either part leaves the `i64` range or `den == 0`.
    const fn checked_reduced(num: i128, den: i128) -> Option<Self> {
        if den == 0 {
            return None;
        }
        let negative = (num < 0) != (den < 0);
        let divisor = gcd_unsigned(num.unsigned_abs(), den.unsigned_abs());
        let magnitude = num.unsigned_abs() / divisor;
        let den = den.unsigned_abs() / divisor;
        if den > i64::MAX as u128 || magnitude > i64::MIN.unsigned_abs() as u128 {
            return None;
        }
        let num = if negative {
            -(magnitude as i128)
        } else {
            magnitude as i128
        };
        if num > i64::MAX as i128 {
            return None;
        }
        Some(Self {
            num: num as i64,
            den: den as i64,
        })
    }

    /// Sum of two exponents, or `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        let lhs = self.num as i128 * other.den as i128;
        let rhs = other.num as i128 * self.den as i128;
        match lhs.checked_add(rhs) {
            Some(num) => Self::checked_reduced(num, self.den as i128 * other.den as i128),
            None => None,
        }
    }

    /// Product of two exponents, or `None` on overflow.
    #[must_use]
    pub const fn checked_mul(self, other: Self) -> Option<Self> {
        Self::checked_reduced(
            self.num as i128 * other.num as i128,
            self.den as i128 * other.den as i128,
        )
    }

    /// Negated exponent, or `None` for a numerator of `i64::MIN`.
    #[must_use]
    pub const fn checked_neg(self) -> Option<Self> {
        Self::checked_reduced(-(self.num as i128), self.den as i128)
    }

    /// Reduced numerator.
    #[must_use]
    pub const fn numerator(self) -> i64 {
        self.num
    }

    /// Reduced denominator, always positive.
    #[must_use]
    pub const fn denominator(self) -> i64 {
        self.den
    }

    /// Sum of two exponents.
    ///
    /// # Panics
    ///
    /// Panics on overflow; use [`Exponent::checked_add`] on runtime input.
    #[must_use]
    pub const fn add(self, other: Self) -> Self {
        match self.checked_add(other) {
            Some(sum) => sum,
            None => panic!("exponent overflows i64"),
        }
    }

    /// Difference of two exponents.
    ///
    /// # Panics
    ///
    /// Panics on overflow.
    #[must_use]
    pub const fn sub(self, other: Self) -> Self {
        self.add(other.neg())
    }

    /// Negated exponent.
    ///
    /// # Panics
    ///
    /// Panics for a numerator of `i64::MIN`.
    #[must_use]
    pub const fn neg(self) -> Self {
        match self.checked_neg() {
            Some(negated) => negated,
            None => panic!("exponent overflows i64"),
        }
    }

    /// Product of two exponents.
    ///
    /// # Panics
    ///
    /// Panics on overflow; use [`Exponent::checked_mul`] on runtime input.
    #[must_use]
    pub const fn mul(self, other: Self) -> Self {
        match self.checked_mul(other) {
            Some(product) => product,
            None => panic!("exponent overflows i64"),
        }
    }

    /// Divides the exponent by a non-zero integer, as taking an `n`-th root does.
    ///
    /// # Panics
    ///
    /// Panics when `n == 0`.
    #[must_use]
    pub const fn div_int(self, n: i64) -> Self {
        assert!(n != 0, "exponent denominator must be non-zero");
        Self::reduced(self.num as i128, self.den as i128 * n as i128)
    }

    /// `true` for `0/1`.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    /// `true` when the denominator is one.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        self.den == 1
    }

    /// Floating-point value of the exponent.
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Equality usable in `const` contexts.
    #[must_use]
    pub const fn const_eq(self, other: Self) -> bool {
        self.num == other.num && self.den == other.den
    }
}

impl Default for Exponent {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialOrd for Exponent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Exponent {
    fn cmp(&self, other: &Self) -> Ordering {
        (i128::from(self.num) * i128::from(other.den)).cmp(&(i128::from(other.num) * i128::from(self.den)))
    }
}

impl Add for Exponent {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::add(self, rhs)
    }
}

impl Sub for Exponent {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::sub(self, rhs)
    }
}

impl Mul for Exponent {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::mul(self, rhs)
    }
}

impl Neg for Exponent {
    type Output = Self;

    fn neg(self) -> Self {
        Self::neg(self)
    }
}

impl From<i64> for Exponent {
    fn from(n: i64) -> Self {
        Self::integer(n)
    }
}

impl TryFrom<(i64, i64)> for Exponent {
    type Error = DimensionalError;

    fn try_from((num, den): (i64, i64)) -> Result<Self> {
        Self::try_new(num, den)
    }
}

impl From<Exponent> for (i64, i64) {
    fn from(e: Exponent) -> Self {
        (e.num, e.den)
    }
}

impl fmt::Display for Exponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "({}/{})", self.num, self.den)
        }
    }
}

/// One base kind raised to a rational power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitExponent {
    kind: BaseKind,
    exponent: Exponent,
}

impl UnitExponent {
    /// `kind^(num/den)`.
    ///
    /// # Panics
    ///
    /// Panics when `den == 0`.
    #[must_use]
    pub const fn new(kind: BaseKind, num: i64, den: i64) -> Self {
        Self {
            kind,
            exponent: Exponent::new(num, den),
        }
    }

    /// Pairs a kind with an already built exponent.
    #[must_use]
    pub const fn with_exponent(kind: BaseKind, exponent: Exponent) -> Self {
        Self { kind, exponent }
    }

    /// The base kind.
    #[must_use]
    pub const fn kind(self) -> BaseKind {
        self.kind
    }

    /// The exponent.
    #[must_use]
    pub const fn exponent(self) -> Exponent {
        self.exponent
    }

    /// Same kind, negated exponent.
    #[must_use]
    pub const fn negate(self) -> Self {
        Self {
            kind: self.kind,
            exponent: self.exponent.neg(),
        }
    }

    /// Adds the exponents of two descriptors of the same kind.
    ///
    /// Returns `None` when the kinds differ.
    #[must_use]
    pub const fn combine(self, other: Self) -> Option<Self> {
        if self.kind as usize != other.kind as usize {
            return None;
        }
        Some(Self {
            kind: self.kind,
            exponent: self.exponent.add(other.exponent),
        })
    }

    /// Multiplies the exponent by `n`.
    #[must_use]
    pub const fn powi(self, n: i64) -> Self {
        Self {
            kind: self.kind,
            exponent: self.exponent.mul(Exponent::integer(n)),
        }
    }
}

impl fmt::Display for UnitExponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}^{}", self.kind.canonical_unit(), self.exponent)
    }
}
