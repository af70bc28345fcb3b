//! Dimension vectors at the value level and the type level.
//!
//! [`DimensionVector`] is a plain `Copy` value with one rational exponent per
//! [`BaseKind`]; every operation on it is a `const fn`, so signatures and
//! compatibility checks can be folded into constants.
//!
//! [`Dim`] carries the same information in its type parameters as `typenum`
//! integers. Multiplying or dividing two quantities computes the output type
//! through [`MulDim`]/[`DivDim`], and because `typenum` integers have a single
//! representation per value, two dimensions are compatible exactly when their
//! types are equal. Rational exponents (`m^(1/2)`) exist only at the value level.

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, Mul, Neg, Sub};

use typenum::{Diff, Integer, Negate, PartialDiv, PartialQuot, Prod, Sum, N1, P1, Z0};

use crate::exponent::{BaseKind, Exponent, UnitExponent};
use crate::literal::FixedStr;

/// Byte capacity of a rendered [`Signature`].
///
/// Seven terms of the form `kilograms^(-9223372036854775808/9223372036854775807)`
/// plus six separators fit with room to spare.
pub const SIGNATURE_CAPACITY: usize = 512;

/// Canonical textual form of a dimension, e.g. `kilograms^1|meters^1|seconds^-2`.
pub type Signature = FixedStr<SIGNATURE_CAPACITY>;

/// Separator between the terms of a [`Signature`].
pub const SIGNATURE_SEPARATOR: u8 = b'|';

/// Base kinds sorted by the name of their canonical unit.
///
/// Terms of a signature always appear in this order.
pub const CANONICAL_ORDER: [BaseKind; BaseKind::COUNT] = sort_by_canonical_name(BaseKind::ALL);

const fn sort_by_canonical_name(mut kinds: [BaseKind; BaseKind::COUNT]) -> [BaseKind; BaseKind::COUNT] {
    let mut i = 1;
    while i < kinds.len() {
        let mut j = i;
        while j > 0 && matches!(kinds[j - 1].signature_cmp(kinds[j]), Ordering::Greater) {
            let held = kinds[j];
            kinds[j] = kinds[j - 1];
            kinds[j - 1] = held;
            j -= 1;
        }
        i += 1;
    }
    kinds
}

/// Exponents of the seven base kinds, indexed by [`BaseKind::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensionVector([Exponent; BaseKind::COUNT]);

impl DimensionVector {
    /// The empty product.
    pub const DIMENSIONLESS: Self = Self([Exponent::ZERO; BaseKind::COUNT]);

    /// A single base kind to the first power.
    #[must_use]
    pub const fn of(kind: BaseKind) -> Self {
        let mut slots = [Exponent::ZERO; BaseKind::COUNT];
        slots[kind.index()] = Exponent::ONE;
        Self(slots)
    }

    /// Integer exponents in [`BaseKind`] declaration order.
    #[must_use]
    pub const fn from_integers(exponents: [i64; BaseKind::COUNT]) -> Self {
        let mut slots = [Exponent::ZERO; BaseKind::COUNT];
        let mut i = 0;
        while i < BaseKind::COUNT {
            slots[i] = Exponent::integer(exponents[i]);
            i += 1;
        }
        Self(slots)
    }

    /// Sums descriptors into a vector; repeated kinds accumulate.
    #[must_use]
    pub const fn from_terms(terms: &[UnitExponent]) -> Self {
        let mut slots = [Exponent::ZERO; BaseKind::COUNT];
        let mut i = 0;
        while i < terms.len() {
            let index = terms[i].kind().index();
            slots[index] = slots[index].add(terms[i].exponent());
            i += 1;
        }
        Self(slots)
    }

    /// Exponent of `kind`; zero when the kind is absent.
    #[must_use]
    pub const fn exponent(&self, kind: BaseKind) -> Exponent {
        self.0[kind.index()]
    }

    /// Per-kind sum of exponents: the dimension of a product.
    #[must_use]
    pub const fn combine(self, other: Self) -> Self {
        let mut slots = self.0;
        let mut i = 0;
        while i < BaseKind::COUNT {
            slots[i] = slots[i].add(other.0[i]);
            i += 1;
        }
        Self(slots)
    }

    /// Every exponent negated: the dimension of a reciprocal.
    #[must_use]
    pub const fn invert(self) -> Self {
        self.pow(Exponent::integer(-1))
    }

    /// Dimension of a quotient.
    #[must_use]
    pub const fn divide(self, other: Self) -> Self {
        self.combine(other.invert())
    }

    /// Every exponent multiplied by `power`.
    #[must_use]
    pub const fn pow(self, power: Exponent) -> Self {
        let mut slots = self.0;
        let mut i = 0;
        while i < BaseKind::COUNT {
            slots[i] = slots[i].mul(power);
            i += 1;
        }
        Self(slots)
    }

    /// [`DimensionVector::combine`], or `None` when an exponent overflows.
    #[must_use]
    pub const fn checked_combine(self, other: Self) -> Option<Self> {
        let mut slots = self.0;
        let mut i = 0;
        while i < BaseKind::COUNT {
            slots[i] = match slots[i].checked_add(other.0[i]) {
                Some(exponent) => exponent,
                None => return None,
            };
            i += 1;
        }
        Some(Self(slots))
    }

    /// [`DimensionVector::divide`], or `None` when an exponent overflows.
    #[must_use]
    pub const fn checked_divide(self, other: Self) -> Option<Self> {
        match other.checked_pow(Exponent::integer(-1)) {
            Some(inverse) => self.checked_combine(inverse),
            None => None,
        }
    }

    /// [`DimensionVector::pow`], or `None` when an exponent overflows.
    #[must_use]
    pub const fn checked_pow(self, power: Exponent) -> Option<Self> {
        let mut slots = self.0;
        let mut i = 0;
        while i < BaseKind::COUNT {
            slots[i] = match slots[i].checked_mul(power) {
                Some(exponent) => exponent,
                None => return None,
            };
            i += 1;
        }
        Some(Self(slots))
    }

    /// Integer power.
    #[must_use]
    pub const fn powi(self, n: i64) -> Self {
        self.pow(Exponent::integer(n))
    }

    /// `n`-th root; exponents may become fractional.
    ///
    /// # Panics
    ///
    /// Panics when `n == 0`.
    #[must_use]
    pub const fn root(self, n: i64) -> Self {
        self.pow(Exponent::new(1, n))
    }

    /// `true` when every exponent is zero.
    #[must_use]
    pub const fn is_dimensionless(&self) -> bool {
        self.const_eq(&Self::DIMENSIONLESS)
    }

    /// `true` when every exponent is a whole number.
    #[must_use]
    pub const fn is_integral(&self) -> bool {
        let mut i = 0;
        while i < BaseKind::COUNT {
            if !self.0[i].is_integer() {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Structural equality usable in `const` contexts.
    #[must_use]
    pub const fn const_eq(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < BaseKind::COUNT {
            if !self.0[i].const_eq(other.0[i]) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Non-zero terms in [`CANONICAL_ORDER`].
    pub fn terms(&self) -> impl Iterator<Item = UnitExponent> + '_ {
        CANONICAL_ORDER.iter().filter_map(move |&kind| {
            let exponent = self.exponent(kind);
            (!exponent.is_zero()).then_some(UnitExponent::with_exponent(kind, exponent))
        })
    }

    /// Canonical signature; empty for a dimensionless vector.
    #[must_use]
    pub const fn signature(&self) -> Signature {
        let mut out = Signature::new();
        let mut i = 0;
        while i < CANONICAL_ORDER.len() {
            let kind = CANONICAL_ORDER[i];
            let exponent = self.exponent(kind);
            if !exponent.is_zero() {
                if !out.is_empty() {
                    out = out.push_ascii(SIGNATURE_SEPARATOR);
                }
                out = out
                    .push_str(kind.canonical_unit())
                    .push_ascii(b'^')
                    .push_ratio(exponent.numerator(), exponent.denominator());
            }
            i += 1;
        }
        out
    }

    /// FNV-1a hash of [`DimensionVector::signature`].
    #[must_use]
    pub const fn fingerprint(&self) -> u32 {
        self.signature().fingerprint()
    }

    /// Renders the vector with canonical unit symbols, e.g. `kg*m*s^-2`.
    ///
    /// The output is accepted by
    /// [`UnitRegistry::parse`](crate::registry::UnitRegistry::parse).
    #[must_use]
    pub fn symbolic(&self) -> String {
        self.terms()
            .map(|term| {
                let exponent = term.exponent();
                let symbol = term.kind().canonical_symbol();
                if exponent == Exponent::ONE {
                    symbol.to_owned()
                } else {
                    format!("{symbol}^{exponent}")
                }
            })
            .collect::<Vec<_>>()
            .join("*")
    }
}

/// The signature, or `dimensionless` for the empty vector.
impl fmt::Display for DimensionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("dimensionless");
        }
        for (i, term) in self.terms().enumerate() {
            if i > 0 {
                write!(f, "{}", char::from(SIGNATURE_SEPARATOR))?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

impl FromIterator<UnitExponent> for DimensionVector {
    fn from_iter<I: IntoIterator<Item = UnitExponent>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::DIMENSIONLESS, |acc, term| acc.combine(Self::from_terms(&[term])))
    }
}

/// A dimension encoded in the type system.
///
/// Parameters are the exponents of mass, length, time, temperature, charge,
/// amount and angle, each a `typenum` integer.
pub struct Dim<M, L, T, Th, Q, N, A>(PhantomData<fn() -> (M, L, T, Th, Q, N, A)>);

mod sealed {
    pub trait Sealed {}
}

/// Compile-time view of a [`Dim`].
///
/// Implemented only by [`Dim`].
pub trait Dimension: sealed::Sealed + 'static {
    /// Mass exponent.
    type Mass: Integer;
    /// Length exponent.
    type Length: Integer;
    /// Time exponent.
    type Time: Integer;
    /// Temperature exponent.
    type Temperature: Integer;
    /// Charge exponent.
    type Charge: Integer;
    /// Amount-of-substance exponent.
    type Amount: Integer;
    /// Angle exponent.
    type Angle: Integer;

    /// The same dimension as a value.
    const VECTOR: DimensionVector = DimensionVector::from_integers([
        <Self::Mass as Integer>::I64,
        <Self::Length as Integer>::I64,
        <Self::Time as Integer>::I64,
        <Self::Temperature as Integer>::I64,
        <Self::Charge as Integer>::I64,
        <Self::Amount as Integer>::I64,
        <Self::Angle as Integer>::I64,
    ]);

    /// Canonical signature of [`Dimension::VECTOR`].
    const SIGNATURE: Signature = Self::VECTOR.signature();

    /// Hash of [`Dimension::SIGNATURE`].
    const FINGERPRINT: u32 = Self::SIGNATURE.fingerprint();
}

impl<M, L, T, Th, Q, N, A> sealed::Sealed for Dim<M, L, T, Th, Q, N, A>
where
    M: Integer,
    L: Integer,
    T: Integer,
    Th: Integer,
    Q: Integer,
    N: Integer,
    A: Integer,
{
}

impl<M, L, T, Th, Q, N, A> Dimension for Dim<M, L, T, Th, Q, N, A>
where
    M: Integer,
    L: Integer,
    T: Integer,
    Th: Integer,
    Q: Integer,
    N: Integer,
    A: Integer,
{
    type Mass = M;
    type Length = L;
    type Time = T;
    type Temperature = Th;
    type Charge = Q;
    type Amount = N;
    type Angle = A;
}

/// Dimension of the product `Self * Rhs`.
pub trait MulDim<Rhs: Dimension>: Dimension {
    /// The resulting dimension.
    type Output: Dimension;
}

/// Dimension of the quotient `Self / Rhs`.
pub trait DivDim<Rhs: Dimension>: Dimension {
    /// The resulting dimension.
    type Output: Dimension;
}

/// Dimension of the reciprocal `1 / Self`.
pub trait InvDim: Dimension {
    /// The resulting dimension.
    type Output: Dimension;
}

/// Dimension of `Self` raised to the integer `E`.
pub trait PowDim<E: Integer>: Dimension {
    /// The resulting dimension.
    type Output: Dimension;
}

/// Dimension of the `E`-th root of `Self`; only exists when every exponent
/// divides by `E` exactly.
pub trait RootDim<E: Integer>: Dimension {
    /// The resulting dimension.
    type Output: Dimension;
}

macro_rules! dim_binary_impl {
    ($trait:ident, $op:ident, $alias:ident) => {
        impl<L, R> $trait<R> for L
        where
            L: Dimension,
            R: Dimension,
            L::Mass: $op<R::Mass>,
            L::Length: $op<R::Length>,
            L::Time: $op<R::Time>,
            L::Temperature: $op<R::Temperature>,
            L::Charge: $op<R::Charge>,
            L::Amount: $op<R::Amount>,
            L::Angle: $op<R::Angle>,
            $alias<L::Mass, R::Mass>: Integer,
            $alias<L::Length, R::Length>: Integer,
            $alias<L::Time, R::Time>: Integer,
            $alias<L::Temperature, R::Temperature>: Integer,
            $alias<L::Charge, R::Charge>: Integer,
            $alias<L::Amount, R::Amount>: Integer,
            $alias<L::Angle, R::Angle>: Integer,
        {
            type Output = Dim<
                $alias<L::Mass, R::Mass>,
                $alias<L::Length, R::Length>,
                $alias<L::Time, R::Time>,
                $alias<L::Temperature, R::Temperature>,
                $alias<L::Charge, R::Charge>,
                $alias<L::Amount, R::Amount>,
                $alias<L::Angle, R::Angle>,
            >;
        }
    };
}

macro_rules! dim_scaled_impl {
    ($trait:ident, $op:ident, $alias:ident) => {
        impl<D, E> $trait<E> for D
        where
            D: Dimension,
            E: Integer,
            D::Mass: $op<E>,
            D::Length: $op<E>,
            D::Time: $op<E>,
            D::Temperature: $op<E>,
            D::Charge: $op<E>,
            D::Amount: $op<E>,
            D::Angle: $op<E>,
            $alias<D::Mass, E>: Integer,
            $alias<D::Length, E>: Integer,
            $alias<D::Time, E>: Integer,
            $alias<D::Temperature, E>: Integer,
            $alias<D::Charge, E>: Integer,
            $alias<D::Amount, E>: Integer,
            $alias<D::Angle, E>: Integer,
        {
            type Output = Dim<
                $alias<D::Mass, E>,
                $alias<D::Length, E>,
                $alias<D::Time, E>,
                $alias<D::Temperature, E>,
                $alias<D::Charge, E>,
                $alias<D::Amount, E>,
                $alias<D::Angle, E>,
            >;
        }
    };
}

dim_binary_impl!(MulDim, Add, Sum);
dim_binary_impl!(DivDim, Sub, Diff);
dim_scaled_impl!(PowDim, Mul, Prod);
dim_scaled_impl!(RootDim, PartialDiv, PartialQuot);

impl<D> InvDim for D
where
    D: Dimension,
    D::Mass: Neg,
    D::Length: Neg,
    D::Time: Neg,
    D::Temperature: Neg,
    D::Charge: Neg,
    D::Amount: Neg,
    D::Angle: Neg,
    Negate<D::Mass>: Integer,
    Negate<D::Length>: Integer,
    Negate<D::Time>: Integer,
    Negate<D::Temperature>: Integer,
    Negate<D::Charge>: Integer,
    Negate<D::Amount>: Integer,
    Negate<D::Angle>: Integer,
{
    type Output = Dim<
        Negate<D::Mass>,
        Negate<D::Length>,
        Negate<D::Time>,
        Negate<D::Temperature>,
        Negate<D::Charge>,
        Negate<D::Amount>,
        Negate<D::Angle>,
    >;
}

/// `A * B` at the type level.
pub type DimProduct<A, B> = <A as MulDim<B>>::Output;
/// `A / B` at the type level.
pub type DimQuotient<A, B> = <A as DivDim<B>>::Output;
/// `1 / A` at the type level.
pub type DimInverse<A> = <A as InvDim>::Output;
/// `A^E` at the type level.
pub type DimPower<A, E> = <A as PowDim<E>>::Output;
/// `E`-th root of `A` at the type level.
pub type DimRoot<A, E> = <A as RootDim<E>>::Output;

/// The empty dimension.
pub type Dimensionless = Dim<Z0, Z0, Z0, Z0, Z0, Z0, Z0>;
/// Mass.
pub type MassDim = Dim<P1, Z0, Z0, Z0, Z0, Z0, Z0>;
/// Length.
pub type LengthDim = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
/// Time.
pub type TimeDim = Dim<Z0, Z0, P1, Z0, Z0, Z0, Z0>;
/// Temperature.
pub type TemperatureDim = Dim<Z0, Z0, Z0, P1, Z0, Z0, Z0>;
/// Charge.
pub type ChargeDim = Dim<Z0, Z0, Z0, Z0, P1, Z0, Z0>;
/// Amount of substance.
pub type AmountDim = Dim<Z0, Z0, Z0, Z0, Z0, P1, Z0>;
/// Plane angle.
pub type AngleDim = Dim<Z0, Z0, Z0, Z0, Z0, Z0, P1>;
/// Reciprocal time.
pub type FrequencyDim = Dim<Z0, Z0, N1, Z0, Z0, Z0, Z0>;

#[cfg(test)]
mod tests {
    use typenum::{P2, P3};

    use super::*;

    type Force = Dim<P1, P1, typenum::N2, Z0, Z0, Z0, Z0>;
    type Area = DimPower<LengthDim, P2>;
    type Acceleration = DimQuotient<LengthDim, DimProduct<TimeDim, TimeDim>>;

    fn same_type<A: 'static, B: 'static>() -> bool {
        core::any::TypeId::of::<A>() == core::any::TypeId::of::<B>()
    }

    #[test]
    fn canonical_order_is_alphabetical_by_unit_name() {
        assert_eq!(
            CANONICAL_ORDER,
            [
                BaseKind::Charge,
                BaseKind::Temperature,
                BaseKind::Mass,
                BaseKind::Length,
                BaseKind::Amount,
                BaseKind::Angle,
                BaseKind::Time,
            ]
        );
    }

    #[test]
    fn force_signature() {
        assert_eq!(Force::SIGNATURE, "kilograms^1|meters^1|seconds^-2");
        assert_eq!(DimensionVector::DIMENSIONLESS.signature(), "");
        assert_eq!(
            DimensionVector::of(BaseKind::Length).root(2).signature(),
            "meters^(1/2)"
        );
    }

    #[test]
    fn value_algebra_matches_type_algebra() {
        assert_eq!(<DimProduct<MassDim, Acceleration>>::VECTOR, Force::VECTOR);
        assert!(same_type::<DimProduct<MassDim, Acceleration>, Force>());
        assert!(same_type::<DimRoot<DimPower<LengthDim, P3>, P3>, LengthDim>());
        assert!(same_type::<DimInverse<TimeDim>, FrequencyDim>());
        assert!(same_type::<DimQuotient<Area, LengthDim>, LengthDim>());
        assert_eq!(
            LengthDim::VECTOR.divide(TimeDim::VECTOR.powi(2)),
            Acceleration::VECTOR
        );
    }

    #[test]
    fn inverse_cancels() {
        let v = Force::VECTOR;
        assert!(v.combine(v.invert()).is_dimensionless());
        assert_eq!(v.divide(v), DimensionVector::DIMENSIONLESS);
        assert!(v.root(2).pow(Exponent::integer(2)).const_eq(&v));
        assert!(!v.root(2).is_integral());
    }

    #[test]
    fn from_terms_accumulates_repeats() {
        let v = DimensionVector::from_terms(&[
            UnitExponent::new(BaseKind::Length, 1, 1),
            UnitExponent::new(BaseKind::Time, -1, 1),
            UnitExponent::new(BaseKind::Time, -1, 1),
            UnitExponent::new(BaseKind::Mass, 1, 2),
            UnitExponent::new(BaseKind::Mass, -1, 2),
        ]);
        assert_eq!(v, Acceleration::VECTOR);
        assert_eq!(v.terms().count(), 2);
        let collected: DimensionVector = v.terms().collect();
        assert_eq!(collected, v);
    }

    #[test]
    fn symbolic_rendering() {
        assert_eq!(Force::VECTOR.symbolic(), "kg*m*s^-2");
        assert_eq!(DimensionVector::of(BaseKind::Length).root(2).symbolic(), "m^(1/2)");
        assert_eq!(Dimensionless::VECTOR.symbolic(), "");
        assert_eq!(Dimensionless::VECTOR.to_string(), "dimensionless");
        assert_eq!(TimeDim::VECTOR.to_string(), "seconds^1");
    }

    #[test]
    fn widest_signature_fits() {
        let widest = Exponent::new(i64::MIN, i64::MAX);
        let terms: Vec<UnitExponent> = BaseKind::ALL
            .iter()
            .map(|&kind| UnitExponent::with_exponent(kind, widest))
            .collect();
        let v = DimensionVector::from_terms(&terms);
        let signature = v.signature();
        assert!(signature.len() < SIGNATURE_CAPACITY);
        assert_eq!(signature.as_str(), v.to_string());
        assert!(signature.starts_with("coulombs^(-9223372036854775808/9223372036854775807)|kelvin^"));
    }

    #[test]
    fn checked_algebra_reports_overflow() {
        let huge = DimensionVector::from_terms(&[UnitExponent::new(BaseKind::Length, i64::MAX, 1)]);
        assert_eq!(huge.checked_combine(huge), None);
        assert_eq!(huge.checked_pow(Exponent::integer(2)), None);
        assert_eq!(huge.checked_divide(huge), Some(DimensionVector::DIMENSIONLESS));
        assert_eq!(Force::VECTOR.checked_divide(MassDim::VECTOR), Some(Acceleration::VECTOR));
        assert_eq!(Force::VECTOR.checked_pow(Exponent::new(1, 2)), Some(Force::VECTOR.root(2)));
    }

    #[test]
    fn fingerprints_distinguish_dimensions() {
        assert_ne!(Force::FINGERPRINT, Acceleration::FINGERPRINT);
        assert_eq!(Force::FINGERPRINT, Force::VECTOR.fingerprint());
    }
}
