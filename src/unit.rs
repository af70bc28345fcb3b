//! Named units and the macros that declare them.
//!
//! A unit is a zero-sized type bound to one dimension plus the rule that maps
//! its readings onto the canonical unit of that dimension. Units are declared
//! with three macros:
//!
//! * [`unit!`](crate::unit!) for a unit defined as the canonical unit, a
//!   multiple of another unit, or an affine shift of another unit;
//! * [`compound_unit!`](crate::compound_unit!) for a product of unit powers,
//!   checked at compile time against the declared dimension;
//! * [`si_prefixed!`](crate::si_prefixed!) for SI-prefixed variants of a base
//!   unit, with factors taken from [`SI_PREFIXES`](crate::prefix::SI_PREFIXES).
//!
//! ```
//! use dimensional::dimension::LengthDim;
//! use dimensional::units::Meters;
//! use dimensional::{si_prefixed, unit};
//!
//! unit! {
//!     /// One furlong, an eighth of a mile.
//!     pub Furlongs: LengthDim = "furlongs", "fur", Meters * 201.168;
//! }
//!
//! si_prefixed! {
//!     Furlongs: LengthDim {
//!         pub Kilofurlongs = Kilo, "kilofurlongs", "kfur";
//!     }
//! }
//!
//! let track = 8.0 * Furlongs;
//! assert!((track.value() - 1609.344).abs() < 1e-9);
//! assert!((track.value_as::<Kilofurlongs>() - 0.008).abs() < 1e-12);
//! ```
//!
//! Declaring a unit against a reference unit of a different dimension fails to
//! compile:
//!
//! ```compile_fail
//! use dimensional::dimension::LengthDim;
//! use dimensional::units::Seconds;
//! use dimensional::unit;
//!
//! unit! {
//!     pub Broken: LengthDim = "broken", "br", Seconds * 2.0;
//! }
//! ```
//!
//! So does a compound unit whose terms do not multiply out to its dimension:
//!
//! ```compile_fail
//! use dimensional::quantities::dim;
//! use dimensional::units::{Kilograms, Meters, Seconds};
//! use dimensional::compound_unit;
//!
//! compound_unit! {
//!     pub NotANewton: dim::Force = "not-newtons", "nN", [Kilograms ^ 1, Meters ^ 1, Seconds ^ -1];
//! }
//! ```

use crate::conversion::ConversionRule;
use crate::dimension::Dimension;

/// A named unit of measurement.
pub trait Unit: Copy + Default + 'static {
    /// Dimension this unit measures.
    type Dimension: Dimension;
    /// Plural lower-case name, e.g. `"kilometers"`.
    const NAME: &'static str;
    /// Symbol, e.g. `"km"`.
    const SYMBOL: &'static str;
    /// Map from readings in this unit onto the canonical unit of
    /// [`Unit::Dimension`].
    const RULE: ConversionRule;
}

/// Declares one or more units.
///
/// Each entry has the form
/// `vis Name: Dimension = "name", "symbol", <rule>;` where `<rule>` is one of
///
/// * `canonical`: the canonical unit of the dimension;
/// * `Ref * factor`: `factor` times the unit `Ref`;
/// * `Ref * slope, offset off`: readings map onto `Ref` as `raw * slope + off`.
///
/// Every declared unit also supports `value * Unit` to build a quantity.
#[macro_export]
macro_rules! unit {
    () => {};
    (
        $(#[$attr:meta])*
        $vis:vis $name:ident: $dim:ty = $full:literal, $symbol:literal, canonical;
        $($rest:tt)*
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        $crate::__unit_impls!($name, $dim, $full, $symbol, $crate::conversion::ConversionRule::IDENTITY);
        $crate::unit!($($rest)*);
    };
    (
        $(#[$attr:meta])*
        $vis:vis $name:ident: $dim:ty = $full:literal, $symbol:literal,
            $reference:ident * $slope:expr, offset $offset:expr;
        $($rest:tt)*
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        $crate::__unit_impls!(
            $name,
            $dim,
            $full,
            $symbol,
            $crate::conversion::shifted::<$reference, $dim>($slope, $offset)
        );
        $crate::unit!($($rest)*);
    };
    (
        $(#[$attr:meta])*
        $vis:vis $name:ident: $dim:ty = $full:literal, $symbol:literal, $reference:ident * $factor:expr;
        $($rest:tt)*
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        $crate::__unit_impls!(
            $name,
            $dim,
            $full,
            $symbol,
            $crate::conversion::scaled::<$reference, $dim>($factor)
        );
        $crate::unit!($($rest)*);
    };
}

/// Declares units as products of powers of other units.
///
/// `vis Name: Dimension = "name", "symbol", [UnitA ^ 1, UnitB ^ -2];`
///
/// The terms must multiply out to `Dimension` and must all be linear; both are
/// checked at compile time.
#[macro_export]
macro_rules! compound_unit {
    () => {};
    (
        $(#[$attr:meta])*
        $vis:vis $name:ident: $dim:ty = $full:literal, $symbol:literal,
            [$($term:ident ^ $power:literal),+ $(,)?];
        $($rest:tt)*
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        const _: () = {
            assert!(
                $crate::dimension::DimensionVector::DIMENSIONLESS
                    $(.combine(
                        <<$term as $crate::unit::Unit>::Dimension as $crate::dimension::Dimension>::VECTOR
                            .powi($power)
                    ))+
                    .const_eq(&<$dim as $crate::dimension::Dimension>::VECTOR),
                "compound unit terms do not multiply out to the declared dimension"
            );
            $(
                assert!(
                    <$term as $crate::unit::Unit>::RULE.is_linear(),
                    "affine units cannot take part in a compound unit"
                );
            )+
        };

        $crate::__unit_impls!(
            $name,
            $dim,
            $full,
            $symbol,
            $crate::conversion::ConversionRule::IDENTITY
                $(.product(<$term as $crate::unit::Unit>::RULE.powi($power)))+
        );
        $crate::compound_unit!($($rest)*);
    };
}

/// Declares SI-prefixed variants of a base unit.
///
/// ```text
/// si_prefixed! {
///     Base: Dimension {
///         pub Prefixed = PrefixMarker, "name", "symbol";
///     }
/// }
/// ```
///
/// `PrefixMarker` is one of the marker types in [`crate::prefix`]. The name and
/// symbol must equal the prefix's name and symbol followed by the base unit's.
#[macro_export]
macro_rules! si_prefixed {
    (
        $base:ident: $dim:ty {
            $(
                $(#[$attr:meta])*
                $vis:vis $name:ident = $prefix:ident, $full:literal, $symbol:literal;
            )+
        }
    ) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            $vis struct $name;

            const _: () = {
                type Text = $crate::literal::FixedStr<64>;
                let prefix = <$crate::prefix::$prefix as $crate::prefix::SiPrefix>::PREFIX;
                assert!(
                    Text::from_str(prefix.name())
                        .push_str(<$base as $crate::unit::Unit>::NAME)
                        .const_eq(&Text::from_str($full)),
                    "prefixed unit name must be the prefix name followed by the base name"
                );
                assert!(
                    Text::from_str(prefix.symbol())
                        .push_str(<$base as $crate::unit::Unit>::SYMBOL)
                        .const_eq(&Text::from_str($symbol)),
                    "prefixed unit symbol must be the prefix symbol followed by the base symbol"
                );
            };

            $crate::__unit_impls!(
                $name,
                $dim,
                $full,
                $symbol,
                $crate::conversion::scaled::<$base, $dim>(
                    <$crate::prefix::$prefix as $crate::prefix::SiPrefix>::PREFIX.factor()
                )
            );
        )+
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __unit_impls {
    ($name:ident, $dim:ty, $full:literal, $symbol:literal, $rule:expr) => {
        impl $crate::unit::Unit for $name {
            type Dimension = $dim;
            const NAME: &'static str = $full;
            const SYMBOL: &'static str = $symbol;
            const RULE: $crate::conversion::ConversionRule = $rule;
        }

        impl ::core::ops::Mul<$name> for f64 {
            type Output = $crate::quantity::Quantity<$dim>;

            fn mul(self, unit: $name) -> Self::Output {
                $crate::quantity::Quantity::of(self, unit)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($symbol)
            }
        }
    };
}

/// Conversion rule of `U` as a value.
#[must_use]
pub const fn rule_of<U: Unit>() -> ConversionRule {
    U::RULE
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::dimension::{Dimension, LengthDim, TimeDim};
    use crate::quantities::dim;
    use crate::units::{Kilograms, Meters, Newtons, Seconds};

    unit! {
        /// Test-only unit.
        Chains: LengthDim = "chains", "ch", Meters * 20.1168;
        Links: LengthDim = "links", "li", Chains * 0.01;
        ShiftedMeters: LengthDim = "shifted meters", "sm", Meters * 1.0, offset 10.0;
    }

    compound_unit! {
        ChainsPerSecond: dim::Velocity = "chains per second", "ch/s", [Chains ^ 1, Seconds ^ -1];
        Kilos: dim::Mass = "kilos", "kilo", [Kilograms ^ 1];
    }

    si_prefixed! {
        Chains: LengthDim {
            Kilochains = Kilo, "kilochains", "kch";
        }
    }

    #[test]
    fn scaled_units_chain_through_their_reference() {
        assert_relative_eq!(Links::RULE.slope(), 0.201_168, max_relative = 1e-12);
        assert_relative_eq!(Kilochains::RULE.slope(), 20_116.8, max_relative = 1e-12);
        assert_eq!(Chains::NAME, "chains");
        assert_eq!(Links.to_string(), "li");
    }

    #[test]
    fn shifted_units_keep_their_offset() {
        assert_relative_eq!(ShiftedMeters::RULE.offset(), 10.0);
        assert!(!rule_of::<ShiftedMeters>().is_linear());
    }

    #[test]
    fn compound_units_multiply_out() {
        assert_relative_eq!(ChainsPerSecond::RULE.slope(), 20.1168);
        assert_eq!(
            <<ChainsPerSecond as Unit>::Dimension as Dimension>::VECTOR,
            LengthDim::VECTOR.divide(TimeDim::VECTOR)
        );
        assert_relative_eq!(Kilos::RULE.slope(), 1.0);
        assert!(Newtons::RULE.is_linear());
    }

    #[test]
    fn value_times_unit_builds_a_quantity() {
        let q = 3.0 * Chains;
        assert_relative_eq!(q.value(), 60.3504, max_relative = 1e-12);
    }
}
