//! SI prefix factors.
//!
//! [`SI_PREFIXES`] is the single source of prefix data. The `si_prefixed!`
//! macro reads it through the zero-sized marker types below, and
//! [`UnitRegistry`](crate::registry::UnitRegistry) walks it at start-up to
//! build the prefixed catalogue at runtime.

use crate::math::Scalar;

/// A decimal SI prefix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Prefix {
    name: &'static str,
    symbol: &'static str,
    factor: Scalar,
}

impl Prefix {
    /// Creates a prefix descriptor.
    #[must_use]
    pub const fn new(name: &'static str, symbol: &'static str, factor: Scalar) -> Self {
        Self {
            name,
            symbol,
            factor,
        }
    }

    /// Lower-case prefix name, e.g. `"kilo"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Prefix symbol, e.g. `"k"`.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Multiplier relative to the unprefixed unit.
    #[must_use]
    pub const fn factor(&self) -> Scalar {
        self.factor
    }

    /// Looks a prefix up by its symbol. `"u"` is accepted for micro.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let symbol = if symbol == "u" { "µ" } else { symbol };
        SI_PREFIXES.iter().copied().find(|p| p.symbol == symbol)
    }

    /// Looks a prefix up by its name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        SI_PREFIXES.iter().copied().find(|p| p.name == name)
    }
}

/// Prefixes from pico to tera, ordered by increasing factor.
pub const SI_PREFIXES: [Prefix; 12] = [
    Prefix::new("pico", "p", 1e-12),
    Prefix::new("nano", "n", 1e-9),
    Prefix::new("micro", "µ", 1e-6),
    Prefix::new("milli", "m", 1e-3),
    Prefix::new("centi", "c", 1e-2),
    Prefix::new("deci", "d", 1e-1),
    Prefix::new("deca", "da", 1e1),
    Prefix::new("hecto", "h", 1e2),
    Prefix::new("kilo", "k", 1e3),
    Prefix::new("mega", "M", 1e6),
    Prefix::new("giga", "G", 1e9),
    Prefix::new("tera", "T", 1e12),
];

/// Type-level handle on one entry of [`SI_PREFIXES`].
pub trait SiPrefix {
    /// The table entry this marker stands for.
    const PREFIX: Prefix;
}

macro_rules! prefix_markers {
    ($($(#[$attr:meta])* $marker:ident => $index:literal;)*) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $marker;

            impl SiPrefix for $marker {
                const PREFIX: Prefix = SI_PREFIXES[$index];
            }
        )*
    };
}

prefix_markers! {
    /// 10⁻¹²
    Pico => 0;
    /// 10⁻⁹
    Nano => 1;
    /// 10⁻⁶
    Micro => 2;
    /// 10⁻³
    Milli => 3;
    /// 10⁻²
    Centi => 4;
    /// 10⁻¹
    Deci => 5;
    /// 10¹
    Deca => 6;
    /// 10²
    Hecto => 7;
    /// 10³
    Kilo => 8;
    /// 10⁶
    Mega => 9;
    /// 10⁹
    Giga => 10;
    /// 10¹²
    Tera => 11;
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn table_is_sorted_by_factor() {
        assert!(SI_PREFIXES.windows(2).all(|w| w[0].factor() < w[1].factor()));
    }

    #[test]
    fn markers_point_at_table_entries() {
        assert_eq!(Kilo::PREFIX.name(), "kilo");
        assert_relative_eq!(Kilo::PREFIX.factor(), 1e3);
        assert_eq!(Micro::PREFIX.symbol(), "µ");
        assert_relative_eq!(Pico::PREFIX.factor(), 1e-12);
        assert_relative_eq!(Tera::PREFIX.factor(), 1e12);
    }

    #[test]
    fn symbol_lookup_accepts_ascii_micro() {
        assert_eq!(Prefix::from_symbol("u"), Some(Micro::PREFIX));
        assert_eq!(Prefix::from_symbol("da"), Some(Deca::PREFIX));
        assert_eq!(Prefix::from_name("mega"), Some(Mega::PREFIX));
        assert_eq!(Prefix::from_symbol("Q"), None);
    }
}
