//! Runtime unit lookup, conversion and expression parsing.
//!
//! The statically typed path never needs this module. It exists for input
//! that only arrives at runtime: configuration files, user-typed units,
//! serialised records. A [`UnitRegistry`] maps names and symbols to
//! [`UnitDef`]s built from the typed catalogue, expands SI prefixes
//! data-driven from [`SI_PREFIXES`], and parses compound expressions:
//!
//! ```
//! use dimensional::registry::UnitRegistry;
//!
//! let units = UnitRegistry::standard();
//! let rule = units.resolve("km/h", "m/s")?;
//! assert!((rule.apply(36.0) - 10.0).abs() < 1e-12);
//!
//! let force = units.parse("kg*m/s^2")?;
//! assert_eq!(force.dimension(), units.lookup("N")?.dimension());
//! # Ok::<(), dimensional::errors::DimensionalError>(())
//! ```
//!
//! Grammar: factors joined by `*` (or `·`) and `/`, each optionally raised to
//! an integer (`s^-2`) or parenthesised rational (`m^(1/2)`) power.
//! Parentheses group, and a bare number is a dimensionless factor (`1/s`).
//! Affine units such as `°C` are accepted only on their own.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::conversion::ConversionRule;
use crate::dimension::{Dimension, DimensionVector};
use crate::dynamic::{mismatch, DynQuantity};
use crate::errors::{DimensionalError, Result};
use crate::exponent::Exponent;
use crate::math::{self, Scalar};
use crate::prefix::{Prefix, SI_PREFIXES};
use crate::unit::Unit;
use crate::units::{
    AmpereHours, Amperes, Arcminutes, Arcseconds, AstronomicalUnits, Atmospheres, Bar, Calories, Celsius,
    Coulombs, CubicMeters, CubicMetersPerKilogramSecondSquared, Days, Degrees, Dynes, Electronvolts, Fahrenheit,
    Farads, FaradsPerMeter, Feet, FeetPerSecond, GramsPerCubicCentimeter, GramsPerMole, Grams, Gradians,
    Hectares, Henries, HenriesPerMeter, Hertz, Horsepower, Hours, Inches, JouleSeconds, Joules, JoulesPerGramKelvin,
    JoulesPerKelvin, JoulesPerKilogramKelvin, JoulesPerMoleKelvin, Kelvin, Kilocalories, KilogramMetersPerSecond,
    Kilograms, KilogramsPerCubicMeter, KilogramsPerMole, KilometersPerHour, KilowattHours, Knots, Liters, Meters,
    MetersPerSecond, MetersPerSecondSquared, MilesPerHour, Miles, MilliampereHours, Minutes, Moles, MolesPerLiter,
    NauticalMiles, NewtonMeters, Newtons, Ohms, Ounces, Pascals, PerMole, Pounds, PoundsForce, Psi, Radians,
    RadiansPerSecond, Rankine, Revolutions, RevolutionsPerMinute, Seconds, Siemens, Slugs, SquareFeet,
    SquareKilometers, SquareMeters, StandardGravity, Teslas, Tonnes, Torr, UsGallons, Volts, Watts, Webers, Yards,
};

/// A unit known at runtime: its name, symbol, dimension and rule into the
/// canonical unit of that dimension.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitDef {
    name: String,
    symbol: String,
    dimension: DimensionVector,
    rule: ConversionRule,
}

impl UnitDef {
    /// Describes a unit by hand.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        dimension: DimensionVector,
        rule: ConversionRule,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            dimension,
            rule,
        }
    }

    /// Runtime description of the statically declared unit `U`.
    #[must_use]
    pub fn of<U: Unit>() -> Self {
        Self::new(U::NAME, U::SYMBOL, <U::Dimension as Dimension>::VECTOR, U::RULE)
    }

    /// `prefix` applied to this unit, e.g. kilo + meters.
    #[must_use]
    pub fn prefixed(&self, prefix: Prefix) -> Self {
        Self::new(
            format!("{}{}", prefix.name(), self.name),
            format!("{}{}", prefix.symbol(), self.symbol),
            self.dimension,
            ConversionRule::linear(prefix.factor()).then(self.rule),
        )
    }

    /// Full name, e.g. `kilometers`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Symbol, e.g. `km`.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Dimension of the unit.
    #[must_use]
    pub const fn dimension(&self) -> DimensionVector {
        self.dimension
    }

    /// Rule into the canonical unit.
    #[must_use]
    pub const fn rule(&self) -> ConversionRule {
        self.rule
    }

    /// `true` for units with an offset, such as degrees Celsius.
    #[must_use]
    pub const fn is_affine(&self) -> bool {
        !self.rule.is_linear()
    }
}

/// Which batches of units [`UnitRegistry::with_config`] loads.
///
/// SI base and coherent derived units are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Expand SI prefixes over the base units (meters, grams, seconds, ...).
    pub prefixes: bool,
    /// Load US customary and imperial units.
    pub imperial: bool,
    /// Expand SI prefixes over derived units (newtons, joules, volts, ...).
    pub prefixed_derived: bool,
}

impl RegistryConfig {
    /// Every batch enabled.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            prefixes: true,
            imperial: true,
            prefixed_derived: true,
        }
    }

    /// Unprefixed SI and accepted non-SI units only.
    #[must_use]
    pub const fn minimal() -> Self {
        Self {
            prefixes: false,
            imperial: false,
            prefixed_derived: false,
        }
    }

    /// Toggles prefix expansion over base units.
    #[must_use]
    pub const fn with_prefixes(mut self, enabled: bool) -> Self {
        self.prefixes = enabled;
        self
    }

    /// Toggles the imperial batch.
    #[must_use]
    pub const fn with_imperial(mut self, enabled: bool) -> Self {
        self.imperial = enabled;
        self
    }

    /// Toggles prefix expansion over derived units.
    #[must_use]
    pub const fn with_prefixed_derived(mut self, enabled: bool) -> Self {
        self.prefixed_derived = enabled;
        self
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::standard()
    }
}

type UnitEntry = fn() -> UnitDef;

const SI_UNITS: &[UnitEntry] = &[
    UnitDef::of::<Meters>,
    UnitDef::of::<AstronomicalUnits>,
    UnitDef::of::<Kilograms>,
    UnitDef::of::<Grams>,
    UnitDef::of::<Tonnes>,
    UnitDef::of::<Seconds>,
    UnitDef::of::<Minutes>,
    UnitDef::of::<Hours>,
    UnitDef::of::<Days>,
    UnitDef::of::<Kelvin>,
    UnitDef::of::<Celsius>,
    UnitDef::of::<Coulombs>,
    UnitDef::of::<AmpereHours>,
    UnitDef::of::<MilliampereHours>,
    UnitDef::of::<Moles>,
    UnitDef::of::<Radians>,
    UnitDef::of::<Degrees>,
    UnitDef::of::<Gradians>,
    UnitDef::of::<Revolutions>,
    UnitDef::of::<Arcminutes>,
    UnitDef::of::<Arcseconds>,
];

const DERIVED_UNITS: &[UnitEntry] = &[
    UnitDef::of::<Newtons>,
    UnitDef::of::<Joules>,
    UnitDef::of::<NewtonMeters>,
    UnitDef::of::<Watts>,
    UnitDef::of::<Pascals>,
    UnitDef::of::<Hertz>,
    UnitDef::of::<Amperes>,
    UnitDef::of::<Volts>,
    UnitDef::of::<Ohms>,
    UnitDef::of::<Siemens>,
    UnitDef::of::<Farads>,
    UnitDef::of::<Webers>,
    UnitDef::of::<Henries>,
    UnitDef::of::<Teslas>,
    UnitDef::of::<FaradsPerMeter>,
    UnitDef::of::<HenriesPerMeter>,
    UnitDef::of::<SquareMeters>,
    UnitDef::of::<SquareKilometers>,
    UnitDef::of::<Hectares>,
    UnitDef::of::<CubicMeters>,
    UnitDef::of::<Liters>,
    UnitDef::of::<MetersPerSecond>,
    UnitDef::of::<KilometersPerHour>,
    UnitDef::of::<MetersPerSecondSquared>,
    UnitDef::of::<StandardGravity>,
    UnitDef::of::<RadiansPerSecond>,
    UnitDef::of::<RevolutionsPerMinute>,
    UnitDef::of::<KilogramMetersPerSecond>,
    UnitDef::of::<JouleSeconds>,
    UnitDef::of::<KilogramsPerCubicMeter>,
    UnitDef::of::<GramsPerCubicCentimeter>,
    UnitDef::of::<JoulesPerKelvin>,
    UnitDef::of::<JoulesPerKilogramKelvin>,
    UnitDef::of::<JoulesPerGramKelvin>,
    UnitDef::of::<JoulesPerMoleKelvin>,
    UnitDef::of::<GramsPerMole>,
    UnitDef::of::<KilogramsPerMole>,
    UnitDef::of::<MolesPerLiter>,
    UnitDef::of::<PerMole>,
    UnitDef::of::<CubicMetersPerKilogramSecondSquared>,
    UnitDef::of::<Dynes>,
    UnitDef::of::<Calories>,
    UnitDef::of::<Kilocalories>,
    UnitDef::of::<KilowattHours>,
    UnitDef::of::<Electronvolts>,
    UnitDef::of::<Bar>,
    UnitDef::of::<Atmospheres>,
    UnitDef::of::<Torr>,
];

const IMPERIAL_UNITS: &[UnitEntry] = &[
    UnitDef::of::<Feet>,
    UnitDef::of::<Inches>,
    UnitDef::of::<Yards>,
    UnitDef::of::<Miles>,
    UnitDef::of::<NauticalMiles>,
    UnitDef::of::<Pounds>,
    UnitDef::of::<Ounces>,
    UnitDef::of::<Slugs>,
    UnitDef::of::<Rankine>,
    UnitDef::of::<Fahrenheit>,
    UnitDef::of::<PoundsForce>,
    UnitDef::of::<Psi>,
    UnitDef::of::<Horsepower>,
    UnitDef::of::<MilesPerHour>,
    UnitDef::of::<FeetPerSecond>,
    UnitDef::of::<Knots>,
    UnitDef::of::<SquareFeet>,
    UnitDef::of::<UsGallons>,
];

const PREFIXABLE_BASE: &[&str] = &["meters", "grams", "seconds", "coulombs", "moles", "radians", "liters"];

const PREFIXABLE_DERIVED: &[&str] = &[
    "newtons", "joules", "watts", "pascals", "hertz", "amperes", "volts", "ohms", "siemens", "farads", "henries",
    "webers", "teslas",
];

/// Name and symbol index over a set of [`UnitDef`]s.
///
/// Built once, then shared read-only; the type is `Send + Sync`.
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    units: Vec<UnitDef>,
    names: HashMap<String, usize>,
    symbols: HashMap<String, usize>,
}

impl UnitRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry loaded with [`RegistryConfig::standard`].
    #[must_use]
    pub fn standard() -> Self {
        Self::with_config(RegistryConfig::standard())
    }

    /// Registry loaded with the batches `config` enables.
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        let mut registry = Self::new();
        registry.load_batch("si", SI_UNITS);
        registry.load_batch("derived", DERIVED_UNITS);
        if config.imperial {
            registry.load_batch("imperial", IMPERIAL_UNITS);
        }
        if config.prefixes {
            registry.expand_prefixes("prefixed base", PREFIXABLE_BASE);
        }
        if config.prefixed_derived {
            registry.expand_prefixes("prefixed derived", PREFIXABLE_DERIVED);
        }
        debug!(units = registry.len(), ?config, "unit registry ready");
        registry
    }

    fn load_batch(&mut self, batch: &'static str, entries: &[UnitEntry]) {
        let mut added = 0_usize;
        for entry in entries {
            match self.register(entry()) {
                Ok(()) => added += 1,
                Err(err) => debug!(batch, %err, "skipping unit"),
            }
        }
        debug!(batch, added, "loaded unit batch");
    }

    fn expand_prefixes(&mut self, batch: &'static str, bases: &[&str]) {
        let mut added = 0_usize;
        for &base in bases {
            let Some(def) = self.get(base).cloned() else {
                debug!(batch, base, "prefix base not registered");
                continue;
            };
            for prefix in SI_PREFIXES {
                match self.register(def.prefixed(prefix)) {
                    Ok(()) => added += 1,
                    Err(err) => debug!(batch, base, prefix = prefix.name(), %err, "skipping prefixed unit"),
                }
            }
        }
        debug!(batch, added, "expanded SI prefixes");
    }

    /// Adds a unit.
    ///
    /// Symbols containing `µ` are also reachable with an ASCII `u`.
    ///
    /// # Errors
    ///
    /// [`DimensionalError::DuplicateUnit`] when the name or the symbol is
    /// already taken; the registry is left unchanged.
    pub fn register(&mut self, def: UnitDef) -> Result<()> {
        if self.names.contains_key(def.name()) {
            return Err(DimensionalError::DuplicateUnit(def.name().to_owned()));
        }
        if self.symbols.contains_key(def.symbol()) {
            return Err(DimensionalError::DuplicateUnit(def.symbol().to_owned()));
        }
        trace!(name = def.name(), symbol = def.symbol(), "registered unit");

        let index = self.units.len();
        self.names.insert(def.name().to_owned(), index);
        self.symbols.insert(def.symbol().to_owned(), index);
        if def.symbol().contains('µ') {
            self.symbols.entry(def.symbol().replace('µ', "u")).or_insert(index);
        }
        self.units.push(def);
        Ok(())
    }

    /// Adds the statically declared unit `U`.
    ///
    /// # Errors
    ///
    /// See [`UnitRegistry::register`].
    pub fn register_unit<U: Unit>(&mut self) -> Result<()> {
        self.register(UnitDef::of::<U>())
    }

    /// Finds a unit by name, then by symbol.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&UnitDef> {
        self.names
            .get(key)
            .or_else(|| self.symbols.get(key))
            .map(|&index| &self.units[index])
    }

    /// Finds a unit by name, then by symbol.
    ///
    /// # Errors
    ///
    /// [`DimensionalError::UnknownUnit`] when neither matches.
    pub fn lookup(&self, key: &str) -> Result<&UnitDef> {
        self.get(key).ok_or_else(|| DimensionalError::UnknownUnit(key.to_owned()))
    }

    /// `true` when `key` names a registered unit or symbol.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of registered units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Registered units in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &UnitDef> {
        self.units.iter()
    }

    /// Resolves a unit name, symbol or compound expression.
    ///
    /// Exact names and symbols win over parsing, so `"km/h"` is the
    /// registered unit rather than kilometers divided by hours (the two agree).
    ///
    /// # Errors
    ///
    /// [`DimensionalError::MalformedExpression`] for syntax errors,
    /// [`DimensionalError::UnknownUnit`] for unregistered factors,
    /// [`DimensionalError::AffineInCompound`] when an affine unit is combined
    /// with anything, and [`DimensionalError::ZeroDenominator`] for `^(n/0)`.
    pub fn parse(&self, expression: &str) -> Result<UnitDef> {
        let trimmed = expression.trim();
        if let Some(def) = self.get(trimmed) {
            return Ok(def.clone());
        }
        let parsed = Parser::new(self, trimmed)
            .parse()
            .inspect_err(|err| debug!(expression = trimmed, %err, "rejected unit expression"))?;
        Ok(UnitDef::new(trimmed, trimmed, parsed.dimension, parsed.rule))
    }

    /// Rule converting readings in `from` into readings in `to`.
    ///
    /// # Errors
    ///
    /// Anything [`UnitRegistry::parse`] reports, or
    /// [`DimensionalError::DimensionMismatch`] when the units measure
    /// different things.
    pub fn resolve(&self, from: &str, to: &str) -> Result<ConversionRule> {
        let source = self.parse(from)?;
        let target = self.parse(to)?;
        if source.dimension() != target.dimension() {
            return Err(mismatch(source.dimension(), target.dimension()));
        }
        Ok(source.rule().between(target.rule()))
    }

    /// Converts an absolute reading, offsets included: `100 °C` is `212 °F`.
    ///
    /// # Errors
    ///
    /// See [`UnitRegistry::resolve`].
    pub fn convert(&self, value: Scalar, from: &str, to: &str) -> Result<Scalar> {
        Ok(self.resolve(from, to)?.apply(value))
    }

    /// Builds a [`DynQuantity`] from a magnitude in the unit `expression`.
    ///
    /// Like [`Quantity::new`](crate::quantity::Quantity::new), the magnitude is
    /// an interval, so offsets are ignored.
    ///
    /// # Errors
    ///
    /// See [`UnitRegistry::parse`].
    pub fn quantity(&self, value: Scalar, expression: &str) -> Result<DynQuantity> {
        let def = self.parse(expression)?;
        Ok(DynQuantity::new(def.rule().apply_interval(value), def.dimension()))
    }

    /// Magnitude of `quantity` expressed in the unit `expression`.
    ///
    /// # Errors
    ///
    /// Anything [`UnitRegistry::parse`] reports, or
    /// [`DimensionalError::DimensionMismatch`] when the unit does not measure
    /// the quantity's dimension.
    pub fn value_in(&self, quantity: &DynQuantity, expression: &str) -> Result<Scalar> {
        let def = self.parse(expression)?;
        if def.dimension() != quantity.dimension() {
            return Err(mismatch(def.dimension(), quantity.dimension()));
        }
        Ok(def.rule().invert_interval(quantity.value()))
    }
}

/// Partial result of parsing: what the text so far multiplies out to.
struct Parsed {
    dimension: DimensionVector,
    rule: ConversionRule,
    label: String,
}

impl Parsed {
    fn ensure_linear(&self) -> Result<()> {
        if self.rule.is_linear() {
            Ok(())
        } else {
            Err(DimensionalError::AffineInCompound(self.label.clone()))
        }
    }

    fn multiply(self, rhs: Self) -> Result<Self> {
        self.ensure_linear()?;
        rhs.ensure_linear()?;
        let dimension = self
            .dimension
            .checked_combine(rhs.dimension)
            .ok_or(DimensionalError::ExponentOverflow)?;
        Ok(Self {
            dimension,
            rule: self.rule.product(rhs.rule),
            label: format!("{}*{}", self.label, rhs.label),
        })
    }

    fn pow(self, exponent: Exponent) -> Result<Self> {
        if exponent == Exponent::ONE {
            return Ok(self);
        }
        self.ensure_linear()?;
        let dimension = self
            .dimension
            .checked_pow(exponent)
            .ok_or(DimensionalError::ExponentOverflow)?;
        let slope = math::pow_ratio(self.rule.slope(), exponent.numerator(), exponent.denominator());
        Ok(Self {
            dimension,
            rule: ConversionRule::linear(slope),
            label: format!("{}^{exponent}", self.label),
        })
    }
}

const fn is_operator(c: char) -> bool {
    matches!(c, '*' | '·' | '/' | '^' | '(' | ')')
}

/// Recursive-descent parser over a unit expression.
struct Parser<'a> {
    registry: &'a UnitRegistry,
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    const fn new(registry: &'a UnitRegistry, input: &'a str) -> Self {
        Self { registry, input, pos: 0 }
    }

    fn malformed(&self, reason: impl Into<String>) -> DimensionalError {
        DimensionalError::MalformedExpression {
            expression: self.input.to_owned(),
            reason: reason.into(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn parse(mut self) -> Result<Parsed> {
        if self.input.is_empty() {
            return Err(self.malformed("empty expression"));
        }
        let parsed = self.expression()?;
        self.skip_whitespace();
        match self.peek() {
            None => Ok(parsed),
            Some(c) => Err(self.malformed(format!("unexpected `{c}`"))),
        }
    }

    fn expression(&mut self) -> Result<Parsed> {
        let mut acc = self.factor()?;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('*' | '·') => {
                    self.bump();
                    let rhs = self.factor()?;
                    acc = acc.multiply(rhs)?;
                }
                Some('/') => {
                    self.bump();
                    let rhs = self.factor()?.pow(Exponent::integer(-1))?;
                    acc = acc.multiply(rhs)?;
                }
                _ => return Ok(acc),
            }
        }
    }

    fn factor(&mut self) -> Result<Parsed> {
        let base = self.atom()?;
        if self.eat('^') {
            let exponent = self.exponent()?;
            base.pow(exponent)
        } else {
            Ok(base)
        }
    }

    fn atom(&mut self) -> Result<Parsed> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(self.malformed("expected a unit")),
            Some('(') => {
                self.bump();
                let inner = self.expression()?;
                if self.eat(')') {
                    Ok(inner)
                } else {
                    Err(self.malformed("unclosed parenthesis"))
                }
            }
            Some(c) if c.is_ascii_digit() || c == '.' => self.number(),
            Some(c) if is_operator(c) => Err(self.malformed(format!("expected a unit, found `{c}`"))),
            Some(_) => self.identifier(),
        }
    }

    fn number(&mut self) -> Result<Parsed> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit() || c == '.') {
            self.bump();
        }
        let text = &self.input[start..self.pos];
        let value: Scalar = text
            .parse()
            .map_err(|_| self.malformed(format!("invalid number `{text}`")))?;
        Ok(Parsed {
            dimension: DimensionVector::DIMENSIONLESS,
            rule: ConversionRule::linear(value),
            label: text.to_owned(),
        })
    }

    fn identifier(&mut self) -> Result<Parsed> {
        let start = self.pos;
        while self.peek().is_some_and(|c| !c.is_whitespace() && !is_operator(c)) {
            self.bump();
        }
        let text = &self.input[start..self.pos];
        let def = self.registry.lookup(text)?;
        Ok(Parsed {
            dimension: def.dimension(),
            rule: def.rule(),
            label: text.to_owned(),
        })
    }

    fn exponent(&mut self) -> Result<Exponent> {
        if self.eat('(') {
            let numerator = self.integer()?;
            let exponent = if self.eat('/') {
                Exponent::try_new(numerator, self.integer()?)?
            } else {
                Exponent::integer(numerator)
            };
            if self.eat(')') {
                Ok(exponent)
            } else {
                Err(self.malformed("unclosed exponent"))
            }
        } else {
            Ok(Exponent::integer(self.integer()?))
        }
    }

    fn integer(&mut self) -> Result<i64> {
        self.skip_whitespace();
        let start = self.pos;
        if matches!(self.peek(), Some('-' | '+')) {
            self.bump();
        }
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
        let text = &self.input[start..self.pos];
        text.parse()
            .map_err(|_| self.malformed(format!("expected an integer exponent, found `{text}`")))
    }
}
