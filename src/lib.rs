#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Fixed-capacity strings and hashing usable in `const` contexts.
pub mod literal;
/// Shared numerical primitives.
pub mod math;
/// SI prefix table and prefix marker types.
pub mod prefix;
/// Base kinds and rational exponents.
pub mod exponent;
/// Dimension vectors at the value and type level.
pub mod dimension;
/// Affine conversion rules between units.
pub mod conversion;
/// The `Unit` trait and the unit declaration macros.
pub mod unit;
/// Typed quantities (intervals).
pub mod quantity;
/// Typed absolute readings on affine scales.
pub mod point;
/// Named derived dimensions and quantity aliases.
pub mod quantities;
/// The unit catalogue.
pub mod units;
/// Physical constants as typed quantities.
pub mod constants;
/// Quantities with a runtime-checked dimension.
pub mod dynamic;
/// Runtime unit lookup and expression parsing.
pub mod registry;
/// Error types for the runtime-checked paths.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
