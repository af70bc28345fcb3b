//! Error types for the runtime-checked parts of the crate.
//!
//! Everything on the statically typed path fails at compile time instead; these
//! variants only surface from [`DynQuantity`](crate::dynamic::DynQuantity),
//! the [`UnitRegistry`](crate::registry::UnitRegistry), fallible exponent
//! construction and deserialisation.

use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimensionalError {
    /// Two operands (or a value and its target type) disagree on dimension.
    #[error("dimension mismatch: expected [{expected}], found [{found}]")]
    DimensionMismatch {
        /// Signature of the required dimension.
        expected: String,
        /// Signature of the dimension that was supplied.
        found: String,
    },
    /// A rational exponent was given a zero denominator.
    #[error("exponent {numerator}/0 has a zero denominator")]
    ZeroDenominator {
        /// Numerator of the rejected exponent.
        numerator: i64,
    },
    /// Exponent arithmetic left the range of a reduced `i64` ratio.
    #[error("exponent arithmetic overflowed the i64 range")]
    ExponentOverflow,
    /// A unit name or symbol is not registered.
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
    /// A unit name or symbol was registered twice.
    #[error("duplicate unit: {0}")]
    DuplicateUnit(String),
    /// A unit expression could not be parsed.
    #[error("malformed unit expression `{expression}`: {reason}")]
    MalformedExpression {
        /// The offending input.
        expression: String,
        /// What went wrong.
        reason: String,
    },
    /// An affine unit such as a Celsius degree appeared inside a product of units.
    #[error("affine unit `{0}` cannot take part in a compound unit")]
    AffineInCompound(String),
    /// A serialised quantity carries the fingerprint of a different dimension.
    #[error("signature fingerprint mismatch: expected {expected:#010x}, found {found:#010x}")]
    SignatureMismatch {
        /// Fingerprint of the target type.
        expected: u32,
        /// Fingerprint found in the input.
        found: u32,
    },
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, DimensionalError>;
