//! Convenience re-exports for everyday use.

pub use crate::constants::*;
pub use crate::conversion::{convert, convert_interval, resolve, Conversion, ConversionRule};
pub use crate::dimension::{Dimension, DimensionVector};
pub use crate::dynamic::DynQuantity;
pub use crate::errors::{DimensionalError, Result};
pub use crate::exponent::{BaseKind, Exponent};
pub use crate::math::Scalar;
pub use crate::point::Point;
pub use crate::quantities::*;
pub use crate::quantity::Quantity;
pub use crate::registry::{RegistryConfig, UnitRegistry};
pub use crate::unit::Unit;
pub use crate::units::*;
