//! The unit catalogue.
//!
//! Every unit is a zero-sized type implementing [`Unit`](crate::unit::Unit).
//! Names are plural CamelCase (`Meters`, `KilometersPerHour`); the runtime
//! names used by the [`UnitRegistry`](crate::registry::UnitRegistry) are the
//! same words in lower case.

mod amount;
mod angle;
mod charge;
mod derived;
mod length;
mod mass;
mod temperature;
mod time;

pub use amount::*;
pub use angle::*;
pub use charge::*;
pub use derived::*;
pub use length::*;
pub use mass::*;
pub use temperature::*;
pub use time::*;
