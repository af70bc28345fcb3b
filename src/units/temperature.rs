//! Temperature units.
//!
//! Celsius and Fahrenheit are affine: their readings carry an offset that
//! [`Point`](crate::point::Point) applies and [`Quantity`](crate::quantity::Quantity)
//! ignores.

use crate::dimension::TemperatureDim;
use crate::unit;

unit! {
    /// SI base unit of thermodynamic temperature.
    pub Kelvin: TemperatureDim = "kelvin", "K", canonical;
    /// 5/9 K, zero at absolute zero.
    pub Rankine: TemperatureDim = "rankine", "°R", Kelvin * (5.0 / 9.0);
    /// Kelvin scale shifted so that water freezes at zero.
    pub Celsius: TemperatureDim = "celsius", "°C", Kelvin * 1.0, offset 273.15;
    /// Rankine scale shifted so that water freezes at 32.
    pub Fahrenheit: TemperatureDim = "fahrenheit", "°F", Rankine * 1.0, offset 459.67;
}
