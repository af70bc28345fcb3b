//! Length units.

use crate::dimension::LengthDim;
use crate::{si_prefixed, unit};

unit! {
    /// SI base unit of length.
    pub Meters: LengthDim = "meters", "m", canonical;
    /// International foot, exactly 0.3048 m.
    pub Feet: LengthDim = "feet", "ft", Meters * 0.3048;
    /// International inch.
    pub Inches: LengthDim = "inches", "in", Feet * (1.0 / 12.0);
    /// Three feet.
    pub Yards: LengthDim = "yards", "yd", Feet * 3.0;
    /// Statute mile.
    pub Miles: LengthDim = "miles", "mi", Feet * 5280.0;
    /// International nautical mile.
    pub NauticalMiles: LengthDim = "nautical miles", "nmi", Meters * 1852.0;
    /// IAU 2012 astronomical unit.
    pub AstronomicalUnits: LengthDim = "astronomical units", "au", Meters * 149_597_870_700.0;
}

si_prefixed! {
    Meters: LengthDim {
        /// 10⁻¹² m
        pub Picometers = Pico, "picometers", "pm";
        /// 10⁻⁹ m
        pub Nanometers = Nano, "nanometers", "nm";
        /// 10⁻⁶ m
        pub Micrometers = Micro, "micrometers", "µm";
        /// 10⁻³ m
        pub Millimeters = Milli, "millimeters", "mm";
        /// 10⁻² m
        pub Centimeters = Centi, "centimeters", "cm";
        /// 10⁻¹ m
        pub Decimeters = Deci, "decimeters", "dm";
        /// 10³ m
        pub Kilometers = Kilo, "kilometers", "km";
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::conversion::convert;
    use super::*;

    #[test]
    fn imperial_lengths() {
        assert_relative_eq!(convert::<Miles, Kilometers>(1.0), 1.609_344, max_relative = 1e-12);
        assert_relative_eq!(convert::<Yards, Inches>(1.0), 36.0, max_relative = 1e-12);
        assert_relative_eq!(convert::<Inches, Centimeters>(1.0), 2.54, max_relative = 1e-12);
        assert_relative_eq!(convert::<NauticalMiles, Meters>(1.0), 1852.0);
    }
}
