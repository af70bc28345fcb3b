//! Units of derived dimensions.
//!
//! Coherent SI units are declared as products of the base units so their
//! dimensions are checked against [`dim`]; the rest are scaled from them.

use super::*;
use crate::quantities::dim;
use crate::{compound_unit, si_prefixed, unit};

compound_unit! {
    /// kg·m·s⁻²
    pub Newtons: dim::Force = "newtons", "N", [Kilograms ^ 1, Meters ^ 1, Seconds ^ -2];
    /// N·m
    pub Joules: dim::Energy = "joules", "J", [Newtons ^ 1, Meters ^ 1];
    /// N·m, as a moment rather than work.
    pub NewtonMeters: dim::Torque = "newton-meters", "N*m", [Newtons ^ 1, Meters ^ 1];
    /// J·s⁻¹
    pub Watts: dim::Power = "watts", "W", [Joules ^ 1, Seconds ^ -1];
    /// N·m⁻²
    pub Pascals: dim::Pressure = "pascals", "Pa", [Newtons ^ 1, Meters ^ -2];
    /// s⁻¹
    pub Hertz: dim::Frequency = "hertz", "Hz", [Seconds ^ -1];
    /// C·s⁻¹
    pub Amperes: dim::Current = "amperes", "A", [Coulombs ^ 1, Seconds ^ -1];
    /// J·C⁻¹
    pub Volts: dim::Voltage = "volts", "V", [Joules ^ 1, Coulombs ^ -1];
    /// V·A⁻¹
    pub Ohms: dim::Resistance = "ohms", "Ω", [Volts ^ 1, Amperes ^ -1];
    /// Ω⁻¹
    pub Siemens: dim::Conductance = "siemens", "S", [Ohms ^ -1];
    /// C·V⁻¹
    pub Farads: dim::Capacitance = "farads", "F", [Coulombs ^ 1, Volts ^ -1];
    /// V·s
    pub Webers: dim::MagneticFlux = "webers", "Wb", [Volts ^ 1, Seconds ^ 1];
    /// Wb·A⁻¹
    pub Henries: dim::Inductance = "henries", "H", [Webers ^ 1, Amperes ^ -1];
    /// Wb·m⁻²
    pub Teslas: dim::MagneticFluxDensity = "teslas", "T", [Webers ^ 1, Meters ^ -2];
    /// F·m⁻¹
    pub FaradsPerMeter: dim::Permittivity = "farads per meter", "F/m", [Farads ^ 1, Meters ^ -1];
    /// H·m⁻¹
    pub HenriesPerMeter: dim::Permeability = "henries per meter", "H/m", [Henries ^ 1, Meters ^ -1];

    /// m²
    pub SquareMeters: dim::Area = "square meters", "m^2", [Meters ^ 2];
    /// km²
    pub SquareKilometers: dim::Area = "square kilometers", "km^2", [Kilometers ^ 2];
    /// ft²
    pub SquareFeet: dim::Area = "square feet", "ft^2", [Feet ^ 2];
    /// m³
    pub CubicMeters: dim::Volume = "cubic meters", "m^3", [Meters ^ 3];
    /// dm³
    pub Liters: dim::Volume = "liters", "L", [Decimeters ^ 3];
    /// cm³
    pub Milliliters: dim::Volume = "milliliters", "mL", [Centimeters ^ 3];

    /// m·s⁻¹
    pub MetersPerSecond: dim::Velocity = "meters per second", "m/s", [Meters ^ 1, Seconds ^ -1];
    /// km·h⁻¹
    pub KilometersPerHour: dim::Velocity = "kilometers per hour", "km/h", [Kilometers ^ 1, Hours ^ -1];
    /// mi·h⁻¹
    pub MilesPerHour: dim::Velocity = "miles per hour", "mph", [Miles ^ 1, Hours ^ -1];
    /// ft·s⁻¹
    pub FeetPerSecond: dim::Velocity = "feet per second", "ft/s", [Feet ^ 1, Seconds ^ -1];
    /// Nautical miles per hour.
    pub Knots: dim::Velocity = "knots", "kn", [NauticalMiles ^ 1, Hours ^ -1];
    /// m·s⁻²
    pub MetersPerSecondSquared: dim::Acceleration = "meters per second squared", "m/s^2", [Meters ^ 1, Seconds ^ -2];
    /// rad·s⁻¹
    pub RadiansPerSecond: dim::AngularVelocity = "radians per second", "rad/s", [Radians ^ 1, Seconds ^ -1];
    /// Revolutions per minute.
    pub RevolutionsPerMinute: dim::AngularVelocity = "revolutions per minute", "rpm", [Revolutions ^ 1, Minutes ^ -1];
    /// kg·m·s⁻¹
    pub KilogramMetersPerSecond: dim::Momentum = "kilogram-meters per second", "kg*m/s", [Kilograms ^ 1, MetersPerSecond ^ 1];
    /// J·s
    pub JouleSeconds: dim::Action = "joule-seconds", "J*s", [Joules ^ 1, Seconds ^ 1];

    /// kg·m⁻³
    pub KilogramsPerCubicMeter: dim::Density = "kilograms per cubic meter", "kg/m^3", [Kilograms ^ 1, Meters ^ -3];
    /// g·cm⁻³
    pub GramsPerCubicCentimeter: dim::Density = "grams per cubic centimeter", "g/cm^3", [Grams ^ 1, Centimeters ^ -3];

    /// J·K⁻¹
    pub JoulesPerKelvin: dim::Entropy = "joules per kelvin", "J/K", [Joules ^ 1, Kelvin ^ -1];
    /// J·kg⁻¹·K⁻¹
    pub JoulesPerKilogramKelvin: dim::SpecificHeatCapacity = "joules per kilogram kelvin", "J/(kg*K)", [Joules ^ 1, Kilograms ^ -1, Kelvin ^ -1];
    /// J·g⁻¹·K⁻¹
    pub JoulesPerGramKelvin: dim::SpecificHeatCapacity = "joules per gram kelvin", "J/(g*K)", [Joules ^ 1, Grams ^ -1, Kelvin ^ -1];
    /// J·mol⁻¹·K⁻¹
    pub JoulesPerMoleKelvin: dim::MolarHeatCapacity = "joules per mole kelvin", "J/(mol*K)", [Joules ^ 1, Moles ^ -1, Kelvin ^ -1];
    /// g·mol⁻¹
    pub GramsPerMole: dim::MolarMass = "grams per mole", "g/mol", [Grams ^ 1, Moles ^ -1];
    /// kg·mol⁻¹
    pub KilogramsPerMole: dim::MolarMass = "kilograms per mole", "kg/mol", [Kilograms ^ 1, Moles ^ -1];
    /// mol·L⁻¹
    pub MolesPerLiter: dim::Concentration = "moles per liter", "mol/L", [Moles ^ 1, Liters ^ -1];
    /// mol⁻¹
    pub PerMole: dim::PerAmount = "per mole", "1/mol", [Moles ^ -1];
    /// m³·kg⁻¹·s⁻²
    pub CubicMetersPerKilogramSecondSquared: dim::GravitationalCoupling =
        "cubic meters per kilogram second squared", "m^3/(kg*s^2)", [Meters ^ 3, Kilograms ^ -1, Seconds ^ -2];
}

unit! {
    /// Force of one pound mass under standard gravity.
    pub PoundsForce: dim::Force = "pounds-force", "lbf", Newtons * 4.448_221_615_260_5;
    /// CGS unit of force.
    pub Dynes: dim::Force = "dynes", "dyn", Newtons * 1e-5;

    /// Thermochemical calorie.
    pub Calories: dim::Energy = "calories", "cal", Joules * 4.184;
    /// 3.6 MJ
    pub KilowattHours: dim::Energy = "kilowatt-hours", "kWh", Joules * 3.6e6;
    /// Exact since the 2019 SI redefinition.
    pub Electronvolts: dim::Energy = "electronvolts", "eV", Joules * 1.602_176_634e-19;

    /// Mechanical horsepower.
    pub Horsepower: dim::Power = "horsepower", "hp", Watts * 745.699_871_582_270_2;

    /// 10⁵ Pa
    pub Bar: dim::Pressure = "bar", "bar", Pascals * 1e5;
    /// Standard atmosphere.
    pub Atmospheres: dim::Pressure = "atmospheres", "atm", Pascals * 101_325.0;
    /// 1/760 atm
    pub Torr: dim::Pressure = "torr", "Torr", Atmospheres * (1.0 / 760.0);
    /// Pounds-force per square inch.
    pub Psi: dim::Pressure = "psi", "psi", Pascals * 6_894.757_293_168_361;

    /// Standard acceleration due to gravity.
    pub StandardGravity: dim::Acceleration = "standard gravities", "g0", MetersPerSecondSquared * 9.806_65;

    /// 10⁴ m²
    pub Hectares: dim::Area = "hectares", "ha", SquareMeters * 1e4;
    /// US liquid gallon.
    pub UsGallons: dim::Volume = "US gallons", "gal", Liters * 3.785_411_784;
}

si_prefixed! {
    Newtons: dim::Force {
        /// 10³ N
        pub Kilonewtons = Kilo, "kilonewtons", "kN";
    }
}

si_prefixed! {
    Joules: dim::Energy {
        /// 10³ J
        pub Kilojoules = Kilo, "kilojoules", "kJ";
        /// 10⁶ J
        pub Megajoules = Mega, "megajoules", "MJ";
    }
}

si_prefixed! {
    Calories: dim::Energy {
        /// Dietary calorie.
        pub Kilocalories = Kilo, "kilocalories", "kcal";
    }
}

si_prefixed! {
    Watts: dim::Power {
        /// 10⁻³ W
        pub Milliwatts = Milli, "milliwatts", "mW";
        /// 10³ W
        pub Kilowatts = Kilo, "kilowatts", "kW";
        /// 10⁶ W
        pub Megawatts = Mega, "megawatts", "MW";
    }
}

si_prefixed! {
    Pascals: dim::Pressure {
        /// 10² Pa
        pub Hectopascals = Hecto, "hectopascals", "hPa";
        /// 10³ Pa
        pub Kilopascals = Kilo, "kilopascals", "kPa";
        /// 10⁶ Pa
        pub Megapascals = Mega, "megapascals", "MPa";
    }
}

si_prefixed! {
    Hertz: dim::Frequency {
        /// 10³ Hz
        pub Kilohertz = Kilo, "kilohertz", "kHz";
        /// 10⁶ Hz
        pub Megahertz = Mega, "megahertz", "MHz";
        /// 10⁹ Hz
        pub Gigahertz = Giga, "gigahertz", "GHz";
    }
}

si_prefixed! {
    Amperes: dim::Current {
        /// 10⁻⁶ A
        pub Microamperes = Micro, "microamperes", "µA";
        /// 10⁻³ A
        pub Milliamperes = Milli, "milliamperes", "mA";
    }
}

si_prefixed! {
    Volts: dim::Voltage {
        /// 10⁻³ V
        pub Millivolts = Milli, "millivolts", "mV";
        /// 10³ V
        pub Kilovolts = Kilo, "kilovolts", "kV";
    }
}

si_prefixed! {
    Ohms: dim::Resistance {
        /// 10³ Ω
        pub Kiloohms = Kilo, "kiloohms", "kΩ";
        /// 10⁶ Ω
        pub Megaohms = Mega, "megaohms", "MΩ";
    }
}

si_prefixed! {
    Farads: dim::Capacitance {
        /// 10⁻¹² F
        pub Picofarads = Pico, "picofarads", "pF";
        /// 10⁻⁹ F
        pub Nanofarads = Nano, "nanofarads", "nF";
        /// 10⁻⁶ F
        pub Microfarads = Micro, "microfarads", "µF";
    }
}

si_prefixed! {
    Henries: dim::Inductance {
        /// 10⁻⁶ H
        pub Microhenries = Micro, "microhenries", "µH";
        /// 10⁻³ H
        pub Millihenries = Milli, "millihenries", "mH";
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rstest::rstest;

    use super::*;
    use crate::conversion::convert;
    use crate::unit::Unit;

    #[rstest]
    #[case::atmospheres(Atmospheres::RULE.slope(), 9.869_23e-6)]
    #[case::bar(Bar::RULE.slope(), 1e-5)]
    #[case::torr(Torr::RULE.slope(), 0.007_500_62)]
    #[case::kilopascals(Kilopascals::RULE.slope(), 1e-3)]
    fn one_pascal_fans_out(#[case] slope: f64, #[case] expected: f64) {
        assert_relative_eq!(1.0 / slope, expected, epsilon = 1e-7);
    }

    #[test]
    fn energy_units() {
        assert_relative_eq!(convert::<KilowattHours, Megajoules>(1.0), 3.6, max_relative = 1e-12);
        assert_relative_eq!(convert::<Kilocalories, Kilojoules>(1.0), 4.184, max_relative = 1e-12);
        assert_relative_eq!(convert::<Horsepower, Watts>(1.0), 745.699_871_582_270_2);
    }

    #[test]
    fn speeds_and_volumes() {
        assert_relative_eq!(convert::<MilesPerHour, KilometersPerHour>(1.0), 1.609_344, max_relative = 1e-12);
        assert_relative_eq!(convert::<Knots, MetersPerSecond>(1.0), 1852.0 / 3600.0, max_relative = 1e-12);
        assert_relative_eq!(convert::<CubicMeters, Liters>(1.0), 1000.0, max_relative = 1e-12);
        assert_relative_eq!(convert::<Liters, Milliliters>(1.0), 1000.0, max_relative = 1e-12);
        assert_relative_eq!(convert::<RevolutionsPerMinute, RadiansPerSecond>(60.0), core::f64::consts::TAU, max_relative = 1e-12);
    }

    #[test]
    fn electrical_units_are_coherent() {
        assert_relative_eq!(Ohms::RULE.slope(), 1.0);
        assert_relative_eq!(Henries::RULE.slope(), 1.0);
        assert_relative_eq!(convert::<Microfarads, Farads>(1.0), 1e-6);
        assert_relative_eq!(convert::<Kiloohms, Ohms>(4.7), 4700.0, max_relative = 1e-12);
        assert_eq!(Siemens.to_string(), "S");
    }
}
