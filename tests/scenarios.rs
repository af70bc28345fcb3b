//! End-to-end scenarios across the typed and runtime paths.

use approx::assert_relative_eq;
use rstest::rstest;

use dimensional::prelude::*;

#[test]
fn force_from_mass_and_acceleration() {
    let mass = Mass::new::<Kilograms>(2.0);
    let acceleration = Acceleration::new::<MetersPerSecondSquared>(2.0);
    let force: Force = mass * acceleration;
    assert_relative_eq!(force.value_as::<Newtons>(), 4.0);
    assert_relative_eq!(force.value_as::<Dynes>(), 4.0e5, max_relative = 1e-12);
    assert_eq!(Force::SIGNATURE, "kilograms^1|meters^1|seconds^-2");
}

#[test]
fn frequency_from_period() {
    let period = Time::new::<Seconds>(2.0);
    let frequency: Frequency = 1.0 / period;
    assert_relative_eq!(frequency.value_as::<Hertz>(), 0.5);
    assert_relative_eq!((frequency * Time::new::<Minutes>(1.0)).value(), 30.0);
}

#[test]
fn temperature_differences_ignore_offsets() {
    let drop = Temperature::new::<Kelvin>(100.0) - Temperature::new::<Celsius>(26.85);
    assert_relative_eq!(drop.value_as::<Kelvin>(), 73.15, max_relative = 1e-12);

    let reading = Point::new::<Celsius>(26.85) - Point::new::<Kelvin>(100.0);
    assert_relative_eq!(reading.value_as::<Kelvin>(), 200.0, max_relative = 1e-12);
    assert_relative_eq!(convert::<Celsius, Fahrenheit>(-40.0), -40.0, max_relative = 1e-12);
    assert_relative_eq!(convert_interval::<Celsius, Fahrenheit>(10.0), 18.0, max_relative = 1e-12);
}

#[rstest]
#[case::atmospheres(convert::<Pascals, Atmospheres>(1.0), 9.869_23e-6)]
#[case::bar(convert::<Pascals, Bar>(1.0), 1e-5)]
#[case::torr(convert::<Pascals, Torr>(1.0), 0.007_500_62)]
#[case::kilopascals(convert::<Pascals, Kilopascals>(1.0), 1e-3)]
#[case::psi(convert::<Pascals, Psi>(1.0), 1.450_377e-4)]
fn one_pascal_in_other_units(#[case] converted: f64, #[case] expected: f64) {
    assert!((converted - expected).abs() < 1e-7, "{converted} vs {expected}");
}

#[rstest]
#[case("km/h", "mph", 100.0, 62.137_119_223_733_4)]
#[case("kN", "lbf", 1.0, 224.808_943_099_710_5)]
#[case("kWh", "kcal", 1.0, 860.420_650_095_602_3)]
#[case("L", "gal", 3.785_411_784, 1.0)]
#[case("rpm", "rad/s", 60.0, core::f64::consts::TAU)]
#[case("°F", "K", 212.0, 373.15)]
fn registry_conversions(#[case] from: &str, #[case] to: &str, #[case] value: f64, #[case] expected: f64) {
    let units = UnitRegistry::standard();
    assert_relative_eq!(units.convert(value, from, to).unwrap(), expected, max_relative = 1e-9);
}

#[test]
fn runtime_values_become_typed_values() {
    let units = UnitRegistry::standard();
    let work = units.quantity(3.0, "kJ").unwrap();
    let time = units.quantity(1.0, "min").unwrap();
    let power: Power = work.try_div(time).and_then(Power::try_from).unwrap();
    assert_relative_eq!(power.value_as::<Watts>(), 50.0);

    let area = units.quantity(2.25, "m^2").unwrap();
    let wrong: Result<Length> = area.try_into();
    assert!(matches!(wrong, Err(DimensionalError::DimensionMismatch { .. })));
    let side: Length = area.sqrt().and_then(Length::try_from).unwrap();
    assert_relative_eq!(side.value_as::<Centimeters>(), 150.0, max_relative = 1e-12);
}

#[test]
fn photon_energy_in_electronvolts() {
    let wavelength = Length::new::<Nanometers>(500.0);
    let energy: Energy = PLANCK_CONSTANT * SPEED_OF_LIGHT / wavelength;
    assert_relative_eq!(energy.value_as::<Electronvolts>(), 2.479_683_969, max_relative = 1e-8);
}
