//! JSON round-trips of the serialisable types.

#![cfg(feature = "serde")]

use approx::assert_relative_eq;

use dimensional::dimension::DimensionVector;
use dimensional::dynamic::DynQuantity;
use dimensional::exponent::Exponent;
use dimensional::point::Point;
use dimensional::quantities::{dim, Energy, Force, Length};
use dimensional::registry::UnitRegistry;
use dimensional::units::{Celsius, Fahrenheit, Joules, Kilometers, Newtons};

#[test]
fn quantities_carry_their_fingerprint() {
    let force = Force::new::<Newtons>(4.0);
    let json = serde_json::to_string(&force).unwrap();
    assert_eq!(json, format!(r#"{{"value":4.0,"fingerprint":{}}}"#, Force::FINGERPRINT));

    let back: Force = serde_json::from_str(&json).unwrap();
    assert_eq!(back, force);

    let err = serde_json::from_str::<Energy>(&json).unwrap_err();
    assert!(err.to_string().contains("fingerprint mismatch"), "{err}");
}

#[test]
fn points_serialise_as_quantities() {
    let boiling = Point::<dim::Temperature>::new::<Celsius>(100.0);
    let json = serde_json::to_string(&boiling).unwrap();
    let back: Point<dim::Temperature> = serde_json::from_str(&json).unwrap();
    assert_relative_eq!(back.value_as::<Fahrenheit>(), 212.0, max_relative = 1e-12);
}

#[test]
fn runtime_values_round_trip() {
    let units = UnitRegistry::standard();
    let root = units.quantity(9.0, "km").and_then(DynQuantity::sqrt).unwrap();
    let json = serde_json::to_string(&root).unwrap();
    let back: DynQuantity = serde_json::from_str(&json).unwrap();
    assert_relative_eq!(back.value(), root.value(), max_relative = 1e-15);
    assert_eq!(back.dimension(), root.dimension());
    assert_eq!(back.dimension().symbolic(), "m^(1/2)");

    let def = units.lookup("°C").unwrap();
    let json = serde_json::to_string(def).unwrap();
    assert_eq!(&serde_json::from_str::<dimensional::registry::UnitDef>(&json).unwrap(), def);

    let length: Length = serde_json::from_str(&serde_json::to_string(&(2.0 * Kilometers)).unwrap()).unwrap();
    assert_relative_eq!(length.value(), 2000.0);
    assert_relative_eq!(serde_json::from_str::<Energy>(&serde_json::to_string(&(1.5 * Joules)).unwrap()).unwrap().value(), 1.5);
}

#[test]
fn exponents_reject_zero_denominators() {
    let half: Exponent = serde_json::from_str("[2,4]").unwrap();
    assert_eq!(half, Exponent::new(1, 2));
    assert!(serde_json::from_str::<Exponent>("[1,0]").is_err());
    let err = serde_json::from_str::<Exponent>("[-9223372036854775808,-1]").unwrap_err();
    assert!(err.to_string().contains("overflowed"), "{err}");

    let vector = DimensionVector::from_integers([1, 1, -2, 0, 0, 0, 0]);
    let back: DimensionVector = serde_json::from_str(&serde_json::to_string(&vector).unwrap()).unwrap();
    assert_eq!(back, vector);
}
