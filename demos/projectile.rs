use dimensional::prelude::*;

fn main() {
    // Ball thrown at 108 km/h, 40° above the horizon, no drag.
    let speed = Velocity::new::<KilometersPerHour>(108.0);
    let launch = Angle::new::<Degrees>(40.0);

    let vx: Velocity = speed * launch.cos();
    let vy: Velocity = speed * launch.sin();
    let flight: Time = 2.0 * vy / STANDARD_GRAVITY;
    let range: Length = vx * flight;
    let apex: Length = vy * vy / (2.0 * STANDARD_GRAVITY);

    println!("time of flight: {flight:.3}");
    println!("range: {:.2} m ({:.1} ft)", range.value_as::<Meters>(), range.value_as::<Feet>());
    println!("apex: {:.2} m", apex.value_as::<Meters>());

    // Units picked at runtime go through the registry.
    let units = UnitRegistry::standard();
    let range = DynQuantity::from(range);
    for unit in ["yd", "km", "nmi", "s"] {
        match units.value_in(&range, unit) {
            Ok(value) => println!("range in {unit}: {value:.4}"),
            Err(err) => println!("range in {unit}: {err}"),
        }
    }
}
