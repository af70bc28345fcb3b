//! Named dimensions and the quantity types built on them.
//!
//! [`dim`] holds the type-level dimension of every named physical quantity;
//! the aliases at the top level pair each with [`Quantity`]. Because two
//! dimensions with the same exponents are the same type, the result of any
//! arithmetic expression can be bound directly to the matching alias:
//!
//! ```
//! use dimensional::quantities::{Power, Time, Energy};
//! use dimensional::units::{Joules, Seconds, Watts};
//!
//! let work = Energy::new::<Joules>(500.0);
//! let p: Power = work / Time::new::<Seconds>(10.0);
//! assert_eq!(p.value_as::<Watts>(), 50.0);
//! ```

use crate::quantity::Quantity;

/// Type-level dimensions, parameters in the order mass, length, time,
/// temperature, charge, amount, angle.
pub mod dim {
    use typenum::{N1, N2, N3, P1, P2, P3, Z0};

    use crate::dimension::Dim;

    pub use crate::dimension::{
        AmountDim as Amount, AngleDim as Angle, ChargeDim as Charge, Dimensionless, FrequencyDim as Frequency,
        LengthDim as Length, MassDim as Mass, TemperatureDim as Temperature, TimeDim as Time,
    };

    /// m²
    pub type Area = Dim<Z0, P2, Z0, Z0, Z0, Z0, Z0>;
    /// m³
    pub type Volume = Dim<Z0, P3, Z0, Z0, Z0, Z0, Z0>;
    /// m·s⁻¹
    pub type Velocity = Dim<Z0, P1, N1, Z0, Z0, Z0, Z0>;
    /// m·s⁻²
    pub type Acceleration = Dim<Z0, P1, N2, Z0, Z0, Z0, Z0>;
    /// rad·s⁻¹
    pub type AngularVelocity = Dim<Z0, Z0, N1, Z0, Z0, Z0, P1>;
    /// kg·m·s⁻¹
    pub type Momentum = Dim<P1, P1, N1, Z0, Z0, Z0, Z0>;
    /// kg·m·s⁻²
    pub type Force = Dim<P1, P1, N2, Z0, Z0, Z0, Z0>;
    /// kg·m²·s⁻²
    pub type Energy = Dim<P1, P2, N2, Z0, Z0, Z0, Z0>;
    /// Same exponents as [`Energy`].
    pub type Torque = Energy;
    /// kg·m²·s⁻³
    pub type Power = Dim<P1, P2, N3, Z0, Z0, Z0, Z0>;
    /// kg·m⁻¹·s⁻²
    pub type Pressure = Dim<P1, N1, N2, Z0, Z0, Z0, Z0>;
    /// kg·m²·s⁻¹
    pub type Action = Dim<P1, P2, N1, Z0, Z0, Z0, Z0>;
    /// kg·m⁻³
    pub type Density = Dim<P1, N3, Z0, Z0, Z0, Z0, Z0>;
    /// C·s⁻¹
    pub type Current = Dim<Z0, Z0, N1, Z0, P1, Z0, Z0>;
    /// kg·m²·s⁻²·C⁻¹
    pub type Voltage = Dim<P1, P2, N2, Z0, N1, Z0, Z0>;
    /// kg·m²·s⁻¹·C⁻²
    pub type Resistance = Dim<P1, P2, N1, Z0, N2, Z0, Z0>;
    /// kg⁻¹·m⁻²·s·C²
    pub type Conductance = Dim<N1, N2, P1, Z0, P2, Z0, Z0>;
    /// kg⁻¹·m⁻²·s²·C²
    pub type Capacitance = Dim<N1, N2, P2, Z0, P2, Z0, Z0>;
    /// kg·m²·C⁻²
    pub type Inductance = Dim<P1, P2, Z0, Z0, N2, Z0, Z0>;
    /// kg·m²·s⁻¹·C⁻¹
    pub type MagneticFlux = Dim<P1, P2, N1, Z0, N1, Z0, Z0>;
    /// kg·s⁻¹·C⁻¹
    pub type MagneticFluxDensity = Dim<P1, Z0, N1, Z0, N1, Z0, Z0>;
    /// kg⁻¹·m⁻³·s²·C²
    pub type Permittivity = Dim<N1, N3, P2, Z0, P2, Z0, Z0>;
    /// kg·m·C⁻²
    pub type Permeability = Dim<P1, P1, Z0, Z0, N2, Z0, Z0>;
    /// kg·m²·s⁻²·K⁻¹
    pub type Entropy = Dim<P1, P2, N2, N1, Z0, Z0, Z0>;
    /// m²·s⁻²·K⁻¹
    pub type SpecificHeatCapacity = Dim<Z0, P2, N2, N1, Z0, Z0, Z0>;
    /// kg·m²·s⁻²·K⁻¹·mol⁻¹
    pub type MolarHeatCapacity = Dim<P1, P2, N2, N1, Z0, N1, Z0>;
    /// kg·mol⁻¹
    pub type MolarMass = Dim<P1, Z0, Z0, Z0, Z0, N1, Z0>;
    /// mol·m⁻³
    pub type Concentration = Dim<Z0, N3, Z0, Z0, Z0, P1, Z0>;
    /// mol⁻¹
    pub type PerAmount = Dim<Z0, Z0, Z0, Z0, Z0, N1, Z0>;
    /// m³·kg⁻¹·s⁻²
    pub type GravitationalCoupling = Dim<N1, P3, N2, Z0, Z0, Z0, Z0>;
}

/// Pure number.
pub type Ratio = Quantity<dim::Dimensionless>;
/// Mass.
pub type Mass = Quantity<dim::Mass>;
/// Length.
pub type Length = Quantity<dim::Length>;
/// Duration.
pub type Time = Quantity<dim::Time>;
/// Temperature difference.
pub type Temperature = Quantity<dim::Temperature>;
/// Electric charge.
pub type Charge = Quantity<dim::Charge>;
/// Amount of substance.
pub type Amount = Quantity<dim::Amount>;
/// Plane angle.
pub type Angle = Quantity<dim::Angle>;
/// Area.
pub type Area = Quantity<dim::Area>;
/// Volume.
pub type Volume = Quantity<dim::Volume>;
/// Speed.
pub type Velocity = Quantity<dim::Velocity>;
/// Acceleration.
pub type Acceleration = Quantity<dim::Acceleration>;
/// Angular velocity.
pub type AngularVelocity = Quantity<dim::AngularVelocity>;
/// Frequency.
pub type Frequency = Quantity<dim::Frequency>;
/// Momentum.
pub type Momentum = Quantity<dim::Momentum>;
/// Force.
pub type Force = Quantity<dim::Force>;
/// Energy, work or heat.
pub type Energy = Quantity<dim::Energy>;
/// Torque; the same type as [`Energy`].
pub type Torque = Quantity<dim::Torque>;
/// Power.
pub type Power = Quantity<dim::Power>;
/// Pressure or stress.
pub type Pressure = Quantity<dim::Pressure>;
/// Action, energy times time.
pub type Action = Quantity<dim::Action>;
/// Mass density.
pub type Density = Quantity<dim::Density>;
/// Electric current.
pub type Current = Quantity<dim::Current>;
/// Electric potential difference.
pub type Voltage = Quantity<dim::Voltage>;
/// Electrical resistance or impedance magnitude.
pub type Resistance = Quantity<dim::Resistance>;
/// Electrical conductance.
pub type Conductance = Quantity<dim::Conductance>;
/// Capacitance.
pub type Capacitance = Quantity<dim::Capacitance>;
/// Inductance.
pub type Inductance = Quantity<dim::Inductance>;
/// Magnetic flux.
pub type MagneticFlux = Quantity<dim::MagneticFlux>;
/// Magnetic flux density.
pub type MagneticFluxDensity = Quantity<dim::MagneticFluxDensity>;
/// Electric permittivity.
pub type Permittivity = Quantity<dim::Permittivity>;
/// Magnetic permeability.
pub type Permeability = Quantity<dim::Permeability>;
/// Entropy or heat capacity.
pub type Entropy = Quantity<dim::Entropy>;
/// Heat capacity per unit mass.
pub type SpecificHeatCapacity = Quantity<dim::SpecificHeatCapacity>;
/// Heat capacity per mole.
pub type MolarHeatCapacity = Quantity<dim::MolarHeatCapacity>;
/// Mass per mole.
pub type MolarMass = Quantity<dim::MolarMass>;
/// Amount per volume.
pub type Concentration = Quantity<dim::Concentration>;
/// Reciprocal amount of substance.
pub type PerAmount = Quantity<dim::PerAmount>;
/// Unit of the gravitational constant.
pub type GravitationalCoupling = Quantity<dim::GravitationalCoupling>;

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::dim;
    use crate::dimension::{DimInverse, DimProduct, DimQuotient};

    fn same<A: 'static, B: 'static>() -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }

    #[test]
    fn mechanical_dimensions_compose() {
        assert!(same::<DimQuotient<dim::Length, dim::Time>, dim::Velocity>());
        assert!(same::<DimQuotient<dim::Velocity, dim::Time>, dim::Acceleration>());
        assert!(same::<DimProduct<dim::Mass, dim::Acceleration>, dim::Force>());
        assert!(same::<DimProduct<dim::Force, dim::Length>, dim::Energy>());
        assert!(same::<DimQuotient<dim::Energy, dim::Time>, dim::Power>());
        assert!(same::<DimQuotient<dim::Force, dim::Area>, dim::Pressure>());
        assert!(same::<DimProduct<dim::Energy, dim::Time>, dim::Action>());
        assert!(same::<DimQuotient<dim::Mass, dim::Volume>, dim::Density>());
        assert!(same::<DimInverse<dim::Time>, dim::Frequency>());
    }

    #[test]
    fn electrical_dimensions_compose() {
        assert!(same::<DimQuotient<dim::Charge, dim::Time>, dim::Current>());
        assert!(same::<DimQuotient<dim::Energy, dim::Charge>, dim::Voltage>());
        assert!(same::<DimQuotient<dim::Voltage, dim::Current>, dim::Resistance>());
        assert!(same::<DimInverse<dim::Resistance>, dim::Conductance>());
        assert!(same::<DimQuotient<dim::Charge, dim::Voltage>, dim::Capacitance>());
        assert!(same::<DimQuotient<DimProduct<dim::Voltage, dim::Time>, dim::Current>, dim::Inductance>());
        assert!(same::<DimProduct<dim::Voltage, dim::Time>, dim::MagneticFlux>());
        assert!(same::<DimQuotient<dim::MagneticFlux, dim::Area>, dim::MagneticFluxDensity>());
        assert!(same::<DimQuotient<dim::Capacitance, dim::Length>, dim::Permittivity>());
        assert!(same::<DimQuotient<dim::Inductance, dim::Length>, dim::Permeability>());
    }

    #[test]
    fn thermal_and_chemical_dimensions_compose() {
        assert!(same::<DimQuotient<dim::Energy, dim::Temperature>, dim::Entropy>());
        assert!(same::<DimQuotient<dim::Entropy, dim::Mass>, dim::SpecificHeatCapacity>());
        assert!(same::<DimQuotient<dim::Entropy, dim::Amount>, dim::MolarHeatCapacity>());
        assert!(same::<DimQuotient<dim::Mass, dim::Amount>, dim::MolarMass>());
        assert!(same::<DimQuotient<dim::Amount, dim::Volume>, dim::Concentration>());
        assert!(same::<DimInverse<dim::Amount>, dim::PerAmount>());
        assert!(same::<
            DimQuotient<DimProduct<dim::Force, dim::Area>, DimProduct<dim::Mass, dim::Mass>>,
            dim::GravitationalCoupling,
        >());
    }
}
