//! Physical constants as typed quantities, plus a few helpers built on them.
//!
//! ## Accuracy
//!
//! Constants marked "exact" have zero uncertainty by SI definition (2019 revision).
//! Measured constants are given to the precision published by CODATA 2018.
//!
//! ## References
//!
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>
//! - Tiesinga, E., Mohr, P. J., Newell, D. B., & Taylor, B. N. (2021). CODATA Recommended Values of the Fundamental Physical Constants: 2018.

use core::f64::consts::TAU;

use crate::quantities::{
    Acceleration, Action, AngularVelocity, Charge, Entropy, Frequency, GravitationalCoupling, Length, Mass,
    MolarHeatCapacity, PerAmount, Permeability, Permittivity, Pressure, Resistance, Velocity,
};
use crate::quantity::Quantity;

/// Speed of light in vacuum _c_. Exact: 299 792 458 m/s.
pub const SPEED_OF_LIGHT: Velocity = Quantity::from_canonical(299_792_458.0);
/// Vacuum permittivity ε₀, 8.8541878128 × 10⁻¹² F/m.
pub const VACUUM_PERMITTIVITY: Permittivity = Quantity::from_canonical(8.854_187_812_8e-12);
/// Vacuum permeability μ₀, 1.25663706212 × 10⁻⁶ H/m.
pub const VACUUM_PERMEABILITY: Permeability = Quantity::from_canonical(1.256_637_062_12e-6);
/// Characteristic impedance of free space Z₀ = √(μ₀/ε₀) ≈ 376.730313668 Ω.
pub const FREE_SPACE_IMPEDANCE: Resistance = Quantity::from_canonical(376.730_313_668);
/// Elementary charge _e_. Exact: 1.602176634 × 10⁻¹⁹ C.
pub const ELEMENTARY_CHARGE: Charge = Quantity::from_canonical(1.602_176_634e-19);
/// Boltzmann constant _k_B_. Exact: 1.380649 × 10⁻²³ J/K.
pub const BOLTZMANN_CONSTANT: Entropy = Quantity::from_canonical(1.380_649e-23);
/// Planck constant _h_. Exact: 6.62607015 × 10⁻³⁴ J·s.
pub const PLANCK_CONSTANT: Action = Quantity::from_canonical(6.626_070_15e-34);
/// Avogadro constant _N_A_. Exact: 6.02214076 × 10²³ mol⁻¹.
pub const AVOGADRO_CONSTANT: PerAmount = Quantity::from_canonical(6.022_140_76e23);
/// Molar gas constant _R_ = _N_A_ · _k_B_. Exact: 8.31446261815324 J/(mol·K).
pub const GAS_CONSTANT: MolarHeatCapacity = Quantity::from_canonical(8.314_462_618_153_24);
/// Newtonian constant of gravitation _G_, 6.67430 × 10⁻¹¹ m³/(kg·s²).
pub const GRAVITATIONAL_CONSTANT: GravitationalCoupling = Quantity::from_canonical(6.674_30e-11);
/// Standard acceleration of gravity _g_n_. Exact: 9.80665 m/s².
pub const STANDARD_GRAVITY: Acceleration = Quantity::from_canonical(9.806_65);
/// Standard atmosphere. Exact: 101 325 Pa.
pub const STANDARD_ATMOSPHERE: Pressure = Quantity::from_canonical(101_325.0);
/// Electron rest mass _m_e_, 9.1093837015 × 10⁻³¹ kg.
pub const ELECTRON_MASS: Mass = Quantity::from_canonical(9.109_383_701_5e-31);
/// Proton rest mass _m_p_, 1.67262192369 × 10⁻²⁷ kg.
pub const PROTON_MASS: Mass = Quantity::from_canonical(1.672_621_923_69e-27);

/// Returns the angular frequency corresponding to a linear frequency.
#[inline]
#[must_use]
pub fn angular_frequency(frequency: Frequency) -> AngularVelocity {
    Quantity::from_canonical(TAU * frequency.value())
}

/// Returns the free-space wavelength for a given frequency.
#[inline]
#[must_use]
pub fn wavelength_from_frequency(frequency: Frequency) -> Length {
    SPEED_OF_LIGHT / frequency
}
