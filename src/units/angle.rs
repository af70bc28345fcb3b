//! Plane-angle units.

use core::f64::consts::{PI, TAU};

use crate::dimension::AngleDim;
use crate::{si_prefixed, unit};

unit! {
    /// Canonical angle unit.
    pub Radians: AngleDim = "radians", "rad", canonical;
    /// 1/360 of a turn.
    pub Degrees: AngleDim = "degrees", "deg", Radians * (PI / 180.0);
    /// 1/400 of a turn.
    pub Gradians: AngleDim = "gradians", "gon", Radians * (PI / 200.0);
    /// One full turn.
    pub Revolutions: AngleDim = "revolutions", "rev", Radians * TAU;
    /// 1/60 of a degree.
    pub Arcminutes: AngleDim = "arcminutes", "arcmin", Degrees * (1.0 / 60.0);
    /// 1/60 of an arcminute.
    pub Arcseconds: AngleDim = "arcseconds", "arcsec", Arcminutes * (1.0 / 60.0);
}

si_prefixed! {
    Radians: AngleDim {
        /// 10⁻³ rad
        pub Milliradians = Milli, "milliradians", "mrad";
    }
}
