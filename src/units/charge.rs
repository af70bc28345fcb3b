//! Electric charge units.

use crate::dimension::ChargeDim;
use crate::{si_prefixed, unit};

unit! {
    /// SI unit of charge, the canonical charge unit.
    pub Coulombs: ChargeDim = "coulombs", "C", canonical;
    /// Charge moved by one ampere in one hour.
    pub AmpereHours: ChargeDim = "ampere-hours", "Ah", Coulombs * 3600.0;
    /// 10⁻³ Ah
    pub MilliampereHours: ChargeDim = "milliampere-hours", "mAh", AmpereHours * 1e-3;
}

si_prefixed! {
    Coulombs: ChargeDim {
        /// 10⁻¹² C
        pub Picocoulombs = Pico, "picocoulombs", "pC";
        /// 10⁻⁹ C
        pub Nanocoulombs = Nano, "nanocoulombs", "nC";
        /// 10⁻⁶ C
        pub Microcoulombs = Micro, "microcoulombs", "µC";
        /// 10⁻³ C
        pub Millicoulombs = Milli, "millicoulombs", "mC";
    }
}
