//! Mass units.

use crate::dimension::MassDim;
use crate::{si_prefixed, unit};

unit! {
    /// SI base unit of mass and the canonical mass unit.
    pub Kilograms: MassDim = "kilograms", "kg", canonical;
    /// 10⁻³ kg
    pub Grams: MassDim = "grams", "g", Kilograms * 1e-3;
    /// Metric ton.
    pub Tonnes: MassDim = "tonnes", "t", Kilograms * 1000.0;
    /// International avoirdupois pound.
    pub Pounds: MassDim = "pounds", "lb", Kilograms * 0.453_592_37;
    /// Avoirdupois ounce.
    pub Ounces: MassDim = "ounces", "oz", Pounds * 0.0625;
    /// Mass accelerated at 1 ft/s² by one pound-force.
    pub Slugs: MassDim = "slugs", "slug", Kilograms * 14.593_902_937_206_364;
}

si_prefixed! {
    Grams: MassDim {
        /// 10⁻⁶ g
        pub Micrograms = Micro, "micrograms", "µg";
        /// 10⁻³ g
        pub Milligrams = Milli, "milligrams", "mg";
    }
}
