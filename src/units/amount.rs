//! Amount-of-substance units.

use crate::dimension::AmountDim;
use crate::{si_prefixed, unit};

unit! {
    /// SI base unit of amount of substance.
    pub Moles: AmountDim = "moles", "mol", canonical;
}

si_prefixed! {
    Moles: AmountDim {
        /// 10⁻⁹ mol
        pub Nanomoles = Nano, "nanomoles", "nmol";
        /// 10⁻⁶ mol
        pub Micromoles = Micro, "micromoles", "µmol";
        /// 10⁻³ mol
        pub Millimoles = Milli, "millimoles", "mmol";
        /// 10³ mol
        pub Kilomoles = Kilo, "kilomoles", "kmol";
    }
}
