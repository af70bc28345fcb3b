//! Time units.

use crate::dimension::TimeDim;
use crate::{si_prefixed, unit};

unit! {
    /// SI base unit of time.
    pub Seconds: TimeDim = "seconds", "s", canonical;
    /// 60 s
    pub Minutes: TimeDim = "minutes", "min", Seconds * 60.0;
    /// 60 min
    pub Hours: TimeDim = "hours", "h", Minutes * 60.0;
    /// 24 h
    pub Days: TimeDim = "days", "d", Hours * 24.0;
}

si_prefixed! {
    Seconds: TimeDim {
        /// 10⁻⁹ s
        pub Nanoseconds = Nano, "nanoseconds", "ns";
        /// 10⁻⁶ s
        pub Microseconds = Micro, "microseconds", "µs";
        /// 10⁻³ s
        pub Milliseconds = Milli, "milliseconds", "ms";
    }
}
