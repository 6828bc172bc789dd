use std::fmt;

use serde::Serialize;

/// Canonical, layout-independent key of a [`crate::state::State`].
///
/// `interval_code` packs the interval count, the barriers and the unfrozen endpoint slice;
/// `color_code` packs the (normalized) colors as a mixed-radix number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct StateCode {
    pub interval_code: u64,
    pub color_code: u64,
}

impl StateCode {
    #[inline]
    pub const fn new(interval_code: u64, color_code: u64) -> Self {
        Self {
            interval_code,
            color_code,
        }
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.interval_code, self.color_code)
    }
}
