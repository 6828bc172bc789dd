use std::fmt;

use serde::Serialize;

/// A pair of endpoint positions on the board timeline.
///
/// For insertion moves both values are *gap* indices into the endpoint sequence: the new left
/// endpoint goes in front of endpoint `left`, the new right endpoint in front of endpoint `right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Interval {
    pub left: u8,
    pub right: u8,
}

impl Interval {
    #[inline]
    pub const fn new(left: u8, right: u8) -> Self {
        Self { left, right }
    }

    #[inline]
    pub fn with_color(self, color: u8) -> ColoredInterval {
        ColoredInterval::new(self.left, self.right, color)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.left, self.right)
    }
}

/// One placed interval together with its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColoredInterval {
    pub left: u8,
    pub right: u8,
    pub color: u8,
}

impl ColoredInterval {
    #[inline]
    pub const fn new(left: u8, right: u8, color: u8) -> Self {
        Self { left, right, color }
    }
}

impl fmt::Display for ColoredInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.left,
            color_letter(self.color, true),
            self.right
        )
    }
}

/// Letter used for a color in textual boards: `A`/`a` for color 0 and so on.
///
/// Colors past `Z` render as `?`; they cannot come back through [`crate::state::State::load`].
#[inline]
pub fn color_letter(color: u8, upper: bool) -> char {
    if color >= 26 {
        return '?';
    }
    let base = if upper { b'A' } else { b'a' };
    (base + color) as char
}
