//! Small value types shared by the board, the solver and the strategy tools.
//!
//! - [`interval`]: endpoint pairs with and without a color.
//! - [`code`]: the two-integer canonical key of a board.

pub mod code;
pub mod interval;
