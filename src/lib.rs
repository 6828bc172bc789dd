//! Solver and strategy checker for an on-line interval coloring game.
//!
//! One player inserts intervals between two advancing barriers, the other colors each new interval
//! so that it differs from every interval it overlaps. The inserting player wins by forcing the
//! responder out of a fixed palette while every point stays covered by at most `max_clique`
//! intervals.

pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod logging;
pub mod resources;
pub mod state;
pub mod strategy;
