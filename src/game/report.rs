//! Human-readable arena listing and JSON export of the solved graph.

use std::fmt;

use serde::Serialize;

use crate::config::GameConfig;
use crate::core::interval::{color_letter, ColoredInterval};
use crate::game::{Game, MoveGroup, StateId};

/// Headline numbers of a solver run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub config: GameConfig,
    pub start: String,
    pub states: usize,
    /// Arena size after each expanded depth.
    pub depth_counts: Vec<usize>,
    pub sweeps: u64,
    pub value: Option<u8>,
}

/// Everything a presentation layer needs about one arena state.
#[derive(Debug, Clone, Serialize)]
pub struct StateView {
    pub id: StateId,
    pub dump: String,
    pub depth: u8,
    pub color_count: u8,
    pub intervals: Vec<ColoredInterval>,
    pub left_barrier: u8,
    pub right_barrier: u8,
    pub min_distance: u8,
    pub max_distance: Option<u8>,
    pub left_move: Option<StateId>,
    pub right_move: Option<StateId>,
    pub interval_moves: Vec<MoveGroup>,
}

impl Game {
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            config: self.config,
            start: self.start_state.dump(),
            states: self.states.len(),
            depth_counts: self.depth_counts.clone(),
            sweeps: self.sweeps(),
            value: self.value(),
        }
    }

    pub fn state_views(&self) -> Vec<StateView> {
        self.states
            .iter()
            .enumerate()
            .map(|(id, info)| StateView {
                id,
                dump: info.state.dump(),
                depth: info.depth,
                color_count: info.state.color_count(),
                intervals: info.state.colored_intervals(),
                left_barrier: info.state.left_barrier(),
                right_barrier: info.state.right_barrier(),
                min_distance: info.min_distance,
                max_distance: info.max_distance,
                left_move: info.left_move,
                right_move: info.right_move,
                interval_moves: info.interval_moves.clone(),
            })
            .collect()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "<Game, {}, states={}>",
            self.config.summary(),
            self.states.len()
        )?;
        for (id, info) in self.states.iter().enumerate() {
            write!(f, "#{id} ^{} =", info.depth)?;
            match info.max_distance {
                Some(d) => write!(f, "{d}")?,
                None => write!(f, "-")?,
            }
            write!(f, " {}", info.state)?;
            if let Some(l) = info.left_move {
                write!(f, " L->{l}")?;
            }
            if let Some(r) = info.right_move {
                write!(f, " R->{r}")?;
            }
            for group in &info.interval_moves {
                write!(f, " [{}", group.interval)?;
                for &(color, child) in &group.responses {
                    write!(f, " {}->{child}", color_letter(color, true))?;
                }
                write!(f, "]")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
