//! Strategy verdicts.

use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::core::interval::color_letter;
use crate::error::GameError;
use crate::state::State;
use crate::strategy::graph::StrategyGraph;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    pub max_clique: u8,
    /// Colors to force, as written in the header.
    pub colors: u8,
    pub states: usize,
    pub max_size: usize,
    pub win_count: usize,
    pub correct: bool,
    /// Longest forced line, only for correct strategies.
    pub max_depth: Option<usize>,
    pub includes_base_state: bool,
}

impl StrategyGraph {
    /// A strategy is correct when every declared board is a forced win under it.
    pub fn verify(&self) -> Result<VerificationReport, GameError> {
        let wins = self.propagate();
        let correct = wins.all_won();
        let includes_base_state = self.lookup(&State::new())?.is_some();

        let report = VerificationReport {
            max_clique: self.max_clique(),
            colors: self.max_colors() + 1,
            states: self.len(),
            max_size: self.max_size(),
            win_count: wins.win_count,
            correct,
            max_depth: if correct { wins.max_depth() } else { None },
            includes_base_state,
        };
        info!(
            states = report.states,
            wins = report.win_count,
            correct,
            "strategy verified"
        );
        Ok(report)
    }

    /// One line per node: board, declared move and the replies it admits.
    pub fn debug_lines(&self) -> Result<Vec<String>, GameError> {
        let mut out = Vec::with_capacity(self.len());
        for id in 0..self.len() {
            let state = self.state(id)?;
            let mut line = format!(
                "State #{id} is {} with move {} and possible responses {{",
                state.dump(),
                self.declared_move(id)
            );
            for edge in self.responses(id) {
                match edge.color {
                    Some(c) => line.push_str(&format!(" {}->#{}", color_letter(c, true), edge.target)),
                    None => line.push_str(&format!(" #{}", edge.target)),
                }
            }
            line.push_str(" }");
            out.push(line);
        }
        Ok(out)
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Maximum clique size is {}.", self.max_clique)?;
        // The responder's palette, one below the header count.
        writeln!(f, "Maximum color is {}.", self.colors.saturating_sub(1))?;
        writeln!(f, "Strategy has {} states.", self.states)?;
        writeln!(f, "Maximum state size is {}.", self.max_size)?;
        if self.correct {
            writeln!(f, "Strategy is correct.")?;
            if let Some(depth) = self.max_depth {
                writeln!(f, "Maximum strategy depth is {depth}.")?;
            }
        } else {
            writeln!(
                f,
                "Strategy is not correct. {}/{} states are wins.",
                self.win_count, self.states
            )?;
        }
        if !self.includes_base_state {
            writeln!(f, "Base state is not included in the strategy.")?;
        }
        Ok(())
    }
}
