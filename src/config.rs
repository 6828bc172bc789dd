//! Game parameters and search budgets.
//!
//! Both structs deserialize from JSON with per-field defaults, so a config file only needs the
//! fields it changes:
//!
//! ```json
//! { "game": { "max_clique": 3, "colors": 4, "max_intervals": 5, "max_depth": 7 } }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::game::Game;
use crate::state::{State, MAX_INTERVALS};

/// Rules of one game instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// No point may be covered by more than this many intervals.
    pub max_clique: u8,
    /// Number of colors the inserting player tries to force (1-indexed). The responder may use
    /// `colors - 1` of them; see [`GameConfig::palette`].
    pub colors: u8,
    /// Insertions stop once this many intervals are active.
    pub max_intervals: u8,
    /// Insertion moves are generated for states first reached below this depth.
    pub max_depth: u8,
    /// Skip insertion moves of a state whose barrier successor already has a proven win.
    pub prune_on_barrier_win: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_clique: 2,
            colors: 2,
            max_intervals: 3,
            max_depth: 5,
            prune_on_barrier_win: true,
        }
    }
}

impl GameConfig {
    pub fn new(max_clique: u8, colors: u8, max_intervals: u8, max_depth: u8) -> Self {
        Self {
            max_clique,
            colors,
            max_intervals,
            max_depth,
            prune_on_barrier_win: true,
        }
    }

    pub fn with_pruning(mut self, prune: bool) -> Self {
        self.prune_on_barrier_win = prune;
        self
    }

    /// Colors the responder may choose from.
    #[inline]
    pub fn palette(&self) -> u8 {
        self.colors.saturating_sub(1)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_clique == 0 {
            return Err(GameError::InvalidConfig {
                reason: "max_clique must be >= 1".to_string(),
            });
        }
        if !(2..=26).contains(&self.colors) {
            return Err(GameError::InvalidConfig {
                reason: format!("colors must be in 2..=26, got {}", self.colors),
            });
        }
        if self.max_intervals as usize > MAX_INTERVALS {
            return Err(GameError::InvalidConfig {
                reason: format!(
                    "max_intervals must be <= {MAX_INTERVALS}, got {}",
                    self.max_intervals
                ),
            });
        }
        if self.max_depth == 0 || self.max_depth == u8::MAX {
            return Err(GameError::InvalidConfig {
                reason: format!("max_depth must be in 1..=254, got {}", self.max_depth),
            });
        }
        Ok(())
    }

    /// Compact, deterministic description for logs.
    pub fn summary(&self) -> String {
        format!(
            "clique<={}, colors={}, intervals<={}, depth<={}{}",
            self.max_clique,
            self.colors,
            self.max_intervals,
            self.max_depth,
            if self.prune_on_barrier_win {
                ""
            } else {
                ", no pruning"
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Search budgets used to bound memory/time consumption.
///
/// - `max_states`: number of states admitted to the arena
/// - `max_sweeps`: total relaxation sweeps over the whole arena
pub struct ResourceLimits {
    pub max_states: usize,
    pub max_sweeps: u64,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_states: 20_000_000,
            max_sweeps: 100_000,
        }
    }
}

/// Top-level layout of a `--config` file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub game: GameConfig,
    pub limits: ResourceLimits,
    /// Start board in textual form; the empty board when absent.
    pub start: Option<String>,
}

impl SolverConfig {
    pub fn from_json(bytes: &[u8], path: &str) -> Result<Self, GameError> {
        serde_json::from_slice(bytes).map_err(|e| GameError::InvalidConfig {
            reason: format!("{path}: {e}"),
        })
    }

    pub fn load(path: &str) -> Result<Self, GameError> {
        let bytes = std::fs::read(path).map_err(|e| GameError::Io {
            stage: "load_config",
            path: path.to_string(),
            error: e.to_string(),
        })?;
        Self::from_json(&bytes, path)
    }

    pub fn start_state(&self) -> Result<State, GameError> {
        match &self.start {
            Some(text) => State::load(text),
            None => Ok(State::new()),
        }
    }

    /// A fresh solver for this configuration.
    pub fn build_game(&self) -> Result<Game, GameError> {
        Ok(Game::new(self.game, self.start_state()?)?.with_limits(self.limits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = SolverConfig::from_json(br#"{ "game": { "max_depth": 7 } }"#, "inline").unwrap();
        assert_eq!(cfg.game.max_depth, 7);
        assert_eq!(cfg.game.max_clique, 2);
        assert!(cfg.game.prune_on_barrier_win);
        assert_eq!(cfg.limits, ResourceLimits::default());
        assert!(cfg.start.is_none());
    }

    #[test]
    fn validation_rejects_single_color() {
        let cfg = GameConfig::new(2, 1, 3, 5);
        assert!(matches!(
            cfg.validate(),
            Err(GameError::InvalidConfig { .. })
        ));
    }
}
