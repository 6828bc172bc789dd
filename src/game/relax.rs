//! Fixed-point relaxation of the per-state bounds.
//!
//! Upper bound (`max_distance`), over all generated moves:
//! - a barrier push costs nothing: the child's upper bound,
//! - an insertion costs one ply and the responder picks the worst color:
//!   `1 + max(1, max over successors)`, defined only when every successor is a proven win.
//!
//! The lower bound (`min_distance`) applies the same operator to the children's lower bounds, but
//! only for states whose move set is complete; a complete state without moves can never win and
//! saturates at `u8::MAX`.
//!
//! Upper bounds only decrease and lower bounds only increase, both within a byte, so repeated
//! sweeps reach a fixed point.

use tracing::debug;

use crate::error::GameError;
use crate::game::{Game, StateId, StateInfo};

#[inline]
fn min_known(a: Option<u8>, b: Option<u8>) -> Option<u8> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (x, None) => x,
        (None, y) => y,
    }
}

impl Game {
    fn candidate_max(&self, info: &StateInfo) -> Result<Option<u8>, GameError> {
        let mut best = None;
        for child in info.barrier_moves() {
            best = min_known(best, self.states[child].max_distance);
        }

        'groups: for group in &info.interval_moves {
            let mut worst = 1u8;
            for &(_, child) in &group.responses {
                match self.states[child].max_distance {
                    Some(d) => worst = worst.max(d),
                    None => continue 'groups,
                }
            }
            // 255 stays out of range so every finite distance fits below it.
            let d = worst
                .checked_add(1)
                .filter(|&d| d < u8::MAX)
                .ok_or(GameError::SizeOverflow {
                    what: "distance",
                    value: worst as u64 + 1,
                    limit: u8::MAX as u64 - 1,
                })?;
            best = min_known(best, Some(d));
        }

        Ok(best)
    }

    fn candidate_min(&self, info: &StateInfo) -> u8 {
        let mut best = u8::MAX;
        for child in info.barrier_moves() {
            best = best.min(self.states[child].min_distance);
        }
        for group in &info.interval_moves {
            let worst = group
                .responses
                .iter()
                .map(|&(_, child)| self.states[child].min_distance)
                .max()
                .unwrap_or(1)
                .max(1);
            best = best.min(worst.saturating_add(1));
        }
        best
    }

    /// Tighten one state's bounds from its children. Returns whether anything changed.
    pub fn relax_state(&mut self, id: StateId) -> Result<bool, GameError> {
        let info = &self.states[id];
        let new_max = self.candidate_max(info)?;
        let new_min = info.complete.then(|| self.candidate_min(info));

        let info = &mut self.states[id];
        let mut improved = false;
        if let Some(d) = new_max {
            if info.max_distance.map_or(true, |cur| d < cur) {
                info.max_distance = Some(d);
                improved = true;
            }
        }
        if let Some(d) = new_min {
            if d > info.min_distance {
                info.min_distance = d;
                improved = true;
            }
        }
        Ok(improved)
    }

    /// One pass of [`Game::relax_state`] over the whole arena. Returns the number of improved
    /// states.
    pub fn relax_sweep(&mut self) -> Result<usize, GameError> {
        self.tracker.bump_sweeps("relax_sweep", 1)?;
        let mut improved = 0;
        for id in 0..self.states.len() {
            if self.relax_state(id)? {
                improved += 1;
            }
        }
        Ok(improved)
    }

    /// Sweep until nothing improves. Returns the number of sweeps.
    pub fn relax_all_states(&mut self) -> Result<u64, GameError> {
        let mut sweep = 0u64;
        loop {
            let improved = self.relax_sweep()?;
            debug!(sweep, improved, "relaxation sweep");
            sweep += 1;
            if improved == 0 {
                return Ok(sweep);
            }
        }
    }
}
