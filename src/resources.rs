//! Resource tracking for the solver.
//!
//! The state arena can grow combinatorially in the game parameters. Rather than running into an
//! OOM abort, the solver counts admitted states and relaxation sweeps against
//! [`ResourceLimits`] and stops with [`GameError::LimitExceeded`].

use crate::config::ResourceLimits;
use crate::error::GameError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Running counters tracked during a search.
pub struct ResourceCounts {
    pub states: u64,
    pub sweeps: u64,
}

#[derive(Debug, Clone)]
/// Tracks budgets/counters during a search.
pub struct ResourceTracker {
    limits: ResourceLimits,
    counts: ResourceCounts,
}

impl ResourceTracker {
    #[inline]
    pub fn new(limits: ResourceLimits) -> Self {
        Self {
            limits,
            counts: ResourceCounts::default(),
        }
    }

    #[inline]
    pub fn counts(&self) -> ResourceCounts {
        self.counts
    }

    #[inline]
    pub fn limits(&self) -> ResourceLimits {
        self.limits
    }

    #[inline]
    pub fn bump_states(&mut self, stage: &'static str, delta: usize) -> Result<(), GameError> {
        let limit = self.limits.max_states as u64;
        Self::bump(stage, "states", &mut self.counts.states, delta as u64, limit)
    }

    #[inline]
    pub fn bump_sweeps(&mut self, stage: &'static str, delta: u64) -> Result<(), GameError> {
        let limit = self.limits.max_sweeps;
        Self::bump(stage, "sweeps", &mut self.counts.sweeps, delta, limit)
    }

    fn bump(
        stage: &'static str,
        metric: &'static str,
        counter: &mut u64,
        delta: u64,
        limit: u64,
    ) -> Result<(), GameError> {
        *counter = counter.saturating_add(delta);
        if *counter > limit {
            return Err(GameError::LimitExceeded {
                stage,
                metric,
                limit,
                observed: *counter,
            });
        }
        Ok(())
    }

    pub fn try_reserve_vec<T>(
        &self,
        stage: &'static str,
        v: &mut Vec<T>,
        additional: usize,
    ) -> Result<(), GameError> {
        v.try_reserve(additional)
            .map_err(|_| GameError::LimitExceeded {
                stage,
                metric: "allocation",
                limit: self.limits.max_states as u64,
                observed: (v.len() + additional) as u64,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exceeding_the_state_budget_fails() {
        let mut tracker = ResourceTracker::new(ResourceLimits {
            max_states: 2,
            max_sweeps: 10,
        });
        assert!(tracker.bump_states("test", 2).is_ok());
        let err = tracker.bump_states("test", 1).unwrap_err();
        assert_eq!(
            err,
            GameError::LimitExceeded {
                stage: "test",
                metric: "states",
                limit: 2,
                observed: 3,
            }
        );
    }
}
