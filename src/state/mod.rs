//! The canonical board.
//!
//! A board is a sequence of `n` colored intervals, stored as
//! - `colors`: one color per interval, in left-endpoint order, normalized so that color `c` only
//!   appears after colors `0..c` have appeared, and
//! - `endpoints`: `2n` brackets (`true` = left endpoint, `false` = right endpoint). The `i`-th
//!   left endpoint pairs with the `i`-th right endpoint, so no interval contains another.
//!
//! Two barriers cut off a frozen prefix (only left endpoints) and a frozen suffix (only right
//! endpoints). Intervals lying entirely inside a frozen region are dropped.

pub mod codec;
pub mod moves;
pub mod text;

use crate::core::interval::{ColoredInterval, Interval};
use crate::error::GameError;

/// Largest interval count whose `2n` endpoint positions still fit in a byte.
pub const MAX_INTERVALS: usize = 127;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct State {
    colors: Vec<u8>,
    endpoints: Vec<bool>,
    left_barrier: u8,
    right_barrier: u8,
}

impl State {
    /// The empty board `[]`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify the structural invariants.
    pub fn check(&self) -> Result<(), GameError> {
        let violation = |reason: &'static str| {
            Err(GameError::InvariantViolation {
                state: self.describe(),
                reason,
            })
        };

        if self.colors.len() * 2 != self.endpoints.len() {
            return violation("size mismatch");
        }
        if self.colors.len() > MAX_INTERVALS {
            return violation("too many intervals");
        }
        if self.left_barrier > self.right_barrier {
            return violation("left barrier after right barrier");
        }
        let lb = self.left_barrier as usize;
        let rb = self.right_barrier as usize;
        if rb > self.endpoints.len() {
            return violation("right barrier beyond the board");
        }
        if self.endpoints[..lb].iter().any(|&e| !e) {
            return violation("early end");
        }
        if self.endpoints[rb..].iter().any(|&e| e) {
            return violation("late start");
        }

        let mut open = 0usize;
        for &e in &self.endpoints {
            if e {
                open += 1;
            } else {
                if open == 0 {
                    return violation("below zero");
                }
                open -= 1;
            }
        }
        if open != 0 {
            return violation("unbalanced");
        }

        let mut next = 0u8;
        for &c in &self.colors {
            if c > next {
                return violation("colors not normalized");
            }
            if c == next {
                next += 1;
            }
        }

        Ok(())
    }

    #[inline]
    pub fn left_barrier(&self) -> u8 {
        self.left_barrier
    }

    #[inline]
    pub fn right_barrier(&self) -> u8 {
        self.right_barrier
    }

    #[inline]
    pub fn interval_count(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn colors(&self) -> &[u8] {
        &self.colors
    }

    #[inline]
    pub fn endpoints(&self) -> &[bool] {
        &self.endpoints
    }

    /// Both barriers meet: only insertions remain.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.left_barrier >= self.right_barrier
    }

    /// Endpoint positions of every interval, in left-endpoint order.
    pub fn intervals(&self) -> Vec<Interval> {
        let mut out = vec![Interval::new(0, 0); self.colors.len()];
        let mut opened = 0;
        let mut closed = 0;
        for (pos, &e) in self.endpoints.iter().enumerate() {
            if e {
                out[opened].left = pos as u8;
                opened += 1;
            } else {
                out[closed].right = pos as u8;
                closed += 1;
            }
        }
        out
    }

    pub fn colored_intervals(&self) -> Vec<ColoredInterval> {
        self.intervals()
            .into_iter()
            .zip(&self.colors)
            .map(|(iv, &c)| iv.with_color(c))
            .collect()
    }

    /// Nesting depth in front of each endpoint position (`2n + 1` entries, last one is 0).
    pub fn clique_sizes(&self) -> Vec<u8> {
        let mut cliques = vec![0u8; self.endpoints.len() + 1];
        let mut clique = 0u8;
        for (pos, &e) in self.endpoints.iter().enumerate() {
            cliques[pos] = clique;
            if e {
                clique += 1;
            } else {
                clique -= 1;
            }
        }
        cliques
    }

    pub fn max_clique_size(&self) -> u8 {
        self.clique_sizes().into_iter().max().unwrap_or(0)
    }

    /// Number of distinct colors in use.
    pub fn color_count(&self) -> u8 {
        self.colors.iter().max().map_or(0, |&c| c + 1)
    }

    /// `started()[p]` = left endpoints strictly before position `p`.
    pub fn started(&self) -> Vec<u8> {
        self.prefix_counts(true)
    }

    /// `finished()[p]` = right endpoints strictly before position `p`.
    pub fn finished(&self) -> Vec<u8> {
        self.prefix_counts(false)
    }

    fn prefix_counts(&self, kind: bool) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.endpoints.len() + 1);
        let mut count = 0u8;
        out.push(count);
        for &e in &self.endpoints {
            if e == kind {
                count += 1;
            }
            out.push(count);
        }
        out
    }

    /// Insert a new interval at raw gap positions and renumber the board.
    ///
    /// `left` and `right` are gap indices into the current endpoint sequence (`left <= right`).
    /// Positions produced by [`State::get_possible_additions`] are always legal; anything else is
    /// validated by [`State::check`] and rejected without touching `self`.
    pub fn add_interval(&mut self, left: u8, right: u8, color: u8) -> Result<(), GameError> {
        if left > right || right as usize > self.endpoints.len() {
            return Err(GameError::InvalidMove {
                state: self.dump(),
                mv: Interval::new(left, right).to_string(),
                reason: "endpoints outside the board",
            });
        }
        if self.colors.len() >= MAX_INTERVALS {
            return Err(GameError::SizeOverflow {
                what: "interval count",
                value: self.colors.len() as u64 + 1,
                limit: MAX_INTERVALS as u64,
            });
        }

        let mut next = self.clone();
        let (left, right) = (left as usize, right as usize);
        next.endpoints.insert(left, true);
        next.endpoints.insert(right + 1, false);
        let slot = next.endpoints[..left].iter().filter(|&&e| e).count();
        next.colors.insert(slot, color);
        next.right_barrier += 2;
        next.normalize_colors();
        next.check()?;

        *self = next;
        Ok(())
    }

    pub fn add_colored_interval(&mut self, cint: ColoredInterval) -> Result<(), GameError> {
        self.add_interval(cint.left, cint.right, cint.color)
    }

    /// Advance the left barrier past the frozen prefix and one more (closing) bracket.
    pub fn push_left_barrier(&mut self) -> Result<(), GameError> {
        while self.left_barrier < self.right_barrier && self.endpoints[self.left_barrier as usize]
        {
            self.left_barrier += 1;
        }
        if self.left_barrier < self.right_barrier {
            self.left_barrier += 1;
            self.drop_intervals();
            self.normalize_colors();
        }
        self.check()
    }

    /// Mirror of [`State::push_left_barrier`].
    pub fn push_right_barrier(&mut self) -> Result<(), GameError> {
        while self.left_barrier < self.right_barrier
            && !self.endpoints[self.right_barrier as usize - 1]
        {
            self.right_barrier -= 1;
        }
        if self.left_barrier < self.right_barrier {
            self.right_barrier -= 1;
            self.drop_intervals();
            self.normalize_colors();
        }
        self.check()
    }

    /// Mirror the board left-to-right.
    pub fn reverse(&mut self) -> Result<(), GameError> {
        self.colors.reverse();
        self.endpoints.reverse();
        for e in self.endpoints.iter_mut() {
            *e = !*e;
        }
        let total = self.endpoints.len() as u8;
        let (lb, rb) = (self.left_barrier, self.right_barrier);
        self.left_barrier = total - rb;
        self.right_barrier = total - lb;
        self.normalize_colors();
        self.check()
    }

    pub fn reversed(&self) -> Result<State, GameError> {
        let mut out = self.clone();
        out.reverse()?;
        Ok(out)
    }

    /// Relabel colors in first-use order.
    fn normalize_colors(&mut self) {
        let mut map: Vec<Option<u8>> = Vec::new();
        let mut next = 0u8;
        for c in self.colors.iter_mut() {
            let idx = *c as usize;
            if idx >= map.len() {
                map.resize(idx + 1, None);
            }
            *c = *map[idx].get_or_insert_with(|| {
                let fresh = next;
                next += 1;
                fresh
            });
        }
    }

    /// Remove intervals that lie entirely inside a frozen region.
    fn drop_intervals(&mut self) {
        let lb = self.left_barrier as usize;
        let rb = self.right_barrier as usize;
        let drop_front = self.endpoints[..lb].iter().filter(|&&e| !e).count();
        let drop_back = self.endpoints[rb..].iter().filter(|&&e| e).count();
        if drop_front == 0 && drop_back == 0 {
            return;
        }

        let keep = drop_front..self.colors.len() - drop_back;
        let mut endpoints = Vec::with_capacity(2 * keep.len());
        let mut opened = 0;
        let mut closed = 0;
        for &e in &self.endpoints {
            let rank = if e { &mut opened } else { &mut closed };
            if keep.contains(&*rank) {
                endpoints.push(e);
            }
            *rank += 1;
        }

        self.colors = self.colors[keep].to_vec();
        self.endpoints = endpoints;
        self.left_barrier -= 2 * drop_front as u8;
        self.right_barrier -= 2 * drop_front as u8;
    }

    /// Raw field listing that never fails, for error messages about broken boards.
    fn describe(&self) -> String {
        let bits: String = self
            .endpoints
            .iter()
            .map(|&e| if e { '1' } else { '0' })
            .collect();
        format!(
            "colors={:?} endpoints={bits} barriers=({}, {})",
            self.colors, self.left_barrier, self.right_barrier
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropping_keeps_the_middle_intervals() {
        // Three disjoint intervals; freeze the first one entirely and the last one entirely.
        let mut s = State {
            colors: vec![0, 1, 2],
            endpoints: vec![true, false, true, false, true, false],
            left_barrier: 2,
            right_barrier: 4,
        };
        s.drop_intervals();
        assert_eq!(s.colors, vec![1]);
        assert_eq!(s.endpoints, vec![true, false]);
        assert_eq!((s.left_barrier, s.right_barrier), (0, 2));
    }

    #[test]
    fn normalization_is_first_use_order() {
        let mut s = State {
            colors: vec![3, 1, 3, 0],
            endpoints: vec![true, true, true, true, false, false, false, false],
            left_barrier: 0,
            right_barrier: 8,
        };
        s.normalize_colors();
        assert_eq!(s.colors, vec![0, 1, 0, 2]);
        assert!(s.check().is_ok());
    }

    #[test]
    fn check_reports_unbalanced_brackets() {
        let s = State {
            colors: vec![0],
            endpoints: vec![false, true],
            left_barrier: 0,
            right_barrier: 0,
        };
        assert!(matches!(
            s.check(),
            Err(GameError::InvariantViolation { .. })
        ));
    }
}
