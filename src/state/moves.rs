//! Move generation: barrier pushes and interval insertions.

use std::fmt;

use serde::Serialize;

use crate::core::interval::Interval;
use crate::error::GameError;
use crate::state::State;

/// A legal insertion slot and the colors the responder may give the new interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Addition {
    pub interval: Interval,
    pub colors: Vec<u8>,
}

/// One move of the player trying to force a new color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Move {
    /// Advance the left barrier (`>` in strategy files).
    PushLeft,
    /// Advance the right barrier (`<` in strategy files).
    PushRight,
    /// Insert a new interval at the given gap positions.
    Insert(Interval),
}

impl Move {
    /// The same move on the mirrored board of `total` endpoints; `None` if an insertion gap lies
    /// past the board.
    pub fn mirrored(self, total: u8) -> Option<Move> {
        match self {
            Move::PushLeft => Some(Move::PushRight),
            Move::PushRight => Some(Move::PushLeft),
            Move::Insert(iv) => Some(Move::Insert(Interval::new(
                total.checked_sub(iv.right)?,
                total.checked_sub(iv.left)?,
            ))),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::PushLeft => write!(f, ">"),
            Move::PushRight => write!(f, "<"),
            Move::Insert(iv) => write!(f, "{} {}", iv.left, iv.right),
        }
    }
}

/// A state reached by a move; `color` is the responder's choice for insertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor {
    pub color: Option<u8>,
    pub state: State,
}

impl State {
    /// Enumerate every legal insertion and, for each, the colors still available to the
    /// responder.
    ///
    /// A slot `[i, j]` is legal when both gaps sit between the same pair of neighbouring
    /// intervals (so no containment arises), inside the barriers, and no position in `i..=j`
    /// already has nesting depth `max_clique`. The palette is `min(max_colors, used + 1)`: a fresh
    /// color is introduced one at a time. Output is ordered by `i`, then `j`.
    pub fn get_possible_additions(&self, max_clique: u8, max_colors: u8) -> Vec<Addition> {
        let intervals = self.intervals();
        let cliques = self.clique_sizes();
        let started = self.started();
        let finished = self.finished();
        let palette = max_colors.min(self.color_count().saturating_add(1));
        let len = self.endpoints.len() as u8;

        let mut out = Vec::new();
        for gap in 0..=intervals.len() {
            let prev = gap.checked_sub(1).map(|g| intervals[g]);
            let next = intervals.get(gap).copied();

            let left_lo = prev.map_or(0, |iv| iv.left + 1).max(self.left_barrier);
            let left_hi = next.map_or(len, |iv| iv.left);
            let right_lo = prev.map_or(0, |iv| iv.right + 1);
            let right_hi = next.map_or(len, |iv| iv.right).min(self.right_barrier);

            for i in left_lo..=left_hi {
                for j in i.max(right_lo)..=right_hi {
                    if (i..=j).any(|k| cliques[k as usize] >= max_clique) {
                        continue;
                    }

                    let mut available = vec![true; palette as usize];
                    for p in [i, j] {
                        let p = p as usize;
                        for k in finished[p] as usize..started[p] as usize {
                            if let Some(slot) = available.get_mut(self.colors[k] as usize) {
                                *slot = false;
                            }
                        }
                    }
                    let colors = (0..palette).filter(|&c| available[c as usize]).collect();
                    out.push(Addition {
                        interval: Interval::new(i, j),
                        colors,
                    });
                }
            }
        }
        out
    }

    /// Apply `mv` and return every state the responder can leave behind.
    ///
    /// Barrier pushes have exactly one successor; insertions have one per available color (none
    /// when the responder is stuck).
    pub fn successors(
        &self,
        mv: Move,
        max_clique: u8,
        max_colors: u8,
    ) -> Result<Vec<Successor>, GameError> {
        match mv {
            Move::PushLeft | Move::PushRight => {
                if self.is_closed() {
                    return Err(GameError::InvalidMove {
                        state: self.dump(),
                        mv: mv.to_string(),
                        reason: "cannot push barrier",
                    });
                }
                let mut next = self.clone();
                if mv == Move::PushLeft {
                    next.push_left_barrier()?;
                } else {
                    next.push_right_barrier()?;
                }
                Ok(vec![Successor {
                    color: None,
                    state: next,
                }])
            }
            Move::Insert(iv) => {
                let addition = self
                    .get_possible_additions(max_clique, max_colors)
                    .into_iter()
                    .find(|a| a.interval == iv)
                    .ok_or_else(|| GameError::InvalidMove {
                        state: self.dump(),
                        mv: mv.to_string(),
                        reason: "not a legal insertion",
                    })?;

                let mut out = Vec::with_capacity(addition.colors.len());
                for color in addition.colors {
                    let mut next = self.clone();
                    next.add_colored_interval(iv.with_color(color))?;
                    out.push(Successor {
                        color: Some(color),
                        state: next,
                    });
                }
                Ok(out)
            }
        }
    }
}
