//! State-graph construction and retrograde solving.
//!
//! The solver grows an append-only arena of boards breadth-first by depth:
//! - phase 0 ([`Game::visit_barrier_moves`]) adds the two barrier-push successors at the same
//!   depth,
//! - phase 1 ([`Game::visit_insertion_moves`]) adds one successor per (insertion, responder color)
//!   at depth + 1.
//!
//! After every depth the per-state bounds are relaxed to a fixed point (see [`relax`]). A board
//! and its mirror image share one arena slot: both codes are registered against the same index.

pub mod relax;
pub mod report;

use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::{info, trace};

use crate::config::{GameConfig, ResourceLimits};
use crate::core::code::StateCode;
use crate::core::interval::Interval;
use crate::error::GameError;
use crate::resources::ResourceTracker;
use crate::state::State;

pub type StateId = usize;

/// One insertion and the successor for every color the responder may choose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveGroup {
    pub interval: Interval,
    /// `(color, successor)` pairs in ascending color order.
    pub responses: Vec<(u8, StateId)>,
}

#[derive(Debug, Clone)]
pub struct StateInfo {
    pub state: State,
    /// Depth at which the state was first reached.
    pub depth: u8,
    /// Proven lower bound on the game value.
    pub min_distance: u8,
    /// Proven upper bound on the game value; `None` while no forced win is known.
    pub max_distance: Option<u8>,
    pub left_move: Option<StateId>,
    pub right_move: Option<StateId>,
    pub interval_moves: Vec<MoveGroup>,
    /// Every move the rules allow from this state has been generated.
    pub complete: bool,
}

impl StateInfo {
    fn new(state: State, depth: u8) -> Self {
        Self {
            state,
            depth,
            min_distance: 1,
            max_distance: None,
            left_move: None,
            right_move: None,
            interval_moves: Vec::new(),
            complete: false,
        }
    }

    /// Barrier-push successors that exist.
    #[inline]
    pub fn barrier_moves(&self) -> impl Iterator<Item = StateId> {
        self.left_move.into_iter().chain(self.right_move)
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    start_state: State,
    known_states: FxHashMap<StateCode, StateId>,
    states: Vec<StateInfo>,
    tracker: ResourceTracker,
    /// Arena size after each expanded depth.
    depth_counts: Vec<usize>,
}

impl Game {
    pub fn new(config: GameConfig, start_state: State) -> Result<Self, GameError> {
        config.validate()?;
        start_state.check()?;
        Ok(Self {
            config,
            start_state,
            known_states: FxHashMap::default(),
            states: Vec::new(),
            tracker: ResourceTracker::new(ResourceLimits::default()),
            depth_counts: Vec::new(),
        })
    }

    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.tracker = ResourceTracker::new(limits);
        self
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn states(&self) -> &[StateInfo] {
        &self.states
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Relaxation sweeps run since the last [`Game::reset`].
    #[inline]
    pub fn sweeps(&self) -> u64 {
        self.tracker.counts().sweeps
    }

    /// Value of the start state: plies until a forced win, if one is proven.
    pub fn value(&self) -> Option<u8> {
        self.states.first().and_then(|s| s.max_distance)
    }

    /// Arena slot of `state` or of its mirror image.
    pub fn lookup(&self, state: &State) -> Result<Option<StateId>, GameError> {
        Ok(self.known_states.get(&state.encode()?).copied())
    }

    /// Return the slot of `state` (or its mirror), appending a new one at `depth` if unseen.
    pub fn allocate_state(&mut self, state: State, depth: u8) -> Result<StateId, GameError> {
        let code = state.encode()?;
        if let Some(&id) = self.known_states.get(&code) {
            return Ok(id);
        }

        self.tracker.bump_states("allocate_state", 1)?;
        self.tracker
            .try_reserve_vec("allocate_state", &mut self.states, 1)?;

        let mirror_code = state.reversed()?.encode()?;
        let id = self.states.len();
        trace!(id, depth, state = %state.dump(), "new state");
        self.states.push(StateInfo::new(state, depth));
        self.known_states.insert(mirror_code, id);
        self.known_states.insert(code, id);
        Ok(id)
    }

    /// Phase 0: record both barrier-push successors (same depth).
    pub fn visit_barrier_moves(&mut self, id: StateId) -> Result<(), GameError> {
        let info = &self.states[id];
        if info.depth > self.config.max_depth || info.state.is_closed() {
            return Ok(());
        }
        let depth = info.depth;

        let mut left = info.state.clone();
        left.push_left_barrier()?;
        let mut right = info.state.clone();
        right.push_right_barrier()?;

        let left_id = self.allocate_state(left, depth)?;
        let right_id = self.allocate_state(right, depth)?;
        let info = &mut self.states[id];
        info.left_move = Some(left_id);
        info.right_move = Some(right_id);
        Ok(())
    }

    /// Phase 1: record every insertion with one successor per responder color (depth + 1).
    pub fn visit_insertion_moves(&mut self, id: StateId) -> Result<(), GameError> {
        let info = &self.states[id];
        if info.depth >= self.config.max_depth {
            return Ok(());
        }
        if self.config.prune_on_barrier_win
            && info
                .barrier_moves()
                .any(|child| self.states[child].max_distance.is_some())
        {
            return Ok(());
        }
        if info.state.interval_count() >= self.config.max_intervals as usize {
            self.states[id].complete = true;
            return Ok(());
        }

        let depth = info.depth + 1;
        let state = info.state.clone();
        let additions = state.get_possible_additions(self.config.max_clique, self.config.palette());

        let mut groups = Vec::with_capacity(additions.len());
        for addition in additions {
            let mut responses = Vec::with_capacity(addition.colors.len());
            for color in addition.colors {
                let mut next = state.clone();
                next.add_colored_interval(addition.interval.with_color(color))?;
                responses.push((color, self.allocate_state(next, depth)?));
            }
            groups.push(MoveGroup {
                interval: addition.interval,
                responses,
            });
        }

        let info = &mut self.states[id];
        info.interval_moves = groups;
        info.complete = true;
        Ok(())
    }

    /// Clear the arena and register the start state. Returns its id (always 0).
    pub fn reset(&mut self) -> Result<StateId, GameError> {
        self.states.clear();
        self.known_states.clear();
        self.depth_counts.clear();
        self.tracker = ResourceTracker::new(self.tracker.limits());
        self.allocate_state(self.start_state.clone(), 0)
    }

    /// Run phase 0 over everything from `frontier` on (including states it adds), then phase 1
    /// over the same batch. Returns the next frontier.
    pub fn expand_depth(&mut self, frontier: StateId) -> Result<StateId, GameError> {
        let mut id = frontier;
        while id < self.states.len() {
            self.visit_barrier_moves(id)?;
            id += 1;
        }
        let next = self.states.len();
        for id in frontier..next {
            self.visit_insertion_moves(id)?;
        }
        self.depth_counts.push(self.states.len());
        Ok(next)
    }

    /// Barrier moves for the last frontier; no insertions are generated past the depth bound.
    pub fn close_frontier(&mut self, frontier: StateId) -> Result<(), GameError> {
        let mut id = frontier;
        while id < self.states.len() {
            self.visit_barrier_moves(id)?;
            id += 1;
        }
        Ok(())
    }

    /// Build the graph depth by depth and return the start state's value.
    ///
    /// `Some(d)`: the inserting player forces a new color within `d` plies. `None`: no win was
    /// established within the configured bounds.
    pub fn solve(&mut self) -> Result<Option<u8>, GameError> {
        info!(
            config = %self.config.summary(),
            start = %self.start_state.dump(),
            "solving game"
        );
        let start_id = self.reset()?;

        let mut frontier = start_id;
        for depth in 1..=self.config.max_depth {
            frontier = self.expand_depth(frontier)?;
            info!(depth, states = self.states.len(), "expanded depth");
            self.relax_all_states()?;
        }
        self.close_frontier(frontier)?;
        info!(states = self.states.len(), "state graph complete");
        self.relax_all_states()?;

        let value = self.states[start_id].max_distance;
        match value {
            Some(moves) => info!(moves, "spoiler wins"),
            None => info!("spoiler does not win the game"),
        }
        Ok(value)
    }
}
