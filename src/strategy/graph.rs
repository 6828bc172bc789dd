//! The verification context: one node per declared board, linked to the nodes of every
//! responder reply.
//!
//! A board and its mirror image share a node, so a strategy only needs to cover one of the two.

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::core::code::StateCode;
use crate::error::GameError;
use crate::state::moves::Move;
use crate::state::State;
use crate::strategy::reach::{self, WinPropagation};
use crate::strategy::StrategyFile;

/// A responder reply: the color chosen (insertions only) and the node it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub color: Option<u8>,
    pub target: usize,
}

impl reach::Response for Edge {
    #[inline]
    fn target(&self) -> usize {
        self.target
    }
}

#[derive(Debug, Clone)]
pub struct StrategyGraph {
    max_clique: u8,
    max_colors: u8,
    codes: Vec<StateCode>,
    moves: Vec<Move>,
    /// Both the code and the mirror code of every node.
    index: FxHashMap<StateCode, usize>,
    responses: Vec<Vec<Edge>>,
    max_size: usize,
}

fn describe_entry(state: &State, mv: Move) -> String {
    format!("{} {}", state.dump(), mv)
}

impl StrategyGraph {
    /// Merge the given files into one graph and resolve every reply.
    ///
    /// Fails on mismatched headers, conflicting entries, moves that are not legal on their board
    /// and replies whose board has no entry.
    pub fn build(files: &[StrategyFile]) -> Result<Self, GameError> {
        let first = files.first().ok_or_else(|| GameError::InvalidConfig {
            reason: "no strategy input".to_string(),
        })?;
        if let Some(other) = files
            .iter()
            .find(|f| f.max_clique != first.max_clique || f.max_colors != first.max_colors)
        {
            return Err(GameError::InvalidConfig {
                reason: format!(
                    "different input files play in different games ({} and {})",
                    first.source, other.source
                ),
            });
        }

        let mut graph = Self {
            max_clique: first.max_clique,
            max_colors: first.max_colors,
            codes: Vec::new(),
            moves: Vec::new(),
            index: FxHashMap::default(),
            responses: Vec::new(),
            max_size: 0,
        };
        for file in files {
            for entry in &file.entries {
                graph.insert_entry(entry.line, &entry.state, entry.mv)?;
            }
            debug!(source = %file.source, entries = file.entries.len(), "merged strategy file");
        }
        graph.resolve_responses()?;
        info!(
            states = graph.codes.len(),
            max_size = graph.max_size,
            "strategy graph built"
        );
        Ok(graph)
    }

    fn insert_entry(&mut self, line: usize, state: &State, mv: Move) -> Result<(), GameError> {
        let code = state.encode()?;
        let mirror_code = state.reversed()?.encode()?;
        self.max_size = self.max_size.max(state.interval_count());

        if let Some(&id) = self.index.get(&code) {
            // Repeats are checked like first occurrences.
            state.successors(mv, self.max_clique, self.max_colors)?;
            let total = state.endpoints().len() as u8;
            let same = self.codes[id] == code && self.moves[id] == mv;
            let mirrored =
                self.codes[id] == mirror_code && Some(self.moves[id]) == mv.mirrored(total);
            if same || mirrored {
                return Ok(());
            }
            let previous = State::decode(self.codes[id])?;
            return Err(GameError::ConflictingStrategyEntry {
                line,
                state: state.dump(),
                previous: describe_entry(&previous, self.moves[id]),
                current: describe_entry(state, mv),
            });
        }

        let id = self.codes.len();
        self.codes.push(code);
        self.moves.push(mv);
        self.index.insert(mirror_code, id);
        self.index.insert(code, id);
        Ok(())
    }

    fn resolve_responses(&mut self) -> Result<(), GameError> {
        let mut responses = Vec::with_capacity(self.codes.len());
        for (&code, &mv) in self.codes.iter().zip(&self.moves) {
            let state = State::decode(code)?;
            let successors = state.successors(mv, self.max_clique, self.max_colors)?;
            let mut edges = Vec::with_capacity(successors.len());
            for successor in successors {
                let target = *self.index.get(&successor.state.encode()?).ok_or_else(|| {
                    GameError::MissingStrategyResponse {
                        state: state.dump(),
                        mv: mv.to_string(),
                        response: successor.state.dump(),
                    }
                })?;
                edges.push(Edge {
                    color: successor.color,
                    target,
                });
            }
            responses.push(edges);
        }
        self.responses = responses;
        Ok(())
    }

    #[inline]
    pub fn max_clique(&self) -> u8 {
        self.max_clique
    }

    /// Responder palette.
    #[inline]
    pub fn max_colors(&self) -> u8 {
        self.max_colors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Largest interval count among the declared boards.
    #[inline]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn state(&self, id: usize) -> Result<State, GameError> {
        State::decode(self.codes[id])
    }

    #[inline]
    pub fn declared_move(&self, id: usize) -> Move {
        self.moves[id]
    }

    #[inline]
    pub fn responses(&self, id: usize) -> &[Edge] {
        &self.responses[id]
    }

    /// Node holding `state` or its mirror image.
    pub fn lookup(&self, state: &State) -> Result<Option<usize>, GameError> {
        Ok(self.index.get(&state.encode()?).copied())
    }

    pub fn propagate(&self) -> WinPropagation {
        reach::propagate_wins(&self.responses)
    }
}
