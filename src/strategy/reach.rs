//! Backward win propagation over a strategy graph.
//!
//! Every node has exactly one declared move, so the only choice left is the responder's: a node is
//! won once all of its responses are won. Nodes without responses (the responder is stuck) are the
//! seeds. Nodes on a cycle never settle and stay unwon.

use std::collections::VecDeque;

/// Anything that points at a successor node.
pub trait Response {
    fn target(&self) -> usize;
}

impl Response for usize {
    #[inline]
    fn target(&self) -> usize {
        *self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinPropagation {
    pub win: Vec<bool>,
    /// Longest forced line to a seed, counting the seed as 1. Zero for unwon nodes.
    pub depth: Vec<usize>,
    pub win_count: usize,
}

impl WinPropagation {
    pub fn all_won(&self) -> bool {
        self.win_count == self.win.len()
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.depth.iter().copied().max()
    }
}

pub fn propagate_wins<R: Response>(responses: &[Vec<R>]) -> WinPropagation {
    let n = responses.len();
    let mut pred: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut settled: Vec<usize> = vec![0; n];
    let mut depth: Vec<usize> = vec![0; n];
    let mut win = vec![false; n];

    let mut q: VecDeque<usize> = VecDeque::new();
    for (id, succ) in responses.iter().enumerate() {
        for r in succ {
            pred[r.target()].push(id);
        }
        if succ.is_empty() {
            win[id] = true;
            depth[id] = 1;
            q.push_back(id);
        }
    }

    while let Some(v) = q.pop_front() {
        for &p in &pred[v] {
            // One entry per edge, so parallel responses are counted separately.
            settled[p] += 1;
            if settled[p] == responses[p].len() {
                let deepest = responses[p].iter().map(|r| depth[r.target()]).max();
                win[p] = true;
                depth[p] = 1 + deepest.unwrap_or(0);
                q.push_back(p);
            }
        }
    }

    let win_count = win.iter().filter(|&&w| w).count();
    WinPropagation {
        win,
        depth,
        win_count,
    }
}
