// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Bidirectional Breadth-First Search
//!
//! Grows one BFS frontier from the initial state and one from the target,
//! alternating a single expansion per direction. Every newly reached state
//! is looked up in the opposite direction's visited map; the first hit
//! joins the two halves into a solution.
//!
//! Moves are reversible, so the backward search applies ordinary moves from
//! the target. The backward half of a solution is the backward path to the
//! meeting state, reversed and with every move inverted.
//!
//! Stopping at the first meeting state yields a valid solution but does not
//! guarantee the shortest one.

use hanoi_model::{Move, PuzzleState, Solution};
use hanoi_search::config::SolveConfig;
use hanoi_search::monitor::search_monitor::{SearchMonitor, checkpoint};
use hanoi_search::movegen::legal_moves_into;
use hanoi_search::result::SolveError;
use hanoi_search::solver::PuzzleSolver;
use hanoi_search::stats::SearchStatistics;
use hanoi_search::visited::VisitedMap;
use std::collections::VecDeque;

/// Builds the solution through `meeting` from a forward map rooted at the
/// initial state and a backward map rooted at the target.
pub(crate) fn join_paths(
    forward: &VisitedMap,
    backward: &VisitedMap,
    meeting: &PuzzleState,
) -> Result<Solution, SolveError> {
    let head = forward.path_to(meeting);
    let tail = backward.path_to(meeting);
    match (head, tail) {
        (Some(head), Some(tail)) => Ok(head.concat(&tail.inverse())),
        _ => Err(SolveError::exhausted(format!(
            "the path through meeting state {} could not be rebuilt",
            meeting
        ))),
    }
}

/// One direction of the search: its queue and visited map.
struct Frontier {
    queue: VecDeque<(PuzzleState, usize)>,
    visited: VisitedMap,
}

impl Frontier {
    fn new(root: PuzzleState) -> Self {
        Self {
            queue: VecDeque::from([(root.clone(), 0)]),
            visited: VisitedMap::with_root(root),
        }
    }

    /// Expands the oldest queued state. Returns the first newly reached
    /// state that `other` already knows.
    fn expand(
        &mut self,
        other: &VisitedMap,
        max_lift: usize,
        moves: &mut Vec<Move>,
        statistics: &mut SearchStatistics,
    ) -> Option<PuzzleState> {
        let (state, depth) = self.queue.pop_front()?;
        statistics.on_node_explored();

        legal_moves_into(&state, max_lift, moves);
        for &mv in moves.iter() {
            let Ok(next) = state.apply_move(mv) else {
                continue;
            };
            if !self.visited.insert_if_absent(next.clone(), Some(mv), depth + 1) {
                continue;
            }
            statistics.on_node_generated();
            if other.contains(&next) {
                return Some(next);
            }
            self.queue.push_back((next, depth + 1));
        }
        None
    }
}

#[derive(Debug, Clone)]
pub struct BidirectionalBfsSolver {
    initial: PuzzleState,
    target: PuzzleState,
    statistics: SearchStatistics,
}

impl BidirectionalBfsSolver {
    pub fn new(initial: PuzzleState, target: PuzzleState) -> Self {
        Self {
            initial,
            target,
            statistics: SearchStatistics::default(),
        }
    }
}

impl PuzzleSolver for BidirectionalBfsSolver {
    fn name(&self) -> &str {
        "Bidirectional BFS"
    }

    fn initial(&self) -> &PuzzleState {
        &self.initial
    }

    fn target(&self) -> &PuzzleState {
        &self.target
    }

    fn guarantees_optimal(&self) -> bool {
        false
    }

    fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    fn statistics_mut(&mut self) -> &mut SearchStatistics {
        &mut self.statistics
    }

    fn solve_internal(
        &mut self,
        config: &SolveConfig,
        monitor: &mut dyn SearchMonitor,
    ) -> Result<Solution, SolveError> {
        if self.initial == self.target {
            return Ok(Solution::new());
        }

        let max_lift = config.max_lift();
        let mut forward = Frontier::new(self.initial.clone());
        let mut backward = Frontier::new(self.target.clone());
        let mut moves = Vec::new();
        let mut forward_turn = true;
        self.statistics.on_nodes_generated(2);

        while !(forward.queue.is_empty() && backward.queue.is_empty()) {
            self.statistics
                .on_frontier_size(forward.queue.len() + backward.queue.len());
            checkpoint(monitor, &self.statistics)?;

            let expand_forward =
                (forward_turn && !forward.queue.is_empty()) || backward.queue.is_empty();
            let meeting = if expand_forward {
                forward.expand(&backward.visited, max_lift, &mut moves, &mut self.statistics)
            } else {
                backward.expand(&forward.visited, max_lift, &mut moves, &mut self.statistics)
            };

            if let Some(meeting) = meeting {
                return join_paths(&forward.visited, &backward.visited, &meeting);
            }
            forward_turn = !forward_turn;
        }

        Err(SolveError::exhausted(
            "both frontiers emptied without meeting",
        ))
    }
}
