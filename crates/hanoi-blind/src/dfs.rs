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

//! # Depth-First Search
//!
//! Iterative DFS over an explicit stack, so deep searches never overflow the
//! call stack. Successors are pushed in reverse enumeration order, which
//! makes the first generated move the first one explored.
//!
//! The result is a valid but usually far from shortest solution. An
//! optional depth cutoff turns an exhausted bounded search into
//! `SolveError::DepthLimitExceeded`.

use hanoi_model::{PuzzleState, Solution};
use hanoi_search::config::SolveConfig;
use hanoi_search::monitor::search_monitor::{SearchMonitor, checkpoint};
use hanoi_search::movegen::legal_moves_into;
use hanoi_search::result::SolveError;
use hanoi_search::solver::PuzzleSolver;
use hanoi_search::stats::SearchStatistics;
use hanoi_search::tree::SearchTree;
use rustc_hash::FxHashSet;

#[derive(Debug, Clone)]
pub struct DfsSolver {
    initial: PuzzleState,
    target: PuzzleState,
    max_depth: Option<usize>,
    statistics: SearchStatistics,
}

impl DfsSolver {
    pub fn new(initial: PuzzleState, target: PuzzleState) -> Self {
        Self {
            initial,
            target,
            max_depth: None,
            statistics: SearchStatistics::default(),
        }
    }

    /// Stops expanding states at `max_depth` moves from the initial state.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    #[inline]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}

impl PuzzleSolver for DfsSolver {
    fn name(&self) -> &str {
        "Depth-First Search"
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
        let max_lift = config.max_lift();
        let mut tree = SearchTree::new();
        let mut stack = Vec::new();
        let mut visited: FxHashSet<PuzzleState> = FxHashSet::default();
        let mut moves = Vec::new();

        stack.push(tree.push_root(self.initial.clone()));
        self.statistics.on_node_generated();

        while let Some(id) = stack.pop() {
            self.statistics.on_frontier_size(stack.len() + 1);
            checkpoint(monitor, &self.statistics)?;

            let state = tree.state(id).clone();
            if state == self.target {
                return Ok(tree.path_to(id));
            }
            if self.max_depth.is_some_and(|limit| tree.depth(id) >= limit) {
                continue;
            }
            if !visited.insert(state.clone()) {
                continue;
            }
            self.statistics.on_node_explored();

            legal_moves_into(&state, max_lift, &mut moves);
            for &mv in moves.iter().rev() {
                let Ok(next) = state.apply_move(mv) else {
                    continue;
                };
                if visited.contains(&next) {
                    continue;
                }
                stack.push(tree.push_child(id, mv, next));
                self.statistics.on_node_generated();
            }
        }

        match self.max_depth {
            Some(depth_limit) => Err(SolveError::DepthLimitExceeded { depth_limit }),
            None => Err(SolveError::exhausted(
                "depth-first search emptied its stack without reaching the target",
            )),
        }
    }
}
