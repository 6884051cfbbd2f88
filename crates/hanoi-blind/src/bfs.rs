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

//! # Breadth-First Search
//!
//! Expands states in non-decreasing distance from the initial state, so the
//! first time the target is taken off the queue its path is a shortest one.
//!
//! A state is marked visited when it is dequeued, not when it is generated.
//! Successors already visited are not enqueued, but the same state may sit in
//! the queue more than once until its first copy is expanded.

use hanoi_model::{PuzzleState, Solution};
use hanoi_search::config::SolveConfig;
use hanoi_search::monitor::search_monitor::{SearchMonitor, checkpoint};
use hanoi_search::movegen::legal_moves_into;
use hanoi_search::result::SolveError;
use hanoi_search::solver::PuzzleSolver;
use hanoi_search::stats::SearchStatistics;
use hanoi_search::tree::SearchTree;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct BfsSolver {
    initial: PuzzleState,
    target: PuzzleState,
    statistics: SearchStatistics,
}

impl BfsSolver {
    pub fn new(initial: PuzzleState, target: PuzzleState) -> Self {
        Self {
            initial,
            target,
            statistics: SearchStatistics::default(),
        }
    }
}

impl PuzzleSolver for BfsSolver {
    fn name(&self) -> &str {
        "Breadth-First Search"
    }

    fn initial(&self) -> &PuzzleState {
        &self.initial
    }

    fn target(&self) -> &PuzzleState {
        &self.target
    }

    fn guarantees_optimal(&self) -> bool {
        true
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
        let mut queue = VecDeque::new();
        let mut visited: FxHashSet<PuzzleState> = FxHashSet::default();
        let mut moves = Vec::new();

        queue.push_back(tree.push_root(self.initial.clone()));
        self.statistics.on_node_generated();

        while let Some(id) = queue.pop_front() {
            self.statistics.on_frontier_size(queue.len() + 1);
            checkpoint(monitor, &self.statistics)?;

            let state = tree.state(id).clone();
            if visited.contains(&state) {
                continue;
            }
            visited.insert(state.clone());
            self.statistics.on_node_explored();

            if state == self.target {
                return Ok(tree.path_to(id));
            }

            legal_moves_into(&state, max_lift, &mut moves);
            for &mv in &moves {
                let Ok(next) = state.apply_move(mv) else {
                    continue;
                };
                if visited.contains(&next) {
                    continue;
                }
                queue.push_back(tree.push_child(id, mv, next));
                self.statistics.on_node_generated();
            }
        }

        Err(SolveError::exhausted(
            "breadth-first search emptied its queue without reaching the target",
        ))
    }
}
