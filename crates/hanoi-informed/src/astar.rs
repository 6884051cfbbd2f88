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

//! # A* Search
//!
//! Best-first search on `f = g + h`, where `g` is the number of moves made so
//! far and `h` the blocking-disks estimate. Ties on `f` prefer the smaller
//! `g`, then insertion order.
//!
//! Every move costs one and the heuristic is consistent, so the first time
//! the target is popped its path is a shortest one. A state is closed when it
//! is popped; a successor is only queued when it improves on the best `g`
//! recorded for it and has not been closed yet.

use crate::frontier::PriorityFrontier;
use crate::heuristic::{BlockingDisks, Heuristic};
use hanoi_model::{PuzzleState, Solution};
use hanoi_search::config::SolveConfig;
use hanoi_search::monitor::search_monitor::{SearchMonitor, checkpoint};
use hanoi_search::movegen::legal_moves_into;
use hanoi_search::result::SolveError;
use hanoi_search::solver::PuzzleSolver;
use hanoi_search::stats::SearchStatistics;
use hanoi_search::tree::SearchTree;
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone)]
pub struct AStarSolver {
    initial: PuzzleState,
    target: PuzzleState,
    statistics: SearchStatistics,
}

impl AStarSolver {
    pub fn new(initial: PuzzleState, target: PuzzleState) -> Self {
        Self {
            initial,
            target,
            statistics: SearchStatistics::default(),
        }
    }
}

impl PuzzleSolver for AStarSolver {
    fn name(&self) -> &str {
        "A*"
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
        let heuristic = BlockingDisks::new(self.target.clone(), max_lift);

        let mut tree = SearchTree::new();
        let mut open: PriorityFrontier<(usize, usize)> = PriorityFrontier::new();
        let mut closed: FxHashSet<PuzzleState> = FxHashSet::default();
        let mut best_g: FxHashMap<PuzzleState, usize> = FxHashMap::default();
        let mut moves = Vec::new();

        let root = tree.push_root(self.initial.clone());
        open.push((heuristic.estimate(&self.initial), 0), root);
        best_g.insert(self.initial.clone(), 0);
        self.statistics.on_node_generated();

        loop {
            self.statistics.on_frontier_size(open.len());
            let Some(((_, g), id)) = open.pop() else {
                break;
            };
            checkpoint(monitor, &self.statistics)?;

            let state = tree.state(id).clone();
            if state == self.target {
                return Ok(tree.path_to(id));
            }
            if !closed.insert(state.clone()) {
                continue;
            }
            self.statistics.on_node_explored();

            let tentative = g + 1;
            legal_moves_into(&state, max_lift, &mut moves);
            for &mv in &moves {
                let Ok(next) = state.apply_move(mv) else {
                    continue;
                };
                if best_g.get(&next).is_some_and(|&known| known <= tentative) {
                    continue;
                }
                if closed.contains(&next) {
                    continue;
                }
                best_g.insert(next.clone(), tentative);
                let f = tentative + heuristic.estimate(&next);
                open.push((f, tentative), tree.push_child(id, mv, next));
                self.statistics.on_node_generated();
            }
        }

        Err(SolveError::exhausted(
            "A* emptied its open set without reaching the target",
        ))
    }
}
