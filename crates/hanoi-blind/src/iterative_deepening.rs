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

//! # Iterative Deepening
//!
//! Runs depth-limited DFS passes with limits `0, 1, 2, ...`. The first limit
//! at which the target is found equals the shortest solution length, so the
//! result is optimal while memory stays proportional to one pass.
//!
//! Within a pass a state may be reached again at a different depth, so
//! duplicates are detected on the `(state, depth)` pair rather than on the
//! state alone. A failed pass reports `DepthLimitExceeded`, which the outer
//! loop answers by raising the limit. The loop gives up with
//! `SearchExhausted` when a pass never touches its cutoff (nothing deeper
//! exists) or when the limit passes the safety ceiling.

use hanoi_model::{PuzzleState, Solution};
use hanoi_search::config::SolveConfig;
use hanoi_search::monitor::search_monitor::{BoundKind, SearchMonitor, checkpoint};
use hanoi_search::movegen::legal_moves_into;
use hanoi_search::result::SolveError;
use hanoi_search::solver::PuzzleSolver;
use hanoi_search::stats::SearchStatistics;
use hanoi_search::tree::SearchTree;
use rustc_hash::FxHashSet;

/// The largest depth limit tried by default.
pub const DEFAULT_DEPTH_CEILING: usize = 1000;

#[derive(Debug, Clone)]
pub struct IterativeDeepeningSolver {
    initial: PuzzleState,
    target: PuzzleState,
    depth_ceiling: usize,
    statistics: SearchStatistics,
}

impl IterativeDeepeningSolver {
    pub fn new(initial: PuzzleState, target: PuzzleState) -> Self {
        Self {
            initial,
            target,
            depth_ceiling: DEFAULT_DEPTH_CEILING,
            statistics: SearchStatistics::default(),
        }
    }

    /// Sets the largest depth limit tried before giving up.
    pub fn with_depth_ceiling(mut self, depth_ceiling: usize) -> Self {
        self.depth_ceiling = depth_ceiling;
        self
    }

    #[inline]
    pub fn depth_ceiling(&self) -> usize {
        self.depth_ceiling
    }

    /// One depth-limited pass.
    fn depth_limited_search(
        &mut self,
        depth_limit: usize,
        max_lift: usize,
        monitor: &mut dyn SearchMonitor,
    ) -> Result<Solution, SolveError> {
        let mut tree = SearchTree::new();
        let mut stack = Vec::new();
        let mut seen_at_depth: FxHashSet<(PuzzleState, usize)> = FxHashSet::default();
        let mut moves = Vec::new();
        let mut reached_cutoff = false;

        stack.push(tree.push_root(self.initial.clone()));

        while let Some(id) = stack.pop() {
            self.statistics.on_node_explored();
            self.statistics.on_frontier_size(stack.len());
            checkpoint(monitor, &self.statistics)?;

            let depth = tree.depth(id);
            let state = tree.state(id).clone();
            if state == self.target {
                return Ok(tree.path_to(id));
            }
            if depth >= depth_limit {
                reached_cutoff = true;
                continue;
            }

            legal_moves_into(&state, max_lift, &mut moves);
            for &mv in &moves {
                let Ok(next) = state.apply_move(mv) else {
                    continue;
                };
                if seen_at_depth.insert((next.clone(), depth + 1)) {
                    self.statistics.on_node_generated();
                    stack.push(tree.push_child(id, mv, next));
                }
            }
        }

        if reached_cutoff {
            Err(SolveError::DepthLimitExceeded { depth_limit })
        } else {
            Err(SolveError::exhausted(format!(
                "every state reachable within {} moves was examined without reaching the target",
                depth_limit
            )))
        }
    }
}

impl PuzzleSolver for IterativeDeepeningSolver {
    fn name(&self) -> &str {
        "Iterative Deepening"
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
        for depth_limit in 0..=self.depth_ceiling {
            self.statistics.on_iteration(depth_limit);
            monitor.on_iteration(BoundKind::Depth, depth_limit, &self.statistics);

            match self.depth_limited_search(depth_limit, config.max_lift(), monitor) {
                Err(SolveError::DepthLimitExceeded { .. }) => continue,
                other => return other,
            }
        }

        Err(SolveError::exhausted(format!(
            "search depth limit exceeded ({}); the puzzle may be unsolvable",
            self.depth_ceiling
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::BfsSolver;
    use hanoi_model::Instance;
    use hanoi_search::monitor::no_op::NoOperationMonitor;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn config(max_lift: usize) -> SolveConfig {
        SolveConfig::new().with_max_lift(max_lift)
    }

    #[test]
    fn test_classical_three_disks_takes_eight_iterations() {
        let instance = Instance::classical(3).unwrap();
        let mut solver =
            IterativeDeepeningSolver::new(instance.initial().clone(), instance.target().clone());
        let solution = solver
            .solve(&config(1), &mut NoOperationMonitor::new())
            .unwrap();
        assert_eq!(solution.len(), 7);
        assert!(solution.is_valid_for(instance.initial(), instance.target()));
        assert_eq!(solver.statistics().iterations, 8);
        assert_eq!(solver.statistics().cutoff_bounds, (0..=7).collect::<Vec<_>>());
    }

    #[test]
    fn test_matches_bfs_length_on_random_instances() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        for _ in 0..5 {
            let instance = Instance::random(3, &mut rng).unwrap();
            let (initial, target) = (instance.initial().clone(), instance.target().clone());
            for max_lift in 1..=2 {
                let ide = IterativeDeepeningSolver::new(initial.clone(), target.clone())
                    .solve(&config(max_lift), &mut NoOperationMonitor::new())
                    .unwrap();
                let bfs = BfsSolver::new(initial.clone(), target.clone())
                    .solve(&config(max_lift), &mut NoOperationMonitor::new())
                    .unwrap();
                assert_eq!(ide.len(), bfs.len());
                assert!(ide.is_valid_for(&initial, &target));
            }
        }
    }

    #[test]
    fn test_identical_states_finish_in_first_iteration() {
        let state = PuzzleState::classical(3, 1).unwrap();
        let mut solver = IterativeDeepeningSolver::new(state.clone(), state);
        let solution = solver
            .solve(&config(1), &mut NoOperationMonitor::new())
            .unwrap();
        assert!(solution.is_empty());
        assert_eq!(solver.statistics().cutoff_bounds, vec![0]);
    }

    #[test]
    fn test_ceiling_turns_into_search_exhausted() {
        let instance = Instance::classical(3).unwrap();
        let mut solver =
            IterativeDeepeningSolver::new(instance.initial().clone(), instance.target().clone())
                .with_depth_ceiling(4);
        let result = solver.solve(&config(1), &mut NoOperationMonitor::new());
        assert!(matches!(result, Err(SolveError::SearchExhausted { .. })));
        assert_eq!(solver.statistics().iterations, 5);
    }
}
