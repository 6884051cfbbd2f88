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

//! # Greedy Best-First Search
//!
//! Always expands the queued state that looks closest to the target by the
//! blocking-disks estimate, ignoring how many moves it took to get there.
//! Usually much faster than A*, but the first path found may be longer than
//! necessary.

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
use rustc_hash::FxHashSet;

#[derive(Debug, Clone)]
pub struct GreedyBestFirstSolver {
    initial: PuzzleState,
    target: PuzzleState,
    statistics: SearchStatistics,
}

impl GreedyBestFirstSolver {
    pub fn new(initial: PuzzleState, target: PuzzleState) -> Self {
        Self {
            initial,
            target,
            statistics: SearchStatistics::default(),
        }
    }
}

impl PuzzleSolver for GreedyBestFirstSolver {
    fn name(&self) -> &str {
        "Greedy Best-First Search"
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
        let heuristic = BlockingDisks::new(self.target.clone(), max_lift);

        let mut tree = SearchTree::new();
        let mut open: PriorityFrontier<usize> = PriorityFrontier::new();
        let mut visited: FxHashSet<PuzzleState> = FxHashSet::default();
        let mut moves = Vec::new();

        open.push(
            heuristic.estimate(&self.initial),
            tree.push_root(self.initial.clone()),
        );
        self.statistics.on_node_generated();

        loop {
            self.statistics.on_frontier_size(open.len());
            let Some((_, id)) = open.pop() else {
                break;
            };
            checkpoint(monitor, &self.statistics)?;

            let state = tree.state(id).clone();
            if state == self.target {
                return Ok(tree.path_to(id));
            }
            if !visited.insert(state.clone()) {
                continue;
            }
            self.statistics.on_node_explored();

            legal_moves_into(&state, max_lift, &mut moves);
            for &mv in &moves {
                let Ok(next) = state.apply_move(mv) else {
                    continue;
                };
                if visited.contains(&next) {
                    continue;
                }
                let h = heuristic.estimate(&next);
                open.push(h, tree.push_child(id, mv, next));
                self.statistics.on_node_generated();
            }
        }

        Err(SolveError::exhausted(
            "greedy best-first search emptied its open set without reaching the target",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanoi_blind::BfsSolver;
    use hanoi_model::Instance;
    use hanoi_search::monitor::no_op::NoOperationMonitor;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn config(max_lift: usize) -> SolveConfig {
        SolveConfig::new().with_max_lift(max_lift)
    }

    #[test]
    fn test_solves_classical_instances() {
        for n in 1..=6 {
            let instance = Instance::classical(n).unwrap();
            let mut solver =
                GreedyBestFirstSolver::new(instance.initial().clone(), instance.target().clone());
            let solution = solver
                .solve(&config(1), &mut NoOperationMonitor::new())
                .unwrap();
            assert!(solution.len() >= (1 << n) - 1);
            assert!(solution.is_valid_for(instance.initial(), instance.target()));
        }
    }

    #[test]
    fn test_never_shorter_than_bfs() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for max_lift in 1..=2 {
            for _ in 0..10 {
                let instance = Instance::random(5, &mut rng).unwrap();
                let (initial, target) = (instance.initial().clone(), instance.target().clone());
                let bfs = BfsSolver::new(initial.clone(), target.clone())
                    .solve(&config(max_lift), &mut NoOperationMonitor::new())
                    .unwrap();
                let greedy = GreedyBestFirstSolver::new(initial.clone(), target.clone())
                    .solve(&config(max_lift), &mut NoOperationMonitor::new())
                    .unwrap();
                assert!(greedy.len() >= bfs.len());
                assert!(greedy.is_valid_for(&initial, &target));
            }
        }
    }

    #[test]
    fn test_not_flagged_optimal() {
        let instance = Instance::classical(2).unwrap();
        let mut solver =
            GreedyBestFirstSolver::new(instance.initial().clone(), instance.target().clone());
        let outcome = solver.run(&config(1), &mut NoOperationMonitor::new());
        assert!(outcome.is_feasible());
        assert!(!outcome.is_optimal());
    }

    #[test]
    fn test_identical_states_need_no_moves() {
        let state = PuzzleState::classical(3, 2).unwrap();
        let mut solver = GreedyBestFirstSolver::new(state.clone(), state.clone());
        let solution = solver
            .solve(&config(3), &mut NoOperationMonitor::new())
            .unwrap();
        assert!(solution.is_empty());
    }
}
