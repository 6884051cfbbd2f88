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

//! # IDA*
//!
//! Iterative deepening on `f = g + h` instead of on depth. Each iteration is
//! a depth-first probe that abandons a branch as soon as its `f` exceeds the
//! current bound and remembers the smallest `f` that did. That value becomes
//! the next bound. With an admissible heuristic the first solution found is
//! a shortest one.
//!
//! Memory stays proportional to the current path. Cycles are avoided by
//! scanning the path for the successor before descending, which keeps the
//! probe cheap for the short paths involved here.

use crate::heuristic::{BlockingDisks, Heuristic};
use hanoi_model::{Move, PuzzleState, Solution};
use hanoi_search::config::SolveConfig;
use hanoi_search::monitor::search_monitor::{BoundKind, SearchMonitor, checkpoint};
use hanoi_search::movegen::legal_moves;
use hanoi_search::result::SolveError;
use hanoi_search::solver::PuzzleSolver;
use hanoi_search::stats::SearchStatistics;

/// The largest f-cost bound tried by default.
pub const DEFAULT_BOUND_CEILING: usize = 1_000_000;

/// The result of one bounded probe below a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    Found,
    /// Smallest f-cost beyond the bound, or `None` if no branch was cut.
    Exceeded(Option<usize>),
}

#[derive(Debug, Clone)]
pub struct IdaStarSolver {
    initial: PuzzleState,
    target: PuzzleState,
    bound_ceiling: usize,
    statistics: SearchStatistics,
}

impl IdaStarSolver {
    pub fn new(initial: PuzzleState, target: PuzzleState) -> Self {
        Self {
            initial,
            target,
            bound_ceiling: DEFAULT_BOUND_CEILING,
            statistics: SearchStatistics::default(),
        }
    }

    /// Sets the largest f-cost bound tried before giving up.
    pub fn with_bound_ceiling(mut self, bound_ceiling: usize) -> Self {
        self.bound_ceiling = bound_ceiling;
        self
    }

    #[inline]
    pub fn bound_ceiling(&self) -> usize {
        self.bound_ceiling
    }

    /// Depth-first probe below the last state of `states`.
    ///
    /// On `Probe::Found`, `path` holds the moves from the initial state to
    /// the target.
    fn probe(
        &mut self,
        states: &mut Vec<PuzzleState>,
        path: &mut Vec<Move>,
        bound: usize,
        ctx: &mut ProbeContext<'_, '_>,
    ) -> Result<Probe, SolveError> {
        self.statistics.on_frontier_size(states.len());
        checkpoint(ctx.monitor, &self.statistics)?;

        let Some(current) = states.last().cloned() else {
            return Ok(Probe::Exceeded(None));
        };
        let f = path.len() + ctx.heuristic.estimate(&current);
        if f > bound {
            return Ok(Probe::Exceeded(Some(f)));
        }
        if current == self.target {
            return Ok(Probe::Found);
        }
        self.statistics.on_node_explored();

        let mut min_exceeded: Option<usize> = None;
        for mv in legal_moves(&current, ctx.max_lift) {
            let Ok(next) = current.apply_move(mv) else {
                continue;
            };
            self.statistics.on_node_generated();
            if states.contains(&next) {
                continue;
            }

            states.push(next);
            path.push(mv);
            match self.probe(states, path, bound, ctx)? {
                Probe::Found => return Ok(Probe::Found),
                Probe::Exceeded(exceeded) => {
                    min_exceeded = match (min_exceeded, exceeded) {
                        (Some(a), Some(b)) => Some(a.min(b)),
                        (a, b) => a.or(b),
                    };
                }
            }
            states.pop();
            path.pop();
        }

        Ok(Probe::Exceeded(min_exceeded))
    }
}

/// Read-mostly inputs of a probe, bundled to keep the recursion signature
/// short.
struct ProbeContext<'m, 'a> {
    heuristic: BlockingDisks,
    max_lift: usize,
    monitor: &'m mut (dyn SearchMonitor + 'a),
}

impl PuzzleSolver for IdaStarSolver {
    fn name(&self) -> &str {
        "IDA*"
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
        let mut bound = heuristic.estimate(&self.initial);
        let mut ctx = ProbeContext {
            heuristic,
            max_lift,
            monitor,
        };

        self.statistics.on_node_generated();

        while bound <= self.bound_ceiling {
            self.statistics.on_iteration(bound);
            ctx.monitor.on_iteration(BoundKind::FCost, bound, &self.statistics);

            let mut states = vec![self.initial.clone()];
            let mut path = Vec::new();
            match self.probe(&mut states, &mut path, bound, &mut ctx)? {
                Probe::Found => return Ok(Solution::from(path)),
                Probe::Exceeded(Some(next)) => bound = next,
                Probe::Exceeded(None) => {
                    return Err(SolveError::exhausted(format!(
                        "IDA* found no path beyond f-cost bound {}",
                        bound
                    )));
                }
            }
        }

        Err(SolveError::exhausted(format!(
            "IDA* f-cost bound exceeded the ceiling of {}",
            self.bound_ceiling
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanoi_blind::BfsSolver;
    use hanoi_model::Instance;
    use hanoi_search::monitor::no_op::NoOperationMonitor;
    use hanoi_search::monitor::time_limit::TimeLimitMonitor;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::time::Duration;

    fn config(max_lift: usize) -> SolveConfig {
        SolveConfig::new().with_max_lift(max_lift)
    }

    #[test]
    fn test_classical_lengths_are_optimal() {
        for n in 1..=4 {
            let instance = Instance::classical(n).unwrap();
            let mut solver =
                IdaStarSolver::new(instance.initial().clone(), instance.target().clone());
            let solution = solver
                .solve(&config(1), &mut NoOperationMonitor::new())
                .unwrap();
            assert_eq!(solution.len(), (1 << n) - 1);
            assert!(solution.is_valid_for(instance.initial(), instance.target()));
        }
    }

    #[test]
    fn test_bounds_increase_monotonically() {
        let instance = Instance::classical(3).unwrap();
        let mut solver = IdaStarSolver::new(instance.initial().clone(), instance.target().clone());
        solver
            .solve(&config(1), &mut NoOperationMonitor::new())
            .unwrap();
        let bounds = &solver.statistics().cutoff_bounds;
        assert_eq!(bounds.first(), Some(&3));
        assert_eq!(bounds.last(), Some(&7));
        assert!(bounds.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(solver.statistics().iterations as usize, bounds.len());
    }

    #[test]
    fn test_matches_bfs_on_random_instances() {
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        for max_lift in 1..=2 {
            for _ in 0..6 {
                let instance = Instance::random(4, &mut rng).unwrap();
                let (initial, target) = (instance.initial().clone(), instance.target().clone());
                let bfs = BfsSolver::new(initial.clone(), target.clone())
                    .solve(&config(max_lift), &mut NoOperationMonitor::new())
                    .unwrap();
                let ida = IdaStarSolver::new(initial.clone(), target.clone())
                    .solve(&config(max_lift), &mut NoOperationMonitor::new())
                    .unwrap();
                assert_eq!(ida.len(), bfs.len(), "instance {}", instance);
                assert!(ida.is_valid_for(&initial, &target));
            }
        }
    }

    #[test]
    fn test_identical_states_need_no_moves() {
        let state = PuzzleState::classical(2, 3).unwrap();
        let mut solver = IdaStarSolver::new(state.clone(), state.clone());
        let solution = solver
            .solve(&config(1), &mut NoOperationMonitor::new())
            .unwrap();
        assert!(solution.is_empty());
        assert_eq!(solver.statistics().cutoff_bounds, vec![0]);
    }

    #[test]
    fn test_ceiling_below_initial_estimate_exhausts() {
        let instance = Instance::classical(3).unwrap();
        let mut solver = IdaStarSolver::new(instance.initial().clone(), instance.target().clone())
            .with_bound_ceiling(2);
        let result = solver.solve(&config(1), &mut NoOperationMonitor::new());
        assert!(matches!(result, Err(SolveError::SearchExhausted { .. })));
    }

    #[test]
    fn test_time_limit_aborts() {
        let instance = Instance::classical(8).unwrap();
        let mut monitor = TimeLimitMonitor::with_clock_check_mask(Duration::ZERO, 0);
        let mut solver = IdaStarSolver::new(instance.initial().clone(), instance.target().clone());
        let result = solver.solve(&config(1), &mut monitor);
        assert!(result.unwrap_err().is_aborted());
    }
}
