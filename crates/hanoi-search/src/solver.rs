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

//! # Solver Lifecycle
//!
//! Every algorithm implements `PuzzleSolver`. Implementors provide the
//! algorithm itself in `solve_internal`; the provided `solve` wraps it with
//! the shared lifecycle:
//!
//! 1. reset the statistics,
//! 2. notify the monitor that the search starts,
//! 3. time the call to `solve_internal`,
//! 4. record the duration and, on success, the solution length,
//! 5. notify the monitor that the search ended.
//!
//! The statistics stay readable after a failure, so a caller can report how
//! far an aborted search got.

use crate::config::SolveConfig;
use crate::monitor::search_monitor::SearchMonitor;
use crate::result::{SolveError, SolverOutcome, SolverResult};
use crate::stats::SearchStatistics;
use hanoi_model::{PuzzleState, Solution};
use std::time::Instant;

pub trait PuzzleSolver: Send {
    /// A human readable algorithm name.
    fn name(&self) -> &str;

    fn initial(&self) -> &PuzzleState;

    fn target(&self) -> &PuzzleState;

    /// Returns `true` if a returned solution is always of minimal length.
    fn guarantees_optimal(&self) -> bool;

    fn statistics(&self) -> &SearchStatistics;

    fn statistics_mut(&mut self) -> &mut SearchStatistics;

    /// Runs the algorithm. Called by `solve` after the statistics were reset.
    fn solve_internal(
        &mut self,
        config: &SolveConfig,
        monitor: &mut dyn SearchMonitor,
    ) -> Result<Solution, SolveError>;

    fn solve(
        &mut self,
        config: &SolveConfig,
        monitor: &mut dyn SearchMonitor,
    ) -> Result<Solution, SolveError> {
        self.statistics_mut().reset();
        monitor.on_enter_search(self.initial(), self.target(), config);

        let start = Instant::now();
        let result = self.solve_internal(config, monitor);

        let statistics = self.statistics_mut();
        statistics.set_solve_duration(start.elapsed());
        if let Ok(solution) = &result {
            statistics.set_solution_length(solution.len());
        }

        monitor.on_exit_search(self.statistics());
        result
    }

    /// Like `solve`, packaging the result and a statistics snapshot.
    fn run(&mut self, config: &SolveConfig, monitor: &mut dyn SearchMonitor) -> SolverOutcome {
        let result = match self.solve(config, monitor) {
            Ok(solution) if self.guarantees_optimal() => SolverResult::Optimal(solution),
            Ok(solution) => SolverResult::Feasible(solution),
            Err(error) => SolverResult::Failed(error),
        };
        SolverOutcome::new(result, self.statistics().clone())
    }
}

impl std::fmt::Debug for dyn PuzzleSolver + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PuzzleSolver({})", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::no_op::NoOperationMonitor;
    use hanoi_model::Move;

    /// Moves a single disk from peg 1 to peg 3, or fails on demand.
    struct OneMove {
        initial: PuzzleState,
        target: PuzzleState,
        statistics: SearchStatistics,
        fail: bool,
    }

    impl OneMove {
        fn new(fail: bool) -> Self {
            Self {
                initial: PuzzleState::classical(1, 1).unwrap(),
                target: PuzzleState::classical(1, 3).unwrap(),
                statistics: SearchStatistics::default(),
                fail,
            }
        }
    }

    impl PuzzleSolver for OneMove {
        fn name(&self) -> &str {
            "OneMove"
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
            _config: &SolveConfig,
            _monitor: &mut dyn SearchMonitor,
        ) -> Result<Solution, SolveError> {
            self.statistics.on_node_explored();
            if self.fail {
                return Err(SolveError::exhausted("asked to fail"));
            }
            Ok(Solution::from(vec![Move::single(1, 3)]))
        }
    }

    #[test]
    fn test_solve_resets_and_records_length() {
        let mut solver = OneMove::new(false);
        solver.statistics.nodes_generated = 99;
        let solution = solver
            .solve(&SolveConfig::default(), &mut NoOperationMonitor::new())
            .unwrap();
        assert_eq!(solution.len(), 1);
        assert_eq!(solver.statistics().nodes_generated, 0);
        assert_eq!(solver.statistics().nodes_explored, 1);
        assert_eq!(solver.statistics().solution_length, Some(1));
    }

    #[test]
    fn test_failure_keeps_partial_statistics() {
        let mut solver = OneMove::new(true);
        let result = solver.solve(&SolveConfig::default(), &mut NoOperationMonitor::new());
        assert!(matches!(result, Err(SolveError::SearchExhausted { .. })));
        assert_eq!(solver.statistics().nodes_explored, 1);
        assert_eq!(solver.statistics().solution_length, None);
    }

    #[test]
    fn test_run_packages_outcome() {
        let mut solver = OneMove::new(false);
        let outcome = solver.run(&SolveConfig::default(), &mut NoOperationMonitor::new());
        assert!(outcome.is_optimal());
        assert_eq!(outcome.statistics.solution_length, Some(1));

        let mut failing = OneMove::new(true);
        let outcome = failing.run(&SolveConfig::default(), &mut NoOperationMonitor::new());
        assert!(outcome.error().is_some());
    }

    #[test]
    fn test_solver_is_object_safe() {
        let solver: Box<dyn PuzzleSolver> = Box::new(OneMove::new(false));
        assert_eq!(format!("{:?}", solver), "PuzzleSolver(OneMove)");
    }
}
