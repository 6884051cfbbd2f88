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

//! # Closed-Form Solver
//!
//! Emits the textbook recursive sequence for the classical puzzle without
//! searching: move the top `n - 1` disks to the auxiliary peg, move the
//! largest disk to the destination, then move the `n - 1` disks on top of
//! it. The result has exactly `2^n - 1` moves, which is optimal.
//!
//! Only applicable when both states are complete stacks and one disk is
//! lifted per move; anything else is reported as `NotApplicable`.

use hanoi_model::{Move, NUM_PEGS, PuzzleState, Solution};
use hanoi_search::config::SolveConfig;
use hanoi_search::monitor::search_monitor::{SearchMonitor, checkpoint};
use hanoi_search::result::SolveError;
use hanoi_search::solver::PuzzleSolver;
use hanoi_search::stats::SearchStatistics;

#[derive(Debug, Clone)]
pub struct ClosedFormSolver {
    initial: PuzzleState,
    target: PuzzleState,
    statistics: SearchStatistics,
}

impl ClosedFormSolver {
    pub fn new(initial: PuzzleState, target: PuzzleState) -> Self {
        Self {
            initial,
            target,
            statistics: SearchStatistics::default(),
        }
    }

    /// Returns `true` if the closed form can solve the pair under `max_lift`.
    pub fn is_applicable(initial: &PuzzleState, target: &PuzzleState, max_lift: usize) -> bool {
        max_lift.max(1) == 1
            && initial.num_disks() == target.num_disks()
            && initial.classical_peg().is_some()
            && target.classical_peg().is_some()
    }

    /// Appends the moves transferring the top `n` disks of `from` to `to`.
    fn transfer(
        &mut self,
        n: usize,
        from: usize,
        to: usize,
        via: usize,
        out: &mut Solution,
        monitor: &mut dyn SearchMonitor,
    ) -> Result<(), SolveError> {
        self.statistics.on_node_generated();
        checkpoint(monitor, &self.statistics)?;

        if n == 1 {
            out.push(Move::single(from, to));
            return Ok(());
        }
        self.transfer(n - 1, from, via, to, out, monitor)?;
        out.push(Move::single(from, to));
        self.transfer(n - 1, via, to, from, out, monitor)
    }
}

impl PuzzleSolver for ClosedFormSolver {
    fn name(&self) -> &str {
        "Closed Form"
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
        if config.max_lift() != 1 {
            return Err(SolveError::not_applicable(format!(
                "the closed form moves one disk at a time, but max lift is {}",
                config.max_lift()
            )));
        }
        if self.initial.num_disks() != self.target.num_disks() {
            return Err(SolveError::not_applicable(
                "initial and target hold different numbers of disks",
            ));
        }
        let (Some(from), Some(to)) = (self.initial.classical_peg(), self.target.classical_peg())
        else {
            return Err(SolveError::not_applicable(
                "the closed form needs every disk stacked on one peg in both states",
            ));
        };
        if from == to {
            return Ok(Solution::new());
        }

        let n = self.initial.num_disks();
        let Some(capacity) = u32::try_from(n)
            .ok()
            .and_then(|n| 1usize.checked_shl(n))
            .map(|total| total - 1)
        else {
            return Err(SolveError::not_applicable(format!(
                "2^{} - 1 moves cannot be enumerated",
                n
            )));
        };

        // Pegs are numbered 1..=3, so they sum to 6.
        let via = (1..=NUM_PEGS).sum::<usize>() - from - to;
        let mut solution = Solution::with_capacity(capacity);
        self.transfer(n, from, to, via, &mut solution, monitor)?;
        self.statistics.on_node_explored();
        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanoi_model::Instance;
    use hanoi_search::monitor::no_op::NoOperationMonitor;

    fn solve(initial: &PuzzleState, target: &PuzzleState, max_lift: usize) -> Result<Solution, SolveError> {
        ClosedFormSolver::new(initial.clone(), target.clone()).solve(
            &SolveConfig::new().with_max_lift(max_lift),
            &mut NoOperationMonitor::new(),
        )
    }

    #[test]
    fn test_three_disks_textbook_sequence() {
        let instance = Instance::classical(3).unwrap();
        let solution = solve(instance.initial(), instance.target(), 1).unwrap();
        let expected: Vec<Move> = [(1, 3), (1, 2), (3, 2), (1, 3), (2, 1), (2, 3), (1, 3)]
            .into_iter()
            .map(|(s, d)| Move::single(s, d))
            .collect();
        assert_eq!(solution.moves(), expected.as_slice());
    }

    #[test]
    fn test_lengths_are_powers_of_two_minus_one() {
        for n in 1..=12 {
            let instance = Instance::classical(n).unwrap();
            let solution = solve(instance.initial(), instance.target(), 1).unwrap();
            assert_eq!(solution.len(), (1 << n) - 1);
            assert!(solution.is_valid_for(instance.initial(), instance.target()));
        }
    }

    #[test]
    fn test_any_pair_of_pegs() {
        for from in 1..=3 {
            for to in 1..=3 {
                let initial = PuzzleState::classical(4, from).unwrap();
                let target = PuzzleState::classical(4, to).unwrap();
                let solution = solve(&initial, &target, 1).unwrap();
                let expected = if from == to { 0 } else { 15 };
                assert_eq!(solution.len(), expected);
                assert!(solution.is_valid_for(&initial, &target));
            }
        }
    }

    #[test]
    fn test_rejects_larger_lift() {
        let instance = Instance::classical(3).unwrap();
        let result = solve(instance.initial(), instance.target(), 2);
        assert!(matches!(result, Err(SolveError::NotApplicable { .. })));
    }

    #[test]
    fn test_rejects_non_classical_states() {
        let initial = PuzzleState::new([vec![3, 1], vec![2], vec![]]).unwrap();
        let target = PuzzleState::classical(3, 3).unwrap();
        assert!(!ClosedFormSolver::is_applicable(&initial, &target, 1));
        let result = solve(&initial, &target, 1);
        assert!(matches!(result, Err(SolveError::NotApplicable { .. })));
    }

    #[test]
    fn test_applicability() {
        let a = PuzzleState::classical(3, 1).unwrap();
        let b = PuzzleState::classical(3, 2).unwrap();
        let c = PuzzleState::classical(4, 2).unwrap();
        assert!(ClosedFormSolver::is_applicable(&a, &b, 1));
        assert!(ClosedFormSolver::is_applicable(&a, &a, 1));
        assert!(!ClosedFormSolver::is_applicable(&a, &b, 2));
        assert!(!ClosedFormSolver::is_applicable(&a, &c, 1));
    }

    #[test]
    fn test_statistics_count_recursive_calls() {
        let instance = Instance::classical(4).unwrap();
        let mut solver = ClosedFormSolver::new(instance.initial().clone(), instance.target().clone());
        solver
            .solve(&SolveConfig::default(), &mut NoOperationMonitor::new())
            .unwrap();
        assert_eq!(solver.statistics().nodes_generated, 15);
        assert_eq!(solver.statistics().solution_length, Some(15));
    }
}
