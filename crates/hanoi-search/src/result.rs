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

//! # Solve Results
//!
//! `SolveError` is the typed failure of a solve. `SolverResult` and
//! `SolverOutcome` package a finished run together with its statistics for
//! callers that compare several solvers.

use crate::stats::SearchStatistics;
use hanoi_model::Solution;

/// The reasons a solve can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// A depth-bounded search exhausted its bound without reaching the target.
    DepthLimitExceeded { depth_limit: usize },
    /// The frontier emptied or a safety ceiling was hit. On a connected
    /// puzzle graph this signals a defect rather than a puzzle property.
    SearchExhausted { context: String },
    /// The search was cancelled, by an interrupt or a time limit.
    Aborted { reason: String },
    /// The solver cannot handle this instance.
    NotApplicable { reason: String },
}

impl SolveError {
    #[inline]
    pub fn exhausted(context: impl Into<String>) -> Self {
        Self::SearchExhausted {
            context: context.into(),
        }
    }

    #[inline]
    pub fn aborted(reason: impl Into<String>) -> Self {
        Self::Aborted {
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn not_applicable(reason: impl Into<String>) -> Self {
        Self::NotApplicable {
            reason: reason.into(),
        }
    }

    /// Returns `true` if the search was cancelled rather than failing.
    #[inline]
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted { .. })
    }
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DepthLimitExceeded { depth_limit } => {
                write!(f, "No solution found within depth limit {}", depth_limit)
            }
            Self::SearchExhausted { context } => write!(f, "Search exhausted: {}", context),
            Self::Aborted { reason } => write!(f, "Search aborted: {}", reason),
            Self::NotApplicable { reason } => write!(f, "Solver not applicable: {}", reason),
        }
    }
}

impl std::error::Error for SolveError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverResult {
    /// A solution of provably minimal length.
    Optimal(Solution),
    /// A valid solution without an optimality guarantee.
    Feasible(Solution),
    /// The solve failed.
    Failed(SolveError),
}

impl SolverResult {
    #[inline]
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Optimal(solution) | Self::Feasible(solution) => Some(solution),
            Self::Failed(_) => None,
        }
    }

    #[inline]
    pub fn error(&self) -> Option<&SolveError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}

impl std::fmt::Display for SolverResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Optimal(solution) => write!(f, "Optimal(moves={})", solution.len()),
            Self::Feasible(solution) => write!(f, "Feasible(moves={})", solution.len()),
            Self::Failed(error) => write!(f, "Failed({})", error),
        }
    }
}

/// A finished run: its result and the statistics collected along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOutcome {
    pub result: SolverResult,
    pub statistics: SearchStatistics,
}

impl SolverOutcome {
    #[inline]
    pub fn new(result: SolverResult, statistics: SearchStatistics) -> Self {
        Self { result, statistics }
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.result, SolverResult::Optimal(_))
    }

    #[inline]
    pub fn is_feasible(&self) -> bool {
        matches!(self.result, SolverResult::Feasible(_))
    }

    #[inline]
    pub fn has_solution(&self) -> bool {
        self.result.solution().is_some()
    }

    #[inline]
    pub fn solution(&self) -> Option<&Solution> {
        self.result.solution()
    }

    #[inline]
    pub fn error(&self) -> Option<&SolveError> {
        self.result.error()
    }
}

impl std::fmt::Display for SolverOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Result: {}", self.result)?;
        write!(f, "{}", self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanoi_model::Move;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SolveError::DepthLimitExceeded { depth_limit: 4 }.to_string(),
            "No solution found within depth limit 4"
        );
        assert_eq!(
            SolveError::aborted("time limit reached").to_string(),
            "Search aborted: time limit reached"
        );
        assert!(SolveError::aborted("x").is_aborted());
        assert!(!SolveError::exhausted("x").is_aborted());
    }

    #[test]
    fn test_outcome_accessors() {
        let solution = Solution::from(vec![Move::single(1, 3)]);
        let outcome = SolverOutcome::new(
            SolverResult::Optimal(solution.clone()),
            SearchStatistics::default(),
        );
        assert!(outcome.is_optimal());
        assert!(!outcome.is_feasible());
        assert!(outcome.has_solution());
        assert_eq!(outcome.solution(), Some(&solution));
        assert_eq!(outcome.error(), None);

        let failed = SolverOutcome::new(
            SolverResult::Failed(SolveError::not_applicable("not classical")),
            SearchStatistics::default(),
        );
        assert!(!failed.has_solution());
        assert!(matches!(
            failed.error(),
            Some(SolveError::NotApplicable { .. })
        ));
    }

    #[test]
    fn test_result_display() {
        let solution = Solution::from(vec![Move::single(1, 2), Move::single(2, 3)]);
        assert_eq!(
            SolverResult::Feasible(solution).to_string(),
            "Feasible(moves=2)"
        );
    }
}
