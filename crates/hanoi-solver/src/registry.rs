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

//! # Algorithm Registry
//!
//! Maps the short algorithm codes accepted from users (`BFS`, `ASTAR`, ...)
//! to solver constructors, so callers pick an algorithm by value instead of
//! by type.

use crate::closed_form::ClosedFormSolver;
use hanoi_blind::{
    BfsSolver, BidirectionalBfsSolver, DfsSolver, IterativeDeepeningSolver,
    ParallelBidirectionalBfsSolver,
};
use hanoi_informed::{AStarSolver, GreedyBestFirstSolver, IdaStarSolver};
use hanoi_model::PuzzleState;
use hanoi_search::solver::PuzzleSolver;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    Bfs,
    Dfs,
    IterativeDeepening,
    AStar,
    IdaStar,
    GreedyBestFirst,
    BidirectionalBfs,
    ParallelBidirectionalBfs,
    ClosedForm,
}

impl Algorithm {
    /// Every algorithm, in registry order.
    pub const ALL: [Algorithm; 9] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::IterativeDeepening,
        Algorithm::AStar,
        Algorithm::IdaStar,
        Algorithm::GreedyBestFirst,
        Algorithm::BidirectionalBfs,
        Algorithm::ParallelBidirectionalBfs,
        Algorithm::ClosedForm,
    ];

    /// The short code, e.g. `"IDASTAR"`.
    pub const fn code(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::IterativeDeepening => "IDE",
            Algorithm::AStar => "ASTAR",
            Algorithm::IdaStar => "IDASTAR",
            Algorithm::GreedyBestFirst => "GBFS",
            Algorithm::BidirectionalBfs => "BIBFS",
            Algorithm::ParallelBidirectionalBfs => "PBIBFS",
            Algorithm::ClosedForm => "CFORM",
        }
    }

    pub const fn full_name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "Breadth-First Search",
            Algorithm::Dfs => "Depth-First Search",
            Algorithm::IterativeDeepening => "Iterative Deepening",
            Algorithm::AStar => "A* with heuristic",
            Algorithm::IdaStar => "Iterative Deepening A*",
            Algorithm::GreedyBestFirst => "Greedy Best-First Search",
            Algorithm::BidirectionalBfs => "Bidirectional BFS",
            Algorithm::ParallelBidirectionalBfs => "Parallel Bidirectional BFS",
            Algorithm::ClosedForm => "Closed Form",
        }
    }

    /// Returns `true` if every solution this algorithm returns is shortest.
    pub const fn guarantees_optimal(self) -> bool {
        matches!(
            self,
            Algorithm::Bfs
                | Algorithm::IterativeDeepening
                | Algorithm::AStar
                | Algorithm::IdaStar
                | Algorithm::ClosedForm
        )
    }

    /// Returns `true` if the algorithm can run on the pair. Only the closed
    /// form is restricted.
    pub fn is_applicable(self, initial: &PuzzleState, target: &PuzzleState, max_lift: usize) -> bool {
        match self {
            Algorithm::ClosedForm => ClosedFormSolver::is_applicable(initial, target, max_lift),
            _ => true,
        }
    }

    /// Creates a solver for the pair with default settings.
    pub fn build(self, initial: PuzzleState, target: PuzzleState) -> Box<dyn PuzzleSolver> {
        match self {
            Algorithm::Bfs => Box::new(BfsSolver::new(initial, target)),
            Algorithm::Dfs => Box::new(DfsSolver::new(initial, target)),
            Algorithm::IterativeDeepening => {
                Box::new(IterativeDeepeningSolver::new(initial, target))
            }
            Algorithm::AStar => Box::new(AStarSolver::new(initial, target)),
            Algorithm::IdaStar => Box::new(IdaStarSolver::new(initial, target)),
            Algorithm::GreedyBestFirst => Box::new(GreedyBestFirstSolver::new(initial, target)),
            Algorithm::BidirectionalBfs => Box::new(BidirectionalBfsSolver::new(initial, target)),
            Algorithm::ParallelBidirectionalBfs => {
                Box::new(ParallelBidirectionalBfsSolver::new(initial, target))
            }
            Algorithm::ClosedForm => Box::new(ClosedFormSolver::new(initial, target)),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// An algorithm code that is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm {
    code: String,
}

impl UnknownAlgorithm {
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl std::fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let known: Vec<&str> = Algorithm::ALL.iter().map(|a| a.code()).collect();
        write!(
            f,
            "Unknown algorithm: {} (expected one of {})",
            self.code,
            known.join(", ")
        )
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| UnknownAlgorithm {
                code: code.to_string(),
            })
    }
}
