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

//! # Hanoi Search
//!
//! The contract shared by every puzzle solver.
//!
//! ## Modules
//!
//! - `movegen`: Legal move enumeration in a fixed, deterministic order.
//! - `tree`: An arena of search nodes with parent links, for frontier solvers.
//! - `visited`: A state-to-arrival map with path reconstruction, for
//!   bidirectional solvers.
//! - `stats`: `SearchStatistics` and the per-worker `WorkerStatistics`.
//! - `config`: `SolveConfig`, the per-solve options.
//! - `result`: `SolveError`, `SolverResult` and `SolverOutcome`.
//! - `solver`: The `PuzzleSolver` lifecycle trait.
//! - `monitor`: Cooperative cancellation, time limits and progress logging.
//!
//! Only `IllegalMove` is ever recovered inside a solver: move generation
//! skips any candidate the state model rejects. Every other failure ends the
//! solve and is surfaced as a `SolveError`.

pub mod config;
pub mod monitor;
pub mod movegen;
pub mod result;
pub mod solver;
pub mod stats;
pub mod tree;
pub mod visited;
