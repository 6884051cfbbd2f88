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

//! # Hanoi Informed
//!
//! Search strategies guided by the blocking-disks heuristic, a lower bound on
//! the moves still needed (see `heuristic`).
//!
//! - `AStarSolver` orders its frontier by `g + h` and returns shortest
//!   solutions.
//! - `IdaStarSolver` bounds repeated depth-first probes by `g + h`. Also
//!   optimal, with memory proportional to the solution length.
//! - `GreedyBestFirstSolver` orders by `h` alone. Fast, not optimal.

pub mod astar;
pub mod frontier;
pub mod greedy;
pub mod heuristic;
pub mod ida_star;

pub use astar::AStarSolver;
pub use greedy::GreedyBestFirstSolver;
pub use heuristic::{BlockingDisks, Heuristic};
pub use ida_star::IdaStarSolver;
