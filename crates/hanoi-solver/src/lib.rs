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

//! # Hanoi Solver
//!
//! Orchestration on top of the search crates.
//!
//! ## Modules
//!
//! - `closed_form`: the textbook recursive solution of the classical puzzle,
//!   computed without search.
//! - `registry`: the `Algorithm` enum mapping short codes such as `BFS` or
//!   `IDASTAR` to solver constructors.
//! - `driver`: runs registry algorithms on an instance under a shared move
//!   limit and optional time limit, validates the solutions and compares
//!   algorithms.
//!
//! See `driver` for a complete example.

pub mod closed_form;
pub mod driver;
pub mod registry;

pub use closed_form::ClosedFormSolver;
pub use driver::{Driver, DriverBuilder, SolveReport, validate_solution};
pub use registry::{Algorithm, UnknownAlgorithm};
