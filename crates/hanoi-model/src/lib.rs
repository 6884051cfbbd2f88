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

//! # Hanoi Model
//!
//! **The immutable state model for generalized Tower of Hanoi puzzles.**
//!
//! A puzzle has three pegs and `N` disks of distinct sizes `1..=N`. A move
//! lifts the top `k` disks of one peg as a block and places them on another,
//! provided no disk ends up on a smaller one. Allowing `k > 1` (the
//! *max-lift* bound) generalizes the classical puzzle.
//!
//! ## Modules
//!
//! * **`moves`**: The `Move` value type and the `IllegalMove` error.
//! * **`state`**: `PuzzleState`, an immutable configuration with an eagerly
//!   computed structural hash, plus classical and random constructors.
//! * **`solution`**: `Solution`, an ordered move sequence that can be replayed,
//!   inverted and validated.
//! * **`instance`**: `Instance`, an initial/target pair, including the
//!   `PEG1:PEG2:PEG3>PEG1:PEG2:PEG3` text format.
//!
//! ## Design Philosophy
//!
//! 1.  **Immutability**: Applying a move always yields a new state. States can
//!     be shared freely across threads.
//! 2.  **Fail-Fast**: Constructors validate eagerly, so solvers never see a
//!     state that breaks the stacking rule.

pub mod instance;
pub mod moves;
pub mod solution;
pub mod state;

pub use instance::{Instance, InstanceError, Side};
pub use moves::{IllegalMove, Move, NUM_PEGS};
pub use solution::Solution;
pub use state::{Disk, Peg, PuzzleState, StateError};
