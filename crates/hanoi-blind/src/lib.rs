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

//! # Hanoi Blind
//!
//! Uninformed search strategies. None of them looks at how close a state is
//! to the target; they differ in the order states are expanded and in what
//! they remember.
//!
//! | Solver | Frontier | Optimal |
//! |---|---|---|
//! | `BfsSolver` | FIFO queue | yes |
//! | `DfsSolver` | LIFO stack | no |
//! | `IterativeDeepeningSolver` | depth-bounded stack, repeated | yes |
//! | `BidirectionalBfsSolver` | two queues, alternating | no |
//! | `ParallelBidirectionalBfsSolver` | two queues on two threads | no |

pub mod bfs;
pub mod bidirectional;
pub mod dfs;
pub mod iterative_deepening;
pub mod parallel_bidirectional;

pub use bfs::BfsSolver;
pub use bidirectional::BidirectionalBfsSolver;
pub use dfs::DfsSolver;
pub use iterative_deepening::IterativeDeepeningSolver;
pub use parallel_bidirectional::ParallelBidirectionalBfsSolver;
