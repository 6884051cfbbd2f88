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

//! # Heuristics
//!
//! Lower bounds on the number of moves still needed to reach the target.
//!
//! A heuristic is admissible when it never overestimates that number. A* and
//! IDA* only return shortest solutions when their heuristic is admissible;
//! greedy best-first search does not care.

use hanoi_model::{NUM_PEGS, PuzzleState};

/// Estimates the remaining distance from a state to a fixed target.
pub trait Heuristic {
    /// Returns the name of the heuristic.
    fn name(&self) -> &str;

    /// Returns a lower bound on the moves needed to turn `state` into the
    /// target.
    fn estimate(&self, state: &PuzzleState) -> usize;
}

/// Counts the disks that must move at least once.
///
/// For each peg the longest bottom prefix agreeing with the same peg of the
/// target stays put; every disk stacked above that prefix sits on something
/// it must eventually leave. One move relocates at most `max_lift` disks, so
/// the count divided by `max_lift` (rounded up) is a lower bound.
///
/// The bound is also consistent: a single move lowers the misplaced count by
/// at most `max_lift`, so the estimate drops by at most one per move.
#[derive(Debug, Clone)]
pub struct BlockingDisks {
    target: PuzzleState,
    max_lift: usize,
}

impl BlockingDisks {
    /// Creates the heuristic for `target`. A `max_lift` of zero is treated
    /// as one.
    pub fn new(target: PuzzleState, max_lift: usize) -> Self {
        Self {
            target,
            max_lift: max_lift.max(1),
        }
    }

    #[inline]
    pub fn target(&self) -> &PuzzleState {
        &self.target
    }

    #[inline]
    pub fn max_lift(&self) -> usize {
        self.max_lift
    }
}

impl Heuristic for BlockingDisks {
    fn name(&self) -> &str {
        "BlockingDisks"
    }

    fn estimate(&self, state: &PuzzleState) -> usize {
        misplaced_disks(state, &self.target).div_ceil(self.max_lift)
    }
}

/// Number of disks lying above the longest bottom prefix each peg shares with
/// the corresponding peg of `target`.
pub fn misplaced_disks(state: &PuzzleState, target: &PuzzleState) -> usize {
    (1..=NUM_PEGS)
        .map(|peg| {
            let current = state.peg(peg);
            let wanted = target.peg(peg);
            let matched = current
                .iter()
                .zip(wanted)
                .take_while(|(a, b)| a == b)
                .count();
            current.len() - matched
        })
        .sum()
}
