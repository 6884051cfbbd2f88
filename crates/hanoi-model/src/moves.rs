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

//! Moves and move legality.
//!
//! A `Move` lifts the top `lift` disks of the `source` peg and places them,
//! in the same order, on top of the `dest` peg. Pegs are 1-indexed. Whether a
//! move is legal depends on the state it is applied to, so validation lives in
//! `PuzzleState::apply_move`; this module only defines the value type and the
//! `IllegalMove` error reported on violations.

/// The number of pegs of every puzzle.
pub const NUM_PEGS: usize = 3;

/// A transfer of the top `lift` disks from `source` to `dest`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Move {
    source: usize,
    dest: usize,
    lift: usize,
}

impl Move {
    /// Creates a new move. Pegs are 1-indexed; nothing is validated until
    /// the move is applied to a state.
    #[inline]
    pub const fn new(source: usize, dest: usize, lift: usize) -> Self {
        Self { source, dest, lift }
    }

    /// Creates a move lifting exactly one disk.
    #[inline]
    pub const fn single(source: usize, dest: usize) -> Self {
        Self::new(source, dest, 1)
    }

    /// The 1-indexed source peg.
    #[inline]
    pub const fn source(&self) -> usize {
        self.source
    }

    /// The 1-indexed destination peg.
    #[inline]
    pub const fn dest(&self) -> usize {
        self.dest
    }

    /// The number of disks lifted together.
    #[inline]
    pub const fn lift(&self) -> usize {
        self.lift
    }

    /// Returns the move that undoes `self`: same lift, source and
    /// destination swapped.
    #[inline]
    pub const fn inverse(&self) -> Self {
        Self::new(self.dest, self.source, self.lift)
    }

    /// Returns the move as a `(source, dest, lift)` triple.
    #[inline]
    pub const fn as_tuple(&self) -> (usize, usize, usize) {
        (self.source, self.dest, self.lift)
    }
}

impl From<(usize, usize, usize)> for Move {
    fn from((source, dest, lift): (usize, usize, usize)) -> Self {
        Self::new(source, dest, lift)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{} x{}", self.source, self.dest, self.lift)
    }
}

/// The reasons a move can be rejected by `PuzzleState::apply_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// A peg index outside `1..=3`.
    InvalidPeg { peg: usize },
    /// Source and destination are the same peg.
    SamePeg { peg: usize },
    /// A move that lifts no disks.
    ZeroLift,
    /// The source peg holds fewer disks than requested.
    NotEnoughDisks {
        peg: usize,
        available: usize,
        requested: usize,
    },
    /// The largest lifted disk is bigger than the destination's top disk.
    LargerOnSmaller { disk: u16, onto: u16 },
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPeg { peg } => {
                write!(f, "Peg numbers must be between 1 and {}, got {}", NUM_PEGS, peg)
            }
            Self::SamePeg { peg } => {
                write!(f, "Source and target pegs cannot be the same (peg {})", peg)
            }
            Self::ZeroLift => write!(f, "A move must lift at least one disk"),
            Self::NotEnoughDisks {
                peg,
                available,
                requested,
            } => write!(
                f,
                "Not enough disks on peg {} to move: {} requested, {} available",
                peg, requested, available
            ),
            Self::LargerOnSmaller { disk, onto } => write!(
                f,
                "Cannot place disk {} on top of the smaller disk {}",
                disk, onto
            ),
        }
    }
}

impl std::error::Error for IllegalMove {}
