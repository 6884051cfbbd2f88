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

//! # Visited Map
//!
//! Maps every reached state to the move that first reached it and its depth.
//! Bidirectional searches keep one map per direction and need both "have we
//! seen this state" and "how did we get here", which a plain visited set
//! cannot answer.
//!
//! Moves are always stored as applied from the root of the map's own search.
//! The path of a state is rebuilt by undoing the stored moves one at a time
//! until the root is reached.

use hanoi_model::{Move, PuzzleState, Solution};
use rustc_hash::FxHashMap;

/// How a state was first reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrival {
    /// The move applied to the parent state, or `None` for the root.
    pub via: Option<Move>,
    /// The number of moves from the root.
    pub depth: usize,
}

/// A state-to-arrival map with path reconstruction.
#[derive(Debug, Clone, Default)]
pub struct VisitedMap {
    arrivals: FxHashMap<PuzzleState, Arrival>,
}

impl VisitedMap {
    #[inline]
    pub fn new() -> Self {
        Self {
            arrivals: FxHashMap::default(),
        }
    }

    /// Creates a map already holding `root` at depth `0`.
    #[inline]
    pub fn with_root(root: PuzzleState) -> Self {
        let mut map = Self::new();
        map.insert_if_absent(root, None, 0);
        map
    }

    /// Records `state` unless it is already known. Returns `true` if it was
    /// inserted.
    #[inline]
    pub fn insert_if_absent(&mut self, state: PuzzleState, via: Option<Move>, depth: usize) -> bool {
        match self.arrivals.entry(state) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(Arrival { via, depth });
                true
            }
        }
    }

    #[inline]
    pub fn contains(&self, state: &PuzzleState) -> bool {
        self.arrivals.contains_key(state)
    }

    #[inline]
    pub fn get(&self, state: &PuzzleState) -> Option<&Arrival> {
        self.arrivals.get(state)
    }

    #[inline]
    pub fn depth(&self, state: &PuzzleState) -> Option<usize> {
        self.arrivals.get(state).map(|arrival| arrival.depth)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.arrivals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&PuzzleState, &Arrival)> {
        self.arrivals.iter()
    }

    /// Rebuilds the moves leading from the root to `state`.
    ///
    /// Returns `None` if `state` is unknown or the stored moves do not undo
    /// cleanly.
    pub fn path_to(&self, state: &PuzzleState) -> Option<Solution> {
        let mut arrival = self.get(state)?;
        let mut moves = Vec::with_capacity(arrival.depth);
        let mut current = state.clone();

        while let Some(mv) = arrival.via {
            moves.push(mv);
            current = current.apply_move(mv.inverse()).ok()?;
            arrival = self.get(&current)?;
        }

        moves.reverse();
        Some(Solution::from(moves))
    }
}
