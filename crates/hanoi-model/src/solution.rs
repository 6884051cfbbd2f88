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

//! Ordered move sequences.

use crate::moves::{IllegalMove, Move};
use crate::state::PuzzleState;

/// An ordered sequence of moves transforming one state into another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Solution {
    moves: Vec<Move>,
}

impl Solution {
    /// Creates an empty solution.
    #[inline]
    pub fn new() -> Self {
        Self { moves: Vec::new() }
    }

    /// Creates an empty solution with room for `capacity` moves.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            moves: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` if the solution contains no moves.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns the moves in application order.
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns an iterator over the moves in application order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Appends a move.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Consumes the solution and returns the underlying moves.
    #[inline]
    pub fn into_moves(self) -> Vec<Move> {
        self.moves
    }

    /// Applies every move in order to `state` and returns the final state.
    pub fn apply_to(&self, state: &PuzzleState) -> Result<PuzzleState, IllegalMove> {
        let mut current = state.clone();
        for &mv in &self.moves {
            current = current.apply_move(mv)?;
        }
        Ok(current)
    }

    /// Returns `true` if applying the solution to `initial` is legal at every
    /// step and ends exactly at `target`.
    pub fn is_valid_for(&self, initial: &PuzzleState, target: &PuzzleState) -> bool {
        self.apply_to(initial).is_ok_and(|reached| &reached == target)
    }

    /// Returns the sequence that undoes this one: moves in reverse order,
    /// each with source and destination swapped.
    pub fn inverse(&self) -> Self {
        self.moves.iter().rev().map(Move::inverse).collect()
    }

    /// Returns `self` followed by `other`.
    pub fn concat(&self, other: &Solution) -> Self {
        let mut moves = Vec::with_capacity(self.len() + other.len());
        moves.extend_from_slice(&self.moves);
        moves.extend_from_slice(&other.moves);
        Self { moves }
    }
}

impl From<Vec<Move>> for Solution {
    #[inline]
    fn from(moves: Vec<Move>) -> Self {
        Self { moves }
    }
}

impl FromIterator<Move> for Solution {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for Solution {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.moves.is_empty() {
            return writeln!(f, "No moves required.");
        }
        for (index, mv) in self.moves.iter().enumerate() {
            let noun = if mv.lift() == 1 { "disk" } else { "disks" };
            writeln!(
                f,
                "Move {}: {} {} from peg {} to peg {}",
                index + 1,
                mv.lift(),
                noun,
                mv.source(),
                mv.dest()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_disk_moves() -> Solution {
        [(1, 3), (1, 2), (3, 2), (1, 3), (2, 1), (2, 3), (1, 3)]
            .into_iter()
            .map(|(s, d)| Move::single(s, d))
            .collect()
    }

    #[test]
    fn test_apply_to_reaches_target() {
        let initial = PuzzleState::classical(3, 1).unwrap();
        let target = PuzzleState::classical(3, 3).unwrap();
        let solution = three_disk_moves();
        assert_eq!(solution.len(), 7);
        assert_eq!(solution.apply_to(&initial), Ok(target.clone()));
        assert!(solution.is_valid_for(&initial, &target));
    }

    #[test]
    fn test_inverse_undoes_solution() {
        let initial = PuzzleState::classical(3, 1).unwrap();
        let target = PuzzleState::classical(3, 3).unwrap();
        let inverse = three_disk_moves().inverse();
        assert_eq!(inverse.moves()[0], Move::single(3, 1));
        assert!(inverse.is_valid_for(&target, &initial));
    }

    #[test]
    fn test_invalid_sequences_are_rejected() {
        let initial = PuzzleState::classical(2, 1).unwrap();
        let target = PuzzleState::classical(2, 3).unwrap();

        let illegal = Solution::from(vec![Move::single(2, 3)]);
        assert!(illegal.apply_to(&initial).is_err());
        assert!(!illegal.is_valid_for(&initial, &target));

        let short = Solution::from(vec![Move::single(1, 2)]);
        assert!(!short.is_valid_for(&initial, &target));
    }

    #[test]
    fn test_empty_solution_is_valid_for_identical_states() {
        let state = PuzzleState::classical(4, 2).unwrap();
        let empty = Solution::new();
        assert!(empty.is_empty());
        assert!(empty.is_valid_for(&state, &state));
    }

    #[test]
    fn test_concat_keeps_order() {
        let a = Solution::from(vec![Move::single(1, 2)]);
        let b = Solution::from(vec![Move::single(1, 3), Move::single(2, 3)]);
        let joined = a.concat(&b);
        assert_eq!(
            joined.moves(),
            &[Move::single(1, 2), Move::single(1, 3), Move::single(2, 3)]
        );
        let initial = PuzzleState::classical(2, 1).unwrap();
        let target = PuzzleState::classical(2, 3).unwrap();
        assert!(joined.is_valid_for(&initial, &target));
    }

    #[test]
    fn test_display_numbers_moves() {
        let solution = Solution::from(vec![Move::single(1, 3), Move::new(2, 1, 2)]);
        assert_eq!(
            solution.to_string(),
            "Move 1: 1 disk from peg 1 to peg 3\nMove 2: 2 disks from peg 2 to peg 1\n"
        );
        assert_eq!(Solution::new().to_string(), "No moves required.\n");
    }
}
