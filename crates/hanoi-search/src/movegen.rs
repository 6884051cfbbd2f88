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

//! # Move Generation
//!
//! Enumerates the legal moves of a state under a max-lift bound `L`. For
//! every ordered pair of distinct pegs `(source, dest)` and every lift
//! `k = 1..=min(L, height(source))`, the move is legal iff the bottom disk
//! of the lifted block (its largest) is smaller than the top disk of `dest`,
//! or `dest` is empty.
//!
//! The enumeration order is fixed: ascending source peg, then ascending
//! destination peg, then ascending lift. Depth-first solvers rely on this
//! for a deterministic branch order.

use hanoi_model::{Move, NUM_PEGS, PuzzleState};
use smallvec::SmallVec;

/// Inline buffer for the moves of a single state.
pub type MoveList = SmallVec<[Move; 16]>;

/// Returns all legal moves of `state` in enumeration order.
///
/// A `max_lift` of `0` is treated as `1`.
#[inline]
pub fn legal_moves(state: &PuzzleState, max_lift: usize) -> MoveList {
    let mut moves = MoveList::new();
    for_each_legal_move(state, max_lift, |mv| moves.push(mv));
    moves
}

/// Like `legal_moves`, but fills a caller-provided buffer.
/// The buffer is cleared first.
#[inline]
pub fn legal_moves_into(state: &PuzzleState, max_lift: usize, out: &mut Vec<Move>) {
    out.clear();
    for_each_legal_move(state, max_lift, |mv| out.push(mv));
}

fn for_each_legal_move<F>(state: &PuzzleState, max_lift: usize, mut emit: F)
where
    F: FnMut(Move),
{
    let max_lift = max_lift.max(1);

    for source in 1..=NUM_PEGS {
        let from = state.peg(source);
        let height = from.len();
        if height == 0 {
            continue;
        }
        let max_k = max_lift.min(height);

        for dest in 1..=NUM_PEGS {
            if dest == source {
                continue;
            }
            let dest_top = state.top(dest);
            for k in 1..=max_k {
                let bottom_of_block = from[height - k];
                // Larger lifts only add larger disks at the bottom.
                if dest_top.is_some_and(|top| bottom_of_block > top) {
                    break;
                }
                emit(Move::new(source, dest, k));
            }
        }
    }
}

/// Returns every `(move, successor)` pair of `state` in enumeration order.
///
/// A move rejected by `PuzzleState::apply_move` is skipped silently.
pub fn successors(
    state: &PuzzleState,
    max_lift: usize,
) -> impl Iterator<Item = (Move, PuzzleState)> + '_ {
    legal_moves(state, max_lift)
        .into_iter()
        .filter_map(move |mv| state.apply_move(mv).ok().map(|next| (mv, next)))
}
