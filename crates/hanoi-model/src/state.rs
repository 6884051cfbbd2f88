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

//! Immutable puzzle states.
//!
//! A `PuzzleState` holds three pegs, each listing its disks bottom-to-top in
//! strictly decreasing order. Across all pegs the disks form exactly the set
//! `{1..N}`. States are never mutated: applying a move produces a new state.
//!
//! The structural hash is computed once, eagerly, when a state is built. A
//! state can therefore be published to other threads behind a shared
//! reference without any further synchronization, and hashing a state in a
//! visited set costs a single `u64` write.

use crate::moves::{IllegalMove, Move, NUM_PEGS};
use fixedbitset::FixedBitSet;
use rand::Rng;
use rustc_hash::FxHasher;
use smallvec::SmallVec;
use std::hash::{Hash, Hasher};

/// The size of a disk. Disk `1` is the smallest.
pub type Disk = u16;

/// The disks of a single peg, bottom-to-top.
pub type Peg = SmallVec<[Disk; 16]>;

/// Errors raised when a state would violate the puzzle invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The state holds no disks at all.
    Empty,
    /// A peg index outside `1..=3`.
    InvalidPeg { peg: usize },
    /// More disks than `Disk` can represent.
    TooManyDisks { requested: usize },
    /// A disk of size zero.
    ZeroDisk { peg: usize },
    /// The same disk appears more than once.
    DuplicateDisk { disk: Disk },
    /// A disk of `1..=N` is absent.
    MissingDisk { disk: Disk },
    /// A peg is not strictly decreasing bottom-to-top.
    NotDecreasing { peg: usize },
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "A puzzle state must contain at least one disk"),
            Self::InvalidPeg { peg } => {
                write!(f, "Peg number must be between 1 and {}, got {}", NUM_PEGS, peg)
            }
            Self::TooManyDisks { requested } => write!(
                f,
                "Cannot build a state with {} disks (at most {} are supported)",
                requested,
                Disk::MAX
            ),
            Self::ZeroDisk { peg } => write!(f, "Peg {} contains a disk of size 0", peg),
            Self::DuplicateDisk { disk } => write!(f, "Disk {} appears more than once", disk),
            Self::MissingDisk { disk } => write!(f, "Disk {} is missing", disk),
            Self::NotDecreasing { peg } => write!(
                f,
                "Peg {} has a larger disk on top of a smaller one",
                peg
            ),
        }
    }
}

impl std::error::Error for StateError {}

/// A single, immutable configuration of the three pegs.
#[derive(Clone)]
pub struct PuzzleState {
    pegs: [Peg; NUM_PEGS],
    num_disks: usize,
    hash: u64,
}

impl PuzzleState {
    /// Builds a state from three pegs listed bottom-to-top.
    ///
    /// Fails if the disks are not exactly `{1..N}` or any peg has a larger
    /// disk above a smaller one.
    pub fn new(pegs: [Vec<Disk>; NUM_PEGS]) -> Result<Self, StateError> {
        let pegs: [Peg; NUM_PEGS] = pegs.map(Peg::from_vec);
        let num_disks = Self::validate(&pegs)?;
        Ok(Self::from_parts(pegs, num_disks))
    }

    /// Builds the classical configuration: all `num_disks` disks stacked on
    /// `peg` (1-indexed), largest at the bottom.
    pub fn classical(num_disks: usize, peg: usize) -> Result<Self, StateError> {
        if !(1..=NUM_PEGS).contains(&peg) {
            return Err(StateError::InvalidPeg { peg });
        }
        Self::check_disk_count(num_disks)?;

        let mut pegs: [Peg; NUM_PEGS] = Default::default();
        pegs[peg - 1] = (1..=num_disks as Disk).rev().collect();
        Ok(Self::from_parts(pegs, num_disks))
    }

    /// Builds a uniformly random valid configuration of `num_disks` disks.
    ///
    /// Disks are placed from the largest to the smallest, each on a peg
    /// chosen uniformly among the pegs where it may legally rest.
    pub fn random<R>(num_disks: usize, rng: &mut R) -> Result<Self, StateError>
    where
        R: Rng + ?Sized,
    {
        Self::check_disk_count(num_disks)?;

        let mut pegs: [Peg; NUM_PEGS] = Default::default();
        let mut candidates: SmallVec<[usize; NUM_PEGS]> = SmallVec::new();
        for disk in (1..=num_disks as Disk).rev() {
            candidates.clear();
            candidates.extend(
                (0..NUM_PEGS).filter(|&i| pegs[i].last().is_none_or(|&top| disk < top)),
            );
            let chosen = candidates[rng.random_range(0..candidates.len())];
            pegs[chosen].push(disk);
        }
        Ok(Self::from_parts(pegs, num_disks))
    }

    /// Like `random`, drawing from the thread-local generator.
    pub fn random_init(num_disks: usize) -> Result<Self, StateError> {
        Self::random(num_disks, &mut rand::rng())
    }

    /// Applies `mv` and returns the resulting state. `self` is left untouched.
    pub fn apply_move(&self, mv: Move) -> Result<Self, IllegalMove> {
        let (source, dest, lift) = mv.as_tuple();
        for peg in [source, dest] {
            if !(1..=NUM_PEGS).contains(&peg) {
                return Err(IllegalMove::InvalidPeg { peg });
            }
        }
        if source == dest {
            return Err(IllegalMove::SamePeg { peg: source });
        }
        if lift == 0 {
            return Err(IllegalMove::ZeroLift);
        }

        let from = &self.pegs[source - 1];
        if from.len() < lift {
            return Err(IllegalMove::NotEnoughDisks {
                peg: source,
                available: from.len(),
                requested: lift,
            });
        }

        // The lifted block keeps its order, so its bottom disk is the
        // largest one and is the one that lands on the destination top.
        let split = from.len() - lift;
        let bottom_of_block = from[split];
        if let Some(&top) = self.pegs[dest - 1].last() {
            if bottom_of_block > top {
                return Err(IllegalMove::LargerOnSmaller {
                    disk: bottom_of_block,
                    onto: top,
                });
            }
        }

        let mut pegs = self.pegs.clone();
        pegs[dest - 1].extend_from_slice(&from[split..]);
        pegs[source - 1].truncate(split);
        Ok(Self::from_parts(pegs, self.num_disks))
    }

    /// Returns the 1-indexed peg holding all disks in order, if any.
    pub fn classical_peg(&self) -> Option<usize> {
        let mut occupied = self
            .pegs
            .iter()
            .enumerate()
            .filter(|(_, peg)| !peg.is_empty());
        let (index, peg) = occupied.next()?;
        if occupied.next().is_some() || peg.len() != self.num_disks {
            return None;
        }

        let in_order = peg
            .iter()
            .copied()
            .eq((1..=self.num_disks as Disk).rev());
        in_order.then_some(index + 1)
    }

    /// Returns `true` if all disks sit on a single peg.
    #[inline]
    pub fn is_classical(&self) -> bool {
        self.classical_peg().is_some()
    }

    /// Returns all pegs, bottom-to-top.
    #[inline]
    pub fn pegs(&self) -> &[Peg; NUM_PEGS] {
        &self.pegs
    }

    /// Returns the disks of the 1-indexed `peg`, bottom-to-top.
    ///
    /// # Panics
    ///
    /// Panics if `peg` is not in `1..=3`.
    #[inline]
    pub fn peg(&self, peg: usize) -> &[Disk] {
        assert!(
            (1..=NUM_PEGS).contains(&peg),
            "called `PuzzleState::peg` with peg out of bounds: the range is 1..={} but the peg is {}",
            NUM_PEGS,
            peg
        );
        &self.pegs[peg - 1]
    }

    /// Returns the top (smallest) disk of the 1-indexed `peg`.
    #[inline]
    pub fn top(&self, peg: usize) -> Option<Disk> {
        self.peg(peg).last().copied()
    }

    /// Returns the number of disks on the 1-indexed `peg`.
    #[inline]
    pub fn height(&self, peg: usize) -> usize {
        self.peg(peg).len()
    }

    /// Returns the total number of disks.
    #[inline]
    pub fn num_disks(&self) -> usize {
        self.num_disks
    }

    /// Returns the structural hash computed at construction.
    #[inline]
    pub fn precomputed_hash(&self) -> u64 {
        self.hash
    }

    #[inline]
    fn from_parts(pegs: [Peg; NUM_PEGS], num_disks: usize) -> Self {
        let mut hasher = FxHasher::default();
        pegs.hash(&mut hasher);
        Self {
            hash: hasher.finish(),
            pegs,
            num_disks,
        }
    }

    fn check_disk_count(num_disks: usize) -> Result<(), StateError> {
        if num_disks == 0 {
            return Err(StateError::Empty);
        }
        if num_disks > Disk::MAX as usize {
            return Err(StateError::TooManyDisks {
                requested: num_disks,
            });
        }
        Ok(())
    }

    fn validate(pegs: &[Peg; NUM_PEGS]) -> Result<usize, StateError> {
        let num_disks: usize = pegs.iter().map(|peg| peg.len()).sum();
        Self::check_disk_count(num_disks)?;

        let mut seen = FixedBitSet::with_capacity(num_disks + 1);
        for (index, peg) in pegs.iter().enumerate() {
            if peg.windows(2).any(|pair| pair[0] <= pair[1]) {
                return Err(StateError::NotDecreasing { peg: index + 1 });
            }
            for &disk in peg {
                if disk == 0 {
                    return Err(StateError::ZeroDisk { peg: index + 1 });
                }
                let slot = disk as usize;
                if slot <= num_disks && seen.put(slot) {
                    return Err(StateError::DuplicateDisk { disk });
                }
            }
        }

        match (1..=num_disks).find(|&disk| !seen.contains(disk)) {
            Some(disk) => Err(StateError::MissingDisk { disk: disk as Disk }),
            None => Ok(num_disks),
        }
    }
}

impl PartialEq for PuzzleState {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.pegs == other.pegs
    }
}

impl Eq for PuzzleState {}

impl Hash for PuzzleState {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl std::fmt::Debug for PuzzleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PuzzleState")
            .field("pegs", &self.pegs)
            .field("num_disks", &self.num_disks)
            .finish()
    }
}

impl std::fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (index, peg) in self.pegs.iter().enumerate() {
            if index > 0 {
                write!(f, " | ")?;
            }
            if peg.is_empty() {
                write!(f, "-")?;
            }
            for (position, disk) in peg.iter().enumerate() {
                if position > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", disk)?;
            }
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rustc_hash::FxHashSet;

    fn state(a: &[Disk], b: &[Disk], c: &[Disk]) -> PuzzleState {
        PuzzleState::new([a.to_vec(), b.to_vec(), c.to_vec()]).expect("valid test state")
    }

    #[test]
    fn test_classical_stacks_all_disks_in_order() {
        let s = PuzzleState::classical(4, 2).unwrap();
        assert_eq!(s.peg(1), &[] as &[Disk]);
        assert_eq!(s.peg(2), &[4, 3, 2, 1]);
        assert_eq!(s.peg(3), &[] as &[Disk]);
        assert_eq!(s.num_disks(), 4);
        assert_eq!(s.classical_peg(), Some(2));
    }

    #[test]
    fn test_classical_rejects_bad_arguments() {
        assert_eq!(PuzzleState::classical(0, 1), Err(StateError::Empty));
        assert_eq!(
            PuzzleState::classical(3, 4),
            Err(StateError::InvalidPeg { peg: 4 })
        );
        assert_eq!(
            PuzzleState::classical(3, 0),
            Err(StateError::InvalidPeg { peg: 0 })
        );
    }

    #[test]
    fn test_new_validates_invariants() {
        assert_eq!(
            PuzzleState::new([vec![], vec![], vec![]]),
            Err(StateError::Empty)
        );
        assert_eq!(
            PuzzleState::new([vec![1, 2], vec![], vec![]]),
            Err(StateError::NotDecreasing { peg: 1 })
        );
        assert_eq!(
            PuzzleState::new([vec![2], vec![2], vec![]]),
            Err(StateError::DuplicateDisk { disk: 2 })
        );
        assert_eq!(
            PuzzleState::new([vec![3], vec![1], vec![]]),
            Err(StateError::MissingDisk { disk: 2 })
        );
        assert_eq!(
            PuzzleState::new([vec![1, 0], vec![], vec![]]),
            Err(StateError::ZeroDisk { peg: 1 })
        );
        assert!(PuzzleState::new([vec![5, 2], vec![4, 3], vec![1]]).is_ok());
    }

    #[test]
    fn test_apply_move_produces_new_state_and_leaves_original() {
        let s = PuzzleState::classical(3, 1).unwrap();
        let next = s.apply_move(Move::single(1, 3)).unwrap();
        assert_eq!(next, state(&[3, 2], &[], &[1]));
        assert_eq!(s, state(&[3, 2, 1], &[], &[]));
    }

    #[test]
    fn test_apply_move_lifts_block_in_order() {
        let s = state(&[4, 3, 2, 1], &[], &[]);
        let next = s.apply_move(Move::new(1, 2, 3)).unwrap();
        assert_eq!(next, state(&[4], &[3, 2, 1], &[]));
    }

    #[test]
    fn test_apply_move_rejects_every_illegal_kind() {
        let s = state(&[3, 1], &[2], &[]);
        assert_eq!(
            s.apply_move(Move::new(0, 2, 1)),
            Err(IllegalMove::InvalidPeg { peg: 0 })
        );
        assert_eq!(
            s.apply_move(Move::new(1, 4, 1)),
            Err(IllegalMove::InvalidPeg { peg: 4 })
        );
        assert_eq!(
            s.apply_move(Move::new(2, 2, 1)),
            Err(IllegalMove::SamePeg { peg: 2 })
        );
        assert_eq!(s.apply_move(Move::new(1, 2, 0)), Err(IllegalMove::ZeroLift));
        assert_eq!(
            s.apply_move(Move::new(3, 1, 1)),
            Err(IllegalMove::NotEnoughDisks {
                peg: 3,
                available: 0,
                requested: 1
            })
        );
        assert_eq!(
            s.apply_move(Move::new(2, 1, 1)),
            Err(IllegalMove::LargerOnSmaller { disk: 2, onto: 1 })
        );
        // Lifting both disks of peg 1 puts disk 3 on disk 2.
        assert_eq!(
            s.apply_move(Move::new(1, 2, 2)),
            Err(IllegalMove::LargerOnSmaller { disk: 3, onto: 2 })
        );
    }

    #[test]
    fn test_equality_and_hash_are_structural() {
        let a = PuzzleState::classical(3, 1).unwrap();
        let b = state(&[3, 2, 1], &[], &[]);
        assert_eq!(a, b);
        assert_eq!(a.precomputed_hash(), b.precomputed_hash());

        let mut set = FxHashSet::default();
        set.insert(a.clone());
        assert!(set.contains(&b));
        assert!(!set.contains(&PuzzleState::classical(3, 2).unwrap()));
    }

    #[test]
    fn test_same_disks_on_different_pegs_differ() {
        let a = state(&[2, 1], &[], &[]);
        let b = state(&[], &[2, 1], &[]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_classical_peg_detection() {
        assert_eq!(state(&[], &[], &[2, 1]).classical_peg(), Some(3));
        assert_eq!(state(&[2], &[], &[1]).classical_peg(), None);
        assert!(!state(&[2], &[1], &[]).is_classical());
    }

    #[test]
    fn test_random_states_are_valid() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for n in 1..=8 {
            for _ in 0..20 {
                let s = PuzzleState::random(n, &mut rng).unwrap();
                assert_eq!(s.num_disks(), n);
                let rebuilt = PuzzleState::new(s.pegs().clone().map(|peg| peg.to_vec()));
                assert_eq!(rebuilt, Ok(s));
            }
        }
    }

    #[test]
    fn test_random_covers_more_than_one_configuration() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen = FxHashSet::default();
        for _ in 0..50 {
            seen.insert(PuzzleState::random(3, &mut rng).unwrap());
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_accessors() {
        let s = state(&[3, 1], &[2], &[]);
        assert_eq!(s.top(1), Some(1));
        assert_eq!(s.top(3), None);
        assert_eq!(s.height(1), 2);
        assert_eq!(s.height(2), 1);
    }

    #[test]
    #[should_panic(expected = "peg out of bounds")]
    fn test_peg_panics_out_of_range() {
        let s = PuzzleState::classical(2, 1).unwrap();
        let _ = s.peg(4);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", state(&[3, 1], &[], &[2])), "[3 1 | - | 2]");
    }

    #[test]
    fn test_state_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PuzzleState>();
    }
}
