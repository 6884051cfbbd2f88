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

//! Puzzle instances: an initial state paired with a target state.
//!
//! Besides the programmatic constructors, an instance can be parsed from the
//! compact text format `PEG1:PEG2:PEG3>PEG1:PEG2:PEG3`, where each peg is a
//! comma separated list of disk sizes listed from **top to bottom**. Whitespace
//! is ignored anywhere, so `"1, 2 : 3 : > : : 1, 2, 3"` is accepted.

use crate::moves::NUM_PEGS;
use crate::state::{Disk, PuzzleState, StateError};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::str::FromStr;

/// Which half of an instance an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Initial,
    Target,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initial => write!(f, "initial"),
            Self::Target => write!(f, "target"),
        }
    }
}

/// Errors raised while building or parsing an instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceError {
    /// No `>` separates the initial and target states.
    MissingSeparator,
    /// More than one `>` was found.
    ExtraSeparator,
    /// A state does not have exactly three `:`-separated pegs.
    WrongPegCount { side: Side, found: usize },
    /// A disk token is not an integer in range.
    InvalidDisk {
        side: Side,
        peg: usize,
        token: String,
    },
    /// A disk size is zero or negative.
    NonPositiveDisk { side: Side, peg: usize, disk: i64 },
    /// A peg lists a larger disk above a smaller one.
    NotOrdered { side: Side, peg: usize },
    /// A disk appears more than once in one state.
    DuplicateDisk { side: Side, disk: Disk },
    /// The two states do not contain the same disks.
    DiskSetMismatch {
        missing_in_target: Vec<Disk>,
        extra_in_target: Vec<Disk>,
    },
    /// The instance contains no disks.
    NoDisks,
    /// The two states hold a different number of disks.
    DiskCountMismatch { initial: usize, target: usize },
    /// One of the states violates the puzzle invariants.
    InvalidState { side: Side, source: StateError },
}

impl std::fmt::Display for InstanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSeparator => write!(
                f,
                "Instance string must contain '>' to separate initial and target states"
            ),
            Self::ExtraSeparator => {
                write!(f, "Instance string must contain exactly one '>' separator")
            }
            Self::WrongPegCount { side, found } => write!(
                f,
                "The {} state must have exactly {} pegs separated by ':', found {}",
                side, NUM_PEGS, found
            ),
            Self::InvalidDisk { side, peg, token } => write!(
                f,
                "The {} state peg {} contains an invalid disk size '{}'",
                side, peg, token
            ),
            Self::NonPositiveDisk { side, peg, disk } => write!(
                f,
                "The {} state peg {} contains a non-positive disk size {}",
                side, peg, disk
            ),
            Self::NotOrdered { side, peg } => write!(
                f,
                "The {} state peg {} must list smaller disks before larger ones",
                side, peg
            ),
            Self::DuplicateDisk { side, disk } => write!(
                f,
                "Disk {} appears multiple times in the {} state",
                disk, side
            ),
            Self::DiskSetMismatch {
                missing_in_target,
                extra_in_target,
            } => {
                write!(f, "Initial and target states must contain the same disks")?;
                if !missing_in_target.is_empty() {
                    write!(f, ". Missing in target: {:?}", missing_in_target)?;
                }
                if !extra_in_target.is_empty() {
                    write!(f, ". Extra in target: {:?}", extra_in_target)?;
                }
                Ok(())
            }
            Self::NoDisks => write!(f, "Instance must contain at least one disk"),
            Self::DiskCountMismatch { initial, target } => write!(
                f,
                "Initial state has {} disks but target state has {}",
                initial, target
            ),
            Self::InvalidState { side, source } => {
                write!(f, "Invalid {} state: {}", side, source)
            }
        }
    }
}

impl std::error::Error for InstanceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidState { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A pair of states with the same disk count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    initial: PuzzleState,
    target: PuzzleState,
}

impl Instance {
    /// Pairs `initial` with `target`.
    pub fn new(initial: PuzzleState, target: PuzzleState) -> Result<Self, InstanceError> {
        if initial.num_disks() != target.num_disks() {
            return Err(InstanceError::DiskCountMismatch {
                initial: initial.num_disks(),
                target: target.num_disks(),
            });
        }
        Ok(Self { initial, target })
    }

    /// The textbook puzzle: all `num_disks` disks move from peg 1 to peg 3.
    pub fn classical(num_disks: usize) -> Result<Self, InstanceError> {
        let initial = PuzzleState::classical(num_disks, 1).map_err(|source| {
            InstanceError::InvalidState {
                side: Side::Initial,
                source,
            }
        })?;
        let target = PuzzleState::classical(num_disks, NUM_PEGS).map_err(|source| {
            InstanceError::InvalidState {
                side: Side::Target,
                source,
            }
        })?;
        Ok(Self { initial, target })
    }

    /// Draws two random states, redrawing the target until it differs from
    /// the initial state.
    pub fn random<R>(num_disks: usize, rng: &mut R) -> Result<Self, InstanceError>
    where
        R: Rng + ?Sized,
    {
        let initial = PuzzleState::random(num_disks, rng).map_err(|source| {
            InstanceError::InvalidState {
                side: Side::Initial,
                source,
            }
        })?;
        loop {
            let target = PuzzleState::random(num_disks, rng).map_err(|source| {
                InstanceError::InvalidState {
                    side: Side::Target,
                    source,
                }
            })?;
            if target != initial {
                return Ok(Self { initial, target });
            }
        }
    }

    #[inline]
    pub fn initial(&self) -> &PuzzleState {
        &self.initial
    }

    #[inline]
    pub fn target(&self) -> &PuzzleState {
        &self.target
    }

    #[inline]
    pub fn num_disks(&self) -> usize {
        self.initial.num_disks()
    }

    /// Splits the instance into `(initial, target)`.
    #[inline]
    pub fn into_parts(self) -> (PuzzleState, PuzzleState) {
        (self.initial, self.target)
    }

    /// Returns `true` if both states are single stacks on different pegs.
    pub fn is_classical(&self) -> bool {
        match (self.initial.classical_peg(), self.target.classical_peg()) {
            (Some(from), Some(to)) => from != to,
            _ => false,
        }
    }
}

impl FromStr for Instance {
    type Err = InstanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let mut halves = cleaned.split('>');
        let (initial_text, target_text) = match (halves.next(), halves.next(), halves.next()) {
            (Some(initial), Some(target), None) => (initial, target),
            (_, None, _) => return Err(InstanceError::MissingSeparator),
            _ => return Err(InstanceError::ExtraSeparator),
        };

        let initial_pegs = parse_state(initial_text, Side::Initial)?;
        let target_pegs = parse_state(target_text, Side::Target)?;
        check_disk_sets(&initial_pegs, &target_pegs)?;

        let initial = build_state(initial_pegs, Side::Initial)?;
        let target = build_state(target_pegs, Side::Target)?;
        Self::new(initial, target)
    }
}

impl std::fmt::Display for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_state(f, &self.initial)?;
        write!(f, ">")?;
        write_state(f, &self.target)
    }
}

fn write_state(f: &mut std::fmt::Formatter<'_>, state: &PuzzleState) -> std::fmt::Result {
    for (index, peg) in state.pegs().iter().enumerate() {
        if index > 0 {
            write!(f, ":")?;
        }
        for (position, disk) in peg.iter().rev().enumerate() {
            if position > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", disk)?;
        }
    }
    Ok(())
}

/// Parses one side into pegs listed top-to-bottom.
fn parse_state(text: &str, side: Side) -> Result<[Vec<Disk>; NUM_PEGS], InstanceError> {
    let pieces: Vec<&str> = text.split(':').collect();
    if pieces.len() != NUM_PEGS {
        return Err(InstanceError::WrongPegCount {
            side,
            found: pieces.len(),
        });
    }

    let mut pegs: [Vec<Disk>; NUM_PEGS] = Default::default();
    for (index, piece) in pieces.into_iter().enumerate() {
        let peg = index + 1;
        if piece.is_empty() {
            continue;
        }
        for token in piece.split(',') {
            let value: i64 = token.parse().map_err(|_| InstanceError::InvalidDisk {
                side,
                peg,
                token: token.to_string(),
            })?;
            if value <= 0 {
                return Err(InstanceError::NonPositiveDisk {
                    side,
                    peg,
                    disk: value,
                });
            }
            let disk = Disk::try_from(value).map_err(|_| InstanceError::InvalidDisk {
                side,
                peg,
                token: token.to_string(),
            })?;
            pegs[index].push(disk);
        }
        if pegs[index].windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(InstanceError::NotOrdered { side, peg });
        }
    }
    Ok(pegs)
}

fn collect_disks(
    pegs: &[Vec<Disk>; NUM_PEGS],
    side: Side,
) -> Result<FxHashSet<Disk>, InstanceError> {
    let mut disks = FxHashSet::default();
    for &disk in pegs.iter().flatten() {
        if !disks.insert(disk) {
            return Err(InstanceError::DuplicateDisk { side, disk });
        }
    }
    Ok(disks)
}

fn check_disk_sets(
    initial: &[Vec<Disk>; NUM_PEGS],
    target: &[Vec<Disk>; NUM_PEGS],
) -> Result<(), InstanceError> {
    let initial_disks = collect_disks(initial, Side::Initial)?;
    let target_disks = collect_disks(target, Side::Target)?;

    if initial_disks != target_disks {
        let mut missing_in_target: Vec<Disk> =
            initial_disks.difference(&target_disks).copied().collect();
        let mut extra_in_target: Vec<Disk> =
            target_disks.difference(&initial_disks).copied().collect();
        missing_in_target.sort_unstable();
        extra_in_target.sort_unstable();
        return Err(InstanceError::DiskSetMismatch {
            missing_in_target,
            extra_in_target,
        });
    }
    if initial_disks.is_empty() {
        return Err(InstanceError::NoDisks);
    }
    Ok(())
}

fn build_state(
    mut pegs: [Vec<Disk>; NUM_PEGS],
    side: Side,
) -> Result<PuzzleState, InstanceError> {
    for peg in &mut pegs {
        peg.reverse();
    }
    PuzzleState::new(pegs).map_err(|source| InstanceError::InvalidState { side, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_parse_lists_disks_top_to_bottom() {
        let instance: Instance = "1, 3 : 2 : > : 1, 2 : 3".parse().unwrap();
        assert_eq!(instance.initial().peg(1), &[3, 1]);
        assert_eq!(instance.initial().peg(2), &[2]);
        assert_eq!(instance.target().peg(2), &[2, 1]);
        assert_eq!(instance.target().peg(3), &[3]);
        assert_eq!(instance.num_disks(), 3);
    }

    #[test]
    fn test_parse_classical_forms() {
        let instance: Instance = "1,2,3::>::1,2,3".parse().unwrap();
        assert!(instance.is_classical());
        assert_eq!(instance, Instance::classical(3).unwrap());

        let swapped: Instance = "::1,2,3>1,2,3::".parse().unwrap();
        assert!(swapped.is_classical());

        let mixed: Instance = "1:2:3>3:2:1".parse().unwrap();
        assert!(!mixed.is_classical());
    }

    #[test]
    fn test_display_round_trips() {
        let text = "1,3,7,8,10:2,4,9:5,6,11>10::1,2,3,4,5,6,7,8,9,11";
        let instance: Instance = text.parse().unwrap();
        assert_eq!(instance.to_string(), text);
        assert_eq!(instance.to_string().parse::<Instance>(), Ok(instance));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "1,2,3::".parse::<Instance>(),
            Err(InstanceError::MissingSeparator)
        );
        assert_eq!(
            "1::>1::>1::".parse::<Instance>(),
            Err(InstanceError::ExtraSeparator)
        );
        assert_eq!(
            "1:2>1:2:".parse::<Instance>(),
            Err(InstanceError::WrongPegCount {
                side: Side::Initial,
                found: 2
            })
        );
        assert_eq!(
            "1,x::>::1".parse::<Instance>(),
            Err(InstanceError::InvalidDisk {
                side: Side::Initial,
                peg: 1,
                token: "x".to_string()
            })
        );
        assert_eq!(
            "1::>:-1:".parse::<Instance>(),
            Err(InstanceError::NonPositiveDisk {
                side: Side::Target,
                peg: 2,
                disk: -1
            })
        );
        assert_eq!(
            "2,1::>::1,2".parse::<Instance>(),
            Err(InstanceError::NotOrdered {
                side: Side::Initial,
                peg: 1
            })
        );
        assert_eq!(
            "1:1:>1::".parse::<Instance>(),
            Err(InstanceError::DuplicateDisk {
                side: Side::Initial,
                disk: 1
            })
        );
        assert_eq!(
            "1,2::>1,3::".parse::<Instance>(),
            Err(InstanceError::DiskSetMismatch {
                missing_in_target: vec![2],
                extra_in_target: vec![3],
            })
        );
        assert_eq!("::>::".parse::<Instance>(), Err(InstanceError::NoDisks));
    }

    #[test]
    fn test_parse_rejects_gaps_in_disk_sizes() {
        let err = "2:3:>3:2:".parse::<Instance>().unwrap_err();
        assert_eq!(
            err,
            InstanceError::InvalidState {
                side: Side::Initial,
                source: StateError::MissingDisk { disk: 1 }
            }
        );
    }

    #[test]
    fn test_new_rejects_disk_count_mismatch() {
        let initial = PuzzleState::classical(3, 1).unwrap();
        let target = PuzzleState::classical(4, 3).unwrap();
        assert_eq!(
            Instance::new(initial, target),
            Err(InstanceError::DiskCountMismatch {
                initial: 3,
                target: 4
            })
        );
    }

    #[test]
    fn test_classical_rejects_zero_disks() {
        assert!(matches!(
            Instance::classical(0),
            Err(InstanceError::InvalidState {
                side: Side::Initial,
                source: StateError::Empty
            })
        ));
    }

    #[test]
    fn test_random_instances_have_distinct_states() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for n in 1..=6 {
            let instance = Instance::random(n, &mut rng).unwrap();
            assert_ne!(instance.initial(), instance.target());
            assert_eq!(instance.num_disks(), n);
        }
    }
}
