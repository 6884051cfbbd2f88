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

//! # Parallel Bidirectional Breadth-First Search
//!
//! Runs the forward and backward searches on two worker threads while the
//! calling thread coordinates.
//!
//! ## Ownership
//!
//! Each direction owns one `VisitedMap` behind its own mutex and is its only
//! writer. A worker keeps its queue local and takes its lock only to insert a
//! newly reached state, which it also appends to the direction's list of
//! states the coordinator has not checked yet.
//!
//! ## Coordination
//!
//! On every poll the coordinator takes both unchecked lists and looks each
//! state up in the opposite map. It holds one lock at a time and only for as
//! long as the lookups of one batch take, so a poll costs time proportional
//! to the states discovered since the previous poll, not to the map sizes.
//! Between polls it sleeps for an interval that starts at `poll_interval` and
//! grows by 20% up to one second.
//!
//! Polling stops when the maps meet, when both workers finish, when the
//! caller's monitor requests termination, when the time limit of the
//! `SolveConfig` passes (`Aborted`) or when the solver's own timeout elapses
//! (`SearchExhausted`). The coordinator then raises the shared stop flag and
//! waits up to the grace period for the workers. Finally it scans both maps
//! once, holding both locks (forward first, the only place that does), and
//! picks the common state minimizing forward depth plus backward depth.
//!
//! Worker counters are merged only after the workers stopped, so the reported
//! frontier peak is the sum of both directions' peaks and is flagged as an
//! upper bound.

use crate::bidirectional::join_paths;
use hanoi_model::{Move, PuzzleState, Solution};
use hanoi_search::config::SolveConfig;
use hanoi_search::monitor::search_monitor::{SearchMonitor, checkpoint};
use hanoi_search::movegen::legal_moves_into;
use hanoi_search::result::SolveError;
use hanoi_search::solver::PuzzleSolver;
use hanoi_search::stats::{SearchStatistics, WorkerStatistics};
use hanoi_search::visited::VisitedMap;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_secs(5);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_micros(1);

const MAX_POLL_INTERVAL: Duration = Duration::from_secs(1);
const POLL_GROWTH: f64 = 1.2;
const JOIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

#[inline]
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[inline]
    fn index(self) -> usize {
        match self {
            Direction::Forward => 0,
            Direction::Backward => 1,
        }
    }
}

/// The visited states of one direction.
#[derive(Debug)]
struct DirectionMap {
    visited: VisitedMap,
    /// Inserted since the coordinator last looked.
    unchecked: Vec<PuzzleState>,
}

impl DirectionMap {
    fn new(root: PuzzleState) -> Self {
        Self {
            visited: VisitedMap::with_root(root),
            unchecked: Vec::new(),
        }
    }

    /// Records the first arrival at `state`; returns `false` if it was known.
    fn insert(&mut self, state: PuzzleState, via: Option<Move>, depth: usize) -> bool {
        if !self.visited.insert_if_absent(state.clone(), via, depth) {
            return false;
        }
        self.unchecked.push(state);
        true
    }
}

/// State shared between the coordinator and both workers.
struct SharedSearch {
    forward: Mutex<DirectionMap>,
    backward: Mutex<DirectionMap>,
    stop: AtomicBool,
    worker_statistics: Mutex<[Option<WorkerStatistics>; 2]>,
}

impl SharedSearch {
    fn new(initial: PuzzleState, target: PuzzleState) -> Self {
        Self {
            forward: Mutex::new(DirectionMap::new(initial)),
            backward: Mutex::new(DirectionMap::new(target)),
            stop: AtomicBool::new(false),
            worker_statistics: Mutex::new([None, None]),
        }
    }

    #[inline]
    fn visited(&self, direction: Direction) -> &Mutex<DirectionMap> {
        match direction {
            Direction::Forward => &self.forward,
            Direction::Backward => &self.backward,
        }
    }

    #[inline]
    fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Acquire)
    }

    /// Returns `true` if a state discovered since the previous call is
    /// already known to the opposite direction.
    ///
    /// A common state is reported by the first call after its later
    /// insertion, because that insertion is drained here and the earlier
    /// one is already in the map it is looked up in.
    fn has_new_meeting(&self) -> bool {
        let fresh_forward = std::mem::take(&mut lock(&self.forward).unchecked);
        let fresh_backward = std::mem::take(&mut lock(&self.backward).unchecked);
        self.any_visited(Direction::Backward, &fresh_forward)
            || self.any_visited(Direction::Forward, &fresh_backward)
    }

    fn any_visited(&self, direction: Direction, states: &[PuzzleState]) -> bool {
        if states.is_empty() {
            return false;
        }
        let map = lock(self.visited(direction));
        states.iter().any(|state| map.visited.contains(state))
    }

    /// Returns the common state with the smallest combined depth, if any.
    fn best_meeting_state(&self) -> Option<(PuzzleState, usize)> {
        let forward = lock(&self.forward);
        let backward = lock(&self.backward);
        let (small, large) = if forward.visited.len() <= backward.visited.len() {
            (&forward.visited, &backward.visited)
        } else {
            (&backward.visited, &forward.visited)
        };

        small
            .iter()
            .filter_map(|(state, arrival)| {
                large
                    .depth(state)
                    .map(|other| (state, arrival.depth + other))
            })
            .min_by_key(|&(_, total)| total)
            .map(|(state, total)| (state.clone(), total))
    }

    fn solution_through(&self, meeting: &PuzzleState) -> Result<Solution, SolveError> {
        let forward = lock(&self.forward);
        let backward = lock(&self.backward);
        join_paths(&forward.visited, &backward.visited, meeting)
    }

    /// Breadth-first expansion of one direction until the queue empties or
    /// the stop flag is raised.
    fn run_worker(&self, direction: Direction, root: PuzzleState, max_lift: usize) {
        let visited = self.visited(direction);
        let mut queue = VecDeque::from([(root, 0usize)]);
        let mut statistics = WorkerStatistics::default();
        let mut moves = Vec::new();
        statistics.on_frontier_size(queue.len());

        'search: while !self.should_stop() {
            let Some((state, depth)) = queue.pop_front() else {
                break;
            };
            statistics.on_node_explored();

            legal_moves_into(&state, max_lift, &mut moves);
            for &mv in &moves {
                if self.should_stop() {
                    break 'search;
                }
                let Ok(next) = state.apply_move(mv) else {
                    continue;
                };
                let inserted = lock(visited).insert(next.clone(), Some(mv), depth + 1);
                if inserted {
                    queue.push_back((next, depth + 1));
                    statistics.on_node_generated();
                }
            }
            statistics.on_frontier_size(queue.len());
        }

        lock(&self.worker_statistics)[direction.index()] = Some(statistics);
    }
}

/// Why the coordinator stopped polling.
#[derive(Debug)]
enum PollOutcome {
    Met,
    WorkersFinished,
    TimedOut,
    Aborted(SolveError),
}

#[derive(Debug, Clone)]
pub struct ParallelBidirectionalBfsSolver {
    initial: PuzzleState,
    target: PuzzleState,
    timeout: Duration,
    grace_period: Duration,
    poll_interval: Duration,
    statistics: SearchStatistics,
}

impl ParallelBidirectionalBfsSolver {
    pub fn new(initial: PuzzleState, target: PuzzleState) -> Self {
        Self {
            initial,
            target,
            timeout: DEFAULT_TIMEOUT,
            grace_period: DEFAULT_GRACE_PERIOD,
            poll_interval: DEFAULT_POLL_INTERVAL,
            statistics: SearchStatistics::default(),
        }
    }

    /// Sets how long the coordinator polls before giving up.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets how long the coordinator waits for workers after stopping them.
    pub fn with_grace_period(mut self, grace_period: Duration) -> Self {
        self.grace_period = grace_period;
        self
    }

    /// Sets the first polling interval.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    #[inline]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[inline]
    pub fn grace_period(&self) -> Duration {
        self.grace_period
    }

    #[inline]
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Waits for the searches to meet or for a reason to give up.
    ///
    /// `time_limit` is measured from `started`. The clock is read on every
    /// poll, and no sleep extends past the nearer of the time limit and the
    /// timeout.
    fn poll(
        &mut self,
        shared: &SharedSearch,
        workers_finished: impl Fn() -> bool,
        started: Instant,
        time_limit: Option<Duration>,
        monitor: &mut dyn SearchMonitor,
    ) -> PollOutcome {
        let deadline = time_limit.map_or(self.timeout, |limit| limit.min(self.timeout));
        let mut interval = self.poll_interval.min(MAX_POLL_INTERVAL);

        loop {
            if let Err(error) = checkpoint(monitor, &self.statistics) {
                return PollOutcome::Aborted(error);
            }
            if shared.has_new_meeting() {
                return PollOutcome::Met;
            }
            if workers_finished() {
                return PollOutcome::WorkersFinished;
            }

            let elapsed = started.elapsed();
            if time_limit.is_some_and(|limit| elapsed >= limit) {
                return PollOutcome::Aborted(SolveError::aborted("time limit reached"));
            }
            if elapsed >= self.timeout {
                return PollOutcome::TimedOut;
            }

            std::thread::sleep(interval.min(deadline.saturating_sub(elapsed)));
            interval = interval.mul_f64(POLL_GROWTH).min(MAX_POLL_INTERVAL);
        }
    }
}

impl PuzzleSolver for ParallelBidirectionalBfsSolver {
    fn name(&self) -> &str {
        "Parallel Bidirectional BFS"
    }

    fn initial(&self) -> &PuzzleState {
        &self.initial
    }

    fn target(&self) -> &PuzzleState {
        &self.target
    }

    fn guarantees_optimal(&self) -> bool {
        false
    }

    fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    fn statistics_mut(&mut self) -> &mut SearchStatistics {
        &mut self.statistics
    }

    fn solve_internal(
        &mut self,
        config: &SolveConfig,
        monitor: &mut dyn SearchMonitor,
    ) -> Result<Solution, SolveError> {
        let started = Instant::now();
        if self.initial == self.target {
            return Ok(Solution::new());
        }

        let max_lift = config.max_lift();
        let shared = SharedSearch::new(self.initial.clone(), self.target.clone());
        let (forward_root, backward_root) = (self.initial.clone(), self.target.clone());
        self.statistics.on_nodes_generated(2);

        let (outcome, meeting) = std::thread::scope(|scope| {
            let shared = &shared;
            let forward = scope.spawn(move || {
                shared.run_worker(Direction::Forward, forward_root, max_lift)
            });
            let backward = scope.spawn(move || {
                shared.run_worker(Direction::Backward, backward_root, max_lift)
            });

            let outcome = self.poll(
                shared,
                || forward.is_finished() && backward.is_finished(),
                started,
                config.time_limit(),
                monitor,
            );
            shared.stop.store(true, Ordering::Release);

            let deadline = Instant::now() + self.grace_period;
            while !(forward.is_finished() && backward.is_finished()) && Instant::now() < deadline {
                std::thread::sleep(JOIN_POLL_INTERVAL);
            }

            // Workers still running past the grace period stop at their next
            // move; the scope joins them after the best meeting state is chosen.
            let meeting = shared.best_meeting_state();
            (outcome, meeting)
        });

        {
            let workers = lock(&shared.worker_statistics);
            for worker in workers.iter().flatten() {
                self.statistics.absorb_worker(worker);
            }
        }
        self.statistics.frontier_is_upper_bound = true;

        match (outcome, meeting) {
            (PollOutcome::Aborted(error), _) => Err(error),
            (_, Some((state, _))) => shared.solution_through(&state),
            (PollOutcome::TimedOut, None) => Err(SolveError::exhausted(format!(
                "parallel bidirectional search timed out after {:?} without finding a solution",
                self.timeout
            ))),
            (_, None) => Err(SolveError::exhausted(
                "both searches ran out of states without meeting",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::BfsSolver;
    use hanoi_model::Instance;
    use hanoi_search::monitor::interrupt::InterruptMonitor;
    use hanoi_search::monitor::no_op::NoOperationMonitor;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn config(max_lift: usize) -> SolveConfig {
        SolveConfig::new().with_max_lift(max_lift)
    }

    #[test]
    fn test_defaults() {
        let state = PuzzleState::classical(2, 1).unwrap();
        let solver = ParallelBidirectionalBfsSolver::new(state.clone(), state);
        assert_eq!(solver.timeout(), Duration::from_secs(60));
        assert_eq!(solver.grace_period(), Duration::from_secs(5));
        assert_eq!(solver.poll_interval(), Duration::from_micros(1));
    }

    #[test]
    fn test_classical_instances_are_solved_validly() {
        for n in 1..=5 {
            let instance = Instance::classical(n).unwrap();
            let mut solver = ParallelBidirectionalBfsSolver::new(
                instance.initial().clone(),
                instance.target().clone(),
            );
            let solution = solver
                .solve(&config(1), &mut NoOperationMonitor::new())
                .unwrap();
            assert!(solution.is_valid_for(instance.initial(), instance.target()));
            assert!(solution.len() >= (1 << n) - 1);
            assert!(solver.statistics().frontier_is_upper_bound);
            assert!(solver.statistics().nodes_generated >= 2);
        }
    }

    #[test]
    fn test_random_instances_are_not_shorter_than_bfs() {
        let mut rng = ChaCha8Rng::seed_from_u64(1234);
        for _ in 0..5 {
            let instance = Instance::random(4, &mut rng).unwrap();
            let (initial, target) = (instance.initial().clone(), instance.target().clone());
            let parallel = ParallelBidirectionalBfsSolver::new(initial.clone(), target.clone())
                .solve(&config(2), &mut NoOperationMonitor::new())
                .unwrap();
            let bfs = BfsSolver::new(initial.clone(), target.clone())
                .solve(&config(2), &mut NoOperationMonitor::new())
                .unwrap();
            assert!(parallel.is_valid_for(&initial, &target));
            assert!(parallel.len() >= bfs.len());
        }
    }

    #[test]
    fn test_identical_states_need_no_moves() {
        let state = PuzzleState::classical(3, 2).unwrap();
        let solution = ParallelBidirectionalBfsSolver::new(state.clone(), state)
            .solve(&config(1), &mut NoOperationMonitor::new())
            .unwrap();
        assert!(solution.is_empty());
    }

    #[test]
    fn test_adjacent_states() {
        let initial = PuzzleState::classical(3, 1).unwrap();
        let target = initial.apply_move(Move::single(1, 2)).unwrap();
        let solution = ParallelBidirectionalBfsSolver::new(initial.clone(), target.clone())
            .solve(&config(1), &mut NoOperationMonitor::new())
            .unwrap();
        assert_eq!(solution.moves(), &[Move::single(1, 2)]);
    }

    #[test]
    fn test_interrupt_aborts_and_stops_workers() {
        let flag = AtomicBool::new(true);
        let instance = Instance::classical(6).unwrap();
        let mut solver =
            ParallelBidirectionalBfsSolver::new(instance.initial().clone(), instance.target().clone());
        let result = solver.solve(&config(1), &mut InterruptMonitor::new(&flag));
        assert!(matches!(result, Err(SolveError::Aborted { .. })));
    }

    #[test]
    fn test_best_meeting_state_minimizes_total_depth() {
        let initial = PuzzleState::classical(2, 1).unwrap();
        let target = PuzzleState::classical(2, 3).unwrap();
        let shared = SharedSearch::new(initial.clone(), target.clone());
        assert!(shared.best_meeting_state().is_none());

        // A shallow meeting state and a deeper one.
        let near = initial.apply_move(Move::single(1, 2)).unwrap();
        let far = near.apply_move(Move::single(1, 3)).unwrap();
        lock(&shared.forward).insert(near.clone(), Some(Move::single(1, 2)), 1);
        lock(&shared.forward).insert(far.clone(), Some(Move::single(1, 3)), 2);
        lock(&shared.backward).insert(far.clone(), Some(Move::single(2, 3)), 1);
        lock(&shared.backward).insert(near.clone(), Some(Move::single(3, 1)), 5);

        let (state, total) = shared.best_meeting_state().unwrap();
        assert_eq!(state, far);
        assert_eq!(total, 3);
    }

    #[test]
    fn test_new_meetings_are_reported_once() {
        let initial = PuzzleState::classical(2, 1).unwrap();
        let target = PuzzleState::classical(2, 3).unwrap();
        let shared = SharedSearch::new(initial.clone(), target.clone());
        assert!(!shared.has_new_meeting());

        let step = initial.apply_move(Move::single(1, 2)).unwrap();
        assert!(lock(&shared.forward).insert(step.clone(), Some(Move::single(1, 2)), 1));
        assert!(!shared.has_new_meeting());

        // Inserting a known state does not queue it again.
        assert!(!lock(&shared.forward).insert(step.clone(), Some(Move::single(1, 2)), 1));
        assert!(lock(&shared.forward).unchecked.is_empty());

        // The later insertion, on the backward side, reveals the meeting.
        assert!(lock(&shared.backward).insert(step.clone(), Some(Move::single(2, 1)), 4));
        assert!(shared.has_new_meeting());
        assert!(!shared.has_new_meeting());
        assert_eq!(shared.best_meeting_state(), Some((step, 5)));
    }

    #[test]
    fn test_reaching_the_opposite_root_is_a_meeting() {
        let initial = PuzzleState::classical(1, 1).unwrap();
        let target = PuzzleState::classical(1, 3).unwrap();
        let shared = SharedSearch::new(initial, target.clone());
        lock(&shared.forward).insert(target, Some(Move::single(1, 3)), 1);
        assert!(shared.has_new_meeting());
    }

    #[test]
    fn test_builders() {
        let state = PuzzleState::classical(2, 1).unwrap();
        let solver = ParallelBidirectionalBfsSolver::new(state.clone(), state)
            .with_timeout(Duration::from_secs(3))
            .with_grace_period(Duration::from_millis(20))
            .with_poll_interval(Duration::from_millis(2));
        assert_eq!(solver.timeout(), Duration::from_secs(3));
        assert_eq!(solver.grace_period(), Duration::from_millis(20));
        assert_eq!(solver.poll_interval(), Duration::from_millis(2));
    }

    #[test]
    fn test_own_timeout_reports_exhaustion_with_merged_statistics() {
        let instance = Instance::classical(16).unwrap();
        let mut solver =
            ParallelBidirectionalBfsSolver::new(instance.initial().clone(), instance.target().clone())
                .with_timeout(Duration::from_millis(1))
                .with_grace_period(Duration::from_millis(50))
                .with_poll_interval(Duration::from_micros(100));

        let started = Instant::now();
        let result = solver.solve(&config(1), &mut NoOperationMonitor::new());
        assert!(started.elapsed() < Duration::from_secs(30));
        assert!(matches!(result, Err(SolveError::SearchExhausted { .. })), "{:?}", result);

        // Both workers reported: each starts with a frontier of one.
        let stats = solver.statistics();
        assert!(stats.frontier_is_upper_bound);
        assert!(stats.max_frontier_size >= 2);
        assert!(stats.nodes_generated >= 2);
        assert_eq!(stats.solution_length, None);
    }

    #[test]
    fn test_config_time_limit_aborts_promptly() {
        let instance = Instance::classical(16).unwrap();
        let mut solver =
            ParallelBidirectionalBfsSolver::new(instance.initial().clone(), instance.target().clone())
                .with_grace_period(Duration::from_millis(50));
        let limited = config(1).with_time_limit(Duration::from_millis(20));

        let started = Instant::now();
        let result = solver.solve(&limited, &mut NoOperationMonitor::new());
        assert!(started.elapsed() < Duration::from_secs(30));
        match result {
            Err(SolveError::Aborted { reason }) => assert!(reason.contains("time limit"), "{reason}"),
            other => panic!("expected Aborted, got {:?}", other),
        }
        assert!(solver.statistics().frontier_is_upper_bound);
    }
}
