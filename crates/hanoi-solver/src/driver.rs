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

//! # Driver
//!
//! Runs registry algorithms on one instance with shared settings, checks
//! every returned solution against the instance, and reports the outcome.
//!
//! Each run gets a fresh solver and a monitor stack made of:
//! - an `InterruptMonitor` on the driver's stop signal, so another thread can
//!   cancel the run through `Driver::interrupt`,
//! - a `TimeLimitMonitor` when a time limit is configured,
//! - a `LogMonitor` when the driver is verbose.
//!
//! The time limit is also passed in the `SolveConfig`, where solvers that
//! sleep between checks (the parallel bidirectional coordinator) read it on
//! every wake-up. A time limit therefore cancels the solver cooperatively; no
//! thread is left running after a report is returned.
//!
//! ## Usage
//!
//! ```rust
//! use hanoi_model::Instance;
//! use hanoi_solver::driver::DriverBuilder;
//! use hanoi_solver::registry::Algorithm;
//! use std::time::Duration;
//!
//! let instance = Instance::classical(3).unwrap();
//! let driver = DriverBuilder::new(instance)
//!     .with_time_limit(Duration::from_secs(5))
//!     .build();
//!
//! assert_eq!(driver.auto_select(), Algorithm::ClosedForm);
//! let report = driver.solve();
//! assert!(report.valid);
//! assert_eq!(report.solution().map(|s| s.len()), Some(7));
//! ```

use crate::registry::{Algorithm, UnknownAlgorithm};
use hanoi_model::{Instance, PuzzleState, Solution};
use hanoi_search::config::SolveConfig;
use hanoi_search::monitor::composite::CompositeMonitor;
use hanoi_search::monitor::interrupt::InterruptMonitor;
use hanoi_search::monitor::log::LogMonitor;
use hanoi_search::monitor::time_limit::TimeLimitMonitor;
use hanoi_search::result::{SolveError, SolverOutcome};
use hanoi_search::solver::PuzzleSolver;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Returns `true` if applying `solution` to `initial` legally reaches
/// `target`.
#[inline]
pub fn validate_solution(solution: &Solution, initial: &PuzzleState, target: &PuzzleState) -> bool {
    solution.is_valid_for(initial, target)
}

/// The result of running one algorithm through the driver.
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub algorithm: Algorithm,
    pub outcome: SolverOutcome,
    /// `true` if a solution was returned and it reaches the target.
    pub valid: bool,
    /// Explored over generated nodes, in percent.
    pub efficiency: f64,
    /// `true` if the run was cancelled by the time limit.
    pub timed_out: bool,
}

impl SolveReport {
    #[inline]
    pub fn solution(&self) -> Option<&Solution> {
        self.outcome.solution()
    }

    #[inline]
    pub fn error(&self) -> Option<&SolveError> {
        self.outcome.error()
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.valid
    }
}

impl std::fmt::Display for SolveReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {}",
            self.algorithm.code(),
            self.algorithm.full_name(),
            self.outcome.result
        )?;
        if self.timed_out {
            write!(f, " [timed out]")?;
        } else if self.outcome.has_solution() && !self.valid {
            write!(f, " [INVALID]")?;
        }
        write!(
            f,
            ", explored {}, generated {}, efficiency {:.2}%",
            self.outcome.statistics.nodes_explored,
            self.outcome.statistics.nodes_generated,
            self.efficiency
        )
    }
}

#[derive(Debug)]
pub struct Driver {
    instance: Instance,
    max_lift: usize,
    time_limit: Option<Duration>,
    verbose: bool,
    stop_signal: AtomicBool,
}

impl Driver {
    #[inline]
    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    #[inline]
    pub fn max_lift(&self) -> usize {
        self.max_lift
    }

    #[inline]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    #[inline]
    pub fn has_time_limit(&self) -> bool {
        self.time_limit.is_some()
    }

    #[inline]
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// The flag polled by every run. Setting it cancels the run in progress.
    #[inline]
    pub fn stop_signal(&self) -> &AtomicBool {
        &self.stop_signal
    }

    /// Cancels the run in progress, if any.
    #[inline]
    pub fn interrupt(&self) {
        self.stop_signal.store(true, Ordering::Relaxed);
    }

    /// Closed form for a classical instance moving one disk at a time,
    /// breadth-first search otherwise.
    pub fn auto_select(&self) -> Algorithm {
        if self.instance.is_classical() && self.max_lift == 1 {
            Algorithm::ClosedForm
        } else {
            Algorithm::Bfs
        }
    }

    /// Solves with the automatically selected algorithm.
    #[inline]
    pub fn solve(&self) -> SolveReport {
        self.solve_with(self.auto_select())
    }

    /// Solves with the algorithm named by a registry code.
    pub fn solve_named(&self, code: &str) -> Result<SolveReport, UnknownAlgorithm> {
        Ok(self.solve_with(code.parse()?))
    }

    /// Solves with `algorithm`, whether or not it is applicable; an
    /// inapplicable closed form fails with `NotApplicable`.
    pub fn solve_with(&self, algorithm: Algorithm) -> SolveReport {
        self.stop_signal.store(false, Ordering::Relaxed);

        let mut config = SolveConfig::new()
            .with_max_lift(self.max_lift)
            .with_verbose(self.verbose);

        let mut monitor = CompositeMonitor::with_capacity(3);
        monitor.add_monitor(InterruptMonitor::new(&self.stop_signal));
        if let Some(limit) = self.time_limit {
            config = config.with_time_limit(limit);
            monitor.add_monitor(TimeLimitMonitor::new(limit));
        }
        if self.verbose {
            println!("\n--- Using {} solver. ---", algorithm.full_name());
            monitor.add_monitor(LogMonitor::default());
        }

        let mut solver = algorithm.build(
            self.instance.initial().clone(),
            self.instance.target().clone(),
        );
        let outcome = solver.run(&config, &mut monitor);

        let valid = outcome.solution().is_some_and(|solution| {
            validate_solution(solution, self.instance.initial(), self.instance.target())
        });
        let timed_out = self.time_limit.is_some()
            && outcome.error().is_some_and(SolveError::is_aborted)
            && !self.stop_signal.load(Ordering::Relaxed);

        SolveReport {
            algorithm,
            efficiency: outcome.statistics.efficiency(),
            outcome,
            valid,
            timed_out,
        }
    }

    /// Runs every applicable algorithm in registry order.
    pub fn compare(&self) -> Vec<SolveReport> {
        self.applicable_algorithms()
            .into_iter()
            .map(|algorithm| self.solve_with(algorithm))
            .collect()
    }

    /// The registry algorithms that can run on this instance.
    pub fn applicable_algorithms(&self) -> Vec<Algorithm> {
        Algorithm::ALL
            .into_iter()
            .filter(|a| {
                a.is_applicable(
                    self.instance.initial(),
                    self.instance.target(),
                    self.max_lift,
                )
            })
            .collect()
    }
}

pub struct DriverBuilder {
    instance: Instance,
    max_lift: usize,
    time_limit: Option<Duration>,
    verbose: bool,
}

impl DriverBuilder {
    /// Single-disk moves, no time limit, quiet.
    #[inline]
    pub fn new(instance: Instance) -> Self {
        Self {
            instance,
            max_lift: 1,
            time_limit: None,
            verbose: false,
        }
    }

    /// Values below `1` are raised to `1`.
    #[inline]
    pub fn with_max_lift(mut self, max_lift: usize) -> Self {
        self.max_lift = max_lift.max(1);
        self
    }

    #[inline]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    #[inline]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[inline]
    pub fn build(self) -> Driver {
        Driver {
            instance: self.instance,
            max_lift: self.max_lift,
            time_limit: self.time_limit,
            verbose: self.verbose,
            stop_signal: AtomicBool::new(false),
        }
    }
}
