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

//! # Log Monitor
//!
//! Prints a table of progress rows to standard output while a solver runs:
//! a header on entry, a row at most once per `log_interval` (the clock is
//! read only when the step counter hits `clock_check_mask`) and a footer on
//! exit. When the solve is configured as verbose, iterative solvers are also
//! narrated one line per iteration.

use crate::config::SolveConfig;
use crate::monitor::search_monitor::{BoundKind, SearchCommand, SearchMonitor};
use crate::stats::SearchStatistics;
use hanoi_model::PuzzleState;
use std::time::{Duration, Instant};

const RULE_WIDTH: usize = 72;

#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    steps: u64,
    verbose: bool,
}

impl LogMonitor {
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            steps: 0,
            verbose: false,
        }
    }

    /// Formats the narration line for one iteration.
    pub fn iteration_message(kind: BoundKind, bound: usize) -> String {
        match kind {
            BoundKind::Depth => format!("Trying depth limit {}...", bound),
            BoundKind::FCost => format!("IDA* searching with f-cost bound {}", bound),
        }
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<9} | {:<14} | {:<14} | {:<12} | {:<10}",
            "Elapsed", "Explored", "Generated", "Frontier", "Iteration"
        );
        println!("{}", "-".repeat(RULE_WIDTH));
    }

    #[inline(always)]
    fn log_line(&mut self, stats: &SearchStatistics) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();
        let elapsed_field = format!("{:.1}s", elapsed);
        let iteration = match stats.cutoff_bounds.last() {
            Some(bound) => format!("{} (<= {})", stats.iterations, bound),
            None => "-".to_string(),
        };

        println!(
            "{:<9} | {:<14} | {:<14} | {:<12} | {:<10}",
            elapsed_field,
            stats.nodes_explored,
            stats.nodes_generated,
            stats.max_frontier_size,
            iteration
        );

        self.last_log_time = now;
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl SearchMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, initial: &PuzzleState, target: &PuzzleState, config: &SolveConfig) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.steps = 0;
        self.verbose = config.verbose();
        println!("Solving {} -> {} (max lift {})", initial, target, config.max_lift());
        self.print_header();
    }

    fn on_exit_search(&mut self, statistics: &SearchStatistics) {
        self.log_line(statistics);
        println!("{}", "-".repeat(RULE_WIDTH));
        println!("Search finished.");
    }

    fn on_iteration(&mut self, kind: BoundKind, bound: usize, _statistics: &SearchStatistics) {
        if self.verbose {
            println!("{}", Self::iteration_message(kind, bound));
        }
    }

    fn on_step(&mut self, statistics: &SearchStatistics) {
        self.steps = self.steps.wrapping_add(1);
        if (self.steps & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(statistics);
        }
    }

    fn search_command(&self) -> SearchCommand {
        SearchCommand::Continue
    }
}
