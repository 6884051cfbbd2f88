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

//! Cooperative cancellation through a shared flag.
//!
//! The flag is owned by whoever may cancel the solve (the driver, another
//! thread, a signal handler). Solvers poll it once per expansion through
//! `checkpoint`, so a raised flag ends the search at the next state taken
//! off the frontier.

use crate::config::SolveConfig;
use crate::monitor::search_monitor::{BoundKind, SearchCommand, SearchMonitor};
use crate::stats::SearchStatistics;
use hanoi_model::PuzzleState;
use std::sync::atomic::{AtomicBool, Ordering};

/// Requests termination once the borrowed flag reads `true`.
#[derive(Debug, Clone, Copy)]
pub struct InterruptMonitor<'a> {
    stop_flag: &'a AtomicBool,
}

impl<'a> InterruptMonitor<'a> {
    #[inline(always)]
    pub fn new(stop_flag: &'a AtomicBool) -> Self {
        Self { stop_flag }
    }

    #[inline]
    pub fn is_raised(&self) -> bool {
        self.stop_flag.load(Ordering::Relaxed)
    }
}

impl SearchMonitor for InterruptMonitor<'_> {
    fn name(&self) -> &str {
        "InterruptMonitor"
    }

    fn on_enter_search(&mut self, _initial: &PuzzleState, _target: &PuzzleState, _config: &SolveConfig) {}

    fn on_exit_search(&mut self, _statistics: &SearchStatistics) {}

    fn on_iteration(&mut self, _kind: BoundKind, _bound: usize, _statistics: &SearchStatistics) {}

    fn on_step(&mut self, _statistics: &SearchStatistics) {}

    fn search_command(&self) -> SearchCommand {
        if self.is_raised() {
            return SearchCommand::Terminate("Interrupt signal received".to_string());
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::search_monitor::checkpoint;
    use crate::result::SolveError;

    #[test]
    fn test_clear_flag_continues() {
        let flag = AtomicBool::new(false);
        let mut monitor = InterruptMonitor::new(&flag);
        assert!(!monitor.is_raised());
        assert_eq!(monitor.search_command(), SearchCommand::Continue);
        assert!(checkpoint(&mut monitor, &SearchStatistics::default()).is_ok());
    }

    #[test]
    fn test_raised_flag_aborts_checkpoint() {
        let flag = AtomicBool::new(false);
        let mut monitor = InterruptMonitor::new(&flag);
        flag.store(true, Ordering::Relaxed);

        let err = checkpoint(&mut monitor, &SearchStatistics::default()).unwrap_err();
        assert_eq!(
            err,
            SolveError::Aborted {
                reason: "Interrupt signal received".to_string()
            }
        );
    }

    #[test]
    fn test_flag_is_shared_between_monitors() {
        let flag = AtomicBool::new(false);
        let first = InterruptMonitor::new(&flag);
        let second = first;
        flag.store(true, Ordering::Relaxed);
        assert!(first.is_raised());
        assert!(second.is_raised());
    }
}
