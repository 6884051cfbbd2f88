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

//! Per-solve configuration shared by every solver.

use std::time::Duration;

/// Options passed to `PuzzleSolver::solve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveConfig {
    max_lift: usize,
    verbose: bool,
    time_limit: Option<Duration>,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SolveConfig {
    /// Single-disk moves, quiet.
    #[inline]
    pub const fn new() -> Self {
        Self {
            max_lift: 1,
            verbose: false,
            time_limit: None,
        }
    }

    /// Sets how many disks a single move may lift. Values below `1` are
    /// raised to `1`.
    #[inline]
    pub const fn with_max_lift(mut self, max_lift: usize) -> Self {
        self.max_lift = if max_lift == 0 { 1 } else { max_lift };
        self
    }

    /// Enables per-iteration progress narration for iterative solvers.
    #[inline]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets the wall-clock budget of the solve.
    ///
    /// Solvers that wait instead of expanding states, such as the parallel
    /// bidirectional coordinator, check it on every wake-up. Everything else
    /// relies on a `TimeLimitMonitor` with the same budget.
    #[inline]
    pub const fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    #[inline]
    pub const fn max_lift(&self) -> usize {
        self.max_lift
    }

    #[inline]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    #[inline]
    pub const fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }
}

impl std::fmt::Display for SolveConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SolveConfig(max_lift: {}, verbose: {}",
            self.max_lift, self.verbose
        )?;
        match self.time_limit {
            Some(limit) => write!(f, ", time_limit: {:?})", limit),
            None => write!(f, ")"),
        }
    }
}
