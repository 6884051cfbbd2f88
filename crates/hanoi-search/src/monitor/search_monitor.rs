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

use crate::config::SolveConfig;
use crate::result::SolveError;
use crate::stats::SearchStatistics;
use hanoi_model::PuzzleState;

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SearchCommand {
    #[default]
    Continue,
    Terminate(String),
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// What the cutoff of an iterative solver bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKind {
    /// The number of moves from the root.
    Depth,
    /// Moves so far plus the heuristic estimate.
    FCost,
}

impl std::fmt::Display for BoundKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundKind::Depth => write!(f, "depth"),
            BoundKind::FCost => write!(f, "f-cost"),
        }
    }
}

pub trait SearchMonitor {
    fn name(&self) -> &str;
    fn on_enter_search(&mut self, initial: &PuzzleState, target: &PuzzleState, config: &SolveConfig);
    fn on_exit_search(&mut self, statistics: &SearchStatistics);
    fn on_iteration(&mut self, kind: BoundKind, bound: usize, statistics: &SearchStatistics);
    fn on_step(&mut self, statistics: &SearchStatistics);
    fn search_command(&self) -> SearchCommand;
}

impl std::fmt::Debug for dyn SearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl std::fmt::Display for dyn SearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

/// Reports one expansion step to `monitor` and turns a termination request
/// into `SolveError::Aborted`.
#[inline]
pub fn checkpoint(
    monitor: &mut dyn SearchMonitor,
    statistics: &SearchStatistics,
) -> Result<(), SolveError> {
    monitor.on_step(statistics);
    match monitor.search_command() {
        SearchCommand::Continue => Ok(()),
        SearchCommand::Terminate(reason) => Err(SolveError::Aborted { reason }),
    }
}
