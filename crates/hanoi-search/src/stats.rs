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

//! # Search Statistics
//!
//! Counters collected while a solver runs. A fresh record is created (or an
//! existing one reset) at the start of every solve; it is mutated only by the
//! solver that owns it and read by callers afterwards, including after a
//! failed solve.

use std::time::Duration;

/// Statistics collected during a single solve.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchStatistics {
    /// States taken off the frontier and examined.
    pub nodes_explored: u64,
    /// Successor states created during expansion.
    pub nodes_generated: u64,
    /// Peak size of the primary data structure (queue, stack, heap or path).
    pub max_frontier_size: u64,
    /// `true` when `max_frontier_size` is an upper bound rather than an
    /// observed peak.
    pub frontier_is_upper_bound: bool,
    /// Completed iterations of an iterative solver.
    pub iterations: u64,
    /// The depth or f-cost bound of every iteration, in order.
    pub cutoff_bounds: Vec<usize>,
    /// Length of the returned solution, if any.
    pub solution_length: Option<usize>,
    /// Wall-clock time spent in the solve.
    pub solve_duration: Duration,
}

impl SearchStatistics {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    #[inline]
    pub fn on_node_generated(&mut self) {
        self.nodes_generated = self.nodes_generated.saturating_add(1);
    }

    #[inline]
    pub fn on_nodes_generated(&mut self, count: u64) {
        self.nodes_generated = self.nodes_generated.saturating_add(count);
    }

    /// Records an observed frontier size, keeping the peak.
    #[inline]
    pub fn on_frontier_size(&mut self, size: usize) {
        self.max_frontier_size = self.max_frontier_size.max(size as u64);
    }

    /// Records the start of an iteration with the given cutoff bound.
    #[inline]
    pub fn on_iteration(&mut self, bound: usize) {
        self.iterations = self.iterations.saturating_add(1);
        self.cutoff_bounds.push(bound);
    }

    #[inline]
    pub fn set_solution_length(&mut self, length: usize) {
        self.solution_length = Some(length);
    }

    #[inline]
    pub fn set_solve_duration(&mut self, duration: Duration) {
        self.solve_duration = duration;
    }

    /// Clears every counter, keeping the bound buffer's allocation.
    pub fn reset(&mut self) {
        self.nodes_explored = 0;
        self.nodes_generated = 0;
        self.max_frontier_size = 0;
        self.frontier_is_upper_bound = false;
        self.iterations = 0;
        self.cutoff_bounds.clear();
        self.solution_length = None;
        self.solve_duration = Duration::ZERO;
    }

    /// Explored nodes as a percentage of generated nodes, or `0.0` when
    /// nothing was generated.
    pub fn efficiency(&self) -> f64 {
        if self.nodes_generated == 0 {
            return 0.0;
        }
        self.nodes_explored as f64 / self.nodes_generated as f64 * 100.0
    }

    /// Merges the counters of one worker. Peaks are summed, so the merged
    /// frontier size becomes an upper bound.
    pub fn absorb_worker(&mut self, worker: &WorkerStatistics) {
        self.nodes_explored = self.nodes_explored.saturating_add(worker.nodes_explored);
        self.nodes_generated = self.nodes_generated.saturating_add(worker.nodes_generated);
        self.max_frontier_size = self
            .max_frontier_size
            .saturating_add(worker.max_frontier_size);
        self.frontier_is_upper_bound = true;
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Nodes explored:       {}", self.nodes_explored)?;
        writeln!(f, "  Nodes generated:      {}", self.nodes_generated)?;
        if self.frontier_is_upper_bound {
            writeln!(f, "  Max frontier size:    <= {}", self.max_frontier_size)?;
        } else {
            writeln!(f, "  Max frontier size:    {}", self.max_frontier_size)?;
        }
        if self.iterations > 0 {
            writeln!(f, "  Iterations:           {}", self.iterations)?;
            writeln!(f, "  Cutoff bounds:        {:?}", self.cutoff_bounds)?;
        }
        match self.solution_length {
            Some(length) => writeln!(f, "  Solution length:      {}", length)?,
            None => writeln!(f, "  Solution length:      -")?,
        }
        writeln!(f, "  Efficiency:           {:.2}%", self.efficiency())?;
        writeln!(f, "  Total time:           {:.2?}", self.solve_duration)?;
        Ok(())
    }
}

/// Counters owned by a single worker of a concurrent solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkerStatistics {
    pub nodes_explored: u64,
    pub nodes_generated: u64,
    pub max_frontier_size: u64,
}

impl WorkerStatistics {
    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    #[inline]
    pub fn on_node_generated(&mut self) {
        self.nodes_generated = self.nodes_generated.saturating_add(1);
    }

    #[inline]
    pub fn on_frontier_size(&mut self, size: usize) {
        self.max_frontier_size = self.max_frontier_size.max(size as u64);
    }
}
