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
use crate::monitor::search_monitor::{BoundKind, SearchCommand, SearchMonitor};
use crate::stats::SearchStatistics;
use hanoi_model::PuzzleState;

/// A composite monitor that aggregates multiple monitors and forwards events to all of them.
/// The first monitor that requests termination wins.
pub struct CompositeMonitor<'a> {
    monitors: Vec<Box<dyn SearchMonitor + 'a>>,
}

impl<'a> std::fmt::Debug for CompositeMonitor<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeMonitor")
            .field("monitors", &self.names().join(", "))
            .finish()
    }
}

impl<'a> std::fmt::Display for CompositeMonitor<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CompositeMonitor([{}])", self.names().join(", "))
    }
}

impl<'a> Default for CompositeMonitor<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CompositeMonitor<'a> {
    /// Creates a new empty `CompositeMonitor`.
    #[inline]
    pub fn new() -> CompositeMonitor<'a> {
        CompositeMonitor {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeMonitor` with the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> CompositeMonitor<'a> {
        CompositeMonitor {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SearchMonitor + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a new boxed monitor to the composite monitor.
    #[inline]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn SearchMonitor + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns the number of monitors in the composite monitor.
    #[inline]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite monitor contains no monitors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    fn names(&self) -> Vec<&str> {
        self.monitors.iter().map(|m| m.name()).collect()
    }
}

impl<'a> FromIterator<Box<dyn SearchMonitor + 'a>> for CompositeMonitor<'a> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn SearchMonitor + 'a>>,
    {
        CompositeMonitor {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a> SearchMonitor for CompositeMonitor<'a> {
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_search(&mut self, initial: &PuzzleState, target: &PuzzleState, config: &SolveConfig) {
        for monitor in &mut self.monitors {
            monitor.on_enter_search(initial, target, config);
        }
    }

    fn on_exit_search(&mut self, statistics: &SearchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_search(statistics);
        }
    }

    fn on_iteration(&mut self, kind: BoundKind, bound: usize, statistics: &SearchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_iteration(kind, bound, statistics);
        }
    }

    fn on_step(&mut self, statistics: &SearchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_step(statistics);
        }
    }

    fn search_command(&self) -> SearchCommand {
        for monitor in &self.monitors {
            if let SearchCommand::Terminate(reason) = monitor.search_command() {
                return SearchCommand::Terminate(reason);
            }
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::interrupt::InterruptMonitor;
    use crate::monitor::no_op::NoOperationMonitor;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct Counting {
        label: &'static str,
        steps: Rc<Cell<u32>>,
        iterations: Rc<Cell<u32>>,
        terminate: bool,
    }

    impl SearchMonitor for Counting {
        fn name(&self) -> &str {
            self.label
        }
        fn on_enter_search(&mut self, _: &PuzzleState, _: &PuzzleState, _: &SolveConfig) {}
        fn on_exit_search(&mut self, _: &SearchStatistics) {}
        fn on_iteration(&mut self, _: BoundKind, _: usize, _: &SearchStatistics) {
            self.iterations.set(self.iterations.get() + 1);
        }
        fn on_step(&mut self, _: &SearchStatistics) {
            self.steps.set(self.steps.get() + 1);
        }
        fn search_command(&self) -> SearchCommand {
            if self.terminate {
                SearchCommand::Terminate(format!("{} says stop", self.label))
            } else {
                SearchCommand::Continue
            }
        }
    }

    fn counting(label: &'static str, terminate: bool) -> (Counting, Rc<Cell<u32>>, Rc<Cell<u32>>) {
        let steps = Rc::new(Cell::new(0));
        let iterations = Rc::new(Cell::new(0));
        (
            Counting {
                label,
                steps: steps.clone(),
                iterations: iterations.clone(),
                terminate,
            },
            steps,
            iterations,
        )
    }

    #[test]
    fn test_empty_composite_continues() {
        let composite = CompositeMonitor::new();
        assert!(composite.is_empty());
        assert_eq!(composite.search_command(), SearchCommand::Continue);
    }

    #[test]
    fn test_events_are_forwarded_to_all_monitors() {
        let (a, a_steps, a_iters) = counting("a", false);
        let (b, b_steps, b_iters) = counting("b", false);
        let mut composite = CompositeMonitor::with_capacity(2);
        composite.add_monitor(a);
        composite.add_monitor_boxed(Box::new(b));

        let stats = SearchStatistics::default();
        composite.on_step(&stats);
        composite.on_step(&stats);
        composite.on_iteration(BoundKind::Depth, 3, &stats);

        assert_eq!(composite.len(), 2);
        assert_eq!((a_steps.get(), b_steps.get()), (2, 2));
        assert_eq!((a_iters.get(), b_iters.get()), (1, 1));
    }

    #[test]
    fn test_first_terminate_wins() {
        let (a, _, _) = counting("first", true);
        let (b, _, _) = counting("second", true);
        let composite: CompositeMonitor = vec![
            Box::new(NoOperationMonitor::new()) as Box<dyn SearchMonitor>,
            Box::new(a),
            Box::new(b),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            composite.search_command(),
            SearchCommand::Terminate("first says stop".to_string())
        );
    }

    #[test]
    fn test_interrupt_inside_composite() {
        let flag = AtomicBool::new(false);
        let mut composite = CompositeMonitor::new();
        composite.add_monitor(NoOperationMonitor::new());
        composite.add_monitor(InterruptMonitor::new(&flag));
        assert_eq!(composite.search_command(), SearchCommand::Continue);
        flag.store(true, Ordering::Relaxed);
        assert!(matches!(
            composite.search_command(),
            SearchCommand::Terminate(_)
        ));
    }

    #[test]
    fn test_display_lists_names() {
        let mut composite = CompositeMonitor::new();
        composite.add_monitor(NoOperationMonitor::new());
        assert_eq!(
            composite.to_string(),
            "CompositeMonitor([NoOperationMonitor])"
        );
    }
}
