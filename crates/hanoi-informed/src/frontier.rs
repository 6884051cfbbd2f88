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

//! Min-priority frontier shared by the best-first solvers.
//!
//! Entries are ordered by a caller-chosen key and then by insertion order, so
//! two nodes with equal keys come out first-in, first-out and puzzle states
//! are never compared.

use hanoi_search::tree::NodeId;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(Debug, Clone)]
pub struct PriorityFrontier<K>
where
    K: Ord,
{
    heap: BinaryHeap<Reverse<(K, u64, NodeId)>>,
    sequence: u64,
}

impl<K> Default for PriorityFrontier<K>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> PriorityFrontier<K>
where
    K: Ord,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            sequence: 0,
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            sequence: 0,
        }
    }

    /// Adds `node` with priority `key`; smaller keys are popped first.
    #[inline]
    pub fn push(&mut self, key: K, node: NodeId) {
        self.heap.push(Reverse((key, self.sequence, node)));
        self.sequence = self.sequence.wrapping_add(1);
    }

    /// Removes the entry with the smallest key, oldest first among equals.
    #[inline]
    pub fn pop(&mut self) -> Option<(K, NodeId)> {
        self.heap.pop().map(|Reverse((key, _, node))| (key, node))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
