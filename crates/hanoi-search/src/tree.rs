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

//! # Search Tree Arena
//!
//! Frontier-based solvers store only node ids in their queues. Each node
//! records its state, the move that produced it and its parent, so the move
//! sequence of a node is rebuilt once by walking parent links instead of
//! copying a growing path into every frontier entry.

use hanoi_model::{Move, PuzzleState, Solution};

/// A strongly typed index into a `SearchTree`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline(always)]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

#[derive(Debug, Clone)]
struct Node {
    state: PuzzleState,
    parent: Option<NodeId>,
    via: Option<Move>,
    depth: usize,
}

/// An append-only arena of search nodes.
#[derive(Debug, Clone, Default)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    #[inline]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Adds a root node at depth `0`.
    #[inline]
    pub fn push_root(&mut self, state: PuzzleState) -> NodeId {
        self.push(Node {
            state,
            parent: None,
            via: None,
            depth: 0,
        })
    }

    /// Adds the node reached from `parent` by `mv`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not a node of this tree.
    #[inline]
    pub fn push_child(&mut self, parent: NodeId, mv: Move, state: PuzzleState) -> NodeId {
        let depth = self.depth(parent) + 1;
        self.push(Node {
            state,
            parent: Some(parent),
            via: Some(mv),
            depth,
        })
    }

    #[inline]
    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node {
        let index = id.get();
        debug_assert!(
            index < self.nodes.len(),
            "called `SearchTree::node` with node id out of bounds: the len is {} but the index is {}",
            self.nodes.len(),
            index
        );
        &self.nodes[index]
    }

    #[inline]
    pub fn state(&self, id: NodeId) -> &PuzzleState {
        &self.node(id).state
    }

    #[inline]
    pub fn depth(&self, id: NodeId) -> usize {
        self.node(id).depth
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Rebuilds the moves leading from the root to `id`.
    pub fn path_to(&self, id: NodeId) -> Solution {
        let mut moves = Vec::with_capacity(self.depth(id));
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node(node_id);
            if let Some(mv) = node.via {
                moves.push(mv);
            }
            current = node.parent;
        }
        moves.reverse();
        Solution::from(moves)
    }
}
