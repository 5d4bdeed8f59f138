//! Dense, id-indexed storage backing [`DiGraph`](super::DiGraph).
//!
//! Nodes are kept in a plain `Vec` whose index is the node id. Adjacency is a
//! pair of parallel vectors (successors and predecessors) indexed by the same
//! id, and edge payloads sit in an ordered map keyed by `(from, to)`.
//!
//! Neither store validates ids on its own; [`DiGraph`](super::DiGraph) checks
//! them once at the public boundary and the stores index directly afterwards.

use std::collections::btree_map::{BTreeMap, Entry};

use crate::collections::OrderedUniqueSet;
use crate::graph::{Direction, NodeId};

/// Node payloads in id order.
#[derive(Debug, Clone)]
pub(crate) struct NodeStore<N> {
    nodes: Vec<N>,
}

impl<N> NodeStore<N> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Appends a payload and returns its id.
    pub(crate) fn push(&mut self, data: N) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(data);
        id
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline(always)]
    pub(crate) fn contains(&self, id: NodeId) -> bool {
        id < self.nodes.len()
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&N> {
        self.nodes.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut N> {
        self.nodes.get_mut(id)
    }

    pub(crate) fn as_slice(&self) -> &[N] {
        &self.nodes
    }
}

/// Forward/reverse adjacency plus the edge payload map.
#[derive(Debug, Clone)]
pub(crate) struct EdgeStore<E> {
    successors: Vec<OrderedUniqueSet<NodeId>>,
    predecessors: Vec<OrderedUniqueSet<NodeId>>,
    payloads: BTreeMap<(NodeId, NodeId), E>,
}

impl<E> EdgeStore<E> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            successors: Vec::with_capacity(capacity),
            predecessors: Vec::with_capacity(capacity),
            payloads: BTreeMap::new(),
        }
    }

    /// Opens empty adjacency slots for a freshly pushed node.
    pub(crate) fn add_slot(&mut self) {
        self.successors.push(OrderedUniqueSet::new());
        self.predecessors.push(OrderedUniqueSet::new());
    }

    /// Records `from -> to` unless it already exists.
    ///
    /// The first payload stored for a pair is kept; a repeated insertion
    /// returns `false` and drops `data`. Both ids must have slots.
    pub(crate) fn insert(&mut self, from: NodeId, to: NodeId, data: E) -> bool {
        match self.payloads.entry((from, to)) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(data);
                self.successors[from].insert(to);
                self.predecessors[to].insert(from);
                true
            }
        }
    }

    #[inline(always)]
    pub(crate) fn successors(&self, id: NodeId) -> &OrderedUniqueSet<NodeId> {
        &self.successors[id]
    }

    #[inline(always)]
    pub(crate) fn predecessors(&self, id: NodeId) -> &OrderedUniqueSet<NodeId> {
        &self.predecessors[id]
    }

    /// Neighbors of `id` when walking in `direction`.
    #[inline(always)]
    pub(crate) fn neighbors(&self, id: NodeId, direction: Direction) -> &OrderedUniqueSet<NodeId> {
        match direction {
            Direction::Outgoing => self.successors(id),
            Direction::Incoming => self.predecessors(id),
        }
    }

    pub(crate) fn successor_lists(&self) -> &[OrderedUniqueSet<NodeId>] {
        &self.successors
    }

    pub(crate) fn predecessor_lists(&self) -> &[OrderedUniqueSet<NodeId>] {
        &self.predecessors
    }

    pub(crate) fn contains(&self, from: NodeId, to: NodeId) -> bool {
        self.payloads.contains_key(&(from, to))
    }

    pub(crate) fn payload(&self, from: NodeId, to: NodeId) -> Option<&E> {
        self.payloads.get(&(from, to))
    }

    pub(crate) fn payload_mut(&mut self, from: NodeId, to: NodeId) -> Option<&mut E> {
        self.payloads.get_mut(&(from, to))
    }

    pub(crate) fn payloads(&self) -> &BTreeMap<(NodeId, NodeId), E> {
        &self.payloads
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.payloads.len()
    }

    /// Number of adjacency slots; always equals the node count.
    #[cfg(debug_assertions)]
    pub(crate) fn slot_count(&self) -> usize {
        self.successors.len()
    }
}
