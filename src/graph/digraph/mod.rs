//! An insert-only directed graph with opaque node and edge payloads.
//!
//! Nodes receive dense ids `0, 1, 2, …` in insertion order. Each node keeps a
//! sorted, duplicate-free successor set and predecessor set, which makes every
//! query and every traversal iterate in ascending id order regardless of the
//! order edges were inserted in.
//!
//! ```rust
//! use vecgraph::{DiGraph, OrderedUniqueSet};
//!
//! let mut g = DiGraph::<&str, &str>::new();
//! let app = g.add_node("app");
//! let http = g.add_node("http");
//! let tls = g.add_node("tls");
//! g.add_edge(app, http, "^1.0")?;
//! g.add_edge(http, tls, ">=0.9")?;
//!
//! assert_eq!(g.successors(app)?, &OrderedUniqueSet::from([http]));
//! assert_eq!(g.edge(http, tls), Some(&">=0.9"));
//!
//! let mut leaves = Vec::new();
//! g.for_each_leaf(|id| leaves.push(id));
//! assert_eq!(leaves, vec![tls]);
//! # Ok::<(), vecgraph::GraphError>(())
//! ```

#[cfg(debug_assertions)]
mod invariants;
mod storage;
mod traversal;


use std::collections::BTreeMap;

use crate::collections::OrderedUniqueSet;
use crate::error::{GraphError, Result};
use crate::macros::trace_event;

use storage::{EdgeStore, NodeStore};

pub use traversal::{Color, Direction};

/// Dense node identifier, assigned at insertion and never reused.
pub type NodeId = usize;

/// Ordered map from `(from, to)` to edge payload, as returned by
/// [`DiGraph::edges`].
pub type EdgeMap<E> = BTreeMap<(NodeId, NodeId), E>;

/// A directed graph storing a payload `N` per node and `E` per edge.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_node` | \(O(1)\) amortized | Appends to node and adjacency vectors |
/// | `add_edge` | \(O(\log m + d)\) | Map insert plus two sorted-set inserts |
/// | `successors` / `predecessors` | \(O(1)\) | Direct index |
/// | `has_edge` | \(O(\log m)\) | Payload map lookup |
/// | `for_each_leaf` / `for_each_root` | \(O(n)\) | Linear scan |
/// | `depth_first_search` | \(O(n + m)\) | Explicit stack, no recursion |
#[derive(Clone)]
pub struct DiGraph<N, E = ()> {
    nodes: NodeStore<N>,
    edges: EdgeStore<E>,
}

impl<N, E> DiGraph<N, E> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty graph with room for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: NodeStore::with_capacity(nodes),
            edges: EdgeStore::with_capacity(nodes),
        }
    }

    /// Adds a node carrying `data` and returns its id.
    ///
    /// Ids are handed out sequentially starting from 0.
    pub fn add_node(&mut self, data: N) -> NodeId {
        let id = self.nodes.push(data);
        self.edges.add_slot();
        trace_event!(TRACE, node = id, "node added");
        id
    }

    /// Adds the edge `from -> to` carrying `data`.
    ///
    /// Returns `Ok(true)` when the edge is new. If the edge already exists the
    /// graph is left unchanged, the stored payload is kept and `Ok(false)` is
    /// returned; use [`edge_mut`](Self::edge_mut) to replace a payload.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] if either id is not a node of the graph.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, data: E) -> Result<bool> {
        self.check_node(from)?;
        self.check_node(to)?;
        let inserted = self.edges.insert(from, to, data);
        trace_event!(TRACE, from = from, to = to, inserted = inserted, "edge added");
        Ok(inserted)
    }

    /// Adds `from -> to` with a default payload.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] if either id is not a node of the graph.
    pub fn add_edge_default(&mut self, from: NodeId, to: NodeId) -> Result<bool>
    where
        E: Default,
    {
        self.add_edge(from, to, E::default())
    }

    /// Returns the number of nodes.
    #[inline]
    pub fn number_of_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of distinct edges.
    #[inline]
    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Returns `true` if `id` names a node of this graph.
    #[inline]
    pub fn has_node(&self, id: NodeId) -> bool {
        self.nodes.contains(id)
    }

    /// Returns `true` if the edge `from -> to` exists.
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.edges.contains(from, to)
    }

    /// Returns all node payloads in ascending id order.
    pub fn nodes(&self) -> &[N] {
        self.nodes.as_slice()
    }

    /// Iterates every node id in ascending order.
    pub fn node_ids(&self) -> core::ops::Range<NodeId> {
        0..self.nodes.len()
    }

    /// Returns the payload of node `id`.
    pub fn node(&self, id: NodeId) -> Option<&N> {
        self.nodes.get(id)
    }

    /// Returns the payload of node `id` mutably.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut N> {
        self.nodes.get_mut(id)
    }

    /// Returns every edge payload keyed by `(from, to)`.
    pub fn edges(&self) -> &EdgeMap<E> {
        self.edges.payloads()
    }

    /// Returns the payload of `from -> to`.
    pub fn edge(&self, from: NodeId, to: NodeId) -> Option<&E> {
        self.edges.payload(from, to)
    }

    /// Returns the payload of `from -> to` mutably.
    pub fn edge_mut(&mut self, from: NodeId, to: NodeId) -> Option<&mut E> {
        self.edges.payload_mut(from, to)
    }

    /// Returns the targets of the edges leaving `id`.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] if `id` is not a node of the graph.
    pub fn successors(&self, id: NodeId) -> Result<&OrderedUniqueSet<NodeId>> {
        self.check_node(id)?;
        Ok(self.edges.successors(id))
    }

    /// Returns the sources of the edges entering `id`.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] if `id` is not a node of the graph.
    pub fn predecessors(&self, id: NodeId) -> Result<&OrderedUniqueSet<NodeId>> {
        self.check_node(id)?;
        Ok(self.edges.predecessors(id))
    }

    /// Returns the number of edges leaving `id`.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] if `id` is not a node of the graph.
    pub fn out_degree(&self, id: NodeId) -> Result<usize> {
        self.successors(id).map(OrderedUniqueSet::len)
    }

    /// Returns the number of edges entering `id`.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] if `id` is not a node of the graph.
    pub fn in_degree(&self, id: NodeId) -> Result<usize> {
        self.predecessors(id).map(OrderedUniqueSet::len)
    }

    /// Calls `f` for every node without successors, in ascending id order.
    pub fn for_each_leaf<F: FnMut(NodeId)>(&self, mut f: F) {
        self.edges
            .successor_lists()
            .iter()
            .enumerate()
            .filter(|(_, succ)| succ.is_empty())
            .for_each(|(id, _)| f(id));
    }

    /// Calls `f` for every node without predecessors, in ascending id order.
    pub fn for_each_root<F: FnMut(NodeId)>(&self, mut f: F) {
        self.edges
            .predecessor_lists()
            .iter()
            .enumerate()
            .filter(|(_, pred)| pred.is_empty())
            .for_each(|(id, _)| f(id));
    }

    #[inline]
    fn check_node(&self, id: NodeId) -> Result<NodeId> {
        if self.nodes.contains(id) {
            Ok(id)
        } else {
            Err(GraphError::NodeOutOfRange {
                id,
                node_count: self.nodes.len(),
            })
        }
    }
}

impl<N, E> Default for DiGraph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: core::fmt::Debug, E: core::fmt::Debug> core::fmt::Debug for DiGraph<N, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DiGraph")
            .field("nodes", &self.nodes.as_slice())
            .field("edges", self.edges.payloads())
            .finish()
    }
}
