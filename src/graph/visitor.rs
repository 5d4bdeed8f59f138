//! Depth-first search visitors.
//!
//! A [`Visitor`] receives a callback for every node and edge event the
//! search produces. Every hook has an empty default body, so an implementor
//! only writes the hooks it cares about:
//!
//! ```rust
//! use vecgraph::{DiGraph, NodeId, Visitor};
//!
//! #[derive(Default)]
//! struct PostOrder(Vec<NodeId>);
//!
//! impl<N, E> Visitor<N, E> for PostOrder {
//!     fn finish_node(&mut self, node: NodeId, _graph: &DiGraph<N, E>) {
//!         self.0.push(node);
//!     }
//! }
//!
//! let mut g = DiGraph::<&str>::new();
//! let app = g.add_node("app");
//! let lib = g.add_node("lib");
//! g.add_edge(app, lib, ()).unwrap();
//!
//! let mut order = PostOrder::default();
//! g.depth_first_search(&mut order);
//! assert_eq!(order.0, vec![lib, app]);
//! ```
//!
//! Ids handed to edge hooks follow the walking direction: `from` is the node
//! being explored and `to` the neighbor reached from it.

use crate::graph::{DiGraph, NodeId};

/// Callbacks fired by [`DiGraph::depth_first_search`] and friends.
///
/// Hooks must not (and through the shared borrow, cannot) mutate the graph.
pub trait Visitor<N, E> {
    /// `node` turned from white to gray.
    fn start_node(&mut self, _node: NodeId, _graph: &DiGraph<N, E>) {}

    /// `node` turned from gray to black; all its edges are explored.
    fn finish_node(&mut self, _node: NodeId, _graph: &DiGraph<N, E>) {}

    /// Exploration of `from -> to` begins. Fired for every edge.
    fn start_edge(&mut self, _from: NodeId, _to: NodeId, _graph: &DiGraph<N, E>) {}

    /// `to` was white and is discovered through this edge.
    fn tree_edge(&mut self, _from: NodeId, _to: NodeId, _graph: &DiGraph<N, E>) {}

    /// `to` is gray, i.e. an ancestor of `from` on the active path.
    ///
    /// Every call witnesses a cycle closing at `to`.
    fn back_edge(&mut self, _from: NodeId, _to: NodeId, _graph: &DiGraph<N, E>) {}

    /// `to` is black: fully explored and not an ancestor of `from`.
    fn forward_or_cross_edge(&mut self, _from: NodeId, _to: NodeId, _graph: &DiGraph<N, E>) {}

    /// Exploration of `from -> to` is over. For tree edges this fires after
    /// `to` has finished.
    fn finish_edge(&mut self, _from: NodeId, _to: NodeId, _graph: &DiGraph<N, E>) {}
}

impl<N, E, V: Visitor<N, E> + ?Sized> Visitor<N, E> for &mut V {
    fn start_node(&mut self, node: NodeId, graph: &DiGraph<N, E>) {
        (**self).start_node(node, graph);
    }

    fn finish_node(&mut self, node: NodeId, graph: &DiGraph<N, E>) {
        (**self).finish_node(node, graph);
    }

    fn start_edge(&mut self, from: NodeId, to: NodeId, graph: &DiGraph<N, E>) {
        (**self).start_edge(from, to, graph);
    }

    fn tree_edge(&mut self, from: NodeId, to: NodeId, graph: &DiGraph<N, E>) {
        (**self).tree_edge(from, to, graph);
    }

    fn back_edge(&mut self, from: NodeId, to: NodeId, graph: &DiGraph<N, E>) {
        (**self).back_edge(from, to, graph);
    }

    fn forward_or_cross_edge(&mut self, from: NodeId, to: NodeId, graph: &DiGraph<N, E>) {
        (**self).forward_or_cross_edge(from, to, graph);
    }

    fn finish_edge(&mut self, from: NodeId, to: NodeId, graph: &DiGraph<N, E>) {
        (**self).finish_edge(from, to, graph);
    }
}

/// A visitor that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyVisitor;

impl<N, E> Visitor<N, E> for EmptyVisitor {}

/// Classification of an explored edge by the color of its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Target was white.
    Tree,
    /// Target was gray.
    Back,
    /// Target was black.
    ForwardOrCross,
}

/// A single search event, as delivered to an [`EventVisitor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DfsEvent {
    /// See [`Visitor::start_node`].
    StartNode(NodeId),
    /// See [`Visitor::finish_node`].
    FinishNode(NodeId),
    /// See [`Visitor::start_edge`].
    StartEdge(NodeId, NodeId),
    /// One of the three classification hooks.
    Edge(NodeId, NodeId, EdgeKind),
    /// See [`Visitor::finish_edge`].
    FinishEdge(NodeId, NodeId),
}

/// Adapts a closure over [`DfsEvent`] into a [`Visitor`].
///
/// ```rust
/// use vecgraph::{DfsEvent, DiGraph, EdgeKind, EventVisitor};
///
/// let mut g = DiGraph::<()>::new();
/// let a = g.add_node(());
/// let b = g.add_node(());
/// g.add_edge(a, b, ()).unwrap();
/// g.add_edge(b, a, ()).unwrap();
///
/// let mut back = Vec::new();
/// g.depth_first_search(&mut EventVisitor::new(|event| {
///     if let DfsEvent::Edge(from, to, EdgeKind::Back) = event {
///         back.push((from, to));
///     }
/// }));
/// assert_eq!(back, vec![(b, a)]);
/// ```
pub struct EventVisitor<F> {
    on_event: F,
}

impl<F: FnMut(DfsEvent)> EventVisitor<F> {
    /// Wraps `on_event`.
    pub fn new(on_event: F) -> Self {
        Self { on_event }
    }

    /// Returns the wrapped closure.
    pub fn into_inner(self) -> F {
        self.on_event
    }
}

impl<N, E, F: FnMut(DfsEvent)> Visitor<N, E> for EventVisitor<F> {
    fn start_node(&mut self, node: NodeId, _graph: &DiGraph<N, E>) {
        (self.on_event)(DfsEvent::StartNode(node));
    }

    fn finish_node(&mut self, node: NodeId, _graph: &DiGraph<N, E>) {
        (self.on_event)(DfsEvent::FinishNode(node));
    }

    fn start_edge(&mut self, from: NodeId, to: NodeId, _graph: &DiGraph<N, E>) {
        (self.on_event)(DfsEvent::StartEdge(from, to));
    }

    fn tree_edge(&mut self, from: NodeId, to: NodeId, _graph: &DiGraph<N, E>) {
        (self.on_event)(DfsEvent::Edge(from, to, EdgeKind::Tree));
    }

    fn back_edge(&mut self, from: NodeId, to: NodeId, _graph: &DiGraph<N, E>) {
        (self.on_event)(DfsEvent::Edge(from, to, EdgeKind::Back));
    }

    fn forward_or_cross_edge(&mut self, from: NodeId, to: NodeId, _graph: &DiGraph<N, E>) {
        (self.on_event)(DfsEvent::Edge(from, to, EdgeKind::ForwardOrCross));
    }

    fn finish_edge(&mut self, from: NodeId, to: NodeId, _graph: &DiGraph<N, E>) {
        (self.on_event)(DfsEvent::FinishEdge(from, to));
    }
}

/// Records every back edge seen during a search.
///
/// Whether a cycle is fatal stays with the caller; this only collects them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CycleDetector {
    back_edges: Vec<(NodeId, NodeId)>,
}

impl CycleDetector {
    /// Creates a detector with no recorded edges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if at least one back edge was seen.
    pub fn has_cycle(&self) -> bool {
        !self.back_edges.is_empty()
    }

    /// Back edges `(from, to)` in discovery order; `to` closes the cycle.
    pub fn back_edges(&self) -> &[(NodeId, NodeId)] {
        &self.back_edges
    }
}

impl<N, E> Visitor<N, E> for CycleDetector {
    fn back_edge(&mut self, from: NodeId, to: NodeId, _graph: &DiGraph<N, E>) {
        self.back_edges.push((from, to));
    }
}
