//! Iterative depth-first search with edge classification.
//!
//! The search keeps an explicit stack of `(node, next neighbor index)` frames
//! instead of recursing, so the depth of a dependency chain is bounded by heap
//! memory only. Roots are tried in ascending id order and neighbors are
//! visited in ascending id order, which makes every event sequence
//! reproducible.

use crate::collections::OrderedUniqueSet;
use crate::error::Result;
use crate::graph::{DiGraph, NodeId, Visitor};
use crate::macros::trace_event;

/// Search state of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Not discovered yet.
    #[default]
    White,
    /// Discovered and still on the active path.
    Gray,
    /// Every edge explored.
    Black,
}

/// Which adjacency a search walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Follow edges from source to target (successors).
    #[default]
    Outgoing,
    /// Follow edges from target back to source (predecessors).
    Incoming,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeId,
    next: usize,
}

/// One search over a graph: colors plus the frame stack.
struct Search<'g, N, E> {
    graph: &'g DiGraph<N, E>,
    direction: Direction,
    colors: Vec<Color>,
    stack: Vec<Frame>,
}

impl<'g, N, E> Search<'g, N, E> {
    fn new(graph: &'g DiGraph<N, E>, direction: Direction) -> Self {
        Self {
            graph,
            direction,
            colors: vec![Color::White; graph.number_of_nodes()],
            stack: Vec::new(),
        }
    }

    fn discover<V: Visitor<N, E>>(&mut self, node: NodeId, visitor: &mut V) {
        self.colors[node] = Color::Gray;
        visitor.start_node(node, self.graph);
        self.stack.push(Frame { node, next: 0 });
    }

    /// Explores everything reachable from the white node `root`.
    fn run_from<V: Visitor<N, E>>(&mut self, root: NodeId, visitor: &mut V) {
        self.discover(root, visitor);

        while let Some(frame) = self.stack.last_mut() {
            let node = frame.node;
            let target = self
                .graph
                .edges
                .neighbors(node, self.direction)
                .get(frame.next)
                .copied();

            let Some(target) = target else {
                self.stack.pop();
                self.colors[node] = Color::Black;
                visitor.finish_node(node, self.graph);
                if let Some(parent) = self.stack.last() {
                    visitor.finish_edge(parent.node, node, self.graph);
                }
                continue;
            };

            frame.next += 1;
            visitor.start_edge(node, target, self.graph);
            match self.colors[target] {
                Color::White => {
                    visitor.tree_edge(node, target, self.graph);
                    // finish_edge fires once `target` is finished.
                    self.discover(target, visitor);
                }
                Color::Gray => {
                    trace_event!(DEBUG, from = node, to = target, "back edge");
                    visitor.back_edge(node, target, self.graph);
                    visitor.finish_edge(node, target, self.graph);
                }
                Color::Black => {
                    visitor.forward_or_cross_edge(node, target, self.graph);
                    visitor.finish_edge(node, target, self.graph);
                }
            }
        }
    }

    /// Ids left black by the search, ascending.
    fn reached(&self) -> OrderedUniqueSet<NodeId> {
        self.colors
            .iter()
            .enumerate()
            .filter(|(_, color)| **color == Color::Black)
            .map(|(id, _)| id)
            .collect()
    }
}

impl<N, E> DiGraph<N, E> {
    /// Runs a depth-first search over the whole graph, reporting every event
    /// to `visitor`.
    ///
    /// Every white node, in ascending id order, roots a new search tree, so
    /// disconnected graphs are covered completely. Cycles do not make the
    /// search fail; each one shows up as at least one
    /// [`back_edge`](Visitor::back_edge) call.
    pub fn depth_first_search<V: Visitor<N, E>>(&self, visitor: &mut V) {
        self.depth_first_search_directed(visitor, Direction::Outgoing);
    }

    /// Like [`depth_first_search`](Self::depth_first_search), walking the
    /// adjacency selected by `direction`.
    ///
    /// With [`Direction::Incoming`] the ids given to edge hooks are in walking
    /// order: `from` is the explored node and `to` one of its predecessors.
    pub fn depth_first_search_directed<V: Visitor<N, E>>(&self, visitor: &mut V, direction: Direction) {
        let mut search = Search::new(self, direction);
        for root in self.node_ids() {
            if search.colors[root] == Color::White {
                search.run_from(root, visitor);
            }
        }
        trace_event!(
            DEBUG,
            nodes = self.number_of_nodes(),
            edges = self.number_of_edges(),
            "depth-first search finished"
        );
    }

    /// Runs a single search tree rooted at `start`.
    ///
    /// Nodes not reachable from `start` are never reported.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`](crate::GraphError::NodeOutOfRange) if
    /// `start` is not a node of the graph.
    pub fn depth_first_search_from<V: Visitor<N, E>>(&self, start: NodeId, visitor: &mut V) -> Result<()> {
        self.check_node(start)?;
        Search::new(self, Direction::Outgoing).run_from(start, visitor);
        Ok(())
    }

    /// Returns `true` if a path leads from `from` to `to`.
    ///
    /// Every node reaches itself.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`](crate::GraphError::NodeOutOfRange) if
    /// either id is not a node of the graph.
    pub fn is_reachable(&self, from: NodeId, to: NodeId) -> Result<bool> {
        self.check_node(from)?;
        self.check_node(to)?;
        let mut search = Search::new(self, Direction::Outgoing);
        search.run_from(from, &mut crate::graph::EmptyVisitor);
        Ok(search.colors[to] == Color::Black)
    }

    /// Calls `f` for every leaf reachable from `start` (including `start`
    /// itself), in ascending id order.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`](crate::GraphError::NodeOutOfRange) if
    /// `start` is not a node of the graph.
    pub fn for_each_leaf_from<F: FnMut(NodeId)>(&self, start: NodeId, f: F) -> Result<()> {
        self.check_node(start)?;
        let mut search = Search::new(self, Direction::Outgoing);
        search.run_from(start, &mut crate::graph::EmptyVisitor);
        search
            .reached()
            .into_iter()
            .filter(|&id| self.edges.successors(id).is_empty())
            .for_each(f);
        Ok(())
    }

    /// Calls `f` for every root from which `start` is reachable (including
    /// `start` itself), in ascending id order.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`](crate::GraphError::NodeOutOfRange) if
    /// `start` is not a node of the graph.
    pub fn for_each_root_from<F: FnMut(NodeId)>(&self, start: NodeId, f: F) -> Result<()> {
        self.check_node(start)?;
        let mut search = Search::new(self, Direction::Incoming);
        search.run_from(start, &mut crate::graph::EmptyVisitor);
        search
            .reached()
            .into_iter()
            .filter(|&id| self.edges.predecessors(id).is_empty())
            .for_each(f);
        Ok(())
    }
}
