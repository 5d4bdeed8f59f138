//! # `vecgraph` - Directed Graphs with Classified Depth-First Search
//!
//! A small, payload-generic directed graph built for dependency and build
//! graphs: nodes and edges carry caller-defined data, adjacency is kept in
//! sorted vectors, and an iterative depth-first search classifies every edge
//! it meets as a tree, back, or forward/cross edge.
//!
//! ## Guarantees
//!
//! ### Determinism
//! - **Canonical order**: successors, predecessors, leaves, roots and search
//!   roots are all visited in ascending node id order, independent of the
//!   order in which edges were inserted.
//! - **Reproducible searches**: running the same search twice over the same
//!   graph produces the identical event sequence.
//!
//! ### Structure
//! - **Dense ids**: node ids are `0..number_of_nodes()`, handed out in
//!   insertion order and never reused.
//! - **Mirrored adjacency**: for every edge `(u, v)`, `v` is a successor of
//!   `u` and `u` a predecessor of `v`. Debug builds can verify this through
//!   `DiGraph::validate_invariants`.
//! - **No recursion**: traversal uses an explicit frame stack, so very deep
//!   dependency chains cannot overflow the call stack.
//!
//! ### Errors
//! - Out-of-range node ids are reported as [`GraphError::NodeOutOfRange`].
//! - Cycles are not errors; they arrive as [`Visitor::back_edge`] callbacks
//!   and the caller decides what they mean.
//!
//! ## Architecture
//!
//! 1. **[`OrderedUniqueSet`]**: sorted, duplicate-free vector set used for
//!    every id collection.
//! 2. **[`DiGraph`]**: node store plus edge store (forward adjacency, reverse
//!    adjacency and an ordered `(from, to) -> payload` map).
//! 3. **[`Visitor`]**: seven hooks with empty defaults; implement only the
//!    ones you need.
//!
//! ## Cargo features
//!
//! - `tracing`: emit `tracing` events for insertions, back edges and
//!   finished searches.
//!
//! ## Example
//!
//! ```rust
//! use vecgraph::{CycleDetector, DiGraph};
//!
//! let mut g = DiGraph::<&str>::new();
//! let a = g.add_node("a");
//! let b = g.add_node("b");
//! let c = g.add_node("c");
//! g.add_edge(a, b, ())?;
//! g.add_edge(b, c, ())?;
//! g.add_edge(c, a, ())?;
//!
//! let mut cycles = CycleDetector::new();
//! g.depth_first_search(&mut cycles);
//! assert_eq!(cycles.back_edges(), &[(c, a)]);
//! # Ok::<(), vecgraph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod macros;

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::OrderedUniqueSet;
pub use error::{GraphError, Result};
pub use graph::{
    Color, CycleDetector, DfsEvent, DiGraph, Direction, EdgeKind, EdgeMap, EmptyVisitor, EventVisitor, NodeId,
    Visitor,
};

// Compile-time layout checks.
const _: () = {
    use core::mem;

    // Stateless visitors cost nothing to pass around.
    assert!(mem::size_of::<EmptyVisitor>() == 0);

    // Colors and edge classes stay one byte wide.
    assert!(mem::size_of::<Color>() == 1);
    assert!(mem::size_of::<EdgeKind>() == 1);

    // The set is a thin wrapper over its vector.
    assert!(mem::size_of::<OrderedUniqueSet<NodeId>>() == mem::size_of::<Vec<NodeId>>());
};
