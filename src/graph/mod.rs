//! Directed graph storage and depth-first traversal.
//!
//! - `digraph`: the insert-only [`DiGraph`] with dense ids and sorted adjacency
//! - `visitor`: the [`Visitor`] hook trait and ready-made visitors

pub mod digraph;
pub mod visitor;

pub use digraph::{Color, DiGraph, Direction, EdgeMap, NodeId};
pub use visitor::{CycleDetector, DfsEvent, EdgeKind, EmptyVisitor, EventVisitor, Visitor};
