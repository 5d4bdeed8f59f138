use std::collections::BTreeMap;

use vecgraph::{DiGraph, NodeId, OrderedUniqueSet, Visitor};

fn build_graph() -> DiGraph<f64> {
    let mut g = DiGraph::new();
    let n0 = g.add_node(0.5);
    let n1 = g.add_node(1.5);
    let n2 = g.add_node(2.5);
    let n3 = g.add_node(3.5);
    let n4 = g.add_node(4.5);
    let n5 = g.add_node(5.5);
    let n6 = g.add_node(6.5);

    g.add_edge(n0, n1, ()).unwrap();
    g.add_edge(n0, n2, ()).unwrap();
    g.add_edge(n1, n3, ()).unwrap();
    g.add_edge(n1, n4, ()).unwrap();
    g.add_edge(n2, n3, ()).unwrap();
    g.add_edge(n2, n5, ()).unwrap();
    g.add_edge(n3, n6, ()).unwrap();
    g
}

fn build_cyclic_graph() -> DiGraph<f64> {
    let mut g = DiGraph::new();
    let n0 = g.add_node(0.5);
    let n1 = g.add_node(1.5);
    let n2 = g.add_node(2.5);
    let n3 = g.add_node(3.5);
    let n4 = g.add_node(4.5);

    g.add_edge(n0, n1, ()).unwrap();
    g.add_edge(n0, n3, ()).unwrap();
    g.add_edge(n1, n2, ()).unwrap();
    g.add_edge(n2, n0, ()).unwrap();
    g.add_edge(n3, n4, ()).unwrap();
    g
}

/// Records back and forward/cross edges, keyed by source.
#[derive(Default)]
struct EdgeRecorder {
    back_edges: BTreeMap<NodeId, NodeId>,
    cross_edges: BTreeMap<NodeId, NodeId>,
}

impl<N, E> Visitor<N, E> for EdgeRecorder {
    fn back_edge(&mut self, from: NodeId, to: NodeId, _graph: &DiGraph<N, E>) {
        self.back_edges.insert(from, to);
    }

    fn forward_or_cross_edge(&mut self, from: NodeId, to: NodeId, _graph: &DiGraph<N, E>) {
        self.cross_edges.insert(from, to);
    }
}

fn ids<const N: usize>(values: [NodeId; N]) -> OrderedUniqueSet<NodeId> {
    OrderedUniqueSet::from(values)
}

#[test]
fn build_simple() {
    let g = build_graph();
    assert_eq!(g.number_of_nodes(), 7);
    assert_eq!(g.nodes(), &[0.5, 1.5, 2.5, 3.5, 4.5, 5.5, 6.5]);
    assert_eq!(g.successors(0).unwrap(), &ids([1, 2]));
    assert_eq!(g.successors(1).unwrap(), &ids([3, 4]));
    assert_eq!(g.successors(2).unwrap(), &ids([3, 5]));
    assert_eq!(g.successors(3).unwrap(), &ids([6]));
    assert_eq!(g.predecessors(0).unwrap(), &ids([]));
    assert_eq!(g.predecessors(1).unwrap(), &ids([0]));
    assert_eq!(g.predecessors(2).unwrap(), &ids([0]));
    assert_eq!(g.predecessors(3).unwrap(), &ids([1, 2]));
}

#[test]
fn build_edge_data() {
    let mut g = DiGraph::<f64, &str>::new();
    let n0 = g.add_node(0.5);
    let n1 = g.add_node(1.5);
    let n2 = g.add_node(2.5);
    g.add_edge(n0, n1, "n0->n1").unwrap();
    g.add_edge(n1, n2, "n1->n2").unwrap();

    assert_eq!(g.number_of_nodes(), 3);
    assert_eq!(g.nodes(), &[0.5, 1.5, 2.5]);
    assert_eq!(g.successors(n0).unwrap(), &ids([n1]));
    assert_eq!(g.successors(n1).unwrap(), &ids([n2]));
    assert_eq!(g.successors(n2).unwrap(), &ids([]));
    assert_eq!(g.predecessors(n0).unwrap(), &ids([]));
    assert_eq!(g.predecessors(n1).unwrap(), &ids([n0]));
    assert_eq!(g.predecessors(n2).unwrap(), &ids([n1]));

    let expected = BTreeMap::from([((n0, n1), "n0->n1"), ((n1, n2), "n1->n2")]);
    assert_eq!(g.edges(), &expected);
}

#[test]
fn for_each_leaf() {
    let g = build_graph();
    let mut leaves = OrderedUniqueSet::new();
    g.for_each_leaf(|leaf| {
        leaves.insert(leaf);
    });
    assert_eq!(leaves, ids([4, 5, 6]));
}

#[test]
fn for_each_root() {
    let g = build_graph();
    let mut roots = OrderedUniqueSet::new();
    g.for_each_root(|root| {
        roots.insert(root);
    });
    assert_eq!(roots, ids([0]));
}

#[test]
fn depth_first_search() {
    let g = build_graph();
    let mut vis = EdgeRecorder::default();
    g.depth_first_search(&mut vis);
    assert!(vis.back_edges.is_empty());
    assert_eq!(vis.cross_edges.get(&2), Some(&3));
}

#[test]
fn dfs_cyclic() {
    let g = build_cyclic_graph();
    let mut vis = EdgeRecorder::default();
    g.depth_first_search(&mut vis);
    assert_eq!(vis.back_edges.get(&2), Some(&0));
    assert!(vis.cross_edges.is_empty());
}

#[test]
fn dfs_cyclic_is_stable_across_runs() {
    let g = build_cyclic_graph();
    let mut first = EdgeRecorder::default();
    let mut second = EdgeRecorder::default();
    g.depth_first_search(&mut first);
    g.depth_first_search(&mut second);
    assert_eq!(first.back_edges, second.back_edges);
    assert_eq!(first.cross_edges, second.cross_edges);
}

#[test]
fn dfs_empty() {
    let g = DiGraph::<i32>::new();
    let mut vis = EdgeRecorder::default();
    g.depth_first_search(&mut vis);
    assert!(vis.back_edges.is_empty());
    assert!(vis.cross_edges.is_empty());
}

#[test]
fn dfs_empty_fires_no_callbacks() {
    let g = DiGraph::<i32>::new();
    let mut calls = 0usize;
    g.depth_first_search(&mut vecgraph::EventVisitor::new(|_| calls += 1));
    assert_eq!(calls, 0);

    let mut leaves = 0usize;
    g.for_each_leaf(|_| leaves += 1);
    g.for_each_root(|_| leaves += 1);
    assert_eq!(leaves, 0);
}
