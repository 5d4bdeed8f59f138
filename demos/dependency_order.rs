//! Derives an install order for a small package set and reports cycles.
//!
//! Run with `cargo run --example dependency_order --features tracing` to see
//! the graph's own log events as well.

use vecgraph::{DiGraph, GraphError, NodeId, Visitor};

/// Collects nodes in finishing order and every back edge met on the way.
#[derive(Default)]
struct InstallPlanner {
    order: Vec<NodeId>,
    cycles: Vec<(NodeId, NodeId)>,
}

impl<E> Visitor<&'static str, E> for InstallPlanner {
    fn back_edge(&mut self, from: NodeId, to: NodeId, _graph: &DiGraph<&'static str, E>) {
        self.cycles.push((from, to));
    }

    fn finish_node(&mut self, node: NodeId, _graph: &DiGraph<&'static str, E>) {
        // Dependencies finish first, so finishing order is install order.
        self.order.push(node);
    }
}

fn build(with_cycle: bool) -> Result<DiGraph<&'static str, &'static str>, GraphError> {
    let mut g = DiGraph::new();
    let app = g.add_node("app");
    let requests = g.add_node("requests");
    let urllib3 = g.add_node("urllib3");
    let certifi = g.add_node("certifi");
    let idna = g.add_node("idna");

    g.add_edge(app, requests, ">=2.31")?;
    g.add_edge(requests, urllib3, ">=1.21,<3")?;
    g.add_edge(requests, certifi, ">=2017.4.17")?;
    g.add_edge(requests, idna, ">=2.5,<4")?;
    if with_cycle {
        g.add_edge(urllib3, requests, "*")?;
    }
    Ok(g)
}

fn report(g: &DiGraph<&'static str, &'static str>) {
    let mut planner = InstallPlanner::default();
    g.depth_first_search(&mut planner);

    if planner.cycles.is_empty() {
        let names: Vec<_> = planner.order.iter().filter_map(|&id| g.node(id).copied()).collect();
        println!("install order: {}", names.join(" -> "));
    } else {
        for (from, to) in planner.cycles {
            let constraint = g.edge(from, to).copied().unwrap_or_default();
            println!(
                "cycle: {} depends on {} ({constraint}) which is already being resolved",
                g.node(from).copied().unwrap_or_default(),
                g.node(to).copied().unwrap_or_default(),
            );
        }
    }

    let mut roots = Vec::new();
    g.for_each_root(|id| roots.extend(g.node(id).copied()));
    println!("entry points: {roots:?}");
}

fn main() -> Result<(), GraphError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    report(&build(false)?);
    report(&build(true)?);
    Ok(())
}
