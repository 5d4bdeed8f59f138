//! Debug-only structural invariant checks.
//!
//! The module is only compiled with `debug_assertions`.

use crate::graph::DiGraph;

/// Debug-asserts a structural invariant with a message.
#[inline(always)]
fn graph_assert_msg(condition: bool, message: &str) {
    debug_assert!(condition, "Graph invariant violated: {}", message);
}

impl<N, E> DiGraph<N, E> {
    /// Validates the structural invariants of the graph.
    ///
    /// This method checks that:
    /// 1. Every node has exactly one successor and one predecessor slot
    /// 2. Every adjacency entry names an existing node
    /// 3. Successor and predecessor views mirror each other
    /// 4. The edge map holds exactly one entry per adjacency pair
    ///
    /// Returns `true` if all invariants hold; panics otherwise.
    pub fn validate_invariants(&self) -> bool {
        let n = self.nodes.len();

        graph_assert_msg(
            self.edges.slot_count() == n,
            "adjacency slot count must match node count",
        );

        let mut adjacency_pairs = 0usize;
        for u in 0..n {
            for &v in self.edges.successors(u) {
                graph_assert_msg(v < n, "successor id out of bounds");
                graph_assert_msg(
                    self.edges.predecessors(v).contains(&u),
                    "successor missing from the target's predecessors",
                );
                graph_assert_msg(self.edges.contains(u, v), "adjacency pair without payload");
                adjacency_pairs += 1;
            }
            for &p in self.edges.predecessors(u) {
                graph_assert_msg(p < n, "predecessor id out of bounds");
                graph_assert_msg(
                    self.edges.successors(p).contains(&u),
                    "predecessor missing from the source's successors",
                );
            }
        }

        graph_assert_msg(
            adjacency_pairs == self.edges.len(),
            "edge map size must match adjacency pair count",
        );

        true
    }
}
