//! Prim oracle for MST property verification.
//!
//! A dense, quadratic Prim's algorithm that shares no code with the Kruskal
//! path: it keeps the cheapest parallel edge per pair in a matrix and grows
//! one tree per component. Total weights of minimum spanning forests are
//! unique, so the oracle's total must match Kruskal's exactly.

use crate::Edge;

/// Result of the Prim oracle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct OracleResult {
    /// Total weight of the minimum spanning forest.
    pub total_weight: i64,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of connected components in the input.
    pub component_count: usize,
}

/// Computes a minimum spanning forest with Prim's algorithm.
pub(super) fn prim_forest(node_count: usize, edges: &[Edge]) -> OracleResult {
    let mut matrix: Vec<Vec<Option<i64>>> = vec![vec![None; node_count]; node_count];
    for edge in edges.iter().filter(|edge| !edge.is_self_loop()) {
        for (a, b) in [(edge.u(), edge.v()), (edge.v(), edge.u())] {
            let slot = &mut matrix[a][b];
            *slot = Some(slot.map_or(edge.weight(), |current| current.min(edge.weight())));
        }
    }

    let mut in_tree = vec![false; node_count];
    let mut best: Vec<Option<i64>> = vec![None; node_count];
    let mut result = OracleResult {
        total_weight: 0,
        edge_count: 0,
        component_count: 0,
    };

    for _ in 0..node_count {
        let next = (0..node_count)
            .filter(|&node| !in_tree[node])
            .min_by_key(|&node| (best[node].is_none(), best[node]));
        let Some(node) = next else { break };

        match best[node] {
            Some(weight) => {
                result.total_weight += weight;
                result.edge_count += 1;
            }
            None => result.component_count += 1,
        }
        in_tree[node] = true;

        for other in 0..node_count {
            if let (false, Some(weight)) = (in_tree[other], matrix[node][other]) {
                if best[other].is_none_or(|current| weight < current) {
                    best[other] = Some(weight);
                }
            }
        }
    }

    result
}
