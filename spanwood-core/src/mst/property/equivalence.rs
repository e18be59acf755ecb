//! Property 1: equivalence with the Prim oracle.
//!
//! For any generated input graph, Kruskal must report the same total weight,
//! edge count, and component count as the independent oracle.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::compute_mst;

use super::oracle::prim_forest;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = compute_mst(&fixture.edges, fixture.node_count).map_err(|e| {
        TestCaseError::fail(format!(
            "compute_mst failed: {e} (distribution={:?}, nodes={}, edges={})",
            fixture.distribution,
            fixture.node_count,
            fixture.edges.len(),
        ))
    })?;

    let oracle = prim_forest(fixture.node_count, &fixture.edges);
    let actual = (
        forest.total_weight(),
        forest.edges().len(),
        forest.component_count(),
    );
    let expected = (oracle.total_weight, oracle.edge_count, oracle.component_count);

    if actual != expected {
        return Err(TestCaseError::fail(format!(
            "(total, edges, components) mismatch: kruskal={actual:?}, oracle={expected:?} \
             (distribution={:?}, nodes={}, edges={})",
            fixture.distribution,
            fixture.node_count,
            fixture.edges.len(),
        )));
    }
    Ok(())
}
