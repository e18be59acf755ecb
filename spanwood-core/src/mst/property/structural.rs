//! Property 2: structural invariant verification.
//!
//! For any forest produced by Kruskal, verifies:
//!
//! - **Subgraph**: every selected edge occurs in the input.
//! - **Acyclicity**: re-unioning the selected edges never meets a joined pair.
//! - **Edge count**: `V - C` edges for `C` components, so `V - 1` exactly when
//!   the input is connected.
//! - **Weight accounting**: the reported total is the sum of selected weights.
//! - **Order**: selected edges are weight-ascending.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{DisjointSet, compute_mst, is_sorted_by_weight};

use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = compute_mst(&fixture.edges, fixture.node_count)
        .map_err(|e| TestCaseError::fail(format!("compute_mst failed: {e}")))?;
    let selected = forest.edges();

    if let Some(edge) = selected.iter().find(|edge| !fixture.edges.contains(edge)) {
        return Err(TestCaseError::fail(format!("edge {edge} is not in the input")));
    }

    let mut components = DisjointSet::new(fixture.node_count);
    for (i, edge) in selected.iter().enumerate() {
        let merged = components
            .union(edge.u(), edge.v())
            .map_err(|e| TestCaseError::fail(format!("edge {i}: {e}")))?;
        if !merged {
            return Err(TestCaseError::fail(format!("edge {i}: {edge} creates a cycle")));
        }
    }

    let input_components = count_input_components(fixture)?;
    if input_components != forest.component_count() {
        return Err(TestCaseError::fail(format!(
            "component count {}, input has {input_components}",
            forest.component_count(),
        )));
    }

    let expected_edges = fixture.node_count.saturating_sub(input_components);
    if selected.len() != expected_edges {
        return Err(TestCaseError::fail(format!(
            "edge count {}, expected n - c = {expected_edges}",
            selected.len(),
        )));
    }

    let sum: i64 = selected.iter().map(|edge| edge.weight()).sum();
    if sum != forest.total_weight() {
        return Err(TestCaseError::fail(format!(
            "total weight {} differs from edge sum {sum}",
            forest.total_weight(),
        )));
    }

    if !is_sorted_by_weight(selected) {
        return Err(TestCaseError::fail("selected edges are not weight-ascending"));
    }
    Ok(())
}

/// Counts connected components of the raw input.
fn count_input_components(fixture: &MstFixture) -> Result<usize, TestCaseError> {
    let mut components = DisjointSet::new(fixture.node_count);
    for edge in &fixture.edges {
        components
            .union(edge.u(), edge.v())
            .map_err(|e| TestCaseError::fail(format!("input edge {edge}: {e}")))?;
    }
    Ok(components.component_count())
}
