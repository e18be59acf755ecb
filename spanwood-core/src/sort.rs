//! Deterministic weight ordering for edge lists.
//!
//! Both entry points use the standard library's stable sort, so edges with
//! equal weights keep their input order and repeated runs over the same input
//! produce the same sequence.

use crate::edge::Edge;

/// Returns `edges` sorted by weight ascending.
///
/// # Examples
/// ```
/// use spanwood_core::{Edge, sort_edges};
///
/// let sorted = sort_edges(vec![Edge::new(0, 1, 3), Edge::new(1, 2, 1)]);
/// assert_eq!(sorted[0].weight(), 1);
/// ```
#[must_use]
pub fn sort_edges<W: Copy + Ord>(mut edges: Vec<Edge<W>>) -> Vec<Edge<W>> {
    sort_edges_in_place(&mut edges);
    edges
}

/// Sorts `edges` by weight ascending, reusing the caller's buffer.
pub fn sort_edges_in_place<W: Copy + Ord>(edges: &mut [Edge<W>]) {
    edges.sort_by_key(Edge::weight);
}

/// Returns `true` when every weight is no greater than its successor.
#[must_use]
pub fn is_sorted_by_weight<W: Copy + Ord>(edges: &[Edge<W>]) -> bool {
    edges.is_sorted_by_key(Edge::weight)
}
