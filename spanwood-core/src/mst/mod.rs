//! Minimum spanning tree (MST) construction with Kruskal's algorithm.
//!
//! Edges are validated, sorted by weight, then offered one at a time to an
//! [`MstBuilder`], which accepts an edge only when its endpoints lie in
//! different components of a [`DisjointSet`]. Disconnected inputs yield a
//! minimum spanning forest.

use tracing::{debug, instrument};

use crate::{
    disjoint_set::DisjointSet,
    edge::{Edge, Weight},
    error::MstError,
    graph::validate_edges,
    sort::sort_edges_in_place,
};

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
/// Edges appear in the order they were accepted, which is weight-ascending.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinimumSpanningForest<W = i64> {
    edges: Vec<Edge<W>>,
    total_weight: W,
    component_count: usize,
}

impl<W: Weight> MinimumSpanningForest<W> {
    /// Returns the MST/forest edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<W>] { &self.edges }

    /// Returns the sum of the selected edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> W { self.total_weight }

    /// Returns the number of connected components spanned by the forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Consumes the forest, returning the edges and their total weight.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Edge<W>>, W) {
        (self.edges, self.total_weight)
    }
}

/// Greedy cycle-avoiding accumulator at the heart of Kruskal's algorithm.
///
/// The builder trusts its caller to offer edges in weight-ascending order; it
/// only decides acceptance. [`compute_mst`] handles validation and sorting.
#[derive(Clone, Debug)]
pub struct MstBuilder<W: Weight = i64> {
    components: DisjointSet,
    edges: Vec<Edge<W>>,
    running_total: W::Sum,
}

impl<W: Weight> MstBuilder<W> {
    /// Creates a builder over `node_count` singleton components.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            components: DisjointSet::new(node_count),
            edges: Vec::with_capacity(node_count.saturating_sub(1)),
            running_total: W::SUM_ZERO,
        }
    }

    /// Offers the next edge, accepting it when it joins two components.
    ///
    /// Returns `Ok(true)` when the edge became part of the forest and
    /// `Ok(false)` when it would have closed a cycle.
    ///
    /// # Errors
    /// Returns [`MstError::DisjointSet`] when an endpoint is out of range and
    /// [`MstError::WeightOverflow`] when the running total rises above what
    /// `W` can hold. A total that dips below `W`'s minimum is only reported by
    /// [`MstBuilder::finish`], since later edges may bring it back. The
    /// builder is left unchanged on error.
    pub fn offer(&mut self, edge: Edge<W>) -> Result<bool, MstError> {
        if self.components.connected(edge.u(), edge.v())? {
            return Ok(false);
        }

        let overflow = || MstError::WeightOverflow {
            u: edge.u(),
            v: edge.v(),
        };
        let running_total =
            W::accumulate(self.running_total, edge.weight()).ok_or_else(overflow)?;
        // Edges arrive weight-ascending, so a total above `W::MAX` only grows.
        if running_total > W::SUM_ZERO && W::narrow(running_total).is_none() {
            return Err(overflow());
        }

        self.components.union(edge.u(), edge.v())?;
        self.running_total = running_total;
        self.edges.push(edge);
        Ok(true)
    }

    /// Returns `true` once no further edge can be accepted.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.components.component_count() <= 1
    }

    /// Returns the number of accepted edges so far.
    #[must_use]
    #[rustfmt::skip]
    pub fn accepted(&self) -> usize { self.edges.len() }

    /// Finalises the forest.
    ///
    /// # Errors
    /// Returns [`MstError::WeightOverflow`], naming the last accepted edge,
    /// when the total weight does not fit `W`.
    pub fn finish(self) -> Result<MinimumSpanningForest<W>, MstError> {
        let Some(total_weight) = W::narrow(self.running_total) else {
            let (u, v) = self.edges.last().map_or((0, 0), |edge| (edge.u(), edge.v()));
            return Err(MstError::WeightOverflow { u, v });
        };
        Ok(MinimumSpanningForest {
            edges: self.edges,
            total_weight,
            component_count: self.components.component_count(),
        })
    }
}

/// Computes a minimum spanning forest using Kruskal's algorithm.
///
/// `edges` is left untouched; a private copy is sorted. Use
/// [`compute_mst_in_place`] to sort the caller's buffer instead.
///
/// # Errors
/// Returns an error when:
/// - an edge references a node id `>= node_count` ([`MstError::InvalidGraph`])
/// - the total weight of the forest does not fit `W`
///   ([`MstError::WeightOverflow`]); partial sums may leave `W`'s range
///
/// No partial forest is returned on failure.
///
/// # Examples
/// ```
/// use spanwood_core::{Edge, compute_mst};
///
/// let edges = [
///     Edge::new(0, 1, 1),
///     Edge::new(1, 2, 2),
///     Edge::new(2, 3, 3),
///     Edge::new(0, 3, 10),
///     Edge::new(0, 2, 4),
/// ];
/// let forest = compute_mst(&edges, 4)?;
/// assert_eq!(forest.total_weight(), 6);
/// assert!(forest.is_tree());
/// # Ok::<(), spanwood_core::MstError>(())
/// ```
pub fn compute_mst<W: Weight>(
    edges: &[Edge<W>],
    node_count: usize,
) -> Result<MinimumSpanningForest<W>, MstError> {
    let mut buffer = edges.to_vec();
    compute_mst_in_place(&mut buffer, node_count)
}

/// Computes a minimum spanning forest, sorting `edges` in place.
///
/// On success `edges` is left in weight-ascending order. Validation happens
/// before sorting, so a rejected input keeps its original order.
///
/// # Errors
/// See [`compute_mst`].
#[instrument(
    name = "mst.compute",
    level = "debug",
    err,
    skip(edges),
    fields(edge_count = edges.len()),
)]
pub fn compute_mst_in_place<W: Weight>(
    edges: &mut [Edge<W>],
    node_count: usize,
) -> Result<MinimumSpanningForest<W>, MstError> {
    validate_edges(edges, node_count)?;
    sort_edges_in_place(edges);

    let mut builder = MstBuilder::new(node_count);
    let mut considered = 0_usize;
    for edge in edges.iter() {
        if builder.is_complete() {
            break;
        }
        considered = considered.saturating_add(1);
        builder.offer(*edge)?;
    }

    let forest = builder.finish()?;
    record_metrics(considered, forest.edges().len());
    debug!(
        accepted = forest.edges().len(),
        considered,
        total_weight = %forest.total_weight(),
        components = forest.component_count(),
        "minimum spanning forest computed"
    );
    Ok(forest)
}

#[cfg(feature = "metrics")]
fn record_metrics(considered: usize, accepted: usize) {
    metrics::counter!("mst_computations_total").increment(1);
    metrics::counter!("mst_edges_considered_total")
        .increment(u64::try_from(considered).unwrap_or(u64::MAX));
    metrics::counter!("mst_edges_accepted_total")
        .increment(u64::try_from(accepted).unwrap_or(u64::MAX));
}

#[cfg(not(feature = "metrics"))]
const fn record_metrics(_considered: usize, _accepted: usize) {}

#[cfg(kani)]
mod kani_proofs {
    //! Kani proof harnesses for the forest size invariant.

    use super::{Edge, compute_mst};

    /// Verifies that a forest over four nodes never exceeds `n - 1` edges and
    /// that its total equals the sum of its edge weights.
    #[kani::proof]
    #[kani::unwind(12)]
    fn verify_forest_size_and_weight_4_nodes() {
        let node_count = 4usize;
        let edge_pairs = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

        let mut edges = Vec::new();
        for &(u, v) in &edge_pairs {
            if kani::any::<bool>() {
                let weight: u8 = kani::any();
                edges.push(Edge::new(u, v, i64::from(weight)));
            }
        }

        let forest = compute_mst(&edges, node_count).expect("valid input must succeed");
        kani::assert(forest.edges().len() <= node_count - 1, "forest too large");
        let sum: i64 = forest.edges().iter().map(Edge::weight).sum();
        kani::assert(sum == forest.total_weight(), "total weight mismatch");
    }
}

#[cfg(test)]
mod property;
