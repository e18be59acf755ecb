//! Type definitions for MST property-based tests.

use crate::Edge;

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights and topology are chosen, producing inputs that
/// stress different parts of the greedy selection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge draws from a wide range, so ties are rare.
    Unique,
    /// Large groups of edges share one of a handful of weights.
    ManyIdentical,
    /// Weights straddle zero.
    Signed,
    /// Random spanning tree plus a few extra edges.
    Sparse,
    /// Several components with no edges between them.
    Disconnected,
}

/// Fixture for MST property tests.
///
/// Captures the node count, generated edges, and the distribution used
/// during generation so failures carry full context.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Generated edges, possibly in both directions and with parallels.
    pub edges: Vec<Edge>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}
