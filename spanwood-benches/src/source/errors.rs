//! Error types for synthetic graph generation.

/// Errors that may occur while generating a random benchmark graph.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SyntheticError {
    /// A single node cannot have an edge to a distinct node.
    #[error("a graph with {node_count} node cannot give every node an edge")]
    TooFewNodes {
        /// Number of nodes requested.
        node_count: usize,
    },
    /// Fewer edges than nodes were requested.
    #[error("edge count ({edge_count}) must be at least the node count ({node_count})")]
    TooFewEdges {
        /// Number of nodes requested.
        node_count: usize,
        /// Number of edges requested.
        edge_count: usize,
    },
    /// More edges were requested than distinct undirected pairs exist.
    #[error("edge count ({edge_count}) exceeds the {max_edges} distinct pairs available")]
    TooManyEdges {
        /// Number of edges requested.
        edge_count: usize,
        /// Number of distinct undirected pairs over the node range.
        max_edges: usize,
    },
    /// The weight range was empty.
    #[error("invalid weight range: min={min_weight}, max={max_weight}")]
    InvalidWeightRange {
        /// Lower bound of the range.
        min_weight: i64,
        /// Upper bound of the range.
        max_weight: i64,
    },
    /// The generated edge list failed graph validation.
    #[error(transparent)]
    InvalidGraph(#[from] spanwood_core::GraphError),
}
