//! Validated weighted undirected graphs.

use crate::{
    edge::{Edge, Weight},
    error::{GraphError, MstError},
    mst::{MinimumSpanningForest, compute_mst},
};

/// An edge list over the node range `[0, node_count)`.
///
/// Construction checks that every endpoint is in range; afterwards the graph
/// is read-only. The graph does not have to be connected and may contain
/// parallel edges or self-loops.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph<W = i64> {
    node_count: usize,
    edges: Vec<Edge<W>>,
}

impl<W> Graph<W> {
    /// Creates a graph after validating every edge against `node_count`.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] for the first edge with an
    /// endpoint `>= node_count`.
    ///
    /// # Examples
    /// ```
    /// use spanwood_core::{Edge, Graph, GraphError};
    ///
    /// let graph = Graph::new(2, vec![Edge::new(0, 1, 4)])?;
    /// assert_eq!(graph.node_count(), 2);
    ///
    /// let err = Graph::new(2, vec![Edge::new(0, 2, 4)]).unwrap_err();
    /// assert!(matches!(err, GraphError::NodeOutOfRange { node: 2, .. }));
    /// # Ok::<(), GraphError>(())
    /// ```
    pub fn new(node_count: usize, edges: Vec<Edge<W>>) -> Result<Self, GraphError> {
        validate_edges(&edges, node_count)?;
        Ok(Self { node_count, edges })
    }

    /// Returns the number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns the edges in their original order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<W>] { &self.edges }

    /// Returns the number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Consumes the graph, returning the edge list and node count.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Edge<W>>, usize) {
        (self.edges, self.node_count)
    }
}

impl<W: Weight> Graph<W> {
    /// Computes the minimum spanning forest of this graph.
    ///
    /// # Errors
    /// Returns [`MstError::WeightOverflow`] when the total weight does not fit
    /// `W`. Range errors cannot occur for a validated graph.
    pub fn minimum_spanning_forest(&self) -> Result<MinimumSpanningForest<W>, MstError> {
        compute_mst(&self.edges, self.node_count)
    }
}

/// Checks that every edge endpoint lies in `[0, node_count)`.
pub(crate) fn validate_edges<W>(edges: &[Edge<W>], node_count: usize) -> Result<(), GraphError> {
    match edges
        .iter()
        .enumerate()
        .find(|(_, edge)| edge.max_endpoint() >= node_count)
    {
        Some((edge_index, edge)) => Err(GraphError::NodeOutOfRange {
            edge_index,
            node: edge.max_endpoint(),
            node_count,
        }),
        None => Ok(()),
    }
}
