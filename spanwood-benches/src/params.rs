//! Benchmark parameter types.

use std::{fmt, str::FromStr};

use crate::error::ParseSizeError;

/// Node and edge counts for one benchmark graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraphBenchParams {
    /// Number of nodes in the generated graph.
    pub node_count: usize,
    /// Number of edges in the generated graph.
    pub edge_count: usize,
}

impl GraphBenchParams {
    /// Creates parameters for a graph of `node_count` nodes and `edge_count` edges.
    #[must_use]
    pub const fn new(node_count: usize, edge_count: usize) -> Self {
        Self {
            node_count,
            edge_count,
        }
    }
}

/// Size ladder used when no explicit sizes are requested.
pub const DEFAULT_SIZE_LADDER: &[GraphBenchParams] = &[
    GraphBenchParams::new(8, 16),
    GraphBenchParams::new(50, 200),
    GraphBenchParams::new(100, 500),
    GraphBenchParams::new(500, 2_000),
    GraphBenchParams::new(1_000, 5_000),
    GraphBenchParams::new(2_000, 10_000),
];

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.node_count, self.edge_count)
    }
}

impl FromStr for GraphBenchParams {
    type Err = ParseSizeError;

    /// Parses `NODESxEDGES`, e.g. `100x500`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseSizeError {
            raw: raw.to_owned(),
        };
        let (nodes, edges) = raw.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        let node_count = nodes.trim().parse().map_err(|_| invalid())?;
        let edge_count = edges.trim().parse().map_err(|_| invalid())?;
        Ok(Self::new(node_count, edge_count))
    }
}
