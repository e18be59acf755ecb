//! Seeded random graph generation for benchmarks and demos.
//!
//! Generated graphs give every node at least one incident edge and never
//! repeat an undirected pair. Generation runs in two phases: each node first
//! receives one edge to a random node it is not yet joined to, then random
//! fresh pairs are added until the requested edge count is reached.

mod errors;

use std::collections::HashSet;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use spanwood_core::{Edge, Graph};

pub use errors::SyntheticError;

/// Smallest weight drawn by default.
pub const DEFAULT_MIN_WEIGHT: i64 = 1;
/// Largest weight drawn by default.
pub const DEFAULT_MAX_WEIGHT: i64 = 100;

/// Configuration for a random undirected graph.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RandomGraphConfig {
    /// Number of nodes to generate.
    pub node_count: usize,
    /// Exact number of edges to generate.
    pub edge_count: usize,
    /// Inclusive lower bound for edge weights.
    pub min_weight: i64,
    /// Inclusive upper bound for edge weights.
    pub max_weight: i64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

impl RandomGraphConfig {
    /// Creates a configuration using the default weight range `[1, 100]`.
    #[must_use]
    pub const fn new(node_count: usize, edge_count: usize, seed: u64) -> Self {
        Self {
            node_count,
            edge_count,
            min_weight: DEFAULT_MIN_WEIGHT,
            max_weight: DEFAULT_MAX_WEIGHT,
            seed,
        }
    }

    /// Replaces the weight range.
    #[must_use]
    pub const fn with_weights(mut self, min_weight: i64, max_weight: i64) -> Self {
        self.min_weight = min_weight;
        self.max_weight = max_weight;
        self
    }

    fn validate(&self) -> Result<(), SyntheticError> {
        let Self {
            node_count,
            edge_count,
            min_weight,
            max_weight,
            ..
        } = *self;

        if min_weight > max_weight {
            return Err(SyntheticError::InvalidWeightRange {
                min_weight,
                max_weight,
            });
        }
        if node_count == 1 {
            return Err(SyntheticError::TooFewNodes { node_count });
        }
        if edge_count < node_count {
            return Err(SyntheticError::TooFewEdges {
                node_count,
                edge_count,
            });
        }
        let max_edges = max_edge_count(node_count);
        if edge_count > max_edges {
            return Err(SyntheticError::TooManyEdges {
                edge_count,
                max_edges,
            });
        }
        Ok(())
    }
}

/// Number of distinct undirected pairs over `node_count` nodes, saturating.
#[must_use]
pub const fn max_edge_count(node_count: usize) -> usize {
    let predecessor = node_count.saturating_sub(1);
    // Halve whichever factor is even so the product cannot overflow early.
    if node_count.is_multiple_of(2) {
        node_count.div_euclid(2).saturating_mul(predecessor)
    } else {
        predecessor.div_euclid(2).saturating_mul(node_count)
    }
}

/// Generates a random graph satisfying `config`.
///
/// # Errors
/// Returns [`SyntheticError`] when the configuration cannot be satisfied: a
/// single node, fewer edges than nodes, more edges than distinct pairs, or an
/// empty weight range.
///
/// # Examples
/// ```
/// use spanwood_benches::source::{RandomGraphConfig, generate_random_graph};
///
/// let graph = generate_random_graph(&RandomGraphConfig::new(8, 16, 42))?;
/// assert_eq!(graph.node_count(), 8);
/// assert_eq!(graph.edge_count(), 16);
/// # Ok::<(), spanwood_benches::source::SyntheticError>(())
/// ```
pub fn generate_random_graph(config: &RandomGraphConfig) -> Result<Graph, SyntheticError> {
    config.validate()?;

    let mut builder = PairBuilder::new(config);
    for node in 0..config.node_count {
        builder.connect_node(node);
    }
    while builder.edges.len() < config.edge_count {
        builder.add_random_pair();
    }

    let PairBuilder { edges, .. } = builder;
    Graph::new(config.node_count, edges).map_err(SyntheticError::from)
}

/// Accumulates edges while tracking which undirected pairs are taken.
struct PairBuilder {
    rng: SmallRng,
    node_count: usize,
    min_weight: i64,
    max_weight: i64,
    taken: HashSet<(usize, usize)>,
    degree: Vec<usize>,
    edges: Vec<Edge>,
}

impl PairBuilder {
    fn new(config: &RandomGraphConfig) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(config.seed),
            node_count: config.node_count,
            min_weight: config.min_weight,
            max_weight: config.max_weight,
            taken: HashSet::with_capacity(config.edge_count),
            degree: vec![0; config.node_count],
            edges: Vec::with_capacity(config.edge_count),
        }
    }

    /// Gives `node` one more edge unless it is already joined to every
    /// other node, in which case it needs none.
    fn connect_node(&mut self, node: usize) {
        if self.is_saturated(node) {
            return;
        }
        loop {
            let other = self.rng.gen_range(0..self.node_count);
            if self.try_insert(node, other) {
                return;
            }
        }
    }

    fn is_saturated(&self, node: usize) -> bool {
        self.degree
            .get(node)
            .is_none_or(|&degree| degree.saturating_add(1) >= self.node_count)
    }

    fn add_random_pair(&mut self) {
        loop {
            let u = self.rng.gen_range(0..self.node_count);
            let v = self.rng.gen_range(0..self.node_count);
            if self.try_insert(u, v) {
                return;
            }
        }
    }

    fn try_insert(&mut self, u: usize, v: usize) -> bool {
        if u == v || !self.taken.insert((u.min(v), u.max(v))) {
            return false;
        }
        let weight = self.rng.gen_range(self.min_weight..=self.max_weight);
        for endpoint in [u, v] {
            if let Some(degree) = self.degree.get_mut(endpoint) {
                *degree = degree.saturating_add(1);
            }
        }
        self.edges.push(Edge::new(u, v, weight));
        true
    }
}
