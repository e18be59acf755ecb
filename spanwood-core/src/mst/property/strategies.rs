//! Strategy builders for MST property-based tests.
//!
//! Each generator draws a seed from proptest and builds the edge list with a
//! seeded [`SmallRng`], so shrinking works on the seed while the graph shape
//! stays reproducible from the failure message.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::types::{MstFixture, WeightDistribution};

/// Minimum node count for generated graphs.
const MIN_NODES: usize = 1;
/// Maximum node count for generated graphs; the Prim oracle is quadratic.
const MAX_NODES: usize = 40;

/// Generates MST fixtures covering every weight distribution.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    let distribution = prop_oneof![
        1 => Just(WeightDistribution::Unique),
        2 => Just(WeightDistribution::ManyIdentical),
        1 => Just(WeightDistribution::Signed),
        1 => Just(WeightDistribution::Sparse),
        1 => Just(WeightDistribution::Disconnected),
    ];
    (distribution, any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let edges = match distribution {
        WeightDistribution::Unique => {
            random_pairs(rng, node_count, 0.3, |r| r.gen_range(1..=1_000_000))
        }
        WeightDistribution::ManyIdentical => {
            let pool: Vec<i64> = (0..rng.gen_range(1..=3)).map(|_| rng.gen_range(1..=10)).collect();
            random_pairs(rng, node_count, 0.5, move |r| pool[r.gen_range(0..pool.len())])
        }
        WeightDistribution::Signed => random_pairs(rng, node_count, 0.4, |r| r.gen_range(-50..=50)),
        WeightDistribution::Sparse => sparse(rng, node_count),
        WeightDistribution::Disconnected => disconnected(rng),
    };
    let node_count = edges_node_bound(&edges).max(node_count);

    MstFixture {
        node_count,
        edges,
        distribution,
    }
}

/// Adds each unordered pair with probability `density`, in a random
/// direction, occasionally duplicating it as a parallel edge.
fn random_pairs(
    rng: &mut SmallRng,
    node_count: usize,
    density: f64,
    mut weight: impl FnMut(&mut SmallRng) -> i64,
) -> Vec<Edge> {
    let mut edges = Vec::new();
    for u in 0..node_count {
        for v in (u + 1)..node_count {
            if !rng.gen_bool(density) {
                continue;
            }
            let drawn = weight(rng);
            edges.push(oriented(rng, u, v, drawn));
            if rng.gen_bool(0.05) {
                let parallel = weight(rng);
                edges.push(oriented(rng, u, v, parallel));
            }
        }
    }
    if node_count > 0 && rng.gen_bool(0.1) {
        let node = rng.gen_range(0..node_count);
        edges.push(Edge::new(node, node, weight(rng)));
    }
    edges
}

/// Builds a random spanning path over a shuffled node order, then adds up to
/// `node_count` extra random edges.
fn sparse(rng: &mut SmallRng, node_count: usize) -> Vec<Edge> {
    let mut order: Vec<usize> = (0..node_count).collect();
    for i in (1..order.len()).rev() {
        order.swap(i, rng.gen_range(0..=i));
    }

    let mut edges: Vec<Edge> = order
        .windows(2)
        .map(|pair| Edge::new(pair[0], pair[1], rng.gen_range(1..=100)))
        .collect();

    for _ in 0..rng.gen_range(0..=node_count) {
        let u = rng.gen_range(0..node_count);
        let v = rng.gen_range(0..node_count);
        edges.push(Edge::new(u, v, rng.gen_range(1..=100)));
    }
    edges
}

/// Builds two to five components with no edges between them.
fn disconnected(rng: &mut SmallRng) -> Vec<Edge> {
    let mut edges = Vec::new();
    let mut offset = 0;
    for _ in 0..rng.gen_range(2..=5) {
        let size = rng.gen_range(1..=8);
        for u in 0..size {
            for v in (u + 1)..size {
                if rng.gen_bool(0.6) {
                    edges.push(Edge::new(offset + u, offset + v, rng.gen_range(1..=20)));
                }
            }
        }
        offset += size;
    }
    // Trailing isolated node keeps the node count above the last endpoint.
    edges.push(Edge::new(offset, offset, 1));
    edges
}

fn oriented(rng: &mut SmallRng, u: usize, v: usize, weight: i64) -> Edge {
    if rng.gen_bool(0.5) {
        Edge::new(u, v, weight)
    } else {
        Edge::new(v, u, weight)
    }
}

fn edges_node_bound(edges: &[Edge]) -> usize {
    edges
        .iter()
        .map(|edge| edge.u().max(edge.v()) + 1)
        .max()
        .unwrap_or(0)
}
