//! Spanwood core library: minimum spanning forests with Kruskal's algorithm.
//!
//! The crate exposes three building blocks, leaf first:
//!
//! - [`DisjointSet`]: union-find with path compression and union by rank.
//! - [`sort_edges`]: a stable weight-ascending edge sort.
//! - [`compute_mst`] / [`MstBuilder`]: the greedy cycle-avoiding selection.
//!
//! ```
//! use spanwood_core::{Edge, compute_mst};
//!
//! // Two disjoint triangles of unit weight.
//! let edges: Vec<Edge> = [(0, 1, 1), (1, 2, 1), (2, 0, 1), (3, 4, 1), (4, 5, 1), (5, 3, 1)]
//!     .into_iter()
//!     .map(Edge::from)
//!     .collect();
//! let (forest, total) = compute_mst(&edges, 6)?.into_parts();
//! assert_eq!(forest.len(), 4);
//! assert_eq!(total, 4);
//! # Ok::<(), spanwood_core::MstError>(())
//! ```
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled every computation emits:
//!
//! - `mst_computations_total` (counter)
//! - `mst_edges_considered_total` (counter)
//! - `mst_edges_accepted_total` (counter)
//!
//! These metric names are stable for downstream crates.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod edge;
mod error;
mod graph;
mod mst;
mod sort;
#[cfg(test)]
mod test_utils;

pub use crate::{
    disjoint_set::DisjointSet,
    edge::{Edge, Weight},
    error::{
        DisjointSetError, DisjointSetErrorCode, GraphError, GraphErrorCode, MstError,
        MstErrorCode, Result,
    },
    graph::Graph,
    mst::{MinimumSpanningForest, MstBuilder, compute_mst, compute_mst_in_place},
    sort::{is_sorted_by_weight, sort_edges, sort_edges_in_place},
};
