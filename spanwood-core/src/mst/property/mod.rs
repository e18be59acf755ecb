//! Property-based tests for the Kruskal MST implementation.
//!
//! Verifies Kruskal against an independent Prim oracle and validates the
//! structural invariants of the produced forest (acyclicity, edge count,
//! weight accounting) across graph topologies with varied weight
//! distributions.

mod equivalence;
mod oracle;
mod strategies;
mod structural;
mod types;
