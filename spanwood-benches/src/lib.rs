//! Benchmark support crate for spanwood.
//!
//! Provides the seeded random graph generator, benchmark parameter types, and
//! the timing/memory report harness used by Criterion benchmarks and the
//! `spanwood analyze` command.

pub mod error;
pub mod params;
pub mod report;
pub mod source;
