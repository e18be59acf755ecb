//! Command-line interface orchestration for spanwood.
//!
//! `run` generates a seeded random graph, `solve` reads an edge-list file, and
//! `analyze` times Kruskal over a ladder of graph sizes and writes a CSV
//! report.

mod commands;
mod edge_list;

pub use commands::{
    AnalysisSummary, AnalyzeCommand, Cli, CliError, Command, ExecutionSummary, ForestSummary,
    RunCommand, SolveCommand, render_summary, run_cli,
};
pub use edge_list::{EdgeListError, parse_edge_list};
