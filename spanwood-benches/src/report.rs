//! Timing and memory reporting for MST runs over generated graphs.
//!
//! Each measurement times one Kruskal computation on a private copy of the
//! graph's edges and estimates the heap footprint of the input copy and the
//! resulting forest. Records render as CSV for the analysis report and as one
//! human-readable line for terminal output.

use std::{
    fmt, fs,
    mem::size_of,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use spanwood_core::{Edge, Graph, MstError, compute_mst_in_place};

use crate::{
    error::BenchSetupError,
    params::GraphBenchParams,
    source::{RandomGraphConfig, generate_random_graph},
};

/// Output file used by `spanwood analyze` when none is given.
pub const DEFAULT_REPORT_PATH: &str = "performance_analysis.csv";

const CSV_HEADER: &str = "Nodes,Edges,ExecutionTime(s),MemoryUsage(KB)\n";

/// One row of the performance report.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PerformanceRecord {
    /// Number of nodes in the measured graph.
    pub node_count: usize,
    /// Number of edges in the measured graph.
    pub edge_count: usize,
    /// Wall-clock time spent computing the forest.
    pub elapsed: Duration,
    /// Estimated bytes held by the input copy and the output forest.
    pub memory_bytes: usize,
}

impl PerformanceRecord {
    fn to_csv_row(&self) -> String {
        format!(
            "{},{},{:.6},{:.6}\n",
            self.node_count,
            self.edge_count,
            self.elapsed.as_secs_f64(),
            kibibytes(self.memory_bytes),
        )
    }
}

impl fmt::Display for PerformanceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Nodes: {}, Edges: {} -> Time: {:.6}s, Memory: {:.6} KB",
            self.node_count,
            self.edge_count,
            self.elapsed.as_secs_f64(),
            kibibytes(self.memory_bytes),
        )
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "Kibibytes are only rendered for human-readable and CSV output."
)]
fn kibibytes(bytes: usize) -> f64 {
    bytes as f64 / 1024.0
}

/// Bytes held by a vector of edges: its header plus its allocated capacity.
#[must_use]
pub const fn vec_footprint<W>(edges: &Vec<Edge<W>>) -> usize {
    let buffer = edges.capacity().saturating_mul(size_of::<Edge<W>>());
    size_of::<Vec<Edge<W>>>().saturating_add(buffer)
}

/// Times one MST computation over `graph`.
///
/// The edges are copied before the clock starts so the caller's graph is
/// untouched and allocation of the copy is not timed.
///
/// # Errors
/// Returns [`MstError`] when the computation fails, for example on weight
/// overflow.
pub fn measure(graph: &Graph) -> Result<PerformanceRecord, MstError> {
    let mut edges = graph.edges().to_vec();

    let start = Instant::now();
    let forest = compute_mst_in_place(&mut edges, graph.node_count())?;
    let elapsed = start.elapsed();

    let (forest_edges, _total_weight) = forest.into_parts();
    Ok(PerformanceRecord {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        elapsed,
        memory_bytes: vec_footprint(&edges).saturating_add(vec_footprint(&forest_edges)),
    })
}

/// Generates and measures one graph per entry of `sizes`.
///
/// The graph at position `index` is generated from `seed + index` (wrapping),
/// so each size gets a distinct but reproducible graph.
///
/// # Errors
/// Returns [`BenchSetupError`] when a size cannot be generated or measured.
pub fn run_suite(
    sizes: &[GraphBenchParams],
    seed: u64,
) -> Result<Vec<PerformanceRecord>, BenchSetupError> {
    sizes
        .iter()
        .zip(0_u64..)
        .map(|(params, offset)| -> Result<PerformanceRecord, BenchSetupError> {
            let config = RandomGraphConfig::new(
                params.node_count,
                params.edge_count,
                seed.wrapping_add(offset),
            );
            let graph = generate_random_graph(&config)?;
            Ok(measure(&graph)?)
        })
        .collect()
}

/// Renders records as CSV, header first.
#[must_use]
pub fn render_csv(records: &[PerformanceRecord]) -> String {
    let mut output = String::from(CSV_HEADER);
    for record in records {
        output.push_str(&record.to_csv_row());
    }
    output
}

/// Writes the CSV report to `report_path`, creating parent directories.
///
/// Returns the path of the written file.
///
/// # Errors
/// Returns [`std::io::Error`] if directory creation or file writing fails.
pub fn write_performance_report(
    report_path: impl AsRef<Path>,
    records: &[PerformanceRecord],
) -> Result<PathBuf, std::io::Error> {
    let report_file_path = report_path.as_ref().to_path_buf();
    if let Some(parent) = report_file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&report_file_path, render_csv(records))?;
    Ok(report_file_path)
}
