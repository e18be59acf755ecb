//! Command implementations and argument parsing for the spanwood CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use spanwood_benches::{
    error::BenchSetupError,
    params::{DEFAULT_SIZE_LADDER, GraphBenchParams},
    report::{DEFAULT_REPORT_PATH, PerformanceRecord, run_suite, write_performance_report},
    source::{
        DEFAULT_MAX_WEIGHT, DEFAULT_MIN_WEIGHT, RandomGraphConfig, SyntheticError,
        generate_random_graph,
    },
};
use spanwood_core::{Graph, MinimumSpanningForest, MstError};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::edge_list::{EdgeListError, parse_edge_list};

const DEFAULT_SEED: u64 = 42;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanwood",
    about = "Compute minimum spanning forests with Kruskal's algorithm."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a random graph and compute its minimum spanning forest.
    Run(RunCommand),
    /// Compute the minimum spanning forest of an edge-list file.
    Solve(SolveCommand),
    /// Time Kruskal over a ladder of random graphs and write a CSV report.
    Analyze(AnalyzeCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Number of nodes to generate.
    #[arg(long)]
    pub nodes: usize,

    /// Number of edges to generate; at least `--nodes`.
    #[arg(long)]
    pub edges: usize,

    /// Seed for the random generator.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Smallest edge weight.
    #[arg(long, default_value_t = DEFAULT_MIN_WEIGHT, allow_negative_numbers = true)]
    pub min_weight: i64,

    /// Largest edge weight.
    #[arg(long, default_value_t = DEFAULT_MAX_WEIGHT, allow_negative_numbers = true)]
    pub max_weight: i64,
}

/// Options accepted by the `solve` command.
#[derive(Debug, Args, Clone)]
pub struct SolveCommand {
    /// Edge-list file: node count on the first data line, then `u v weight`.
    pub path: PathBuf,
}

/// Options accepted by the `analyze` command.
#[derive(Debug, Args, Clone)]
pub struct AnalyzeCommand {
    /// Comma-separated `NODESxEDGES` sizes; defaults to the built-in ladder.
    #[arg(long, value_delimiter = ',')]
    pub sizes: Vec<GraphBenchParams>,

    /// Base seed; the graph at position `i` uses `seed + i`.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Destination of the CSV report.
    #[arg(long, default_value = DEFAULT_REPORT_PATH)]
    pub output: PathBuf,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// An input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// An edge-list file was malformed.
    #[error("invalid edge list `{path}`: {source}")]
    EdgeList {
        /// Path of the edge-list file.
        path: PathBuf,
        /// Parse failure, including the line number.
        #[source]
        source: EdgeListError,
    },
    /// Random graph generation was misconfigured.
    #[error(transparent)]
    Synthetic(#[from] SyntheticError),
    /// The MST computation failed.
    #[error(transparent)]
    Mst(#[from] MstError),
    /// A benchmark run could not be prepared or measured.
    #[error(transparent)]
    Bench(#[from] BenchSetupError),
    /// The CSV report could not be written.
    #[error("failed to write report `{path}`: {source}")]
    Report {
        /// Destination of the report.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
}

impl CliError {
    /// Returns the MST failure behind this error, if there is one.
    ///
    /// Used to log the stable [`MstError::code`] on exit.
    #[must_use]
    pub const fn mst_error(&self) -> Option<&MstError> {
        match self {
            Self::Mst(error) | Self::Bench(BenchSetupError::Mst(error)) => Some(error),
            _ => None,
        }
    }
}

/// The minimum spanning forest of one graph, with the graph's shape.
#[derive(Debug, Clone)]
pub struct ForestSummary {
    /// Number of nodes in the input graph.
    pub node_count: usize,
    /// Number of edges in the input graph.
    pub edge_count: usize,
    /// The computed forest.
    pub forest: MinimumSpanningForest,
}

/// Measurements produced by `spanwood analyze`.
#[derive(Debug, Clone)]
pub struct AnalysisSummary {
    /// One record per measured graph, in size order.
    pub records: Vec<PerformanceRecord>,
    /// Where the CSV report was written.
    pub report_path: PathBuf,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Produced by `run` and `solve`.
    Forest(ForestSummary),
    /// Produced by `analyze`.
    Analysis(AnalysisSummary),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when input loading, generation, computation or report
/// writing fails.
///
/// # Examples
/// ```
/// use spanwood_cli::cli::{Cli, Command, ExecutionSummary, RunCommand, run_cli};
///
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         nodes: 8,
///         edges: 16,
///         seed: 42,
///         min_weight: 1,
///         max_weight: 100,
///     }),
/// };
/// let ExecutionSummary::Forest(summary) = run_cli(cli)? else {
///     panic!("run produces a forest");
/// };
/// assert_eq!((summary.node_count, summary.edge_count), (8, 16));
/// // A forest over n nodes with c components has n - c edges.
/// assert_eq!(summary.forest.edges().len() + summary.forest.component_count(), 8);
/// # Ok::<(), spanwood_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Run(run) => {
            span.record("command", field::display("run"));
            run_random(&run).map(ExecutionSummary::Forest)
        }
        Command::Solve(solve) => {
            span.record("command", field::display("solve"));
            solve_file(&solve).map(ExecutionSummary::Forest)
        }
        Command::Analyze(analyze) => {
            span.record("command", field::display("analyze"));
            run_analysis(&analyze).map(ExecutionSummary::Analysis)
        }
    }
}

#[instrument(
    name = "cli.run_random",
    err,
    skip(command),
    fields(nodes = command.nodes, edges = command.edges, seed = command.seed),
)]
pub(super) fn run_random(command: &RunCommand) -> Result<ForestSummary, CliError> {
    let config = RandomGraphConfig::new(command.nodes, command.edges, command.seed)
        .with_weights(command.min_weight, command.max_weight);
    let graph = generate_random_graph(&config)?;
    summarise(&graph)
}

#[instrument(
    name = "cli.solve",
    err,
    skip(command),
    fields(path = %command.path.display()),
)]
pub(super) fn solve_file(command: &SolveCommand) -> Result<ForestSummary, CliError> {
    let reader = open_edge_list(&command.path)?;
    let graph = parse_edge_list(reader).map_err(|source| CliError::EdgeList {
        path: command.path.clone(),
        source,
    })?;
    summarise(&graph)
}

#[instrument(
    name = "cli.analyze",
    err,
    skip(command),
    fields(sizes = field::Empty, seed = command.seed, output = %command.output.display()),
)]
pub(super) fn run_analysis(command: &AnalyzeCommand) -> Result<AnalysisSummary, CliError> {
    let sizes = if command.sizes.is_empty() {
        DEFAULT_SIZE_LADDER
    } else {
        command.sizes.as_slice()
    };
    Span::current().record("sizes", sizes.len());

    let records = run_suite(sizes, command.seed)?;
    let report_path =
        write_performance_report(&command.output, &records).map_err(|source| CliError::Report {
            path: command.output.clone(),
            source,
        })?;
    info!(
        records = records.len(),
        path = %report_path.display(),
        "performance report written"
    );
    Ok(AnalysisSummary {
        records,
        report_path,
    })
}

#[instrument(name = "cli.open_edge_list", err, fields(path = field::Empty))]
pub(super) fn open_edge_list(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

fn summarise(graph: &Graph) -> Result<ForestSummary, CliError> {
    let forest = graph.minimum_spanning_forest()?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        mst_edges = forest.edges().len(),
        total_weight = forest.total_weight(),
        components = forest.component_count(),
        "command completed"
    );
    Ok(ForestSummary {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        forest,
    })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// A forest renders as `key: value` header lines followed by one
/// tab-separated `u v weight` line per edge. An analysis renders one line per
/// measured graph followed by the report path.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanwood_cli::cli::{ExecutionSummary, ForestSummary, render_summary};
/// # use spanwood_core::{Edge, compute_mst};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let forest = compute_mst(&[Edge::new(0, 1, 3)], 2)?;
/// let summary = ExecutionSummary::Forest(ForestSummary {
///     node_count: 2,
///     edge_count: 1,
///     forest,
/// });
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "nodes: 2\nedges: 1\nmst edges: 1\ntotal weight: 3\ncomponents: 1\n0\t1\t3\n"
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Forest(forest) => render_forest(forest, writer),
        ExecutionSummary::Analysis(analysis) => render_analysis(analysis, writer),
    }
}

fn render_forest(summary: &ForestSummary, mut writer: impl Write) -> io::Result<()> {
    let forest = &summary.forest;
    writeln!(writer, "nodes: {}", summary.node_count)?;
    writeln!(writer, "edges: {}", summary.edge_count)?;
    writeln!(writer, "mst edges: {}", forest.edges().len())?;
    writeln!(writer, "total weight: {}", forest.total_weight())?;
    writeln!(writer, "components: {}", forest.component_count())?;
    for edge in forest.edges() {
        writeln!(writer, "{}\t{}\t{}", edge.u(), edge.v(), edge.weight())?;
    }
    Ok(())
}

fn render_analysis(summary: &AnalysisSummary, mut writer: impl Write) -> io::Result<()> {
    for record in &summary.records {
        writeln!(writer, "{record}")?;
    }
    writeln!(writer, "report: {}", summary.report_path.display())
}
