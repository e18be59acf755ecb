//! Plain-text edge list parsing for `spanwood solve`.
//!
//! Blank lines and `#` comments are ignored. The first data line holds the
//! node count; every later data line is `u v weight`, whitespace separated.

use std::io::{self, BufRead};
use std::str::FromStr;

use spanwood_core::{Edge, Graph, GraphError};
use thiserror::Error;

/// Errors raised while reading an edge list. Line numbers are 1-based.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EdgeListError {
    /// The underlying reader failed.
    #[error("line {line}: read failed: {source}")]
    Read {
        /// Line being read.
        line: usize,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The input held no data lines at all.
    #[error("missing node count")]
    MissingNodeCount,
    /// The first data line was not a single non-negative integer.
    #[error("line {line}: invalid node count `{raw}`")]
    InvalidNodeCount {
        /// Offending line.
        line: usize,
        /// Text found on the line.
        raw: String,
    },
    /// An edge line did not have exactly three fields.
    #[error("line {line}: expected `u v weight`, found {found} field(s)")]
    FieldCount {
        /// Offending line.
        line: usize,
        /// Number of whitespace-separated fields found.
        found: usize,
    },
    /// An edge field did not parse.
    #[error("line {line}: invalid {field} `{raw}`")]
    InvalidField {
        /// Offending line.
        line: usize,
        /// Which field failed: `u`, `v` or `weight`.
        field: &'static str,
        /// Text found in the field.
        raw: String,
    },
    /// An endpoint referenced a node outside `[0, node_count)`.
    #[error("line {line}: node {node} is out of range for {node_count} node(s)")]
    NodeOutOfRange {
        /// Offending line.
        line: usize,
        /// The out-of-range endpoint.
        node: usize,
        /// Declared node count.
        node_count: usize,
    },
    /// Graph construction rejected the parsed edges.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Parses an edge list into a validated [`Graph`].
///
/// # Errors
/// Returns [`EdgeListError`] for unreadable input, a missing or malformed
/// node count, malformed edge lines, or endpoints outside the declared range.
///
/// # Examples
/// ```
/// use spanwood_cli::cli::parse_edge_list;
///
/// let input = "# square\n4\n0 1 1\n1 2 2\n2 3 3\n3 0 4\n";
/// let graph = parse_edge_list(input.as_bytes())?;
/// assert_eq!((graph.node_count(), graph.edge_count()), (4, 4));
/// # Ok::<(), spanwood_cli::cli::EdgeListError>(())
/// ```
pub fn parse_edge_list(reader: impl BufRead) -> Result<Graph, EdgeListError> {
    let mut node_count = None;
    let mut edges = Vec::new();

    for (line, read) in (1..).zip(reader.lines()) {
        let text = read.map_err(|source| EdgeListError::Read { line, source })?;
        let data = strip_comment(&text);
        if data.is_empty() {
            continue;
        }
        let Some(declared) = node_count else {
            node_count = Some(parse_node_count(line, data)?);
            continue;
        };
        edges.push(parse_edge(line, data, declared)?);
    }

    let Some(declared) = node_count else {
        return Err(EdgeListError::MissingNodeCount);
    };
    Ok(Graph::new(declared, edges)?)
}

fn strip_comment(text: &str) -> &str {
    text.split_once('#').map_or(text, |(data, _)| data).trim()
}

fn parse_node_count(line: usize, data: &str) -> Result<usize, EdgeListError> {
    data.parse().map_err(|_| EdgeListError::InvalidNodeCount {
        line,
        raw: data.to_owned(),
    })
}

fn parse_edge(line: usize, data: &str, node_count: usize) -> Result<Edge, EdgeListError> {
    let fields: Vec<&str> = data.split_whitespace().collect();
    let [raw_u, raw_v, raw_weight] = fields.as_slice() else {
        return Err(EdgeListError::FieldCount {
            line,
            found: fields.len(),
        });
    };

    let u: usize = parse_field(line, "u", raw_u)?;
    let v: usize = parse_field(line, "v", raw_v)?;
    let weight: i64 = parse_field(line, "weight", raw_weight)?;

    if let Some(node) = [u, v].into_iter().find(|&node| node >= node_count) {
        return Err(EdgeListError::NodeOutOfRange {
            line,
            node,
            node_count,
        });
    }
    Ok(Edge::new(u, v, weight))
}

fn parse_field<T: FromStr>(
    line: usize,
    field: &'static str,
    raw: &str,
) -> Result<T, EdgeListError> {
    raw.parse().map_err(|_| EdgeListError::InvalidField {
        line,
        field,
        raw: raw.to_owned(),
    })
}
