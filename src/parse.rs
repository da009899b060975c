//! Loader for the plain-text graph format:
//!
//! ```text
//! <V> <E>
//! <u> <v> <w>      (E lines)
//! ```
//!
//! Tokens are separated by any whitespace and blank lines are skipped.

use std::fs;
use std::path::Path;

use itertools::Itertools;
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Graph};

pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| GraphError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = parse_graph(&text)?;
    debug!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

pub fn parse_graph(text: &str) -> Result<Graph> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| GraphError::malformed(None, "missing `<V> <E>` header"))?;
    let [vertices, edge_count] = numbers::<2>(header_line, header)?;
    let vertices = count(header_line, "vertex", vertices)?;
    let edge_count = count(header_line, "edge", edge_count)?;

    let mut edges = Vec::new();
    for (line_no, line) in lines {
        if edges.len() == edge_count {
            return Err(GraphError::malformed(
                Some(line_no),
                format!("more than the declared {edge_count} edges"),
            ));
        }
        let [u, v, w] = numbers::<3>(line_no, line)?;
        let edge = Edge::checked(vertices, u, v, w)
            .map_err(|reason| GraphError::malformed(Some(line_no), reason))?;
        edges.push(edge);
    }

    if edges.len() < edge_count {
        return Err(GraphError::malformed(
            None,
            format!("declared {edge_count} edges but found {}", edges.len()),
        ));
    }

    Graph::from_checked(vertices, edges)
}

fn numbers<const N: usize>(line_no: usize, line: &str) -> Result<[i64; N]> {
    let tokens = line.split_whitespace().collect_vec();
    if tokens.len() != N {
        return Err(GraphError::malformed(
            Some(line_no),
            format!("expected {N} integers, found {}", tokens.len()),
        ));
    }
    let mut out = [0; N];
    for (slot, token) in out.iter_mut().zip(tokens) {
        *slot = token.parse().map_err(|_| {
            GraphError::malformed(Some(line_no), format!("`{token}` is not an integer"))
        })?;
    }
    Ok(out)
}

fn count(line_no: usize, what: &str, n: i64) -> Result<usize> {
    usize::try_from(n)
        .map_err(|_| GraphError::malformed(Some(line_no), format!("negative {what} count {n}")))
}
