use std::path::PathBuf;

use thiserror::Error;

use crate::graph::Vertex;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("malformed input{}: {reason}", .line.map(|l| format!(" on line {l}")).unwrap_or_default())]
    MalformedInput { line: Option<usize>, reason: String },

    #[error("source vertex {vertex} is outside 1..={vertices}")]
    InvalidSourceVertex { vertex: Vertex, vertices: usize },

    /// Only produced when a caller demands full coverage from a partial tree.
    #[error("graph is disconnected: a spanning tree needs {required} edges, found {accepted}")]
    Disconnected { accepted: usize, required: usize },

    #[error(transparent)]
    Heap(#[from] HeapError),

    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GraphError {
    pub(crate) fn malformed(line: Option<usize>, reason: impl Into<String>) -> Self {
        GraphError::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}

/// Contract violations of [`crate::heap::IndexedMinHeap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("remove_min called on an empty heap")]
    Underflow,
    #[error("heap is full (capacity {capacity})")]
    Overflow { capacity: usize },
    #[error("vertex {vertex} is outside the heap domain 1..={capacity}")]
    OutOfRange { vertex: Vertex, capacity: usize },
    #[error("vertex {0} is already queued")]
    AlreadyQueued(Vertex),
    #[error("vertex {0} is not queued")]
    NotQueued(Vertex),
}
