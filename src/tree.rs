//! Results returned by the graph algorithms.
//!
//! Every result is freshly allocated per call and owns its arrays. Partial
//! results (source component only) are returned as data with an explicit
//! coverage flag; [`RootedTree::require_spanning`] and
//! [`KruskalOutcome::into_spanning`] turn them into errors for callers that
//! need a full spanning tree.

use itertools::Itertools;

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Vertex, Weight};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coverage {
    Spanning,
    Disconnected { unreached: Vec<Vertex> },
}

/// Parent-array tree rooted at a source vertex.
pub trait RootedTree {
    fn source(&self) -> Vertex;

    /// Indexed by vertex; slot 0 is unused and always `None`.
    fn parents(&self) -> &[Option<Vertex>];

    fn vertex_count(&self) -> usize {
        self.parents().len().saturating_sub(1)
    }

    fn parent(&self, v: Vertex) -> Option<Vertex> {
        self.parents().get(v).copied().flatten()
    }

    /// `(parent, child)` pairs, ordered by child.
    fn tree_edges(&self) -> Vec<(Vertex, Vertex)> {
        (1..=self.vertex_count())
            .filter_map(|v| self.parent(v).map(|p| (p, v)))
            .collect()
    }

    fn unreached(&self) -> Vec<Vertex> {
        (1..=self.vertex_count())
            .filter(|&v| v != self.source() && self.parent(v).is_none())
            .collect()
    }

    fn reached(&self) -> usize {
        self.vertex_count() - self.unreached().len()
    }

    fn coverage(&self) -> Coverage {
        let unreached = self.unreached();
        if unreached.is_empty() {
            Coverage::Spanning
        } else {
            Coverage::Disconnected { unreached }
        }
    }

    fn is_spanning(&self) -> bool {
        self.coverage() == Coverage::Spanning
    }

    fn require_spanning(self) -> Result<Self>
    where
        Self: Sized,
    {
        if self.is_spanning() {
            Ok(self)
        } else {
            Err(GraphError::Disconnected {
                accepted: self.reached() - 1,
                required: self.vertex_count() - 1,
            })
        }
    }

    /// Vertices from the source down to `v`, or `None` if `v` was not reached.
    fn path_to(&self, v: Vertex) -> Option<Vec<Vertex>> {
        if v == self.source() {
            return Some(vec![v]);
        }
        self.parent(v)?;
        let mut path = vec![v];
        let mut cur = v;
        while let Some(p) = self.parent(cur) {
            path.push(p);
            cur = p;
            if path.len() > self.vertex_count() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Minimum spanning tree grown by Prim from `source`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    source: Vertex,
    parent: Vec<Option<Vertex>>,
    attach: Vec<Option<Weight>>,
}

impl SpanningTree {
    pub(crate) fn new(source: Vertex, parent: Vec<Option<Vertex>>, attach: Vec<Option<Weight>>) -> Self {
        SpanningTree {
            source,
            parent,
            attach,
        }
    }

    /// Weight of the edge that attached `v` to its parent (`Some(0)` for the source).
    pub fn attach_weight(&self, v: Vertex) -> Option<Weight> {
        self.attach.get(v).copied().flatten()
    }

    pub fn total_weight(&self) -> Weight {
        (1..=self.vertex_count())
            .filter(|&v| self.parent(v).is_some())
            .filter_map(|v| self.attach_weight(v))
            .sum()
    }
}

impl RootedTree for SpanningTree {
    fn source(&self) -> Vertex {
        self.source
    }

    fn parents(&self) -> &[Option<Vertex>] {
        &self.parent
    }
}

/// Shortest-path tree grown by Dijkstra from `source`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    source: Vertex,
    parent: Vec<Option<Vertex>>,
    dist: Vec<Option<Weight>>,
}

impl ShortestPathTree {
    pub(crate) fn new(source: Vertex, parent: Vec<Option<Vertex>>, dist: Vec<Option<Weight>>) -> Self {
        ShortestPathTree {
            source,
            parent,
            dist,
        }
    }

    /// Shortest distance from the source, `None` when unreachable.
    pub fn distance(&self, v: Vertex) -> Option<Weight> {
        self.dist.get(v).copied().flatten()
    }

    /// Distances for vertices `1..=V`.
    pub fn distances(&self) -> &[Option<Weight>] {
        self.dist.get(1..).unwrap_or_default()
    }
}

impl RootedTree for ShortestPathTree {
    fn source(&self) -> Vertex {
        self.source
    }

    fn parents(&self) -> &[Option<Vertex>] {
        &self.parent
    }
}

/// Edges accepted by Kruskal, in acceptance (ascending weight) order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeForest {
    edges: Vec<Edge>,
}

impl EdgeForest {
    pub(crate) fn new(edges: Vec<Edge>) -> Self {
        EdgeForest { edges }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn total_weight(&self) -> Weight {
        self.edges.iter().map(|e| e.wgt).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KruskalOutcome {
    Spanning(EdgeForest),
    /// Fewer than `V - 1` edges could be accepted.
    Disconnected {
        forest: EdgeForest,
        components: usize,
    },
}

impl KruskalOutcome {
    pub fn forest(&self) -> &EdgeForest {
        match self {
            KruskalOutcome::Spanning(forest) => forest,
            KruskalOutcome::Disconnected { forest, .. } => forest,
        }
    }

    pub fn is_spanning(&self) -> bool {
        matches!(self, KruskalOutcome::Spanning(_))
    }

    /// Connected components of the graph; 1 when a spanning tree was found.
    pub fn components(&self) -> usize {
        match self {
            KruskalOutcome::Spanning(_) => 1,
            KruskalOutcome::Disconnected { components, .. } => *components,
        }
    }

    pub fn into_spanning(self) -> Result<EdgeForest> {
        match self {
            KruskalOutcome::Spanning(forest) => Ok(forest),
            KruskalOutcome::Disconnected { forest, components } => Err(GraphError::Disconnected {
                accepted: forest.len(),
                required: forest.len() + components - 1,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    pub vertex: Vertex,
    /// The vertex this one was discovered from; `None` for the source.
    pub via: Option<Vertex>,
}

/// Visit sequence of a depth-first or breadth-first traversal. Only the
/// component containing the source is covered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    source: Vertex,
    vertices: usize,
    visits: Vec<Visit>,
}

impl Traversal {
    pub(crate) fn new(source: Vertex, vertices: usize, visits: Vec<Visit>) -> Self {
        Traversal {
            source,
            vertices,
            visits,
        }
    }

    pub fn source(&self) -> Vertex {
        self.source
    }

    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    pub fn order(&self) -> Vec<Vertex> {
        self.visits.iter().map(|visit| visit.vertex).collect()
    }

    pub fn unvisited(&self) -> Vec<Vertex> {
        let seen = self.order().into_iter().sorted().collect_vec();
        (1..=self.vertices)
            .filter(|v| seen.binary_search(v).is_err())
            .collect()
    }

    pub fn is_spanning(&self) -> bool {
        self.visits.len() == self.vertices
    }
}
