use std::collections::VecDeque;
use std::ops::RangeInclusive;

use tracing::{debug, trace, warn};

use crate::error::{GraphError, Result};
use crate::heap::IndexedMinHeap;
use crate::tree::{
    EdgeForest, KruskalOutcome, RootedTree, ShortestPathTree, SpanningTree, Traversal, Visit,
};
use crate::union_find::DisjointSet;

/// Dense 1-based vertex id.
pub type Vertex = usize;
pub type Weight = u64;

/// Prim key of an undiscovered vertex. Real keys are single edge weights,
/// which never exceed `i64::MAX`.
const UNREACHED: Weight = Weight::MAX;

/// Dijkstra's tentative distance. Every finite value, `Weight::MAX`
/// included, orders before `Unreached`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Dist {
    Finite(Weight),
    Unreached,
}

impl Dist {
    /// Length of the path through a vertex at this distance and an edge of
    /// weight `wgt`, or `None` when unreached or the sum overflows.
    fn through(self, wgt: Weight) -> Option<Weight> {
        match self {
            Dist::Finite(d) => d.checked_add(wgt),
            Dist::Unreached => None,
        }
    }

    fn finite(self) -> Option<Weight> {
        match self {
            Dist::Finite(d) => Some(d),
            Dist::Unreached => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub u: Vertex,
    pub v: Vertex,
    pub wgt: Weight,
}

impl Edge {
    /// Validates a raw `(u, v, w)` triple against a graph of `vertices` vertices.
    pub fn checked(vertices: usize, u: i64, v: i64, wgt: i64) -> std::result::Result<Edge, String> {
        let in_range = |x: i64| x >= 1 && (x as u64) <= vertices as u64;
        if !in_range(u) {
            return Err(format!("vertex {u} is outside 1..={vertices}"));
        }
        if !in_range(v) {
            return Err(format!("vertex {v} is outside 1..={vertices}"));
        }
        if u == v {
            return Err(format!("self-loop on vertex {u}"));
        }
        if wgt < 0 {
            return Err(format!("negative weight {wgt}"));
        }
        Ok(Edge {
            u: u as Vertex,
            v: v as Vertex,
            wgt: wgt as Weight,
        })
    }
}

/// One side of an undirected edge as stored in a vertex's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incidence {
    pub vert: Vertex,
    pub wgt: Weight,
}

/// Undirected weighted graph over vertices `1..=V`, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertices: usize,
    edges: Vec<Edge>,
    adj: Vec<Vec<Incidence>>,
}

impl Graph {
    /// Builds a graph from exactly `edge_count` raw triples.
    pub fn from_edges<I>(vertices: usize, edge_count: usize, triples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i64, i64, i64)>,
    {
        let mut edges = Vec::new();
        for (u, v, w) in triples {
            if edges.len() == edge_count {
                return Err(GraphError::malformed(
                    None,
                    format!("more than {edge_count} edges supplied"),
                ));
            }
            let edge = Edge::checked(vertices, u, v, w).map_err(|reason| {
                GraphError::malformed(None, format!("edge {}: {reason}", edges.len() + 1))
            })?;
            edges.push(edge);
        }
        if edges.len() < edge_count {
            return Err(GraphError::malformed(
                None,
                format!("expected {edge_count} edges, got {}", edges.len()),
            ));
        }
        Graph::from_checked(vertices, edges)
    }

    /// Builds the adjacency lists for already validated edges. Fails when
    /// `vertices` adjacency slots cannot be allocated.
    pub(crate) fn from_checked(vertices: usize, edges: Vec<Edge>) -> Result<Self> {
        let too_many = || GraphError::malformed(None, format!("cannot hold {vertices} vertices"));
        let slots = vertices.checked_add(1).ok_or_else(too_many)?;
        let mut adj = Vec::new();
        adj.try_reserve_exact(slots).map_err(|_| too_many())?;
        adj.resize_with(slots, Vec::new);

        let mut g = Graph {
            vertices,
            edges: Vec::with_capacity(edges.len()),
            adj,
        };
        for edge in edges {
            g.add_edge(edge);
        }
        Ok(g)
    }

    fn add_edge(&mut self, edge: Edge) {
        self.adj[edge.u].push(Incidence {
            vert: edge.v,
            wgt: edge.wgt,
        });
        self.adj[edge.v].push(Incidence {
            vert: edge.u,
            wgt: edge.wgt,
        });
        self.edges.push(edge);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges in input order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertices(&self) -> RangeInclusive<Vertex> {
        1..=self.vertices
    }

    /// Neighbours of `v`, most recently inserted first. Empty for ids
    /// outside `1..=V`.
    pub fn incident_edges(&self, v: Vertex) -> impl Iterator<Item = &Incidence> + Clone + '_ {
        self.adj
            .get(v)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .rev()
    }

    pub fn check_source(&self, s: Vertex) -> Result<Vertex> {
        if s == 0 || s > self.vertices {
            return Err(GraphError::InvalidSourceVertex {
                vertex: s,
                vertices: self.vertices,
            });
        }
        Ok(s)
    }

    /// Minimum spanning tree of `s`'s component, grown with an indexed heap
    /// keyed on the cheapest known attaching edge.
    pub fn prim(&self, s: Vertex) -> Result<SpanningTree> {
        self.check_source(s)?;
        let n = self.vertices;
        let mut key = vec![UNREACHED; n + 1];
        let mut parent = vec![None; n + 1];
        let mut in_tree = vec![false; n + 1];
        let mut heap = IndexedMinHeap::new(n);

        key[s] = 0;
        heap.insert(s, &key)?;

        while !heap.is_empty() {
            let v = heap.remove_min(&key)?;
            in_tree[v] = true;

            for &Incidence { vert: u, wgt } in self.incident_edges(v) {
                if !in_tree[u] && wgt < key[u] {
                    trace!(from = v, to = u, wgt, "prim: cheaper attaching edge");
                    key[u] = wgt;
                    parent[u] = Some(v);
                    heap.push_or_decrease(u, &key)?;
                }
            }
        }

        let tree = SpanningTree::new(s, parent, finite(key));
        debug!(
            source = s,
            reached = tree.reached(),
            total = tree.total_weight(),
            "prim finished"
        );
        if !tree.is_spanning() {
            warn!(source = s, unreached = tree.unreached().len(), "prim: graph is disconnected");
        }
        Ok(tree)
    }

    /// Shortest-path tree from `s` using the indexed heap.
    ///
    /// A path whose length does not fit in a [`Weight`] is never taken; a
    /// vertex reachable only along such paths is reported unreached.
    pub fn dijkstra(&self, s: Vertex) -> Result<ShortestPathTree> {
        self.check_source(s)?;
        let n = self.vertices;
        let mut dist = vec![Dist::Unreached; n + 1];
        let mut parent = vec![None; n + 1];
        let mut done = vec![false; n + 1];
        let mut heap = IndexedMinHeap::new(n);

        dist[s] = Dist::Finite(0);
        heap.insert(s, &dist)?;

        while !heap.is_empty() {
            let v = heap.remove_min(&dist)?;
            done[v] = true;

            for &Incidence { vert: u, wgt } in self.incident_edges(v) {
                if done[u] {
                    continue;
                }
                let Some(cost) = dist[v].through(wgt) else {
                    warn!(from = v, to = u, "dijkstra: path length overflows, skipped");
                    continue;
                };
                if Dist::Finite(cost) < dist[u] {
                    trace!(from = v, to = u, cost, "dijkstra: relaxed");
                    dist[u] = Dist::Finite(cost);
                    parent[u] = Some(v);
                    heap.push_or_decrease(u, &dist)?;
                }
            }
        }

        let tree = ShortestPathTree::new(s, parent, dist.into_iter().map(Dist::finite).collect());
        debug!(source = s, reached = tree.reached(), "dijkstra finished");
        Ok(tree)
    }

    /// Same result as [`Graph::dijkstra`], selecting the next vertex with a
    /// linear scan instead of a heap. O(V^2).
    pub fn dijkstra_dense(&self, s: Vertex) -> Result<ShortestPathTree> {
        self.check_source(s)?;
        let n = self.vertices;
        let mut dist = vec![Dist::Unreached; n + 1];
        let mut parent = vec![None; n + 1];
        let mut done = vec![false; n + 1];

        dist[s] = Dist::Finite(0);

        while let Some(v) = (1..=n)
            .filter(|&v| !done[v] && dist[v] != Dist::Unreached)
            .min_by_key(|&v| dist[v])
        {
            done[v] = true;
            for &Incidence { vert: u, wgt } in self.incident_edges(v) {
                if let Some(cost) = dist[v].through(wgt)
                    && !done[u]
                    && Dist::Finite(cost) < dist[u]
                {
                    dist[u] = Dist::Finite(cost);
                    parent[u] = Some(v);
                }
            }
        }

        let tree = ShortestPathTree::new(s, parent, dist.into_iter().map(Dist::finite).collect());
        debug!(source = s, reached = tree.reached(), "dense dijkstra finished");
        Ok(tree)
    }

    /// Minimum spanning tree by ascending-weight edge selection. The graph's
    /// own edge list is left in input order.
    pub fn kruskal(&self) -> KruskalOutcome {
        let n = self.vertices;
        let wanted = n.saturating_sub(1);
        let mut sorted = self.edges.clone();
        sorted.sort_by_key(|e| e.wgt);

        let mut sets = DisjointSet::new(n);
        let mut accepted = Vec::with_capacity(wanted);
        for edge in sorted {
            if accepted.len() == wanted {
                break;
            }
            if sets.find(edge.u) != sets.find(edge.v) {
                sets.union(edge.u, edge.v);
                accepted.push(edge);
            } else {
                trace!(u = edge.u, v = edge.v, wgt = edge.wgt, "kruskal: rejected, closes a cycle");
            }
        }

        let forest = EdgeForest::new(accepted);
        debug!(
            accepted = forest.len(),
            total = forest.total_weight(),
            "kruskal finished"
        );
        if forest.len() == wanted {
            KruskalOutcome::Spanning(forest)
        } else {
            let components = sets.set_count();
            warn!(accepted = forest.len(), components, "kruskal: no spanning tree");
            KruskalOutcome::Disconnected { forest, components }
        }
    }

    /// Pre-order depth-first traversal of `s`'s component. Iterative, but
    /// visits in the same order as the recursive formulation.
    pub fn dfs(&self, s: Vertex) -> Result<Traversal> {
        self.check_source(s)?;
        let mut visited = vec![false; self.vertices + 1];
        let mut visits = vec![Visit { vertex: s, via: None }];
        visited[s] = true;

        let mut stack = vec![(s, self.incident_edges(s))];
        while let Some((v, neighbours)) = stack.last_mut() {
            let v = *v;
            match neighbours.find(|inc| !visited[inc.vert]) {
                Some(&Incidence { vert: u, .. }) => {
                    visited[u] = true;
                    visits.push(Visit {
                        vertex: u,
                        via: Some(v),
                    });
                    stack.push((u, self.incident_edges(u)));
                }
                None => {
                    stack.pop();
                }
            }
        }

        debug!(source = s, visited = visits.len(), "dfs finished");
        Ok(Traversal::new(s, self.vertices, visits))
    }

    /// Breadth-first traversal of `s`'s component. Vertices are marked when
    /// enqueued, so each is queued at most once.
    pub fn bfs(&self, s: Vertex) -> Result<Traversal> {
        self.check_source(s)?;
        let mut visited = vec![false; self.vertices + 1];
        let mut visits = vec![Visit { vertex: s, via: None }];
        let mut q = VecDeque::from([s]);
        visited[s] = true;

        while let Some(v) = q.pop_front() {
            for &Incidence { vert: u, .. } in self.incident_edges(v) {
                if !visited[u] {
                    visited[u] = true;
                    visits.push(Visit {
                        vertex: u,
                        via: Some(v),
                    });
                    q.push_back(u);
                }
            }
        }

        debug!(source = s, visited = visits.len(), "bfs finished");
        Ok(Traversal::new(s, self.vertices, visits))
    }
}

fn finite(values: Vec<Weight>) -> Vec<Option<Weight>> {
    values
        .into_iter()
        .map(|w| (w != UNREACHED).then_some(w))
        .collect()
}
