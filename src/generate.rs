//! Random graphs for demos and property tests.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::Result;
use crate::graph::{Edge, Graph, Vertex, Weight};

/// A connected graph: a random spanning tree plus up to `extra_edges` more
/// edges between distinct, not yet adjacent pairs. Weights are uniform in
/// `1..=max_weight`.
pub fn random_connected<R: Rng + ?Sized>(
    rng: &mut R,
    vertices: usize,
    extra_edges: usize,
    max_weight: Weight,
) -> Result<Graph> {
    let order: Vec<Vertex> = (1..=vertices).collect();
    let mut builder = EdgeSet::default();
    component(rng, &order, extra_edges, max_weight, &mut builder);
    Graph::from_checked(vertices, builder.edges)
}

/// A graph whose components have exactly the given sizes, each one
/// internally connected. Components occupy consecutive vertex ranges,
/// shuffled so ids do not reveal the split.
pub fn random_forest<R: Rng + ?Sized>(
    rng: &mut R,
    sizes: &[usize],
    extra_edges: usize,
    max_weight: Weight,
) -> Result<Graph> {
    let vertices: usize = sizes.iter().sum();
    let mut ids: Vec<Vertex> = (1..=vertices).collect();
    ids.shuffle(rng);

    let mut builder = EdgeSet::default();
    let mut rest = ids.as_slice();
    for &size in sizes {
        let (members, tail) = rest.split_at(size);
        component(rng, members, extra_edges, max_weight, &mut builder);
        rest = tail;
    }
    Graph::from_checked(vertices, builder.edges)
}

fn component<R: Rng + ?Sized>(
    rng: &mut R,
    members: &[Vertex],
    extra_edges: usize,
    max_weight: Weight,
    out: &mut EdgeSet,
) {
    let max_weight = max_weight.max(1);
    for k in 1..members.len() {
        let anchor = members[rng.random_range(0..k)];
        out.insert(anchor, members[k], rng.random_range(1..=max_weight));
    }

    let n = members.len();
    let room = (n * n.saturating_sub(1) / 2).saturating_sub(n.saturating_sub(1));
    let wanted = extra_edges.min(room);
    // Random probing stalls on dense targets; cap the attempts.
    let mut added = 0;
    let mut attempts = 0;
    while added < wanted && attempts < 32 * (wanted + 1) {
        attempts += 1;
        let a = members[rng.random_range(0..n)];
        let b = members[rng.random_range(0..n)];
        if a != b && out.insert(a, b, rng.random_range(1..=max_weight)) {
            added += 1;
        }
    }
}

#[derive(Default)]
struct EdgeSet {
    edges: Vec<Edge>,
    pairs: HashSet<(Vertex, Vertex)>,
}

impl EdgeSet {
    fn insert(&mut self, u: Vertex, v: Vertex, wgt: Weight) -> bool {
        if !self.pairs.insert((u.min(v), u.max(v))) {
            return false;
        }
        self.edges.push(Edge { u, v, wgt });
        true
    }
}
