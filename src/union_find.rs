use std::cmp::Ordering;

use crate::graph::Vertex;

/// Disjoint sets over `1..=n` with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<Vertex>,
    rank: Vec<u32>,
    sets: usize,
}

impl DisjointSet {
    pub fn new(n: usize) -> Self {
        DisjointSet {
            parent: (0..=n).collect(),
            rank: vec![0; n + 1],
            sets: n,
        }
    }

    /// Number of disjoint sets currently held.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Representative of `v`'s set. Every vertex on the walked path is
    /// re-pointed straight at the representative.
    pub fn find(&mut self, v: Vertex) -> Vertex {
        let mut root = v;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = v;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merges the sets of `u` and `v`. Returns `false` if they were already
    /// one set.
    pub fn union(&mut self, u: Vertex, v: Vertex) -> bool {
        let ru = self.find(u);
        let rv = self.find(v);
        if ru == rv {
            return false;
        }
        match self.rank[ru].cmp(&self.rank[rv]) {
            Ordering::Greater => self.parent[rv] = ru,
            Ordering::Less => self.parent[ru] = rv,
            Ordering::Equal => {
                self.parent[rv] = ru;
                self.rank[ru] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    pub fn connected(&mut self, u: Vertex, v: Vertex) -> bool {
        self.find(u) == self.find(v)
    }

    pub fn rank(&self, v: Vertex) -> u32 {
        self.rank[v]
    }
}
