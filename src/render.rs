//! Text reports for the algorithm results. Vertices are shown as letters
//! (`1 -> A`) when they fit in the alphabet.

use itertools::Itertools;

use crate::graph::{Graph, Vertex};
use crate::tree::{KruskalOutcome, RootedTree, ShortestPathTree, SpanningTree, Traversal};

pub fn letter(v: Vertex) -> String {
    match v {
        1..=26 => char::from(b'@' + v as u8).to_string(),
        _ => v.to_string(),
    }
}

pub fn adjacency(graph: &Graph) -> Vec<String> {
    graph
        .vertices()
        .map(|v| {
            let list = graph
                .incident_edges(v)
                .map(|inc| format!(" |{} | {}| ->", letter(inc.vert), inc.wgt))
                .join("");
            format!("adj[{}] ->{}", letter(v), list)
        })
        .collect()
}

pub fn prim(tree: &SpanningTree) -> Vec<String> {
    let mut out = vec!["Minimum Spanning Tree parent array is:".to_string(), String::new()];
    out.extend(
        tree.tree_edges()
            .into_iter()
            .map(|(p, v)| format!("{} -> {}", letter(v), letter(p))),
    );
    out.push(String::new());
    out.push(format!("Weight of MST = {}", tree.total_weight()));
    out.extend(unreached_line(tree));
    out
}

pub fn kruskal(outcome: &KruskalOutcome) -> Vec<String> {
    let forest = outcome.forest();
    let mut out = Vec::new();
    match outcome {
        KruskalOutcome::Spanning(_) => {
            out.push("Minimum Spanning Tree Built from the Following Edges:".to_string());
        }
        KruskalOutcome::Disconnected { components, .. } => {
            out.push(format!("MST not found: graph has {components} components"));
            out.push("Spanning forest edges:".to_string());
        }
    }
    out.push(String::new());
    out.extend(
        forest
            .edges()
            .iter()
            .map(|e| format!("Edge {}--{}--{}", letter(e.u), e.wgt, letter(e.v))),
    );
    out.push(String::new());
    out.push(format!("Weight of MST = {}", forest.total_weight()));
    out
}

pub fn dijkstra(tree: &ShortestPathTree) -> Vec<String> {
    let mut out = vec!["Shortest Path Tree parent array is:".to_string(), String::new()];
    out.extend(
        tree.tree_edges()
            .into_iter()
            .map(|(p, v)| format!("{} -> {}", letter(v), letter(p))),
    );
    out.push(String::new());
    out.push(format!("Distances from {}:", letter(tree.source())));
    for (v, d) in tree.distances().iter().enumerate() {
        let shown = d.map_or_else(|| "unreachable".to_string(), |d| d.to_string());
        out.push(format!("  {}: {}", letter(v + 1), shown));
    }
    out
}

pub fn dfs(traversal: &Traversal) -> Vec<String> {
    let mut out = vec!["Depth-first Traversal:".to_string(), String::new()];
    out.extend(traversal.visits().iter().map(|visit| match visit.via {
        Some(p) => format!(
            "DF just visited vertex {} along {}--{}",
            letter(visit.vertex),
            letter(p),
            letter(visit.vertex)
        ),
        None => format!("DF just visited vertex {}", letter(visit.vertex)),
    }));
    out.extend(order_lines(traversal));
    out
}

pub fn bfs(traversal: &Traversal) -> Vec<String> {
    let mut out = vec!["Breadth-first Search:".to_string(), String::new()];
    out.extend(traversal.visits().iter().map(|visit| match visit.via {
        Some(p) => format!("BFS visited vertex {} from {}", letter(visit.vertex), letter(p)),
        None => format!("Visited vertex {}", letter(visit.vertex)),
    }));
    out.extend(order_lines(traversal));
    out
}

fn order_lines(traversal: &Traversal) -> Vec<String> {
    let mut out = vec![
        String::new(),
        format!("Order: {}", traversal.order().into_iter().map(letter).join(" ")),
    ];
    let unvisited = traversal.unvisited();
    if !unvisited.is_empty() {
        out.push(format!(
            "Not reachable from {}: {}",
            letter(traversal.source()),
            unvisited.into_iter().map(letter).join(" ")
        ));
    }
    out
}

fn unreached_line(tree: &impl RootedTree) -> Option<String> {
    let unreached = tree.unreached();
    (!unreached.is_empty()).then(|| {
        format!(
            "Not reachable from {}: {}",
            letter(tree.source()),
            unreached.into_iter().map(letter).join(" ")
        )
    })
}
