use graph_lists::{Coverage, Graph, GraphError, Incidence, KruskalOutcome, RootedTree};

fn square() -> Graph {
    Graph::from_edges(4, 4, [(1, 2, 1), (2, 3, 2), (3, 4, 1), (1, 4, 4)]).unwrap()
}

fn two_components() -> Graph {
    Graph::from_edges(5, 3, [(1, 2, 1), (2, 3, 1), (4, 5, 1)]).unwrap()
}

fn path() -> Graph {
    Graph::from_edges(3, 2, [(1, 2, 5), (2, 3, 7)]).unwrap()
}

#[test]
fn incident_edges_are_most_recent_first() {
    let g = square();
    let n: Vec<Incidence> = g.incident_edges(1).copied().collect();
    assert_eq!(
        n,
        vec![Incidence { vert: 4, wgt: 4 }, Incidence { vert: 2, wgt: 1 }]
    );
    // restartable
    assert_eq!(g.incident_edges(1).count(), 2);
    assert_eq!(g.incident_edges(0).count(), 0);
    assert_eq!(g.incident_edges(9).count(), 0);
}

#[test]
fn prim_on_square() {
    let tree = square().prim(1).unwrap();
    assert_eq!(tree.total_weight(), 4);
    assert_eq!(tree.tree_edges(), vec![(1, 2), (2, 3), (3, 4)]);
    assert_eq!(tree.parent(1), None);
    assert_eq!(tree.attach_weight(1), Some(0));
    assert_eq!(tree.attach_weight(4), Some(1));
    assert!(tree.is_spanning());
}

#[test]
fn kruskal_on_square() {
    let g = square();
    let outcome = g.kruskal();
    assert!(outcome.is_spanning());
    let forest = outcome.into_spanning().unwrap();
    let pairs: Vec<_> = forest.edges().iter().map(|e| (e.u, e.v)).collect();
    assert_eq!(pairs, vec![(1, 2), (3, 4), (2, 3)]);
    assert_eq!(forest.total_weight(), 4);
    // the graph's own edge list keeps input order
    assert_eq!(g.edges()[3].wgt, 4);
    assert_eq!(g.edges()[0].wgt, 1);
}

#[test]
fn dijkstra_on_square() {
    let g = square();
    let spt = g.dijkstra(1).unwrap();
    assert_eq!(spt.distances(), &[Some(0), Some(1), Some(3), Some(4)]);
    assert_eq!(spt.parent(3), Some(2));
    assert_eq!(spt.parent(4), Some(1));
    assert_eq!(spt.path_to(3), Some(vec![1, 2, 3]));
    assert_eq!(spt.path_to(1), Some(vec![1]));

    let dense = g.dijkstra_dense(1).unwrap();
    assert_eq!(dense.distances(), spt.distances());
}

#[test]
fn traversals_on_path() {
    let g = path();
    assert_eq!(g.bfs(1).unwrap().order(), vec![1, 2, 3]);
    assert_eq!(g.dfs(1).unwrap().order(), vec![1, 2, 3]);
}

#[test]
fn traversals_on_square_follow_incidence_order() {
    let g = square();
    let dfs = g.dfs(1).unwrap();
    assert_eq!(dfs.order(), vec![1, 4, 3, 2]);
    assert_eq!(dfs.visits()[2].via, Some(4));

    let bfs = g.bfs(1).unwrap();
    assert_eq!(bfs.order(), vec![1, 4, 2, 3]);
    assert_eq!(bfs.visits()[3].via, Some(4));
    assert!(bfs.is_spanning());
}

#[test]
fn kruskal_reports_disconnected_graph() {
    let outcome = two_components().kruskal();
    assert_eq!(outcome.components(), 2);
    match outcome {
        KruskalOutcome::Disconnected { forest, components } => {
            assert_eq!(forest.len(), 3);
            assert_eq!(components, 2);
        }
        other => panic!("expected disconnected outcome, got {other:?}"),
    }
    assert_eq!(square().kruskal().components(), 1);
    let err = two_components().kruskal().into_spanning().unwrap_err();
    assert!(matches!(
        err,
        GraphError::Disconnected {
            accepted: 3,
            required: 4
        }
    ));
}

#[test]
fn prim_covers_only_the_source_component() {
    let tree = two_components().prim(1).unwrap();
    assert_eq!(tree.coverage(), Coverage::Disconnected { unreached: vec![4, 5] });
    assert_eq!(tree.total_weight(), 2);
    assert_eq!(tree.reached(), 3);
    assert_eq!(tree.attach_weight(5), None);
    assert!(matches!(
        tree.require_spanning(),
        Err(GraphError::Disconnected {
            accepted: 2,
            required: 4
        })
    ));
}

#[test]
fn dijkstra_leaves_other_component_unreachable() {
    let spt = two_components().dijkstra(4).unwrap();
    assert_eq!(spt.distance(5), Some(1));
    assert_eq!(spt.distance(1), None);
    assert_eq!(spt.path_to(2), None);
    assert_eq!(spt.unreached(), vec![1, 2, 3]);
}

#[test]
fn traversals_stop_at_component_boundary() {
    let g = two_components();
    let dfs = g.dfs(5).unwrap();
    assert_eq!(dfs.order(), vec![5, 4]);
    assert_eq!(dfs.unvisited(), vec![1, 2, 3]);
    assert!(!dfs.is_spanning());
}

#[test]
fn invalid_source_is_rejected() {
    let g = square();
    for s in [0, 5] {
        assert!(matches!(
            g.prim(s),
            Err(GraphError::InvalidSourceVertex { vertex, vertices: 4 }) if vertex == s
        ));
        assert!(g.dijkstra(s).is_err());
        assert!(g.dijkstra_dense(s).is_err());
        assert!(g.dfs(s).is_err());
        assert!(g.bfs(s).is_err());
    }
}

#[test]
fn construction_rejects_bad_triples() {
    let cases: [Vec<(i64, i64, i64)>; 5] = [
        vec![(0, 2, 1)],
        vec![(1, 4, 1)],
        vec![(2, 2, 1)],
        vec![(1, 2, -3)],
        vec![],
    ];
    for triples in cases {
        let err = Graph::from_edges(3, 1, triples).unwrap_err();
        assert!(matches!(err, GraphError::MalformedInput { line: None, .. }));
    }
    let err = Graph::from_edges(3, 1, [(1, 2, 1), (2, 3, 1)]).unwrap_err();
    assert!(matches!(err, GraphError::MalformedInput { .. }));
}

#[test]
fn huge_declared_counts_are_malformed() {
    let err = Graph::from_edges(2, usize::MAX / 2, [(1, 2, 3)]).unwrap_err();
    assert!(matches!(err, GraphError::MalformedInput { line: None, .. }));
    for vertices in [usize::MAX, usize::MAX / 2] {
        let err = Graph::from_edges(vertices, 0, []).unwrap_err();
        assert!(matches!(err, GraphError::MalformedInput { line: None, .. }));
    }
}

#[test]
fn dijkstra_distance_can_reach_weight_max() {
    let big = i64::MAX;
    let g = Graph::from_edges(4, 3, [(1, 2, big), (2, 3, big), (3, 4, 1)]).unwrap();
    for spt in [g.dijkstra(1).unwrap(), g.dijkstra_dense(1).unwrap()] {
        assert_eq!(spt.distance(3), Some(u64::MAX - 1));
        assert_eq!(spt.distance(4), Some(u64::MAX));
        assert!(spt.is_spanning());
    }
}

#[test]
fn dijkstra_skips_paths_longer_than_weight_max() {
    let big = i64::MAX;
    let g = Graph::from_edges(4, 3, [(1, 2, big), (2, 3, big), (3, 4, big)]).unwrap();
    for spt in [g.dijkstra(1).unwrap(), g.dijkstra_dense(1).unwrap()] {
        assert_eq!(spt.distance(3), Some(u64::MAX - 1));
        assert_eq!(spt.distance(4), None);
        assert_eq!(spt.unreached(), vec![4]);
    }
}

#[test]
fn parallel_edges_are_kept() {
    let g = Graph::from_edges(2, 2, [(1, 2, 5), (2, 1, 3)]).unwrap();
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.prim(1).unwrap().total_weight(), 3);
    assert_eq!(g.dijkstra(2).unwrap().distance(1), Some(3));
}

#[test]
fn single_vertex_graph() {
    let g = Graph::from_edges(1, 0, []).unwrap();
    assert!(g.kruskal().is_spanning());
    assert!(g.prim(1).unwrap().is_spanning());
    assert_eq!(g.bfs(1).unwrap().order(), vec![1]);
}

#[test]
fn repeated_runs_are_identical() {
    let g = square();
    assert_eq!(g.prim(2).unwrap(), g.prim(2).unwrap());
    assert_eq!(g.dijkstra(3).unwrap(), g.dijkstra(3).unwrap());
    assert_eq!(g.kruskal(), g.kruskal());
    assert_eq!(g.dfs(4).unwrap(), g.dfs(4).unwrap());
}
