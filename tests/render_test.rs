use graph_lists::render::{self, letter};
use graph_lists::Graph;

#[test]
fn vertices_render_as_letters() {
    assert_eq!(letter(1), "A");
    assert_eq!(letter(26), "Z");
    assert_eq!(letter(27), "27");
}

#[test]
fn adjacency_dump() {
    let g = Graph::from_edges(3, 2, [(1, 2, 1), (1, 3, 2)]).unwrap();
    assert_eq!(
        render::adjacency(&g),
        vec![
            "adj[A] -> |C | 2| -> |B | 1| ->",
            "adj[B] -> |A | 1| ->",
            "adj[C] -> |A | 2| ->",
        ]
    );
}

#[test]
fn prim_and_kruskal_reports() {
    let g = Graph::from_edges(4, 4, [(1, 2, 1), (2, 3, 2), (3, 4, 1), (1, 4, 4)]).unwrap();
    let prim = render::prim(&g.prim(1).unwrap());
    assert!(prim.contains(&"B -> A".to_string()));
    assert_eq!(prim.last().map(String::as_str), Some("Weight of MST = 4"));

    let kruskal = render::kruskal(&g.kruskal());
    assert!(kruskal.contains(&"Edge C--1--D".to_string()));
    assert!(kruskal.contains(&"Weight of MST = 4".to_string()));
}

#[test]
fn disconnected_reports_say_so() {
    let g = Graph::from_edges(5, 3, [(1, 2, 1), (2, 3, 1), (4, 5, 1)]).unwrap();
    let kruskal = render::kruskal(&g.kruskal());
    assert_eq!(kruskal[0], "MST not found: graph has 2 components");

    let prim = render::prim(&g.prim(1).unwrap());
    assert_eq!(prim.last().map(String::as_str), Some("Not reachable from A: D E"));

    let spt = render::dijkstra(&g.dijkstra(1).unwrap());
    assert!(spt.contains(&"  E: unreachable".to_string()));
}

#[test]
fn traversal_narration() {
    let g = Graph::from_edges(3, 2, [(1, 2, 5), (2, 3, 7)]).unwrap();
    let dfs = render::dfs(&g.dfs(1).unwrap());
    assert!(dfs.contains(&"DF just visited vertex A".to_string()));
    assert!(dfs.contains(&"DF just visited vertex C along B--C".to_string()));
    assert!(dfs.contains(&"Order: A B C".to_string()));

    let bfs = render::bfs(&g.bfs(2).unwrap());
    assert!(bfs.contains(&"Visited vertex B".to_string()));
    assert!(bfs.contains(&"BFS visited vertex C from B".to_string()));
}
