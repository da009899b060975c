use std::fs;

use graph_lists::GraphError;
use graph_lists::parse::{load_graph, parse_graph};

const SQUARE: &str = "4 4\n1 2 1\n2 3 2\n3 4 1\n1 4 4\n";

fn malformed_line(text: &str) -> Option<usize> {
    match parse_graph(text) {
        Err(GraphError::MalformedInput { line, .. }) => line,
        other => panic!("expected malformed input, got {other:?}"),
    }
}

#[test]
fn parses_square() {
    let g = parse_graph(SQUARE).unwrap();
    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.edge_count(), 4);
    assert_eq!(g.prim(1).unwrap().total_weight(), 4);
}

#[test]
fn tolerates_extra_whitespace_and_blank_lines() {
    let g = parse_graph("\n  3   2 \n\n1\t2  7\n\n 2 3 1\n\n").unwrap();
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.dijkstra(1).unwrap().distance(3), Some(8));
}

#[test]
fn reports_line_numbers() {
    assert_eq!(malformed_line("2 1\n1 x 3\n"), Some(2));
    assert_eq!(malformed_line("2 1\n1 2\n"), Some(2));
    assert_eq!(malformed_line("2 1\n1 2 -1\n"), Some(2));
    assert_eq!(malformed_line("2 1\n\n1 3 1\n"), Some(3));
    assert_eq!(malformed_line("2 1\n1 1 1\n"), Some(2));
    assert_eq!(malformed_line("2 1\n1 2 1\n2 1 1\n"), Some(3));
    assert_eq!(malformed_line("2\n"), Some(1));
    assert_eq!(malformed_line("-2 1\n"), Some(1));
}

#[test]
fn missing_header_and_short_input() {
    assert_eq!(malformed_line(""), None);
    assert_eq!(malformed_line("3 3\n1 2 1\n"), None);
}

#[test]
fn huge_declared_counts_fail_cleanly() {
    assert_eq!(malformed_line("2 1000000000000000000\n1 2 3\n"), None);
    assert_eq!(malformed_line("9223372036854775807 0\n"), None);
    assert_eq!(malformed_line("1000000000000000000 0\n"), None);
}

#[test]
fn loads_from_file() {
    let path = std::env::temp_dir().join(format!("graph_lists_{}.txt", std::process::id()));
    fs::write(&path, SQUARE).unwrap();
    let g = load_graph(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(g.kruskal().forest().total_weight(), 4);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_graph("/definitely/not/here.txt").unwrap_err();
    assert!(matches!(err, GraphError::Io { .. }));
}
