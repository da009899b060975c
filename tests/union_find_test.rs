use graph_lists::union_find::DisjointSet;

#[test]
fn starts_as_singletons() {
    let mut sets = DisjointSet::new(4);
    assert_eq!(sets.set_count(), 4);
    for v in 1..=4 {
        assert_eq!(sets.find(v), v);
        assert_eq!(sets.rank(v), 0);
    }
}

#[test]
fn union_merges_and_reports_no_op() {
    let mut sets = DisjointSet::new(5);
    assert!(sets.union(1, 2));
    assert!(sets.union(3, 4));
    assert!(sets.union(2, 4));
    assert!(!sets.union(1, 3));
    assert_eq!(sets.set_count(), 2);
    assert!(sets.connected(1, 4));
    assert!(!sets.connected(1, 5));
}

#[test]
fn equal_ranks_grow_the_root() {
    let mut sets = DisjointSet::new(4);
    sets.union(1, 2);
    let root = sets.find(1);
    assert_eq!(sets.rank(root), 1);

    // lower rank goes under higher rank
    sets.union(3, root);
    assert_eq!(sets.find(3), root);
    assert_eq!(sets.rank(root), 1);

    sets.union(4, 3);
    assert_eq!(sets.find(4), root);
}

#[test]
fn long_chains_resolve_to_one_root() {
    let n = 10_000;
    let mut sets = DisjointSet::new(n);
    for v in 2..=n {
        sets.union(v - 1, v);
    }
    let root = sets.find(1);
    assert!((1..=n).all(|v| sets.find(v) == root));
    assert_eq!(sets.set_count(), 1);
}
