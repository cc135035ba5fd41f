use crate::samples::{sample_graph, sample_grid, GRAPH_GOAL, GRAPH_START, GRID_GOAL, GRID_START};
use crate::search::{bfs_shortest_path, dfs_find_path};
use crate::topology::{AdjacencyGraph, Cell, Topology};

fn label(s: &str) -> String {
    s.to_string()
}

fn assert_valid_path<T: Topology>(topo: &T, path: &[T::Node]) {
    for pair in path.windows(2) {
        assert!(
            topo.neighbors(&pair[0]).contains(&pair[1]),
            "consecutive path entries must be neighbors"
        );
    }
}

#[test]
fn test_graph_leftmost_first() {
    // B lists C before D, so DFS explores C's branch first and
    // happens to land on the shortest path here.
    let graph = sample_graph();
    let path = dfs_find_path(&graph, &label(GRAPH_START), &label(GRAPH_GOAL)).unwrap();
    assert_eq!(path, vec!["A", "B", "C", "E"]);
}

#[test]
fn test_start_equals_goal() {
    let grid = sample_grid();
    assert_eq!(
        dfs_find_path(&grid, &GRID_START, &GRID_START),
        Some(vec![GRID_START])
    );
}

#[test]
fn test_unreachable_goal() {
    let graph = sample_graph();
    assert_eq!(dfs_find_path(&graph, &label("F"), &label("A")), None);
    assert_eq!(dfs_find_path(&graph, &label("Z"), &label("A")), None);
}

#[test]
fn test_grid_path_is_valid() {
    let grid = sample_grid();
    let path = dfs_find_path(&grid, &GRID_START, &GRID_GOAL).unwrap();
    assert_valid_path(&grid, &path);
    assert_eq!(*path.first().unwrap(), GRID_START);
    assert_eq!(*path.last().unwrap(), GRID_GOAL);
    // On this grid the leftmost-first order walks straight down the
    // only shortest corridor.
    assert_eq!(path.len() - 1, 6);
    assert_eq!(path[2], Cell::new(6, 2));
}

#[test]
fn test_path_may_exceed_bfs_length() {
    // first-listed neighbor heads into a detour: a -> b -> c -> d
    // while a -> d is direct
    let graph = AdjacencyGraph::from_adjacency([
        (label("a"), vec![label("b"), label("d")]),
        (label("b"), vec![label("c")]),
        (label("c"), vec![label("d")]),
    ]);
    let dfs = dfs_find_path(&graph, &label("a"), &label("d")).unwrap();
    let bfs = bfs_shortest_path(&graph, &label("a"), &label("d")).unwrap();
    assert_eq!(dfs, vec!["a", "b", "c", "d"]);
    assert_eq!(bfs, vec!["a", "d"]);
    assert!(dfs.len() >= bfs.len());
    assert_valid_path(&graph, &dfs);
}

#[test]
fn test_deterministic_traversal() {
    let grid = sample_grid();
    let first = dfs_find_path(&grid, &GRID_START, &GRID_GOAL);
    let second = dfs_find_path(&grid, &GRID_START, &GRID_GOAL);
    assert_eq!(first, second);
}
