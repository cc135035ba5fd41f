use std::collections::HashMap;

use crate::samples::{sample_graph, sample_grid, GRAPH_GOAL, GRAPH_START, GRID_GOAL, GRID_START};
use crate::search::bfs_shortest_path;
use crate::topology::{AdjacencyGraph, Cell, Topology};

fn label(s: &str) -> String {
    s.to_string()
}

/// Every consecutive pair must be a neighbor edge and no node repeats.
fn assert_valid_path<T: Topology>(topo: &T, path: &[T::Node]) {
    for pair in path.windows(2) {
        assert!(
            topo.neighbors(&pair[0]).contains(&pair[1]),
            "consecutive path entries must be neighbors"
        );
    }
    let unique: std::collections::HashSet<_> = path.iter().collect();
    assert_eq!(unique.len(), path.len(), "path must not repeat a node");
}

/// Shortest distances from `start` by fixed-point edge relaxation,
/// independent of any frontier discipline.
fn exhaustive_distances<T: Topology>(
    topo: &T,
    nodes: &[T::Node],
    start: &T::Node,
) -> HashMap<T::Node, usize> {
    let mut dist: HashMap<T::Node, usize> = HashMap::new();
    dist.insert(start.clone(), 0);
    loop {
        let mut changed = false;
        for node in nodes {
            let Some(&d) = dist.get(node) else { continue };
            for neighbor in topo.neighbors(node) {
                let entry = dist.entry(neighbor).or_insert(usize::MAX);
                if d + 1 < *entry {
                    *entry = d + 1;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

#[test]
fn test_graph_shortest_path() {
    let graph = sample_graph();
    let path = bfs_shortest_path(&graph, &label(GRAPH_START), &label(GRAPH_GOAL)).unwrap();
    assert_eq!(path, vec!["A", "B", "C", "E"]);
    assert_valid_path(&graph, &path);
}

#[test]
fn test_start_equals_goal() {
    let graph = sample_graph();
    let path = bfs_shortest_path(&graph, &label("B"), &label("B")).unwrap();
    assert_eq!(path, vec!["B"]);
}

#[test]
fn test_unreachable_goal() {
    let graph = sample_graph();
    // E has no outgoing edges
    assert_eq!(bfs_shortest_path(&graph, &label("E"), &label("A")), None);
}

#[test]
fn test_unknown_start_reaches_absence() {
    let graph = sample_graph();
    assert_eq!(bfs_shortest_path(&graph, &label("Z"), &label("A")), None);
    // An unknown goal equal to the start is still a trivial path
    assert_eq!(
        bfs_shortest_path(&graph, &label("Z"), &label("Z")),
        Some(vec![label("Z")])
    );
}

#[test]
fn test_grid_shortest_path() {
    let grid = sample_grid();
    let path = bfs_shortest_path(&grid, &GRID_START, &GRID_GOAL).unwrap();
    assert_eq!(
        path,
        vec![
            Cell::new(6, 0),
            Cell::new(6, 1),
            Cell::new(6, 2),
            Cell::new(5, 2),
            Cell::new(4, 2),
            Cell::new(4, 3),
            Cell::new(3, 3),
        ]
    );
    assert_valid_path(&grid, &path);
}

#[test]
fn test_graph_optimality_all_pairs() {
    let graph = sample_graph();
    let nodes: Vec<String> = graph.nodes().cloned().collect();
    for start in &nodes {
        let dist = exhaustive_distances(&graph, &nodes, start);
        for goal in &nodes {
            let found = bfs_shortest_path(&graph, start, goal);
            match dist.get(goal) {
                Some(&d) => {
                    let path = found.expect("reachable goal must yield a path");
                    assert_eq!(path.len() - 1, d, "{} -> {} must be shortest", start, goal);
                    assert_valid_path(&graph, &path);
                }
                None => assert_eq!(found, None, "{} -> {} is unreachable", start, goal),
            }
        }
    }
}

#[test]
fn test_grid_optimality_from_start() {
    let grid = sample_grid();
    let free: Vec<Cell> = (0..grid.rows())
        .flat_map(|r| (0..grid.cols()).map(move |c| Cell::new(r, c)))
        .filter(|&cell| grid.is_free(cell))
        .collect();
    let dist = exhaustive_distances(&grid, &free, &GRID_START);
    for goal in &free {
        let found = bfs_shortest_path(&grid, &GRID_START, goal);
        match dist.get(goal) {
            Some(&d) => {
                let path = found.expect("reachable cell must yield a path");
                assert_eq!(path.len() - 1, d);
                assert_valid_path(&grid, &path);
            }
            None => assert_eq!(found, None),
        }
    }
}

#[test]
fn test_multiple_shortest_paths_prefer_insertion_order() {
    // a -> b and a -> c both reach d in two steps; b is listed first
    let graph = AdjacencyGraph::from_adjacency([
        (label("a"), vec![label("b"), label("c")]),
        (label("b"), vec![label("d")]),
        (label("c"), vec![label("d")]),
    ]);
    let path = bfs_shortest_path(&graph, &label("a"), &label("d")).unwrap();
    assert_eq!(path, vec!["a", "b", "d"]);
}

#[test]
fn test_idempotence() {
    let grid = sample_grid();
    let first = bfs_shortest_path(&grid, &GRID_START, &GRID_GOAL);
    let second = bfs_shortest_path(&grid, &GRID_START, &GRID_GOAL);
    assert_eq!(first, second);
}
