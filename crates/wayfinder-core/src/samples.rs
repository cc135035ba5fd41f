//! Built-in sample topologies
//!
//! Small fixtures used by the `demo` command and the test suite. They
//! are plain values handed to the search functions like any other
//! topology, not process-wide state.

use crate::topology::{AdjacencyGraph, Cell, OccupancyGrid};

/// Start label for the sample graph.
pub const GRAPH_START: &str = "A";
/// Goal label for the sample graph.
pub const GRAPH_GOAL: &str = "E";

/// Start cell for the sample grid.
pub const GRID_START: Cell = Cell::new(6, 0);
/// Goal cell for the sample grid.
pub const GRID_GOAL: Cell = Cell::new(3, 3);

/// A 6-node directed graph. Shortest path A to E is A, B, C, E.
pub fn sample_graph() -> AdjacencyGraph<String> {
    let owned = |labels: &[&str]| labels.iter().map(|s| s.to_string()).collect();
    AdjacencyGraph::from_adjacency([
        ("A".to_string(), owned(&["B"])),
        ("B".to_string(), owned(&["C", "D"])),
        ("C".to_string(), owned(&["E"])),
        ("D".to_string(), owned(&["F"])),
        ("E".to_string(), vec![]),
        ("F".to_string(), vec![]),
    ])
}

/// A 7x6 occupancy grid. The only shortest route from (6,0) to (3,3)
/// takes 6 moves, through (6,2), (5,2), (4,2) and (4,3).
pub fn sample_grid() -> OccupancyGrid {
    OccupancyGrid::from_rows(vec![
        vec![0, 1, 1, 1, 1, 1],
        vec![0, 0, 0, 0, 0, 0],
        vec![0, 1, 1, 0, 1, 1],
        vec![0, 1, 1, 0, 1, 1],
        vec![0, 1, 0, 0, 1, 1],
        vec![0, 1, 0, 1, 1, 1],
        vec![0, 0, 0, 1, 1, 1],
    ])
}
