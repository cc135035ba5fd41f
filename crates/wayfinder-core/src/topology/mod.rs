//! Topology adapters for the search algorithms
//!
//! A topology supplies the neighbor relation a search walks over. Two
//! adapters are provided: [`AdjacencyGraph`] for directed node graphs
//! and [`OccupancyGrid`] for 2-D occupancy grids.

mod graph;
mod grid;

use std::hash::Hash;

pub use graph::AdjacencyGraph;
pub use grid::{Cell, OccupancyGrid};

/// The neighbor relation a search algorithm traverses.
///
/// Implementations must expose a stable neighbor order: DFS and DLS
/// results depend on it, and identical inputs must produce identical
/// traversals.
pub trait Topology {
    /// Node identity. Must work as a set/map key.
    type Node: Clone + Eq + Hash;

    /// The neighbors of `node`, in the adapter's documented order.
    fn neighbors(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Whether `node` is a position this topology knows about.
    fn contains(&self, node: &Self::Node) -> bool;
}
