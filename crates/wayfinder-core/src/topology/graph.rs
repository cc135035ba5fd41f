//! Directed adjacency-list graph

use std::collections::HashMap;
use std::fs;
use std::hash::Hash;
use std::path::Path;

use crate::error::{Result, WayfinderError};
use crate::topology::Topology;

/// A directed graph stored as adjacency lists.
///
/// Neighbor order is the insertion order of each node's list and is
/// preserved exactly; a node with no entry simply has no neighbors.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph<N: Clone + Eq + Hash> {
    adjacency: HashMap<N, Vec<N>>,
}

impl<N: Clone + Eq + Hash> AdjacencyGraph<N> {
    pub fn new() -> Self {
        AdjacencyGraph {
            adjacency: HashMap::new(),
        }
    }

    /// Build a graph from (node, neighbors) pairs.
    pub fn from_adjacency<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, Vec<N>)>,
    {
        AdjacencyGraph {
            adjacency: entries.into_iter().collect(),
        }
    }

    /// Append a directed edge to `from`'s neighbor list.
    pub fn add_edge(&mut self, from: N, to: N) {
        self.adjacency.entry(from).or_default().push(to);
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// All nodes that have an adjacency entry.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }
}

impl AdjacencyGraph<String> {
    /// Load a graph from a JSON file mapping each label to its ordered
    /// neighbor array, e.g. `{"A": ["B"], "B": ["C", "D"]}`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let adjacency: HashMap<String, Vec<String>> = serde_json::from_str(&text)
            .map_err(|e| WayfinderError::invalid_topology(path, e.to_string()))?;
        Ok(AdjacencyGraph { adjacency })
    }
}

impl<N: Clone + Eq + Hash> Topology for AdjacencyGraph<N> {
    type Node = N;

    fn neighbors(&self, node: &N) -> Vec<N> {
        self.adjacency.get(node).cloned().unwrap_or_default()
    }

    fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }
}
