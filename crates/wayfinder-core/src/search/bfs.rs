//! Breadth-first search

#[cfg(test)]
mod tests;

use std::collections::{HashSet, VecDeque};

use crate::search::types::Path;
use crate::topology::Topology;

/// Find the fewest-steps path from `start` to `goal`, if one exists.
///
/// Frontier entries carry their own copy of the path so far, so the
/// first time the goal is dequeued its path is complete and shortest.
/// Nodes are marked visited when dequeued, not when enqueued, so a
/// node may sit in the frontier more than once with different path
/// prefixes; only the first dequeue expands it.
#[tracing::instrument(level = "debug", skip_all)]
pub fn bfs_shortest_path<T: Topology>(
    topo: &T,
    start: &T::Node,
    goal: &T::Node,
) -> Option<Path<T::Node>> {
    let mut frontier: VecDeque<(T::Node, Path<T::Node>)> = VecDeque::new();
    frontier.push_back((start.clone(), vec![start.clone()]));
    let mut visited: HashSet<T::Node> = HashSet::new();

    while let Some((node, path)) = frontier.pop_front() {
        if node == *goal {
            tracing::debug!(steps = path.len() - 1, "bfs_found");
            return Some(path);
        }
        if !visited.insert(node.clone()) {
            continue;
        }
        for neighbor in topo.neighbors(&node) {
            if !visited.contains(&neighbor) {
                let mut extended = path.clone();
                extended.push(neighbor.clone());
                frontier.push_back((neighbor, extended));
            }
        }
    }

    tracing::debug!(visited = visited.len(), "bfs_exhausted");
    None
}
