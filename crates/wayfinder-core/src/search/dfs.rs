//! Depth-first search

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use crate::search::types::Path;
use crate::topology::Topology;

/// Find some path from `start` to `goal`, not necessarily shortest.
///
/// Neighbors are pushed in reverse enumeration order so the stack pops
/// the first-listed neighbor first: a leftmost-first traversal that is
/// identical for identical inputs. Visited marking happens on pop,
/// matching [`bfs_shortest_path`](crate::search::bfs_shortest_path).
#[tracing::instrument(level = "debug", skip_all)]
pub fn dfs_find_path<T: Topology>(
    topo: &T,
    start: &T::Node,
    goal: &T::Node,
) -> Option<Path<T::Node>> {
    let mut stack: Vec<(T::Node, Path<T::Node>)> = vec![(start.clone(), vec![start.clone()])];
    let mut visited: HashSet<T::Node> = HashSet::new();

    while let Some((node, path)) = stack.pop() {
        if node == *goal {
            tracing::debug!(steps = path.len() - 1, "dfs_found");
            return Some(path);
        }
        if !visited.insert(node.clone()) {
            continue;
        }
        for neighbor in topo.neighbors(&node).into_iter().rev() {
            if !visited.contains(&neighbor) {
                let mut extended = path.clone();
                extended.push(neighbor.clone());
                stack.push((neighbor, extended));
            }
        }
    }

    tracing::debug!(visited = visited.len(), "dfs_exhausted");
    None
}
