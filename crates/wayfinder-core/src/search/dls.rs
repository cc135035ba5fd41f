//! Depth-limited search


use crate::search::types::Path;
use crate::topology::Topology;

/// Result of a depth-limited search: the path, if one was found within
/// the limit, plus the number of node expansions performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DlsOutcome<N> {
    pub path: Option<Path<N>>,
    pub expansions: usize,
}

/// Depth-first search bounded by a maximum path depth.
///
/// An expansion is counted when a popped node is not the goal and its
/// depth is below the limit, right before its neighbors are generated;
/// goal pops and at-limit pops are never counted.
///
/// There is no global visited set. Cycle avoidance is path-local: a
/// neighbor already on the current path is skipped, but the same node
/// may be reached again along a different path within the depth bound.
/// A returned path therefore never repeats a node and has at most
/// `limit` steps.
#[tracing::instrument(level = "debug", skip_all, fields(limit))]
pub fn dls_find_path<T: Topology>(
    topo: &T,
    start: &T::Node,
    goal: &T::Node,
    limit: usize,
) -> DlsOutcome<T::Node> {
    let mut stack: Vec<(T::Node, Path<T::Node>, usize)> =
        vec![(start.clone(), vec![start.clone()], 0)];
    let mut expansions = 0;

    while let Some((node, path, depth)) = stack.pop() {
        if node == *goal {
            tracing::debug!(steps = path.len() - 1, expansions, "dls_found");
            return DlsOutcome {
                path: Some(path),
                expansions,
            };
        }
        if depth == limit {
            continue;
        }
        expansions += 1;

        for neighbor in topo.neighbors(&node).into_iter().rev() {
            if !path.contains(&neighbor) {
                let mut extended = path.clone();
                extended.push(neighbor.clone());
                stack.push((neighbor, extended, depth + 1));
            }
        }
    }

    tracing::debug!(expansions, "dls_exhausted");
    DlsOutcome {
        path: None,
        expansions,
    }
}
