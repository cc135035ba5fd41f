//! Shared search result types

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::WayfinderError;

/// An ordered node sequence from start to goal, inclusive.
/// Length in steps is `len() - 1`.
pub type Path<N> = Vec<N>;

/// The search algorithm that produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dls,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "BFS"),
            Algorithm::Dfs => write!(f, "DFS"),
            Algorithm::Dls => write!(f, "DLS"),
        }
    }
}

impl Algorithm {
    /// Lowercase identifier for machine formats.
    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dls => "dls",
        }
    }
}

impl FromStr for Algorithm {
    type Err = WayfinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dls" => Ok(Algorithm::Dls),
            other => Err(WayfinderError::UsageError(format!(
                "unknown algorithm: {} (expected: bfs, dfs, or dls)",
                other
            ))),
        }
    }
}

/// Which topology family a search ran over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TopologyKind {
    Graph,
    Grid,
}

impl fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopologyKind::Graph => write!(f, "graph"),
            TopologyKind::Grid => write!(f, "grid"),
        }
    }
}

impl TopologyKind {
    /// Unit word for path length in human output.
    pub fn step_word(&self) -> &'static str {
        match self {
            TopologyKind::Graph => "edges",
            TopologyKind::Grid => "moves",
        }
    }
}

/// The outcome of one search invocation, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport<N> {
    pub algorithm: Algorithm,
    pub topology: TopologyKind,
    pub start: N,
    pub goal: N,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Path<N>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expansions: Option<usize>,
}

impl<N> SearchReport<N> {
    pub fn new(
        algorithm: Algorithm,
        topology: TopologyKind,
        start: N,
        goal: N,
        path: Option<Path<N>>,
    ) -> Self {
        let steps = path.as_ref().map(|p| p.len().saturating_sub(1));
        SearchReport {
            algorithm,
            topology,
            start,
            goal,
            found: path.is_some(),
            path,
            steps,
            limit: None,
            expansions: None,
        }
    }

    pub fn with_depth_limit(mut self, limit: usize, expansions: usize) -> Self {
        self.limit = Some(limit);
        self.expansions = Some(expansions);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!("bfs".parse::<Algorithm>().unwrap(), Algorithm::Bfs);
        assert_eq!("DLS".parse::<Algorithm>().unwrap(), Algorithm::Dls);
        assert!("astar".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_report_steps() {
        let report = SearchReport::new(
            Algorithm::Bfs,
            TopologyKind::Graph,
            "A",
            "C",
            Some(vec!["A", "B", "C"]),
        );
        assert!(report.found);
        assert_eq!(report.steps, Some(2));

        let absent = SearchReport::new(Algorithm::Bfs, TopologyKind::Graph, "A", "Z", None);
        assert!(!absent.found);
        assert_eq!(absent.steps, None);
    }

    #[test]
    fn test_report_json_shape() {
        let report = SearchReport::new(
            Algorithm::Dls,
            TopologyKind::Graph,
            "A",
            "A",
            Some(vec!["A"]),
        )
        .with_depth_limit(0, 0);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["algorithm"], "dls");
        assert_eq!(json["topology"], "graph");
        assert_eq!(json["steps"], 0);
        assert_eq!(json["limit"], 0);
        assert_eq!(json["expansions"], 0);
    }
}
