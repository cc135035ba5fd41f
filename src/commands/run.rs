//! Run one search over a topology file

mod human;
mod json;
mod records;

use std::time::Instant;

use crate::cli::{Cli, SearchArgs};
use wayfinder_core::error::{Result, WayfinderError};
use wayfinder_core::format::OutputFormat;
use wayfinder_core::records::escape_quotes;
use wayfinder_core::search::{
    bfs_shortest_path, dfs_find_path, dls_find_path, Algorithm, DlsOutcome, SearchReport,
    TopologyKind,
};
use wayfinder_core::topology::{AdjacencyGraph, Cell, OccupancyGrid, Topology};

/// Which search to run, with the depth limit where one applies.
#[derive(Debug, Clone, Copy)]
pub enum Invocation {
    Bfs,
    Dfs,
    Dls { limit: usize },
}

/// Execute a search command against the topology named in `args`.
pub fn execute(cli: &Cli, invocation: Invocation, args: &SearchArgs) -> Result<()> {
    let start = Instant::now();

    if let Some(path) = &args.source.graph {
        let graph = AdjacencyGraph::from_path(path)?;
        tracing::debug!(elapsed = ?start.elapsed(), "load_topology");

        let report = run_search(
            &graph,
            TopologyKind::Graph,
            invocation,
            args.start.clone(),
            args.goal.clone(),
        );
        render(cli, &report, graph_token)
    } else if let Some(path) = &args.source.grid {
        let grid = OccupancyGrid::from_path(path)?;
        tracing::debug!(elapsed = ?start.elapsed(), "load_topology");

        let start_cell = bounds_checked(&grid, args.start.parse()?)?;
        let goal_cell = bounds_checked(&grid, args.goal.parse()?)?;

        let report = run_search(&grid, TopologyKind::Grid, invocation, start_cell, goal_cell);
        render(cli, &report, grid_token)
    } else {
        // clap's ArgGroup guarantees one source was given
        Err(WayfinderError::UsageError(
            "either --graph or --grid is required".to_string(),
        ))
    }
}

/// Run the selected algorithm and fold the outcome into a report.
pub fn run_search<T: Topology>(
    topo: &T,
    kind: TopologyKind,
    invocation: Invocation,
    start: T::Node,
    goal: T::Node,
) -> SearchReport<T::Node> {
    match invocation {
        Invocation::Bfs => {
            let path = bfs_shortest_path(topo, &start, &goal);
            SearchReport::new(Algorithm::Bfs, kind, start, goal, path)
        }
        Invocation::Dfs => {
            let path = dfs_find_path(topo, &start, &goal);
            SearchReport::new(Algorithm::Dfs, kind, start, goal, path)
        }
        Invocation::Dls { limit } => {
            let DlsOutcome { path, expansions } = dls_find_path(topo, &start, &goal, limit);
            SearchReport::new(Algorithm::Dls, kind, start, goal, path)
                .with_depth_limit(limit, expansions)
        }
    }
}

fn render<N: std::fmt::Display + serde::Serialize>(
    cli: &Cli,
    report: &SearchReport<N>,
    token: impl Fn(&N) -> String,
) -> Result<()> {
    match cli.format {
        OutputFormat::Human => human::output_human(report),
        OutputFormat::Json => json::output_json(report)?,
        OutputFormat::Records => records::output_records(report, token),
    }
    Ok(())
}

/// Records token for a graph label: quoted, since labels may hold
/// spaces or quotes.
pub fn graph_token(label: &String) -> String {
    format!("\"{}\"", escape_quotes(label))
}

/// Records token for a grid cell: a bare `row,col` pair.
pub fn grid_token(cell: &Cell) -> String {
    format!("{},{}", cell.row, cell.col)
}

fn bounds_checked(grid: &OccupancyGrid, cell: Cell) -> Result<Cell> {
    if grid.contains(&cell) {
        Ok(cell)
    } else {
        Err(WayfinderError::CellOutOfBounds {
            row: cell.row,
            col: cell.col,
            rows: grid.rows(),
            cols: grid.cols(),
        })
    }
}

pub use human::output_human;
pub use json::report_value;
pub use records::output_records;
