//! Demo command: run the built-in sample topologies through all three
//! algorithms in the fixed sequence (BFS and DFS on the graph, BFS and
//! DFS on the grid, then DLS on the grid at limits 4 and 8).

use crate::cli::Cli;
use crate::commands::run::{
    graph_token, grid_token, output_human, output_records, report_value, run_search, Invocation,
};
use wayfinder_core::error::Result;
use wayfinder_core::format::OutputFormat;
use wayfinder_core::samples::{
    sample_graph, sample_grid, GRAPH_GOAL, GRAPH_START, GRID_GOAL, GRID_START,
};
use wayfinder_core::search::{SearchReport, TopologyKind};
use wayfinder_core::topology::Cell;

const DLS_LIMITS: [usize; 2] = [4, 8];

pub fn execute(cli: &Cli) -> Result<()> {
    let graph = sample_graph();
    let grid = sample_grid();

    let graph_reports: Vec<SearchReport<String>> = [Invocation::Bfs, Invocation::Dfs]
        .into_iter()
        .map(|invocation| {
            run_search(
                &graph,
                TopologyKind::Graph,
                invocation,
                GRAPH_START.to_string(),
                GRAPH_GOAL.to_string(),
            )
        })
        .collect();

    let grid_reports: Vec<SearchReport<Cell>> = [Invocation::Bfs, Invocation::Dfs]
        .into_iter()
        .map(|invocation| run_search(&grid, TopologyKind::Grid, invocation, GRID_START, GRID_GOAL))
        .collect();

    let dls_reports: Vec<SearchReport<Cell>> = DLS_LIMITS
        .into_iter()
        .map(|limit| {
            run_search(
                &grid,
                TopologyKind::Grid,
                Invocation::Dls { limit },
                GRID_START,
                GRID_GOAL,
            )
        })
        .collect();

    match cli.format {
        OutputFormat::Human => {
            output_demo_human(cli, &graph_reports, &grid_reports, &dls_reports);
        }
        OutputFormat::Json => {
            let mut values = Vec::new();
            for report in &graph_reports {
                values.push(report_value(report)?);
            }
            for report in grid_reports.iter().chain(&dls_reports) {
                values.push(report_value(report)?);
            }
            println!("{}", serde_json::to_string_pretty(&values)?);
        }
        OutputFormat::Records => {
            for report in &graph_reports {
                output_records(report, graph_token);
            }
            for report in grid_reports.iter().chain(&dls_reports) {
                output_records(report, grid_token);
            }
        }
    }

    Ok(())
}

fn output_demo_human(
    cli: &Cli,
    graph_reports: &[SearchReport<String>],
    grid_reports: &[SearchReport<Cell>],
    dls_reports: &[SearchReport<Cell>],
) {
    if !cli.quiet {
        println!("Uninformed search demo");
        println!("------------------------------------------------");
        println!("===== GRAPH =====");
    }
    for report in graph_reports {
        output_human(report);
    }

    if !cli.quiet {
        println!("===== GRID =====");
    }
    for report in grid_reports {
        output_human(report);
    }

    if !cli.quiet {
        println!("===== DEPTH-LIMITED =====");
    }
    for report in dls_reports {
        output_human(report);
    }
}
