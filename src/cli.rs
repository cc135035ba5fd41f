//! CLI argument parsing for wayfinder
//!
//! Uses clap derive. Global flags: --format, --quiet, --verbose,
//! --log-level, --log-json.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use wayfinder_core::format::OutputFormat;

/// Wayfinder - uninformed graph search CLI
#[derive(Parser, Debug)]
#[command(name = "wayfinder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, or records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit tracing filter (e.g. debug or wayfinder_core=trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit JSON log lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Breadth-first search: shortest path from START to GOAL
    Bfs(SearchArgs),

    /// Depth-first search: some path from START to GOAL
    Dfs(SearchArgs),

    /// Depth-limited search: path within --limit steps, with expansion count
    Dls(DlsArgs),

    /// Run the built-in sample topologies through all three algorithms
    Demo,
}

/// Where a search's topology comes from: exactly one of a graph file
/// or a grid file.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TopologySource {
    /// JSON graph file mapping each label to its neighbor array
    #[arg(long, value_name = "FILE")]
    pub graph: Option<PathBuf>,

    /// JSON grid file holding rows of 0 (passable) / 1 (blocked)
    #[arg(long, value_name = "FILE")]
    pub grid: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Start node: a label for --graph, row,col for --grid
    pub start: String,

    /// Goal node: a label for --graph, row,col for --grid
    pub goal: String,

    #[command(flatten)]
    pub source: TopologySource,
}

#[derive(Args, Debug)]
pub struct DlsArgs {
    #[command(flatten)]
    pub search: SearchArgs,

    /// Maximum path depth in steps
    #[arg(long, value_name = "N")]
    pub limit: usize,
}

/// Parse output format from string
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
