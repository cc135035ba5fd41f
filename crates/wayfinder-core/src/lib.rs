//! Wayfinder Core Library
//!
//! Topology adapters and uninformed search algorithms (BFS, DFS, and
//! depth-limited search) for the wayfinder CLI.

pub mod error;
pub mod format;
pub mod logging;
pub mod records;
pub mod samples;
pub mod search;
pub mod topology;
