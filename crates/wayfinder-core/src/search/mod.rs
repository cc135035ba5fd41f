//! Uninformed search algorithms
//!
//! All three searches are generic over a [`Topology`](crate::topology::Topology)
//! and allocate their frontier and bookkeeping per call; nothing
//! persists between invocations.

mod bfs;
mod dfs;
mod dls;
mod types;

pub use bfs::bfs_shortest_path;
pub use dfs::dfs_find_path;
pub use dls::{dls_find_path, DlsOutcome};
pub use types::{Algorithm, Path, SearchReport, TopologyKind};
