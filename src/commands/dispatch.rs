//! Command dispatch logic for wayfinder

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::{demo, run};
use crate::commands::run::Invocation;
use wayfinder_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let result = match &cli.command {
        Commands::Bfs(args) => run::execute(cli, Invocation::Bfs, args),
        Commands::Dfs(args) => run::execute(cli, Invocation::Dfs, args),
        Commands::Dls(args) => run::execute(
            cli,
            Invocation::Dls { limit: args.limit },
            &args.search,
        ),
        Commands::Demo => demo::execute(cli),
    };

    tracing::debug!(elapsed = ?start.elapsed(), "dispatch");
    result
}
