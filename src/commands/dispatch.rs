//! Command dispatch logic for depot
use std::time::Instant;

use depot_core::bail_usage;
use depot_core::error::Result;
use depot_core::trace_time;

use crate::cli::{Cli, Commands};
use crate::commands::{find, helpers, init, points, route, simulate};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => bail_usage!("no command given (see `depot --help`)"),
        Some(Commands::Init { force }) => {
            init::execute(cli, &helpers::layout_path(cli), *force)
        }
        Some(command) => run_with_layout(cli, command, start),
    }
}

/// Commands that operate on an existing layout file
fn run_with_layout(cli: &Cli, command: &Commands, start: Instant) -> Result<()> {
    let (path, layout) = helpers::load_layout(cli)?;
    trace_time!(start, "load_layout", points = layout.points.len());

    match command {
        Commands::Route { from, to } => route::execute(cli, &path, &layout, from, to),
        Commands::Simulate { process } => simulate::execute(cli, &path, &layout, *process),
        Commands::Find { id } => find::execute(cli, &path, &layout, id),
        Commands::Points => points::execute(cli, &path, &layout),
        Commands::Init { force } => init::execute(cli, &path, *force),
    }
}
