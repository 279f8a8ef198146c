//! CLI argument parsing for depot
//!
//! Global flags: --root, --layout, --format, --quiet, --verbose

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use depot_core::format::OutputFormat;

/// Depot - conveyor, shelf and route planner for a warehouse floor
#[derive(Parser, Debug)]
#[command(name = "depot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the layout file
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Layout file (default: depot.toml under the root)
    #[arg(long, global = true, env = "DEPOT_LAYOUT")]
    pub layout: Option<PathBuf>,

    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `depot_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a starter layout file
    Init {
        /// Overwrite an existing layout
        #[arg(long)]
        force: bool,
    },

    /// Find the cheapest route between two points
    Route {
        /// Starting point id
        from: String,

        /// Destination point id
        to: String,
    },

    /// Receive the layout's packages and process them onto the shelf
    Simulate {
        /// Process at most this many packages (default: all)
        #[arg(long, short = 'n')]
        process: Option<usize>,
    },

    /// Look up a shelved package by id
    Find {
        /// Package id
        id: String,
    },

    /// List floor points
    Points,
}
