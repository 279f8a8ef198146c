//! Helper functions shared across commands

use std::env;
use std::path::PathBuf;

use depot_core::config::{resolve_layout_path, LayoutConfig};
use depot_core::error::Result;

use crate::cli::Cli;

/// Resolve the layout file path from --root / --layout / DEPOT_LAYOUT
pub fn layout_path(cli: &Cli) -> PathBuf {
    let root = cli
        .root
        .clone()
        .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    resolve_layout_path(cli.layout.as_deref(), &root)
}

/// Load the layout named on the command line
pub fn load_layout(cli: &Cli) -> Result<(PathBuf, LayoutConfig)> {
    let path = layout_path(cli);
    let layout = LayoutConfig::load(&path)?;
    Ok((path, layout))
}

