//! `depot find` command
use std::path::Path;

use depot_core::bail_invalid;
use depot_core::config::LayoutConfig;
use depot_core::error::{DepotError, Result};
use depot_core::format::OutputFormat;
use depot_core::pipeline::Depot;
use depot_core::records::{format_header, format_item_record};

use crate::cli::Cli;

/// Execute the find command: shelve every layout package, then look one up
pub fn execute(cli: &Cli, path: &Path, layout: &LayoutConfig, id: &str) -> Result<()> {
    if id.trim().is_empty() {
        bail_invalid!("item id", "\"\"");
    }

    let mut depot = Depot::from_layout(layout)?;
    depot.process_all();

    let item = depot
        .shelf()
        .find(id)
        .ok_or_else(|| DepotError::ItemNotFound { id: id.to_string() })?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(item)?);
        }
        OutputFormat::Human => {
            println!("{}", item);
        }
        OutputFormat::Records => {
            println!(
                "{}",
                format_header(path, "find", &[("id", item.id.clone())])
            );
            println!("{}", format_item_record(item));
        }
    }
    Ok(())
}
