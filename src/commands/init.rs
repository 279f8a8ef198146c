//! `depot init` command
use std::path::Path;

use depot_core::config::LayoutConfig;
use depot_core::error::{DepotError, Result};
use depot_core::format::OutputFormat;
use depot_core::records::format_header;

use crate::cli::Cli;

/// Execute the init command
pub fn execute(cli: &Cli, path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(DepotError::already_exists(
            "layout",
            format!("{} (use --force to overwrite)", path.display()),
        ));
    }

    let layout = LayoutConfig::default_layout();
    layout.save(path)?;
    tracing::debug!(path = %path.display(), "wrote starter layout");

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "status": "ok",
                "layout": path.display().to_string(),
                "points": layout.points.len(),
                "edges": layout.edges.len(),
                "items": layout.items.len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Wrote starter layout to {}", path.display());
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                format_header(path, "init", &[("status", "ok".to_string())])
            );
        }
    }

    Ok(())
}
