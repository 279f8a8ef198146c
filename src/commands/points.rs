//! `depot points` command
use std::path::Path;

use depot_core::config::LayoutConfig;
use depot_core::error::Result;
use depot_core::format::OutputFormat;
use depot_core::records::{format_header, format_point_record};

use crate::cli::Cli;

/// Execute the points command
pub fn execute(cli: &Cli, path: &Path, layout: &LayoutConfig) -> Result<()> {
    let graph = layout.build_graph()?;
    let points = graph.points();

    match cli.format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = points
                .iter()
                .map(|p| {
                    serde_json::json!({
                        "id": p.id,
                        "x": p.x,
                        "y": p.y,
                        "is_obstacle": p.is_obstacle,
                        "degree": graph.neighbors(&p.id).len(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if points.is_empty() {
                if !cli.quiet {
                    println!("No points in layout");
                }
                return Ok(());
            }
            for p in &points {
                let marker = if p.is_obstacle { " [obstacle]" } else { "" };
                println!(
                    "{} ({}, {}) edges={}{}",
                    p.id,
                    p.x,
                    p.y,
                    graph.neighbors(&p.id).len(),
                    marker
                );
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                format_header(
                    path,
                    "points",
                    &[
                        ("points", graph.point_count().to_string()),
                        ("edges", graph.edge_count().to_string()),
                    ],
                )
            );
            for p in &points {
                println!("{}", format_point_record(p, graph.neighbors(&p.id).len()));
            }
        }
    }
    Ok(())
}
