//! `depot route` command
use std::path::Path;

use depot_core::bail_invalid;
use depot_core::config::LayoutConfig;
use depot_core::error::{DepotError, Result};
use depot_core::format::OutputFormat;
use depot_core::graph::{Neighbor, PathResult, RouteGraph};
use depot_core::records::{format_edge_record, format_header, format_point_record};

use crate::cli::Cli;

/// Execute the route command
pub fn execute(cli: &Cli, path: &Path, layout: &LayoutConfig, from: &str, to: &str) -> Result<()> {
    for id in [from, to] {
        if id.trim().is_empty() {
            bail_invalid!("point id", "\"\"");
        }
    }

    let graph = layout.build_graph()?;

    // An unknown id is a caller mistake, not an unreachable target
    for id in [from, to] {
        if !graph.contains(id) {
            return Err(DepotError::unknown_point(id));
        }
    }

    let result = graph.shortest_route(from, to);
    let steps = route_steps(&graph, &result);

    match cli.format {
        OutputFormat::Json => output_json(&result, &steps)?,
        OutputFormat::Human => output_human(cli, &result),
        OutputFormat::Records => output_records(path, &graph, &result, &steps),
    }
    Ok(())
}

/// The cheapest edge used for each hop along the route
fn route_steps(graph: &RouteGraph, result: &PathResult) -> Vec<(String, Neighbor)> {
    result
        .points
        .windows(2)
        .filter_map(|pair| {
            graph
                .neighbors(&pair[0])
                .iter()
                .filter(|n| n.id == pair[1])
                .min_by(|a, b| a.weight.cmp(&b.weight))
                .map(|n| (pair[0].clone(), n.clone()))
        })
        .collect()
}

fn output_human(cli: &Cli, result: &PathResult) {
    if !result.found {
        println!("No route from {} to {}", result.from, result.to);
        return;
    }

    println!("{}", result.points.join(" -> "));
    if !cli.quiet {
        println!(
            "Cost: {} ({} hop{})",
            result.total_cost,
            result.hops(),
            if result.hops() == 1 { "" } else { "s" }
        );
    }
}

fn output_json(result: &PathResult, steps: &[(String, Neighbor)]) -> Result<()> {
    let steps_json: Vec<serde_json::Value> = steps
        .iter()
        .map(|(from, hop)| {
            serde_json::json!({
                "from": from,
                "to": hop.id,
                "weight": hop.weight.value(),
            })
        })
        .collect();

    let output = serde_json::json!({
        "from": result.from,
        "to": result.to,
        "found": result.found,
        "points": result.points,
        "total_cost": result.total_cost,
        "hops": result.hops(),
        "steps": steps_json,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records(path: &Path, graph: &RouteGraph, result: &PathResult, steps: &[(String, Neighbor)]) {
    println!(
        "{}",
        format_header(
            path,
            "route",
            &[
                ("from", result.from.clone()),
                ("to", result.to.clone()),
                ("found", result.found.to_string()),
                ("length", result.hops().to_string()),
                ("cost", result.total_cost.to_string()),
            ],
        )
    );

    for id in &result.points {
        if let Some(point) = graph.point(id) {
            println!("{}", format_point_record(point, graph.neighbors(id).len()));
        }
    }
    for (from, hop) in steps {
        println!("{}", format_edge_record(from, hop));
    }
}
