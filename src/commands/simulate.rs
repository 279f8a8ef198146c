//! `depot simulate` command
use std::path::Path;

use depot_core::config::LayoutConfig;
use depot_core::error::Result;
use depot_core::format::OutputFormat;
use depot_core::pipeline::{Depot, ProcessOutcome};
use depot_core::records::{format_header, format_item_record};

use crate::cli::Cli;

/// Execute the simulate command
pub fn execute(
    cli: &Cli,
    path: &Path,
    layout: &LayoutConfig,
    process: Option<usize>,
) -> Result<()> {
    let mut depot = Depot::from_layout(layout)?;
    let received = depot.belt().len();
    let outcomes = depot.process(process);

    tracing::debug!(
        received,
        processed = outcomes.len(),
        shelved = depot.shelf().len(),
        "simulate"
    );

    match cli.format {
        OutputFormat::Json => output_json(&depot, received, &outcomes)?,
        OutputFormat::Human => output_human(cli, &depot, received, &outcomes),
        OutputFormat::Records => output_records(path, &depot, &outcomes),
    }
    Ok(())
}

fn status(outcome: &ProcessOutcome) -> &'static str {
    if outcome.is_filed() {
        "filed"
    } else {
        "duplicate"
    }
}

fn output_human(cli: &Cli, depot: &Depot, received: usize, outcomes: &[ProcessOutcome]) {
    if !cli.quiet {
        println!("Received {} package(s)", received);
        for outcome in outcomes {
            match outcome {
                ProcessOutcome::Filed(item) => println!("Filed: {}", item),
                ProcessOutcome::Duplicate(item) => println!("Dropped duplicate: {}", item),
            }
        }
        if depot.belt().is_empty() {
            println!("Belt is empty.");
        }
        println!();
    }

    println!("Belt ({}):", depot.belt().len());
    for item in depot.belt() {
        println!("  {}", item);
    }
    println!("Shelf ({}):", depot.shelf().len());
    for item in depot.shelf().in_order() {
        println!("  {}", item);
    }
}

fn output_json(depot: &Depot, received: usize, outcomes: &[ProcessOutcome]) -> Result<()> {
    let processed: Vec<serde_json::Value> = outcomes
        .iter()
        .map(|outcome| {
            serde_json::json!({
                "id": outcome.item().id,
                "status": status(outcome),
            })
        })
        .collect();

    let output = serde_json::json!({
        "received": received,
        "processed": processed,
        "belt": depot.belt().to_ordered_vec(),
        "shelf": depot.shelf().in_order_vec(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records(path: &Path, depot: &Depot, outcomes: &[ProcessOutcome]) {
    println!(
        "{}",
        format_header(
            path,
            "simulate",
            &[
                ("processed", outcomes.len().to_string()),
                ("belt", depot.belt().len().to_string()),
                ("shelf", depot.shelf().len().to_string()),
            ],
        )
    );

    for outcome in outcomes {
        println!("D {} {}", status(outcome), outcome.item().id);
    }
    println!("S belt");
    for item in depot.belt() {
        println!("{}", format_item_record(item));
    }
    println!("S shelf");
    for item in depot.shelf().in_order() {
        println!("{}", format_item_record(item));
    }
}
