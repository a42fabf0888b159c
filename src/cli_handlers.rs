use crate::error::GraphError;
use crate::graph::{Graph, topological_layers};
use crate::manifest;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

/// JSON report for the prune command
#[derive(Debug, Serialize)]
struct PruneReport<'a> {
    targets: &'a [String],
    order: Vec<String>,
}

/// Handle the check command
pub fn handle_check(file: &Path) -> Result<()> {
    let graph = manifest::load(file)?;
    if let Some(cycle) = graph.find_cycle() {
        return Err(GraphError::cycle(cycle).into());
    }
    println!("acyclic");
    Ok(())
}

/// Handle the order command
pub fn handle_order(file: &Path, layers: bool, json: bool) -> Result<()> {
    let graph = manifest::load(file)?;

    if layers {
        let layers = topological_layers(&graph)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&layers)?);
        } else {
            for layer in &layers {
                println!("{}", layer.join(" "));
            }
        }
        return Ok(());
    }

    let order = graph.topological_order()?;
    print_order(&order, json)
}

/// Handle the prune command
pub fn handle_prune(file: &Path, targets: &[String], json: bool) -> Result<()> {
    let graph = manifest::load(file)?;
    let order = graph.prune(targets)?.topological_order()?;

    if json {
        let report = PruneReport { targets, order };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    print_order(&order, false)
}

/// Handle the edges command
pub fn handle_edges(file: &Path, targets: &[String]) -> Result<()> {
    let graph = manifest::load(file)?;
    let graph = if targets.is_empty() {
        graph
    } else {
        graph.prune(targets)?
    };
    print_edges(&graph);
    Ok(())
}

fn print_order(order: &[String], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(order)?);
    } else {
        for node in order {
            println!("{node}");
        }
    }
    Ok(())
}

fn print_edges(graph: &Graph<String>) {
    for (from, to) in graph.edges() {
        println!("{from} -> {to}");
    }
}
