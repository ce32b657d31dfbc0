use anyhow::Result;
use colored::*;
use wsgraph_core::print::{pretty_json, INDENT};
use wsgraph_core::workspace_manager::WorkspaceManager;

pub fn execute(manager: &WorkspaceManager, json: bool) -> Result<()> {
    let graph = manager.graph();

    if json {
        println!("{}", pretty_json(graph)?);
        return Ok(());
    }

    println!("{}", "Build order".bold().underline());

    if graph.is_empty() {
        println!("{INDENT}{}", "No packages found".dimmed());
        return Ok(());
    }

    let mut current_tier = None;
    for node in graph {
        if current_tier != Some(node.order) {
            println!("{}", format!("Tier {}", node.order).bold());
            current_tier = Some(node.order);
        }

        let label = format!("{}@{}", node.name, node.version);
        if node.dependencies.is_empty() {
            println!("{INDENT}{}", label.blue().bold());
        } else {
            println!(
                "{INDENT}{} {} {}",
                label.blue().bold(),
                "depends on:".dimmed(),
                node.dependencies.join(", ")
            );
        }
    }

    Ok(())
}
