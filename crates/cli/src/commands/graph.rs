use anyhow::Result;
use colored::*;
use wsgraph_core::workspace_manager::WorkspaceManager;

pub fn execute(manager: &WorkspaceManager) -> Result<()> {
    println!("{}", "Workspace Dependency Graph:".bold().underline());

    let graph = manager.graph();
    if graph.is_empty() {
        println!("  {}", "No packages found".dimmed());
        return Ok(());
    }

    println!("{}", manager.short_view());

    let tiers = graph.iter().map(|node| node.order).max().map_or(0, |max| max + 1);
    println!();
    println!(
        "{}",
        format!("{} packages in {} tiers", graph.len(), tiers).dimmed()
    );

    Ok(())
}
