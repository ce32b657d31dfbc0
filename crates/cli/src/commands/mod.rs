use std::path::Path;

use anyhow::{Context, Result};
use colored::*;

pub mod changelog;
pub mod diagram;
pub mod graph;
pub mod metadata;
pub mod order;
pub mod schema;

/// Print rendered text, or write it to `output` when given
pub fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, format!("{text}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "{} {}",
                "✓".green().bold(),
                format!("Wrote {}", path.display()).green()
            );
        }
        None => println!("{text}"),
    }
    Ok(())
}

/// Whether coloured output is currently enabled
pub fn colorize() -> bool {
    colored::control::SHOULD_COLORIZE.should_colorize()
}
