use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use chrono::Local;
use colored::*;
use wsgraph_core::print::{format_elapsed, local_time, task_heading};
use wsgraph_core::transform::to_metadata;

pub fn execute(input: &Path, output: &Path) -> Result<()> {
    let heading = format!(
        "Generating {} ({})",
        output.display(),
        local_time(&Local::now())
    );
    print!("{}", task_heading(&heading, super::colorize()));

    let started = Instant::now();
    to_metadata(input, output)
        .map_err(|e| anyhow::anyhow!("Failed to generate metadata: {}", e))?;

    println!(
        "{} {}",
        "✓".green().bold(),
        format!(
            "Wrote {} in {}s",
            output.display(),
            format_elapsed(started.elapsed())
        )
        .green()
    );

    Ok(())
}
