use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use wsgraph_codemod::{default_transform_path, CodemodOptions, Invocation, Prompter};

#[derive(Parser)]
#[command(name = "wsgraph-codemod")]
#[command(about = "Configure and run the i18next-selector codemod", version)]
struct Cli {
    /// Skip the prompts and use the default options
    #[arg(short, long)]
    yes: bool,

    /// Path to the compiled jscodeshift transform
    #[arg(short, long)]
    transform: Option<PathBuf>,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn transform_path(cli_value: Option<PathBuf>) -> Result<PathBuf> {
    let path = match cli_value {
        Some(path) => path,
        None => {
            let exe = std::env::current_exe().context("Failed to locate the codemod binary")?;
            default_transform_path(&exe)
        }
    };

    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(log_level).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let transform = transform_path(cli.transform)?;

    let options = if cli.yes {
        CodemodOptions::default()
    } else {
        println!("{}", "Configure i18next-selector codemod".bold().underline());
        Prompter::new(io::stdin().lock(), io::stdout())
            .collect_options()
            .context("Failed to read codemod options")?
    };

    let invocation = Invocation::jscodeshift(&options, &transform);
    println!("{}\n {}", "Executing:".bold(), invocation.command_line().cyan());

    invocation
        .run()
        .map_err(|e| anyhow::anyhow!("Codemod failed: {}", e))?;

    println!(
        "{} {}",
        "✓".green().bold(),
        "Codemod completed successfully!".green().bold()
    );
    Ok(())
}
