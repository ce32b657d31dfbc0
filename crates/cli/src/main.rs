use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use wsgraph_core::workspace_manager::{WorkspaceManager, WorkspaceManagerConfig};

mod commands;

/// wsgraph - dependency graph tooling for scoped pnpm workspaces
#[derive(Parser)]
#[command(name = "wsgraph")]
#[command(about = "Order, draw and document the packages of a pnpm workspace")]
#[command(version)]
struct Cli {
    /// Path to the workspace root (defaults to current directory)
    #[arg(short, long, default_value = ".", global = true)]
    workspace: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show packages as a tree with their internal dependencies
    Graph,
    /// List packages in build order
    Order {
        /// Print the graph as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a flowchart diagram of the internal dependencies
    Diagram {
        /// Write the diagram to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print a markdown list of changelog links
    Changelog {
        /// Write the list to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Convert a JSON file into an `export default ... as const` module
    Metadata {
        /// JSON file to read
        input: PathBuf,
        /// Module file to write
        output: PathBuf,
    },
    /// Print the JSON schema of .wsgraph/workspace.yml
    Schema,
}

fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 if quiet => tracing::Level::ERROR,
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    // RUST_LOG, when set, takes precedence over -v/-q
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(log_level).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_manager(workspace: PathBuf) -> Result<WorkspaceManager> {
    WorkspaceManager::new(WorkspaceManagerConfig {
        workspace_root: workspace,
    })
    .map_err(|e| anyhow::anyhow!("Failed to load workspace: {}", e))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Graph => commands::graph::execute(&load_manager(cli.workspace)?),
        Commands::Order { json } => commands::order::execute(&load_manager(cli.workspace)?, json),
        Commands::Diagram { output } => {
            commands::diagram::execute(&load_manager(cli.workspace)?, output.as_deref())
        }
        Commands::Changelog { output } => {
            commands::changelog::execute(&load_manager(cli.workspace)?, output.as_deref())
        }
        Commands::Metadata { input, output } => commands::metadata::execute(&input, &output),
        Commands::Schema => commands::schema::execute(),
    }
}
