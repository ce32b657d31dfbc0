//! wsgraph Core Library
//!
//! Tooling for pnpm-style workspaces whose internal packages share a name scope
//! (for example `@acme/`). It discovers the workspace packages, loads their
//! `package.json` manifests, orders them into build tiers and renders the
//! result for humans.
//!
//! ## Architecture
//!
//! - [`workspace_manager`] - High-level entry point running the whole pipeline
//! - [`configs`] - `.wsgraph/workspace.yml` and `pnpm-workspace.yaml` parsing
//! - [`workspace`] - Internal scope, dependency filtering and package discovery
//! - [`manifest`] - `package.json` loading and validation
//! - [`sequencer`] - Tiered topological sequencing with cycle detection
//! - [`graph`] - Assembly of the ordered [`Graph`]
//! - [`render`] - Tree, flowchart and changelog renderers
//! - [`print`] - Stateless ANSI console formatting
//! - [`transform`] - Identifier and JSON module generation helpers
//! - [`types`] - Error types and result alias
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! # fn example() -> wsgraph_core::types::WsGraphResult<()> {
//! let graph = wsgraph_core::build_graph(Path::new("."))?;
//! for node in &graph {
//!     println!("{} {}@{}", node.order, node.name, node.version);
//! }
//! # Ok(())
//! # }
//! ```

pub mod configs;
pub mod graph;
pub mod manifest;
pub mod print;
pub mod render;
pub mod sequencer;
pub mod transform;
pub mod types;
pub mod workspace;
pub mod workspace_manager;

#[cfg(test)]
mod fixtures;

// Re-export the main types for easier usage
pub use graph::{Graph, Node};
pub use types::{ManifestError, WsGraphError, WsGraphResult};
pub use workspace_manager::{build_graph, WorkspaceManager, WorkspaceManagerConfig};
