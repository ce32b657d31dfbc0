//! High-level workspace interface
//!
//! [`WorkspaceManager`] is the entry point the CLI uses. Creating one runs the
//! whole pipeline once: load the configuration, discover package directories,
//! load their manifests and build the dependency [`Graph`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use wsgraph_core::workspace_manager::{WorkspaceManager, WorkspaceManagerConfig};
//! use std::path::PathBuf;
//!
//! # fn example() -> wsgraph_core::types::WsGraphResult<()> {
//! let manager = WorkspaceManager::new(WorkspaceManagerConfig {
//!     workspace_root: PathBuf::from("."),
//! })?;
//!
//! println!("{}", manager.relation_diagram());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use crate::configs::workspace::{load_workspace_config, WorkspaceConfig};
use crate::graph::{topological, Graph};
use crate::manifest::{load_manifests, PackageManifest};
use crate::render::{changelog_links, relation_diagram, short_view};
use crate::sequencer::{GraphSequencer, TieredSequencer};
use crate::types::WsGraphResult;
use crate::workspace::{discover_packages, package_globs, Scope};

/// Configuration for initializing a workspace manager
pub struct WorkspaceManagerConfig {
    pub workspace_root: PathBuf,
}

/// A loaded workspace together with its dependency graph
#[derive(Debug)]
pub struct WorkspaceManager {
    pub root: PathBuf,
    pub config: WorkspaceConfig,
    pub scope: Scope,
    pub package_dirs: Vec<PathBuf>,
    pub manifests: Vec<PackageManifest>,
    pub graph: Graph,
}

impl WorkspaceManager {
    /// Load the workspace at `config.workspace_root` using the default sequencer
    pub fn new(config: WorkspaceManagerConfig) -> WsGraphResult<Self> {
        Self::with_sequencer(config, &TieredSequencer)
    }

    pub fn with_sequencer(
        config: WorkspaceManagerConfig,
        sequencer: &dyn GraphSequencer,
    ) -> WsGraphResult<Self> {
        let root = config.workspace_root;
        let workspace_config = load_workspace_config(&root)?;
        let scope = Scope::new(&workspace_config.scope);

        let package_dirs = Self::discover(&root, &workspace_config)?;
        let manifests = load_manifests(&package_dirs)?;
        let graph = topological(&manifests, &scope, sequencer)?;

        tracing::debug!(
            packages = graph.len(),
            root = %root.display(),
            "built workspace graph"
        );

        Ok(Self {
            root,
            config: workspace_config,
            scope,
            package_dirs,
            manifests,
            graph,
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn short_view(&self) -> String {
        short_view(&self.graph)
    }

    pub fn relation_diagram(&self) -> String {
        relation_diagram(&self.graph, &self.scope)
    }

    pub fn changelog_links(&self) -> String {
        changelog_links(&self.graph, &self.scope, self.config.changelog_url.as_deref())
    }

    fn discover(root: &Path, config: &WorkspaceConfig) -> WsGraphResult<Vec<PathBuf>> {
        let globs = package_globs(root, config)?;
        tracing::debug!(globs = ?globs, "discovering packages");
        discover_packages(root, &globs)
    }
}

/// Build the dependency graph of the workspace rooted at `workspace_root`
pub fn build_graph(workspace_root: &Path) -> WsGraphResult<Graph> {
    let manager = WorkspaceManager::new(WorkspaceManagerConfig {
        workspace_root: workspace_root.to_path_buf(),
    })?;
    Ok(manager.graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::workspace::workspace_config_path;
    use crate::types::{ManifestError, WsGraphError};

    fn write_config(root: &Path, contents: &str) {
        let path = workspace_config_path(root);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    fn write_package(root: &Path, dir: &str, manifest: &str) {
        let package_dir = root.join(dir);
        std::fs::create_dir_all(&package_dir).unwrap();
        std::fs::write(package_dir.join("package.json"), manifest).unwrap();
    }

    fn sample_workspace() -> tempfile::TempDir {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        write_config(
            root,
            "scope: \"@acme\"\nchangelogUrl: https://github.com/acme/tools/blob/main\n",
        );
        std::fs::write(root.join("pnpm-workspace.yaml"), "packages:\n  - packages/*\n").unwrap();
        write_package(
            root,
            "packages/c",
            r#"{ "name": "@acme/c", "version": "3.0.0", "peerDependencies": { "@acme/a": "workspace:^", "@acme/b": "workspace:^" } }"#,
        );
        write_package(
            root,
            "packages/b",
            r#"{ "name": "@acme/b", "version": "2.0.0", "peerDependencies": { "@acme/a": "workspace:^", "react": "^18" } }"#,
        );
        write_package(root, "packages/a", r#"{ "name": "@acme/a", "version": "1.0.0" }"#);
        temp_dir
    }

    #[test]
    fn builds_graph_from_disk() {
        let temp_dir = sample_workspace();
        let graph = build_graph(temp_dir.path()).unwrap();

        let summary: Vec<(&str, usize)> = graph
            .iter()
            .map(|node| (node.name.as_str(), node.order))
            .collect();
        assert_eq!(summary, vec![("@acme/a", 0), ("@acme/b", 1), ("@acme/c", 2)]);
    }

    #[test]
    fn renders_through_manager() {
        let temp_dir = sample_workspace();
        let manager = WorkspaceManager::new(WorkspaceManagerConfig {
            workspace_root: temp_dir.path().to_path_buf(),
        })
        .unwrap();

        assert!(manager
            .relation_diagram()
            .ends_with("c(@acme/c) -.depends on.-> b(@acme/b)"));
        assert!(manager.changelog_links().starts_with(
            "- [@acme/a@1.0.0](./packages/a) - [CHANGELOG](https://github.com/acme/tools/blob/main/packages/a/CHANGELOG.md)"
        ));
        assert_eq!(manager.package_dirs.len(), 3);
    }

    #[test]
    fn invalid_manifest_aborts_the_build() {
        let temp_dir = sample_workspace();
        write_package(temp_dir.path(), "packages/broken", r#"{ "name": "@acme/broken" }"#);

        let err = build_graph(temp_dir.path()).unwrap_err();
        assert!(matches!(err, WsGraphError::Manifest(ManifestError::Shape { .. })));
    }
}
