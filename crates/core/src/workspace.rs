use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use serde::Serialize;

use crate::configs::pnpm::load_pnpm_workspace;
use crate::configs::workspace::WorkspaceConfig;
use crate::manifest::{PackageManifest, MANIFEST_FILE};
use crate::types::{WsGraphError, WsGraphResult};

const DEFAULT_PACKAGE_GLOBS: &[&str] = &["packages/*"];
const SKIPPED_DIRS: &[&str] = &[".git", "target", "node_modules"];

/// The reserved name prefix shared by every package of this workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    prefix: String,
}

impl Scope {
    /// Accepts `@acme` as well as `@acme/`
    pub fn new(scope: &str) -> Self {
        let trimmed = scope.trim().trim_end_matches('/');
        Self {
            prefix: format!("{trimmed}/"),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn is_internal(&self, dependency: &str) -> bool {
        dependency.starts_with(&self.prefix)
    }

    /// `@acme/core` becomes `core`; names outside the scope are returned as-is
    pub fn short_name<'a>(&self, name: &'a str) -> &'a str {
        name.strip_prefix(self.prefix.as_str()).unwrap_or(name)
    }
}

/// A package reduced to what graph construction needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workspace {
    pub name: String,
    pub version: String,
    /// Internal dependencies only, in manifest order
    pub dependencies: Vec<String>,
}

impl Workspace {
    pub fn from_manifest(manifest: &PackageManifest, scope: &Scope) -> Self {
        let declared = manifest
            .peer_dependencies
            .iter()
            .map(|dep| dep.name.clone())
            .collect::<Vec<_>>();

        Self {
            name: manifest.name.clone(),
            version: manifest.version.clone(),
            dependencies: filter_internal(scope, &declared),
        }
    }
}

/// Keep only dependencies inside the internal scope, preserving order
pub fn filter_internal(scope: &Scope, dependencies: &[String]) -> Vec<String> {
    dependencies
        .iter()
        .filter(|dep| scope.is_internal(dep))
        .cloned()
        .collect()
}

/// Package globs from the config, then `pnpm-workspace.yaml`, then the default
pub fn package_globs(
    workspace_root: &Path,
    config: &WorkspaceConfig,
) -> WsGraphResult<Vec<String>> {
    if let Some(packages) = config.packages.as_ref().filter(|p| !p.is_empty()) {
        return Ok(packages.clone());
    }

    if let Some(pnpm) = load_pnpm_workspace(workspace_root)? {
        if !pnpm.packages.is_empty() {
            return Ok(pnpm.packages);
        }
    }

    Ok(DEFAULT_PACKAGE_GLOBS.iter().map(|s| s.to_string()).collect())
}

fn build_glob_sets(patterns: &[String]) -> WsGraphResult<(GlobSet, GlobSet)> {
    let mut include_builder = GlobSetBuilder::new();
    let mut exclude_builder = GlobSetBuilder::new();

    for pattern in patterns {
        let (builder, raw) = match pattern.strip_prefix('!') {
            Some(rest) => (&mut exclude_builder, rest),
            None => (&mut include_builder, pattern.as_str()),
        };
        let normalized = raw.trim_start_matches("./").trim_end_matches('/');
        let glob = GlobBuilder::new(normalized)
            .literal_separator(true)
            .build()
            .map_err(|e| WsGraphError::Config(format!("Invalid package glob '{pattern}': {e}")))?;
        builder.add(glob);
    }

    let include_set = include_builder
        .build()
        .map_err(|e| WsGraphError::Config(format!("Invalid package globs: {e}")))?;
    let exclude_set = exclude_builder
        .build()
        .map_err(|e| WsGraphError::Config(format!("Invalid package globs: {e}")))?;
    Ok((include_set, exclude_set))
}

/// Walk the workspace and return every package directory matched by `patterns`
///
/// A directory counts when it matches an include glob, matches no `!` glob and
/// holds a `package.json`. The result is sorted by path.
pub fn discover_packages(workspace_root: &Path, patterns: &[String]) -> WsGraphResult<Vec<PathBuf>> {
    let (include_set, exclude_set) = build_glob_sets(patterns)?;

    let mut packages = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back(workspace_root.to_path_buf());

    while let Some(current_dir) = queue.pop_front() {
        let entries = match std::fs::read_dir(&current_dir) {
            Ok(entries) => entries,
            Err(e) if current_dir == workspace_root => return Err(e.into()),
            Err(e) => {
                tracing::debug!(path = %current_dir.display(), error = %e, "skipping unreadable directory");
                continue;
            }
        };
        for entry in entries.flatten() {
            let path = entry.path();
            // `DirEntry::file_type` does not follow symlinks
            let is_dir = entry.file_type().is_ok_and(|file_type| file_type.is_dir());
            if !is_dir {
                continue;
            }

            let skipped = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| SKIPPED_DIRS.contains(&n));
            if skipped {
                continue;
            }

            let relative_path = path.strip_prefix(workspace_root).unwrap_or(&path);
            if include_set.is_match(relative_path)
                && !exclude_set.is_match(relative_path)
                && path.join(MANIFEST_FILE).is_file()
            {
                tracing::debug!(path = %relative_path.display(), "discovered package");
                packages.push(path.clone());
            }

            queue.push_back(path);
        }
    }

    packages.sort();
    Ok(packages)
}
