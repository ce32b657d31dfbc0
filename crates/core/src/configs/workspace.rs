use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::{WsGraphError, WsGraphResult};

/// Directory holding wsgraph configuration, relative to the workspace root
pub const CONFIG_DIR: &str = ".wsgraph";
/// Workspace configuration file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "workspace.yml";

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WorkspaceConfig {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Name scope shared by every internal package, e.g. `@acme`.
    pub scope: String,
    /// Glob patterns for package directories. Falls back to `pnpm-workspace.yaml`.
    pub packages: Option<Vec<String>>,
    /// Base URL that changelog links are built from, e.g. `https://github.com/acme/repo/blob/main`.
    pub changelog_url: Option<String>,
}

pub fn parse_workspace_config(yaml_str: &str) -> WsGraphResult<WorkspaceConfig> {
    let config: WorkspaceConfig = serde_yaml::from_str(yaml_str)?;
    Ok(config)
}

pub fn workspace_config_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join(CONFIG_DIR).join(CONFIG_FILE)
}

pub fn load_workspace_config(workspace_root: &Path) -> WsGraphResult<WorkspaceConfig> {
    let path = workspace_config_path(workspace_root);
    let content = std::fs::read_to_string(&path).map_err(|e| {
        WsGraphError::Config(format!(
            "Failed to read workspace config {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_workspace_config(&content).map_err(|e| {
        WsGraphError::Config(format!(
            "Failed to parse workspace config {}: {}",
            path.display(),
            e
        ))
    })
}
