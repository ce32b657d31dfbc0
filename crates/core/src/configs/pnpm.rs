use std::path::Path;

use serde::Deserialize;

use crate::types::{WsGraphError, WsGraphResult};

pub const PNPM_WORKSPACE_FILE: &str = "pnpm-workspace.yaml";

/// The subset of `pnpm-workspace.yaml` wsgraph reads
#[derive(Debug, Deserialize, Default)]
pub struct PnpmWorkspaceConfig {
    #[serde(default)]
    pub packages: Vec<String>,
}

pub fn parse_pnpm_workspace(yaml_str: &str) -> WsGraphResult<PnpmWorkspaceConfig> {
    let config: Option<PnpmWorkspaceConfig> = serde_yaml::from_str(yaml_str)?;
    Ok(config.unwrap_or_default())
}

/// Read `pnpm-workspace.yaml` from the root, `None` when the file does not exist
pub fn load_pnpm_workspace(workspace_root: &Path) -> WsGraphResult<Option<PnpmWorkspaceConfig>> {
    let path = workspace_root.join(PNPM_WORKSPACE_FILE);
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)?;
    parse_pnpm_workspace(&content).map(Some).map_err(|e| {
        WsGraphError::Config(format!("Failed to parse {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_package_globs_and_ignores_other_keys() {
        let config = parse_pnpm_workspace(
            "packages:\n  - 'packages/*'\n  - '!packages/legacy'\nonlyBuiltDependencies:\n  - esbuild\n",
        )
        .unwrap();
        assert_eq!(config.packages, vec!["packages/*", "!packages/legacy"]);
    }

    #[test]
    fn empty_file_has_no_packages() {
        assert!(parse_pnpm_workspace("").unwrap().packages.is_empty());
    }

    #[test]
    fn absent_file_is_none() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(load_pnpm_workspace(temp_dir.path()).unwrap().is_none());
    }
}
