use std::path::Path;

use anyhow::Result;
use wsgraph_core::workspace_manager::WorkspaceManager;

pub fn execute(manager: &WorkspaceManager, output: Option<&Path>) -> Result<()> {
    if manager.config.changelog_url.is_none() {
        tracing::warn!("changelogUrl is not configured, links will be relative");
    }
    super::emit(&manager.changelog_links(), output)
}
