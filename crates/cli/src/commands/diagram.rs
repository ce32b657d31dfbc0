use std::path::Path;

use anyhow::Result;
use wsgraph_core::workspace_manager::WorkspaceManager;

pub fn execute(manager: &WorkspaceManager, output: Option<&Path>) -> Result<()> {
    super::emit(&manager.relation_diagram(), output)
}
