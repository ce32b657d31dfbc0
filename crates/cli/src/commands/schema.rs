use anyhow::Result;
use wsgraph_core::configs::workspace::WorkspaceConfig;
use wsgraph_core::print::pretty_json;

pub fn execute() -> Result<()> {
    let schema = schemars::schema_for!(WorkspaceConfig);
    println!("{}", pretty_json(&schema)?);
    Ok(())
}
