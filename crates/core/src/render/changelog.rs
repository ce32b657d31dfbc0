use crate::graph::{Graph, Node};
use crate::workspace::Scope;

/// `[name@version](./packages/<short>) - [CHANGELOG](<base>/packages/<short>/CHANGELOG.md)`
pub fn changelog_line_item(node: &Node, scope: &Scope, base_url: &str) -> String {
    let short = scope.short_name(&node.name);
    format!(
        "[{}@{}](./packages/{short}) - [CHANGELOG]({}/packages/{short}/CHANGELOG.md)",
        node.name,
        node.version,
        base_url.trim_end_matches('/'),
    )
}

/// A markdown list linking every package to its changelog, in graph order
///
/// Without a base URL the changelog links are relative to the repository root.
pub fn changelog_links(graph: &Graph, scope: &Scope, base_url: Option<&str>) -> String {
    let base_url = base_url.unwrap_or(".");
    graph
        .iter()
        .map(|node| format!("- {}", changelog_line_item(node, scope, base_url)))
        .collect::<Vec<_>>()
        .join("\n")
}
