use crate::graph::{Graph, Node};
use crate::workspace::Scope;

const DIAGRAM_HEADER: &str = "flowchart TD";
const EDGE: &str = "-.->";
const LABELLED_EDGE: &str = "-.depends on.->";
const LINE_SEPARATOR: &str = "\n    ";

/// `core(@acme/core)`: short name as the node id, full name as its label
fn node_label(scope: &Scope, name: &str) -> String {
    format!("{}({})", scope.short_name(name), name)
}

fn relations(scope: &Scope, node: &Node) -> Vec<String> {
    if node.dependencies.is_empty() {
        return vec![node_label(scope, &node.name)];
    }

    node.dependencies
        .iter()
        .map(|dep| {
            format!(
                "{} {EDGE} {}",
                node_label(scope, &node.name),
                node_label(scope, dep)
            )
        })
        .collect()
}

/// Flowchart source with one dashed edge per internal dependency
///
/// Packages without dependencies appear as standalone nodes. The final edge is
/// labelled "depends on" so the diagram reads as a legend.
pub fn relation_diagram(graph: &Graph, scope: &Scope) -> String {
    let mut lines: Vec<String> = graph.iter().flat_map(|node| relations(scope, node)).collect();

    if let Some(last) = lines.last_mut() {
        *last = last.replacen(EDGE, LABELLED_EDGE, 1);
    }

    let mut out = String::from(DIAGRAM_HEADER);
    for line in &lines {
        out.push_str(LINE_SEPARATOR);
        out.push_str(line);
    }
    out
}
