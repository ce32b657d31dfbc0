//! Graph assembly
//!
//! Joins sequencer chunks back to the package records and produces the
//! deterministic [`Graph`] linearization every renderer consumes.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::manifest::PackageManifest;
use crate::sequencer::{Chunks, GraphSequencer};
use crate::types::{WsGraphError, WsGraphResult};
use crate::workspace::{Scope, Workspace};

/// A package annotated with its build tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub name: String,
    pub version: String,
    pub dependencies: Vec<String>,
    pub order: usize,
}

/// Packages sorted by `order`, then by `name`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.name == name)
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Resolve every chunk entry against `index` and sort the result
///
/// Fails without producing a graph when a chunk names a package the index does
/// not know about.
pub fn assemble(chunks: &Chunks, index: &HashMap<String, Workspace>) -> WsGraphResult<Graph> {
    let mut nodes = Vec::with_capacity(index.len());

    for (order, chunk) in chunks.iter().enumerate() {
        for name in chunk {
            let workspace = index
                .get(name)
                .ok_or_else(|| WsGraphError::UnrecognizedPackage(name.clone()))?;
            nodes.push(Node {
                name: workspace.name.clone(),
                version: workspace.version.clone(),
                dependencies: workspace.dependencies.clone(),
                order,
            });
        }
    }

    nodes.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));
    Ok(Graph { nodes })
}

/// Filter, sequence and assemble the given manifests
pub fn topological(
    manifests: &[PackageManifest],
    scope: &Scope,
    sequencer: &dyn GraphSequencer,
) -> WsGraphResult<Graph> {
    let workspaces: Vec<Workspace> = manifests
        .iter()
        .map(|manifest| Workspace::from_manifest(manifest, scope))
        .collect();

    let index: HashMap<String, Workspace> = workspaces
        .iter()
        .map(|ws| (ws.name.clone(), ws.clone()))
        .collect();

    for ws in &workspaces {
        for dep in ws.dependencies.iter().filter(|dep| !index.contains_key(*dep)) {
            tracing::warn!(
                package = %ws.name,
                dependency = %dep,
                "internal dependency is not a workspace package"
            );
        }
    }

    let dependencies: BTreeMap<String, Vec<String>> = workspaces
        .into_iter()
        .map(|ws| (ws.name, ws.dependencies))
        .collect();

    let chunks = sequencer.sequence(&dependencies)?;
    tracing::debug!(chunks = chunks.len(), "sequenced workspace");

    assemble(&chunks, &index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::manifest;
    use crate::sequencer::TieredSequencer;

    fn names(graph: &Graph) -> Vec<&str> {
        graph.iter().map(|node| node.name.as_str()).collect()
    }

    /// Fixed sequencer output, for exercising the assembler in isolation
    struct FixedSequencer(Chunks);

    impl GraphSequencer for FixedSequencer {
        fn sequence(&self, _: &BTreeMap<String, Vec<String>>) -> WsGraphResult<Chunks> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn chain_is_ordered_by_tier() {
        let manifests = vec![
            manifest("@acme/c", &["@acme/a", "@acme/b"]),
            manifest("@acme/a", &[]),
            manifest("@acme/b", &["@acme/a", "react"]),
        ];

        let graph = topological(&manifests, &Scope::new("@acme"), &TieredSequencer).unwrap();

        assert_eq!(names(&graph), vec!["@acme/a", "@acme/b", "@acme/c"]);
        let orders: Vec<usize> = graph.iter().map(|n| n.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
        assert_eq!(
            graph.get("@acme/b").unwrap().dependencies,
            vec!["@acme/a".to_string()]
        );
    }

    #[test]
    fn dependencies_never_follow_dependents() {
        let manifests = vec![
            manifest("@acme/app", &["@acme/ui", "@acme/utils"]),
            manifest("@acme/ui", &["@acme/core", "@acme/theme"]),
            manifest("@acme/theme", &["@acme/core"]),
            manifest("@acme/core", &[]),
            manifest("@acme/utils", &[]),
        ];

        let graph = topological(&manifests, &Scope::new("@acme"), &TieredSequencer).unwrap();

        for (position, node) in graph.iter().enumerate() {
            for dep in &node.dependencies {
                let dep_position = graph.iter().position(|n| &n.name == dep).unwrap();
                assert!(dep_position < position, "{dep} should precede {}", node.name);
                assert!(graph.get(dep).unwrap().order < node.order);
            }
        }
    }

    #[test]
    fn ties_are_broken_by_name_and_runs_are_identical() {
        let manifests = vec![
            manifest("@acme/zeta", &[]),
            manifest("@acme/beta", &["@acme/zeta"]),
            manifest("@acme/alpha", &[]),
            manifest("@acme/gamma", &["@acme/alpha"]),
        ];
        let scope = Scope::new("@acme");

        let first = topological(&manifests, &scope, &TieredSequencer).unwrap();
        let mut reversed = manifests.clone();
        reversed.reverse();
        let second = topological(&reversed, &scope, &TieredSequencer).unwrap();

        assert_eq!(
            names(&first),
            vec!["@acme/alpha", "@acme/zeta", "@acme/beta", "@acme/gamma"]
        );
        assert_eq!(first, second);
    }

    #[test]
    fn assembler_sorts_unsorted_chunks() {
        let index: HashMap<String, Workspace> = ["b", "a"]
            .iter()
            .map(|name| {
                (
                    name.to_string(),
                    Workspace {
                        name: name.to_string(),
                        version: "0.0.1".to_string(),
                        dependencies: Vec::new(),
                    },
                )
            })
            .collect();

        let graph = assemble(&vec![vec!["b".to_string(), "a".to_string()]], &index).unwrap();
        assert_eq!(names(&graph), vec!["a", "b"]);
    }

    #[test]
    fn unrecognized_chunk_entry_fails() {
        let manifests = vec![manifest("@acme/a", &[])];
        let sequencer = FixedSequencer(vec![vec!["@acme/a".to_string()], vec!["D".to_string()]]);

        let err = topological(&manifests, &Scope::new("@acme"), &sequencer).unwrap_err();
        assert!(matches!(err, WsGraphError::UnrecognizedPackage(ref name) if name == "D"));
    }

    #[test]
    fn cycles_abort_construction() {
        let manifests = vec![
            manifest("@acme/a", &["@acme/b"]),
            manifest("@acme/b", &["@acme/a"]),
        ];
        let err = topological(&manifests, &Scope::new("@acme"), &TieredSequencer).unwrap_err();
        assert!(matches!(err, WsGraphError::Cycle(_)));
    }
}
