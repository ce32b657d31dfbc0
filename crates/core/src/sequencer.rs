//! Build-order sequencing
//!
//! A [`GraphSequencer`] partitions packages into tiers ("chunks"): chunk 0 holds
//! packages without internal dependencies, chunk `k` only packages whose
//! dependencies all live in chunks below `k`.

use std::collections::{BTreeMap, HashMap};

use petgraph::algo::kosaraju_scc;
use petgraph::prelude::*;

use crate::types::{WsGraphError, WsGraphResult};

/// Package names per tier, each tier sorted by name
pub type Chunks = Vec<Vec<String>>;

pub trait GraphSequencer {
    /// Partition the keys of `dependencies` into ordered chunks.
    ///
    /// Dependencies naming something that is not a key are ignored. Fails with
    /// [`WsGraphError::Cycle`] when the relation is not acyclic.
    fn sequence(&self, dependencies: &BTreeMap<String, Vec<String>>) -> WsGraphResult<Chunks>;
}

/// Kahn's algorithm, peeling one tier of ready packages at a time
#[derive(Debug, Default, Clone, Copy)]
pub struct TieredSequencer;

impl GraphSequencer for TieredSequencer {
    fn sequence(&self, dependencies: &BTreeMap<String, Vec<String>>) -> WsGraphResult<Chunks> {
        let mut graph = DiGraph::<&str, ()>::new();
        let mut node_indices = HashMap::new();

        for name in dependencies.keys() {
            let node_index = graph.add_node(name.as_str());
            node_indices.insert(name.as_str(), node_index);
        }

        // Edge: package -> dependency
        for (name, deps) in dependencies {
            let Some(&from_node) = node_indices.get(name.as_str()) else {
                continue;
            };
            for dep in deps {
                if let Some(&to_node) = node_indices.get(dep.as_str()) {
                    graph.update_edge(from_node, to_node, ());
                }
            }
        }

        let mut pending: HashMap<NodeIndex, usize> = graph
            .node_indices()
            .map(|node| (node, graph.neighbors_directed(node, Outgoing).count()))
            .collect();

        let mut current_level: Vec<NodeIndex> = graph
            .node_indices()
            .filter(|node| pending.get(node) == Some(&0))
            .collect();

        let mut chunks = Vec::new();
        let mut placed = 0;

        while !current_level.is_empty() {
            placed += current_level.len();
            let mut next_level = Vec::new();

            for &node in &current_level {
                for dependent in graph.neighbors_directed(node, Incoming) {
                    if let Some(count) = pending.get_mut(&dependent) {
                        *count -= 1;
                        if *count == 0 {
                            next_level.push(dependent);
                        }
                    }
                }
            }

            let mut chunk: Vec<String> = current_level
                .iter()
                .map(|&node| graph[node].to_string())
                .collect();
            chunk.sort();
            chunks.push(chunk);

            current_level = next_level;
        }

        if placed != graph.node_count() {
            return Err(WsGraphError::Cycle(find_cycles(&graph)));
        }

        Ok(chunks)
    }
}

/// Strongly connected components that form a loop, including self-dependencies
fn find_cycles(graph: &DiGraph<&str, ()>) -> Vec<Vec<String>> {
    let mut cycles: Vec<Vec<String>> = kosaraju_scc(graph)
        .into_iter()
        .filter_map(|component| {
            if component.len() > 1 {
                let mut cycle = component
                    .iter()
                    .map(|node| graph[*node].to_string())
                    .collect::<Vec<_>>();
                cycle.sort();
                Some(cycle)
            } else {
                let node = component[0];
                if graph.contains_edge(node, node) {
                    Some(vec![graph[node].to_string()])
                } else {
                    None
                }
            }
        })
        .collect();

    cycles.sort();
    cycles
}
