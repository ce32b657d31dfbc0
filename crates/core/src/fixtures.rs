//! Shared builders for unit tests

use crate::graph::{topological, Graph};
use crate::manifest::{PackageManifest, PeerDependency};
use crate::sequencer::TieredSequencer;
use crate::workspace::Scope;

pub fn manifest(name: &str, peers: &[&str]) -> PackageManifest {
    PackageManifest {
        name: name.to_string(),
        version: "1.0.0".to_string(),
        peer_dependencies: peers
            .iter()
            .map(|peer| PeerDependency {
                name: peer.to_string(),
                range: "workspace:^".to_string(),
            })
            .collect(),
    }
}

/// Build an `@acme` graph from `(name, peer dependencies)` pairs
pub fn graph(entries: &[(&str, Vec<&str>)]) -> Graph {
    let manifests: Vec<PackageManifest> = entries
        .iter()
        .map(|(name, peers)| manifest(name, peers))
        .collect();
    topological(&manifests, &Scope::new("@acme"), &TieredSequencer).unwrap()
}
