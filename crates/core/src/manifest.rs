//! `package.json` loading
//!
//! Each manifest goes through the same steps: read bytes, decode UTF-8, parse
//! JSON, then validate the shape into a [`PackageManifest`]. Every step maps
//! its failure onto a [`ManifestError`] variant carrying the offending path.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::types::ManifestError;

pub const MANIFEST_FILE: &str = "package.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeerDependency {
    pub name: String,
    pub range: String,
}

/// The validated subset of a `package.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    /// Declaration order from the file; empty when `peerDependencies` is absent
    pub peer_dependencies: Vec<PeerDependency>,
}

#[derive(Deserialize)]
struct RawManifest {
    name: String,
    version: String,
    #[serde(default, rename = "peerDependencies")]
    peer_dependencies: Option<serde_json::Map<String, JsonValue>>,
}

/// Validate already-read manifest contents
pub fn parse_manifest(path: &Path, bytes: Vec<u8>) -> Result<PackageManifest, ManifestError> {
    let text = String::from_utf8(bytes).map_err(|_| ManifestError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;

    let value: JsonValue = serde_json::from_str(&text).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let raw: RawManifest = serde_json::from_value(value).map_err(|e| ManifestError::Shape {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut peer_dependencies = Vec::new();
    for (name, range) in raw.peer_dependencies.unwrap_or_default() {
        let JsonValue::String(range) = range else {
            return Err(ManifestError::Shape {
                path: path.to_path_buf(),
                reason: format!("peerDependencies.{name} must be a string"),
            });
        };
        peer_dependencies.push(PeerDependency { name, range });
    }

    Ok(PackageManifest {
        name: raw.name,
        version: raw.version,
        peer_dependencies,
    })
}

/// Read and validate `<package_dir>/package.json`
pub fn load_manifest(package_dir: &Path) -> Result<PackageManifest, ManifestError> {
    let path = package_dir.join(MANIFEST_FILE);
    if !path.is_file() {
        return Err(ManifestError::Missing { path });
    }

    let bytes = std::fs::read(&path).map_err(|source| ManifestError::Read {
        path: path.clone(),
        source,
    })?;

    parse_manifest(&path, bytes)
}

/// Load every package's manifest, failing on the first error or on a repeated name
pub fn load_manifests(package_dirs: &[PathBuf]) -> Result<Vec<PackageManifest>, ManifestError> {
    let mut seen: HashMap<String, PathBuf> = HashMap::new();
    let mut manifests = Vec::with_capacity(package_dirs.len());

    for dir in package_dirs {
        let manifest = load_manifest(dir)?;
        let path = dir.join(MANIFEST_FILE);
        if let Some(first) = seen.get(&manifest.name) {
            return Err(ManifestError::DuplicateName {
                name: manifest.name,
                first: first.clone(),
                second: path,
            });
        }
        seen.insert(manifest.name.clone(), path);
        manifests.push(manifest);
    }

    Ok(manifests)
}
