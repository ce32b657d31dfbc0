use std::path::PathBuf;

use thiserror::Error;

/// The main error type for wsgraph operations
#[derive(Debug, Error)]
pub enum WsGraphError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// The sequencer produced a name that no loaded manifest declares.
    #[error("Unrecognized package name: {0}")]
    UnrecognizedPackage(String),

    #[error("Circular dependency detected: {}", describe_cycles(.0))]
    Cycle(Vec<Vec<String>>),

    #[error("Command '{command}' failed with exit code {}", .code.map_or_else(|| "none".to_string(), |c| c.to_string()))]
    ExternalProcess { command: String, code: Option<i32> },
}

/// Failures while reading or validating a single `package.json`
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Manifest not found: {}", .path.display())]
    Missing { path: PathBuf },

    #[error("Failed to read manifest {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Manifest {} is not valid UTF-8", .path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("Failed to parse manifest {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid manifest {}: {reason}", .path.display())]
    Shape { path: PathBuf, reason: String },

    #[error("Package '{name}' is declared by both {} and {}", .first.display(), .second.display())]
    DuplicateName {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// Render cycles as `a -> b -> a`, separated by `; `
pub fn describe_cycles(cycles: &[Vec<String>]) -> String {
    cycles
        .iter()
        .map(|cycle| {
            let mut path = cycle.clone();
            if let Some(first) = path.first().cloned() {
                path.push(first);
            }
            path.join(" -> ")
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for wsgraph operations
pub type WsGraphResult<T> = Result<T, WsGraphError>;
