//! Registry-specific error types
//!
//! These errors are faults of the type-resolution collaborator. An identifier
//! that simply does not name a type is not an error, it resolves to
//! [`Resolution::NotAType`](super::Resolution::NotAType).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or querying a type registry
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Manifest file could not be read
    #[error("Failed to read manifest {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// TOML manifest could not be parsed
    #[error("Invalid TOML manifest: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON manifest could not be parsed
    #[error("Invalid JSON manifest: {0}")]
    Json(#[from] serde_json::Error),

    /// Manifest extension is neither `toml` nor `json`
    #[error("Unsupported manifest format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Custom registry failed to answer
    #[error("Registry fault: {0}")]
    Fault(String),
}
