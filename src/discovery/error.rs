use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while enumerating candidate files
#[derive(Debug, Error)]
pub enum WalkError {
    /// Directory could not be read
    #[error("Failed to walk {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    /// File-name glob failed to parse
    #[error("Invalid file pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
    /// Custom walker failure
    #[error("{0}")]
    Other(String),
}

impl WalkError {
    #[must_use]
    pub fn invalid_pattern(pattern: &str, reason: &str) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<walkdir::Error> for WalkError {
    fn from(source: walkdir::Error) -> Self {
        Self::Io {
            path: source.path().map(PathBuf::from).unwrap_or_default(),
            source,
        }
    }
}
