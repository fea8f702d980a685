//! Configuration module for type-discovery
//!
//! Describes where the host application's types live: the base directory,
//! the source directory below it and the namespace that directory maps to.
//! Settings are read from a TOML file and may be overridden with
//! `DISCOVER_*` environment variables.

use std::fs;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::discoverer::Discoverer;
use crate::discovery::FsWalker;
use crate::registry::StaticRegistry;
use crate::request::{DEFAULT_EXTENSION, DiscoveryRequest};
use crate::Result;

/// Prefix of environment variables overriding file settings
pub const ENV_PREFIX: &str = "DISCOVER";

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

/// Discovery settings of a host application
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DiscoverySettings {
    /// Base directory of the application
    pub root: PathBuf,

    /// Source directory relative to `root`
    #[serde(default)]
    pub path: String,

    /// Namespace of the types under `path`
    #[serde(default)]
    pub namespace: String,

    /// Extension of source files
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Scan subdirectories by default
    #[serde(default)]
    pub recursive: bool,

    /// Type manifest; relative paths are resolved against `root`
    #[serde(default)]
    pub manifest: Option<PathBuf>,
}

impl DiscoverySettings {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, path: &str, namespace: &str) -> Self {
        Self {
            root: root.into(),
            path: path.to_string(),
            namespace: namespace.to_string(),
            extension: default_extension(),
            recursive: false,
            manifest: None,
        }
    }

    /// Load settings from a TOML file, then apply `DISCOVER_*` overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the merged settings
    /// cannot be deserialized.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Parse settings from TOML text, without environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the text is not valid settings.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Save settings to a TOML file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// settings cannot be serialized, or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize settings: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write settings file: {e}")))?;

        Ok(())
    }

    /// Request for the default source tree
    #[must_use]
    pub fn request(&self) -> DiscoveryRequest {
        let request = DiscoveryRequest::new(&self.root, &self.path, &self.namespace)
            .with_extension(&self.extension);
        if self.recursive {
            request.recursively()
        } else {
            request
        }
    }

    /// Manifest location, resolved against `root`
    #[must_use]
    pub fn manifest_path(&self) -> Option<PathBuf> {
        self.manifest.as_ref().map(|manifest| self.root.join(manifest))
    }

    /// Build a filesystem discoverer backed by the configured manifest
    ///
    /// # Errors
    ///
    /// * Returns `DiscoverError::Config` if no manifest is configured.
    /// * Returns `DiscoverError::Registry` if the manifest cannot be loaded.
    pub fn discoverer(&self) -> Result<Discoverer<FsWalker, StaticRegistry>> {
        let manifest = self
            .manifest_path()
            .ok_or_else(|| ConfigError::Message("No type manifest configured".to_string()))?;
        let registry = StaticRegistry::load(manifest)?;
        Ok(Discoverer::with_request(FsWalker::new(), registry, self.request()))
    }
}
