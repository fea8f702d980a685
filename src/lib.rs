//! type-discovery - find types under a directory tree by path convention
//!
//! This library maps source files below a root directory to fully-qualified
//! type identifiers, resolves each identifier through an injected
//! [`TypeRegistry`], and keeps only the instantiable types that pass a
//! composable set of structural filters.
//!
//! # Examples
//!
//! ```no_run
//! use type_discovery::{Discoverer, FsWalker, StaticRegistry};
//!
//! let registry = StaticRegistry::load("/srv/app/types.toml").unwrap();
//! let listeners = Discoverer::new(FsWalker::new(), registry, "/srv/app", "app", "App")
//!     .in_namespace("Listeners")
//!     .with_method(["handle"])
//!     .all_classes()
//!     .unwrap();
//!
//! for (name, _descriptor) in &listeners {
//!     println!("{name}");
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

pub mod collection;
pub mod config;
pub mod discoverer;
pub mod discovery;
pub mod filters;
pub mod registry;
pub mod request;
pub mod translate;

#[cfg(test)]
pub mod testing;

pub use collection::DiscoveredTypes;
pub use crate::config::DiscoverySettings;
pub use discoverer::Discoverer;
pub use discovery::{FileWalker, FsWalker, WalkError, WalkQuery};
pub use filters::{Filter, FilterCategory, FilterPipeline};
pub use registry::{
    Member, RegistryError, Resolution, StaticRegistry, TypeDeclaration, TypeDescriptor,
    TypeIdentifier, TypeKind, TypeRegistry, Visibility,
};
pub use request::DiscoveryRequest;

/// Error enum, contains all failure states of a discovery call
#[derive(Debug, Error)]
pub enum DiscoverError {
    /// The directory walker failed
    #[error("Walk error: {0}")]
    Walk(#[from] WalkError),
    /// The type registry failed while resolving a candidate
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
    /// Settings could not be loaded or saved
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// The walker yielded a file outside of the discovery root
    #[error("Candidate {} is not under the discovery root {}", candidate.display(), root.display())]
    OutsideRoot { candidate: PathBuf, root: PathBuf },
}

/// Convenience alias for results of discovery operations
pub type Result<T, E = DiscoverError> = std::result::Result<T, E>;
