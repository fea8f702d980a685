//! Discovery engine
//!
//! ```text
//! FileWalker ──▶ translate ──▶ TypeRegistry ──▶ FilterPipeline ──▶ DiscoveredTypes
//!  (paths)      (identifier)  (descriptor)      (accept/reject)     (ordered map)
//! ```
//!
//! Candidates that do not resolve to a type, or resolve to one that cannot be
//! instantiated, are skipped before filters run. Walker and registry faults
//! abort the call; there are no partial results.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::collection::DiscoveredTypes;
use crate::discovery::{FileWalker, enumerate};
use crate::filters::{Filter, FilterPipeline};
use crate::registry::{Resolution, TypeRegistry};
use crate::request::DiscoveryRequest;
use crate::translate::translate;
use crate::Result;

/// Builder and runner for discovery calls
///
/// Every configuration method consumes the discoverer and returns it, so a
/// configured instance has a single owner.
#[derive(Debug, Clone)]
pub struct Discoverer<W, R> {
    walker: W,
    registry: R,
    request: DiscoveryRequest,
    filters: FilterPipeline,
}

impl<W: FileWalker, R: TypeRegistry> Discoverer<W, R> {
    /// Create a discoverer for the default source tree: `path` under `root`,
    /// whose types live in `namespace`.
    #[must_use]
    pub fn new(walker: W, registry: R, root: impl Into<PathBuf>, path: &str, namespace: &str) -> Self {
        Self::with_request(walker, registry, DiscoveryRequest::new(root, path, namespace))
    }

    #[must_use]
    pub fn with_request(walker: W, registry: R, request: DiscoveryRequest) -> Self {
        Self {
            walker,
            registry,
            request,
            filters: FilterPipeline::new(),
        }
    }

    /// Scan `path` under the root instead, mapping it to `namespace`
    /// (derived from `path` when `None`).
    #[must_use]
    pub fn at(mut self, path: &str, namespace: Option<&str>) -> Self {
        self.request = self.request.at(path, namespace);
        self
    }

    /// Only scan the directory of `namespace` below the current path.
    #[must_use]
    pub fn in_namespace(mut self, namespace: &str) -> Self {
        self.request = self.request.in_namespace(namespace);
        self
    }

    #[must_use]
    pub fn recursively(mut self) -> Self {
        self.request = self.request.recursively();
        self
    }

    #[must_use]
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.request = self.request.with_extension(extension);
        self
    }

    /// Register a filter, replacing any filter of the same category
    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.register(filter);
        self
    }

    /// Keep types that are, extend or implement one of `identifiers`
    #[must_use]
    pub fn instances_of<I, S>(self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_filter(Filter::instances_of(identifiers))
    }

    /// Keep types with at least one of the public `methods`
    #[must_use]
    pub fn with_method<I, S>(self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_filter(Filter::with_method(methods))
    }

    /// Keep types with at least one of the public `properties`
    #[must_use]
    pub fn with_property<I, S>(self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_filter(Filter::with_property(properties))
    }

    /// Keep types composing at least one of `traits`
    #[must_use]
    pub fn with_trait<I, S>(self, traits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_filter(Filter::with_trait(traits))
    }

    /// Keep types declaring at least one of `attributes`
    #[must_use]
    pub fn with_attribute<I, S>(self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_filter(Filter::with_attribute(attributes))
    }

    #[must_use]
    pub const fn request(&self) -> &DiscoveryRequest {
        &self.request
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterPipeline {
        &self.filters
    }

    #[must_use]
    pub const fn walker(&self) -> &W {
        &self.walker
    }

    #[must_use]
    pub const fn registry(&self) -> &R {
        &self.registry
    }

    /// Discover the types of the configured directory.
    ///
    /// # Errors
    /// * Returns `DiscoverError::Walk` if the walker fails, e.g. on a missing directory.
    /// * Returns `DiscoverError::Registry` if the registry fails.
    /// * Returns `DiscoverError::OutsideRoot` if the walker yields a file outside the root.
    pub fn classes(&self) -> Result<DiscoveredTypes> {
        self.discover(&self.request)
    }

    /// Discover the types of the configured directory and all its subdirectories.
    ///
    /// Same as `recursively().classes()`, without changing this discoverer.
    ///
    /// # Errors
    /// Same as [`classes`](Self::classes).
    pub fn all_classes(&self) -> Result<DiscoveredTypes> {
        let request = self.request.clone().recursively();
        self.discover(&request)
    }

    fn discover(&self, request: &DiscoveryRequest) -> Result<DiscoveredTypes> {
        let mut types = DiscoveredTypes::new();
        let mut scanned = 0usize;

        for candidate in enumerate(&self.walker, request)? {
            let candidate = candidate?;
            scanned += 1;

            let identifier = translate(request, &candidate)?;
            let descriptor = match self.registry.describe(&identifier)? {
                Resolution::Resolved(descriptor) => descriptor,
                Resolution::NotAType => {
                    debug!(file = %candidate.display(), %identifier, "skipping candidate: not a type");
                    continue;
                }
            };

            if !descriptor.is_instantiable {
                debug!(%identifier, kind = ?descriptor.kind, "skipping candidate: not instantiable");
                continue;
            }

            if let Some(category) = self.filters.first_rejection(&descriptor) {
                trace!(%identifier, %category, "rejected by filter");
                continue;
            }

            trace!(%identifier, "discovered");
            types.insert(identifier, descriptor);
        }

        debug!(
            directory = %request.scan_directory().display(),
            recursive = request.is_recursive(),
            scanned,
            discovered = types.len(),
            "discovery finished"
        );
        Ok(types)
    }
}

#[cfg(test)]
#[path = "discoverer_tests.rs"]
mod discoverer_tests;
