//! Declaration-table registry
//!
//! Flattening follows the rules of a class-based runtime with single
//! inheritance, interfaces and traits:
//!
//! - supertypes: parents and interfaces, transitively
//! - methods and fields: public members of the type, its ancestors and every
//!   trait it composes
//! - mixins: traits of the type and its ancestors, plus traits used by traits
//! - annotations: declared on the type itself, never inherited
//!
//! Names that are not in the table (vendor types, for instance) are recorded
//! but not expanded.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::RegistryError;
use super::types::{Resolution, TypeDeclaration, TypeDescriptor, TypeIdentifier};
use super::TypeRegistry;

/// On-disk representation of a declaration table
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Manifest {
    #[serde(default)]
    pub types: Vec<TypeDeclaration>,
}

/// Registry answering from an in-memory declaration table
#[derive(Debug, Default, Clone)]
pub struct StaticRegistry {
    types: HashMap<String, TypeDeclaration>,
}

impl StaticRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration, replacing any previous one with the same name
    pub fn register(&mut self, declaration: TypeDeclaration) {
        self.types
            .insert(declaration.name.as_str().to_string(), declaration);
    }

    #[must_use]
    pub fn with_type(mut self, declaration: TypeDeclaration) -> Self {
        self.register(declaration);
        self
    }

    #[must_use]
    pub fn from_manifest(manifest: Manifest) -> Self {
        manifest.types.into_iter().collect()
    }

    /// Parse a TOML manifest.
    ///
    /// # Errors
    /// Returns `RegistryError::Toml` if the manifest is malformed.
    pub fn from_toml_str(manifest: &str) -> Result<Self, RegistryError> {
        Ok(Self::from_manifest(toml::from_str(manifest)?))
    }

    /// Parse a JSON manifest.
    ///
    /// # Errors
    /// Returns `RegistryError::Json` if the manifest is malformed.
    pub fn from_json_str(manifest: &str) -> Result<Self, RegistryError> {
        Ok(Self::from_manifest(serde_json::from_str(manifest)?))
    }

    /// Load a manifest, choosing the format from the file extension.
    ///
    /// # Errors
    /// * Returns `RegistryError::UnsupportedFormat` for extensions other than `toml` and `json`.
    /// * Returns `RegistryError::Io` if the file cannot be read.
    /// * Returns parse errors from the matching format.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, RegistryError> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => return Err(RegistryError::UnsupportedFormat(path.to_path_buf())),
        };

        let contents = fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = parse(&contents)?;
        tracing::debug!(path = %path.display(), types = registry.len(), "loaded type manifest");
        Ok(registry)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeDeclaration> {
        self.types.get(name)
    }

    /// Snapshot of the table, sorted by name for stable output
    #[must_use]
    pub fn to_manifest(&self) -> Manifest {
        let mut types: Vec<_> = self.types.values().cloned().collect();
        types.sort_by(|a, b| a.name.cmp(&b.name));
        Manifest { types }
    }

    /// The type itself followed by every registered class it extends
    fn lineage<'a>(&'a self, declaration: &'a TypeDeclaration) -> Vec<&'a TypeDeclaration> {
        let mut chain = vec![declaration];
        let mut seen: HashSet<&str> = HashSet::from([declaration.name.as_str()]);
        let mut i = 0;
        while i < chain.len() {
            let current = chain[i];
            for parent in &current.extends {
                if seen.insert(parent.as_str()) {
                    if let Some(parent) = self.types.get(parent) {
                        chain.push(parent);
                    }
                }
            }
            i += 1;
        }
        chain
    }

    /// Breadth-first closure over `edges`, excluding the starting type
    fn closure<'a, F, I>(&'a self, start: &'a TypeDeclaration, edges: F) -> BTreeSet<String>
    where
        F: Fn(&'a TypeDeclaration) -> I,
        I: Iterator<Item = &'a str>,
    {
        let mut found = BTreeSet::new();
        let mut queue: VecDeque<&str> = edges(start).collect();
        while let Some(name) = queue.pop_front() {
            if name == start.name.as_str() || !found.insert(name.to_string()) {
                continue;
            }
            if let Some(next) = self.types.get(name) {
                queue.extend(edges(next));
            }
        }
        found
    }

    fn flatten(&self, declaration: &TypeDeclaration) -> TypeDescriptor {
        let mut descriptor = TypeDescriptor::new(declaration.name.clone(), declaration.kind);
        descriptor.is_instantiable = declaration.is_instantiable();
        descriptor.supertypes = self.closure(declaration, TypeDeclaration::parents);
        descriptor.annotation_names = declaration.attributes.iter().cloned().collect();

        let lineage = self.lineage(declaration);
        for ancestor in &lineage {
            for mixin in &ancestor.uses {
                if descriptor.mixin_names.insert(mixin.clone()) {
                    if let Some(used) = self.types.get(mixin) {
                        let nested = self.closure(used, |d| d.uses.iter().map(String::as_str));
                        descriptor.mixin_names.extend(nested);
                    }
                }
            }
        }

        let mixins = descriptor
            .mixin_names
            .iter()
            .filter_map(|name| self.types.get(name));
        for source in lineage.iter().copied().chain(mixins) {
            descriptor.method_names.extend(
                source.methods.iter().filter(|m| m.is_public()).map(|m| m.name.clone()),
            );
            descriptor.field_names.extend(
                source.properties.iter().filter(|p| p.is_public()).map(|p| p.name.clone()),
            );
        }

        descriptor
    }
}

impl FromIterator<TypeDeclaration> for StaticRegistry {
    fn from_iter<T: IntoIterator<Item = TypeDeclaration>>(iter: T) -> Self {
        let mut registry = Self::new();
        for declaration in iter {
            registry.register(declaration);
        }
        registry
    }
}

impl TypeRegistry for StaticRegistry {
    fn describe(&self, identifier: &TypeIdentifier) -> Result<Resolution, RegistryError> {
        Ok(self
            .types
            .get(identifier.as_str())
            .map_or(Resolution::NotAType, |declaration| {
                Resolution::Resolved(self.flatten(declaration))
            }))
    }
}

#[cfg(test)]
#[path = "static_registry_tests.rs"]
mod static_registry_tests;
