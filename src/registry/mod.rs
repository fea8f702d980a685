//! Type resolution
//!
//! The discovery engine never inspects source files. It asks a [`TypeRegistry`]
//! whether an identifier names a type and, if so, for its structural facts.
//! [`StaticRegistry`] answers from a declaration table that is built in code or
//! loaded from a generated TOML/JSON manifest.

pub mod error;
pub mod static_registry;
pub mod types;

pub use error::RegistryError;
pub use static_registry::{Manifest, StaticRegistry};
pub use types::{
    Member, Resolution, TypeDeclaration, TypeDescriptor, TypeIdentifier, TypeKind, Visibility,
};

use std::sync::Arc;

/// Resolves identifiers to structural metadata
pub trait TypeRegistry {
    /// Describe the type named by `identifier`.
    ///
    /// Returns `Resolution::NotAType` when the identifier is unknown or names
    /// something other than a type.
    ///
    /// # Errors
    /// Returns `RegistryError` if the registry itself fails.
    fn describe(&self, identifier: &TypeIdentifier) -> Result<Resolution, RegistryError>;
}

impl<T: TypeRegistry + ?Sized> TypeRegistry for &T {
    fn describe(&self, identifier: &TypeIdentifier) -> Result<Resolution, RegistryError> {
        (**self).describe(identifier)
    }
}

impl<T: TypeRegistry + ?Sized> TypeRegistry for Arc<T> {
    fn describe(&self, identifier: &TypeIdentifier) -> Result<Resolution, RegistryError> {
        (**self).describe(identifier)
    }
}
