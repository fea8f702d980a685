//! Type declarations and the descriptors resolved from them
//!
//! - `TypeIdentifier`: fully-qualified name, e.g. `App\Events\Foo`
//! - `TypeDeclaration`: what a registry knows about one type, as declared
//! - `TypeDescriptor`: flattened structural facts handed to filters
//! - `Resolution`: outcome of resolving an identifier

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Fully-qualified type identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeIdentifier(String);

impl TypeIdentifier {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TypeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TypeIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TypeIdentifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeIdentifier {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for TypeIdentifier {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for TypeIdentifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TypeIdentifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Member visibility as declared
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// Kind of declaration behind an identifier
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// Concrete class
    #[default]
    Class,
    /// Abstract class
    #[serde(rename = "abstract")]
    AbstractClass,
    Interface,
    /// Trait or mixin, only usable by composition
    Trait,
    Enum,
}

/// Named method or field
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(from = "MemberRepr")]
pub struct Member {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
}

impl Member {
    #[must_use]
    pub fn new(name: impl Into<String>, visibility: Visibility) -> Self {
        Self { name: name.into(), visibility }
    }

    #[must_use]
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

/// Manifests may list a member by bare name (public) or as a table
#[derive(Deserialize)]
#[serde(untagged)]
enum MemberRepr {
    Name(String),
    Full {
        name: String,
        #[serde(default)]
        visibility: Visibility,
    },
}

impl From<MemberRepr> for Member {
    fn from(repr: MemberRepr) -> Self {
        match repr {
            MemberRepr::Name(name) => Self::new(name, Visibility::Public),
            MemberRepr::Full { name, visibility } => Self::new(name, visibility),
        }
    }
}

/// A type as declared, before inheritance is flattened
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub name: TypeIdentifier,
    #[serde(default)]
    pub kind: TypeKind,
    /// Parent class, or parent interfaces for an interface
    #[serde(default)]
    pub extends: Vec<String>,
    #[serde(default)]
    pub implements: Vec<String>,
    /// Traits composed into the type
    #[serde(default)]
    pub uses: Vec<String>,
    #[serde(default)]
    pub methods: Vec<Member>,
    #[serde(default)]
    pub properties: Vec<Member>,
    #[serde(default)]
    pub attributes: Vec<String>,
    #[serde(default)]
    pub constructor: Visibility,
}

impl TypeDeclaration {
    #[must_use]
    pub fn new(name: impl Into<TypeIdentifier>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            extends: Vec::new(),
            implements: Vec::new(),
            uses: Vec::new(),
            methods: Vec::new(),
            properties: Vec::new(),
            attributes: Vec::new(),
            constructor: Visibility::Public,
        }
    }

    #[must_use]
    pub fn class(name: impl Into<TypeIdentifier>) -> Self {
        Self::new(name, TypeKind::Class)
    }

    #[must_use]
    pub fn abstract_class(name: impl Into<TypeIdentifier>) -> Self {
        Self::new(name, TypeKind::AbstractClass)
    }

    #[must_use]
    pub fn interface(name: impl Into<TypeIdentifier>) -> Self {
        Self::new(name, TypeKind::Interface)
    }

    #[must_use]
    pub fn mixin(name: impl Into<TypeIdentifier>) -> Self {
        Self::new(name, TypeKind::Trait)
    }

    #[must_use]
    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.extends.push(parent.into());
        self
    }

    #[must_use]
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.implements.push(interface.into());
        self
    }

    #[must_use]
    pub fn uses(mut self, mixin: impl Into<String>) -> Self {
        self.uses.push(mixin.into());
        self
    }

    #[must_use]
    pub fn method(self, name: impl Into<String>) -> Self {
        self.method_with(name, Visibility::Public)
    }

    #[must_use]
    pub fn method_with(mut self, name: impl Into<String>, visibility: Visibility) -> Self {
        self.methods.push(Member::new(name, visibility));
        self
    }

    #[must_use]
    pub fn property(self, name: impl Into<String>) -> Self {
        self.property_with(name, Visibility::Public)
    }

    #[must_use]
    pub fn property_with(mut self, name: impl Into<String>, visibility: Visibility) -> Self {
        self.properties.push(Member::new(name, visibility));
        self
    }

    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(name.into());
        self
    }

    #[must_use]
    pub const fn constructor(mut self, visibility: Visibility) -> Self {
        self.constructor = visibility;
        self
    }

    /// Only concrete classes with a public constructor can be instantiated
    #[must_use]
    pub fn is_instantiable(&self) -> bool {
        self.kind == TypeKind::Class && self.constructor == Visibility::Public
    }

    /// Direct supertypes: parents followed by implemented interfaces
    pub fn parents(&self) -> impl Iterator<Item = &str> {
        self.extends
            .iter()
            .chain(self.implements.iter())
            .map(String::as_str)
    }
}

/// Structural facts about a resolved type, with inheritance flattened
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    pub name: TypeIdentifier,
    pub kind: TypeKind,
    pub is_instantiable: bool,
    /// Every ancestor class and interface, transitively
    pub supertypes: BTreeSet<String>,
    /// Public methods, including inherited and composed ones
    pub method_names: BTreeSet<String>,
    /// Public fields, including inherited and composed ones
    pub field_names: BTreeSet<String>,
    /// Traits used by the type, its ancestors and other traits, transitively
    pub mixin_names: BTreeSet<String>,
    /// Attributes declared on the type itself
    pub annotation_names: BTreeSet<String>,
}

impl TypeDescriptor {
    #[must_use]
    pub fn new(name: impl Into<TypeIdentifier>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            is_instantiable: kind == TypeKind::Class,
            supertypes: BTreeSet::new(),
            method_names: BTreeSet::new(),
            field_names: BTreeSet::new(),
            mixin_names: BTreeSet::new(),
            annotation_names: BTreeSet::new(),
        }
    }

    /// Whether the type is `name` or has it among its supertypes
    #[must_use]
    pub fn is_a(&self, name: &str) -> bool {
        self.name == name || self.supertypes.contains(name)
    }
}

/// Outcome of resolving an identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(TypeDescriptor),
    /// The identifier does not name a known type
    NotAType,
}

impl Resolution {
    #[must_use]
    pub fn into_descriptor(self) -> Option<TypeDescriptor> {
        match self {
            Self::Resolved(descriptor) => Some(descriptor),
            Self::NotAType => None,
        }
    }
}
