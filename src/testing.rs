//! Testing utilities for type-discovery
//!
//! Provides the `App\Events` fixture registry, a `StubWalker` that replays a
//! fixed list of candidates while recording the queries it receives, and a
//! `FixtureTree` for tests that need real files on disk.
//!
//! Only available when compiled with `cfg(test)`.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::discovery::{Candidates, FileWalker, WalkError, WalkQuery};
use crate::registry::{StaticRegistry, TypeDeclaration, Visibility};

/// Declarations behind the `App\Events` fixture files.
///
/// `Events/Bar.php` is deliberately absent: it is a file that does not
/// declare a type.
pub fn events_registry() -> StaticRegistry {
    StaticRegistry::new()
        .with_type(TypeDeclaration::interface("App\\Events\\Bar\\TestInterface"))
        .with_type(TypeDeclaration::interface("App\\Events\\TestInterface"))
        .with_type(TypeDeclaration::abstract_class("App\\Events\\AbstractClass"))
        .with_type(
            TypeDeclaration::class("App\\Events\\Foo")
                .implements("App\\Events\\Bar\\TestInterface")
                .method("handle"),
        )
        .with_type(TypeDeclaration::mixin("App\\Events\\Bar\\Cougar").method("roar"))
        .with_type(
            TypeDeclaration::class("App\\Events\\Bar\\Quz")
                .uses("App\\Events\\Bar\\Cougar")
                .property("publicString")
                .property_with("protectedString", Visibility::Protected)
                .property_with("privateString", Visibility::Private)
                .method_with("protectedFunction", Visibility::Protected)
                .method_with("privateFunction", Visibility::Private),
        )
        .with_type(TypeDeclaration::class("App\\Events\\Bar\\Baz\\Cougar").extends("App\\Events\\Bar\\Quz"))
        .with_type(TypeDeclaration::class("App\\Events\\AttributeClass").attribute("MockClass"))
}

/// Walker replaying a fixed candidate list, ignoring the query like a mock would
#[derive(Debug, Default)]
pub struct StubWalker {
    files: Vec<PathBuf>,
    fault: Option<String>,
    queries: RefCell<Vec<WalkQuery>>,
}

impl StubWalker {
    pub fn new<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Walker whose every walk fails after yielding its files
    pub fn failing(message: &str) -> Self {
        Self {
            fault: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Queries received so far, in order
    pub fn queries(&self) -> Vec<WalkQuery> {
        self.queries.borrow().clone()
    }
}

impl FileWalker for StubWalker {
    fn walk(&self, query: &WalkQuery) -> Candidates<'_> {
        self.queries.borrow_mut().push(query.clone());
        let fault = self.fault.clone().map(|message| Err(WalkError::Other(message)));
        Box::new(self.files.iter().cloned().map(Ok).chain(fault))
    }
}

/// Temporary directory tree that is removed on drop
pub struct FixtureTree {
    dir: TempDir,
}

impl FixtureTree {
    /// Create a tree containing empty files at the given relative paths
    ///
    /// # Panics
    /// Panics if the temporary directory or a file cannot be created.
    pub fn with_files(files: &[&str]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        for file in files {
            let path = dir.path().join(file);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("Failed to create fixture directory");
            }
            fs::write(&path, "<?php\n").expect("Failed to write fixture file");
        }
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}
