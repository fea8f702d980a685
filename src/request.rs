//! Discovery request - where to look and how to name what is found
//!
//! A [`DiscoveryRequest`] is an owned value built through chained calls. Every
//! setter consumes the request and returns it, so a configured request is
//! never shared mutably between callers.

use std::path::{Path, PathBuf};

use crate::translate::{
    directory_from_namespace, namespace_from_path, trim_namespace, trim_path,
};

/// Extension used for source files when none is configured
pub const DEFAULT_EXTENSION: &str = "php";

/// Configuration consumed by one discovery call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryRequest {
    root: PathBuf,
    subpath: String,
    namespace: String,
    target_directory: Option<PathBuf>,
    recursive: bool,
    extension: String,
}

impl DiscoveryRequest {
    /// Create a request for `root`, scanning `path` whose identifiers start with `namespace`.
    ///
    /// The path is trimmed of separators and the namespace of identifier
    /// delimiters. Unlike [`at`](Self::at), an empty namespace is kept as is.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, path: &str, namespace: &str) -> Self {
        Self {
            root: root.into(),
            subpath: trim_path(path).to_string(),
            namespace: trim_namespace(namespace).to_string(),
            target_directory: None,
            recursive: false,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Set the directory under the root to scan, and the namespace it maps to.
    ///
    /// When `namespace` is `None` (or empty) it is derived from `path`: the first
    /// letter is upper-cased and separators become identifier delimiters.
    #[must_use]
    pub fn at(mut self, path: &str, namespace: Option<&str>) -> Self {
        self.subpath = trim_path(path).to_string();
        self.namespace = match namespace.filter(|ns| !ns.is_empty()) {
            Some(ns) => trim_namespace(ns).to_string(),
            None => namespace_from_path(path),
        };
        self
    }

    /// Restrict the scan to the directory matching `namespace` below the subpath.
    #[must_use]
    pub fn in_namespace(mut self, namespace: &str) -> Self {
        let directory = directory_from_namespace(namespace);
        self.target_directory = (!directory.as_os_str().is_empty()).then_some(directory);
        self
    }

    /// Descend into every subdirectory instead of scanning only direct children.
    #[must_use]
    pub const fn recursively(mut self) -> Self {
        self.recursive = true;
        self
    }

    /// Set the source-file extension, with or without the leading dot.
    #[must_use]
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn subpath(&self) -> &str {
        &self.subpath
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn target_directory(&self) -> Option<&Path> {
        self.target_directory.as_deref()
    }

    #[must_use]
    pub const fn is_recursive(&self) -> bool {
        self.recursive
    }

    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Directory the walker starts from: `root / subpath [/ target]`
    #[must_use]
    pub fn scan_directory(&self) -> PathBuf {
        let mut directory = self.root.join(&self.subpath);
        if let Some(target) = &self.target_directory {
            directory.push(target);
        }
        directory
    }

    /// File-name glob restricting candidates to source files
    #[must_use]
    pub fn file_pattern(&self) -> String {
        format!("*.{}", self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_path_and_namespace() {
        let request = DiscoveryRequest::new("/srv", "/app/", "\\App\\");
        assert_eq!(request.subpath(), "app");
        assert_eq!(request.namespace(), "App");
        assert!(!request.is_recursive());
        assert_eq!(request.extension(), "php");
    }

    #[test]
    fn test_at_derives_namespace_from_path() {
        let request = DiscoveryRequest::new("/srv", "app", "App").at("services/billing/", None);
        assert_eq!(request.subpath(), "services/billing");
        assert_eq!(request.namespace(), "Services\\billing");
    }

    #[test]
    fn test_at_with_explicit_namespace() {
        let request = DiscoveryRequest::new("/srv", "app", "App").at("src", Some("\\Acme\\Core\\"));
        assert_eq!(request.subpath(), "src");
        assert_eq!(request.namespace(), "Acme\\Core");
    }

    #[test]
    fn test_at_with_empty_namespace_derives() {
        let request = DiscoveryRequest::new("/srv", "", "").at("modules", Some(""));
        assert_eq!(request.namespace(), "Modules");
    }

    #[test]
    fn test_in_namespace_sets_target_directory() {
        let request = DiscoveryRequest::new("/srv", "app", "App").in_namespace("\\events\\Bar\\");
        assert_eq!(request.target_directory(), Some(Path::new("Events/Bar")));
        assert_eq!(request.scan_directory(), PathBuf::from("/srv/app/Events/Bar"));
    }

    #[test]
    fn test_in_namespace_empty_clears_target() {
        let request = DiscoveryRequest::new("/srv", "app", "App")
            .in_namespace("Events")
            .in_namespace("\\");
        assert_eq!(request.target_directory(), None);
        assert_eq!(request.scan_directory(), PathBuf::from("/srv/app"));
    }

    #[test]
    fn test_scan_directory_with_empty_subpath() {
        let request = DiscoveryRequest::new("/app", "", "App").in_namespace("Events");
        assert_eq!(request.scan_directory(), PathBuf::from("/app/Events"));
    }

    #[test]
    fn test_with_extension_strips_dot() {
        let request = DiscoveryRequest::new("/srv", "", "").with_extension(".rb");
        assert_eq!(request.extension(), "rb");
        assert_eq!(request.file_pattern(), "*.rb");
    }

    #[test]
    fn test_recursively_only_touches_flag() {
        let base = DiscoveryRequest::new("/srv", "app", "App").in_namespace("Events");
        let recursive = base.clone().recursively();
        assert!(recursive.is_recursive());
        assert_eq!(recursive.scan_directory(), base.scan_directory());
        assert_eq!(recursive.namespace(), base.namespace());
    }
}
