use std::path::PathBuf;
use std::sync::Arc;

use glob::Pattern;

use super::error::WalkError;
use crate::request::DiscoveryRequest;

/// Lazy sequence of candidate files, consumed once
pub type Candidates<'a> = Box<dyn Iterator<Item = Result<PathBuf, WalkError>> + 'a>;

/// What a walker is asked to enumerate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkQuery {
    /// Directory to walk
    pub directory: PathBuf,
    /// Glob matched against file names only
    pub pattern: Pattern,
    /// `Some(0)` yields direct children only; `None` walks the whole subtree
    pub max_depth: Option<usize>,
}

impl WalkQuery {
    /// Build the query for a request: its scan directory, `*.<ext>` and its depth policy.
    ///
    /// # Errors
    /// Returns `WalkError::InvalidPattern` if the extension produces an invalid glob.
    pub fn for_request(request: &DiscoveryRequest) -> Result<Self, WalkError> {
        let pattern = request.file_pattern();
        let pattern = Pattern::new(&pattern).map_err(|e| WalkError::invalid_pattern(&pattern, &e.to_string()))?;
        Ok(Self {
            directory: request.scan_directory(),
            pattern,
            max_depth: if request.is_recursive() { None } else { Some(0) },
        })
    }

    /// Whether a file name passes the glob
    #[must_use]
    pub fn matches_name(&self, file_name: &str) -> bool {
        self.pattern.matches(file_name)
    }
}

/// Trait for enumerating candidate files below a directory
pub trait FileWalker {
    /// Enumerate the files matching `query`, as absolute paths.
    ///
    /// Errors are yielded in-band; the engine stops at the first one.
    fn walk(&self, query: &WalkQuery) -> Candidates<'_>;
}

impl<T: FileWalker + ?Sized> FileWalker for &T {
    fn walk(&self, query: &WalkQuery) -> Candidates<'_> {
        (**self).walk(query)
    }
}

impl<T: FileWalker + ?Sized> FileWalker for Arc<T> {
    fn walk(&self, query: &WalkQuery) -> Candidates<'_> {
        (**self).walk(query)
    }
}
