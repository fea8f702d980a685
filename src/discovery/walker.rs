//! Filesystem walker backed by `walkdir`.

use walkdir::{DirEntry, WalkDir};

use super::traits::{Candidates, FileWalker, WalkQuery};
use super::error::WalkError;

/// Walks the real filesystem, lexicographically per directory and depth-first
#[derive(Debug, Clone, Copy, Default)]
pub struct FsWalker {
    follow_links: bool,
}

impl FsWalker {
    #[must_use]
    pub const fn new() -> Self {
        Self { follow_links: false }
    }

    /// Set whether to follow symbolic links.
    #[must_use]
    pub const fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }
}

impl FileWalker for FsWalker {
    fn walk(&self, query: &WalkQuery) -> Candidates<'_> {
        let mut walker = WalkDir::new(&query.directory)
            .min_depth(1)
            .follow_links(self.follow_links)
            .sort_by_file_name();

        // walkdir counts the directory itself as depth 0
        if let Some(depth) = query.max_depth {
            walker = walker.max_depth(depth + 1);
        }

        let query = query.clone();
        Box::new(walker.into_iter().filter_map(move |entry| match entry {
            Ok(entry) => (is_file(&entry)
                && query.matches_name(&entry.file_name().to_string_lossy()))
            .then(|| Ok(entry.into_path())),
            Err(e) => Some(Err(WalkError::from(e))),
        }))
    }
}

/// Regular files, and symlinks resolving to one when links are not followed
fn is_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}
