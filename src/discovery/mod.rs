//! Candidate enumeration
//!
//! A [`FileWalker`] yields the files below the request's scan directory whose
//! names match `*.<extension>`. Non-recursive requests are limited to direct
//! children. The order of the walker is kept as is.

pub mod error;
pub mod traits;
pub mod walker;

pub use error::WalkError;
pub use traits::{Candidates, FileWalker, WalkQuery};
pub use walker::FsWalker;

use crate::request::DiscoveryRequest;

/// Enumerate the candidate files of a request.
///
/// # Errors
/// Returns `WalkError::InvalidPattern` if the request's extension does not form a valid glob.
pub fn enumerate<'w, W: FileWalker + ?Sized>(
    walker: &'w W,
    request: &DiscoveryRequest,
) -> Result<Candidates<'w>, WalkError> {
    let query = WalkQuery::for_request(request)?;
    tracing::debug!(
        directory = %query.directory.display(),
        pattern = %query.pattern,
        max_depth = ?query.max_depth,
        "enumerating candidates"
    );
    Ok(walker.walk(&query))
}
