//! Path to type-identifier translation
//!
//! Identifiers are derived from file paths alone:
//!
//! ```text
//! /srv/app/Events/Bar/Quz.php
//!      └┬┘ └──────┬──────┘
//!   subpath   relative rest      ──▶  App\Events\Bar\Quz
//! ```
//!
//! The root is stripped, the extension removed, the first letter upper-cased,
//! separators mapped to `\` and the subpath replaced by the namespace.

use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};

use crate::registry::TypeIdentifier;
use crate::request::DiscoveryRequest;
use crate::{DiscoverError, Result};

/// Delimiter between the segments of a type identifier
pub const NAMESPACE_DELIMITER: char = '\\';

const fn is_path_separator(c: char) -> bool {
    c == '/' || c == MAIN_SEPARATOR
}

/// Upper-case the first character of `s`, leaving the rest untouched.
#[must_use]
pub fn ucfirst(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Trim leading and trailing path separators.
#[must_use]
pub fn trim_path(path: &str) -> &str {
    path.trim_matches(is_path_separator)
}

/// Trim leading and trailing identifier delimiters.
#[must_use]
pub fn trim_namespace(namespace: &str) -> &str {
    namespace.trim_matches(NAMESPACE_DELIMITER)
}

/// Derive the namespace that corresponds to a relative directory.
///
/// `services/billing` becomes `Services\billing`.
#[must_use]
pub fn namespace_from_path(path: &str) -> String {
    ucfirst(trim_path(path))
        .chars()
        .map(|c| if is_path_separator(c) { NAMESPACE_DELIMITER } else { c })
        .collect()
}

/// Derive the relative directory that corresponds to a namespace.
///
/// Both `\` and `/` are accepted as delimiters; `events\Bar` becomes `Events/Bar`.
#[must_use]
pub fn directory_from_namespace(namespace: &str) -> PathBuf {
    let trimmed = namespace.trim_matches(|c| c == NAMESPACE_DELIMITER || c == '/');
    ucfirst(trimmed)
        .split([NAMESPACE_DELIMITER, '/'])
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Translate a candidate file into the identifier of the type it should declare.
///
/// # Errors
/// Returns `DiscoverError::OutsideRoot` if `candidate` does not live under the
/// request's root. A well-behaved walker never yields such a path.
pub fn translate(request: &DiscoveryRequest, candidate: &Path) -> Result<TypeIdentifier> {
    let relative = candidate
        .strip_prefix(request.root())
        .map_err(|_| DiscoverError::OutsideRoot {
            candidate: candidate.to_path_buf(),
            root: request.root().to_path_buf(),
        })?;

    let mut segments: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    let suffix = format!(".{}", request.extension());
    if let Some(last) = segments.last_mut().filter(|last| last.ends_with(&suffix)) {
        last.truncate(last.len() - suffix.len());
    }

    let relative_name = ucfirst(&segments.join(&NAMESPACE_DELIMITER.to_string()));

    let name = if request.subpath().is_empty() {
        if request.namespace().is_empty() {
            relative_name
        } else {
            format!("{}{NAMESPACE_DELIMITER}{relative_name}", request.namespace())
        }
    } else {
        let subpath_name = namespace_from_path(request.subpath());
        relative_name
            .replacen(&subpath_name, request.namespace(), 1)
            .trim_start_matches(NAMESPACE_DELIMITER)
            .to_string()
    };

    Ok(TypeIdentifier::new(name))
}
