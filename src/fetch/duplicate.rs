//! Duplicate detection by directory scan.
//!
//! There is no index file. The lookup key is re-derived from the payload with
//! the same digest prefix [`generate_filename`](super::generate_filename)
//! embeds, and matched against the names already on disk.

use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use super::digest::hash_prefix;
use super::error::FetchError;

/// Content key for a payload: the leading hex characters of its digest.
#[must_use]
pub fn content_key(content: &[u8]) -> String {
    hash_prefix(content)
}

/// Reports whether `directory` already holds a file for this payload.
///
/// An entry matches when its name, or its name without the extension, ends
/// with the payload's [`content_key`]. Comparison is case-sensitive and the
/// directory is never modified.
///
/// # Errors
///
/// Returns [`FetchError::Io`] if the directory does not exist or cannot be
/// listed.
pub fn is_duplicate_image(content: &[u8], directory: &Path) -> Result<bool, FetchError> {
    let key = content_key(content);
    let entries = fs::read_dir(directory).map_err(|e| FetchError::io(directory, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| FetchError::io(directory, e))?;
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();
        let stem_matches = path
            .file_stem()
            .is_some_and(|stem| stem.to_string_lossy().ends_with(&key));
        trace!(entry = %name, "checking entry");
        if name.ends_with(&key) || stem_matches {
            debug!(entry = %name, key = %key, "found existing image with same content");
            return Ok(true);
        }
    }

    Ok(false)
}
