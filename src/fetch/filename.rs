//! Deterministic filenames for stored images.
//!
//! Names follow `image_<urlHash8>_<contentHash8><ext>`. The content hash sits
//! right before the extension so the duplicate check can find it again from a
//! directory listing alone.

use url::Url;

use super::constants::FALLBACK_EXTENSION;
use super::digest::hash_prefix;

/// Builds the stored filename for `url` and its payload.
///
/// The same `(url, content)` pair always yields the same name.
#[must_use]
pub fn generate_filename(url: &str, content: &[u8]) -> String {
    let url_hash = hash_prefix(url.as_bytes());
    let content_hash = hash_prefix(content);
    let extension = extension_from_url(url).unwrap_or_else(|| FALLBACK_EXTENSION.to_string());
    format!("image_{url_hash}_{content_hash}{extension}")
}

/// Extension (with its leading dot) of the last segment of the URL path.
///
/// Query and fragment are ignored. Leading dots of a segment do not start an
/// extension, so `/.hidden` has none. Strings that do not parse as URLs are
/// treated as a bare path.
#[must_use]
pub fn extension_from_url(url: &str) -> Option<String> {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.split(['?', '#']).next().unwrap_or("").to_string(),
    };
    let last_segment = path.rsplit('/').next().unwrap_or("");
    let name = last_segment.trim_start_matches('.');
    let dot_index = name.rfind('.')?;
    Some(name[dot_index..].to_string())
}
