//! Header-level safety checks applied before anything touches the disk.

use thiserror::Error;

use super::constants::MAX_IMAGE_BYTES;
use super::response::FetchResponse;

/// Reasons a response is refused before being stored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `Content-Type` is missing or does not start with `image/`.
    #[error("URL does not point to an image resource")]
    NotAnImage {
        /// The offending header value (empty when absent).
        content_type: String,
    },

    /// Declared `Content-Length` is above [`MAX_IMAGE_BYTES`].
    #[error("File size exceeds safety limit ({declared} bytes > {limit} bytes)")]
    TooLarge {
        /// Declared size in bytes.
        declared: u64,
        /// Configured maximum in bytes.
        limit: u64,
    },
}

/// Checks that a response advertises an image of acceptable size.
///
/// Only headers are inspected. A response that omits `Content-Length` (or
/// sends garbage) is treated as zero bytes and passes the size check; the
/// payload length is never compared against the header.
///
/// # Errors
///
/// Returns [`ValidationError::NotAnImage`] first when the content type is
/// wrong, otherwise [`ValidationError::TooLarge`] when the declared size
/// exceeds the limit.
pub fn validate_image_response(response: &FetchResponse) -> Result<(), ValidationError> {
    let content_type = response.content_type();
    if !content_type.starts_with("image/") {
        return Err(ValidationError::NotAnImage {
            content_type: content_type.to_string(),
        });
    }

    let declared = response.declared_length();
    if declared > MAX_IMAGE_BYTES {
        return Err(ValidationError::TooLarge {
            declared,
            limit: MAX_IMAGE_BYTES,
        });
    }

    Ok(())
}
