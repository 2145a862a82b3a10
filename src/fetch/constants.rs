//! Constants for the fetch module (limits, timeouts, naming).

/// Total request timeout in seconds, covering connect, headers and body.
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Largest `Content-Length` accepted for an image (10 MiB).
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of hex characters kept from each digest in a filename.
pub const HASH_PREFIX_LEN: usize = 8;

/// Extension used when the URL path carries none.
pub const FALLBACK_EXTENSION: &str = ".jpg";

/// Collection directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "Fetched_Images";
