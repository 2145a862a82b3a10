//! Single-image fetch: transport, validation, deduplication and naming.
//!
//! This module provides everything needed to turn one user-supplied URL into
//! one file in the local image collection.
//!
//! # Flow
//!
//! 1. Ensure the output directory exists
//! 2. GET the URL with the fetcher User-Agent and a 15 second timeout
//! 3. Reject responses that are not `image/*` or declare more than 10 MiB
//! 4. Skip payloads whose content key already appears in the directory
//! 5. Write the payload as `image_<urlHash8>_<contentHash8><ext>`
//!
//! # Example
//!
//! ```no_run
//! use image_fetcher_core::fetch::{FetchOrchestrator, FetchSettings, HttpClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = FetchSettings::default();
//! let client = HttpClient::new(&settings)?;
//! let orchestrator = FetchOrchestrator::new(&client, settings);
//! let outcome = orchestrator.run("https://example.com/cat.png").await?;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```

mod client;
mod constants;
mod digest;
mod duplicate;
mod error;
mod filename;
mod orchestrator;
mod response;
mod validation;

pub use client::{HttpClient, Transport};
pub use constants::{
    DEFAULT_OUTPUT_DIR, FALLBACK_EXTENSION, HASH_PREFIX_LEN, MAX_IMAGE_BYTES, REQUEST_TIMEOUT_SECS,
};
pub use duplicate::{content_key, is_duplicate_image};
pub use error::{ErrorKind, FetchError};
pub use filename::{extension_from_url, generate_filename};
pub use orchestrator::{FetchOrchestrator, FetchOutcome, FetchSettings};
pub use response::FetchResponse;
pub use validation::{ValidationError, validate_image_response};
