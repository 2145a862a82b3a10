//! Image Fetcher Core Library
//!
//! This library provides the decision logic for the image fetcher tool,
//! which downloads a single image from a URL into a local collection,
//! skipping content that was already saved.
//!
//! # Architecture
//!
//! - [`fetch`] - HTTP transport, response validation, duplicate detection,
//!   filename derivation and the orchestration that sequences them
//!
//! Everything except the transport and the final file write is a pure
//! function over explicit inputs, so each decision can be tested on its own.

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod fetch;
mod user_agent;

// Re-export commonly used types
pub use fetch::{
    DEFAULT_OUTPUT_DIR, ErrorKind, FetchError, FetchOrchestrator, FetchOutcome, FetchResponse,
    FetchSettings, HttpClient, MAX_IMAGE_BYTES, Transport, ValidationError, content_key,
    generate_filename, is_duplicate_image, validate_image_response,
};
pub use user_agent::FETCHER_USER_AGENT;
