//! User-Agent identifying the fetcher to image hosts.
//!
//! Kept as a single constant so the client and the tests agree on the exact
//! header value servers see.

/// User-Agent sent with every image request.
pub const FETCHER_USER_AGENT: &str = "Ubuntu-Image-Fetcher/1.0 (Community Image Collection Tool)";
