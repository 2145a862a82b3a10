//! Transport-neutral view of one HTTP response.

use reqwest::StatusCode;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderMap, HeaderName};

/// Status, headers and body of a completed GET.
///
/// Header lookups are case-insensitive. The body is held in memory; the size
/// guard in [`validate_image_response`](super::validate_image_response) keeps
/// well-behaved servers under the image limit.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl FetchResponse {
    /// Builds a response from its parts.
    #[must_use]
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status of the response.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// All response headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Value of `name` as text, or `None` when absent or not visible ASCII.
    #[must_use]
    pub fn header_str(&self, name: &HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// `Content-Type` header, empty when missing.
    #[must_use]
    pub fn content_type(&self) -> &str {
        self.header_str(&CONTENT_TYPE).unwrap_or("")
    }

    /// Declared `Content-Length`; missing or unparsable values count as 0.
    #[must_use]
    pub fn declared_length(&self) -> u64 {
        self.header_str(&CONTENT_LENGTH)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(0)
    }

    /// Raw payload bytes.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consumes the response, returning the payload.
    #[must_use]
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn response_with(headers: &[(HeaderName, &str)]) -> FetchResponse {
        let mut map = HeaderMap::new();
        for (name, value) in headers {
            map.insert(name.clone(), HeaderValue::from_str(value).unwrap());
        }
        FetchResponse::new(StatusCode::OK, map, b"body".to_vec())
    }

    #[test]
    fn test_content_type_missing_is_empty() {
        let response = response_with(&[]);
        assert_eq!(response.content_type(), "");
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut map = HeaderMap::new();
        map.insert(
            HeaderName::from_static("content-type"),
            HeaderValue::from_static("image/gif"),
        );
        let response = FetchResponse::new(StatusCode::OK, map, Vec::new());
        assert_eq!(response.content_type(), "image/gif");
    }

    #[test]
    fn test_declared_length_parses_and_trims() {
        let response = response_with(&[(CONTENT_LENGTH, " 500 ")]);
        assert_eq!(response.declared_length(), 500);
    }

    #[test]
    fn test_declared_length_unparsable_is_zero() {
        assert_eq!(response_with(&[(CONTENT_LENGTH, "lots")]).declared_length(), 0);
        assert_eq!(response_with(&[(CONTENT_LENGTH, "-5")]).declared_length(), 0);
        assert_eq!(response_with(&[]).declared_length(), 0);
    }

    #[test]
    fn test_is_success_tracks_status() {
        let ok = FetchResponse::new(StatusCode::OK, HeaderMap::new(), Vec::new());
        let missing = FetchResponse::new(StatusCode::NOT_FOUND, HeaderMap::new(), Vec::new());
        assert!(ok.is_success());
        assert!(!missing.is_success());
        assert_eq!(missing.status().as_u16(), 404);
    }

    #[test]
    fn test_into_body_returns_payload() {
        let response = response_with(&[]);
        assert_eq!(response.body(), b"body");
        assert_eq!(response.into_body(), b"body".to_vec());
    }
}
