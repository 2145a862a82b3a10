//! HTTP transport for image requests.
//!
//! [`Transport`] is the seam between the orchestrator and the network: the
//! orchestrator only ever sees a [`FetchResponse`]. [`HttpClient`] is the
//! reqwest-backed implementation used by the binary.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use tracing::{debug, instrument};

use super::error::FetchError;
use super::orchestrator::FetchSettings;
use super::response::FetchResponse;

/// Performs one GET and hands back the complete response.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetches `url`, reading the whole body into memory.
    ///
    /// # Errors
    ///
    /// Returns a transport-kind [`FetchError`] when the exchange fails or the
    /// server answers with a non-success status.
    async fn get(&self, url: &str) -> Result<FetchResponse, FetchError>;
}

/// reqwest client configured with the fetcher User-Agent and timeout.
///
/// # Example
///
/// ```no_run
/// use image_fetcher_core::fetch::{FetchSettings, HttpClient, Transport};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = HttpClient::new(&FetchSettings::default())?;
/// let response = client.get("https://example.com/cat.png").await?;
/// println!("{} bytes", response.body().len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a client from fetch settings.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] if the underlying client cannot be
    /// built (for example, TLS backend initialisation failure).
    pub fn new(settings: &FetchSettings) -> Result<Self, FetchError> {
        let client = build_client(&settings.user_agent, settings.timeout)
            .map_err(|e| FetchError::network("<client setup>", e))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpClient {
    #[instrument(skip(self), fields(url = %url))]
    async fn get(&self, url: &str) -> Result<FetchResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| map_reqwest_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "non-success status");
            return Err(FetchError::http_status(url, status.as_u16()));
        }

        debug!(
            status = status.as_u16(),
            content_type = ?response.headers().get(CONTENT_TYPE),
            content_length = ?response.headers().get(CONTENT_LENGTH),
            "response headers received"
        );

        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| map_reqwest_error(url, e))?;
        debug!(bytes = body.len(), "response body read");

        Ok(FetchResponse::new(status, headers, body.to_vec()))
    }
}

fn map_reqwest_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::timeout(url)
    } else {
        FetchError::network(url, error)
    }
}

fn build_client(user_agent: &str, timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
}
