//! Sequencing of one fetch from request to stored file.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info, instrument};

use super::client::Transport;
use super::constants::{DEFAULT_OUTPUT_DIR, REQUEST_TIMEOUT_SECS};
use super::duplicate::{content_key, is_duplicate_image};
use super::error::FetchError;
use super::filename::generate_filename;
use super::validation::validate_image_response;
use crate::user_agent::FETCHER_USER_AGENT;

/// Knobs for a fetch: where files go and how the request is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSettings {
    /// Collection directory; created if absent.
    pub output_dir: PathBuf,
    /// User-Agent header value.
    pub user_agent: String,
    /// Total request timeout.
    pub timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            user_agent: FETCHER_USER_AGENT.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl FetchSettings {
    /// Default settings writing into `output_dir`.
    #[must_use]
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }
}

/// Terminal result of a fetch that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Payload written to a new file.
    Saved {
        /// Generated file name.
        filename: String,
        /// Full path of the written file.
        path: PathBuf,
    },
    /// An existing file already carries this payload's content key.
    Skipped {
        /// Content key that matched.
        content_key: String,
    },
}

/// Step a fetch is in, used for tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchStage {
    Requesting,
    Validating,
    CheckingDuplicate,
    Naming,
    Persisting,
}

impl fmt::Display for FetchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Requesting => "requesting",
            Self::Validating => "validating",
            Self::CheckingDuplicate => "checking_duplicate",
            Self::Naming => "naming",
            Self::Persisting => "persisting",
        };
        f.write_str(label)
    }
}

/// Runs the fetch pipeline for one URL against a [`Transport`].
pub struct FetchOrchestrator<'a> {
    transport: &'a dyn Transport,
    settings: FetchSettings,
}

impl<'a> FetchOrchestrator<'a> {
    /// Creates an orchestrator over `transport`.
    #[must_use]
    pub fn new(transport: &'a dyn Transport, settings: FetchSettings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    /// Fetches `url` into the collection directory.
    ///
    /// The directory is created before the request. Nothing is written
    /// unless the response passes validation and its content key is not
    /// already present. There are no retries.
    ///
    /// # Errors
    ///
    /// - Transport errors from the request (network, timeout, non-2xx)
    /// - [`FetchError::Validation`] for a non-image or oversized response
    /// - [`FetchError::Io`] when the directory cannot be created, listed or
    ///   written
    #[instrument(skip(self), fields(url = %url, output_dir = %self.settings.output_dir.display()))]
    pub async fn run(&self, url: &str) -> Result<FetchOutcome, FetchError> {
        let dir = self.settings.output_dir.as_path();
        ensure_dir(dir).await?;

        enter(FetchStage::Requesting);
        let response = self.transport.get(url).await?;
        if !response.is_success() {
            return Err(FetchError::http_status(url, response.status().as_u16()));
        }

        enter(FetchStage::Validating);
        validate_image_response(&response)?;

        enter(FetchStage::CheckingDuplicate);
        let body = response.into_body();
        if is_duplicate_image(&body, dir)? {
            let key = content_key(&body);
            info!(content_key = %key, "image already in collection, skipping");
            return Ok(FetchOutcome::Skipped { content_key: key });
        }

        enter(FetchStage::Naming);
        let filename = generate_filename(url, &body);
        let path = dir.join(&filename);

        enter(FetchStage::Persisting);
        ensure_dir(dir).await?;
        tokio::fs::write(&path, &body)
            .await
            .map_err(|e| FetchError::io(&path, e))?;

        info!(path = %path.display(), bytes = body.len(), "image saved");
        Ok(FetchOutcome::Saved { filename, path })
    }
}

fn enter(stage: FetchStage) {
    debug!(stage = %stage, "fetch stage");
}

async fn ensure_dir(dir: &Path) -> Result<(), FetchError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| FetchError::io(dir, e))
}
