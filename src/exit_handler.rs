//! Exit code logic for the fetcher process.
//!
//! Single responsibility: map a fetch result to the process exit outcome.

use image_fetcher_core::{FetchError, FetchOutcome};

use crate::ProcessExit;

/// Success and skip both leave the collection in the requested state.
pub(crate) fn determine_exit_outcome(result: &Result<FetchOutcome, FetchError>) -> ProcessExit {
    match result {
        Ok(_) => ProcessExit::Success,
        Err(_) => ProcessExit::Failure,
    }
}
