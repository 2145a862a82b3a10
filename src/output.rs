//! Console lines shown to the user for each fetch result.

use image_fetcher_core::{ErrorKind, FetchError, FetchOutcome};

/// Banner printed before the prompt.
pub const WELCOME_LINES: [&str; 2] = [
    "Welcome to the Ubuntu Image Fetcher",
    "A tool for mindfully collecting images from the web\n",
];

/// Prompt for the image URL.
pub const URL_PROMPT: &str = "Please enter the image URL: ";

/// Message when the user entered nothing.
pub const EMPTY_URL_NOTICE: &str = "No URL provided. Nothing to fetch.";

/// Returns the status lines for a finished fetch.
pub fn result_lines(result: &Result<FetchOutcome, FetchError>) -> Vec<String> {
    match result {
        Ok(FetchOutcome::Saved { filename, path }) => vec![
            format!("✓ Successfully fetched: {filename}"),
            format!("✓ Image saved to {}", path.display()),
            "\nConnection strengthened. Community enriched.".to_string(),
        ],
        Ok(FetchOutcome::Skipped { .. }) => vec!["Image already exists in collection".to_string()],
        Err(error) => vec![error_line(error)],
    }
}

fn error_line(error: &FetchError) -> String {
    match error.kind() {
        ErrorKind::Transport => format!("✗ Connection error: {error}"),
        ErrorKind::Validation => format!("✗ Security validation failed: {error}"),
        ErrorKind::Unexpected => format!("✗ An unexpected error occurred: {error}"),
    }
}
