//! CLI entry point for the image fetcher.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use image_fetcher_core::{DEFAULT_OUTPUT_DIR, FetchOrchestrator, FetchSettings, HttpClient};
use tracing::{debug, info};

mod app_config;
mod cli;
mod exit_handler;
mod output;

use app_config::{FileConfig, load_default_file_config};
use cli::Args;

/// Process exit outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProcessExit {
    Success,
    Failure,
}

impl From<ProcessExit> for ExitCode {
    fn from(value: ProcessExit) -> Self {
        match value {
            ProcessExit::Success => ExitCode::SUCCESS,
            ProcessExit::Failure => ExitCode::FAILURE,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    let loaded = load_default_file_config()?;
    let file_config = loaded.config.clone().unwrap_or_default();

    init_tracing(&args, &file_config);
    debug!(?args, config_path = ?loaded.path, "CLI arguments parsed");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in output::WELCOME_LINES {
        writeln!(out, "{line}")?;
    }

    let url = match args.url.as_deref() {
        Some(url) => url.trim().to_string(),
        None => prompt_for_url(&mut out)?,
    };
    if url.is_empty() {
        writeln!(out, "{}", output::EMPTY_URL_NOTICE)?;
        return Ok(ExitCode::SUCCESS);
    }

    let output_dir = args
        .output_dir
        .or(file_config.output_dir)
        .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.into());
    let settings = FetchSettings::with_output_dir(output_dir);
    info!(url = %url, output_dir = %settings.output_dir.display(), "Fetching image");

    let client = HttpClient::new(&settings)?;
    let orchestrator = FetchOrchestrator::new(&client, settings);
    let result = orchestrator.run(&url).await;

    for line in output::result_lines(&result) {
        writeln!(out, "{line}")?;
    }
    if let Err(error) = &result {
        debug!(error = ?error, "fetch failed");
    }

    Ok(exit_handler::determine_exit_outcome(&result).into())
}

/// Log level priority: `RUST_LOG` > CLI flags > config file > default (warn).
fn init_tracing(args: &Args, file_config: &FileConfig) {
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => file_config
                .verbosity
                .map_or("warn", app_config::VerbositySetting::filter_directive),
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn prompt_for_url(out: &mut impl Write) -> Result<String> {
    write!(out, "{}", output::URL_PROMPT)?;
    out.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read URL from stdin")?;
    writeln!(out)?;
    Ok(line.trim().to_string())
}
