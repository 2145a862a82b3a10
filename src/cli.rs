//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Fetch one image from the web into a local collection.
///
/// Prompts for an image URL, checks that the server really returns an image
/// of reasonable size, and stores it under a content-derived name unless the
/// same image was saved before.
#[derive(Parser, Debug)]
#[command(name = "image-fetcher")]
#[command(author, version, about)]
pub struct Args {
    /// Image URL to fetch (prompted for when omitted)
    pub url: Option<String>,

    /// Directory to store images in [default: Fetched_Images]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
