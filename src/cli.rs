//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use litwatch_core::{DEFAULT_OUTPUT_PATH, DEFAULT_POLL_INTERVAL_SECS};

/// Watch a literature folder and publish an interactive metadata table.
///
/// Litwatch resolves bibliographic metadata from heterogeneous document files
/// (bibliography records, free-text notes, filenames) and regenerates a
/// self-contained searchable HTML table whenever the folder changes.
#[derive(Parser, Debug)]
#[command(name = "litwatch")]
#[command(author, version, about)]
pub struct Args {
    /// Literature folder to watch (recursively)
    pub source_dir: PathBuf,

    /// Output HTML file; parent directories are created as needed
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Seconds between polls in continuous mode (1-86400)
    #[arg(short, long, default_value_t = DEFAULT_POLL_INTERVAL_SECS, value_parser = clap::value_parser!(u64).range(1..=86400))]
    pub interval: u64,

    /// Scan exactly once and exit
    #[arg(long)]
    pub once: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}
