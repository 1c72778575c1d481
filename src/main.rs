//! CLI entry point for the litwatch tool.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use litwatch_core::{ScanConfig, WatchScheduler, WatchSettings};
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");
    info!("Litwatch starting");

    let settings = WatchSettings {
        source_dir: args.source_dir,
        output_file: args.output,
        interval: Duration::from_secs(args.interval),
        once: args.once,
    };

    let scheduler = WatchScheduler::new(settings, ScanConfig::default());
    scheduler.run().await?;

    Ok(())
}
