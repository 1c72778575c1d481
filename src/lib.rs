//! Litwatch Core Library
//!
//! This library provides the core functionality for the litwatch tool, which
//! watches a folder of heterogeneous literature files (bibliography records,
//! free-text notes, binary documents) and republishes a consolidated,
//! interactive HTML table whenever the folder's contents change.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`config`] - Named defaults and the injectable scan configuration
//! - [`normalize`] - Field normalization and the UNKNOWN-sentinel fallback
//! - [`extract`] - Extraction strategies (bibliography fields, filename
//!   inference, bilingual labeled sections)
//! - [`resolver`] - Per-file strategy orchestration and directory collection
//! - [`render`] - Self-contained HTML artifact with embedded JSON payload
//! - [`watcher`] - Folder snapshot diffing and the rescan scheduler

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod record;
pub mod render;
pub mod resolver;
pub mod watcher;

// Re-export commonly used types
pub use config::{
    DEFAULT_OUTPUT_PATH, DEFAULT_POLL_INTERVAL_SECS, MAX_FIELD_CHARS, ScanConfig,
    UNKNOWN_SENTINEL, WatchSettings,
};
pub use error::WatchError;
pub use record::LiteratureRecord;
pub use render::{render_html, write_output};
pub use resolver::{FileKind, collect_records, resolve_file};
pub use watcher::{FolderSnapshot, PollOutcome, WatchScheduler, take_snapshot};
