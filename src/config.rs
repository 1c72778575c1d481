//! Scan configuration: named defaults for the sentinel, extension sets, and
//! field truncation, injectable so tests can override them.

use std::path::PathBuf;
use std::time::Duration;

/// Sentinel stored in any record field that could not be resolved.
/// Downstream consumers never see an empty string.
pub const UNKNOWN_SENTINEL: &str = "未知";

/// Character cap applied to long-form extracted fields.
pub const MAX_FIELD_CHARS: usize = 240;

/// Extensions treated as bibliography files (key/value record blocks).
pub const BIBLIOGRAPHY_EXTENSIONS: [&str; 1] = ["bib"];

/// Extensions treated as free text, eligible for section extraction.
pub const FREE_TEXT_EXTENSIONS: [&str; 2] = ["txt", "md"];

/// Binary document extensions. Eligible for metadata-only records; no text is
/// ever read from them.
pub const DOCUMENT_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// Default seconds between polls in continuous mode.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;

/// Default output artifact path, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "output/literature_table.html";

/// Tunable knobs for a scan pass.
///
/// The defaults reproduce the production behavior; tests override individual
/// fields (e.g. a shorter truncation bound) without touching the rest.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Value substituted for unresolved fields.
    pub unknown: String,
    /// Character cap for long-form extracted fields.
    pub max_field_chars: usize,
    /// Lower-cased extensions (no leading dot) parsed as bibliography records.
    pub bibliography_extensions: Vec<String>,
    /// Lower-cased extensions read as free text for section extraction.
    pub free_text_extensions: Vec<String>,
    /// Lower-cased extensions given metadata-only records.
    pub document_extensions: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            unknown: UNKNOWN_SENTINEL.to_string(),
            max_field_chars: MAX_FIELD_CHARS,
            bibliography_extensions: to_owned(&BIBLIOGRAPHY_EXTENSIONS),
            free_text_extensions: to_owned(&FREE_TEXT_EXTENSIONS),
            document_extensions: to_owned(&DOCUMENT_EXTENSIONS),
        }
    }
}

impl ScanConfig {
    /// Returns true if the lower-cased extension is in any supported set.
    #[must_use]
    pub fn is_supported_extension(&self, ext: &str) -> bool {
        self.bibliography_extensions.iter().any(|e| e == ext)
            || self.free_text_extensions.iter().any(|e| e == ext)
            || self.document_extensions.iter().any(|e| e == ext)
    }
}

/// Settings for the watch loop, derived from the CLI surface.
#[derive(Debug, Clone)]
pub struct WatchSettings {
    /// Directory to watch, recursively.
    pub source_dir: PathBuf,
    /// Output artifact path; parent directories are created as needed.
    pub output_file: PathBuf,
    /// Sleep between polls in continuous mode.
    pub interval: Duration,
    /// Perform exactly one forced pass and exit.
    pub once: bool,
}

fn to_owned(exts: &[&str]) -> Vec<String> {
    exts.iter().map(ToString::to_string).collect()
}
