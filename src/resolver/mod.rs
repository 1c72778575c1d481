//! Per-file record resolution with fixed strategy precedence, plus directory
//! collection.
//!
//! # Precedence
//!
//! 1. Bibliography files seed title/authors/year and any content fields the
//!    record block yields.
//! 2. When the title is still unset, filename inference seeds
//!    title/author/year.
//! 3. Free-text files overlay the five content fields with structured-section
//!    extraction. Overlay always wins over the bibliography step for content
//!    fields; free-text files are the primary data source for body content.
//! 4. Every field passes through the UNKNOWN-sentinel fallback independently.
//!
//! Files with unsupported extensions are skipped entirely and produce no
//! record. Per-file read failures degrade to empty content and never abort a
//! scan.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::error::WatchError;
use crate::extract::{
    SectionFields, extract_bibliographic_fields, extract_sections, infer_from_stem,
};
use crate::normalize::or_unknown;
use crate::record::LiteratureRecord;

/// How a file participates in resolution, decided by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Reference-manager-style record block; parsed for key/value fields.
    Bibliography,
    /// Free text; eligible for labeled-section extraction.
    FreeText,
    /// Binary document; metadata-only record, no text is read.
    Document,
}

impl FileKind {
    /// Classifies a lower-cased extension, or `None` when unsupported.
    #[must_use]
    pub fn classify(extension: &str, config: &ScanConfig) -> Option<Self> {
        if config.bibliography_extensions.iter().any(|e| e == extension) {
            Some(Self::Bibliography)
        } else if config.free_text_extensions.iter().any(|e| e == extension) {
            Some(Self::FreeText)
        } else if config.document_extensions.iter().any(|e| e == extension) {
            Some(Self::Document)
        } else {
            None
        }
    }

    /// Classifies a path by its lower-cased extension.
    #[must_use]
    pub fn classify_path(path: &Path, config: &ScanConfig) -> Option<Self> {
        Self::classify(&extension_of(path), config)
    }
}

/// Lower-cased extension without the leading dot; empty when none.
#[must_use]
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Resolves one eligible file into a record.
///
/// Filesystem metadata (size, mtime) must be readable; content reads are
/// best-effort and degrade to empty input.
///
/// # Errors
///
/// Returns [`WatchError::Io`] when the file's metadata cannot be read.
#[instrument(skip(config), fields(path = %path.display()))]
pub fn resolve_file(path: &Path, config: &ScanConfig) -> Result<LiteratureRecord, WatchError> {
    let kind = FileKind::classify_path(path, config);
    let metadata = fs::metadata(path).map_err(|e| WatchError::io(path, e))?;

    let mut title: Option<String> = None;
    let mut authors: Option<String> = None;
    let mut year: Option<String> = None;
    let mut content = SectionFields::default();

    if kind == Some(FileKind::Bibliography) {
        let bib = extract_bibliographic_fields(&read_text_lossy(path), config);
        title = bib.title;
        authors = bib.authors;
        year = bib.year;
        content.objective = bib.objective;
        content.keywords = bib.keywords;
    }

    if title.is_none() {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let guess = infer_from_stem(&stem);
        title = Some(guess.title);
        authors = guess.author;
        year = guess.year;
    }

    if kind == Some(FileKind::FreeText) {
        // Overlay, not merge-if-absent: section extraction replaces all five
        // content fields regardless of what earlier steps produced.
        content = extract_sections(&read_text_lossy(path), config);
    }

    let sentinel = config.unknown.as_str();
    Ok(LiteratureRecord {
        file_name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        title: or_unknown(title, sentinel),
        authors: or_unknown(authors, sentinel),
        year: or_unknown(year, sentinel),
        file_type: extension_of(path),
        size_kb: format_size_kb(metadata.len()),
        modified_time: format_mtime(metadata.modified().map_err(|e| WatchError::io(path, e))?),
        absolute_path: absolute_path_of(path),
        objective: or_unknown(content.objective, sentinel),
        keywords: or_unknown(content.keywords, sentinel),
        methods: or_unknown(content.methods, sentinel),
        results_conclusion: or_unknown(content.results_conclusion, sentinel),
        innovation_limitations: or_unknown(content.innovation_limitations, sentinel),
    })
}

/// Resolves every eligible file under `root` into records, sorted
/// case-insensitively by file name.
///
/// The sort order is part of the observable contract: it must be stable for
/// identical inputs regardless of filesystem enumeration order.
///
/// # Errors
///
/// Returns [`WatchError::WatchRootInvalid`] when `root` is not a directory
/// and propagates metadata failures from [`resolve_file`].
#[instrument(skip(config), fields(root = %root.display()))]
pub fn collect_records(
    root: &Path,
    config: &ScanConfig,
) -> Result<Vec<LiteratureRecord>, WatchError> {
    if !root.is_dir() {
        return Err(WatchError::invalid_root(root));
    }

    let mut paths = eligible_files(root, config);
    paths.sort_by_key(|path| {
        path.file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    });

    let mut records = Vec::with_capacity(paths.len());
    for path in &paths {
        records.push(resolve_file(path, config)?);
    }
    debug!(records = records.len(), "resolved literature records");
    Ok(records)
}

/// Recursively lists files under `root` whose extension is supported.
/// Unreadable directory entries are skipped with a warning.
#[must_use]
pub fn eligible_files(root: &Path, config: &ScanConfig) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(error) => {
                warn!(%error, "skipping unreadable directory entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| config.is_supported_extension(&extension_of(path)))
        .collect()
}

/// Reads file content as text; unreadable or undecodable content degrades to
/// empty input so extraction proceeds and the file still gets a record.
fn read_text_lossy(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(error) => {
            warn!(path = %path.display(), %error, "unreadable file content; treating as empty");
            String::new()
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn format_size_kb(bytes: u64) -> String {
    format!("{:.1}", bytes as f64 / 1024.0)
}

fn format_mtime(mtime: SystemTime) -> String {
    DateTime::<Local>::from(mtime)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

fn absolute_path_of(path: &Path) -> String {
    fs::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .to_string_lossy()
        .into_owned()
}
