//! The resolved literature record model.

use serde::Serialize;

/// One resolved literature entry, created fresh on every scan pass.
///
/// All fields are textual and non-empty: anything the resolution pipeline
/// could not determine holds the UNKNOWN sentinel instead of an empty string,
/// so consumers of the serialized payload never branch on emptiness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiteratureRecord {
    /// Base name of the file, including extension.
    pub file_name: String,
    /// Resolved title; falls back to the bare file stem when no source yields one.
    pub title: String,
    /// Resolved author string.
    pub authors: String,
    /// Four-digit year string, or the sentinel.
    pub year: String,
    /// Lower-cased extension without the leading dot.
    pub file_type: String,
    /// File size in KB with one fractional digit.
    pub size_kb: String,
    /// Modification time as `YYYY-MM-DD HH:MM:SS`.
    pub modified_time: String,
    /// Fully resolved path.
    pub absolute_path: String,
    /// Research objective (or abstract), truncated.
    pub objective: String,
    /// Keyword list as free text.
    pub keywords: String,
    /// Methods summary.
    pub methods: String,
    /// Main results and conclusions.
    pub results_conclusion: String,
    /// Innovations and limitations.
    pub innovation_limitations: String,
}
