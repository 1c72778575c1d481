//! Best-effort title/author/year inference from a bare file stem.
//!
//! Tuned for names following the `<year>_<Author>_<Title>` convention
//! (e.g. `2021_Smith_Transformer Survey`). Names outside that convention may
//! mis-segment; that is accepted degraded output, not an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::normalize::compile_static_regex;

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| compile_static_regex(r"(19|20)\d{2}"));
static DELIMITER_RE: LazyLock<Regex> = LazyLock::new(|| compile_static_regex(r"[_\-]+"));

/// Residual delimiter characters stripped from title edges after year removal.
const TITLE_EDGE: &[char] = &[' ', '_', '-'];

/// What the stem heuristic could recover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemGuess {
    /// Candidate title; never empty (falls back to the whole stem).
    pub title: String,
    /// First title-cased alphabetic token, when one exists.
    pub author: Option<String>,
    /// First 4-digit run starting with 19 or 20, when one exists.
    pub year: Option<String>,
}

/// Infers (title, author, year) from a file name without extension.
///
/// Tokens are produced by splitting on runs of underscore/hyphen. The first
/// token that is alphabetic, longer than two characters, and title-cased is
/// consumed as the author; the remaining tokens joined with spaces form the
/// title. A found year has its literal substring removed from the title.
#[must_use]
pub fn infer_from_stem(stem: &str) -> StemGuess {
    let year = YEAR_RE.find(stem).map(|m| m.as_str().to_string());

    let mut author: Option<String> = None;
    let mut title_parts: Vec<&str> = Vec::new();
    for part in DELIMITER_RE.split(stem) {
        let cleaned = part.trim();
        if cleaned.is_empty() {
            continue;
        }
        if author.is_none() && is_author_candidate(cleaned) {
            author = Some(cleaned.to_string());
            continue;
        }
        title_parts.push(cleaned);
    }

    let mut title = if title_parts.is_empty() {
        stem.to_string()
    } else {
        title_parts.join(" ")
    };
    if let Some(year) = &year {
        title = title.replace(year.as_str(), "").trim_matches(TITLE_EDGE).to_string();
    }
    if title.is_empty() {
        title = stem.to_string();
    }

    StemGuess {
        title,
        author,
        year,
    }
}

/// Author tokens are alphabetic, longer than two characters, and title-cased
/// (first letter capital, rest lowercase).
fn is_author_candidate(token: &str) -> bool {
    if token.chars().count() <= 2 {
        return false;
    }
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_alphabetic()
        && first.is_uppercase()
        && chars.all(|c| c.is_alphabetic() && c.is_lowercase())
}
