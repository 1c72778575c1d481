//! Lightweight regex extraction of common fields from bibliography text.
//!
//! This strategy does not parse entry structure; it searches the whole text
//! for `name = {value}` / `name = "value"` assignments, case-insensitively
//! and across line breaks, honoring only the first occurrence of each field
//! name. Later duplicate keys are ignored as a deliberate simplicity
//! trade-off.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::ScanConfig;
use crate::normalize::{clean_field, compile_static_regex};

/// Builds the field-assignment regex for one bibliography key.
///
/// The value is delimited by a brace pair or a quote pair and may wrap across
/// lines (`(?s)` dot-matches-newline inside the delimiter class complement).
fn field_regex(name: &str) -> Regex {
    compile_static_regex(&format!(r#"(?is){name}\s*=\s*[{{"]([^}}"]+)[}}"]"#))
}

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| field_regex("title"));
static AUTHOR_RE: LazyLock<Regex> = LazyLock::new(|| field_regex("author"));
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| field_regex("year"));
static ABSTRACT_RE: LazyLock<Regex> = LazyLock::new(|| field_regex("abstract"));
static KEYWORDS_RE: LazyLock<Regex> = LazyLock::new(|| field_regex("keywords"));

/// Fields this strategy can yield. Methods, results, and limitations never
/// appear in bibliography records and are always absent from this strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BibFields {
    /// Entry title.
    pub title: Option<String>,
    /// Author string as written in the record.
    pub authors: Option<String>,
    /// Publication year.
    pub year: Option<String>,
    /// Abstract, mapped onto the objective field.
    pub objective: Option<String>,
    /// Keyword list.
    pub keywords: Option<String>,
}

impl BibFields {
    /// Returns true when no field was found at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.authors.is_none()
            && self.year.is_none()
            && self.objective.is_none()
            && self.keywords.is_none()
    }
}

/// Extracts title/authors/year/objective/keywords from bibliography text.
///
/// Fields not found stay `None`; the resolver applies the final fallback.
/// Long-form fields (objective, keywords) are truncated to the configured
/// bound; title/authors/year are normalized without truncation.
#[must_use]
pub fn extract_bibliographic_fields(content: &str, config: &ScanConfig) -> BibFields {
    let bound = Some(config.max_field_chars);
    BibFields {
        title: first_value(content, &TITLE_RE, None),
        authors: first_value(content, &AUTHOR_RE, None),
        year: first_value(content, &YEAR_RE, None),
        objective: first_value(content, &ABSTRACT_RE, bound),
        keywords: first_value(content, &KEYWORDS_RE, bound),
    }
}

fn first_value(content: &str, re: &Regex, max_chars: Option<usize>) -> Option<String> {
    re.captures(content)
        .and_then(|caps| caps.get(1))
        .and_then(|m| clean_field(m.as_str(), max_chars))
}
