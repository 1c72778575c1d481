//! Field normalization: whitespace collapse, delimiter stripping, truncation,
//! and the UNKNOWN-sentinel fallback.
//!
//! Every value that ends up in a [`crate::record::LiteratureRecord`] passes
//! through this module, so the "no field is ever empty" invariant is enforced
//! in exactly one place.

use std::sync::LazyLock;

use regex::Regex;

/// Compiles a regex at static init; panics on invalid pattern.
pub(crate) fn compile_static_regex(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid static regex '{pattern}': {e}"))
}

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| compile_static_regex(r"\s+"));

/// Punctuation stripped from field edges: spaces plus ASCII and fullwidth
/// colon/semicolon variants.
const EDGE_TRIM: &[char] = &[' ', ':', '：', ';', '；', '\n'];

/// Collapses internal whitespace runs to single spaces and strips edge
/// delimiter punctuation.
#[must_use]
pub fn collapse_whitespace(raw: &str) -> String {
    WHITESPACE_RUN
        .replace_all(raw, " ")
        .trim_matches(EDGE_TRIM)
        .to_string()
}

/// Normalizes a raw extracted value into a presentable field.
///
/// Whitespace is collapsed, edge delimiters stripped, and the result truncated
/// to `max_chars` characters when a bound is given (long-form fields only).
/// Returns `None` when nothing non-empty survives, so the caller can apply the
/// sentinel fallback via [`or_unknown`].
#[must_use]
pub fn clean_field(raw: &str, max_chars: Option<usize>) -> Option<String> {
    let cleaned = collapse_whitespace(raw);
    if cleaned.is_empty() {
        return None;
    }
    match max_chars {
        Some(bound) => Some(cleaned.chars().take(bound).collect()),
        None => Some(cleaned),
    }
}

/// Resolves an optional field to its value or the UNKNOWN sentinel.
///
/// Empty and whitespace-only values also fall back to the sentinel; no record
/// field is ever the empty string.
#[must_use]
pub fn or_unknown(value: Option<String>, sentinel: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => sentinel.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace_joins_runs() {
        assert_eq!(
            collapse_whitespace("A  Demo\n\tPaper"),
            "A Demo Paper",
            "internal whitespace runs become single spaces"
        );
    }

    #[test]
    fn test_collapse_whitespace_strips_delimiters() {
        assert_eq!(collapse_whitespace("：结论; "), "结论");
        assert_eq!(collapse_whitespace(" : value ;"), "value");
    }

    #[test]
    fn test_clean_field_empty_input_is_none() {
        assert_eq!(clean_field("", None), None);
        assert_eq!(clean_field("   \n\t ", None), None);
        assert_eq!(clean_field(" ：；: ", Some(240)), None);
    }

    #[test]
    fn test_clean_field_truncates_by_characters_not_bytes() {
        let long = "研".repeat(300);
        let cleaned = clean_field(&long, Some(240)).unwrap_or_default();
        assert_eq!(cleaned.chars().count(), 240);
    }

    #[test]
    fn test_clean_field_unbounded_keeps_full_value() {
        let long = "a".repeat(500);
        assert_eq!(clean_field(&long, None).unwrap_or_default().len(), 500);
    }

    #[test]
    fn test_or_unknown_substitutes_sentinel() {
        assert_eq!(or_unknown(None, "未知"), "未知");
        assert_eq!(or_unknown(Some(String::new()), "未知"), "未知");
        assert_eq!(or_unknown(Some("  ".to_string()), "未知"), "未知");
        assert_eq!(or_unknown(Some("value".to_string()), "未知"), "value");
    }

    #[test]
    fn test_collapse_whitespace_is_idempotent() {
        let once = collapse_whitespace("  a   b : ");
        let twice = collapse_whitespace(&once);
        assert_eq!(once, twice, "collapse must be stable under reapplication");
    }
}
