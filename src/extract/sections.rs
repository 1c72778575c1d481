//! Bilingual labeled-section extraction from free text.
//!
//! Each section (objective, keywords, methods, results, limitations) has an
//! ordered list of label patterns covering Chinese and English variants. The
//! first pattern that yields a non-empty normalized value wins for that
//! section; later patterns are not tried. Sections are independent: every
//! pattern scans the whole text, never a shrinking remainder, so ambiguous
//! labels may duplicate text across sections. That is accepted behavior.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::ScanConfig;
use crate::normalize::{clean_field, compile_static_regex};

/// Builds a multi-line section pattern for the given label alternatives.
///
/// The label is anchored on an ASCII or fullwidth colon; the body is captured
/// up to the next blank line, the next line that looks like a new labeled
/// section (a short line ending in a colon), or end of text.
fn block_regex(labels: &str) -> Regex {
    compile_static_regex(&format!(
        r"(?is)(?:{labels})\s*[:：]\s*(.+?)(?:\n\s*\n|\n[A-Z\x{{4E00}}-\x{{9FFF}}].{{0,20}}[:：]|$)"
    ))
}

/// Builds a single-line section pattern: the body ends at the line break.
fn line_regex(labels: &str) -> Regex {
    compile_static_regex(&format!(r"(?is)(?:{labels})\s*[:：]\s*(.+?)(?:\n|$)"))
}

static OBJECTIVE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        block_regex("研究目的|目的|objective"),
        block_regex("摘要|abstract"),
    ]
});

static KEYWORDS_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| vec![line_regex("关键词|关键字|keywords?")]);

static METHODS_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| vec![block_regex("研究方法|方法|methods?")]);

static RESULTS_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| vec![block_regex("主要结果|结论|results?|conclusion")]);

static INNOVATION_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| vec![block_regex("创新点与不足|创新点|不足|limitations?")]);

/// Content fields this strategy can yield.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionFields {
    /// Research objective (or abstract fallback).
    pub objective: Option<String>,
    /// Keyword list.
    pub keywords: Option<String>,
    /// Methods summary.
    pub methods: Option<String>,
    /// Main results and conclusions.
    pub results_conclusion: Option<String>,
    /// Innovations and limitations.
    pub innovation_limitations: Option<String>,
}

/// Extracts the five labeled sections from free text.
///
/// Line endings are normalized to `\n` before matching. Each field is
/// normalized and truncated to the configured bound.
#[must_use]
pub fn extract_sections(text: &str, config: &ScanConfig) -> SectionFields {
    let cleaned = text.replace("\r\n", "\n").replace('\r', "\n");
    SectionFields {
        objective: first_match(&cleaned, &OBJECTIVE_PATTERNS, config),
        keywords: first_match(&cleaned, &KEYWORDS_PATTERNS, config),
        methods: first_match(&cleaned, &METHODS_PATTERNS, config),
        results_conclusion: first_match(&cleaned, &RESULTS_PATTERNS, config),
        innovation_limitations: first_match(&cleaned, &INNOVATION_PATTERNS, config),
    }
}

/// Tries patterns in order; the first non-empty normalized capture wins.
/// A pattern that matches but normalizes to nothing falls through to the next.
fn first_match(text: &str, patterns: &[Regex], config: &ScanConfig) -> Option<String> {
    patterns.iter().find_map(|re| {
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| clean_field(m.as_str(), Some(config.max_field_chars)))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_all_sections_from_chinese_text() {
        let text = "
研究目的：验证自动化文献整理流程。
关键词：文献管理, 自动化
研究方法：规则提取与文件监控。
主要结果与结论：可以提升检索和综述效率。
创新点与不足：轻量易用，但 PDF 深度解析待增强。
";
        let fields = extract_sections(text, &ScanConfig::default());
        assert!(fields.objective.unwrap().contains("自动化文献整理"));
        assert!(fields.keywords.unwrap().contains("文献管理"));
        assert!(fields.methods.unwrap().contains("规则提取"));
        assert!(fields.results_conclusion.unwrap().contains("检索"));
        assert!(fields.innovation_limitations.unwrap().contains("轻量易用"));
    }

    #[test]
    fn test_extract_english_labels() {
        let text = "objective: build a watcher\n\nmethods: rule-based extraction\n\nconclusion: works well\n";
        let fields = extract_sections(text, &ScanConfig::default());
        assert_eq!(fields.objective.as_deref(), Some("build a watcher"));
        assert_eq!(fields.methods.as_deref(), Some("rule-based extraction"));
        assert_eq!(fields.results_conclusion.as_deref(), Some("works well"));
    }

    #[test]
    fn test_mixed_language_labels_in_one_document() {
        let text = "关键词：A, B\nmethods: rule-based\n";
        let fields = extract_sections(text, &ScanConfig::default());
        assert_eq!(fields.keywords.as_deref(), Some("A, B"));
        assert_eq!(fields.methods.as_deref(), Some("rule-based"));
    }

    #[test]
    fn test_abstract_is_objective_fallback() {
        let text = "摘要：这是一个摘要。\n";
        let fields = extract_sections(text, &ScanConfig::default());
        assert!(fields.objective.unwrap().contains("这是一个摘要"));
    }

    #[test]
    fn test_primary_objective_label_beats_abstract() {
        let text = "摘要：次选内容\n\n研究目的：首选内容\n";
        let fields = extract_sections(text, &ScanConfig::default());
        assert!(
            fields.objective.unwrap().contains("首选内容"),
            "objective label list is tried before abstract"
        );
    }

    #[test]
    fn test_value_never_contains_label_or_delimiter() {
        let text = "研究方法：规则提取。\n";
        let methods = extract_sections(text, &ScanConfig::default())
            .methods
            .unwrap();
        assert!(!methods.contains("研究方法"));
        assert!(!methods.contains('：'));
    }

    #[test]
    fn test_body_stops_at_blank_line() {
        let text = "objective: first paragraph\nstill objective\n\nunrelated trailing text\n";
        let objective = extract_sections(text, &ScanConfig::default())
            .objective
            .unwrap();
        assert!(objective.contains("first paragraph"));
        assert!(objective.contains("still objective"));
        assert!(!objective.contains("unrelated"));
    }

    #[test]
    fn test_body_stops_at_next_labeled_line() {
        let text = "研究目的：验证流程\n研究方法：规则提取\n";
        let fields = extract_sections(text, &ScanConfig::default());
        let objective = fields.objective.unwrap();
        assert!(objective.contains("验证流程"));
        assert!(!objective.contains("规则提取"));
    }

    #[test]
    fn test_keywords_stop_at_line_end() {
        let text = "keywords: alpha, beta\ngamma\n";
        let keywords = extract_sections(text, &ScanConfig::default())
            .keywords
            .unwrap();
        assert_eq!(keywords, "alpha, beta");
    }

    #[test]
    fn test_crlf_input_is_normalized() {
        let text = "objective: cross platform\r\n\r\nmethods: none\r\n";
        let fields = extract_sections(text, &ScanConfig::default());
        assert_eq!(fields.objective.as_deref(), Some("cross platform"));
    }

    #[test]
    fn test_missing_sections_stay_none() {
        let fields = extract_sections("just some prose without labels\n", &ScanConfig::default());
        assert_eq!(fields, SectionFields::default());
    }

    #[test]
    fn test_long_section_truncated_to_bound() {
        let config = ScanConfig {
            max_field_chars: 16,
            ..ScanConfig::default()
        };
        let body = "x".repeat(100);
        let text = format!("objective: {body}\n");
        let objective = extract_sections(&text, &config).objective.unwrap();
        assert_eq!(objective.chars().count(), 16);
    }

    #[test]
    fn test_sections_scan_whole_text_independently() {
        // "结论" appearing before "方法" must not stop methods from matching.
        let text = "结论：提升效率\n\n研究方法：规则提取\n";
        let fields = extract_sections(text, &ScanConfig::default());
        assert!(fields.results_conclusion.unwrap().contains("提升效率"));
        assert!(fields.methods.unwrap().contains("规则提取"));
    }
}
