pub mod company;
pub mod tables;

pub use company::{extract_company_names, UNKNOWN_COMPANY};
pub use tables::{is_table_line, parse_table, TableRow, TABLE_DIGIT_THRESHOLD};

use crate::segment::sentences;

pub const RISK_KEYWORDS: &[&str] = &[
    "risk",
    "uncertain",
    "challenge",
    "threat",
    "slowdown",
    "regulatory",
    "litigation",
    "debt",
    "loss",
    "decline",
    "volatility",
];

pub const MIN_RISK_SENTENCE_CHARS: usize = 40; // Sentences at or under this read as headings

pub fn extract_by_keyword(text: &str, keyword: &str) -> Vec<String> {
    let needle = keyword.to_lowercase();
    sentences(text)
        .filter(|s| s.to_lowercase().contains(&needle))
        .map(|s| s.trim().to_string())
        .collect()
}

/// Sentences containing any of `keywords` and strictly longer than
/// `min_chars` characters (not bytes) once trimmed.
pub fn filter_by_keywords(text: &str, keywords: &[&str], min_chars: usize) -> Vec<String> {
    sentences(text)
        .map(str::trim)
        .filter(|s| {
            let lowered = s.to_lowercase();
            s.chars().count() > min_chars && keywords.iter().any(|k| lowered.contains(k))
        })
        .map(str::to_string)
        .collect()
}
