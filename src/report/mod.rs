use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Result};
use chardet::detect;
use encoding_rs::Encoding;
use encoding_rs_io::DecodeReaderBytesBuilder;

use crate::segment::SectionLabel;

/// Sniffs the encoding from the raw bytes; undecodable sequences become
/// replacement characters instead of failing the load.
pub fn load_report(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let raw = fs::read(path)
        .map_err(|e| anyhow!("Failed to read annual report {}: {}", path.display(), e))?;
    let charenc = detect(&raw).0;
    log::debug!(
        "Detected character encoding {} for {}",
        charenc,
        path.display()
    );

    let mut reader = DecodeReaderBytesBuilder::new()
        .encoding(Encoding::for_label(charenc.as_bytes()))
        .build(&raw[..]);
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReportSections {
    pub risk_factors: Vec<String>,
    pub management_discussion: Vec<String>,
    pub financial_statements: Vec<String>,
}

impl ReportSections {
    pub fn line_counts(&self) -> Vec<(SectionLabel, usize)> {
        vec![
            (SectionLabel::RiskFactors, self.risk_factors.len()),
            (
                SectionLabel::ManagementDiscussion,
                self.management_discussion.len(),
            ),
            (
                SectionLabel::FinancialStatements,
                self.financial_statements.len(),
            ),
        ]
    }

    pub fn total_lines(&self) -> usize {
        self.risk_factors.len() + self.management_discussion.len() + self.financial_statements.len()
    }
}

/// Files each line, trimmed, under the first heading trigger it contains;
/// unmatched lines are dropped. Both apostrophe forms of "management's
/// discussion" are recognized.
pub fn classify_lines(text: &str) -> ReportSections {
    let mut sections = ReportSections::default();
    for line in text.split('\n') {
        let lowered = line.to_lowercase();
        if lowered.contains("risk factor") {
            sections.risk_factors.push(line.trim().to_string());
        } else if lowered.contains("management's discussion")
            || lowered.contains("management’s discussion")
        {
            sections.management_discussion.push(line.trim().to_string());
        } else if lowered.contains("financial statement") {
            sections.financial_statements.push(line.trim().to_string());
        }
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_classify_lines_buckets() {
        let text = "Item 1A. Risk Factors\n\
                    Our business faces many risk factors described below.\n\
                    Item 7. Management's Discussion and Analysis\n\
                    Item 8. Financial Statements and Supplementary Data\n\
                    Unrelated boilerplate line\n";
        let sections = classify_lines(text);
        assert_eq!(sections.risk_factors.len(), 2);
        assert_eq!(sections.management_discussion.len(), 1);
        assert_eq!(sections.financial_statements.len(), 1);
        assert_eq!(sections.total_lines(), 4);
    }

    #[test]
    fn test_risk_trigger_takes_priority() {
        let sections = classify_lines("Risk Factors and Financial Statements overview");
        assert_eq!(sections.risk_factors.len(), 1);
        assert!(sections.financial_statements.is_empty());
    }

    #[test]
    fn test_curly_apostrophe_recognized() {
        let sections = classify_lines("Management’s Discussion and Analysis of Operations");
        assert_eq!(sections.management_discussion.len(), 1);
    }

    #[test]
    fn test_matched_lines_stored_trimmed() {
        let sections = classify_lines("   Item 1A. Risk Factors   \n");
        assert_eq!(sections.risk_factors, vec!["Item 1A. Risk Factors".to_string()]);
    }

    #[test]
    fn test_line_counts_order() {
        let counts = classify_lines("").line_counts();
        let labels: Vec<SectionLabel> = counts.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec![
                SectionLabel::RiskFactors,
                SectionLabel::ManagementDiscussion,
                SectionLabel::FinancialStatements,
            ]
        );
    }

    #[test]
    fn test_load_report_round_trips_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "Item 1A. Risk Factors\nRevenue was 4500\n").unwrap();

        let text = load_report(&path).unwrap();
        assert_eq!(text, "Item 1A. Risk Factors\nRevenue was 4500\n");
    }

    #[test]
    fn test_load_report_never_fails_on_undecodable_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mangled.txt");
        std::fs::write(&path, b"Item 1A. Risk Factors\nTotal assets \xFF\xFE 4500\n").unwrap();

        let text = load_report(&path).unwrap();
        let sections = classify_lines(&text);
        assert_eq!(sections.risk_factors, vec!["Item 1A. Risk Factors".to_string()]);
    }

    #[test]
    fn test_stray_continuation_byte_keeps_line_classifiable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mangled.txt");
        std::fs::write(
            &path,
            b"Item 1A. Risk Factors \x80 continued\nItem 8. Financial Statements\n",
        )
        .unwrap();

        let text = load_report(&path).unwrap();
        let sections = classify_lines(&text);
        assert_eq!(sections.risk_factors.len(), 1);
        assert!(sections.risk_factors[0].starts_with("Item 1A. Risk Factors"));
        assert_eq!(sections.financial_statements.len(), 1);
    }

    #[test]
    fn test_load_report_missing_file_fails() {
        assert!(load_report("does/not/exist.txt").is_err());
    }
}
