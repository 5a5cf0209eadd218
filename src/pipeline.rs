use std::path::PathBuf;

use anyhow::Result;
use itertools::Itertools;

use crate::analyzer::{Entity, TextAnalyzer};
use crate::core::PipelineConfig;
use crate::document::Document;
use crate::extract::{
    extract_by_keyword, extract_company_names, filter_by_keywords, is_table_line, parse_table,
    MIN_RISK_SENTENCE_CHARS, RISK_KEYWORDS,
};
use crate::ingest::{self, load_news_corpus};
use crate::normalize::preprocess;
use crate::output::{default_data_sources, write_output, FinalOutput};
use crate::report::{classify_lines, load_report};
use crate::segment::{segment, sentences, SectionLabel, SectionMap, SECTION_RULES};

pub const PREPROCESS_SAMPLE: usize = 5;
pub const NER_SAMPLE: usize = 5;
pub const ENTITY_SNAPSHOT_LIMIT: usize = 3; // Entity lists carried into the artifact
pub const LONG_DOCUMENT_LIMIT: usize = 200; // Articles stitched into the long document
pub const TABLE_LINE_LIMIT: usize = 5;
pub const RISK_FALLBACK_LIMIT: usize = 5;
pub const COMPANY_LIMIT: usize = 3;

pub const CUSTOM_KEYWORDS: &[&str] = &["revenue", "profit", "assets", "liabilities"];

#[derive(Debug)]
pub struct RunSummary {
    pub documents: usize,
    pub section_labels: Vec<SectionLabel>,
    pub company: Vec<String>,
    pub table_rows: usize,
    pub annual_report: bool,
    pub output_path: PathBuf,
}

pub fn run(config: &PipelineConfig, analyzer: &dyn TextAnalyzer) -> Result<RunSummary> {
    let documents = load_news_corpus(&config.news_sources)?;
    log::info!("Combined dataset size: {} documents", documents.len());

    let word_counts: Vec<usize> = documents.iter().map(|d| d.word_count()).collect();
    log::info!("Corpus length summary: {}", ingest::describe(&word_counts));

    let processed = documents
        .iter()
        .take(PREPROCESS_SAMPLE)
        .map(|doc| preprocess(analyzer, &doc.content))
        .collect::<Result<Vec<_>>>()?;
    if let Some(first) = processed.first() {
        log::debug!(
            "Sample preprocessed output: {}",
            serde_json::to_string(first)?
        );
    }

    let entity_samples = documents
        .iter()
        .take(NER_SAMPLE)
        .map(|doc| analyzer.entities(&doc.content))
        .collect::<Result<Vec<Vec<Entity>>>>()?;
    if let Some(first) = entity_samples.first() {
        log::debug!("Sample entities: {}", serde_json::to_string(first)?);
    }

    // User-defined extraction, demonstrated on the first article.
    let first_content = documents
        .first()
        .map(|doc| doc.content.as_str())
        .unwrap_or_default();
    for keyword in CUSTOM_KEYWORDS {
        let matches = extract_by_keyword(first_content, keyword);
        if !matches.is_empty() {
            log::info!(
                "{} -> {} matching sentences",
                keyword.to_uppercase(),
                matches.len()
            );
        }
    }
    let custom_extraction_example = extract_by_keyword(first_content, "profit");

    // Long-document handling: stitch the head of the corpus into one text.
    let long_document = build_long_document(&documents);
    log::info!(
        "Long document length: {} characters",
        long_document.chars().count()
    );

    let mut sections = segment(&long_document, &SECTION_RULES);
    log::info!(
        "Detected sections: {}",
        sections.labels().map(|label| label.to_string()).join(", ")
    );

    let table_lines: Vec<&str> = sentences(&long_document)
        .filter(|line| is_table_line(line))
        .collect();
    let table_cap = TABLE_LINE_LIMIT.min(table_lines.len());
    let tables = parse_table(&table_lines[..table_cap]);
    log::info!(
        "Parsed {} table rows from {} table-like lines",
        tables.len(),
        table_lines.len()
    );

    let company = extract_company_names(analyzer, &long_document, COMPANY_LIMIT)?;
    log::info!("Companies: {}", company.join(", "));

    let annual_report = process_annual_report(config);

    let risk_fallback: Vec<String> =
        filter_by_keywords(&long_document, RISK_KEYWORDS, MIN_RISK_SENTENCE_CHARS)
            .into_iter()
            .take(RISK_FALLBACK_LIMIT)
            .collect();
    apply_risk_fallback(&mut sections, risk_fallback);

    let output = FinalOutput {
        company: company.clone(),
        sections,
        sample_entities: entity_samples
            .into_iter()
            .take(ENTITY_SNAPSHOT_LIMIT)
            .collect(),
        custom_extraction_example,
        tables,
        data_sources: default_data_sources(),
    };
    write_output(&config.output_path, &output)?;

    Ok(RunSummary {
        documents: documents.len(),
        section_labels: output.sections.labels().collect(),
        company,
        table_rows: output.tables.len(),
        annual_report,
        output_path: config.output_path.clone(),
    })
}

fn build_long_document(documents: &[Document]) -> String {
    documents
        .iter()
        .take(LONG_DOCUMENT_LIMIT)
        .map(|doc| doc.content.as_str())
        .join(" ")
}

/// The annual report is optional input. A load failure is logged and
/// skipped; everything downstream runs on the news corpus alone.
fn process_annual_report(config: &PipelineConfig) -> bool {
    let annual_text = match load_report(&config.annual_report_path) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Annual report unavailable, skipping: {}", e);
            return false;
        }
    };
    log::info!(
        "Annual report length: {} characters",
        annual_text.chars().count()
    );

    let report_sections = classify_lines(&annual_text);
    for (label, count) in report_sections.line_counts() {
        log::info!("{}: {} lines", label, count);
    }
    true
}

/// Replaces the news risk bucket with the fallback sentences only when the
/// segmenter produced that bucket and left it empty.
fn apply_risk_fallback(sections: &mut SectionMap, fallback: Vec<String>) {
    if sections
        .get(SectionLabel::RiskFactors)
        .map_or(false, |bucket| bucket.is_empty())
    {
        sections.set(SectionLabel::RiskFactors, fallback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_long_document_joins_with_spaces() {
        let documents = vec![
            Document::new("First story"),
            Document::new("Second story"),
        ];
        assert_eq!(build_long_document(&documents), "First story Second story");
    }

    #[test]
    fn test_build_long_document_caps_articles() {
        let documents: Vec<Document> = (0..LONG_DOCUMENT_LIMIT + 50)
            .map(|i| Document::new(format!("story{}", i)))
            .collect();
        let long_document = build_long_document(&documents);
        assert!(long_document.contains("story199"));
        assert!(!long_document.contains("story200"));
    }

    #[test]
    fn test_risk_fallback_fills_empty_bucket() {
        let mut sections = SectionMap::new();
        sections.ensure(SectionLabel::RiskFactors);
        apply_risk_fallback(
            &mut sections,
            vec!["Debt levels remain a challenge".to_string()],
        );
        assert_eq!(
            sections.get(SectionLabel::RiskFactors).unwrap(),
            &vec!["Debt levels remain a challenge".to_string()]
        );
    }

    #[test]
    fn test_risk_fallback_skips_missing_bucket() {
        let mut sections = SectionMap::new();
        apply_risk_fallback(&mut sections, vec!["anything".to_string()]);
        assert!(sections.get(SectionLabel::RiskFactors).is_none());
    }

    #[test]
    fn test_risk_fallback_never_overwrites_content() {
        let mut sections = SectionMap::new();
        sections.push(
            SectionLabel::RiskFactors,
            "Existing risk sentence".to_string(),
        );
        apply_risk_fallback(&mut sections, vec!["fallback".to_string()]);
        assert_eq!(
            sections.get(SectionLabel::RiskFactors).unwrap(),
            &vec!["Existing risk sentence".to_string()]
        );
    }
}
