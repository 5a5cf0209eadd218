use anyhow::Result;
use indexmap::IndexSet;

use crate::analyzer::{EntityLabel, TextAnalyzer};

pub const UNKNOWN_COMPANY: &str = "Unknown Company";

/// Organisation names deduplicated in first-seen order and capped at
/// `top_n`. Never empty: the placeholder stands in when nothing matched.
pub fn extract_company_names(
    analyzer: &dyn TextAnalyzer,
    text: &str,
    top_n: usize,
) -> Result<Vec<String>> {
    let names: IndexSet<String> = analyzer
        .entities(text)?
        .into_iter()
        .filter(|e| e.label == EntityLabel::Org)
        .map(|e| e.text)
        .collect();
    let names: Vec<String> = names.into_iter().take(top_n).collect();
    if names.is_empty() {
        return Ok(vec![UNKNOWN_COMPANY.to_string()]);
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::stub::StubAnalyzer;
    use crate::analyzer::Entity;

    #[test]
    fn test_dedup_keeps_first_seen_order() {
        let analyzer = StubAnalyzer::with_entities(vec![
            Entity::new("Infosys", EntityLabel::Org),
            Entity::new("TCS", EntityLabel::Org),
            Entity::new("Infosys", EntityLabel::Org),
            Entity::new("HDFC", EntityLabel::Org),
        ]);
        let names = extract_company_names(&analyzer, "ignored", 3).unwrap();
        assert_eq!(names, vec!["Infosys", "TCS", "HDFC"]);
    }

    #[test]
    fn test_top_n_caps_after_dedup() {
        let analyzer = StubAnalyzer::with_entities(vec![
            Entity::new("Infosys", EntityLabel::Org),
            Entity::new("TCS", EntityLabel::Org),
            Entity::new("HDFC", EntityLabel::Org),
        ]);
        let names = extract_company_names(&analyzer, "ignored", 2).unwrap();
        assert_eq!(names, vec!["Infosys", "TCS"]);
    }

    #[test]
    fn test_placeholder_when_nothing_found() {
        let analyzer = StubAnalyzer::empty();
        let names = extract_company_names(&analyzer, "ignored", 3).unwrap();
        assert_eq!(names, vec![UNKNOWN_COMPANY]);
    }

    #[test]
    fn test_non_organisation_entities_ignored() {
        let analyzer =
            StubAnalyzer::with_entities(vec![Entity::new("Rs 500 crore", EntityLabel::Money)]);
        let names = extract_company_names(&analyzer, "ignored", 3).unwrap();
        assert_eq!(names, vec![UNKNOWN_COMPANY]);
    }
}
