use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};
use strum::EnumIter;

/// `General` is the opening state, catching everything before the first
/// trigger fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum SectionLabel {
    General,
    ManagementDiscussion,
    RiskFactors,
    FinancialStatements,
}

impl fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionLabel::General => write!(f, "General"),
            SectionLabel::ManagementDiscussion => write!(f, "MD&A"),
            SectionLabel::RiskFactors => write!(f, "Risk Factors"),
            SectionLabel::FinancialStatements => write!(f, "Financial Statements"),
        }
    }
}

impl FromStr for SectionLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "General" => Ok(SectionLabel::General),
            "MD&A" => Ok(SectionLabel::ManagementDiscussion),
            "Risk Factors" => Ok(SectionLabel::RiskFactors),
            "Financial Statements" => Ok(SectionLabel::FinancialStatements),
            _ => Err(format!("Unknown section label: {}", s)),
        }
    }
}

impl Serialize for SectionLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Triggers are matched against the already-lowercased sentence.
pub struct KeywordRule {
    pub label: SectionLabel,
    pub triggers: Vec<&'static str>,
}

impl KeywordRule {
    pub fn matches(&self, lowered_sentence: &str) -> bool {
        self.triggers.iter().any(|t| lowered_sentence.contains(t))
    }
}

/// Evaluation order matters: a sentence matching several rules ends up in
/// the last one listed here.
pub static SECTION_RULES: Lazy<Vec<KeywordRule>> = Lazy::new(|| {
    vec![
        KeywordRule {
            label: SectionLabel::ManagementDiscussion,
            triggers: vec!["management", "discussion"],
        },
        KeywordRule {
            label: SectionLabel::RiskFactors,
            triggers: vec!["risk", "uncertainty"],
        },
        KeywordRule {
            label: SectionLabel::FinancialStatements,
            triggers: vec!["revenue", "profit", "assets", "liabilities"],
        },
    ]
});

/// Keys appear in first-touch order, `General` always first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SectionMap(IndexMap<SectionLabel, Vec<String>>);

impl SectionMap {
    pub fn new() -> Self {
        let mut sections = IndexMap::new();
        sections.insert(SectionLabel::General, Vec::new());
        SectionMap(sections)
    }

    pub fn ensure(&mut self, label: SectionLabel) {
        self.0.entry(label).or_default();
    }

    pub fn push(&mut self, label: SectionLabel, sentence: String) {
        self.0.entry(label).or_default().push(sentence);
    }

    pub fn get(&self, label: SectionLabel) -> Option<&Vec<String>> {
        self.0.get(&label)
    }

    pub fn set(&mut self, label: SectionLabel, sentences: Vec<String>) {
        self.0.insert(label, sentences);
    }

    pub fn labels(&self) -> impl Iterator<Item = SectionLabel> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionLabel, &Vec<String>)> {
        self.0.iter().map(|(label, sentences)| (*label, sentences))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SectionMap {
    fn default() -> Self {
        Self::new()
    }
}

pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split('.')
}

/// Carries a current section that any matching rule reassigns; every split
/// piece is filed, trimmed, under the section current after all rules ran.
/// Empty trailing fragments are filed too, so buckets reconstruct the split.
pub fn segment(text: &str, rules: &[KeywordRule]) -> SectionMap {
    let mut sections = SectionMap::new();
    let mut current = SectionLabel::General;
    for sentence in sentences(text) {
        let lowered = sentence.to_lowercase();
        for rule in rules {
            if rule.matches(&lowered) {
                current = rule.label;
                sections.ensure(current);
            }
        }
        sections.push(current, sentence.trim().to_string());
    }
    sections
}
