use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};

use crate::analyzer::{EntitySpan, RuleAnalyzer};
use crate::utils::dirs::ensure_parent;

pub const ANNOTATE_LIMIT: usize = 300; // Texts considered per run, counted before filtering

/// Serialized as the `[text, {"entities": [...]}]` pair training scripts consume.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledExample {
    pub text: String,
    pub entities: Vec<EntitySpan>,
}

impl Serialize for LabeledExample {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Spans<'a> {
            entities: &'a [EntitySpan],
        }

        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.text)?;
        pair.serialize_element(&Spans {
            entities: &self.entities,
        })?;
        pair.end()
    }
}

pub fn annotate(analyzer: &RuleAnalyzer, text: &str) -> LabeledExample {
    LabeledExample {
        entities: analyzer.entity_spans(text),
        text: text.to_string(),
    }
}

/// `limit` caps texts considered, not examples kept.
pub fn annotate_corpus(
    analyzer: &RuleAnalyzer,
    texts: &[String],
    limit: usize,
) -> Vec<LabeledExample> {
    texts
        .iter()
        .take(limit)
        .map(|text| annotate(analyzer, text))
        .filter(|example| !example.entities.is_empty())
        .collect()
}

pub fn write_training_data(path: impl AsRef<Path>, examples: &[LabeledExample]) -> Result<()> {
    let path = path.as_ref();
    ensure_parent(path)?;
    let json = serde_json::to_string(examples)?;
    fs::write(path, json)
        .map_err(|e| anyhow!("Failed to write training data {}: {}", path.display(), e))?;
    log::info!(
        "Wrote {} training examples to {}",
        examples.len(),
        path.display()
    );
    Ok(())
}
