use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::analyzer::Entity;
use crate::extract::TableRow;
use crate::segment::SectionMap;
use crate::utils::dirs::ensure_parent;

pub fn default_data_sources() -> Vec<String> {
    vec![
        "Financial News Dataset (Kaggle)".to_string(),
        "Indian Financial News Dataset (Kaggle)".to_string(),
        "SEC 10-K Annual Report (Text)".to_string(),
    ]
}

/// Field order here is the key order of the emitted JSON.
#[derive(Debug, Serialize)]
pub struct FinalOutput {
    pub company: Vec<String>,
    pub sections: SectionMap,
    pub sample_entities: Vec<Vec<Entity>>,
    pub custom_extraction_example: Vec<String>,
    pub tables: Vec<TableRow>,
    pub data_sources: Vec<String>,
}

pub fn write_output(path: impl AsRef<Path>, output: &FinalOutput) -> Result<()> {
    let path = path.as_ref();
    ensure_parent(path)?;
    let json = serde_json::to_string_pretty(output)?;
    fs::write(path, json)
        .map_err(|e| anyhow!("Failed to write output {}: {}", path.display(), e))?;
    log::info!("Wrote structured output to {}", path.display());
    Ok(())
}
