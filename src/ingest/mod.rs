pub mod stats;

pub use stats::{describe, LengthSummary};

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use csv::ReaderBuilder;

use crate::document::Document;

#[derive(Debug, Clone, PartialEq)]
pub struct NewsSource {
    pub path: PathBuf,
    pub text_column: String,
}

impl NewsSource {
    pub fn new(path: impl Into<PathBuf>, text_column: impl Into<String>) -> Self {
        NewsSource {
            path: path.into(),
            text_column: text_column.into(),
        }
    }
}

/// An empty combined corpus is an error.
pub fn load_news_corpus(sources: &[NewsSource]) -> Result<Vec<Document>> {
    let mut documents = Vec::new();
    for source in sources {
        let mut loaded = load_source(source)?;
        log::info!(
            "Loaded {} documents from {}",
            loaded.len(),
            source.path.display()
        );
        documents.append(&mut loaded);
    }
    if documents.is_empty() {
        return Err(anyhow!("No usable documents in any configured news source"));
    }
    Ok(documents)
}

/// A missing file or text column is fatal; rows whose text cell is absent
/// or blank are dropped.
pub fn load_source(source: &NewsSource) -> Result<Vec<Document>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(&source.path)
        .map_err(|e| anyhow!("Failed to open news CSV {}: {}", source.path.display(), e))?;

    let headers = reader.headers()?.clone();
    let column = headers
        .iter()
        .position(|h| h == source.text_column)
        .ok_or_else(|| {
            anyhow!(
                "Column '{}' not found in {}",
                source.text_column,
                source.path.display()
            )
        })?;

    let source_name = source.path.display().to_string();
    let mut documents = Vec::new();
    let mut dropped = 0usize;
    for record in reader.records() {
        let record = record?;
        match record.get(column) {
            Some(text) if !text.trim().is_empty() => {
                documents.push(Document::with_source(text.trim(), source_name.clone()))
            }
            _ => dropped += 1,
        }
    }
    if dropped > 0 {
        log::debug!("Dropped {} empty rows from {}", dropped, source_name);
    }
    Ok(documents)
}

/// Texts from the first column by position, whatever the header names it.
pub fn load_first_column(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| anyhow!("Failed to open news CSV {}: {}", path.display(), e))?;

    let mut texts = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(text) = record.get(0) {
            if !text.trim().is_empty() {
                texts.push(text.trim().to_string());
            }
        }
    }
    Ok(texts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{}", body).unwrap();
        path
    }

    #[test]
    fn test_load_source_reads_named_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "news.csv",
            "id,intro\n1,Infosys reported profits\n2,Markets fell sharply\n",
        );
        let docs = load_source(&NewsSource::new(&path, "intro")).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].content, "Infosys reported profits");
        assert_eq!(docs[0].source.as_deref(), Some(path.display().to_string().as_str()));
    }

    #[test]
    fn test_load_source_drops_blank_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "news.csv", "intro\nFirst story\n\n   \nSecond story\n");
        let docs = load_source(&NewsSource::new(&path, "intro")).unwrap();
        assert_eq!(docs.len(), 2);
    }

    #[test]
    fn test_load_source_missing_column_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "news.csv", "headline\nSome story\n");
        let err = load_source(&NewsSource::new(&path, "intro")).unwrap_err();
        assert!(err.to_string().contains("intro"));
    }

    #[test]
    fn test_load_news_corpus_concatenates_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_csv(&dir, "a.csv", "intro\nalpha\n");
        let second = write_csv(&dir, "b.csv", "Description\nbeta\n");
        let docs = load_news_corpus(&[
            NewsSource::new(&first, "intro"),
            NewsSource::new(&second, "Description"),
        ])
        .unwrap();
        let contents: Vec<&str> = docs.iter().map(|d| d.content.as_str()).collect();
        assert_eq!(contents, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_load_news_corpus_empty_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "empty.csv", "intro\n\n");
        assert!(load_news_corpus(&[NewsSource::new(&path, "intro")]).is_err());
    }

    #[test]
    fn test_load_first_column_ignores_header_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "train.csv",
            "whatever,extra\nTCS won a deal,x\nRs 500 crore raised,y\n",
        );
        let texts = load_first_column(&path).unwrap();
        assert_eq!(texts, vec!["TCS won a deal", "Rs 500 crore raised"]);
    }
}
