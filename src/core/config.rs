use anyhow::Result;
use std::path::PathBuf;

use crate::ingest::NewsSource;

// Default input/output locations, overridable through the environment.
const DEFAULT_NEWS_CSV: &str = "data/raw/financial_news.csv";
const DEFAULT_INDIAN_NEWS_CSV: &str = "data/raw/indian_financial_news.csv";
const DEFAULT_ANNUAL_REPORT: &str = "raw/annual_reports/adp_10k_2021.txt";
const DEFAULT_OUTPUT: &str = "output/final_output.json";
const DEFAULT_TRAIN_DATA: &str = "output/ner_training_data.json";

#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// News CSVs with their free-text column names, in ingestion order.
    pub news_sources: Vec<NewsSource>,
    pub annual_report_path: PathBuf,
    pub output_path: PathBuf,
    pub train_data_path: PathBuf,
}

impl PipelineConfig {
    pub fn from_env() -> Result<Self> {
        let news_csv = std::env::var("FINSIFT_NEWS_CSV")
            .unwrap_or_else(|_| DEFAULT_NEWS_CSV.to_string());

        let indian_news_csv = std::env::var("FINSIFT_INDIAN_NEWS_CSV")
            .unwrap_or_else(|_| DEFAULT_INDIAN_NEWS_CSV.to_string());

        let annual_report_path = PathBuf::from(
            std::env::var("FINSIFT_ANNUAL_REPORT")
                .unwrap_or_else(|_| DEFAULT_ANNUAL_REPORT.to_string()),
        );

        let output_path = PathBuf::from(
            std::env::var("FINSIFT_OUTPUT").unwrap_or_else(|_| DEFAULT_OUTPUT.to_string()),
        );

        let train_data_path = PathBuf::from(
            std::env::var("FINSIFT_TRAIN_DATA").unwrap_or_else(|_| DEFAULT_TRAIN_DATA.to_string()),
        );

        Ok(Self {
            news_sources: vec![
                NewsSource::new(news_csv, "intro"),
                NewsSource::new(indian_news_csv, "Description"),
            ],
            annual_report_path,
            output_path,
            train_data_path,
        })
    }
}
