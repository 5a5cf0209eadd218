pub mod analyzer;
pub mod annotate;
pub mod core;
pub mod document;
pub mod extract;
pub mod ingest;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod segment;
pub mod utils;

// Re-exports
pub use crate::core::PipelineConfig;
pub use analyzer::{RuleAnalyzer, TextAnalyzer};
pub use document::Document;
pub use pipeline::{run, RunSummary};
