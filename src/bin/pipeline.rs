use colored::*;
use finsift::core::PipelineConfig;
use finsift::utils::dirs;
use finsift::{pipeline, RuleAnalyzer};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    env_logger::init();
    log::debug!("Logger initialized");

    log::debug!("Creating data directory at {}", dirs::RAW_DATA_DIR);
    dirs::ensure_raw_data_dirs()?;
    log::debug!("Checking if {} directory exists", dirs::OUTPUT_DIR);
    dirs::ensure_output_dirs()?;

    let config = PipelineConfig::from_env()?;
    let analyzer = RuleAnalyzer::new()?;

    let summary = pipeline::run(&config, &analyzer)?;

    println!("{}", "Pipeline finished".green().bold());
    println!(
        "Documents ingested: {}",
        summary.documents.to_string().cyan()
    );
    println!(
        "Sections detected: {}",
        summary
            .section_labels
            .iter()
            .map(|label| label.to_string())
            .collect::<Vec<_>>()
            .join(", ")
            .cyan()
    );
    println!("Companies: {}", summary.company.join(", ").cyan());
    println!(
        "Table rows parsed: {}",
        summary.table_rows.to_string().cyan()
    );
    if !summary.annual_report {
        println!(
            "{}",
            "Annual report not found. Skipping annual report processing.".yellow()
        );
    }
    println!(
        "Structured output: {}",
        summary.output_path.display().to_string().cyan()
    );

    Ok(())
}
