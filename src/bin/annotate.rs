use colored::*;
use finsift::annotate::{annotate_corpus, write_training_data, ANNOTATE_LIMIT};
use finsift::core::PipelineConfig;
use finsift::ingest::load_first_column;
use finsift::RuleAnalyzer;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    env_logger::init();
    log::debug!("Logger initialized");

    let config = PipelineConfig::from_env()?;
    let analyzer = RuleAnalyzer::new()?;

    // Texts come from the first configured news source, first column.
    let source = config
        .news_sources
        .first()
        .ok_or("No news sources configured")?;
    let texts = load_first_column(&source.path)?;
    log::info!("Loaded {} texts from {}", texts.len(), source.path.display());

    let examples = annotate_corpus(&analyzer, &texts, ANNOTATE_LIMIT);
    println!("Training samples: {}", examples.len().to_string().cyan());

    write_training_data(&config.train_data_path, &examples)?;
    println!(
        "{} {}",
        "Training data written to".green(),
        config.train_data_path.display()
    );

    Ok(())
}
