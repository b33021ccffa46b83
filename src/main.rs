// Main entry point - Wires configuration and files into a prediction
use anyhow::Context;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use lens_reorder::application::{SimpleLensPrediction, latest_next_purchase};
use lens_reorder::infrastructure::catalog_file::load_catalog;
use lens_reorder::infrastructure::config::load_settings;
use lens_reorder::infrastructure::history_file::load_history;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let settings = load_settings()?;

    // History file from the first argument, falling back to configuration
    let history_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or(settings.history.path.clone())
        .context("No order history given: pass a path or set LENS__HISTORY__PATH")?;

    let catalog = load_catalog(&settings.catalog.path)?;
    let history = load_history(&history_path)?;

    let prediction = SimpleLensPrediction::new(settings.prediction)?;
    let estimations = prediction.estimate_by_type(&catalog, &history)?;
    for estimation in &estimations {
        tracing::info!(
            "Power {} runs out on {} ({} days after {})",
            estimation.power,
            estimation.next_purchase,
            estimation.days_estimation,
            estimation.last_purchase
        );
    }

    match latest_next_purchase(&estimations) {
        Some(date) => println!("{}", date.format("%Y-%m-%d")),
        None => println!("no prediction"),
    }

    Ok(())
}
