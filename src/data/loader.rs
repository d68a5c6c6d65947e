//! Dataset file loading

use anyhow::{anyhow, Context, Result};
use crate::data::{fixture, Dataset};
use std::fs;
use std::path::Path;

/// Load a dataset from a JSON file
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    log::info!("Reading dataset file: {}", path.display());

    // Check if the file exists
    if !path.exists() {
        return Err(anyhow!("File not found: {}", path.display()));
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let dataset: Dataset = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse dataset {}", path.display()))?;

    log::info!(
        "Loaded {} proteins, {} interactions and {} families",
        dataset.proteins.len(),
        dataset.interactions.len(),
        dataset.families.len()
    );

    Ok(dataset)
}

/// Load the dataset from `path`, or fall back to the embedded seed corpus
pub fn load_or_seed(path: Option<&Path>) -> Result<Dataset> {
    match path {
        Some(path) => load_dataset(path),
        None => {
            log::info!("No dataset file given, using the embedded seed corpus");
            fixture::seed_dataset()
        }
    }
}
