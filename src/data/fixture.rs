//! Seed corpus embedded in the binary
//!
//! 33 cancer-related proteins grouped into eight pathway families, with
//! intra-family, cross-family and predicted interactions. Confidences are
//! fixed so every run analyses the same network.

use anyhow::{Context, Result};
use crate::data::Dataset;

const SEED_NETWORK: &str = include_str!("../../data/seed_network.json");

/// Parse the embedded seed corpus
pub fn seed_dataset() -> Result<Dataset> {
    let dataset: Dataset = serde_json::from_str(SEED_NETWORK)
        .context("embedded seed network is not valid JSON")?;

    log::debug!(
        "Seed corpus: {} proteins, {} interactions, {} families",
        dataset.proteins.len(),
        dataset.interactions.len(),
        dataset.families.len()
    );

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_corpus_shape() {
        let dataset = seed_dataset().unwrap();
        assert_eq!(dataset.proteins.len(), 33);
        assert_eq!(dataset.families.len(), 8);
        assert_eq!(dataset.families[0].name, "DNA_Repair");
        assert!(dataset
            .interactions
            .iter()
            .all(|i| (0.0..=1.0).contains(&i.confidence)));
    }

    #[test]
    fn test_seed_corpus_endpoints_are_declared() {
        let dataset = seed_dataset().unwrap();
        for interaction in &dataset.interactions {
            assert!(dataset.contains(&interaction.protein1), "{}", interaction.protein1);
            assert!(dataset.contains(&interaction.protein2), "{}", interaction.protein2);
        }
    }
}
