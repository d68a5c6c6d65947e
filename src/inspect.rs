//! Per-protein summaries

use crate::data::{Dataset, Interaction, UNKNOWN_FAMILY};
use crate::error::AnalysisError;
use crate::graph::{algorithms, ProteinGraph};
use serde::{Deserialize, Serialize};

/// Everything known about a single protein
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinSummary {
    pub protein: String,

    /// First declared family listing the protein, or "Unknown"
    pub family: String,

    pub degree: usize,

    pub clustering_coefficient: f64,

    /// Neighbors in insertion order
    pub neighbors: Vec<String>,

    /// Dataset records with the protein at either end
    pub interactions: Vec<Interaction>,
}

/// Summarize one protein of the graph
pub fn inspect(
    graph: &ProteinGraph,
    dataset: &Dataset,
    protein: &str,
) -> Result<ProteinSummary, AnalysisError> {
    let node = graph
        .node_index(protein)
        .ok_or_else(|| AnalysisError::ProteinNotFound(protein.to_string()))?;

    let neighbors = graph
        .neighbors(node)
        .into_iter()
        .map(|n| graph.protein(n).to_string())
        .collect();

    let adjacency = graph.adjacency();

    Ok(ProteinSummary {
        protein: protein.to_string(),
        family: dataset.family_of(protein).unwrap_or(UNKNOWN_FAMILY).to_string(),
        degree: graph.degree(node),
        clustering_coefficient: algorithms::local_clustering(&adjacency, node.index()),
        neighbors,
        interactions: dataset.interactions_of(protein).cloned().collect(),
    })
}
