//! Link prediction from neighborhood overlap

use crate::config::Config;
use crate::graph::ProteinGraph;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A candidate interaction between two unconnected proteins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub protein1: String,
    pub protein2: String,

    /// Weighted combination of Jaccard similarity and degree product
    pub score: f64,

    /// Number of shared neighbors
    pub common_neighbors: usize,

    /// Human-readable explanation
    pub reason: String,
}

/// Top predictions plus how many pairs passed the threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionReport {
    pub predictions: Vec<Prediction>,
    pub total_predictions: usize,
}

/// Score every unconnected pair of proteins.
///
/// `score = jaccard_weight * |N1 & N2| / |N1 | N2| + degree_weight * d1 * d2 / n^2`.
/// Pairs where either protein has no neighbors carry no signal and are
/// skipped. Pairs scoring above the threshold are sorted by descending
/// score (ties keep scan order) and truncated to `max_predictions`.
pub fn predict(graph: &ProteinGraph, config: &Config) -> PredictionReport {
    let adjacency = graph.adjacency();
    let n = adjacency.node_count();
    let n_squared = (n * n) as f64;

    log::info!("Scoring candidate interactions among {} proteins", n);

    // Order-preserving collect keeps the scan order (i < j) for tie-breaks
    let mut candidates: Vec<(usize, usize, f64, usize)> = (0..n)
        .into_par_iter()
        .flat_map_iter(|i| {
            let adjacency = &adjacency;
            (i + 1..n).filter_map(move |j| {
                if adjacency.has_edge(i, j as u32) {
                    return None;
                }

                let (d1, d2) = (adjacency.degree(i), adjacency.degree(j));
                if d1 == 0 || d2 == 0 {
                    return None;
                }

                let shared = adjacency.common_neighbors(i, j);
                let union = d1 + d2 - shared;
                let jaccard = shared as f64 / union as f64;
                let degree_factor = (d1 * d2) as f64 / n_squared;

                let score = config.jaccard_weight * jaccard + config.degree_weight * degree_factor;
                (score > config.prediction_threshold).then_some((i, j, score, shared))
            })
        })
        .collect();

    let total_predictions = candidates.len();
    candidates.sort_by(|a, b| b.2.total_cmp(&a.2));
    candidates.truncate(config.max_predictions);

    log::info!(
        "{} pairs passed the {} threshold, reporting {}",
        total_predictions,
        config.prediction_threshold,
        candidates.len()
    );

    let nodes: Vec<_> = graph.nodes().collect();
    let predictions = candidates
        .into_iter()
        .map(|(i, j, score, shared)| Prediction {
            protein1: graph.protein(nodes[i]).to_string(),
            protein2: graph.protein(nodes[j]).to_string(),
            score,
            common_neighbors: shared,
            reason: format!("Shared {} common neighbors", shared),
        })
        .collect();

    PredictionReport {
        predictions,
        total_predictions,
    }
}
