//! Analysis operations exposed to the HTTP server and the CLI
//!
//! Every call rebuilds the graph from the shared dataset, runs one
//! analysis and returns owned, serializable results rounded for display.

use crate::centrality::{self, Metric, Score};
use crate::cluster::{self, CommunityReport};
use crate::config::Config;
use crate::data::Dataset;
use crate::error::AnalysisError;
use crate::graph::{algorithms, ProteinGraph};
use crate::inspect::{self, ProteinSummary};
use crate::prediction::{self, PredictionReport};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Node entry of the network view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkNode {
    pub id: String,
    pub label: String,
    /// Degree of the protein
    pub value: usize,
    pub title: String,
}

/// Edge entry of the network view, one per accepted interaction record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkEdge {
    pub from: String,
    pub to: String,
    /// Confidence of the record
    pub value: f64,
    pub title: String,
}

/// Whole-network statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkStats {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub density: f64,
    pub average_degree: f64,
    pub is_connected: bool,
    pub number_of_components: usize,
}

/// The full network with display attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkView {
    pub nodes: Vec<NetworkNode>,
    pub edges: Vec<NetworkEdge>,
    pub stats: NetworkStats,
}

/// Ranking of every protein under one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentralityView {
    /// Display name of the metric
    pub metric: String,
    pub description: String,
    pub values: Vec<Score>,
}

/// Round to a fixed number of decimal places for display
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Stateless facade over the analyses, cheap to clone across threads
#[derive(Debug, Clone)]
pub struct NetworkAnalyzer {
    dataset: Arc<Dataset>,
    config: Arc<Config>,
}

impl NetworkAnalyzer {
    pub fn new(dataset: Arc<Dataset>, config: Arc<Config>) -> Self {
        Self { dataset, config }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build a fresh graph for one request
    pub fn graph(&self) -> ProteinGraph {
        ProteinGraph::from_dataset(&self.dataset)
    }

    /// Nodes, edges and summary statistics of the whole network
    pub fn network(&self) -> NetworkView {
        let graph = self.graph();

        let nodes = graph
            .nodes()
            .map(|node| {
                let protein = graph.protein(node);
                let degree = graph.degree(node);
                NetworkNode {
                    id: protein.to_string(),
                    label: protein.to_string(),
                    value: degree,
                    title: format!("Protein: {}<br>Degree: {}", protein, degree),
                }
            })
            .collect();

        let edges = self
            .dataset
            .interactions
            .iter()
            .filter(|interaction| graph.accepts(interaction))
            .map(|interaction| NetworkEdge {
                from: interaction.protein1.clone(),
                to: interaction.protein2.clone(),
                value: interaction.confidence,
                title: format!(
                    "Confidence: {}<br>Type: {}",
                    interaction.confidence, interaction.kind
                ),
            })
            .collect();

        let n = graph.node_count();
        let components = cluster::connected_components(&graph).len();
        let average_degree = if n == 0 {
            0.0
        } else {
            (2 * graph.edge_count()) as f64 / n as f64
        };

        let stats = NetworkStats {
            total_nodes: n,
            total_edges: graph.edge_count(),
            density: round_to(algorithms::density(n, graph.edge_count()), 4),
            average_degree: round_to(average_degree, 2),
            is_connected: components == 1,
            number_of_components: components,
        };

        NetworkView {
            nodes,
            edges,
            stats,
        }
    }

    /// Rank proteins by a metric given by name
    pub fn centrality(&self, metric: &str) -> Result<CentralityView, AnalysisError> {
        let metric: Metric = metric.parse()?;
        Ok(self.centrality_for(metric))
    }

    /// Rank proteins by a metric
    pub fn centrality_for(&self, metric: Metric) -> CentralityView {
        let graph = self.graph();
        let values = centrality::compute(&graph, metric)
            .into_iter()
            .map(|score| Score {
                value: round_to(score.value, 4),
                ..score
            })
            .collect();

        CentralityView {
            metric: metric.display_name().to_string(),
            description: metric.description().to_string(),
            values,
        }
    }

    /// Partition the network into communities
    pub fn communities(&self) -> CommunityReport {
        let graph = self.graph();
        let mut report = cluster::detect_communities(&graph, self.config.hub_proteins);
        report.modularity = round_to(report.modularity, 4);
        for community in &mut report.communities {
            community.density = round_to(community.density, 4);
        }
        report
    }

    /// Predict missing interactions
    pub fn predictions(&self) -> PredictionReport {
        let graph = self.graph();
        let mut report = prediction::predict(&graph, &self.config);
        for prediction in &mut report.predictions {
            prediction.score = round_to(prediction.score, 3);
        }
        report
    }

    /// Details of a single protein
    pub fn protein(&self, name: &str) -> Result<ProteinSummary, AnalysisError> {
        let graph = self.graph();
        let mut summary = inspect::inspect(&graph, &self.dataset, name)?;
        summary.clustering_coefficient = round_to(summary.clustering_coefficient, 4);
        Ok(summary)
    }
}
