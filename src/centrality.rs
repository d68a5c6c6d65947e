//! Node ranking by centrality metric

use crate::error::AnalysisError;
use crate::graph::{algorithms, ProteinGraph};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported centrality metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Degree,
    Betweenness,
    Closeness,
    Clustering,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Degree,
        Metric::Betweenness,
        Metric::Closeness,
        Metric::Clustering,
    ];

    /// Name used in URLs and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Degree => "degree",
            Metric::Betweenness => "betweenness",
            Metric::Closeness => "closeness",
            Metric::Clustering => "clustering",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Metric::Degree => "Degree Centrality",
            Metric::Betweenness => "Betweenness Centrality",
            Metric::Closeness => "Closeness Centrality",
            Metric::Clustering => "Clustering Coefficient",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Metric::Degree => "Number of direct connections",
            Metric::Betweenness => "Importance as a bridge between other nodes",
            Metric::Closeness => "Average distance to all other nodes",
            Metric::Clustering => "Tendency to form clusters",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|metric| metric.as_str() == s)
            .ok_or_else(|| AnalysisError::InvalidMetric(s.to_string()))
    }
}

/// Score of one protein under a metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub protein: String,
    pub value: f64,
}

/// Rank every protein by the given metric.
///
/// Sorted by descending score; the sort is stable so tied proteins keep
/// their insertion order.
pub fn compute(graph: &ProteinGraph, metric: Metric) -> Vec<Score> {
    log::info!("Computing {} for {} proteins", metric.display_name(), graph.node_count());

    let adjacency = graph.adjacency();
    let values = match metric {
        Metric::Degree => algorithms::degree_centrality(&adjacency),
        Metric::Betweenness => algorithms::betweenness_centrality(&adjacency),
        Metric::Closeness => algorithms::closeness_centrality(&adjacency),
        Metric::Clustering => algorithms::clustering_coefficients(&adjacency),
    };

    let mut scores: Vec<Score> = graph
        .nodes()
        .zip(values)
        .map(|(node, value)| Score {
            protein: graph.protein(node).to_string(),
            value,
        })
        .collect();

    scores.sort_by(|a, b| b.value.total_cmp(&a.value));
    scores
}

/// Rank every protein by a metric given by name
pub fn compute_named(graph: &ProteinGraph, metric: &str) -> Result<Vec<Score>, AnalysisError> {
    let metric: Metric = metric.parse()?;
    Ok(compute(graph, metric))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Interaction, InteractionType};
    use crate::graph::builder;

    fn abc() -> ProteinGraph {
        let proteins: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
        let interactions = [("A", "B", 0.9), ("B", "C", 0.5)]
            .iter()
            .enumerate()
            .map(|(i, &(a, b, w))| Interaction {
                id: i as u32 + 1,
                protein1: a.to_string(),
                protein2: b.to_string(),
                confidence: w,
                kind: InteractionType::Direct,
                family: "test".to_string(),
            })
            .collect::<Vec<_>>();
        builder::build(&proteins, &interactions)
    }

    fn value_of(scores: &[Score], protein: &str) -> f64 {
        scores.iter().find(|s| s.protein == protein).unwrap().value
    }

    #[test]
    fn test_metric_names() {
        assert_eq!("closeness".parse::<Metric>().unwrap(), Metric::Closeness);
        assert_eq!(
            "pagerank".parse::<Metric>(),
            Err(AnalysisError::InvalidMetric("pagerank".to_string()))
        );
        assert_eq!(Metric::Clustering.display_name(), "Clustering Coefficient");
    }

    #[test]
    fn test_degree_ranking_breaks_ties_by_insertion_order() {
        let scores = compute(&abc(), Metric::Degree);
        let order: Vec<&str> = scores.iter().map(|s| s.protein.as_str()).collect();
        assert_eq!(order, vec!["B", "A", "C"]);
        assert_eq!(scores[0].value, 2.0);
        assert_eq!(scores[1].value, 1.0);
    }

    #[test]
    fn test_path_has_no_triangles() {
        let scores = compute(&abc(), Metric::Clustering);
        assert!(scores.iter().all(|s| s.value == 0.0));
        let order: Vec<&str> = scores.iter().map(|s| s.protein.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_middle_node_is_most_central() {
        let graph = abc();
        let betweenness = compute(&graph, Metric::Betweenness);
        assert_eq!(betweenness[0].protein, "B");
        assert!((value_of(&betweenness, "B") - 1.0).abs() < 1e-9);

        let closeness = compute(&graph, Metric::Closeness);
        assert_eq!(closeness[0].protein, "B");
        assert!((value_of(&closeness, "A") - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_metric_name() {
        let err = compute_named(&abc(), "eigenvector").unwrap_err();
        assert_eq!(err, AnalysisError::InvalidMetric("eigenvector".to_string()));
    }
}
