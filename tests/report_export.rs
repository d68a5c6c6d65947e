//! Report and visualization export into a scratch directory.

use protein_network_analyzer::data::fixture;
use protein_network_analyzer::{storage, viz, Config, NetworkAnalyzer};
use std::fs;
use std::sync::Arc;
use tempfile::tempdir;

fn analyzer() -> NetworkAnalyzer {
    let dataset = fixture::seed_dataset().expect("seed corpus parses");
    NetworkAnalyzer::new(Arc::new(dataset), Arc::new(Config::default()))
}

#[test]
fn report_writes_every_analysis() {
    let dir = tempdir().expect("Failed to create temp dir");
    let analyzer = analyzer();

    storage::save_results(&analyzer, dir.path()).unwrap();

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("summary.json")).unwrap())
            .unwrap();
    assert_eq!(summary["graph_stats"]["total_nodes"], 33);

    for metric in ["degree", "betweenness", "closeness", "clustering"] {
        assert!(dir.path().join("centrality").join(format!("{}.json", metric)).exists());
    }
    assert!(dir.path().join("predictions.json").exists());
    assert!(dir.path().join("communities").join("community_0.json").exists());

    let communities = analyzer.communities();
    let files = fs::read_dir(dir.path().join("communities")).unwrap().count();
    assert_eq!(files, communities.communities.len());
}

#[test]
fn visualizations_cover_every_protein() {
    let dir = tempdir().expect("Failed to create temp dir");
    viz::generate_visualizations(&analyzer(), dir.path()).unwrap();

    let viz_dir = dir.path().join("visualizations");
    let graphml = fs::read_to_string(viz_dir.join("network.graphml")).unwrap();
    assert!(graphml.contains("edgedefault=\"undirected\""));
    assert_eq!(graphml.matches("<node ").count(), 33);

    let nodes = fs::read_to_string(viz_dir.join("nodes.csv")).unwrap();
    // header plus one row per protein
    assert_eq!(nodes.lines().count(), 34);
    assert!(nodes.lines().any(|line| line.starts_with("CDH1,Unknown,")));

    assert!(viz_dir.join("community_stats.csv").exists());
}
