//! Results persistence module

use anyhow::Result;
use crate::centrality::Metric;
use crate::cluster::CommunityReport;
use crate::service::{NetworkAnalyzer, NetworkView};
use serde::Serialize;
use serde_json::{json, to_string_pretty};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Save every analysis of the network to the specified directory
pub fn save_results(analyzer: &NetworkAnalyzer, output_dir: &Path) -> Result<()> {
    log::info!("Saving analysis results to {}", output_dir.display());

    // Ensure output directory exists
    fs::create_dir_all(output_dir)?;

    let network = analyzer.network();
    let communities = analyzer.communities();

    save_summary(&network, &communities, output_dir)?;
    save_centrality(analyzer, output_dir)?;
    save_communities(&communities, output_dir)?;
    write_json(&output_dir.join("predictions.json"), &analyzer.predictions())?;

    log::info!("Results saved successfully");

    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(to_string_pretty(value)?.as_bytes())?;
    Ok(())
}

/// Save summary information
fn save_summary(
    network: &NetworkView,
    communities: &CommunityReport,
    output_dir: &Path,
) -> Result<()> {
    log::info!("Saving summary information");

    let sizes: Vec<usize> = communities.communities.iter().map(|c| c.size).collect();
    let count = communities.communities.len();
    let divisor = if count == 0 { 1.0 } else { count as f64 };

    let summary = json!({
        "graph_stats": network.stats,
        "community_stats": {
            "community_count": count,
            "modularity": communities.modularity,
            "largest_community_size": sizes.first().copied().unwrap_or(0),
            "smallest_community_size": sizes.last().copied().unwrap_or(0),
            "avg_community_size": sizes.iter().sum::<usize>() as f64 / divisor,
            "avg_density": communities.communities.iter().map(|c| c.density).sum::<f64>() / divisor,
        }
    });

    write_json(&output_dir.join("summary.json"), &summary)
}

/// Save one ranking file per centrality metric
fn save_centrality(analyzer: &NetworkAnalyzer, output_dir: &Path) -> Result<()> {
    log::info!("Saving centrality rankings");

    let centrality_dir = output_dir.join("centrality");
    fs::create_dir_all(&centrality_dir)?;

    for metric in Metric::ALL {
        let view = analyzer.centrality_for(metric);
        write_json(&centrality_dir.join(format!("{}.json", metric)), &view)?;
    }

    Ok(())
}

/// Save the community overview and one file per community
fn save_communities(communities: &CommunityReport, output_dir: &Path) -> Result<()> {
    log::info!("Saving {} communities", communities.communities.len());

    write_json(&output_dir.join("communities.json"), communities)?;

    let communities_dir = output_dir.join("communities");
    fs::create_dir_all(&communities_dir)?;

    for community in &communities.communities {
        let path = communities_dir.join(format!("community_{}.json", community.id));
        write_json(&path, community)?;
    }

    Ok(())
}
