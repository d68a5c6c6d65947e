//! Visualization export module

use anyhow::Result;
use crate::cluster::{Community, CommunityReport};
use crate::data::UNKNOWN_FAMILY;
use crate::service::NetworkAnalyzer;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Generate visualization inputs for the network and its communities
pub fn generate_visualizations(analyzer: &NetworkAnalyzer, output_dir: &Path) -> Result<()> {
    let communities = analyzer.communities();
    log::info!(
        "Generating visualizations for {} communities",
        communities.communities.len()
    );

    // Create visualizations directory
    let viz_dir = output_dir.join("visualizations");
    fs::create_dir_all(&viz_dir)?;

    let community_of = community_lookup(&communities);

    generate_graphml(analyzer, &community_of, &viz_dir)?;
    generate_node_table(analyzer, &community_of, &viz_dir)?;
    generate_community_stats(&communities.communities, &viz_dir)?;

    log::info!("Visualizations generated successfully");

    Ok(())
}

fn community_lookup(report: &CommunityReport) -> HashMap<&str, u32> {
    report
        .communities
        .iter()
        .flat_map(|c| c.proteins.iter().map(move |p| (p.as_str(), c.id)))
        .collect()
}

/// Escape text for use inside XML attributes and elements
fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Write the whole network as GraphML with family and community attributes
fn generate_graphml(
    analyzer: &NetworkAnalyzer,
    community_of: &HashMap<&str, u32>,
    viz_dir: &Path,
) -> Result<()> {
    log::info!("Generating GraphML network file");

    let graph = analyzer.graph();
    let dataset = analyzer.dataset();
    let mut file = File::create(viz_dir.join("network.graphml"))?;

    // Write GraphML header
    writeln!(file, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(file, "<graphml xmlns=\"http://graphml.graphdrawing.org/xmlns\">")?;
    writeln!(file, "  <key id=\"family\" for=\"node\" attr.name=\"family\" attr.type=\"string\"/>")?;
    writeln!(file, "  <key id=\"community\" for=\"node\" attr.name=\"community\" attr.type=\"int\"/>")?;
    writeln!(file, "  <key id=\"weight\" for=\"edge\" attr.name=\"weight\" attr.type=\"double\"/>")?;
    writeln!(file, "  <key id=\"type\" for=\"edge\" attr.name=\"type\" attr.type=\"string\"/>")?;
    writeln!(file, "  <graph id=\"G\" edgedefault=\"undirected\">")?;

    for node in graph.nodes() {
        let protein = graph.protein(node);
        let family = dataset.family_of(protein).unwrap_or(UNKNOWN_FAMILY);
        writeln!(file, "    <node id=\"{}\">", xml_escape(protein))?;
        writeln!(file, "      <data key=\"family\">{}</data>", xml_escape(family))?;
        if let Some(id) = community_of.get(protein) {
            writeln!(file, "      <data key=\"community\">{}</data>", id)?;
        }
        writeln!(file, "    </node>")?;
    }

    for (edge_id, (a, b, edge)) in graph.edges().enumerate() {
        writeln!(
            file,
            "    <edge id=\"e{}\" source=\"{}\" target=\"{}\">",
            edge_id,
            xml_escape(graph.protein(a)),
            xml_escape(graph.protein(b))
        )?;
        writeln!(file, "      <data key=\"weight\">{}</data>", edge.confidence)?;
        writeln!(file, "      <data key=\"type\">{}</data>", edge.kind)?;
        writeln!(file, "    </edge>")?;
    }

    // Write GraphML footer
    writeln!(file, "  </graph>")?;
    writeln!(file, "</graphml>")?;

    Ok(())
}

/// Create a CSV file with one row per protein
fn generate_node_table(
    analyzer: &NetworkAnalyzer,
    community_of: &HashMap<&str, u32>,
    viz_dir: &Path,
) -> Result<()> {
    log::info!("Generating node table");

    let graph = analyzer.graph();
    let dataset = analyzer.dataset();
    let mut file = File::create(viz_dir.join("nodes.csv"))?;

    writeln!(file, "id,family,community_id,degree")?;
    for node in graph.nodes() {
        let protein = graph.protein(node);
        let community = community_of
            .get(protein)
            .map(|id| id.to_string())
            .unwrap_or_default();
        writeln!(
            file,
            "{},{},{},{}",
            protein,
            dataset.family_of(protein).unwrap_or(UNKNOWN_FAMILY),
            community,
            graph.degree(node)
        )?;
    }

    Ok(())
}

/// Create a CSV file with community statistics
fn generate_community_stats(communities: &[Community], viz_dir: &Path) -> Result<()> {
    log::info!("Generating community statistics");

    let mut file = File::create(viz_dir.join("community_stats.csv"))?;

    writeln!(file, "community_id,size,density,hub_proteins")?;
    for community in communities {
        writeln!(
            file,
            "{},{},{:.4},{}",
            community.id,
            community.size,
            community.density,
            community.hub_proteins.join(" ")
        )?;
    }

    Ok(())
}
