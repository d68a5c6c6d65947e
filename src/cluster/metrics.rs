//! Community statistics and metrics

use crate::graph::ProteinGraph;
use petgraph::graph::NodeIndex;
use std::collections::{HashMap, HashSet};

/// Weighted modularity of a partition.
///
/// `Q = sum_c [ L_c / m - (d_c / 2m)^2 ]` where `L_c` is the weight inside
/// community c, `d_c` the summed strength of its members and `m` the total
/// edge weight. Nodes missing from the partition contribute nothing.
pub fn modularity(graph: &ProteinGraph, partition: &[Vec<NodeIndex>]) -> f64 {
    let m = graph.total_weight();
    if m <= 0.0 {
        return 0.0;
    }

    let mut community_of: HashMap<NodeIndex, usize> = HashMap::with_capacity(graph.node_count());
    for (c, members) in partition.iter().enumerate() {
        for &node in members {
            community_of.insert(node, c);
        }
    }

    let mut internal = vec![0.0f64; partition.len()];
    for (a, b, edge) in graph.edges() {
        match (community_of.get(&a), community_of.get(&b)) {
            (Some(ca), Some(cb)) if ca == cb => internal[*ca] += edge.confidence,
            _ => {}
        }
    }

    partition
        .iter()
        .zip(&internal)
        .map(|(members, &inside)| {
            let strength: f64 = members.iter().map(|&n| graph.strength(n)).sum();
            inside / m - (strength / (2.0 * m)).powi(2)
        })
        .sum()
}

/// Calculate density (internal edges / potential internal edges)
pub fn calculate_density(graph: &ProteinGraph, members: &[NodeIndex]) -> f64 {
    let n = members.len();
    if n <= 1 {
        return 1.0; // By convention, singleton communities have density 1
    }

    let member_set: HashSet<NodeIndex> = members.iter().copied().collect();
    let internal_edges = graph
        .edges()
        .filter(|(a, b, _)| member_set.contains(a) && member_set.contains(b))
        .count();

    (2 * internal_edges) as f64 / (n * (n - 1)) as f64
}

/// Members with the highest degree inside the community.
///
/// Ties keep insertion order; at most `limit` proteins are returned.
pub fn hub_proteins(graph: &ProteinGraph, members: &[NodeIndex], limit: usize) -> Vec<String> {
    let member_set: HashSet<NodeIndex> = members.iter().copied().collect();

    let mut degrees: Vec<(NodeIndex, usize)> = members
        .iter()
        .map(|&node| {
            let inside = graph
                .neighbors(node)
                .into_iter()
                .filter(|n| member_set.contains(n))
                .count();
            (node, inside)
        })
        .collect();

    // Sort by degree (highest first)
    degrees.sort_by(|a, b| b.1.cmp(&a.1));

    degrees
        .into_iter()
        .take(limit)
        .map(|(node, _)| graph.protein(node).to_string())
        .collect()
}
