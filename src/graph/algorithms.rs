//! Graph algorithms for analysis
//!
//! All traversals are unweighted; edge confidences only matter to the
//! modularity computations in `cluster`.

use crate::graph::Adjacency;
use itertools::Itertools;
use rayon::prelude::*;
use std::collections::VecDeque;

/// Number of incident edges per node
pub fn degree_centrality(adjacency: &Adjacency) -> Vec<f64> {
    (0..adjacency.node_count())
        .map(|node| adjacency.degree(node) as f64)
        .collect()
}

/// Local clustering coefficient of a single node.
///
/// Fraction of neighbor pairs that are themselves connected; 0 for nodes
/// with fewer than two neighbors.
pub fn local_clustering(adjacency: &Adjacency, node: usize) -> f64 {
    let neighbors = adjacency.neighbors(node);
    let k = neighbors.len();
    if k < 2 {
        return 0.0;
    }

    let triangles = neighbors
        .iter()
        .tuple_combinations()
        .filter(|&(&a, &b)| adjacency.has_edge(a as usize, b))
        .count();

    (2 * triangles) as f64 / (k * (k - 1)) as f64
}

/// Local clustering coefficient for every node
pub fn clustering_coefficients(adjacency: &Adjacency) -> Vec<f64> {
    (0..adjacency.node_count())
        .map(|node| local_clustering(adjacency, node))
        .collect()
}

/// Hop distances from `source`; `None` for unreachable nodes
pub fn bfs_distances(adjacency: &Adjacency, source: usize) -> Vec<Option<usize>> {
    let mut dist = vec![None; adjacency.node_count()];
    let mut queue = VecDeque::new();

    dist[source] = Some(0);
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        let next = dist[v].map_or(0, |d| d + 1);
        for &w in adjacency.neighbors(v) {
            let w = w as usize;
            if dist[w].is_none() {
                dist[w] = Some(next);
                queue.push_back(w);
            }
        }
    }

    dist
}

/// Closeness centrality with the Wasserman-Faust correction.
///
/// `((r - 1) / sum_d) * ((r - 1) / (n - 1))` where r counts the nodes
/// reachable from v, v included.
pub fn closeness_centrality(adjacency: &Adjacency) -> Vec<f64> {
    let n = adjacency.node_count();

    (0..n)
        .into_par_iter()
        .map(|node| {
            let dist = bfs_distances(adjacency, node);
            let reachable = dist.iter().flatten().count();
            let total: usize = dist.iter().flatten().sum();

            if total == 0 || n <= 1 {
                return 0.0;
            }

            let others = (reachable - 1) as f64;
            (others / total as f64) * (others / (n - 1) as f64)
        })
        .collect()
}

/// Pair dependencies of every node for shortest paths starting at `source`
/// (Brandes accumulation over unweighted paths)
fn single_source_dependencies(adjacency: &Adjacency, source: usize) -> Vec<f64> {
    let n = adjacency.node_count();
    let mut stack = Vec::with_capacity(n);
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut sigma = vec![0.0f64; n];
    let mut dist: Vec<Option<usize>> = vec![None; n];
    let mut queue = VecDeque::new();

    sigma[source] = 1.0;
    dist[source] = Some(0);
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        stack.push(v);
        let dv = dist[v].unwrap_or(0);

        for &w in adjacency.neighbors(v) {
            let w = w as usize;
            if dist[w].is_none() {
                dist[w] = Some(dv + 1);
                queue.push_back(w);
            }
            if dist[w] == Some(dv + 1) {
                sigma[w] += sigma[v];
                predecessors[w].push(v);
            }
        }
    }

    let mut delta = vec![0.0f64; n];
    while let Some(w) = stack.pop() {
        for &v in &predecessors[w] {
            delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
        }
    }
    delta[source] = 0.0;

    delta
}

/// Normalized betweenness centrality.
///
/// Dependencies are accumulated from every source, so each unordered pair
/// is counted twice; scaling by `1 / ((n - 1)(n - 2))` yields the usual
/// undirected normalization. Per-source work runs in parallel, the sum is
/// taken in source order so results are bit-identical across runs.
pub fn betweenness_centrality(adjacency: &Adjacency) -> Vec<f64> {
    let n = adjacency.node_count();

    let per_source: Vec<Vec<f64>> = (0..n)
        .into_par_iter()
        .map(|source| single_source_dependencies(adjacency, source))
        .collect();

    let mut totals = vec![0.0f64; n];
    for dependencies in &per_source {
        for (total, dependency) in totals.iter_mut().zip(dependencies) {
            *total += dependency;
        }
    }

    if n <= 2 {
        return vec![0.0; n];
    }

    let scale = 1.0 / ((n - 1) * (n - 2)) as f64;
    totals.iter().map(|t| t * scale).collect()
}

/// Edge density of an undirected simple graph
pub fn density(node_count: usize, edge_count: usize) -> f64 {
    if node_count <= 1 {
        return 0.0;
    }
    (2 * edge_count) as f64 / (node_count * (node_count - 1)) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Interaction, InteractionType};
    use crate::graph::builder;

    fn graph_of(nodes: &[&str], edges: &[(&str, &str)]) -> Adjacency {
        let proteins: Vec<String> = nodes.iter().map(|s| s.to_string()).collect();
        let interactions: Vec<Interaction> = edges
            .iter()
            .enumerate()
            .map(|(i, (a, b))| Interaction {
                id: i as u32,
                protein1: a.to_string(),
                protein2: b.to_string(),
                confidence: 0.5,
                kind: InteractionType::Direct,
                family: "test".to_string(),
            })
            .collect();
        builder::build(&proteins, &interactions).adjacency()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_path_betweenness() {
        // A - B - C: B lies on the single A..C path
        let adjacency = graph_of(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
        let scores = betweenness_centrality(&adjacency);
        assert!(approx(scores[0], 0.0));
        assert!(approx(scores[1], 1.0));
        assert!(approx(scores[2], 0.0));
    }

    #[test]
    fn test_split_paths_share_betweenness() {
        // Square A-B-C-D-A: each of the two diagonals has two shortest paths
        let adjacency = graph_of(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")],
        );
        let scores = betweenness_centrality(&adjacency);
        // Each node carries half of one pair out of three
        for score in scores {
            assert!(approx(score, 0.5 / 3.0));
        }
    }

    #[test]
    fn test_star_closeness() {
        let adjacency = graph_of(
            &["hub", "a", "b", "c"],
            &[("hub", "a"), ("hub", "b"), ("hub", "c")],
        );
        let scores = closeness_centrality(&adjacency);
        assert!(approx(scores[0], 1.0));
        // Leaf: distances 1 + 2 + 2
        assert!(approx(scores[1], 3.0 / 5.0));
    }

    #[test]
    fn test_closeness_is_scaled_for_disconnected_graphs() {
        // A - B plus isolated C
        let adjacency = graph_of(&["A", "B", "C"], &[("A", "B")]);
        let scores = closeness_centrality(&adjacency);
        assert!(approx(scores[0], 0.5));
        assert!(approx(scores[2], 0.0));
    }

    #[test]
    fn test_triangle_clustering() {
        let adjacency = graph_of(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("B", "C"), ("C", "A"), ("A", "D")],
        );
        let scores = clustering_coefficients(&adjacency);
        assert!(approx(scores[0], 1.0 / 3.0));
        assert!(approx(scores[1], 1.0));
        assert!(approx(scores[3], 0.0));
    }

    #[test]
    fn test_bfs_distances_mark_unreachable() {
        let adjacency = graph_of(&["A", "B", "C"], &[("A", "B")]);
        let dist = bfs_distances(&adjacency, 0);
        assert_eq!(dist, vec![Some(0), Some(1), None]);
    }

    #[test]
    fn test_density() {
        assert!(approx(density(3, 3), 1.0));
        assert!(approx(density(4, 3), 0.5));
        assert!(approx(density(1, 0), 0.0));
    }
}
