//! Compressed adjacency snapshot of a protein graph

use crate::graph::ProteinGraph;
use std::cmp::Ordering;

/// Compressed sparse row view of an undirected graph.
///
/// Each edge is stored in both endpoint lists; every list is sorted so
/// membership tests and neighbor-set intersections run on slices.
#[derive(Debug, Clone)]
pub struct Adjacency {
    /// Number of nodes in the graph
    node_count: usize,

    /// offsets[i] to offsets[i+1] defines the neighbor range for node i
    offsets: Vec<u32>,

    /// Concatenated, sorted neighbor lists
    targets: Vec<u32>,
}

impl Adjacency {
    /// Snapshot the adjacency of a protein graph
    pub fn from_graph(graph: &ProteinGraph) -> Self {
        let node_count = graph.node_count();
        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut targets = Vec::with_capacity(graph.edge_count() * 2);

        offsets.push(0);
        for node in graph.nodes() {
            // neighbors() already returns insertion (= index) order
            targets.extend(graph.neighbors(node).into_iter().map(|n| n.index() as u32));
            offsets.push(targets.len() as u32);
        }

        Self {
            node_count,
            offsets,
            targets,
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.targets.len() / 2
    }

    /// Sorted neighbors of a node
    pub fn neighbors(&self, node: usize) -> &[u32] {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        &self.targets[start..end]
    }

    pub fn degree(&self, node: usize) -> usize {
        (self.offsets[node + 1] - self.offsets[node]) as usize
    }

    /// Check if there's an edge between src and dst
    pub fn has_edge(&self, src: usize, dst: u32) -> bool {
        self.neighbors(src).binary_search(&dst).is_ok()
    }

    /// Size of the intersection of two neighbor lists
    pub fn common_neighbors(&self, a: usize, b: usize) -> usize {
        let (left, right) = (self.neighbors(a), self.neighbors(b));
        let (mut i, mut j, mut shared) = (0, 0, 0);

        while i < left.len() && j < right.len() {
            match left[i].cmp(&right[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    shared += 1;
                    i += 1;
                    j += 1;
                }
            }
        }

        shared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Interaction, InteractionType};
    use crate::graph::builder;

    fn edge(a: &str, b: &str) -> Interaction {
        Interaction {
            id: 0,
            protein1: a.to_string(),
            protein2: b.to_string(),
            confidence: 0.5,
            kind: InteractionType::Direct,
            family: "test".to_string(),
        }
    }

    #[test]
    fn test_snapshot_is_symmetric_and_sorted() {
        let proteins: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
        let graph = builder::build(
            &proteins,
            &[edge("D", "A"), edge("A", "B"), edge("C", "A"), edge("B", "C")],
        );
        let adjacency = graph.adjacency();

        assert_eq!(adjacency.node_count(), 4);
        assert_eq!(adjacency.edge_count(), 4);
        assert_eq!(adjacency.neighbors(0), &[1, 2, 3]);
        assert_eq!(adjacency.degree(3), 1);
        assert!(adjacency.has_edge(3, 0));
        assert!(!adjacency.has_edge(3, 1));

        // A and B share C; B and D share A
        assert_eq!(adjacency.common_neighbors(0, 1), 1);
        assert_eq!(adjacency.common_neighbors(1, 3), 1);
        assert_eq!(adjacency.common_neighbors(2, 3), 1);
    }
}
