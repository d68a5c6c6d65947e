//! Graph representation and algorithms module

pub mod algorithms;
pub mod builder;
pub mod compressed;

pub use compressed::Adjacency;

use crate::data::{Dataset, Interaction, InteractionType};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Attributes carried by an interaction edge
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeData {
    /// Confidence of the last applied interaction record, used as the weight
    pub confidence: f64,

    /// Evidence type of the last applied record
    pub kind: InteractionType,

    /// Family tag of the last applied record
    pub family: String,
}

/// Weighted undirected protein interaction graph.
///
/// Node indices follow insertion order, which is the dataset's protein
/// order. Every algorithm that needs a tie-break uses this order.
#[derive(Debug, Clone)]
pub struct ProteinGraph {
    graph: UnGraph<String, EdgeData>,
    index: HashMap<String, NodeIndex>,
}

impl ProteinGraph {
    pub(crate) fn from_parts(
        graph: UnGraph<String, EdgeData>,
        index: HashMap<String, NodeIndex>,
    ) -> Self {
        Self { graph, index }
    }

    /// Build a fresh graph from the shared dataset
    pub fn from_dataset(dataset: &Dataset) -> Self {
        builder::build(&dataset.proteins, &dataset.interactions)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Look up the node for a protein identifier
    pub fn node_index(&self, protein: &str) -> Option<NodeIndex> {
        self.index.get(protein).copied()
    }

    /// Protein identifier of a node
    pub fn protein(&self, node: NodeIndex) -> &str {
        &self.graph[node]
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Number of incident edges
    pub fn degree(&self, node: NodeIndex) -> usize {
        self.graph.edges(node).count()
    }

    /// Sum of incident edge weights
    pub fn strength(&self, node: NodeIndex) -> f64 {
        self.graph.edges(node).map(|e| e.weight().confidence).sum()
    }

    /// Neighbors of a node in insertion order
    pub fn neighbors(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut neighbors: Vec<NodeIndex> = self.graph.neighbors(node).collect();
        neighbors.sort_unstable();
        neighbors
    }

    pub fn has_edge(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.graph.find_edge(a, b).is_some()
    }

    /// Attributes of the edge between two nodes, if any
    pub fn edge(&self, a: NodeIndex, b: NodeIndex) -> Option<&EdgeData> {
        self.graph.find_edge(a, b).map(|e| &self.graph[e])
    }

    /// Every edge once, as (endpoint, endpoint, attributes)
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, &EdgeData)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source(), e.target(), e.weight()))
    }

    /// Sum of all edge weights
    pub fn total_weight(&self) -> f64 {
        self.graph.edge_weights().map(|e| e.confidence).sum()
    }

    /// Whether the builder would keep this interaction record
    pub fn accepts(&self, interaction: &Interaction) -> bool {
        builder::is_well_formed(interaction)
            && self.index.contains_key(&interaction.protein1)
            && self.index.contains_key(&interaction.protein2)
    }

    /// Compressed adjacency snapshot for traversal-heavy algorithms
    pub fn adjacency(&self) -> Adjacency {
        Adjacency::from_graph(self)
    }
}
