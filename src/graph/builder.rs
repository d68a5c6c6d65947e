//! Graph construction module

use crate::data::Interaction;
use crate::graph::{EdgeData, ProteinGraph};
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

/// Builder for incrementally constructing a ProteinGraph
pub struct GraphBuilder {
    /// Graph under construction
    graph: UnGraph<String, EdgeData>,

    /// Mapping from protein identifiers to node indices
    id_to_index: HashMap<String, NodeIndex>,

    /// Interaction records rejected so far
    dropped: usize,
}

impl GraphBuilder {
    /// Create a new graph builder with the given capacity
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: UnGraph::with_capacity(nodes, edges),
            id_to_index: HashMap::with_capacity(nodes),
            dropped: 0,
        }
    }

    /// Get or create the node for the given protein
    pub fn add_protein(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.id_to_index.get(id) {
            return idx;
        }

        let idx = self.graph.add_node(id.to_string());
        self.id_to_index.insert(id.to_string(), idx);
        idx
    }

    /// Insert the undirected edge described by an interaction record.
    ///
    /// Both endpoints must already be known proteins. A second record for
    /// the same pair overwrites the first. Returns false when the record
    /// was dropped.
    pub fn add_interaction(&mut self, interaction: &Interaction) -> bool {
        if !is_well_formed(interaction) {
            log::debug!(
                "Dropping malformed interaction {} ({} - {}, confidence {})",
                interaction.id,
                interaction.protein1,
                interaction.protein2,
                interaction.confidence
            );
            self.dropped += 1;
            return false;
        }

        let endpoints = (
            self.id_to_index.get(&interaction.protein1),
            self.id_to_index.get(&interaction.protein2),
        );
        let (src, dst) = match endpoints {
            (Some(&src), Some(&dst)) => (src, dst),
            _ => {
                log::debug!(
                    "Dropping interaction {} with unknown endpoint ({} - {})",
                    interaction.id,
                    interaction.protein1,
                    interaction.protein2
                );
                self.dropped += 1;
                return false;
            }
        };

        self.graph.update_edge(
            src,
            dst,
            EdgeData {
                confidence: interaction.confidence,
                kind: interaction.kind,
                family: interaction.family.clone(),
            },
        );
        true
    }

    /// Number of interaction records rejected so far
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Build the protein graph
    pub fn build(self) -> ProteinGraph {
        if self.dropped > 0 {
            log::warn!("Dropped {} malformed interaction records", self.dropped);
        }
        ProteinGraph::from_parts(self.graph, self.id_to_index)
    }
}

/// Self-loops and confidences outside [0, 1] are never inserted
pub(crate) fn is_well_formed(interaction: &Interaction) -> bool {
    interaction.protein1 != interaction.protein2
        && interaction.confidence.is_finite()
        && (0.0..=1.0).contains(&interaction.confidence)
}

/// Build a graph with every protein as a node, then every valid interaction
/// as an edge
pub fn build(proteins: &[String], interactions: &[Interaction]) -> ProteinGraph {
    let mut builder = GraphBuilder::with_capacity(proteins.len(), interactions.len());

    // Isolated proteins must still appear as nodes
    for protein in proteins {
        builder.add_protein(protein);
    }

    for interaction in interactions {
        builder.add_interaction(interaction);
    }

    builder.build()
}
