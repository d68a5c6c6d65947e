//! Protein interaction dataset: schema and loading

pub mod fixture;
pub mod loader;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Family reported for proteins that belong to no declared family
pub const UNKNOWN_FAMILY: &str = "Unknown";

/// Kind of evidence behind an interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionType {
    Direct,
    Indirect,
    Predicted,
}

impl InteractionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionType::Direct => "direct",
            InteractionType::Indirect => "indirect",
            InteractionType::Predicted => "predicted",
        }
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single interaction record between two proteins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    /// Record identifier
    pub id: u32,

    /// First endpoint
    pub protein1: String,

    /// Second endpoint
    pub protein2: String,

    /// Confidence in [0, 1], used as the edge weight
    pub confidence: f64,

    /// Evidence type
    #[serde(rename = "type")]
    pub kind: InteractionType,

    /// Family tag of the record
    pub family: String,
}

impl Interaction {
    /// Whether the given protein is one of the two endpoints
    pub fn involves(&self, protein: &str) -> bool {
        self.protein1 == protein || self.protein2 == protein
    }
}

/// A named protein family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    pub name: String,
    pub members: Vec<String>,
}

/// Immutable dataset shared by every request.
///
/// Families are kept in declaration order so that family lookup is
/// deterministic when a protein belongs to several of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Protein identifiers, in declaration order
    pub proteins: Vec<String>,

    /// Interaction records
    pub interactions: Vec<Interaction>,

    /// Family membership, in declaration order
    #[serde(default)]
    pub families: Vec<Family>,
}

impl Dataset {
    /// Whether the protein is declared in the dataset
    pub fn contains(&self, protein: &str) -> bool {
        self.proteins.iter().any(|p| p == protein)
    }

    /// First family, in declaration order, that lists the protein
    pub fn family_of(&self, protein: &str) -> Option<&str> {
        self.families
            .iter()
            .find(|family| family.members.iter().any(|m| m == protein))
            .map(|family| family.name.as_str())
    }

    /// Interaction records with the protein as either endpoint
    pub fn interactions_of<'a>(
        &'a self,
        protein: &'a str,
    ) -> impl Iterator<Item = &'a Interaction> + 'a {
        self.interactions.iter().filter(move |i| i.involves(protein))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family(name: &str, members: &[&str]) -> Family {
        Family {
            name: name.to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn test_family_lookup_uses_declaration_order() {
        let dataset = Dataset {
            proteins: vec!["TP53".into(), "RB1".into(), "CDH1".into()],
            interactions: Vec::new(),
            families: vec![
                family("DNA_Repair", &["TP53"]),
                family("Cell_Cycle", &["RB1", "TP53"]),
            ],
        };

        assert_eq!(dataset.family_of("TP53"), Some("DNA_Repair"));
        assert_eq!(dataset.family_of("RB1"), Some("Cell_Cycle"));
        assert_eq!(dataset.family_of("CDH1"), None);
    }

    #[test]
    fn test_interaction_type_wire_names() {
        let json = r#"{"id":7,"protein1":"A","protein2":"B","confidence":0.5,"type":"predicted","family":"unknown"}"#;
        let interaction: Interaction = serde_json::from_str(json).unwrap();
        assert_eq!(interaction.kind, InteractionType::Predicted);
        assert!(interaction.involves("B"));
        assert!(!interaction.involves("C"));

        let back = serde_json::to_value(&interaction).unwrap();
        assert_eq!(back["type"], "predicted");
    }
}
