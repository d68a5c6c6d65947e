//! Community analysis module

pub mod detection;
pub mod metrics;

pub use detection::{connected_components, detect_communities, greedy_modularity, DisjointSets};

use serde::{Deserialize, Serialize};

/// A community of proteins found by modularity maximization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Community {
    /// Position of this community in the size-ordered output
    pub id: u32,

    /// Member proteins, in node insertion order
    pub proteins: Vec<String>,

    /// Size of the community
    pub size: usize,

    /// Density: internal edges / potential internal edges
    pub density: f64,

    /// Members with the most connections inside the community
    pub hub_proteins: Vec<String>,
}

/// One agglomeration step of the greedy search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MergeStep {
    /// Community ids that were merged (the second joins the first)
    pub merged: (usize, usize),

    /// Modularity gain of the merge
    pub gain: f64,

    /// Modularity of the partition after the merge
    pub modularity: f64,
}

/// Result of community detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityReport {
    /// Disjoint communities covering every protein
    pub communities: Vec<Community>,

    /// Weighted modularity of the final partition
    pub modularity: f64,

    /// Number of communities
    pub number_of_communities: usize,

    /// Merge history of the greedy search
    #[serde(skip)]
    pub merges: Vec<MergeStep>,
}
