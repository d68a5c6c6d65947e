//! Community detection algorithms

use crate::cluster::metrics::{calculate_density, hub_proteins, modularity};
use crate::cluster::{Community, CommunityReport, MergeStep};
use crate::graph::ProteinGraph;
use petgraph::graph::NodeIndex;
use std::collections::{BTreeMap, HashMap};

/// Union-Find data structure for connected component analysis
pub struct DisjointSets {
    /// Parent pointers (parent[i] = parent of node i)
    parent: Vec<u32>,

    /// Size of each set (for union by size)
    rank: Vec<u32>,
}

impl DisjointSets {
    /// Create a new DisjointSets data structure
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size as u32).collect(),
            rank: vec![1; size],
        }
    }

    /// Find the root of the set containing x with path compression
    pub fn find(&mut self, x: u32) -> u32 {
        let px = self.parent[x as usize];
        if px != x {
            // Path compression: set parent to root
            self.parent[x as usize] = self.find(px);
        }
        self.parent[x as usize]
    }

    /// Union the sets containing x and y
    pub fn union(&mut self, x: u32, y: u32) {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return; // Already in the same set
        }

        // Attach smaller tree under root of larger tree
        let rank_x = self.rank[root_x as usize];
        let rank_y = self.rank[root_y as usize];

        if rank_x > rank_y {
            self.parent[root_y as usize] = root_x;
            self.rank[root_x as usize] += rank_y;
        } else {
            self.parent[root_x as usize] = root_y;
            self.rank[root_y as usize] += rank_x;
        }
    }

    /// Get the size of the set containing x
    pub fn size(&mut self, x: u32) -> u32 {
        let root = self.find(x);
        self.rank[root as usize]
    }
}

/// Connected components, each listed in insertion order; components are
/// ordered by their first node
pub fn connected_components(graph: &ProteinGraph) -> Vec<Vec<NodeIndex>> {
    let mut sets = DisjointSets::new(graph.node_count());
    for (a, b, _) in graph.edges() {
        sets.union(a.index() as u32, b.index() as u32);
    }

    let mut slot_of_root: HashMap<u32, usize> = HashMap::new();
    let mut components: Vec<Vec<NodeIndex>> = Vec::new();

    for node in graph.nodes() {
        let root = sets.find(node.index() as u32);
        let slot = *slot_of_root.entry(root).or_insert_with(|| {
            components.push(Vec::new());
            components.len() - 1
        });
        components[slot].push(node);
    }

    components
}

/// Greedy agglomerative modularity maximization.
///
/// Starts from singletons and repeatedly merges the pair of adjacent
/// communities with the largest weighted modularity gain
/// `2 * (e_ij - a_i * a_j)`, stopping once no merge has a positive gain.
/// Among equal gains the pair with the smallest community ids wins.
///
/// Returns the partition (members in insertion order, communities ordered
/// by size then first member) and the merge history.
pub fn greedy_modularity(graph: &ProteinGraph) -> (Vec<Vec<NodeIndex>>, Vec<MergeStep>) {
    let n = graph.node_count();
    let mut members: Vec<Vec<NodeIndex>> = graph.nodes().map(|node| vec![node]).collect();
    let mut merges = Vec::new();

    let m = graph.total_weight();
    if m <= 0.0 {
        return (members, merges);
    }
    let two_m = 2.0 * m;

    // a[i]: fraction of edge ends attached to community i
    let mut a: Vec<f64> = graph.nodes().map(|node| graph.strength(node) / two_m).collect();

    // links[i][j]: e_ij, half the fraction of weight between i and j
    let mut links: Vec<BTreeMap<usize, f64>> = vec![BTreeMap::new(); n];
    for (x, y, edge) in graph.edges() {
        let share = edge.confidence / two_m;
        *links[x.index()].entry(y.index()).or_insert(0.0) += share;
        *links[y.index()].entry(x.index()).or_insert(0.0) += share;
    }

    let mut alive = vec![true; n];
    let mut q: f64 = -a.iter().map(|ai| ai * ai).sum::<f64>();

    loop {
        let mut best: Option<(usize, usize, f64)> = None;
        for i in (0..n).filter(|&i| alive[i]) {
            for (&j, &e_ij) in links[i].range(i + 1..) {
                let gain = 2.0 * (e_ij - a[i] * a[j]);
                if best.map_or(true, |(_, _, top)| gain > top) {
                    best = Some((i, j, gain));
                }
            }
        }

        let (i, j, gain) = match best {
            Some(step) if step.2 > 0.0 => step,
            _ => break,
        };

        // Fold community j into i
        let moved = std::mem::take(&mut members[j]);
        members[i].extend(moved);

        let moved_links = std::mem::take(&mut links[j]);
        for (k, e_jk) in moved_links {
            if k == i {
                continue;
            }
            *links[i].entry(k).or_insert(0.0) += e_jk;
            links[k].remove(&j);
            *links[k].entry(i).or_insert(0.0) += e_jk;
        }
        links[i].remove(&j);

        a[i] += a[j];
        a[j] = 0.0;
        alive[j] = false;

        q += gain;
        log::debug!("Merged community {} into {} (gain {:.6}, Q {:.6})", j, i, gain, q);
        merges.push(MergeStep {
            merged: (i, j),
            gain,
            modularity: q,
        });
    }

    let mut partition: Vec<Vec<NodeIndex>> = members
        .into_iter()
        .filter(|community| !community.is_empty())
        .map(|mut community| {
            community.sort_unstable();
            community
        })
        .collect();

    // Largest first, then by first member
    partition.sort_by(|x, y| y.len().cmp(&x.len()).then_with(|| x[0].cmp(&y[0])));

    (partition, merges)
}

/// Detect communities and describe them
pub fn detect_communities(graph: &ProteinGraph, hub_limit: usize) -> CommunityReport {
    log::info!(
        "Detecting communities in graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let (partition, merges) = greedy_modularity(graph);
    let q = modularity(graph, &partition);

    let communities: Vec<Community> = partition
        .iter()
        .enumerate()
        .map(|(id, members)| Community {
            id: id as u32,
            proteins: members.iter().map(|&n| graph.protein(n).to_string()).collect(),
            size: members.len(),
            density: calculate_density(graph, members),
            hub_proteins: hub_proteins(graph, members, hub_limit),
        })
        .collect();

    log::info!(
        "Found {} communities after {} merges (modularity {:.4})",
        communities.len(),
        merges.len(),
        q
    );

    CommunityReport {
        number_of_communities: communities.len(),
        communities,
        modularity: q,
        merges,
    }
}
