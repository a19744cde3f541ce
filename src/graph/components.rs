//! Connected components over a union-find forest

use std::collections::HashMap;

use crate::disjoint_set::DisjointSet;
use crate::graph::Graph;

/// Group vertices into connected components, ignoring edge direction.
///
/// Every stored adjacency entry unites its endpoints in a fresh
/// [`DisjointSet`]. Groups are ordered by their smallest vertex and members
/// are ascending. Isolated vertices form singleton groups.
pub fn connected_components(graph: &Graph) -> Vec<Vec<usize>> {
    let mut set = DisjointSet::new(graph.vertex_count());

    for (source, neighbors) in graph.adjacency_list().iter().enumerate() {
        for &target in neighbors {
            let root_source = set.find(source);
            let root_target = set.find(target);
            set.union_sets(root_source, root_target);
        }
    }

    let mut slots: HashMap<usize, usize> = HashMap::new();
    let mut clusters: Vec<Vec<usize>> = Vec::new();
    for vertex in 0..graph.vertex_count() {
        let slot = *slots.entry(set.find(vertex)).or_insert_with(|| {
            clusters.push(Vec::new());
            clusters.len() - 1
        });
        clusters[slot].push(vertex);
    }

    clusters
}
