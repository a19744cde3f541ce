//! Exhaustive comparison of cycle verdicts against petgraph's algorithms

use cycle_lens::graph::{Graph, connected_components};
use petgraph::algo::{self, is_cyclic_directed, is_cyclic_undirected};

/// Every ordered pair on three vertices, self-loops included
fn directed_candidates() -> Vec<(usize, usize)> {
    (0..3)
        .flat_map(|from| (0..3).map(move |to| (from, to)))
        .collect()
}

/// Every unordered pair on four vertices, self-loops included
fn undirected_candidates() -> Vec<(usize, usize)> {
    (0..4)
        .flat_map(|from| (from..4).map(move |to| (from, to)))
        .collect()
}

fn build(vertex_count: usize, directed: bool, candidates: &[(usize, usize)], mask: u32) -> Graph {
    let mut graph = Graph::new(vertex_count, directed);
    for (bit, &(from, to)) in candidates.iter().enumerate() {
        if mask & (1 << bit) != 0 {
            graph.add_edge(from, to).unwrap();
        }
    }
    graph
}

#[test]
fn test_all_directed_graphs_on_three_vertices() {
    let candidates = directed_candidates();
    assert_eq!(candidates.len(), 9);

    for mask in 0..(1u32 << candidates.len()) {
        let graph = build(3, true, &candidates, mask);
        let expected = is_cyclic_directed(&graph.to_digraph());

        assert_eq!(graph.detect_cycle(), expected, "mask {mask:#011b}");
        assert_eq!(graph.record_trace().has_cycle(), expected, "mask {mask:#011b}");
    }
}

#[test]
fn test_all_undirected_graphs_on_four_vertices() {
    let candidates = undirected_candidates();
    assert_eq!(candidates.len(), 10);

    for mask in 0..(1u32 << candidates.len()) {
        let graph = build(4, false, &candidates, mask);
        let expected = is_cyclic_undirected(&graph.to_ungraph());

        assert_eq!(graph.detect_cycle(), expected, "mask {mask:#012b}");
        assert_eq!(graph.record_trace().has_cycle(), expected, "mask {mask:#012b}");
    }
}

#[test]
fn test_component_counts_agree() {
    let candidates = undirected_candidates();

    for mask in 0..(1u32 << candidates.len()) {
        let graph = build(4, false, &candidates, mask);
        assert_eq!(
            connected_components(&graph).len(),
            algo::connected_components(&graph.to_ungraph()),
            "mask {mask:#012b}"
        );
    }
}

#[test]
fn test_edge_export_preserves_logical_edges() {
    let candidates = undirected_candidates();
    let graph = build(4, false, &candidates, (1 << candidates.len()) - 1);

    let mut edges = graph.edges();
    edges.sort_unstable();

    assert_eq!(edges, candidates);
    assert_eq!(graph.edge_count(), candidates.len());
}
