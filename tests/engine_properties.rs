//! Behavioral properties of the graph engine, exercised through the public API

use cycle_lens::detector::{detect_cycle, record_trace};
use cycle_lens::disjoint_set::DisjointSet;
use cycle_lens::error::GraphError;
use cycle_lens::graph::Graph;
use cycle_lens::trace::TraceEvent;
use pretty_assertions::assert_eq;

fn graph_with(vertex_count: usize, directed: bool, edges: &[(usize, usize)]) -> Graph {
    let mut graph = Graph::new(vertex_count, directed);
    for &(from, to) in edges {
        graph.add_edge(from, to).unwrap();
    }
    graph
}

/// Small deterministic generator so the property runs are reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) % bound as u64) as usize
    }
}

#[test]
fn test_configure_resets_to_empty_lists() {
    for n in [0, 1, 5, 64] {
        for directed in [false, true] {
            let mut graph = graph_with(3, !directed, &[(0, 1), (2, 2)]);
            graph.configure(n, directed).unwrap();

            assert_eq!(graph.vertex_count(), n as usize);
            assert_eq!(graph.is_directed(), directed);
            assert!(graph.adjacency_list().iter().all(Vec::is_empty));
            assert_eq!(graph.last_error(), None);
        }
    }
}

#[test]
fn test_negative_configure_fails_with_zero_vertices() {
    let mut graph = graph_with(3, true, &[(0, 1)]);

    let err = graph.configure(-1, false).unwrap_err();

    assert_eq!(err, GraphError::NegativeVertexCount { count: -1 });
    assert!(!graph.last_error().unwrap_or_default().is_empty());
    assert_eq!(graph.vertex_count(), 0);
    assert!(!graph.detect_cycle());
}

#[test]
fn test_add_edge_records_both_directions_only_when_undirected() {
    let directed = graph_with(3, true, &[(0, 2)]);
    assert_eq!(directed.neighbors(0), &[2]);
    assert!(directed.neighbors(2).is_empty());

    let undirected = graph_with(3, false, &[(0, 2)]);
    assert_eq!(undirected.neighbors(0), &[2]);
    assert_eq!(undirected.neighbors(2), &[0]);
}

#[test]
fn test_out_of_range_edge_leaves_adjacency_unchanged() {
    let mut graph = graph_with(3, false, &[(0, 1)]);
    let before = graph.adjacency_list().to_vec();

    for (from, to) in [(3, 0), (0, 3), (7, 9)] {
        let err = graph.add_edge(from, to).unwrap_err();
        assert!(matches!(err, GraphError::EdgeOutOfRange { .. }));
        assert_eq!(graph.adjacency_list(), before.as_slice());
    }

    graph.add_edge(1, 2).unwrap();
    assert_eq!(graph.last_error(), None);
}

#[test]
fn test_self_loop_is_a_cycle_in_both_modes() {
    for directed in [false, true] {
        let graph = graph_with(2, directed, &[(1, 1)]);
        assert!(graph.detect_cycle(), "directed: {directed}");
    }
}

#[test]
fn test_undirected_triangle_and_path() {
    assert!(graph_with(3, false, &[(0, 1), (1, 2), (2, 0)]).detect_cycle());
    assert!(!graph_with(3, false, &[(0, 1), (1, 2)]).detect_cycle());
}

#[test]
fn test_directed_chains_and_loops() {
    assert!(!graph_with(4, true, &[(0, 1), (1, 2), (2, 3)]).detect_cycle());
    assert!(graph_with(3, true, &[(0, 1), (1, 2), (2, 0)]).detect_cycle());
    // The loop 1 → 2 → 3 → 1 does not pass through the start vertex
    assert!(graph_with(4, true, &[(0, 1), (1, 2), (2, 3), (3, 1)]).detect_cycle());
}

#[test]
fn test_directed_diamond_is_not_a_cycle() {
    // Reaching 3 twice through different branches is a cross edge
    let graph = graph_with(4, true, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
    assert!(!graph.detect_cycle());
}

#[test]
fn test_removing_closing_edge_breaks_the_cycle() {
    for directed in [false, true] {
        let mut graph = graph_with(3, directed, &[(0, 1), (1, 2), (2, 0)]);
        assert!(graph.detect_cycle());

        graph.remove_edge(2, 0).unwrap();
        assert!(!graph.detect_cycle(), "directed: {directed}");

        let err = graph.remove_edge(2, 0).unwrap_err();
        assert_eq!(err, GraphError::EdgeNotFound { from: 2, to: 0 });
    }
}

#[test]
fn test_delete_vertex_matches_rebuilt_topology() {
    let mut rng = Lcg(7);

    for round in 0..200 {
        let vertex_count = 2 + rng.next(6);
        let directed = round % 2 == 0;
        let edges: Vec<(usize, usize)> = (0..rng.next(10))
            .map(|_| (rng.next(vertex_count), rng.next(vertex_count)))
            .collect();
        let removed = rng.next(vertex_count);

        let mut graph = graph_with(vertex_count, directed, &edges);
        assert!(graph.delete_vertex(removed));

        let shift = |v: usize| if v > removed { v - 1 } else { v };
        let surviving: Vec<(usize, usize)> = edges
            .iter()
            .filter(|&&(from, to)| from != removed && to != removed)
            .map(|&(from, to)| (shift(from), shift(to)))
            .collect();
        let rebuilt = graph_with(vertex_count - 1, directed, &surviving);

        assert_eq!(graph.vertex_count(), vertex_count - 1);
        assert_eq!(graph.edge_count(), rebuilt.edge_count());
        assert_eq!(
            graph.detect_cycle(),
            rebuilt.detect_cycle(),
            "round {round}: edges {edges:?}, removed {removed}"
        );
    }
}

#[test]
fn test_delete_vertex_out_of_range_is_a_no_op() {
    let mut graph = graph_with(2, true, &[(0, 1)]);
    let before = graph.clone();

    assert!(!graph.delete_vertex(2));
    assert_eq!(graph, before);
}

#[test]
fn test_trace_is_deterministic_and_stops_at_the_cycle() {
    let mut rng = Lcg(99);

    for round in 0..100 {
        let vertex_count = 1 + rng.next(7);
        let directed = round % 3 != 0;
        let edges: Vec<(usize, usize)> = (0..rng.next(12))
            .map(|_| (rng.next(vertex_count), rng.next(vertex_count)))
            .collect();
        let graph = graph_with(vertex_count, directed, &edges);

        let first = record_trace(&graph);
        let second = record_trace(&graph);
        assert_eq!(first, second);
        assert_eq!(first.has_cycle(), detect_cycle(&graph));

        let cycle_edges = first
            .events()
            .iter()
            .filter(|e| matches!(e, TraceEvent::CycleEdge { .. }))
            .count();
        if first.has_cycle() {
            assert_eq!(cycle_edges, 1);
            let events = first.events();
            let (source, target) = first.cycle_edge().unwrap();
            assert_eq!(
                events[events.len() - 2..],
                [
                    TraceEvent::CycleEdge { source, target },
                    TraceEvent::CycleVertex { node: target },
                ]
            );
        } else {
            assert_eq!(cycle_edges, 0);
        }
    }
}

#[test]
fn test_square_scenario() {
    let mut graph = graph_with(4, false, &[(0, 1), (1, 2), (2, 3)]);
    assert!(!graph.detect_cycle());

    graph.add_edge(3, 0).unwrap();
    assert!(graph.detect_cycle());

    // Vertex 0 merges both of its edges first, so 2-3 is the edge that
    // finds its endpoints already joined. Each pair is handled from its lower
    // endpoint, so 3-0 can never be reported as the closing edge.
    let trace = graph.record_trace();
    assert_eq!(
        trace.events(),
        &[
            TraceEvent::TraverseEdge { source: 0, target: 1 },
            TraceEvent::UnionMerge { source: 0, target: 1 },
            TraceEvent::TraverseEdge { source: 0, target: 3 },
            TraceEvent::UnionMerge { source: 0, target: 3 },
            TraceEvent::TraverseEdge { source: 1, target: 2 },
            TraceEvent::UnionMerge { source: 1, target: 2 },
            TraceEvent::TraverseEdge { source: 2, target: 3 },
            TraceEvent::CycleEdge { source: 2, target: 3 },
            TraceEvent::CycleVertex { node: 3 },
        ]
    );
    assert_eq!(trace.cycle_vertices(), Some(vec![2, 1, 0, 3]));
}

#[test]
fn test_witness_loop_on_large_rings() {
    const RING: usize = 100_000;

    for directed in [false, true] {
        let mut graph = Graph::new(RING, directed);
        for vertex in 0..RING {
            graph.add_edge(vertex, (vertex + 1) % RING).unwrap();
        }

        let trace = graph.record_trace();
        let loop_vertices = trace.cycle_vertices().unwrap();

        assert_eq!(loop_vertices.len(), RING, "directed: {directed}");
        let mut sorted = loop_vertices.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), RING, "directed: {directed}");
    }
}

#[test]
fn test_witness_loop_uses_real_edges() {
    let mut rng = Lcg(2024);

    for round in 0..200 {
        let vertex_count = 2 + rng.next(6);
        let directed = round % 2 == 1;
        let edges: Vec<(usize, usize)> = (0..rng.next(10))
            .map(|_| (rng.next(vertex_count), rng.next(vertex_count)))
            .collect();
        let graph = graph_with(vertex_count, directed, &edges);

        let Some(loop_vertices) = graph.record_trace().cycle_vertices() else {
            assert!(!graph.detect_cycle());
            continue;
        };

        let mut closed = loop_vertices.clone();
        closed.push(loop_vertices[0]);
        for pair in closed.windows(2) {
            assert!(
                graph.neighbors(pair[0]).contains(&pair[1]),
                "round {round}: {pair:?} is not an edge of {edges:?}"
            );
        }
    }
}

#[test]
fn test_disjoint_set_public_api() {
    let mut set = DisjointSet::new(4);
    let (a, b) = (set.find(0), set.find(1));
    set.union_sets(a, b);

    assert!(set.connected(0, 1));
    assert!(!set.connected(1, 2));
    assert_eq!(set.len(), 4);
}
