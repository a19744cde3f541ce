//! Conversion into petgraph graphs
//!
//! Node weights are the engine's vertex ids, so `graph[node]` maps a petgraph
//! index back to the id used everywhere else.

use petgraph::EdgeType;
use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::graph::Graph;

impl Graph {
    /// Every adjacency entry as a directed petgraph edge, in storage order
    pub fn to_digraph(&self) -> DiGraph<usize, ()> {
        let mut graph = DiGraph::with_capacity(self.vertex_count(), self.edge_count());
        let nodes: Vec<NodeIndex> = (0..self.vertex_count())
            .map(|vertex| graph.add_node(vertex))
            .collect();

        for (source, neighbors) in self.adjacency_list().iter().enumerate() {
            for &target in neighbors {
                graph.add_edge(nodes[source], nodes[target], ());
            }
        }

        graph
    }

    /// Logical edges as an undirected petgraph graph.
    ///
    /// Each mirrored pair becomes one edge, taken from the lower endpoint's
    /// list. Self-loops are stored twice and exported once per pair.
    pub fn to_ungraph(&self) -> UnGraph<usize, ()> {
        let mut graph = UnGraph::with_capacity(self.vertex_count(), self.edge_count());
        let nodes: Vec<NodeIndex> = (0..self.vertex_count())
            .map(|vertex| graph.add_node(vertex))
            .collect();

        for (source, neighbors) in self.adjacency_list().iter().enumerate() {
            let mut self_entries = 0usize;
            for &target in neighbors {
                if source == target {
                    self_entries += 1;
                    if self_entries % 2 == 1 {
                        graph.add_edge(nodes[source], nodes[target], ());
                    }
                } else if source < target {
                    graph.add_edge(nodes[source], nodes[target], ());
                }
            }
        }

        graph
    }

    /// Logical edges as `(source, target)` pairs
    ///
    /// Directed graphs list every entry; undirected graphs list each pair once.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        if self.is_directed() {
            edge_pairs(&self.to_digraph())
        } else {
            edge_pairs(&self.to_ungraph())
        }
    }
}

fn edge_pairs<Ty: EdgeType>(graph: &petgraph::Graph<usize, (), Ty>) -> Vec<(usize, usize)> {
    graph
        .edge_references()
        .map(|edge| (graph[edge.source()], graph[edge.target()]))
        .collect()
}

#[cfg(test)]
mod tests {
    use petgraph::algo::{connected_components, is_cyclic_directed, is_cyclic_undirected};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_digraph_keeps_every_entry() {
        let mut graph = Graph::new(3, true);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(2, 0).unwrap();

        let exported = graph.to_digraph();
        assert_eq!(exported.node_count(), 3);
        assert_eq!(exported.edge_count(), 3);
        assert!(!is_cyclic_directed(&exported));
    }

    #[test]
    fn test_ungraph_folds_mirrors() {
        let mut graph = Graph::new(3, false);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(2, 1).unwrap();
        graph.add_edge(2, 2).unwrap();

        let exported = graph.to_ungraph();
        assert_eq!(exported.edge_count(), 3);
        assert!(is_cyclic_undirected(&exported));
        assert_eq!(connected_components(&exported), 1);
    }

    #[test]
    fn test_edges_lists_logical_pairs() {
        let mut graph = Graph::new(3, false);
        graph.add_edge(1, 0).unwrap();
        graph.add_edge(1, 2).unwrap();

        assert_eq!(graph.edges(), vec![(0, 1), (1, 2)]);
    }
}
