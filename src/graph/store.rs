//! Mutable adjacency storage
//!
//! Vertices are the dense ids `0..vertex_count`. Each vertex owns an ordered
//! neighbor list; insertion order is kept because it fixes traversal and trace
//! order. Parallel edges are kept as duplicate entries.

use serde::Serialize;

use crate::constants::limits::MAX_VERTICES;
use crate::detector::{CycleDetector, TraceRecorder};
use crate::error::GraphError;
use crate::trace::Trace;

/// A directed or undirected graph over dense vertex ids
///
/// In undirected mode every stored `u -> v` entry has a mirrored `v -> u`
/// entry; a self-loop is therefore stored twice in its own list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    directed: bool,
    adjacency: Vec<Vec<usize>>,
    #[serde(skip)]
    last_error: Option<String>,
}

impl Graph {
    /// Create a graph with `vertex_count` isolated vertices
    pub fn new(vertex_count: usize, directed: bool) -> Self {
        Self {
            directed,
            adjacency: vec![Vec::new(); vertex_count],
            last_error: None,
        }
    }

    /// Replace the vertex count and direction mode, dropping every edge.
    ///
    /// A negative count fails and leaves an empty, zero-vertex graph rather
    /// than stale data. A count above [`MAX_VERTICES`] fails and leaves the
    /// graph untouched. The direction flag is only updated on success.
    pub fn configure(&mut self, vertex_count: i64, directed: bool) -> Result<(), GraphError> {
        let Ok(count) = usize::try_from(vertex_count) else {
            self.adjacency.clear();
            return self.settle(Err(GraphError::NegativeVertexCount {
                count: vertex_count,
            }));
        };

        if count > MAX_VERTICES {
            return self.settle(Err(GraphError::TooManyVertices {
                count: vertex_count,
                limit: MAX_VERTICES,
            }));
        }

        self.directed = directed;
        self.adjacency = vec![Vec::new(); count];
        self.settle(Ok(()))
    }

    /// Empty every neighbor list, keeping vertex count and direction
    pub fn clear_edges(&mut self) {
        self.adjacency.iter_mut().for_each(Vec::clear);
        self.last_error = None;
    }

    /// Append `to` to `from`'s neighbors, and the mirror entry when undirected
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<(), GraphError> {
        if !self.is_valid_vertex(from) || !self.is_valid_vertex(to) {
            let err = GraphError::EdgeOutOfRange {
                from: signed(from),
                to: signed(to),
                vertex_count: self.vertex_count(),
            };
            return self.settle(Err(err));
        }

        self.adjacency[from].push(to);
        if !self.directed {
            self.adjacency[to].push(from);
        }

        self.settle(Ok(()))
    }

    /// Remove the first `from -> to` entry.
    ///
    /// When undirected, one mirrored `to -> from` entry is removed as well if
    /// present. The outcome depends only on the primary entry, so a graph
    /// whose mirror is already missing still reports success.
    pub fn remove_edge(&mut self, from: usize, to: usize) -> Result<(), GraphError> {
        if !self.is_valid_vertex(from) || !self.is_valid_vertex(to) {
            let err = GraphError::EdgeOutOfRange {
                from: signed(from),
                to: signed(to),
                vertex_count: self.vertex_count(),
            };
            return self.settle(Err(err));
        }

        if !remove_first(&mut self.adjacency[from], to) {
            return self.settle(Err(GraphError::EdgeNotFound { from, to }));
        }

        if !self.directed {
            remove_first(&mut self.adjacency[to], from);
        }

        self.settle(Ok(()))
    }

    /// Delete vertex `index` and every edge touching it, then shift all
    /// higher ids down by one.
    ///
    /// Returns `false` and changes nothing when `index` is out of range.
    pub fn delete_vertex(&mut self, index: usize) -> bool {
        if !self.is_valid_vertex(index) {
            return false;
        }

        // Built aside and swapped in, so no half-renumbered state is visible
        let adjacency: Vec<Vec<usize>> = self
            .adjacency
            .iter()
            .enumerate()
            .filter(|&(vertex, _)| vertex != index)
            .map(|(_, neighbors)| {
                neighbors
                    .iter()
                    .filter(|&&neighbor| neighbor != index)
                    .map(|&neighbor| if neighbor > index { neighbor - 1 } else { neighbor })
                    .collect::<Vec<usize>>()
            })
            .collect();

        self.adjacency = adjacency;
        self.last_error = None;
        true
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of logical edges; an undirected pair counts once
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.iter().map(Vec::len).sum();
        if self.directed { entries } else { entries / 2 }
    }

    /// Read-only view of the ordered neighbor list of every vertex
    pub fn adjacency_list(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    /// Ordered neighbors of `vertex`, empty when out of range
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Message of the most recent failed mutation, cleared by the next
    /// successful one
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether the graph contains at least one cycle
    pub fn detect_cycle(&self) -> bool {
        CycleDetector::new(self).detect()
    }

    /// Re-run detection and return the ordered step trace
    pub fn record_trace(&self) -> Trace {
        TraceRecorder::new(self).record()
    }

    fn is_valid_vertex(&self, index: usize) -> bool {
        index < self.adjacency.len()
    }

    fn settle(&mut self, outcome: Result<(), GraphError>) -> Result<(), GraphError> {
        self.last_error = outcome.as_ref().err().map(ToString::to_string);
        outcome
    }
}

fn remove_first(neighbors: &mut Vec<usize>, target: usize) -> bool {
    match neighbors.iter().position(|&n| n == target) {
        Some(position) => {
            neighbors.remove(position);
            true
        }
        None => false,
    }
}

fn signed(vertex: usize) -> i64 {
    i64::try_from(vertex).unwrap_or(i64::MAX)
}
