//! Replayable algorithm traces
//!
//! A [`Trace`] is the ordered list of [`TraceEvent`]s produced by one
//! instrumented detection run. Recording the same graph twice yields the same
//! events. A trace ends right after the first `CycleEdge`/`CycleVertex` pair
//! when a cycle exists.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One notable step of a detection run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    /// Directed DFS entered `node`
    VisitVertex { node: usize },
    /// Directed DFS left `node` after exhausting its neighbors
    BacktrackVertex { node: usize },
    /// An edge is about to be inspected
    TraverseEdge { source: usize, target: usize },
    /// The edge that closes a cycle
    CycleEdge { source: usize, target: usize },
    /// The vertex that completes the loop, always right after `CycleEdge`
    CycleVertex { node: usize },
    /// Undirected detection merged the sets of both endpoints
    UnionMerge { source: usize, target: usize },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::VisitVertex { node } => write!(f, "Visiting vertex {node}"),
            TraceEvent::BacktrackVertex { node } => write!(f, "Backtracking from vertex {node}"),
            TraceEvent::TraverseEdge { source, target } => {
                write!(f, "Exploring edge {source} → {target}")
            }
            TraceEvent::CycleEdge { source, target } => {
                write!(f, "Cycle edge spotted between {source} and {target}")
            }
            TraceEvent::CycleVertex { node } => write!(f, "Vertex {node} closes the cycle"),
            TraceEvent::UnionMerge { source, target } => {
                write!(f, "Merging sets of {source} and {target}")
            }
        }
    }
}

/// Receiver of trace events emitted while a detector runs
///
/// `()` drops every event, which is how the plain verdict path runs the exact
/// same traversal without allocating.
pub trait EventSink {
    fn record(&mut self, event: TraceEvent);
}

impl EventSink for () {
    #[inline]
    fn record(&mut self, _event: TraceEvent) {}
}

impl EventSink for Vec<TraceEvent> {
    fn record(&mut self, event: TraceEvent) {
        self.push(event);
    }
}

/// The finished event sequence of one detection run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Trace {
    directed: bool,
    events: Vec<TraceEvent>,
}

impl Trace {
    pub(crate) fn new(directed: bool, events: Vec<TraceEvent>) -> Self {
        Self { directed, events }
    }

    /// Whether the trace was recorded on a directed graph
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Whether the run ended on a cycle
    pub fn has_cycle(&self) -> bool {
        self.cycle_edge().is_some()
    }

    /// The edge that closed the cycle, if one was found
    pub fn cycle_edge(&self) -> Option<(usize, usize)> {
        self.events.iter().rev().find_map(|event| match *event {
            TraceEvent::CycleEdge { source, target } => Some((source, target)),
            _ => None,
        })
    }

    /// Replay the events to reconstruct the loop that was found.
    ///
    /// Directed traces yield the DFS path from the back-edge target to its
    /// source. Undirected traces yield the path through merged edges between
    /// the closing edge's endpoints. A self-loop yields a single vertex.
    /// The returned vertices are in loop order; the closing edge runs from the
    /// last vertex back to the first.
    pub fn cycle_vertices(&self) -> Option<Vec<usize>> {
        let (source, target) = self.cycle_edge()?;
        if source == target {
            return Some(vec![source]);
        }

        if self.directed {
            self.directed_loop(source, target)
        } else {
            self.undirected_loop(source, target)
        }
    }

    fn directed_loop(&self, source: usize, target: usize) -> Option<Vec<usize>> {
        let mut path: Vec<usize> = Vec::new();
        for event in &self.events {
            match *event {
                TraceEvent::VisitVertex { node } => path.push(node),
                TraceEvent::BacktrackVertex { .. } => {
                    path.pop();
                }
                TraceEvent::CycleEdge { .. } => break,
                _ => {}
            }
        }

        if path.last() != Some(&source) {
            return None;
        }
        let start = path.iter().position(|&vertex| vertex == target)?;
        Some(path.split_off(start))
    }

    fn undirected_loop(&self, source: usize, target: usize) -> Option<Vec<usize>> {
        let mut forest: Vec<Vec<usize>> = vec![Vec::new(); source.max(target) + 1];
        for event in &self.events {
            if let TraceEvent::UnionMerge { source, target } = *event {
                let needed = source.max(target) + 1;
                if forest.len() < needed {
                    forest.resize_with(needed, Vec::new);
                }
                forest[source].push(target);
                forest[target].push(source);
            }
        }

        // Breadth-first walk over the merged edges from `target` to `source`
        let mut parent: Vec<Option<usize>> = vec![None; forest.len()];
        parent[target] = Some(target);
        let mut queue = VecDeque::from([target]);
        while let Some(vertex) = queue.pop_front() {
            if vertex == source {
                let mut path = vec![source];
                let mut current = source;
                while current != target {
                    current = parent[current]?;
                    path.push(current);
                }
                return Some(path);
            }

            for &next in &forest[vertex] {
                if parent[next].is_none() {
                    parent[next] = Some(vertex);
                    queue.push_back(next);
                }
            }
        }

        None
    }
}

impl IntoIterator for Trace {
    type Item = TraceEvent;
    type IntoIter = std::vec::IntoIter<TraceEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
