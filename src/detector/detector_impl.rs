use crate::disjoint_set::DisjointSet;
use crate::graph::Graph;
use crate::trace::{EventSink, Trace, TraceEvent};

/// Fast-path detector returning only the verdict
pub struct CycleDetector<'g> {
    graph: &'g Graph,
}

impl<'g> CycleDetector<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Whether the graph contains at least one cycle
    pub fn detect(&self) -> bool {
        run(self.graph, &mut ())
    }
}

/// Instrumented detector producing a [`Trace`]
pub struct TraceRecorder<'g> {
    graph: &'g Graph,
}

impl<'g> TraceRecorder<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Run detection and collect one event per notable step
    pub fn record(&self) -> Trace {
        let mut events = Vec::new();
        run(self.graph, &mut events);
        Trace::new(self.graph.is_directed(), events)
    }
}

/// Whether `graph` contains at least one cycle
pub fn detect_cycle(graph: &Graph) -> bool {
    CycleDetector::new(graph).detect()
}

/// Record the step trace of a detection run over `graph`
pub fn record_trace(graph: &Graph) -> Trace {
    TraceRecorder::new(graph).record()
}

fn run<S: EventSink>(graph: &Graph, sink: &mut S) -> bool {
    if graph.vertex_count() == 0 {
        return false;
    }

    if graph.is_directed() {
        detect_directed(graph.adjacency_list(), sink)
    } else {
        detect_undirected(graph.adjacency_list(), sink)
    }
}

fn close_cycle<S: EventSink>(sink: &mut S, source: usize, target: usize) -> bool {
    sink.record(TraceEvent::CycleEdge { source, target });
    sink.record(TraceEvent::CycleVertex { node: target });
    true
}

fn detect_undirected<S: EventSink>(adjacency: &[Vec<usize>], sink: &mut S) -> bool {
    let mut set = DisjointSet::new(adjacency.len());

    for (vertex, neighbors) in adjacency.iter().enumerate() {
        for &neighbor in neighbors {
            if vertex == neighbor {
                sink.record(TraceEvent::TraverseEdge {
                    source: vertex,
                    target: neighbor,
                });
                return close_cycle(sink, vertex, neighbor);
            }

            // The mirrored entry is handled from the lower endpoint
            if vertex > neighbor {
                continue;
            }

            sink.record(TraceEvent::TraverseEdge {
                source: vertex,
                target: neighbor,
            });

            let root_source = set.find(vertex);
            let root_target = set.find(neighbor);
            if root_source == root_target {
                return close_cycle(sink, vertex, neighbor);
            }

            set.union_sets(root_source, root_target);
            sink.record(TraceEvent::UnionMerge {
                source: vertex,
                target: neighbor,
            });
        }
    }

    false
}

struct Frame {
    vertex: usize,
    cursor: usize,
}

fn detect_directed<S: EventSink>(adjacency: &[Vec<usize>], sink: &mut S) -> bool {
    let vertex_count = adjacency.len();
    let mut visited = vec![false; vertex_count];
    let mut on_path = vec![false; vertex_count];
    let mut stack: Vec<Frame> = Vec::new();

    for start in 0..vertex_count {
        if visited[start] {
            continue;
        }

        visited[start] = true;
        on_path[start] = true;
        sink.record(TraceEvent::VisitVertex { node: start });
        stack.push(Frame {
            vertex: start,
            cursor: 0,
        });

        while let Some(frame) = stack.last_mut() {
            let vertex = frame.vertex;
            let Some(&neighbor) = adjacency[vertex].get(frame.cursor) else {
                on_path[vertex] = false;
                sink.record(TraceEvent::BacktrackVertex { node: vertex });
                stack.pop();
                continue;
            };
            frame.cursor += 1;

            sink.record(TraceEvent::TraverseEdge {
                source: vertex,
                target: neighbor,
            });

            if vertex == neighbor || (visited[neighbor] && on_path[neighbor]) {
                return close_cycle(sink, vertex, neighbor);
            }

            if !visited[neighbor] {
                visited[neighbor] = true;
                on_path[neighbor] = true;
                sink.record(TraceEvent::VisitVertex { node: neighbor });
                stack.push(Frame {
                    vertex: neighbor,
                    cursor: 0,
                });
            }
        }
    }

    false
}
