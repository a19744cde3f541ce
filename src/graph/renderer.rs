use std::collections::HashSet;
use std::io::Write;

use miette::Result;

use crate::error::CycleLensError;
use crate::graph::Graph;
use crate::trace::Trace;

// Blue-Orange Accessible Palette
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(CycleLensError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(CycleLensError::from)
    };
}

/// Vertices and edges of the first cycle found, as recovered from a trace
struct CycleHighlight {
    directed: bool,
    vertices: HashSet<usize>,
    edges: HashSet<(usize, usize)>,
}

impl CycleHighlight {
    fn from_trace(trace: &Trace) -> Self {
        let directed = trace.is_directed();
        let mut highlight = Self {
            directed,
            vertices: HashSet::new(),
            edges: HashSet::new(),
        };

        let Some(loop_vertices) = trace.cycle_vertices() else {
            return highlight;
        };

        highlight.vertices.extend(loop_vertices.iter().copied());
        for pair in loop_vertices.windows(2) {
            highlight.insert_edge(pair[0], pair[1]);
        }
        if let (Some(&last), Some(&first)) = (loop_vertices.last(), loop_vertices.first()) {
            highlight.insert_edge(last, first);
        }

        highlight
    }

    fn none() -> Self {
        Self {
            directed: false,
            vertices: HashSet::new(),
            edges: HashSet::new(),
        }
    }

    fn insert_edge(&mut self, source: usize, target: usize) {
        self.edges.insert(self.key(source, target));
    }

    fn key(&self, source: usize, target: usize) -> (usize, usize) {
        if self.directed {
            (source, target)
        } else {
            (source.min(target), source.max(target))
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        self.vertices.contains(&vertex)
    }

    fn has_edge(&self, source: usize, target: usize) -> bool {
        self.edges.contains(&self.key(source, target))
    }
}

/// Text renderer for graphs with the detected cycle highlighted
pub struct GraphRenderer {
    highlight_cycles: bool,
}

impl GraphRenderer {
    pub fn new(highlight_cycles: bool) -> Self {
        Self { highlight_cycles }
    }

    fn highlight(&self, trace: &Trace) -> CycleHighlight {
        if self.highlight_cycles {
            CycleHighlight::from_trace(trace)
        } else {
            CycleHighlight::none()
        }
    }

    pub fn render_ascii(&self, graph: &Graph, trace: &Trace, output: &mut dyn Write) -> Result<()> {
        if graph.vertex_count() == 0 {
            writeln_out!(output, "No vertices to visualize")?;
            return Ok(());
        }

        let highlight = self.highlight(trace);
        let arrow = if graph.is_directed() { "→" } else { "─" };

        writeln_out!(
            output,
            "\n📊 {} graph, {} vertices\n",
            if graph.is_directed() {
                "Directed"
            } else {
                "Undirected"
            },
            graph.vertex_count()
        )?;

        for (vertex, neighbors) in graph.adjacency_list().iter().enumerate() {
            if highlight.has_vertex(vertex) {
                writeln_out!(output, "┌─────────────────────────────────────┐")?;
                writeln_out!(output, "│ {} ⚠️  IN CYCLE", vertex)?;
                writeln_out!(output, "└─────────────────────────────────────┘")?;
            } else {
                writeln_out!(output, "{}", vertex)?;
            }

            if neighbors.is_empty() {
                writeln_out!(output, "  └── (no neighbors)")?;
            }

            for (i, &neighbor) in neighbors.iter().enumerate() {
                let prefix = if i == neighbors.len() - 1 {
                    "└──"
                } else {
                    "├──"
                };
                let marker = if highlight.has_edge(vertex, neighbor) {
                    " ⚠️  [CYCLE]"
                } else {
                    ""
                };
                writeln_out!(output, "  {} {} {}{}", prefix, arrow, neighbor, marker)?;
            }

            writeln_out!(output)?;
        }

        if !highlight.vertices.is_empty() {
            writeln_out!(output, "⚠️  = Part of the detected cycle")?;
        }

        Ok(())
    }

    pub fn render_mermaid(
        &self,
        graph: &Graph,
        trace: &Trace,
        output: &mut dyn Write,
    ) -> Result<()> {
        let highlight = self.highlight(trace);

        writeln_out!(output, "graph LR")?;

        for vertex in 0..graph.vertex_count() {
            let node_id = mermaid_id(vertex);
            if highlight.has_vertex(vertex) {
                writeln_out!(output, "    {}((\"{}\"))", node_id, vertex)?;
                writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{},stroke-width:3px",
                    node_id,
                    colors::CYCLE_NODE_FILL,
                    colors::CYCLE_NODE_STROKE
                )?;
            } else {
                writeln_out!(output, "    {}([\"{}\"])", node_id, vertex)?;
                writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{},stroke-width:2px",
                    node_id,
                    colors::NORMAL_NODE_FILL,
                    colors::NORMAL_NODE_STROKE
                )?;
            }
        }

        writeln_out!(output)?;

        let arrow = if graph.is_directed() { "-->" } else { "---" };
        for (link_index, (source, target)) in graph.edges().into_iter().enumerate() {
            writeln_out!(
                output,
                "    {} {} {}",
                mermaid_id(source),
                arrow,
                mermaid_id(target)
            )?;

            let (color, width) = if highlight.has_edge(source, target) {
                (colors::CYCLE_EDGE, 3)
            } else {
                (colors::NORMAL_EDGE, 2)
            };
            writeln_out!(
                output,
                "    linkStyle {} stroke:{},stroke-width:{}px",
                link_index,
                color,
                width
            )?;
        }

        Ok(())
    }

    pub fn render_dot(&self, graph: &Graph, trace: &Trace, output: &mut dyn Write) -> Result<()> {
        let highlight = self.highlight(trace);
        let (keyword, connector) = if graph.is_directed() {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };

        writeln_out!(output, "{} cycle_lens {{", keyword)?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(
            output,
            "    node [shape=circle, style=filled, fontname=\"Helvetica\"];"
        )?;
        writeln_out!(output)?;

        for vertex in 0..graph.vertex_count() {
            if highlight.has_vertex(vertex) {
                writeln_out!(
                    output,
                    "    \"{}\" [fillcolor=\"{}\", color=\"{}\", penwidth=3];",
                    vertex,
                    colors::CYCLE_NODE_FILL,
                    colors::CYCLE_NODE_STROKE
                )?;
            } else {
                writeln_out!(
                    output,
                    "    \"{}\" [fillcolor=\"{}\", color=\"{}\"];",
                    vertex,
                    colors::NORMAL_NODE_FILL,
                    colors::NORMAL_NODE_STROKE
                )?;
            }
        }

        writeln_out!(output)?;

        for (source, target) in graph.edges() {
            if highlight.has_edge(source, target) {
                writeln_out!(
                    output,
                    "    \"{}\" {} \"{}\" [color=\"{}\", penwidth=3];",
                    source,
                    connector,
                    target,
                    colors::CYCLE_EDGE
                )?;
            } else {
                writeln_out!(
                    output,
                    "    \"{}\" {} \"{}\" [color=\"{}\"];",
                    source,
                    connector,
                    target,
                    colors::NORMAL_EDGE
                )?;
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }
}

fn mermaid_id(vertex: usize) -> String {
    format!("v{vertex}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(closed: bool) -> Graph {
        let mut graph = Graph::new(4, false);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(2, 3).unwrap();
        if closed {
            graph.add_edge(3, 0).unwrap();
        }
        graph
    }

    fn render(
        graph: &Graph,
        highlight: bool,
        f: impl Fn(&GraphRenderer, &Graph, &Trace, &mut Vec<u8>) -> Result<()>,
    ) -> String {
        let renderer = GraphRenderer::new(highlight);
        let trace = graph.record_trace();
        let mut out = Vec::new();
        f(&renderer, graph, &trace, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_dot_undirected_uses_graph_keyword() {
        let output = render(&square(false), true, |r, g, t, o| r.render_dot(g, t, o));

        assert!(output.starts_with("graph cycle_lens {"));
        assert!(output.contains("\"0\" -- \"1\""));
        assert!(!output.contains(colors::CYCLE_EDGE));
    }

    #[test]
    fn test_dot_highlights_cycle_edges() {
        let output = render(&square(true), true, |r, g, t, o| r.render_dot(g, t, o));

        // Every edge of the square belongs to the loop
        assert_eq!(output.matches(colors::CYCLE_EDGE).count(), 4);
        assert_eq!(output.matches(colors::CYCLE_NODE_FILL).count(), 4);
    }

    #[test]
    fn test_highlight_can_be_disabled() {
        let output = render(&square(true), false, |r, g, t, o| r.render_dot(g, t, o));
        assert!(!output.contains(colors::CYCLE_EDGE));
    }

    #[test]
    fn test_mermaid_directed_arrows() {
        let mut graph = Graph::new(2, true);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 0).unwrap();

        let output = render(&graph, true, |r, g, t, o| r.render_mermaid(g, t, o));

        assert!(output.starts_with("graph LR"));
        assert!(output.contains("v0 --> v1"));
        assert!(output.contains("v1 --> v0"));
        assert!(output.contains("v0((\"0\"))"));
        assert!(output.contains("linkStyle 1 stroke:#FF6500"));
    }

    #[test]
    fn test_ascii_marks_cycle() {
        let output = render(&square(true), true, |r, g, t, o| r.render_ascii(g, t, o));

        assert!(output.contains("Undirected graph, 4 vertices"));
        assert!(output.contains("IN CYCLE"));
        assert!(output.contains("[CYCLE]"));
    }

    #[test]
    fn test_ascii_empty_graph() {
        let output = render(&Graph::new(0, true), true, |r, g, t, o| r.render_ascii(g, t, o));
        assert!(output.contains("No vertices to visualize"));
    }
}
