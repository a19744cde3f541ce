//! Graph description files
//!
//! A graph file gives the initial configuration, an edge list, and an optional
//! list of mutation steps replayed in order:
//!
//! ```toml
//! name = "square"
//! vertices = 4
//! directed = false
//! edges = [[0, 1], [1, 2], [2, 3]]
//!
//! [[steps]]
//! op = "add-edge"
//! edge = [3, 0]
//! ```
//!
//! Files ending in `.json` are read as JSON with the same shape. Operations the
//! graph rejects are collected instead of aborting the load.

use std::fmt;
use std::path::Path;

use miette::{IntoDiagnostic, NamedSource, Result, SourceSpan};
use serde::{Deserialize, Serialize};

use crate::error::{CycleLensError, GraphError, GraphFileParseError};
use crate::graph::Graph;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphFile {
    pub name: Option<String>,
    pub vertices: i64,
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub edges: Vec<[i64; 2]>,
    #[serde(default)]
    pub steps: Vec<GraphStep>,
}

/// A mutation applied after the initial edge list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum GraphStep {
    AddEdge {
        edge: [i64; 2],
    },
    RemoveEdge {
        edge: [i64; 2],
    },
    DeleteVertex {
        vertex: i64,
    },
    ClearEdges,
    /// Reset the graph; `directed` keeps the current mode when omitted
    Configure {
        vertices: i64,
        directed: Option<bool>,
    },
}

impl fmt::Display for GraphStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphStep::AddEdge { edge: [from, to] } => write!(f, "add-edge {from} -> {to}"),
            GraphStep::RemoveEdge { edge: [from, to] } => {
                write!(f, "remove-edge {from} -> {to}")
            }
            GraphStep::DeleteVertex { vertex } => write!(f, "delete-vertex {vertex}"),
            GraphStep::ClearEdges => write!(f, "clear-edges"),
            GraphStep::Configure { vertices, directed } => match directed {
                Some(directed) => write!(f, "configure {vertices} (directed: {directed})"),
                None => write!(f, "configure {vertices}"),
            },
        }
    }
}

/// An operation the graph refused while loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub operation: String,
    pub error: GraphError,
}

/// A graph built from a file, with every refused operation
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    pub name: String,
    pub graph: Graph,
    pub rejections: Vec<Rejection>,
}

impl LoadedGraph {
    pub fn is_clean(&self) -> bool {
        self.rejections.is_empty()
    }
}

impl GraphFile {
    /// Read and parse a graph file, choosing JSON or TOML by extension
    pub fn parse_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CycleLensError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })
            .into_diagnostic()?;

        let file = path.display().to_string();
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            Self::parse_json(&content, &file)
        } else {
            Self::parse_toml(&content, &file)
        };

        // Keep the labelled span by converting the diagnostic itself
        parsed.map_err(miette::Report::new)
    }

    pub fn parse_toml(content: &str, file: &str) -> Result<Self, CycleLensError> {
        toml::from_str(content).map_err(|e| {
            // Try to extract span information from the error
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            CycleLensError::GraphFileParseError(Box::new(GraphFileParseError {
                file: file.to_string(),
                source_code: NamedSource::new(file, content.to_string()),
                span,
                source: e,
            }))
        })
    }

    pub fn parse_json(content: &str, file: &str) -> Result<Self, CycleLensError> {
        serde_json::from_str(content).map_err(|e| CycleLensError::JsonGraphError {
            file: file.to_string(),
            source: e,
        })
    }

    /// Build the graph, replaying the edge list and then every step.
    ///
    /// `fallback_name` is used when the file does not name the graph.
    pub fn build(&self, fallback_name: &str) -> LoadedGraph {
        let mut graph = Graph::default();
        let mut rejections = Vec::new();

        let configure = GraphStep::Configure {
            vertices: self.vertices,
            directed: Some(self.directed),
        };
        let initial_edges = self.edges.iter().map(|&edge| GraphStep::AddEdge { edge });

        for step in std::iter::once(configure)
            .chain(initial_edges)
            .chain(self.steps.iter().cloned())
        {
            if let Err(error) = apply_step(&mut graph, &step) {
                rejections.push(Rejection {
                    operation: step.to_string(),
                    error,
                });
            }
        }

        LoadedGraph {
            name: self
                .name
                .clone()
                .unwrap_or_else(|| fallback_name.to_string()),
            graph,
            rejections,
        }
    }
}

/// Apply one step to `graph`
pub fn apply_step(graph: &mut Graph, step: &GraphStep) -> Result<(), GraphError> {
    match *step {
        GraphStep::AddEdge { edge: [from, to] } => {
            let (from, to) = endpoints(graph, from, to)?;
            graph.add_edge(from, to)
        }
        GraphStep::RemoveEdge { edge: [from, to] } => {
            let (from, to) = endpoints(graph, from, to)?;
            graph.remove_edge(from, to)
        }
        GraphStep::DeleteVertex { vertex } => {
            let deleted = usize::try_from(vertex).is_ok_and(|index| graph.delete_vertex(index));
            if deleted {
                Ok(())
            } else {
                Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count: graph.vertex_count(),
                })
            }
        }
        GraphStep::ClearEdges => {
            graph.clear_edges();
            Ok(())
        }
        GraphStep::Configure { vertices, directed } => {
            let directed = directed.unwrap_or(graph.is_directed());
            graph.configure(vertices, directed)
        }
    }
}

fn endpoints(graph: &Graph, from: i64, to: i64) -> Result<(usize, usize), GraphError> {
    match (usize::try_from(from), usize::try_from(to)) {
        (Ok(from), Ok(to)) => Ok((from, to)),
        _ => Err(GraphError::EdgeOutOfRange {
            from,
            to,
            vertex_count: graph.vertex_count(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SQUARE: &str = r#"
name = "square"
vertices = 4
edges = [[0, 1], [1, 2], [2, 3]]

[[steps]]
op = "add-edge"
edge = [3, 0]
"#;

    #[test]
    fn test_parse_toml_with_steps() {
        let file = GraphFile::parse_toml(SQUARE, "square.toml").unwrap();

        assert_eq!(file.name.as_deref(), Some("square"));
        assert_eq!(file.vertices, 4);
        assert!(!file.directed);
        assert_eq!(file.edges.len(), 3);
        assert_eq!(file.steps, vec![GraphStep::AddEdge { edge: [3, 0] }]);
    }

    #[test]
    fn test_build_replays_steps() {
        let file = GraphFile::parse_toml(SQUARE, "square.toml").unwrap();
        let loaded = file.build("fallback");

        assert_eq!(loaded.name, "square");
        assert!(loaded.is_clean());
        assert_eq!(loaded.graph.edge_count(), 4);
        assert!(loaded.graph.detect_cycle());
    }

    #[test]
    fn test_parse_all_step_kinds() {
        let content = r#"
vertices = 3
directed = true

[[steps]]
op = "remove-edge"
edge = [0, 1]

[[steps]]
op = "delete-vertex"
vertex = 2

[[steps]]
op = "clear-edges"

[[steps]]
op = "configure"
vertices = 5
"#;
        let file = GraphFile::parse_toml(content, "steps.toml").unwrap();

        assert_eq!(
            file.steps,
            vec![
                GraphStep::RemoveEdge { edge: [0, 1] },
                GraphStep::DeleteVertex { vertex: 2 },
                GraphStep::ClearEdges,
                GraphStep::Configure {
                    vertices: 5,
                    directed: None
                },
            ]
        );

        let loaded = file.build("steps");
        // The removal fails because the edge never existed
        assert_eq!(loaded.rejections.len(), 1);
        assert_eq!(loaded.rejections[0].operation, "remove-edge 0 -> 1");
        assert_eq!(loaded.graph.vertex_count(), 5);
        assert!(loaded.graph.is_directed());
    }

    #[test]
    fn test_invalid_operations_are_collected() {
        let file = GraphFile {
            name: None,
            vertices: 2,
            directed: false,
            edges: vec![[0, 1], [-1, 0], [0, 2]],
            steps: vec![GraphStep::DeleteVertex { vertex: 9 }],
        };

        let loaded = file.build("pair");

        assert_eq!(loaded.name, "pair");
        assert_eq!(loaded.graph.edge_count(), 1);
        let operations: Vec<&str> = loaded
            .rejections
            .iter()
            .map(|r| r.operation.as_str())
            .collect();
        assert_eq!(
            operations,
            vec!["add-edge -1 -> 0", "add-edge 0 -> 2", "delete-vertex 9"]
        );
        assert!(matches!(
            loaded.rejections[2].error,
            GraphError::VertexOutOfRange { vertex: 9, .. }
        ));
    }

    #[test]
    fn test_negative_vertex_count_is_rejected() {
        let file = GraphFile::parse_toml("vertices = -3", "negative.toml").unwrap();
        let loaded = file.build("negative");

        assert_eq!(loaded.graph.vertex_count(), 0);
        assert_eq!(
            loaded.rejections[0].error,
            GraphError::NegativeVertexCount { count: -3 }
        );
    }

    #[test]
    fn test_oversized_vertex_count_is_rejected() {
        let file = GraphFile::parse_toml("vertices = 9223372036854775807\n", "big.toml").unwrap();
        let loaded = file.build("big");

        assert_eq!(loaded.graph.vertex_count(), 0);
        assert_eq!(loaded.rejections.len(), 1);
        assert!(matches!(
            loaded.rejections[0].error,
            GraphError::TooManyVertices {
                count: i64::MAX,
                ..
            }
        ));
    }

    #[test]
    fn test_oversized_configure_step_keeps_current_graph() {
        let content = r#"
vertices = 3
directed = true
edges = [[0, 1], [1, 2], [2, 0]]

[[steps]]
op = "configure"
vertices = 4611686018427387904
"#;
        let loaded = GraphFile::parse_toml(content, "grow.toml")
            .unwrap()
            .build("grow");

        assert_eq!(loaded.rejections.len(), 1);
        assert_eq!(loaded.graph.vertex_count(), 3);
        assert!(loaded.graph.detect_cycle());
    }

    #[test]
    fn test_parse_json() {
        let content = r#"{"vertices": 3, "directed": true, "edges": [[0, 1], [1, 2], [2, 0]],
            "steps": [{"op": "clear-edges"}]}"#;
        let file = GraphFile::parse_json(content, "cycle.json").unwrap();

        assert!(file.directed);
        assert_eq!(file.steps, vec![GraphStep::ClearEdges]);
        assert!(!file.build("cycle").graph.detect_cycle());
    }

    #[test]
    fn test_toml_syntax_error_has_span() {
        let err = GraphFile::parse_toml("vertices = = 3", "broken.toml").unwrap_err();

        match err {
            CycleLensError::GraphFileParseError(parse) => {
                assert_eq!(parse.file, "broken.toml");
                assert!(parse.span.is_some());
            }
            other => panic!("Expected GraphFileParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_vertices_is_an_error() {
        assert!(GraphFile::parse_toml("directed = true", "empty.toml").is_err());
    }
}
