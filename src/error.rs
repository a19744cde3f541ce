use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Validation failure reported by a graph mutation
///
/// These are ordinary values: every failing call leaves the graph as it was
/// (except [`NegativeVertexCount`], which resets to zero vertices) and the
/// caller recovers by supplying valid arguments.
///
/// [`NegativeVertexCount`]: GraphError::NegativeVertexCount
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex count cannot be negative (got {count})")]
    #[diagnostic(
        code(cycle_lens::negative_vertex_count),
        help("Use a vertex count of zero or more")
    )]
    NegativeVertexCount { count: i64 },

    #[error("Vertex count {count} exceeds the limit of {limit}")]
    #[diagnostic(
        code(cycle_lens::too_many_vertices),
        help("Split the graph or use at most {limit} vertices")
    )]
    TooManyVertices { count: i64, limit: usize },

    #[error("Ignored edge {from} -> {to}: endpoint outside 0..{vertex_count}")]
    #[diagnostic(
        code(cycle_lens::edge_out_of_range),
        help("Vertex ids must be smaller than the vertex count")
    )]
    EdgeOutOfRange {
        from: i64,
        to: i64,
        vertex_count: usize,
    },

    #[error("Ignored removal of non-existent edge {from} -> {to}")]
    #[diagnostic(
        code(cycle_lens::edge_not_found),
        help("Only edges that were added can be removed")
    )]
    EdgeNotFound { from: usize, to: usize },

    #[error("Ignored deletion of vertex {vertex}: outside 0..{vertex_count}")]
    #[diagnostic(
        code(cycle_lens::vertex_out_of_range),
        help("Vertex ids must be smaller than the vertex count")
    )]
    VertexOutOfRange { vertex: i64, vertex_count: usize },
}

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(cycle_lens::toml_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct GraphFileParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum CycleLensError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(cycle_lens::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    GraphFileParseError(Box<GraphFileParseError>),

    #[error("Invalid JSON graph description in '{file}'")]
    #[diagnostic(
        code(cycle_lens::json_graph_error),
        help("Graph files need `vertices`, and optionally `directed`, `edges` and `steps`")
    )]
    JsonGraphError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Graph '{file}' was rejected: {message}")]
    #[diagnostic(
        code(cycle_lens::invalid_graph),
        help("Fix the listed operations or drop --strict to only warn about them")
    )]
    InvalidGraph { file: String, message: String },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(cycle_lens::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(cycle_lens::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(cycle_lens::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(cycle_lens::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
