use std::path::{Path, PathBuf};

use console::style;
use indicatif::ProgressBar;
use miette::{Result, WrapErr};
use rayon::prelude::*;

use crate::error::CycleLensError;
use crate::graph::connected_components;
use crate::graph_file::{GraphFile, LoadedGraph};
use crate::trace::Trace;

/// Analysis result for one graph
#[derive(Debug, Clone)]
pub struct GraphAnalysis {
    pub name: String,
    pub path: Option<PathBuf>,
    pub directed: bool,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub has_cycle: bool,
    pub cycle_edge: Option<(usize, usize)>,
    /// The loop that was found, closing from the last vertex to the first
    pub cycle_vertices: Option<Vec<usize>>,
    pub components: Vec<Vec<usize>>,
    pub adjacency: Vec<Vec<usize>>,
    /// Refused operations as `operation: reason`
    pub rejections: Vec<String>,
    pub trace: Option<Trace>,
}

impl GraphAnalysis {
    /// Analyze a loaded graph.
    ///
    /// The verdict comes from the uninstrumented detector; a trace is only
    /// recorded when a witness loop is needed or `keep_trace` asks for it.
    pub fn from_loaded(loaded: LoadedGraph, path: Option<PathBuf>, keep_trace: bool) -> Self {
        let LoadedGraph {
            name,
            graph,
            rejections,
        } = loaded;

        let has_cycle = graph.detect_cycle();
        let trace = (has_cycle || keep_trace).then(|| graph.record_trace());

        let (cycle_edge, cycle_vertices) = match &trace {
            Some(trace) if has_cycle => (trace.cycle_edge(), trace.cycle_vertices()),
            _ => (None, None),
        };

        Self {
            name,
            path,
            directed: graph.is_directed(),
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            has_cycle,
            cycle_edge,
            cycle_vertices,
            components: connected_components(&graph),
            adjacency: graph.adjacency_list().to_vec(),
            rejections: rejections
                .into_iter()
                .map(|r| format!("{}: {}", r.operation, r.error))
                .collect(),
            trace: trace.filter(|_| keep_trace),
        }
    }
}

/// Loads and analyzes graph files
#[derive(Debug, Clone, Default)]
pub struct GraphAnalyzer {
    strict: bool,
    keep_traces: bool,
}

impl GraphAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat unreadable files and refused operations as errors
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Keep the full trace of every graph in its analysis
    pub fn with_traces(mut self, keep_traces: bool) -> Self {
        self.keep_traces = keep_traces;
        self
    }

    /// Load a single graph file and analyze it
    pub fn analyze_file(&self, path: &Path) -> Result<GraphAnalysis> {
        let file = GraphFile::parse_file(path)
            .wrap_err_with(|| format!("Failed to load graph file '{}'", path.display()))?;

        let fallback_name = path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let loaded = file.build(&fallback_name);

        if self.strict && !loaded.is_clean() {
            let message = loaded
                .rejections
                .iter()
                .map(|r| format!("{}: {}", r.operation, r.error))
                .collect::<Vec<_>>()
                .join("; ");
            return Err(CycleLensError::InvalidGraph {
                file: path.display().to_string(),
                message,
            }
            .into());
        }

        Ok(GraphAnalysis::from_loaded(
            loaded,
            Some(path.to_path_buf()),
            self.keep_traces,
        ))
    }

    /// Analyze many files in parallel, keeping the input order.
    ///
    /// Outside strict mode a file that fails to load is reported on stderr
    /// and left out of the results.
    pub fn analyze_files(
        &self,
        paths: &[PathBuf],
        progress: Option<&ProgressBar>,
    ) -> Result<Vec<GraphAnalysis>> {
        let results: Vec<Result<GraphAnalysis>> = paths
            .par_iter()
            .map(|path| {
                let result = self.analyze_file(path);
                if let Some(pb) = progress {
                    pb.set_message(format!("Analyzing {}", path.display()));
                    pb.inc(1);
                }
                result
            })
            .collect();

        let mut analyses = Vec::with_capacity(results.len());
        for result in results {
            match result {
                Ok(analysis) => analyses.push(analysis),
                Err(e) if self.strict => return Err(e),
                Err(e) => {
                    eprintln!("{} {:?}", style("⚠").yellow(), e);
                }
            }
        }

        Ok(analyses)
    }
}
