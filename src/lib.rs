//! # Cycle Lens - Detect and Explain Cycles in Graphs
//!
//! Cycle Lens keeps a mutable graph over vertices `0..n`, directed or
//! undirected, and answers one question about it: does it contain a cycle?
//! Directed graphs are searched depth-first with an explicit stack; undirected
//! graphs are checked with a union-find forest. Every verdict can also be
//! replayed as a step-by-step [`trace::Trace`] for teaching and
//! visualization.
//!
//! ## Main Components
//!
//! - **Graph**: vertex count, direction mode and ordered adjacency lists with
//!   validated mutation
//! - **DisjointSet**: union-find with path compression and union by rank
//! - **Detector**: the fast verdict ([`detector::CycleDetector`]) and the
//!   instrumented run ([`detector::TraceRecorder`])
//! - **Graph files / Analyzer / Reports**: load TOML or JSON graph
//!   descriptions and report on them
//!
//! ## Usage
//!
//! ### Detecting a cycle
//!
//! ```
//! use cycle_lens::graph::Graph;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = Graph::new(3, true);
//! graph.add_edge(0, 1)?;
//! graph.add_edge(1, 2)?;
//! assert!(!graph.detect_cycle());
//!
//! graph.add_edge(2, 0)?;
//! assert!(graph.detect_cycle());
//!
//! // Invalid mutations are reported and leave the graph untouched
//! assert!(graph.add_edge(0, 7).is_err());
//! assert!(graph.last_error().is_some());
//! assert_eq!(graph.edge_count(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! ### Replaying the detection
//!
//! ```
//! use cycle_lens::graph::Graph;
//! use cycle_lens::trace::TraceEvent;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = Graph::new(3, false);
//! graph.add_edge(0, 1)?;
//! graph.add_edge(1, 2)?;
//! graph.add_edge(2, 0)?;
//!
//! let trace = graph.record_trace();
//! assert_eq!(
//!     trace.events()[..2],
//!     [
//!         TraceEvent::TraverseEdge { source: 0, target: 1 },
//!         TraceEvent::UnionMerge { source: 0, target: 1 },
//!     ]
//! );
//! assert_eq!(trace.cycle_edge(), Some((1, 2)));
//! assert_eq!(trace.cycle_vertices(), Some(vec![1, 0, 2]));
//! # Ok(())
//! # }
//! ```
//!
//! ### Analyzing graph files
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use cycle_lens::analyzer::GraphAnalyzer;
//! use cycle_lens::reports::{HumanReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! let analyses = GraphAnalyzer::new()
//!     .with_strict(true)
//!     .analyze_files(&[PathBuf::from("graphs/square.toml")], None)?;
//!
//! println!("{}", HumanReportGenerator::new(None).generate_report(&analyses)?);
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod detector;
pub mod discovery;
pub mod disjoint_set;
pub mod error;
pub mod executors;
pub mod graph;
pub mod graph_file;
pub mod reports;
pub mod trace;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
