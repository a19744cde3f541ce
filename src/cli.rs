use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "cycle-lens",
    about = "🔍 Detect and explain cycles in directed and undirected graphs",
    long_about = "cycle-lens loads graph description files (TOML or JSON), decides whether each \
                  graph contains a cycle, and shows the step-by-step trace of how the cycle was \
                  found. Directed graphs are searched depth-first; undirected graphs are checked \
                  with a union-find forest.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look through every graph file for cycles
    ///
    /// Loads each graph, reports whether it contains a cycle, the loop that
    /// was found, its connected components and any refused operations.
    #[command(
        long_about = "Analyze graph description files for cycles. Paths may be files, \
                      directories (searched recursively for .toml and .json files) or glob \
                      patterns. Files are analyzed in parallel. Operations a graph refuses, such \
                      as edges with out-of-range endpoints, are reported as warnings unless \
                      --strict turns them into errors."
    )]
    Inspect {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Include the full detection trace of every graph
        #[arg(long, env = "CYCLE_LENS_SHOW_TRACE")]
        show_trace: bool,

        /// Exit with error code if cycles found
        #[arg(long, env = "CYCLE_LENS_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },

    /// Replay the detection of a single graph step by step
    ///
    /// Prints every vertex visit, edge exploration, set merge and backtrack
    /// in the order the detector performed them.
    #[command(
        long_about = "Record and print the trace of one detection run. Directed graphs show \
                      vertex visits, edge explorations and backtracks of the depth-first \
                      search; undirected graphs show edge explorations and set merges. The trace \
                      ends with the edge that closed the first cycle, if any."
    )]
    Trace {
        /// Graph file to trace
        #[arg(value_name = "FILE", env = "CYCLE_LENS_FILE")]
        file: PathBuf,

        /// Treat refused operations as errors
        #[arg(long, env = "CYCLE_LENS_STRICT")]
        strict: bool,

        #[command(flatten)]
        format: FormatArgs,

        /// Maximum number of events to display (shows all by default)
        #[arg(long, env = "CYCLE_LENS_MAX_EVENTS")]
        max_events: Option<usize>,
    },

    /// Draw a graph with the detected cycle highlighted
    ///
    /// Renders ASCII for the terminal, or Mermaid and Graphviz DOT for
    /// documentation.
    #[command(
        long_about = "Render a graph in ASCII, Mermaid or Graphviz DOT format. Vertices and \
                      edges of the first cycle found are highlighted unless --no-highlight is \
                      given."
    )]
    Spectacle {
        /// Graph file to render
        #[arg(value_name = "FILE", env = "CYCLE_LENS_FILE")]
        file: PathBuf,

        /// Treat refused operations as errors
        #[arg(long, env = "CYCLE_LENS_STRICT")]
        strict: bool,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_GRAPH_FORMAT,
            env = "CYCLE_LENS_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "CYCLE_LENS_OUTPUT")]
        output: Option<PathBuf>,

        /// Do not highlight the detected cycle
        #[arg(long, env = "CYCLE_LENS_NO_HIGHLIGHT")]
        no_highlight: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum GraphFormat {
    Ascii,
    Mermaid,
    Dot,
}
