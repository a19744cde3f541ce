//! # Graph Analysis Module
//!
//! Turns graph description files into analysis results: the cycle verdict,
//! the witness loop when one exists, connected components, and every
//! operation the graph refused while loading.
//!
//! ## Key Components
//!
//! - **GraphAnalyzer**: loads files (in parallel) and analyzes them
//! - **GraphAnalysis**: the result for one graph
//!
//! ## Example
//!
//! ```
//! use cycle_lens::analyzer::GraphAnalysis;
//! use cycle_lens::graph_file::GraphFile;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = GraphFile::parse_toml(
//!     "vertices = 3\ndirected = true\nedges = [[0, 1], [1, 2], [2, 0]]",
//!     "triangle.toml",
//! )?;
//!
//! let analysis = GraphAnalysis::from_loaded(file.build("triangle"), None, false);
//! assert!(analysis.has_cycle);
//! assert_eq!(analysis.cycle_vertices, Some(vec![0, 1, 2]));
//! # Ok(())
//! # }
//! ```

mod analyzer_impl;
pub use analyzer_impl::*;
