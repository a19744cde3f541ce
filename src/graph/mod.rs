//! # Graph Storage and Rendering Module
//!
//! This module owns the mutable graph the detectors run on, plus the helpers
//! collaborators use to display it.
//!
//! ## Components
//!
//! ### Storage
//! - **Graph**: vertex count, direction mode and ordered neighbor lists, with
//!   validated mutation (add/remove edge, reconfigure, delete vertex with
//!   renumbering)
//! - **connected_components**: union-find grouping of vertices, ignoring
//!   direction
//! - **Export**: conversion into petgraph `DiGraph` / `UnGraph`
//!
//! ### Rendering
//! - **GraphRenderer**: renders ASCII, Mermaid and DOT output with the first
//!   detected cycle highlighted
//!
//! ## Example
//!
//! ```
//! use cycle_lens::graph::{Graph, GraphRenderer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = Graph::new(3, false);
//! graph.add_edge(0, 1)?;
//! graph.add_edge(1, 2)?;
//! graph.add_edge(2, 0)?;
//!
//! let trace = graph.record_trace();
//! let mut output = Vec::new();
//! GraphRenderer::new(true).render_dot(&graph, &trace, &mut output)?;
//!
//! let dot_output = String::from_utf8(output)?;
//! assert!(dot_output.starts_with("graph cycle_lens"));
//! # Ok(())
//! # }
//! ```

mod components;
mod export;
mod renderer;
mod store;

pub use components::connected_components;
pub use renderer::GraphRenderer;
pub use store::Graph;
