//! # Cycle Detection Module
//!
//! This module decides whether a [`Graph`](crate::graph::Graph) contains a
//! cycle, stopping at the first one it finds.
//!
//! ## Algorithms
//!
//! - **Undirected**: union-find over the edges. Vertices are scanned in id
//!   order and each edge is handled from its lower endpoint only; an edge
//!   whose endpoints already share a representative closes a cycle.
//! - **Directed**: depth-first search with an on-path marker. An edge to a
//!   vertex that is still on the current path is a back edge. The walk keeps
//!   an explicit `(vertex, cursor)` frame stack instead of recursing.
//!
//! Self-loops are cycles in both modes.
//!
//! ## Key Components
//!
//! - **CycleDetector**: returns the boolean verdict
//! - **TraceRecorder**: runs the same traversal and records every step as a
//!   [`TraceEvent`](crate::trace::TraceEvent)
//!
//! ## Example
//!
//! ```
//! use cycle_lens::detector::{CycleDetector, TraceRecorder};
//! use cycle_lens::graph::Graph;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = Graph::new(3, true);
//! graph.add_edge(0, 1)?;
//! graph.add_edge(1, 2)?;
//! assert!(!CycleDetector::new(&graph).detect());
//!
//! graph.add_edge(2, 0)?;
//! assert!(CycleDetector::new(&graph).detect());
//!
//! let trace = TraceRecorder::new(&graph).record();
//! assert_eq!(trace.cycle_edge(), Some((2, 0)));
//! # Ok(())
//! # }
//! ```

mod detector_impl;

pub use detector_impl::*;
