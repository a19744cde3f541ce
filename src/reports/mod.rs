//! Report generation modules for different output formats
//!
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::analyzer::GraphAnalysis;
use crate::error::CycleLensError;
use crate::trace::Trace;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from the analyses of one or more graphs
    fn generate_report(&self, analyses: &[GraphAnalysis]) -> Result<String, CycleLensError>;

    /// Generate a step-by-step report of a single detection run
    fn generate_trace_report(&self, name: &str, trace: &Trace) -> Result<String, CycleLensError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
