//! JSON format report generation

use serde_json::{Value, json};

use super::ReportGenerator;
use crate::analyzer::GraphAnalysis;
use crate::error::CycleLensError;
use crate::trace::Trace;

#[derive(Default)]
pub struct JsonReportGenerator {
    max_events: Option<usize>,
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit how many trace events are written
    pub fn with_max_events(mut self, max_events: Option<usize>) -> Self {
        self.max_events = max_events;
        self
    }

    fn events(&self, trace: &Trace) -> Result<Value, CycleLensError> {
        let limit = self.max_events.unwrap_or(trace.len());
        let shown = &trace.events()[..limit.min(trace.len())];
        Ok(serde_json::to_value(shown)?)
    }

    fn analysis(&self, analysis: &GraphAnalysis) -> Result<Value, CycleLensError> {
        let mut report = json!({
            "name": analysis.name,
            "path": analysis.path.as_ref().map(|p| p.display().to_string()),
            "directed": analysis.directed,
            "vertex_count": analysis.vertex_count,
            "edge_count": analysis.edge_count,
            "has_cycle": analysis.has_cycle,
            "cycle_edge": analysis.cycle_edge.map(|(source, target)| json!({
                "source": source,
                "target": target,
            })),
            "cycle_vertices": analysis.cycle_vertices,
            "components": analysis.components,
            "adjacency": analysis.adjacency,
            "rejections": analysis.rejections,
        });

        if let Some(trace) = &analysis.trace {
            report["trace"] = self.events(trace)?;
        }

        Ok(report)
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, analyses: &[GraphAnalysis]) -> Result<String, CycleLensError> {
        let graphs = analyses
            .iter()
            .map(|analysis| self.analysis(analysis))
            .collect::<Result<Vec<_>, _>>()?;

        let report = json!({
            "has_cycles": analyses.iter().any(|a| a.has_cycle),
            "graph_count": analyses.len(),
            "cyclic_count": analyses.iter().filter(|a| a.has_cycle).count(),
            "graphs": graphs,
        });

        serde_json::to_string_pretty(&report).map_err(CycleLensError::Json)
    }

    fn generate_trace_report(&self, name: &str, trace: &Trace) -> Result<String, CycleLensError> {
        let report = json!({
            "name": name,
            "directed": trace.is_directed(),
            "event_count": trace.len(),
            "has_cycle": trace.has_cycle(),
            "cycle_vertices": trace.cycle_vertices(),
            "events": self.events(trace)?,
        });

        serde_json::to_string_pretty(&report).map_err(CycleLensError::Json)
    }
}
