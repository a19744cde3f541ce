//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::analyzer::GraphAnalysis;
use crate::error::CycleLensError;
use crate::trace::{Trace, TraceEvent};
use crate::utils::string::{pluralize, vertex_path};

pub struct HumanReportGenerator {
    max_events: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_events: Option<usize>) -> Self {
        Self { max_events }
    }

    fn write_events(&self, output: &mut String, trace: &Trace) -> Result<(), CycleLensError> {
        let limit = self.max_events.unwrap_or(trace.len());

        for (i, event) in trace.events().iter().take(limit).enumerate() {
            let line = format!("{event}");
            let line = match event {
                TraceEvent::CycleEdge { .. } | TraceEvent::CycleVertex { .. } => {
                    style(line).red().bold().to_string()
                }
                TraceEvent::UnionMerge { .. } => style(line).cyan().to_string(),
                TraceEvent::BacktrackVertex { .. } => style(line).dim().to_string(),
                _ => line,
            };
            writeln!(output, "  {:>4}. {}", style(i + 1).dim(), line)?;
        }

        if limit < trace.len() {
            let hidden = trace.len() - limit;
            writeln!(
                output,
                "\n{} {} more {} hidden. Use --max-events to see more.",
                style("ℹ️").blue(),
                style(hidden).yellow(),
                pluralize("event", hidden)
            )?;
        }

        Ok(())
    }

    fn write_analysis(
        &self,
        output: &mut String,
        analysis: &GraphAnalysis,
    ) -> Result<(), CycleLensError> {
        writeln!(
            output,
            "{} {} ({}, {} vertices, {} {})",
            style("🔎").cyan(),
            style(&analysis.name).bold(),
            if analysis.directed {
                "directed"
            } else {
                "undirected"
            },
            analysis.vertex_count,
            analysis.edge_count,
            pluralize("edge", analysis.edge_count)
        )?;

        if let Some(path) = &analysis.path {
            writeln!(output, "  {} {}", style("📄").dim(), style(path.display()).dim())?;
        }

        if !analysis.rejections.is_empty() {
            writeln!(
                output,
                "  {} {} refused {}:",
                style("⚠").yellow(),
                analysis.rejections.len(),
                pluralize("operation", analysis.rejections.len())
            )?;
            for rejection in &analysis.rejections {
                writeln!(output, "    {} {}", style("•").dim(), rejection)?;
            }
        }

        match &analysis.cycle_vertices {
            Some(vertices) if analysis.has_cycle => {
                let mut closed = vertices.clone();
                if let Some(&first) = vertices.first() {
                    closed.push(first);
                }
                writeln!(
                    output,
                    "  {} Cycle found: {}",
                    style("❌").red().bold(),
                    style(vertex_path(&closed)).red()
                )?;
            }
            _ if analysis.has_cycle => {
                writeln!(output, "  {} Cycle found", style("❌").red().bold())?;
            }
            _ => {
                writeln!(output, "  {} No cycle", style("✅").green())?;
            }
        }

        if let Some((source, target)) = analysis.cycle_edge {
            writeln!(
                output,
                "  {} Closing edge: {} {} {}",
                style("🔗").cyan(),
                source,
                if analysis.directed { "→" } else { "─" },
                target
            )?;
        }

        let components: Vec<String> = analysis
            .components
            .iter()
            .map(|members| {
                let ids: Vec<String> = members.iter().map(usize::to_string).collect();
                format!("{{{}}}", ids.join(", "))
            })
            .collect();
        writeln!(
            output,
            "  {} {}: {}",
            style("🧩").blue(),
            pluralize("Component", components.len()),
            if components.is_empty() {
                "none".to_string()
            } else {
                components.join(" ")
            }
        )?;

        if let Some(trace) = &analysis.trace {
            writeln!(output, "\n  {} Trace:", style("👣").dim())?;
            self.write_events(output, trace)?;
        }

        Ok(())
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, analyses: &[GraphAnalysis]) -> Result<String, CycleLensError> {
        let mut output = String::new();

        if analyses.is_empty() {
            writeln!(output, "\n{} No graphs to analyze", style("ℹ️").blue())?;
            return Ok(output);
        }

        for analysis in analyses {
            writeln!(output)?;
            self.write_analysis(&mut output, analysis)?;
        }

        let with_cycles = analyses.iter().filter(|a| a.has_cycle).count();
        if with_cycles == 0 {
            write!(
                output,
                "\n{} No cycles detected in {} {}.\n",
                style("✅").green().bold(),
                analyses.len(),
                pluralize("graph", analyses.len())
            )?;
        } else {
            write!(
                output,
                "\n{} Found cycles in {} of {} {}.\n",
                style("❌").red().bold(),
                style(with_cycles).red().bold(),
                analyses.len(),
                pluralize("graph", analyses.len())
            )?;
            writeln!(
                output,
                "{} Removing any one edge of a reported loop breaks that cycle; run `cycle-lens \
                 trace` to see how it was found.",
                style("💡").yellow()
            )?;
        }

        Ok(output)
    }

    fn generate_trace_report(&self, name: &str, trace: &Trace) -> Result<String, CycleLensError> {
        let mut output = String::new();

        writeln!(
            output,
            "\n{} Trace of {} ({}, {} {})\n",
            style("👣").cyan(),
            style(name).bold(),
            if trace.is_directed() {
                "directed"
            } else {
                "undirected"
            },
            trace.len(),
            pluralize("event", trace.len())
        )?;

        if trace.is_empty() {
            writeln!(output, "  (nothing to explore)")?;
        } else {
            self.write_events(&mut output, trace)?;
        }

        writeln!(output)?;
        match trace.cycle_vertices() {
            Some(mut vertices) => {
                if let Some(&first) = vertices.first() {
                    vertices.push(first);
                }
                writeln!(
                    output,
                    "{} Cycle found: {}",
                    style("❌").red().bold(),
                    style(vertex_path(&vertices)).red()
                )?;
            }
            None if trace.has_cycle() => {
                writeln!(output, "{} Cycle found", style("❌").red().bold())?;
            }
            None => {
                writeln!(output, "{} No cycle", style("✅").green().bold())?;
            }
        }

        Ok(output)
    }
}
