//! Trace command executor

use console::style;
use miette::{Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::TraceConfig;
use crate::executors::{CommandExecutor, load_graph};
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct TraceExecutor;

impl CommandExecutor for TraceExecutor {
    type Config = TraceConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let loaded = load_graph(&config.file, config.strict)?;

        eprintln!(
            "{} Tracing {} ({} vertices)...",
            style("👣").cyan(),
            style(&loaded.name).bold(),
            loaded.graph.vertex_count()
        );

        let trace = loaded.graph.record_trace();

        let report = match config.format {
            OutputFormat::Human => HumanReportGenerator::new(config.max_events)
                .generate_trace_report(&loaded.name, &trace),
            OutputFormat::Json => JsonReportGenerator::new()
                .with_max_events(config.max_events)
                .generate_trace_report(&loaded.name, &trace),
        }
        .wrap_err("Failed to generate trace report")?;

        print!("{report}");

        Ok(())
    }
}
