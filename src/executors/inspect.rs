//! Inspect command executor

use console::style;
use miette::{Result, WrapErr};

use crate::analyzer::GraphAnalyzer;
use crate::cli::OutputFormat;
use crate::config::InspectConfig;
use crate::discovery::GraphDiscovery;
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct InspectExecutor;

impl CommandExecutor for InspectExecutor {
    type Config = InspectConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!("{} Inspecting graphs for cycles...\n", style("🔍").cyan());

        // Create progress reporter if we're in an interactive terminal
        let mut progress = ProgressReporter::for_terminal();

        if let Some(p) = progress.as_mut() {
            p.start_discovery();
        }
        let files = GraphDiscovery::new().discover_all(&config.paths, progress.as_ref());
        if let Some(p) = progress.as_mut() {
            p.finish_discovery(files.len());
        }

        if files.is_empty() {
            eprintln!("{} No graph files found to analyze", style("ℹ").blue());
            return Ok(());
        }

        let analyzer = GraphAnalyzer::new()
            .with_strict(config.strict)
            .with_traces(config.show_trace);

        let bar = progress.as_mut().map(|p| p.start_analysis(files.len()));
        let analyses = analyzer
            .analyze_files(&files, bar.as_ref())
            .wrap_err("Failed to analyze graph files")?;

        let with_cycles = analyses.iter().filter(|a| a.has_cycle).count();
        if let Some(p) = progress.as_mut() {
            p.finish_analysis(with_cycles);
        }

        let report = match config.format {
            OutputFormat::Human => HumanReportGenerator::new(None).generate_report(&analyses),
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&analyses),
        }
        .wrap_err("Failed to generate report")?;

        print!("{report}");

        // Exit with error code if cycles found and requested
        if config.error_on_cycles && with_cycles > 0 {
            std::process::exit(1);
        }

        Ok(())
    }
}
