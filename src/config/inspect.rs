//! Inspect command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::missing_field;
use crate::error::CycleLensError;

/// Configuration for the inspect command
///
/// Controls which graph files are analyzed and how the results are reported.
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// Files, directories or glob patterns to search for graph files
    pub paths: Vec<PathBuf>,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether load failures and refused operations abort the run
    pub strict: bool,
    /// Include the full trace of every graph in the report
    pub show_trace: bool,
    /// Whether to exit with error code if cycles are found
    pub error_on_cycles: bool,
}

impl InspectConfig {
    pub fn builder() -> InspectConfigBuilder {
        InspectConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct InspectConfigBuilder {
    paths: Option<Vec<PathBuf>>,
    format: Option<OutputFormat>,
    strict: Option<bool>,
    show_trace: Option<bool>,
    error_on_cycles: Option<bool>,
}

impl InspectConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = Some(paths);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = Some(strict);
        self
    }

    pub fn with_show_trace(mut self, show_trace: bool) -> Self {
        self.show_trace = Some(show_trace);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for InspectConfigBuilder {
    type Config = InspectConfig;

    fn build(self) -> Result<Self::Config, CycleLensError> {
        Ok(InspectConfig {
            paths: self.paths.ok_or_else(|| missing_field("paths"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            strict: self.strict.ok_or_else(|| missing_field("strict"))?,
            show_trace: self.show_trace.ok_or_else(|| missing_field("show_trace"))?,
            error_on_cycles: self
                .error_on_cycles
                .ok_or_else(|| missing_field("error_on_cycles"))?,
        })
    }
}
