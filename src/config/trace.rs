//! Trace command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::missing_field;
use crate::error::CycleLensError;

#[derive(Debug, Clone)]
pub struct TraceConfig {
    pub file: PathBuf,
    pub format: OutputFormat,
    pub strict: bool,
    /// Maximum number of events to display (None = all)
    pub max_events: Option<usize>,
}

impl TraceConfig {
    pub fn builder() -> TraceConfigBuilder {
        TraceConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct TraceConfigBuilder {
    file: Option<PathBuf>,
    format: Option<OutputFormat>,
    strict: Option<bool>,
    max_events: Option<Option<usize>>,
}

impl TraceConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.file = Some(file);
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

    pub fn with_max_events(mut self, max_events: Option<usize>) -> Self {
        self.max_events = Some(max_events);
        self
    }
}

impl crate::common::ConfigBuilder for TraceConfigBuilder {
    type Config = TraceConfig;

    fn build(self) -> Result<Self::Config, CycleLensError> {
        Ok(TraceConfig {
            file: self.file.ok_or_else(|| missing_field("file"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            strict: self.strict.ok_or_else(|| missing_field("strict"))?,
            max_events: self.max_events.ok_or_else(|| missing_field("max_events"))?,
        })
    }
}
