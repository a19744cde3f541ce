//! Spectacle command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::common::missing_field;
use crate::error::CycleLensError;

#[derive(Debug, Clone)]
pub struct SpectacleConfig {
    pub file: PathBuf,
    pub format: GraphFormat,
    pub output: Option<PathBuf>,
    pub strict: bool,
    pub highlight_cycles: bool,
}

impl SpectacleConfig {
    pub fn builder() -> SpectacleConfigBuilder {
        SpectacleConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct SpectacleConfigBuilder {
    file: Option<PathBuf>,
    format: Option<GraphFormat>,
    output: Option<Option<PathBuf>>,
    strict: Option<bool>,
    highlight_cycles: Option<bool>,
}

impl SpectacleConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = Some(strict);
        self
    }

    pub fn with_highlight_cycles(mut self, highlight_cycles: bool) -> Self {
        self.highlight_cycles = Some(highlight_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for SpectacleConfigBuilder {
    type Config = SpectacleConfig;

    fn build(self) -> Result<Self::Config, CycleLensError> {
        Ok(SpectacleConfig {
            file: self.file.ok_or_else(|| missing_field("file"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            output: self.output.ok_or_else(|| missing_field("output"))?,
            strict: self.strict.ok_or_else(|| missing_field("strict"))?,
            highlight_cycles: self
                .highlight_cycles
                .ok_or_else(|| missing_field("highlight_cycles"))?,
        })
    }
}
