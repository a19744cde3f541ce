//! Trace command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::TraceConfig;
use crate::error::CycleLensError;

impl FromCommand for TraceConfig {
    fn from_command(command: Commands) -> Result<Self, CycleLensError> {
        match command {
            Commands::Trace {
                file,
                strict,
                format,
                max_events,
            } => TraceConfig::builder()
                .with_file(file)
                .with_format(format.format)
                .with_strict(strict)
                .with_max_events(max_events)
                .build(),
            _ => Err(CycleLensError::ConfigurationError {
                message: "Invalid command type for TraceConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(TraceConfig);

/// Execute the trace command for replaying one detection run
pub fn execute_trace_command(command: Commands) -> Result<()> {
    let config = TraceConfig::from_command(command)
        .wrap_err("Failed to parse trace command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::trace::TraceExecutor;
    TraceExecutor::execute(config)
}
