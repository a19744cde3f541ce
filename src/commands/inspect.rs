//! Inspect command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::InspectConfig;
use crate::error::CycleLensError;

impl FromCommand for InspectConfig {
    fn from_command(command: Commands) -> Result<Self, CycleLensError> {
        match command {
            Commands::Inspect {
                common,
                format,
                show_trace,
                error_on_cycles,
            } => InspectConfig::builder()
                .with_paths(common.get_paths())
                .with_format(format.format)
                .with_strict(common.strict)
                .with_show_trace(show_trace)
                .with_error_on_cycles(error_on_cycles)
                .build(),
            _ => Err(CycleLensError::ConfigurationError {
                message: "Invalid command type for InspectConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(InspectConfig);

/// Execute the inspect command for detecting cycles across graph files
pub fn execute_inspect_command(command: Commands) -> Result<()> {
    let config = InspectConfig::from_command(command)
        .wrap_err("Failed to parse inspect command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::inspect::InspectExecutor;
    InspectExecutor::execute(config)
}
