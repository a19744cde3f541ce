//! Spectacle command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::SpectacleConfig;
use crate::error::CycleLensError;

impl FromCommand for SpectacleConfig {
    fn from_command(command: Commands) -> Result<Self, CycleLensError> {
        match command {
            Commands::Spectacle {
                file,
                strict,
                format,
                output,
                no_highlight,
            } => SpectacleConfig::builder()
                .with_file(file)
                .with_format(format)
                .with_output(output)
                .with_strict(strict)
                .with_highlight_cycles(!no_highlight)
                .build(),
            _ => Err(CycleLensError::ConfigurationError {
                message: "Invalid command type for SpectacleConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(SpectacleConfig);

/// Execute the spectacle command for rendering a graph
pub fn execute_spectacle_command(command: Commands) -> Result<()> {
    let config = SpectacleConfig::from_command(command)
        .wrap_err("Failed to parse spectacle command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::spectacle::SpectacleExecutor;
    SpectacleExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, GraphFormat};

    #[test]
    fn test_no_highlight_flag_inverts() {
        let cli = Cli::try_parse_from([
            "cycle-lens",
            "spectacle",
            "square.toml",
            "-f",
            "mermaid",
            "--no-highlight",
            "-o",
            "square.mmd",
        ])
        .unwrap();

        let config = SpectacleConfig::try_from(cli.command).unwrap();

        assert_eq!(config.format, GraphFormat::Mermaid);
        assert!(!config.highlight_cycles);
        assert_eq!(config.output, Some(std::path::PathBuf::from("square.mmd")));
    }
}
