//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Common arguments shared by multiple commands
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Files, directories or glob patterns to analyze (defaults to current
    /// directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Treat unreadable files and refused operations as errors
    #[arg(long, env = "CYCLE_LENS_STRICT")]
    pub strict: bool,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "CYCLE_LENS_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

impl CommonArgs {
    /// Get paths, using current directory if none provided
    pub fn get_paths(&self) -> Vec<PathBuf> {
        if self.paths.is_empty() {
            vec![std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))]
        } else {
            self.paths.clone()
        }
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::CycleLensError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::CycleLensError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::CycleLensError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Error for a builder field that was never set
pub(crate) fn missing_field(field: &str) -> crate::error::CycleLensError {
    crate::error::CycleLensError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_args_get_paths_empty() {
        let args = CommonArgs {
            paths: vec![],
            strict: false,
        };

        let paths = args.get_paths();
        assert_eq!(paths.len(), 1);
        // Should default to current directory
        assert!(paths[0].is_absolute() || paths[0] == std::path::Path::new("."));
    }

    #[test]
    fn test_common_args_get_paths_with_values() {
        let test_paths = vec![PathBuf::from("graphs"), PathBuf::from("more/*.toml")];

        let args = CommonArgs {
            paths: test_paths.clone(),
            strict: true,
        };

        assert_eq!(args.get_paths(), test_paths);
    }

    #[test]
    fn test_missing_field_message() {
        assert_eq!(
            missing_field("paths").to_string(),
            "Configuration error: Missing required field: paths"
        );
    }
}
