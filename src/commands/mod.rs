//! Command implementations for the cycle-lens CLI
//!
//! - inspect: Look through graph files for cycles
//! - trace: Replay the detection of one graph step by step
//! - spectacle: Draw a graph with the detected cycle highlighted

pub mod inspect;
pub mod spectacle;
pub mod trace;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Inspect { .. } => inspect::execute_inspect_command(command),
        Commands::Trace { .. } => trace::execute_trace_command(command),
        Commands::Spectacle { .. } => spectacle::execute_spectacle_command(command),
    }
}
