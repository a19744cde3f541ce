//! Command executors that handle the actual logic for each command

pub mod inspect;
pub mod spectacle;
pub mod trace;

use std::path::Path;

use console::style;
use miette::{Result, WrapErr};

use crate::error::CycleLensError;
use crate::graph_file::{GraphFile, LoadedGraph};

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Load a single graph file for the single-graph commands.
///
/// Refused operations are printed as warnings, or fail the load in strict
/// mode.
fn load_graph(path: &Path, strict: bool) -> Result<LoadedGraph> {
    let file = GraphFile::parse_file(path)
        .wrap_err_with(|| format!("Failed to load graph file '{}'", path.display()))?;

    let fallback_name = path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    let loaded = file.build(&fallback_name);

    for rejection in &loaded.rejections {
        eprintln!(
            "{} {}: {}",
            style("⚠").yellow(),
            style(&rejection.operation).bold(),
            rejection.error
        );
    }

    if strict && !loaded.is_clean() {
        return Err(CycleLensError::InvalidGraph {
            file: path.display().to_string(),
            message: format!("{} refused operations", loaded.rejections.len()),
        }
        .into());
    }

    Ok(loaded)
}
