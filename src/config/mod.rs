//! # Configuration Module
//!
//! Typed configuration for every cycle-lens command. Each command has its own
//! config module with a builder for easy construction.
//!
//! ## Command Configurations
//!
//! - **InspectConfig**: Configuration for the `inspect` command
//! - **TraceConfig**: Configuration for the `trace` command
//! - **SpectacleConfig**: Configuration for the `spectacle` command
//!
//! ## Example
//!
//! ```
//! use cycle_lens::cli::{GraphFormat, OutputFormat};
//! use cycle_lens::common::ConfigBuilder;
//! use cycle_lens::config::{InspectConfig, SpectacleConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let inspect = InspectConfig::builder()
//!     .with_paths(vec!["graphs".into()])
//!     .with_format(OutputFormat::Human)
//!     .with_strict(false)
//!     .with_show_trace(false)
//!     .with_error_on_cycles(true)
//!     .build()?;
//! assert!(inspect.error_on_cycles);
//!
//! // Leaving out a field is a configuration error
//! let incomplete = SpectacleConfig::builder()
//!     .with_file("square.toml".into())
//!     .with_format(GraphFormat::Dot)
//!     .build();
//! assert!(incomplete.is_err());
//! # Ok(())
//! # }
//! ```

pub mod inspect;
pub mod spectacle;
pub mod trace;

pub use inspect::InspectConfig;
pub use spectacle::SpectacleConfig;
pub use trace::TraceConfig;
