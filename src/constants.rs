//! Configuration constants for cycle-lens

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames, a lens sweeping round a loop
    pub const SPINNER_FRAMES: &[&str] = &["🔍◜", "🔍◝", "🔍◞", "🔍◟", "🔁◜", "🔁◝", "🔁◞", "🔁◟"];
}

/// Output formatting configuration
pub mod output {
    /// Default report format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default rendering format for `spectacle`
    pub const DEFAULT_GRAPH_FORMAT: &str = "ascii";
}

/// Graph size limits
pub mod limits {
    /// Largest vertex count `configure` accepts
    pub const MAX_VERTICES: usize = 1 << 22;
}
