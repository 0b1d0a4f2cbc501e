//! Configuration for taskpoints, read from `.taskpoints.toml`.
//!
//! ```toml
//! [parallel]
//! enabled = true
//! max_concurrency = 4
//! min_parallel_len = 1024
//!
//! [output]
//! format = "json"
//! ```

mod loader;
mod parallel;

pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_config, CONFIG_FILE_NAME,
};
pub use parallel::ParallelConfig;

use crate::io::OutputFormat;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskpointsConfig {
    /// Parallel execution of the aggregation stages
    #[serde(default)]
    pub parallel: ParallelConfig,

    /// Report output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report format used when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,

    /// Disable colors in terminal output
    #[serde(default)]
    pub plain: bool,
}
