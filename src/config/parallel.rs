//! Parallelism configuration for the aggregation stages.
//!
//! Controls whether the sums, grouping and weighting run on rayon's
//! thread pool or sequentially.

use serde::{Deserialize, Serialize};

/// Default value for parallel processing enabled
fn default_enabled() -> bool {
    true
}

/// Inputs shorter than this run sequentially even when parallelism is on
fn default_min_parallel_len() -> usize {
    1024
}

/// Configuration for parallel processing operations.
///
/// # Example
///
/// ```rust
/// use taskpoints::config::ParallelConfig;
///
/// let config = ParallelConfig {
///     enabled: true,
///     max_concurrency: Some(4),
///     min_parallel_len: 10_000,
/// };
/// assert!(!config.should_parallelize(3));
/// assert!(config.should_parallelize(50_000));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Enable parallel processing (default: true)
    ///
    /// When disabled, every stage runs sequentially.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Maximum worker threads (default: available cores)
    ///
    /// Applied once to rayon's global pool at startup.
    #[serde(default)]
    pub max_concurrency: Option<usize>,

    /// Minimum number of records before stages go parallel (default: 1024)
    ///
    /// Small collections are cheaper to fold on one thread.
    #[serde(default = "default_min_parallel_len")]
    pub min_parallel_len: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_concurrency: None,
            min_parallel_len: default_min_parallel_len(),
        }
    }
}

impl ParallelConfig {
    /// Create a new parallel config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with parallel processing disabled.
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Create a config that parallelizes every non-empty input.
    pub fn always() -> Self {
        Self {
            enabled: true,
            max_concurrency: None,
            min_parallel_len: 0,
        }
    }

    /// Whether a collection of `len` records should use the parallel stages.
    pub fn should_parallelize(&self, len: usize) -> bool {
        self.enabled && len > 0 && len >= self.min_parallel_len
    }

    /// Get the effective concurrency level.
    ///
    /// Returns the configured max_concurrency, or the number of
    /// available CPU cores if not specified.
    pub fn effective_concurrency(&self) -> usize {
        self.max_concurrency.unwrap_or_else(num_cpus)
    }
}

/// Returns the number of available CPU cores.
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_config_default() {
        let config = ParallelConfig::default();
        assert!(config.enabled);
        assert!(config.max_concurrency.is_none());
        assert_eq!(config.min_parallel_len, 1024);
    }

    #[test]
    fn test_parallel_config_sequential() {
        let config = ParallelConfig::sequential();
        assert!(!config.enabled);
        assert!(!config.should_parallelize(1_000_000));
    }

    #[test]
    fn test_should_parallelize_threshold() {
        let config = ParallelConfig::default();
        assert!(!config.should_parallelize(1023));
        assert!(config.should_parallelize(1024));
        assert!(!ParallelConfig::always().should_parallelize(0));
        assert!(ParallelConfig::always().should_parallelize(1));
    }

    #[test]
    fn test_effective_concurrency() {
        let config = ParallelConfig {
            max_concurrency: Some(4),
            ..Default::default()
        };
        assert_eq!(config.effective_concurrency(), 4);

        let config = ParallelConfig::default();
        assert!(config.effective_concurrency() >= 1);
    }

    #[test]
    fn test_parallel_config_partial_toml() {
        let config: ParallelConfig = toml::from_str("enabled = false").unwrap();
        assert!(!config.enabled);
        assert_eq!(config.min_parallel_len, 1024);
    }

    #[test]
    fn test_parallel_config_serde() {
        let config = ParallelConfig {
            enabled: true,
            max_concurrency: Some(8),
            min_parallel_len: 16,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ParallelConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
