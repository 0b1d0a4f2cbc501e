use std::fs;
use std::path::{Path, PathBuf};

use super::TaskpointsConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".taskpoints.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse config from a TOML string (pure)
///
/// # Errors
///
/// Returns [`Error::Config`] when the document is not valid configuration.
pub fn parse_config(contents: &str) -> Result<TaskpointsConfig> {
    let config = toml::from_str::<TaskpointsConfig>(contents)
        .map_err(|e| Error::config(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))?;

    if config.parallel.max_concurrency == Some(0) {
        return Err(Error::config("parallel.max_concurrency must be at least 1"));
    }

    Ok(config)
}

/// Load configuration from an explicit path.
///
/// # Errors
///
/// Unlike discovery, a missing or invalid explicit file is an error.
pub fn load_config_from(path: &Path) -> Result<TaskpointsConfig> {
    let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let config = parse_config(&contents)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading config from a discovered path, logging instead of failing
fn try_load_config_from_path(config_path: &Path) -> Option<TaskpointsConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Only log actual errors, not "file not found"
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Generate directory ancestors up to a depth limit (pure)
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search the current directory and its ancestors for `.taskpoints.toml`.
///
/// Falls back to defaults when nothing usable is found.
pub fn load_config() -> TaskpointsConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return TaskpointsConfig::default();
        }
    };

    discover_config(current)
}

fn discover_config(start: PathBuf) -> TaskpointsConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            TaskpointsConfig::default()
        })
}
