//! Loading task records from JSON or TOML documents.
//!
//! JSON input is an array of records:
//!
//! ```json
//! [{"status": "OPEN", "points": 5}, {"status": "CLOSED", "points": 8}]
//! ```
//!
//! TOML input is a `tasks` array of tables:
//!
//! ```toml
//! [[tasks]]
//! status = "OPEN"
//! points = 5
//! ```
//!
//! Every record is validated while it is deserialized, so a negative point
//! count or an unknown status rejects the whole document.

use crate::core::{Task, TaskCollection};
use crate::errors::{Error, Result};
use crate::observability::set_input;
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Toml,
}

impl InputFormat {
    /// Pick a format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for anything but `.json` / `.toml`.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(Error::UnsupportedFormat(format!(
                "{} (expected .json or .toml)",
                path.display()
            ))),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TomlTaskFile {
    #[serde(default)]
    tasks: Vec<Task>,
}

/// Parse a task collection from an in-memory document (pure).
///
/// # Errors
///
/// Returns a parse error for malformed documents and for records that
/// fail validation.
pub fn parse_tasks(contents: &str, format: InputFormat) -> Result<TaskCollection> {
    let tasks = match format {
        InputFormat::Json => serde_json::from_str::<Vec<Task>>(contents)?,
        InputFormat::Toml => toml::from_str::<TomlTaskFile>(contents)?.tasks,
    };
    Ok(TaskCollection::new(tasks))
}

/// Read and parse a task collection from any reader.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, otherwise as [`parse_tasks`].
pub fn read_tasks<R: Read>(mut reader: R, format: InputFormat) -> Result<TaskCollection> {
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .map_err(|e| Error::io("<stdin>", e))?;
    parse_tasks(&contents, format)
}

/// Load a task collection from a `.json` or `.toml` file.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`], [`Error::Io`], or a parse error.
pub fn load_tasks(path: &Path) -> Result<TaskCollection> {
    let format = InputFormat::from_path(path)?;
    let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let tasks = parse_tasks(&contents, format)?;
    log::debug!("Loaded {} tasks from {}", tasks.len(), path.display());
    Ok(tasks)
}

/// Where a report's task records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskSource {
    /// The built-in three-record demonstration collection
    Sample,
    /// A JSON array on standard input
    Stdin,
    /// A `.json` or `.toml` file
    File(PathBuf),
}

impl TaskSource {
    /// Interpret a command-line input argument: none is the sample, `-` is stdin.
    pub fn from_arg(input: Option<&Path>) -> Self {
        match input {
            None => Self::Sample,
            Some(path) if path == Path::new("-") => Self::Stdin,
            Some(path) => Self::File(path.to_path_buf()),
        }
    }

    /// Read and validate the records.
    ///
    /// # Errors
    ///
    /// As [`read_tasks`] for stdin and [`load_tasks`] for files.
    pub fn load(&self) -> Result<TaskCollection> {
        match self {
            Self::Sample => {
                log::debug!("No input given, using the sample collection");
                Ok(TaskCollection::sample())
            }
            Self::Stdin => read_tasks(std::io::stdin().lock(), InputFormat::Json),
            Self::File(path) => {
                let _input = set_input(path);
                load_tasks(path)
            }
        }
    }
}
