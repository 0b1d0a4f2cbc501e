//! Error types for taskpoints operations.
//!
//! Aggregation itself never fails on well-formed input. Errors come from
//! the edges: constructing records from untrusted values, loading input
//! files, reading configuration, and the type-erased stage plumbing in
//! [`crate::pipeline`].
//!
//! # Example
//!
//! ```rust
//! use taskpoints::errors::Error;
//!
//! let err = Error::invalid_input("points must be non-negative, got -3");
//! assert!(err.is_invalid_input());
//! assert_eq!(
//!     err.to_string(),
//!     "Invalid input: points must be non-negative, got -3"
//! );
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for taskpoints operations
#[derive(Debug, Error)]
pub enum Error {
    /// A record violated the caller contract (negative points, unknown status)
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system related errors
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unsupported input format
    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    /// A pipeline stage was wired with an unexpected type
    #[error("Failed in stage '{stage}': {message}")]
    Pipeline { stage: String, message: String },

    /// A pipeline stage returned an error of its own
    #[error("Failed in stage '{stage}': {source}")]
    Stage {
        stage: String,
        #[source]
        source: Box<Error>,
    },

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a pipeline error for the named stage.
    pub fn pipeline(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Pipeline {
            stage: stage.into(),
            message: message.into(),
        }
    }

    /// Attribute `source` to the named stage.
    pub fn stage(stage: impl Into<String>, source: Error) -> Self {
        Self::Stage {
            stage: stage.into(),
            source: Box::new(source),
        }
    }

    /// Whether this error is a rejected record, looking through stage wrapping.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::InvalidInput { .. } => true,
            Self::Stage { source, .. } => source.is_invalid_input(),
            _ => false,
        }
    }
}

impl From<std::convert::Infallible> for Error {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
