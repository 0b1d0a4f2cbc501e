//! Status-grouped point aggregation for task records.
//!
//! Given an ordered collection of `(status, points)` records, taskpoints
//! computes the open-task point sum, the overall total, a status-keyed
//! grouping, and each record's truncated percentage of the total.

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod observability;
pub mod pipeline;

// Re-export commonly used types
pub use crate::core::{Status, Task, TaskCollection};

pub use crate::errors::{Error, Result};

pub use crate::config::{ParallelConfig, TaskpointsConfig};

pub use crate::pipeline::stages::{
    filter_by_status, group_by_status, open_points, percentage_of, points_with_status,
    total_points, weight_percentages, weighted_percentages, StatusGroups,
};

pub use crate::pipeline::{aggregate, source_pipeline, standard_pipeline, AggregationReport};

pub use crate::io::{create_writer, load_tasks, OutputFormat, OutputWriter, TaskSource};
