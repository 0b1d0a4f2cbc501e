//! Pure functional pipeline for task point aggregation.
//!
//! The stages in [`stages`] are plain functions over `&[Task]`. The
//! builder layer composes them into a [`BuiltPipeline`] that threads a
//! [`ReportData`] accumulator through each step and yields an
//! [`AggregationReport`].

pub mod builder;
pub mod configs;
pub mod data;
pub mod stage;
pub mod stages;

pub use builder::{BuiltPipeline, PipelineBuilder, StageTiming};
pub use configs::{source_pipeline, standard_pipeline};
pub use data::{AggregationReport, ReportData};
pub use stage::{FallibleStage, PureStage, Stage};
pub use stages::StatusGroups;

use crate::config::ParallelConfig;
use crate::core::TaskCollection;
use crate::errors::Result;

/// Compute all four views of `tasks` with the standard pipeline.
///
/// # Errors
///
/// Only fails on internal stage wiring errors; valid collections always
/// aggregate.
///
/// # Example
///
/// ```rust
/// use taskpoints::config::ParallelConfig;
/// use taskpoints::core::{Status, Task, TaskCollection};
/// use taskpoints::pipeline::aggregate;
///
/// let tasks = TaskCollection::new(vec![
///     Task::new(Status::Open, 1),
///     Task::new(Status::Closed, 2),
/// ]);
/// let report = aggregate(&tasks, &ParallelConfig::default()).unwrap();
/// assert_eq!(report.open_points, 1);
/// assert_eq!(report.weights, vec!["33%", "66%"]);
/// ```
pub fn aggregate(tasks: &TaskCollection, parallel: &ParallelConfig) -> Result<AggregationReport> {
    let _span = tracing::debug_span!("aggregate", tasks = tasks.len()).entered();
    standard_pipeline(tasks.clone(), parallel).execute()
}
