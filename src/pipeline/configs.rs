//! Standard pipeline configuration for task aggregation.
//!
//! # Example Usage
//!
//! ```rust
//! use taskpoints::config::ParallelConfig;
//! use taskpoints::core::TaskCollection;
//! use taskpoints::pipeline::standard_pipeline;
//!
//! let pipeline = standard_pipeline(TaskCollection::sample(), &ParallelConfig::default());
//! let report = pipeline.execute().unwrap();
//! assert_eq!(report.weights, vec!["19%", "50%", "30%"]);
//! ```

use super::data::{AggregationReport, ReportData};
use super::stage::{FallibleStage, PureStage};
use super::stages::{
    group_by_status, open_points, par_group_by_status, par_open_points, par_total_points,
    par_weight_percentages, total_points, weight_percentages, weighting,
};
use super::{BuiltPipeline, PipelineBuilder};
use crate::config::ParallelConfig;
use crate::core::{Task, TaskCollection};
use crate::io::TaskSource;
use crate::observability::{set_phase, AggregationPhase};

/// The full aggregation pipeline over one task collection.
///
/// # Pipeline Stages
///
/// 1. **Load tasks**: seed [`ReportData`] with the collection
/// 2. **Open points**: sum of open task points
/// 3. **Total points**: sum of all task points
/// 4. **Group by status**: status-keyed partition
/// 5. **Weight tasks**: per-task percentages of the total
/// 6. **Finalize**: produce the [`AggregationReport`]
///
/// The rayon variants are used when `parallel` allows it for this
/// collection's size; results are identical either way.
pub fn standard_pipeline(
    tasks: TaskCollection,
    parallel: &ParallelConfig,
) -> BuiltPipeline<AggregationReport> {
    let seeded = PipelineBuilder::new().stage(PureStage::new("Load tasks", move |()| {
        let _phase = set_phase(AggregationPhase::Loading);
        ReportData::new(tasks.clone())
    }));
    aggregation_stages(seeded, parallel).build()
}

/// Same stages as [`standard_pipeline`], but "Load tasks" reads `source`.
///
/// Loading is fallible: an unreadable or invalid document fails the run
/// with [`Error::Stage`](crate::errors::Error::Stage) naming "Load tasks".
pub fn source_pipeline(
    source: TaskSource,
    parallel: &ParallelConfig,
) -> BuiltPipeline<AggregationReport> {
    let seeded = PipelineBuilder::new().stage(FallibleStage::new("Load tasks", move |()| {
        let _phase = set_phase(AggregationPhase::Loading);
        let tasks = source.load()?;
        tracing::info!(tasks = tasks.len(), "Loaded tasks");
        Ok::<_, crate::errors::Error>(ReportData::new(tasks))
    }));
    aggregation_stages(seeded, parallel).build()
}

fn aggregation_stages(
    builder: PipelineBuilder<ReportData>,
    parallel: &ParallelConfig,
) -> PipelineBuilder<AggregationReport> {
    let (p1, p2, p3, p4) = (
        parallel.clone(),
        parallel.clone(),
        parallel.clone(),
        parallel.clone(),
    );

    builder
        .stage(PureStage::new("Open points", move |data: ReportData| {
            let _phase = set_phase(AggregationPhase::OpenPoints);
            let points = run(&p1, data.tasks.as_slice(), par_open_points, open_points);
            data.with_open_points(points)
        }))
        .stage(PureStage::new("Total points", move |data: ReportData| {
            let _phase = set_phase(AggregationPhase::TotalPoints);
            let points = run(&p2, data.tasks.as_slice(), par_total_points, total_points);
            data.with_total_points(points)
        }))
        .stage(PureStage::new("Group by status", move |data: ReportData| {
            let _phase = set_phase(AggregationPhase::Grouping);
            let groups = run(&p3, data.tasks.as_slice(), par_group_by_status, group_by_status);
            data.with_groups(groups)
        }))
        .stage(PureStage::new("Weight tasks", move |data: ReportData| {
            let _phase = set_phase(AggregationPhase::Weighting);
            let use_parallel = p4.should_parallelize(data.tasks.len());
            let weights = weigh(&data, use_parallel);
            data.with_weights(weights)
        }))
        .stage(PureStage::new("Finalize", |data: ReportData| {
            data.into_report()
        }))
        .with_progress()
}

fn run<T>(
    config: &ParallelConfig,
    tasks: &[Task],
    parallel: fn(&[Task]) -> T,
    sequential: fn(&[Task]) -> T,
) -> T {
    if config.should_parallelize(tasks.len()) {
        parallel(tasks)
    } else {
        sequential(tasks)
    }
}

fn weigh(data: &ReportData, use_parallel: bool) -> Vec<String> {
    let tasks = data.tasks.as_slice();
    let total = data.total_points.unwrap_or_else(|| total_points(tasks));

    if total == 0 {
        tracing::debug!(
            tasks = tasks.len(),
            "Total points is zero; skipping weight computation"
        );
        return Vec::new();
    }

    let percentages = if use_parallel {
        par_weight_percentages(tasks, total)
    } else {
        weight_percentages(tasks, total)
    };
    weighting::format_all(percentages)
}
