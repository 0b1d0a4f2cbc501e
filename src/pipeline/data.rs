//! Data structures flowing through the aggregation pipeline.
//!
//! `ReportData` holds the input collection and accumulates each stage's
//! result; `AggregationReport` is the finished, serializable output.

use super::stages::StatusGroups;
use crate::core::TaskCollection;
use serde::Serialize;

/// Data flowing through the aggregation pipeline.
///
/// This structure accumulates results as they flow through stages:
/// 1. Load → populates `tasks`
/// 2. Open points → populates `open_points`
/// 3. Total points → populates `total_points`
/// 4. Grouping → populates `groups`
/// 5. Weighting → populates `weights`
///
/// Each stage adds its result without touching the input or earlier results.
#[derive(Clone, Debug, Default)]
pub struct ReportData {
    /// Input records, read-only for the whole run
    pub tasks: TaskCollection,

    /// Sum of points over open tasks
    pub open_points: Option<u64>,

    /// Sum of points over all tasks
    pub total_points: Option<u64>,

    /// Tasks partitioned by status
    pub groups: Option<StatusGroups>,

    /// Per-task percentage strings
    pub weights: Option<Vec<String>>,
}

impl ReportData {
    /// Create new pipeline data from the input collection.
    pub fn new(tasks: TaskCollection) -> Self {
        Self {
            tasks,
            ..Self::default()
        }
    }

    pub fn with_open_points(mut self, points: u64) -> Self {
        self.open_points = Some(points);
        self
    }

    pub fn with_total_points(mut self, points: u64) -> Self {
        self.total_points = Some(points);
        self
    }

    pub fn with_groups(mut self, groups: StatusGroups) -> Self {
        self.groups = Some(groups);
        self
    }

    pub fn with_weights(mut self, weights: Vec<String>) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Finish the run. Stages that did not execute contribute their empty value.
    pub fn into_report(self) -> AggregationReport {
        AggregationReport {
            open_points: self.open_points.unwrap_or_default(),
            total_points: self.total_points.unwrap_or_default(),
            groups: self.groups.unwrap_or_default(),
            weights: self.weights.unwrap_or_default(),
        }
    }
}

/// The four derived views of a task collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AggregationReport {
    /// Sum of points over open tasks
    pub open_points: u64,

    /// Sum of points over all tasks
    pub total_points: u64,

    /// Tasks grouped by status, input order kept within each group
    pub groups: StatusGroups,

    /// Weight of each task as a truncated percentage of `total_points`
    pub weights: Vec<String>,
}
