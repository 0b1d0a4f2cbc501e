//! Pure aggregation stages for the task points pipeline.
//!
//! Each module contains pure functions that transform data without performing I/O.
//! These functions are:
//! - Deterministic (same input → same output)
//! - Side-effect free (no logging, no file access)
//! - Borrowing (the input collection is never mutated)

pub mod aggregation;
pub mod filtering;
pub mod weighting;

pub use aggregation::{
    group_by_status, open_points, par_group_by_status, par_open_points, par_points_with_status,
    par_total_points, points_with_status, sum_points, total_points, StatusGroups,
};
pub use filtering::{filter_by_status, with_status};
pub use weighting::{
    format_all, format_percentage, par_weight_percentages, percentage_of, weight_percentages,
    weighted_percentages,
};
