//! Pure filtering functions for the aggregation pipeline.
//!
//! These functions select records by status without copying or
//! reordering the input.

use crate::core::{Status, Task};

/// Iterate over the tasks carrying `status`, in input order (pure).
///
/// # Arguments
///
/// * `tasks` - Slice of task records
/// * `status` - Status to keep
///
/// # Returns
///
/// Lazy iterator over matching records
pub fn with_status(tasks: &[Task], status: Status) -> impl Iterator<Item = &Task> + '_ {
    tasks.iter().filter(move |task| task.status() == status)
}

/// Collect the tasks carrying `status` (pure).
///
/// Relative order of the kept records matches the input.
pub fn filter_by_status(tasks: &[Task], status: Status) -> Vec<Task> {
    with_status(tasks, status).copied().collect()
}
