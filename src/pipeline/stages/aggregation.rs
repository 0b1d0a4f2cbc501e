//! Pure aggregation functions for summing and grouping task records.
//!
//! These functions aggregate points and records without side effects.
//! Each has a rayon counterpart prefixed with `par_` that produces the
//! same result; sums are associative and the grouping reduction merges
//! partitions left to right, so record order inside a group survives.

use super::filtering::with_status;
use crate::core::{Status, Task};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Sum the points of the given records (pure).
///
/// Widened to `u64` so no realistic collection can overflow.
pub fn sum_points<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> u64 {
    tasks.into_iter().map(|task| u64::from(task.points())).sum()
}

/// Sum the points of records carrying `status` (pure).
///
/// # Arguments
///
/// * `tasks` - Slice of task records
/// * `status` - Status to filter on
///
/// # Returns
///
/// Sum of matching points, or 0 if nothing matches
pub fn points_with_status(tasks: &[Task], status: Status) -> u64 {
    sum_points(with_status(tasks, status))
}

/// Total points of all open tasks (pure).
pub fn open_points(tasks: &[Task]) -> u64 {
    points_with_status(tasks, Status::Open)
}

/// Total points across every task regardless of status (pure).
///
/// This is the denominator for weighting; it is 0 for an empty slice.
pub fn total_points(tasks: &[Task]) -> u64 {
    sum_points(tasks)
}

/// Group tasks by status (pure).
///
/// Single pass over the input. Only statuses that occur become keys, and
/// each group keeps the input order of its records.
pub fn group_by_status(tasks: &[Task]) -> StatusGroups {
    tasks.iter().copied().fold(StatusGroups::default(), StatusGroups::with_task)
}

/// Parallel [`points_with_status`].
pub fn par_points_with_status(tasks: &[Task], status: Status) -> u64 {
    tasks
        .par_iter()
        .filter(|task| task.status() == status)
        .map(|task| u64::from(task.points()))
        .sum()
}

/// Parallel [`open_points`].
pub fn par_open_points(tasks: &[Task]) -> u64 {
    par_points_with_status(tasks, Status::Open)
}

/// Parallel [`total_points`].
pub fn par_total_points(tasks: &[Task]) -> u64 {
    tasks.par_iter().map(|task| u64::from(task.points())).sum()
}

/// Parallel [`group_by_status`].
pub fn par_group_by_status(tasks: &[Task]) -> StatusGroups {
    tasks
        .par_iter()
        .copied()
        .fold(StatusGroups::default, StatusGroups::with_task)
        .reduce(StatusGroups::default, StatusGroups::merge)
}

/// Partition of tasks into status-keyed, order-preserving groups.
///
/// Keys iterate in [`Status`] order. Displays in the bracketed form used
/// by the terminal report: `{OPEN=[[OPEN, 5]], CLOSED=[[CLOSED, 8]]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StatusGroups {
    groups: BTreeMap<Status, Vec<Task>>,
}

impl StatusGroups {
    fn with_task(mut self, task: Task) -> Self {
        self.groups.entry(task.status()).or_default().push(task);
        self
    }

    /// Append every group of `other` after this one's records.
    fn merge(mut self, other: StatusGroups) -> Self {
        for (status, tasks) in other.groups {
            self.groups.entry(status).or_default().extend(tasks);
        }
        self
    }

    /// Records with `status`, if any were present.
    pub fn get(&self, status: Status) -> Option<&[Task]> {
        self.groups.get(&status).map(Vec::as_slice)
    }

    /// Statuses that occur in the input, in reporting order.
    pub fn statuses(&self) -> impl Iterator<Item = Status> + '_ {
        self.groups.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Status, &[Task])> + '_ {
        self.groups
            .iter()
            .map(|(status, tasks)| (*status, tasks.as_slice()))
    }

    /// Number of distinct statuses present.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of records across all groups.
    pub fn task_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

impl fmt::Display for StatusGroups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (status, tasks)) in self.groups.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}=[", status)?;
            for (j, task) in tasks.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", task)?;
            }
            f.write_str("]")?;
        }
        f.write_str("}")
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_task() -> impl Strategy<Value = Task> {
        (
            prop_oneof![Just(Status::Open), Just(Status::Closed)],
            0u32..10_000,
        )
            .prop_map(|(status, points)| Task::new(status, points))
    }

    proptest! {
        #[test]
        fn open_points_never_exceed_total(tasks in prop::collection::vec(arb_task(), 0..200)) {
            prop_assert!(open_points(&tasks) <= total_points(&tasks));
        }

        #[test]
        fn status_sums_add_up_to_total(tasks in prop::collection::vec(arb_task(), 0..200)) {
            let by_status: u64 = Status::ALL
                .iter()
                .map(|status| points_with_status(&tasks, *status))
                .sum();
            prop_assert_eq!(by_status, total_points(&tasks));
        }

        #[test]
        fn grouping_is_a_partition(tasks in prop::collection::vec(arb_task(), 0..200)) {
            let grouped = group_by_status(&tasks);
            prop_assert_eq!(grouped.task_count(), tasks.len());
            for (status, members) in grouped.iter() {
                prop_assert!(members.iter().all(|t| t.status() == status));
                let expected: Vec<Task> =
                    tasks.iter().copied().filter(|t| t.status() == status).collect();
                prop_assert_eq!(members, expected.as_slice());
            }
        }

        #[test]
        fn parallel_grouping_matches_sequential(tasks in prop::collection::vec(arb_task(), 0..500)) {
            prop_assert_eq!(par_group_by_status(&tasks), group_by_status(&tasks));
        }

        #[test]
        fn aggregation_is_idempotent(tasks in prop::collection::vec(arb_task(), 0..100)) {
            prop_assert_eq!(group_by_status(&tasks), group_by_status(&tasks));
            prop_assert_eq!(total_points(&tasks), total_points(&tasks));
        }
    }
}
