//! Pure weighting functions: each task's share of the total points.
//!
//! A weight is `floor(points * 100 / total)`. It is computed in integer
//! arithmetic, which is exactly the truncation of the real-valued ratio
//! scaled by 100 and avoids the float artifacts of `(p / t) * 100`
//! (for example `0.29 * 100 == 28.999999999999996`).
//!
//! A zero total has no meaningful weights. Every function here returns
//! nothing in that case instead of dividing by zero.

use crate::core::Task;
use rayon::prelude::*;

/// Integer percentage of `points` relative to `total` (pure).
///
/// # Returns
///
/// `None` when `total` is 0, otherwise the truncated percentage
pub fn percentage_of(points: u32, total: u64) -> Option<u64> {
    if total == 0 {
        return None;
    }
    Some(u64::from(points) * 100 / total)
}

/// Render a percentage the way reports show it, e.g. `25%`.
pub fn format_percentage(percentage: u64) -> String {
    format!("{}%", percentage)
}

/// Per-task integer percentages in input order (pure).
///
/// # Arguments
///
/// * `tasks` - Slice of task records
/// * `total` - Unfiltered point total of the same collection
///
/// # Returns
///
/// One entry per task, or an empty vector when `total` is 0
pub fn weight_percentages(tasks: &[Task], total: u64) -> Vec<u64> {
    tasks
        .iter()
        .map(|task| percentage_of(task.points(), total))
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default()
}

/// Parallel [`weight_percentages`]; output order still follows the input.
pub fn par_weight_percentages(tasks: &[Task], total: u64) -> Vec<u64> {
    if total == 0 {
        return Vec::new();
    }
    tasks
        .par_iter()
        .map(|task| u64::from(task.points()) * 100 / total)
        .collect()
}

/// Per-task percentage strings in input order (pure).
///
/// Empty when `total` is 0.
pub fn weighted_percentages(tasks: &[Task], total: u64) -> Vec<String> {
    format_all(weight_percentages(tasks, total))
}

/// Format each percentage with [`format_percentage`].
pub fn format_all(percentages: Vec<u64>) -> Vec<String> {
    percentages.into_iter().map(format_percentage).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Status;

    fn tasks(points: &[u32]) -> Vec<Task> {
        points.iter().map(|p| Task::new(Status::Open, *p)).collect()
    }

    #[test]
    fn test_weighted_percentages_reference_collection() {
        let tasks = vec![
            Task::new(Status::Open, 5),
            Task::new(Status::Open, 13),
            Task::new(Status::Closed, 8),
        ];

        assert_eq!(weighted_percentages(&tasks, 26), vec!["19%", "50%", "30%"]);
    }

    #[test]
    fn test_zero_total_guard() {
        let tasks = tasks(&[0, 0]);
        assert!(weighted_percentages(&tasks, 0).is_empty());
        assert!(par_weight_percentages(&tasks, 0).is_empty());
        assert_eq!(percentage_of(0, 0), None);
    }

    #[test]
    fn test_percentage_truncates() {
        // 1/3 -> 33.33.. and 2/3 -> 66.66..
        assert_eq!(percentage_of(1, 3), Some(33));
        assert_eq!(percentage_of(2, 3), Some(66));
        assert_eq!(percentage_of(3, 3), Some(100));
    }

    #[test]
    fn test_percentage_exact_where_float_drifts() {
        assert_eq!(percentage_of(29, 100), Some(29));
        assert_eq!(percentage_of(57, 100), Some(57));
    }

    #[test]
    fn test_zero_points_with_positive_total() {
        assert_eq!(weighted_percentages(&tasks(&[0, 4]), 4), vec!["0%", "100%"]);
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(25), "25%");
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let tasks: Vec<Task> = (0..3_000u32).map(|i| Task::new(Status::Open, i)).collect();
        let total: u64 = tasks.iter().map(|t| u64::from(t.points())).sum();
        assert_eq!(
            par_weight_percentages(&tasks, total),
            weight_percentages(&tasks, total)
        );
    }
}
