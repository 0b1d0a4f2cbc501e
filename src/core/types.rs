//! Record model: task status, task records, and the read-only collection.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of task states.
///
/// Variant order is the order groups are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Status {
    Open,
    Closed,
}

impl Status {
    /// All statuses in reporting order.
    pub const ALL: [Status; 2] = [Status::Open, Status::Closed];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "OPEN",
            Status::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OPEN" => Ok(Status::Open),
            "CLOSED" => Ok(Status::Closed),
            _ => Err(Error::invalid_input(format!(
                "unknown status '{}', expected OPEN or CLOSED",
                s
            ))),
        }
    }
}

impl TryFrom<String> for Status {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// A single task record pairing a status with a point score.
///
/// Records are immutable once built. Deserialization runs the same checks
/// as [`Task::try_new`], so malformed input is rejected while loading
/// rather than surfacing later as a wrong sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTask")]
pub struct Task {
    status: Status,
    points: u32,
}

impl Task {
    pub const fn new(status: Status, points: u32) -> Self {
        Self { status, points }
    }

    /// Build a task from an unchecked point value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when `points` is negative or does not
    /// fit in a `u32`.
    pub fn try_new(status: Status, points: i64) -> Result<Self> {
        if points < 0 {
            return Err(Error::invalid_input(format!(
                "points must be non-negative, got {}",
                points
            )));
        }
        let points = u32::try_from(points).map_err(|_| {
            Error::invalid_input(format!("points value {} is out of range", points))
        })?;
        Ok(Self::new(status, points))
    }

    pub const fn status(&self) -> Status {
        self.status
    }

    pub const fn points(&self) -> u32 {
        self.points
    }

    pub fn is_open(&self) -> bool {
        self.status == Status::Open
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.status, self.points)
    }
}

/// Wire shape of a task before validation.
#[derive(Debug, Deserialize)]
struct RawTask {
    status: Status,
    points: i64,
}

impl TryFrom<RawTask> for Task {
    type Error = Error;

    fn try_from(raw: RawTask) -> Result<Self> {
        Task::try_new(raw.status, raw.points)
    }
}

/// Ordered, read-only sequence of task records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskCollection {
    tasks: Vec<Task>,
}

impl TaskCollection {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// The reference collection: two open tasks worth 5 and 13 points and
    /// one closed task worth 8.
    pub fn sample() -> Self {
        Self::new(vec![
            Task::new(Status::Open, 5),
            Task::new(Status::Open, 13),
            Task::new(Status::Closed, 8),
        ])
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }
}

impl From<Vec<Task>> for TaskCollection {
    fn from(tasks: Vec<Task>) -> Self {
        Self::new(tasks)
    }
}

impl FromIterator<Task> for TaskCollection {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TaskCollection {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

impl AsRef<[Task]> for TaskCollection {
    fn as_ref(&self) -> &[Task] {
        &self.tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_display() {
        assert_eq!(Task::new(Status::Open, 5).to_string(), "[OPEN, 5]");
        assert_eq!(Task::new(Status::Closed, 8).to_string(), "[CLOSED, 8]");
    }

    #[test]
    fn test_accessors() {
        let task = Task::new(Status::Closed, 13);
        assert_eq!(task.status(), Status::Closed);
        assert_eq!(task.points(), 13);
        assert!(!task.is_open());
    }

    #[test]
    fn test_try_new_rejects_negative_points() {
        let err = Task::try_new(Status::Open, -1).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_try_new_rejects_out_of_range_points() {
        let err = Task::try_new(Status::Open, i64::from(u32::MAX) + 1).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_try_new_accepts_zero() {
        let task = Task::try_new(Status::Open, 0).unwrap();
        assert_eq!(task.points(), 0);
    }

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!("open".parse::<Status>().unwrap(), Status::Open);
        assert_eq!(" CLOSED ".parse::<Status>().unwrap(), Status::Closed);
        assert!("pending".parse::<Status>().is_err());
    }

    #[test]
    fn test_status_order_matches_reporting_order() {
        assert!(Status::Open < Status::Closed);
        assert_eq!(Status::ALL, [Status::Open, Status::Closed]);
    }

    #[test]
    fn test_deserialize_validates_records() {
        let ok: Task = serde_json::from_str(r#"{"status":"open","points":5}"#).unwrap();
        assert_eq!(ok, Task::new(Status::Open, 5));

        let negative = serde_json::from_str::<Task>(r#"{"status":"OPEN","points":-5}"#);
        assert!(negative.is_err());

        let unknown = serde_json::from_str::<Task>(r#"{"status":"DONE","points":5}"#);
        assert!(unknown.is_err());
    }

    #[test]
    fn test_serialize_uses_uppercase_status() {
        let json = serde_json::to_string(&Task::new(Status::Closed, 8)).unwrap();
        assert_eq!(json, r#"{"status":"CLOSED","points":8}"#);
    }

    #[test]
    fn test_sample_collection() {
        let tasks = TaskCollection::sample();
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks.as_slice()[1], Task::new(Status::Open, 13));
    }

    #[test]
    fn test_collection_from_iterator_preserves_order() {
        let tasks: TaskCollection = [8, 5, 13]
            .into_iter()
            .map(|p| Task::new(Status::Open, p))
            .collect();
        let points: Vec<u32> = tasks.iter().map(Task::points).collect();
        assert_eq!(points, vec![8, 5, 13]);
    }
}
