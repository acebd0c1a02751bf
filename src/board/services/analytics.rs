//! Read-side aggregate projections for display.
//!
//! Aggregates are pure functions over task data; they never mutate board
//! or store state. The service recomputes them on demand from the
//! repository's insertion-order listing.

use crate::board::domain::{Priority, Task, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Count of tasks at each priority level across the whole board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityHistogram {
    low: usize,
    medium: usize,
    high: usize,
}

impl PriorityHistogram {
    /// Returns the count for one priority level.
    #[must_use]
    pub const fn count(self, priority: Priority) -> usize {
        match priority {
            Priority::Low => self.low,
            Priority::Medium => self.medium,
            Priority::High => self.high,
        }
    }

    /// Returns the total number of counted tasks.
    #[must_use]
    pub const fn total(self) -> usize {
        self.low + self.medium + self.high
    }
}

/// Builds the priority histogram over all given tasks.
#[must_use]
pub fn priority_histogram<'t>(tasks: impl IntoIterator<Item = &'t Task>) -> PriorityHistogram {
    let mut histogram = PriorityHistogram::default();
    for task in tasks {
        match task.priority() {
            Priority::Low => histogram.low += 1,
            Priority::Medium => histogram.medium += 1,
            Priority::High => histogram.high += 1,
        }
    }
    histogram
}

/// Returns the tasks whose due date is strictly before `as_of`.
///
/// A task due on `as_of` itself is not overdue. Order follows the input.
#[must_use]
pub fn overdue_tasks(tasks: Vec<Task>, as_of: NaiveDate) -> Vec<Task> {
    tasks
        .into_iter()
        .filter(|task| task.is_overdue(as_of))
        .collect()
}

/// Days-to-deadline datum for one task, shaped for chart display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineEntry {
    /// Task the entry describes.
    pub task_id: TaskId,
    /// Task title, used as the chart label.
    pub title: String,
    /// Signed days between `as_of` and the due date; negative when overdue.
    pub days_remaining: i64,
}

/// Builds per-task deadline entries for the tasks listed in `ordered_ids`.
///
/// Entries follow the id order (a column's display order); ids without a
/// matching task are skipped.
#[must_use]
pub fn deadline_outlook(ordered_ids: &[TaskId], tasks: &[Task], as_of: NaiveDate) -> Vec<DeadlineEntry> {
    ordered_ids
        .iter()
        .filter_map(|id| tasks.iter().find(|task| task.id() == *id))
        .map(|task| DeadlineEntry {
            task_id: task.id(),
            title: task.title().to_owned(),
            days_remaining: task.days_remaining(as_of),
        })
        .collect()
}
