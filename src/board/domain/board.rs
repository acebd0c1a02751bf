//! Board placement state: which task sits in which column, in what order.

use super::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// Authoritative mapping from column to its ordered task sequence.
///
/// Every task known to the board appears in exactly one column's sequence,
/// exactly once. The board holds one lane per [`ColumnId`] variant in
/// display order; lanes are never added or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    lanes: Vec<Lane>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Lane {
    id: ColumnId,
    tasks: Vec<TaskId>,
}

impl BoardState {
    /// Creates a board with one empty lane per column.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lanes: ColumnId::ALL
                .into_iter()
                .map(|id| Lane {
                    id,
                    tasks: Vec::new(),
                })
                .collect(),
        }
    }

    /// Returns the ordered task sequence of a column.
    #[must_use]
    pub fn column(&self, id: ColumnId) -> &[TaskId] {
        self.lanes
            .iter()
            .find(|lane| lane.id == id)
            .map_or(&[], |lane| lane.tasks.as_slice())
    }

    /// Returns the column currently holding the given task.
    ///
    /// Returns `None` for ids the board does not know, including stale ids
    /// from events that raced with other changes.
    #[must_use]
    pub fn locate_task(&self, task_id: TaskId) -> Option<ColumnId> {
        self.lanes
            .iter()
            .find(|lane| lane.tasks.contains(&task_id))
            .map(|lane| lane.id)
    }

    /// Returns `true` when the task is placed somewhere on the board.
    #[must_use]
    pub fn contains(&self, task_id: TaskId) -> bool {
        self.locate_task(task_id).is_some()
    }

    /// Appends a task to the end of a column.
    pub fn append(&mut self, column: ColumnId, task_id: TaskId) {
        if let Some(lane) = self.lane_mut(column) {
            lane.tasks.push(task_id);
        }
    }

    /// Removes a task from whichever column holds it.
    ///
    /// Returns the column the task was removed from, or `None` when the
    /// task was not on the board. All other tasks keep their relative order.
    pub fn remove(&mut self, task_id: TaskId) -> Option<ColumnId> {
        for lane in &mut self.lanes {
            if let Some(index) = lane.tasks.iter().position(|id| *id == task_id) {
                lane.tasks.remove(index);
                return Some(lane.id);
            }
        }
        None
    }

    /// Moves a task to the end of the given column.
    ///
    /// No-op when the task is not on the board. Moving a task to the column
    /// it already occupies re-appends it at the end.
    pub fn move_to_column_end(&mut self, task_id: TaskId, destination: ColumnId) {
        if self.remove(task_id).is_some() {
            self.append(destination, task_id);
        }
    }

    /// Relocates `subject` to `target`'s current position within one column.
    ///
    /// A single-element move: the subject is removed from its index and
    /// re-inserted at the target's prior index, preserving every other
    /// task's relative order. No-op when either task is missing from the
    /// column or the indices coincide.
    pub fn relocate_within_column(&mut self, column: ColumnId, subject: TaskId, target: TaskId) {
        let Some(lane) = self.lane_mut(column) else {
            return;
        };
        let Some(subject_index) = lane.tasks.iter().position(|id| *id == subject) else {
            return;
        };
        let Some(target_index) = lane.tasks.iter().position(|id| *id == target) else {
            return;
        };
        if subject_index == target_index {
            return;
        }
        let moved = lane.tasks.remove(subject_index);
        lane.tasks.insert(target_index, moved);
    }

    /// Returns every placed task id, in column order then lane order.
    pub fn task_ids(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.lanes.iter().flat_map(|lane| lane.tasks.iter().copied())
    }

    /// Returns a read-only copy of the full placement state.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            columns: self
                .lanes
                .iter()
                .map(|lane| ColumnSnapshot {
                    id: lane.id,
                    task_ids: lane.tasks.clone(),
                })
                .collect(),
        }
    }

    fn lane_mut(&mut self, id: ColumnId) -> Option<&mut Lane> {
        self.lanes.iter_mut().find(|lane| lane.id == id)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time read-only copy of the board's placement state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    columns: Vec<ColumnSnapshot>,
}

/// Ordered task ids of a single column within a [`BoardSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSnapshot {
    /// Column identifier.
    pub id: ColumnId,
    /// Task ids in display order, top to bottom.
    pub task_ids: Vec<TaskId>,
}

impl BoardSnapshot {
    /// Returns the snapshotted columns in board display order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnSnapshot] {
        &self.columns
    }

    /// Returns the ordered task ids of one column.
    #[must_use]
    pub fn column(&self, id: ColumnId) -> &[TaskId] {
        self.columns
            .iter()
            .find(|column| column.id == id)
            .map_or(&[], |column| column.task_ids.as_slice())
    }
}
