//! Drag lifecycle state machine over the board's placement state.
//!
//! The engine consumes the three abstract drag lifecycle events the gesture
//! layer produces (start, hover-over, drop) and applies the board's
//! placement policy: cross-column moves are applied eagerly on hover so the
//! board reflects the tentative placement while the gesture continues,
//! while same-column reordering is deferred to the drop, where the target
//! index is final. Events carrying ids the board no longer knows are
//! absorbed as no-ops; the event source races with other changes and a
//! cosmetic gesture must not fail loudly.

use super::{BoardState, ColumnId, TaskId};

/// What the pointer is currently over: a column surface or a task card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// Hovering a column's own surface (including its empty area).
    Column(ColumnId),
    /// Hovering another task card.
    Task(TaskId),
}

/// Ephemeral state of the current drag gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragSession {
    /// No drag in progress.
    #[default]
    Idle,
    /// A task is being dragged.
    Dragging(TaskId),
}

impl DragSession {
    /// Returns the task being dragged, if any.
    #[must_use]
    pub const fn active_task(self) -> Option<TaskId> {
        match self {
            Self::Idle => None,
            Self::Dragging(task_id) => Some(task_id),
        }
    }
}

/// Resolves a drag target to the column that contains it.
///
/// A column target resolves to itself; a task target resolves to the
/// column currently holding that task. Returns `None` for stale task ids.
#[must_use]
pub fn locate_container(board: &BoardState, target: DragTarget) -> Option<ColumnId> {
    match target {
        DragTarget::Column(column) => Some(column),
        DragTarget::Task(task_id) => board.locate_task(task_id),
    }
}

/// State machine consuming drag lifecycle events and mutating board state.
///
/// Transitions run synchronously to completion; one event is fully applied
/// before the next is accepted, so there is no reentrancy hazard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragTransitionEngine {
    session: DragSession,
}

impl DragTransitionEngine {
    /// Creates an engine with no active drag.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            session: DragSession::Idle,
        }
    }

    /// Returns the current drag session.
    #[must_use]
    pub const fn session(self) -> DragSession {
        self.session
    }

    /// Begins a drag gesture for `subject`.
    ///
    /// Board state is untouched. A start while a session is already active
    /// supersedes the prior session; a well-formed gesture layer ends each
    /// drag before starting the next.
    pub const fn start(&mut self, subject: TaskId) {
        self.session = DragSession::Dragging(subject);
    }

    /// Applies a hover-over event, fired repeatedly during an active drag.
    ///
    /// When the subject and the hovered target resolve to different
    /// columns, the subject moves to the end of the target column
    /// immediately. Hovering within the subject's own column, over empty
    /// space, or with stale ids changes nothing; repeating the same hover
    /// after the move has happened is a no-op because the containers then
    /// coincide. Hover events outside an active session are ignored.
    pub fn hover(&self, board: &mut BoardState, subject: TaskId, over: Option<DragTarget>) {
        let DragSession::Dragging(_) = self.session else {
            return;
        };
        let Some(over_target) = over else {
            return;
        };
        let Some(source) = board.locate_task(subject) else {
            return;
        };
        let Some(destination) = locate_container(board, over_target) else {
            return;
        };
        if source == destination {
            return;
        }
        board.move_to_column_end(subject, destination);
    }

    /// Applies the drop event and ends the session unconditionally.
    ///
    /// A drop on a task in the subject's own column relocates the subject
    /// to that task's position. Cross-column drops need no further change;
    /// hover already placed the subject in the target column. Drops on
    /// empty space or with stale ids end the session without moving
    /// anything.
    pub fn end(&mut self, board: &mut BoardState, subject: TaskId, over: Option<DragTarget>) {
        Self::settle_drop(board, subject, over);
        self.session = DragSession::Idle;
    }

    fn settle_drop(board: &mut BoardState, subject: TaskId, over: Option<DragTarget>) {
        let Some(over_target) = over else {
            return;
        };
        let Some(source) = board.locate_task(subject) else {
            return;
        };
        let Some(destination) = locate_container(board, over_target) else {
            return;
        };
        if source != destination {
            // Cross-column placement was resolved incrementally by hover.
            return;
        }
        let DragTarget::Task(target_task) = over_target else {
            // Dropped on the column surface itself: no positional intent.
            return;
        };
        board.relocate_within_column(source, subject, target_task);
    }
}
