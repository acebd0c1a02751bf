//! Service facade exposing the board to its host UI.

use crate::board::{
    domain::{
        BoardDomainError, BoardSnapshot, BoardState, ColumnId, ColumnRegistry, DragSession,
        DragTarget, DragTransitionEngine, MemberName, MemberRoster, Priority, Task, TaskDraft,
        TaskId,
    },
    ports::{TaskRepository, TaskRepositoryError},
    services::analytics::{self, DeadlineEntry, PriorityHistogram},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    due_date: NaiveDate,
    assignee: Option<String>,
    priority: Priority,
}

impl CreateTaskRequest {
    /// Creates a request with required card fields and `Low` priority.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date,
            assignee: None,
            priority: Priority::Low,
        }
    }

    /// Sets the priority level.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the assignee name.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Board orchestration service.
///
/// Owns the placement state and the drag engine; the repository is the
/// system of record for task data. Drag handlers are synchronous and run
/// each event to completion, so no two transitions ever interleave.
#[derive(Clone)]
pub struct BoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    registry: ColumnRegistry,
    board: BoardState,
    engine: DragTransitionEngine,
    roster: MemberRoster,
}

impl<R, C> BoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a board service with empty columns and roster.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            registry: ColumnRegistry::new(),
            board: BoardState::new(),
            engine: DragTransitionEngine::new(),
            roster: MemberRoster::new(),
        }
    }

    /// Creates a new task and appends it to the default column.
    ///
    /// Board state is untouched when validation or storage fails.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when a field fails validation
    /// or [`BoardServiceError::Repository`] when the store rejects the task.
    pub async fn create_task(&mut self, request: CreateTaskRequest) -> BoardServiceResult<Task> {
        let mut draft = TaskDraft::new(
            request.title,
            request.description,
            request.due_date,
            request.priority,
        )?;
        if let Some(assignee) = request.assignee {
            draft = draft.with_assignee(MemberName::new(assignee)?);
        }

        let task = Task::new(draft, &*self.clock)?;
        self.repository.store(&task).await?;
        self.board.append(ColumnId::DEFAULT, task.id());
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when the lookup fails.
    pub async fn get_task(&self, id: TaskId) -> BoardServiceResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Begins a drag gesture for the given task.
    pub const fn handle_drag_start(&mut self, task_id: TaskId) {
        self.engine.start(task_id);
    }

    /// Applies a hover-over event from the gesture layer.
    pub fn handle_drag_over(&mut self, subject: TaskId, over: Option<DragTarget>) {
        self.engine.hover(&mut self.board, subject, over);
    }

    /// Applies a drop event and ends the drag session.
    pub fn handle_drag_end(&mut self, subject: TaskId, over: Option<DragTarget>) {
        self.engine.end(&mut self.board, subject, over);
    }

    /// Returns the current drag session.
    #[must_use]
    pub const fn drag_session(&self) -> DragSession {
        self.engine.session()
    }

    /// Returns a read-only copy of the placement state.
    #[must_use]
    pub fn columns_snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Returns the column registry with display labels.
    #[must_use]
    pub const fn registry(&self) -> &ColumnRegistry {
        &self.registry
    }

    /// Counts tasks per priority level across all columns.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when listing tasks fails.
    pub async fn priority_histogram(&self) -> BoardServiceResult<PriorityHistogram> {
        let tasks = self.repository.list_all().await?;
        Ok(analytics::priority_histogram(tasks.iter()))
    }

    /// Returns tasks due strictly before `as_of`, in store insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when listing tasks fails.
    pub async fn overdue_tasks(&self, as_of: NaiveDate) -> BoardServiceResult<Vec<Task>> {
        let tasks = self.repository.list_all().await?;
        Ok(analytics::overdue_tasks(tasks, as_of))
    }

    /// Returns days-to-deadline entries for the default column's tasks, in
    /// display order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when listing tasks fails.
    pub async fn deadline_outlook(&self, as_of: NaiveDate) -> BoardServiceResult<Vec<DeadlineEntry>> {
        let tasks = self.repository.list_all().await?;
        Ok(analytics::deadline_outlook(
            self.board.column(ColumnId::DEFAULT),
            &tasks,
            as_of,
        ))
    }

    /// Adds a member to the assignment roster.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the name is empty.
    pub fn add_member(&mut self, name: impl Into<String>) -> BoardServiceResult<MemberName> {
        let member = MemberName::new(name)?;
        self.roster.add(member.clone());
        Ok(member)
    }

    /// Removes the first roster member with the given name.
    ///
    /// Returns `true` when a member was removed.
    pub fn remove_member(&mut self, name: &MemberName) -> bool {
        self.roster.remove(name)
    }

    /// Returns the roster members in insertion order.
    #[must_use]
    pub fn members(&self) -> &[MemberName] {
        self.roster.members()
    }
}
