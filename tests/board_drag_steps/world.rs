//! Shared world state for board drag BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Days, Utc};
use mockable::DefaultClock;
use phoenix_board::board::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskId},
    services::{BoardService, BoardServiceError, CreateTaskRequest},
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestBoardService = BoardService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for board drag behaviour tests.
pub struct BoardWorld {
    pub service: TestBoardService,
    pub task_ids: HashMap<String, TaskId>,
    pub last_create_result: Option<Result<Task, BoardServiceError>>,
}

impl BoardWorld {
    /// Creates a world with an empty board and roster.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: BoardService::new(
                Arc::new(InMemoryTaskRepository::new()),
                Arc::new(DefaultClock),
            ),
            task_ids: HashMap::new(),
            last_create_result: None,
        }
    }

    /// Discards all scenario state and starts from an empty board.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Creates a task due a week out and records its id under `title`.
    pub fn create_titled_task(&mut self, title: &str) -> Result<Task, eyre::Report> {
        let due_date = Utc::now()
            .date_naive()
            .checked_add_days(Days::new(7))
            .ok_or_else(|| eyre::eyre!("due date out of range"))?;
        let request = CreateTaskRequest::new(title, "Scenario task", due_date);
        let task = run_async(self.service.create_task(request))
            .map_err(|err| eyre::eyre!("create task in scenario: {err}"))?;
        self.task_ids.insert(title.to_owned(), task.id());
        Ok(task)
    }

    /// Looks up the id recorded for a scenario task title.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.task_ids
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown scenario task: {title}"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
