//! Application services for board orchestration and display projections.

pub mod analytics;
mod board;

pub use analytics::{DeadlineEntry, PriorityHistogram};
pub use board::{BoardService, BoardServiceError, BoardServiceResult, CreateTaskRequest};
