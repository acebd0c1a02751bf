//! Domain model for the task board.
//!
//! The board domain models task cards, the closed column set, the
//! placement state mapping columns to ordered task sequences, and the drag
//! lifecycle state machine that mutates it, while keeping all
//! infrastructure concerns outside of the domain boundary.

mod board;
mod column;
mod drag;
mod error;
mod ids;
mod member;
mod task;

pub use board::{BoardSnapshot, BoardState, ColumnSnapshot};
pub use column::{ColumnEntry, ColumnId, ColumnRegistry};
pub use drag::{DragSession, DragTarget, DragTransitionEngine, locate_container};
pub use error::{BoardDomainError, ParseColumnError, ParsePriorityError};
pub use ids::TaskId;
pub use member::{MemberName, MemberRoster};
pub use task::{Priority, Task, TaskDraft};
