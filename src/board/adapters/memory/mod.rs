//! In-memory adapters for the board's ports.

mod task;

pub use task::InMemoryTaskRepository;
