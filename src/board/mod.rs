//! Task board management for Phoenix.
//!
//! This module implements the board core: task creation with validation,
//! the column placement state, the drag-and-drop transition engine, and
//! the read-side aggregates the UI renders (priority histogram, overdue
//! list, days-to-deadline). The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
