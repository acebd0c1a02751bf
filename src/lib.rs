//! Phoenix board: in-memory task board engine.
//!
//! This crate provides the state-transition core behind a drag-and-drop
//! task board: tasks live in ordered columns and are reordered within a
//! column or moved between columns by drag lifecycle events produced by an
//! external gesture layer. Read-side aggregates (priority histogram,
//! overdue list, days-to-deadline) are derived for display.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`board`]: Task creation, placement state, drag transitions, and
//!   display aggregates

pub mod board;
