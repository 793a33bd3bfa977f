//! Domain models for taskgate
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Task`] - A persisted to-do item
//! - [`CreateTask`] - Body of a create request
//! - [`UpdateTask`] - Status change chosen by the update routes

mod task;

pub use task::{CreateTask, TASK_ID_PREFIX, Task, UpdateTask};
