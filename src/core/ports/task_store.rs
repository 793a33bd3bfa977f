//! Task store port
//!
//! Defines the interface the API layer uses for persistence.

use std::sync::Arc;

use super::super::models::{CreateTask, Task, UpdateTask};

/// Persistence for tasks
///
/// `Ok(None)` means the identifier is unknown and must stay distinct from
/// `Err`, which is a store failure. Calls are single-shot; any retrying is
/// the implementation's business.
pub trait TaskStore: Send + Sync {
    /// List every task
    fn list(&self) -> anyhow::Result<Vec<Task>>;

    /// Fetch one task by ID
    fn get(&self, id: &str) -> anyhow::Result<Option<Task>>;

    /// Persist a new task and return it with its assigned ID
    fn insert(&self, request: &CreateTask) -> anyhow::Result<Task>;

    /// Apply a status change and return the updated task
    fn update(&self, id: &str, update: UpdateTask) -> anyhow::Result<Option<Task>>;

    /// Remove a task and return its last known state
    fn delete(&self, id: &str) -> anyhow::Result<Option<Task>>;
}

impl<S: TaskStore + ?Sized> TaskStore for Arc<S> {
    fn list(&self) -> anyhow::Result<Vec<Task>> {
        (**self).list()
    }

    fn get(&self, id: &str) -> anyhow::Result<Option<Task>> {
        (**self).get(id)
    }

    fn insert(&self, request: &CreateTask) -> anyhow::Result<Task> {
        (**self).insert(request)
    }

    fn update(&self, id: &str, update: UpdateTask) -> anyhow::Result<Option<Task>> {
        (**self).update(id, update)
    }

    fn delete(&self, id: &str) -> anyhow::Result<Option<Task>> {
        (**self).delete(id)
    }
}
