//! Mock implementations of port traits for testing

use taskgate::core::models::{CreateTask, Task, UpdateTask};
use taskgate::core::ports::TaskStore;

/// Detail carried by every `FailingTaskStore` error
pub const STORE_FAILURE_DETAIL: &str = "connection refused: db.internal:5432";

/// Store that fails every call
pub struct FailingTaskStore;

impl FailingTaskStore {
    fn fail<T>() -> anyhow::Result<T> {
        Err(anyhow::anyhow!(STORE_FAILURE_DETAIL).context("task table unavailable"))
    }
}

impl TaskStore for FailingTaskStore {
    fn list(&self) -> anyhow::Result<Vec<Task>> {
        Self::fail()
    }

    fn get(&self, _id: &str) -> anyhow::Result<Option<Task>> {
        Self::fail()
    }

    fn insert(&self, _request: &CreateTask) -> anyhow::Result<Task> {
        Self::fail()
    }

    fn update(&self, _id: &str, _update: UpdateTask) -> anyhow::Result<Option<Task>> {
        Self::fail()
    }

    fn delete(&self, _id: &str) -> anyhow::Result<Option<Task>> {
        Self::fail()
    }
}
