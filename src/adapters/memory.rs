//! In-memory task store
//!
//! Implements `TaskStore` over a mutex-guarded table. Contents live for the
//! lifetime of the process.

use std::sync::{Mutex, MutexGuard};

use crate::core::models::{CreateTask, Task, UpdateTask};
use crate::core::ports::TaskStore;

use super::table::TaskTable;

/// Task store kept in process memory
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    table: Mutex<TaskTable>,
}

impl MemoryTaskStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with existing tasks
    ///
    /// New IDs continue after the highest `TSK-N` among `tasks`.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            table: Mutex::new(TaskTable::from_tasks(tasks)),
        }
    }

    fn lock(&self) -> anyhow::Result<MutexGuard<'_, TaskTable>> {
        self.table
            .lock()
            .map_err(|_| anyhow::anyhow!("in-memory task table lock poisoned"))
    }
}

impl TaskStore for MemoryTaskStore {
    fn list(&self) -> anyhow::Result<Vec<Task>> {
        Ok(self.lock()?.tasks.clone())
    }

    fn get(&self, id: &str) -> anyhow::Result<Option<Task>> {
        Ok(self.lock()?.get(id).cloned())
    }

    fn insert(&self, request: &CreateTask) -> anyhow::Result<Task> {
        Ok(self.lock()?.insert(request))
    }

    fn update(&self, id: &str, update: UpdateTask) -> anyhow::Result<Option<Task>> {
        Ok(self.lock()?.update(id, update))
    }

    fn delete(&self, id: &str) -> anyhow::Result<Option<Task>> {
        Ok(self.lock()?.remove(id))
    }
}
