//! JSON file task store

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use anyhow::Context as _;

use crate::core::models::{CreateTask, Task, UpdateTask};
use crate::core::ports::TaskStore;

use super::super::table::TaskTable;

/// Task store backed by a single JSON document
///
/// The whole file is read on every call and rewritten on every mutation.
/// A missing file reads as an empty store.
#[derive(Debug)]
pub struct FileTaskStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileTaskStore {
    /// Create a store over the given file
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> anyhow::Result<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|_| anyhow::anyhow!("task file lock poisoned: {}", self.path.display()))
    }

    fn load(&self) -> anyhow::Result<TaskTable> {
        if !self.path.exists() {
            return Ok(TaskTable::default());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read task file {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse task file {}", self.path.display()))
    }

    fn save(&self, table: &TaskTable) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(table)?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write task file {}", self.path.display()))
    }

    /// Load, mutate, and write back only if the mutation touched a task
    fn modify<T>(
        &self,
        f: impl FnOnce(&mut TaskTable) -> Option<T>,
    ) -> anyhow::Result<Option<T>> {
        let _guard = self.lock()?;
        let mut table = self.load()?;
        let result = f(&mut table);
        if result.is_some() {
            self.save(&table)?;
        }
        Ok(result)
    }
}

impl TaskStore for FileTaskStore {
    fn list(&self) -> anyhow::Result<Vec<Task>> {
        let _guard = self.lock()?;
        Ok(self.load()?.tasks)
    }

    fn get(&self, id: &str) -> anyhow::Result<Option<Task>> {
        let _guard = self.lock()?;
        Ok(self.load()?.get(id).cloned())
    }

    fn insert(&self, request: &CreateTask) -> anyhow::Result<Task> {
        self.modify(|table| Some(table.insert(request)))?
            .ok_or_else(|| anyhow::anyhow!("insert produced no task"))
    }

    fn update(&self, id: &str, update: UpdateTask) -> anyhow::Result<Option<Task>> {
        self.modify(|table| table.update(id, update))
    }

    fn delete(&self, id: &str) -> anyhow::Result<Option<Task>> {
        self.modify(|table| table.remove(id))
    }
}
