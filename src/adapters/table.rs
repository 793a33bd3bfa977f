//! In-memory task table shared by the store adapters

use serde::{Deserialize, Serialize};

use crate::core::models::{CreateTask, Task, UpdateTask};

/// Tasks in creation order plus the ID counter
///
/// The counter only grows, so IDs of deleted tasks are never handed out
/// again.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskTable {
    /// Sequence number of the last assigned ID
    #[serde(default)]
    pub next_id: u64,

    /// Tasks in creation order
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl TaskTable {
    /// Build a table from existing tasks, continuing after the highest ID
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks
            .iter()
            .filter_map(|t| Task::sequence_of(&t.id))
            .max()
            .unwrap_or(0);
        Self { next_id, tasks }
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn insert(&mut self, request: &CreateTask) -> Task {
        // Files edited by hand may hold IDs past the counter
        self.next_id += 1;
        let mut id = Task::id_for(self.next_id);
        while self.get(&id).is_some() {
            self.next_id += 1;
            id = Task::id_for(self.next_id);
        }

        let task = Task::new(id, request.task.clone());
        self.tasks.push(task.clone());
        task
    }

    pub fn update(&mut self, id: &str, update: UpdateTask) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.status = update.status;
        Some(task.clone())
    }

    pub fn remove(&mut self, id: &str) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(index))
    }
}
