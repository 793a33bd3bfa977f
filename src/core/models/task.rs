//! Task model
//!
//! A task is a single to-do item. The store owns it; the API layer only
//! passes it through.

use serde::{Deserialize, Deserializer, Serialize};

/// Prefix for store-assigned task identifiers
pub const TASK_ID_PREFIX: &str = "TSK";

/// A persisted to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque identifier assigned by the store (e.g. `TSK-3`)
    pub id: String,

    /// What needs to be done
    pub task: String,

    /// Whether the task is done
    #[serde(default)]
    pub status: bool,
}

impl Task {
    /// Create a new, not-yet-done task
    #[must_use]
    pub fn new(id: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            task: task.into(),
            status: false,
        }
    }

    /// Format the identifier for the `n`th task a store hands out
    #[must_use]
    pub fn id_for(n: u64) -> String {
        format!("{TASK_ID_PREFIX}-{n}")
    }

    /// Parse the sequence number back out of a store-assigned identifier
    ///
    /// Returns `None` for identifiers that were not assigned by `id_for`.
    #[must_use]
    pub fn sequence_of(id: &str) -> Option<u64> {
        id.strip_prefix(TASK_ID_PREFIX)
            .and_then(|rest| rest.strip_prefix('-'))
            .and_then(|n| n.parse().ok())
    }
}

/// Body of a create request
///
/// A missing or null `task` field deserializes as empty so that it is
/// rejected by validation rather than by the JSON decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTask {
    /// Task text
    #[serde(default, deserialize_with = "null_as_empty")]
    pub task: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl CreateTask {
    /// Create a request for the given text
    #[must_use]
    pub fn new(task: impl Into<String>) -> Self {
        Self { task: task.into() }
    }
}

/// Status change applied by an update
///
/// Derived from the route that matched, never from the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTask {
    /// Target status
    pub status: bool,
}

impl UpdateTask {
    /// Mark the task done
    pub const DONE: Self = Self { status: true };

    /// Mark the task not done
    pub const UNDONE: Self = Self { status: false };
}
