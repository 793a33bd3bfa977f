//! Request validation
//!
//! The validator is built once at startup from configuration and handed to
//! the dispatcher. It holds no mutable state, so one instance serves every
//! request.

use thiserror::Error;

use crate::core::models::CreateTask;

/// A request field that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required field missing or empty
    #[error("field `{0}` is required")]
    Required(&'static str),

    /// Field longer than the configured limit
    #[error("field `{field}` is {len} characters, limit is {max}")]
    TooLong {
        /// Field name
        field: &'static str,
        /// Actual length in characters
        len: usize,
        /// Configured limit
        max: usize,
    },
}

/// Stateless validation rules for request bodies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    max_task_length: Option<usize>,
}

impl Validator {
    /// Validator with only the required-field rules
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_task_length: None,
        }
    }

    /// Also reject task text longer than `max` characters
    #[must_use]
    pub const fn with_max_task_length(mut self, max: usize) -> Self {
        self.max_task_length = Some(max);
        self
    }

    /// Configured length limit, if any
    #[must_use]
    pub const fn max_task_length(&self) -> Option<usize> {
        self.max_task_length
    }

    /// Validate a create request
    ///
    /// Only the empty string counts as missing; whitespace is text.
    pub fn validate_create(&self, request: &CreateTask) -> Result<(), ValidationError> {
        if request.task.is_empty() {
            return Err(ValidationError::Required("task"));
        }

        if let Some(max) = self.max_task_length {
            let len = request.task.chars().count();
            if len > max {
                return Err(ValidationError::TooLong {
                    field: "task",
                    len,
                    max,
                });
            }
        }

        Ok(())
    }
}
