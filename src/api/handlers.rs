//! Request dispatcher
//!
//! Matches a request against the route table, runs the operation against
//! the task store, and shapes the result into a response. Holds no state
//! between requests.

use std::sync::Arc;

use http::{Method, StatusCode};
use log::{debug, info};
use serde::Serialize;
use serde_json::Value;

use crate::core::models::{CreateTask, UpdateTask};
use crate::core::ports::TaskStore;
use crate::core::services::Validator;

use super::error::ApiError;
use super::routes::{self, Route};
use super::types::{ApiRequest, ApiResponse, LOCATION};

/// Default prefix of the `Location` header on create and update
pub const DEFAULT_LOCATION_PREFIX: &str = "/api/task";

/// Routes gateway requests to task operations
pub struct Dispatcher {
    store: Arc<dyn TaskStore>,
    validator: Validator,
    location_prefix: String,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("validator", &self.validator)
            .field("location_prefix", &self.location_prefix)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Create a dispatcher over a store and a validator
    #[must_use]
    pub fn new(store: Arc<dyn TaskStore>, validator: Validator) -> Self {
        Self {
            store,
            validator,
            location_prefix: DEFAULT_LOCATION_PREFIX.to_string(),
        }
    }

    /// Use a different prefix for `Location` headers
    #[must_use]
    pub fn with_location_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.location_prefix = prefix.into();
        self
    }

    /// Handle one request
    ///
    /// Never fails: every error becomes a client or server error response.
    #[must_use]
    pub fn dispatch(&self, request: &ApiRequest) -> ApiResponse {
        debug!("Received request {} {}", request.method, request.path);

        let matched = Method::from_bytes(request.method.as_bytes())
            .ok()
            .and_then(|method| {
                routes::match_route(&method, &request.path, &request.path_parameters)
            });
        let Some(matched) = matched else {
            debug!("No route for {} {}", request.method, request.path);
            return ApiResponse::client_error(StatusCode::NOT_FOUND);
        };

        let id = matched.id();
        let result = match matched.route {
            Route::ListTasks => self.list_tasks(),
            Route::GetTask => require_id(id).and_then(|id| self.get_task(id)),
            Route::CreateTask => self.create_task(&request.body),
            Route::CompleteTask => require_id(id).and_then(|id| self.update_task(id, UpdateTask::DONE)),
            Route::UndoTask => require_id(id).and_then(|id| self.update_task(id, UpdateTask::UNDONE)),
            Route::DeleteTask => require_id(id).and_then(|id| self.delete_task(id)),
        };

        result.unwrap_or_else(ApiError::into_response)
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// List all tasks
    pub fn list_tasks(&self) -> Result<ApiResponse, ApiError> {
        debug!("Received list tasks request");

        let tasks = self.store.list().map_err(|e| ApiError::store(&e))?;
        debug!("Fetched {} tasks", tasks.len());

        json(StatusCode::OK, &tasks)
    }

    /// Get a single task by ID
    pub fn get_task(&self, id: &str) -> Result<ApiResponse, ApiError> {
        debug!("Received get task request with id = {id}");

        let task = self
            .store
            .get(id)
            .map_err(|e| ApiError::store(&e))?
            .ok_or_else(|| ApiError::not_found(format!("Task '{id}' not found")))?;

        json(StatusCode::OK, &task)
    }

    /// Create a task from a JSON body
    ///
    /// The body must be a JSON object or `null`; `null` is treated like `{}`.
    pub fn create_task(&self, body: &str) -> Result<ApiResponse, ApiError> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| ApiError::unprocessable(format!("Can't parse body: {e}")))?;
        let request = match value {
            Value::Null => CreateTask::default(),
            object @ Value::Object(_) => serde_json::from_value::<CreateTask>(object)
                .map_err(|e| ApiError::unprocessable(format!("Can't parse body: {e}")))?,
            _ => return Err(ApiError::unprocessable("Body is not a JSON object")),
        };

        self.validator
            .validate_create(&request)
            .map_err(|e| ApiError::bad_request(format!("Invalid body: {e}")))?;
        debug!("Received create task request: {request:?}");

        let task = self.store.insert(&request).map_err(|e| ApiError::store(&e))?;
        info!("Inserted task {}", task.id);

        Ok(json(StatusCode::CREATED, &task)?.with_header(LOCATION, self.location(&task.id)))
    }

    /// Set a task's status
    ///
    /// The status comes from the route; any request body is ignored.
    pub fn update_task(&self, id: &str, update: UpdateTask) -> Result<ApiResponse, ApiError> {
        debug!("Received update task request with id = {id}, status = {}", update.status);

        let task = self
            .store
            .update(id, update)
            .map_err(|e| ApiError::store(&e))?
            .ok_or_else(|| ApiError::not_found(format!("Task '{id}' not found")))?;
        info!("Updated task {} (status = {})", task.id, task.status);

        Ok(json(StatusCode::OK, &task)?.with_header(LOCATION, self.location(&task.id)))
    }

    /// Delete a task, returning its last known state
    pub fn delete_task(&self, id: &str) -> Result<ApiResponse, ApiError> {
        debug!("Received delete task request with id = {id}");

        let task = self
            .store
            .delete(id)
            .map_err(|e| ApiError::store(&e))?
            .ok_or_else(|| ApiError::not_found(format!("Task '{id}' not found")))?;
        info!("Deleted task {}", task.id);

        json(StatusCode::OK, &task)
    }

    fn location(&self, id: &str) -> String {
        format!("{}/{id}", self.location_prefix.trim_end_matches('/'))
    }
}

fn require_id(id: Option<&str>) -> Result<&str, ApiError> {
    id.ok_or_else(|| ApiError::bad_request("Missing `id` path parameter"))
}

fn json<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> Result<ApiResponse, ApiError> {
    ApiResponse::json(status, value)
        .map_err(|e| ApiError::internal(format!("Failed to serialize response: {e}")))
}
