//! Request handlers for the task resource.
//!
//! Each handler is an independent unit: it receives one [`HandlerRequest`],
//! performs one task operation through its injected [`DatabaseHandle`], and
//! always answers with a [`HandlerResponse`]. Failures never escape a
//! handler; [`HandlerError::into_response`] is the single point where error
//! kinds become status codes.
//!
//! | Route | Handler | Success |
//! |---|---|---|
//! | `GET /` | [`GetTasksHandler`] | `200` + array of tasks |
//! | `POST /create` | [`CreateTaskHandler`] | `201` + `{task_id}` |
//! | `PUT /edit/{task_id}` | [`UpdateTaskHandler`] | `200` + `{modified_count, task_id}` |
//! | `DELETE /delete/{task_id}` | [`DeleteTaskHandler`] | `200` + `{task_id}` |

mod create;
mod database;
mod delete;
mod envelope;
mod error;
mod get;
pub mod http;
mod update;

pub use create::CreateTaskHandler;
pub use database::DatabaseHandle;
pub use delete::DeleteTaskHandler;
pub use envelope::{
    APPLICATION_JSON, CONTENT_TYPE, HandlerRequest, HandlerResponse, InvocationContext,
};
pub use error::{HandlerError, INTERNAL_SERVER_ERROR};
pub use get::GetTasksHandler;
pub use update::UpdateTaskHandler;

use crate::task::{domain::TaskId, ports::TaskRepository};
use async_trait::async_trait;
use serde_json::Value;

/// Name of the path parameter identifying a task.
pub const TASK_ID_PARAMETER: &str = "task_id";

/// One independently invocable operation.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Handles a single invocation.
    ///
    /// Never fails: every error is converted into a response.
    async fn handle(&self, request: HandlerRequest, context: &InvocationContext)
    -> HandlerResponse;
}

/// The four task handlers sharing one database handle.
#[derive(Debug, Clone)]
pub struct TaskHandlers<R>
where
    R: TaskRepository,
{
    /// `POST /create`.
    pub create: CreateTaskHandler<R>,
    /// `GET /`.
    pub get: GetTasksHandler<R>,
    /// `PUT /edit/{task_id}`.
    pub update: UpdateTaskHandler<R>,
    /// `DELETE /delete/{task_id}`.
    pub delete: DeleteTaskHandler<R>,
}

impl<R> TaskHandlers<R>
where
    R: TaskRepository,
{
    /// Builds every handler around `database`.
    #[must_use]
    pub fn new(database: &DatabaseHandle<R>) -> Self {
        Self {
            create: CreateTaskHandler::new(database.clone()),
            get: GetTasksHandler::new(database.clone()),
            update: UpdateTaskHandler::new(database.clone()),
            delete: DeleteTaskHandler::new(database.clone()),
        }
    }
}

/// Decodes the request body.
fn parse_body(request: &HandlerRequest) -> Result<Value, HandlerError> {
    let body = request.body().ok_or(HandlerError::MissingBody)?;
    serde_json::from_str(body).map_err(HandlerError::MalformedBody)
}

/// Reads the `task_id` path parameter, returning it verbatim alongside the
/// parsed identifier.
///
/// A value that is not a task identifier cannot name a stored task and is
/// reported as not found.
fn path_task_id(request: &HandlerRequest) -> Result<(String, TaskId), HandlerError> {
    let raw = request
        .path_parameter(TASK_ID_PARAMETER)
        .ok_or(HandlerError::MissingPathParameter(TASK_ID_PARAMETER))?;
    let task_id = raw
        .parse::<TaskId>()
        .map_err(|_| HandlerError::TaskNotFound(raw.to_owned()))?;
    Ok((raw.to_owned(), task_id))
}

#[cfg(test)]
mod tests;
