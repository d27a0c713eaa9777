//! Translation of handler failures into responses.

use super::envelope::HandlerResponse;
use crate::task::{
    domain::{PayloadError, TaskId},
    ports::TaskRepositoryError,
    services::TaskServiceError,
};
use axum::http::StatusCode;
use thiserror::Error;

/// Body text for every unexpected failure.
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Reasons a handler invocation did not succeed.
///
/// The `Display` text is for logs only; callers see
/// [`HandlerError::public_message`].
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The database connection was never established.
    #[error("task database is not connected")]
    DatabaseUnavailable,

    /// The request carried no body.
    #[error("request has no body")]
    MissingBody,

    /// The body is not valid JSON.
    #[error("request body is not valid JSON: {0}")]
    MalformedBody(#[source] serde_json::Error),

    /// The body decoded but failed validation.
    #[error("invalid task payload: {0}")]
    InvalidPayload(#[from] PayloadError),

    /// A required path parameter was not supplied.
    #[error("missing path parameter '{0}'")]
    MissingPathParameter(&'static str),

    /// The collection is empty.
    #[error("no tasks stored")]
    NoTasks,

    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(String),

    /// The task was found but the delete removed nothing.
    #[error("task {0} was found but nothing was deleted")]
    DeleteFailed(TaskId),

    /// The response body could not be encoded.
    #[error("failed to encode response body: {0}")]
    Encoding(#[source] serde_json::Error),

    /// A repository call failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl From<TaskServiceError> for HandlerError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::NotFound(id) => Self::TaskNotFound(id.to_string()),
            TaskServiceError::DeleteFailed(id) => Self::DeleteFailed(id),
            TaskServiceError::Repository(source) => Self::Repository(source),
        }
    }
}

impl HandlerError {
    /// Returns the response status for this failure.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingBody | Self::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            Self::NoTasks | Self::TaskNotFound(_) => StatusCode::NOT_FOUND,
            Self::DatabaseUnavailable
            | Self::MalformedBody(_)
            | Self::MissingPathParameter(_)
            | Self::DeleteFailed(_)
            | Self::Encoding(_)
            | Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the message placed in the response body.
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::MissingBody | Self::InvalidPayload(_) => "Bad Request",
            Self::NoTasks => "No tasks found",
            Self::TaskNotFound(_) => "Task not found",
            Self::DeleteFailed(_) => "Failed to delete task",
            Self::DatabaseUnavailable
            | Self::MalformedBody(_)
            | Self::MissingPathParameter(_)
            | Self::Encoding(_)
            | Self::Repository(_) => INTERNAL_SERVER_ERROR,
        }
    }

    /// Logs the failure and converts it into a response.
    #[must_use]
    pub fn into_response(self) -> HandlerResponse {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "request rejected");
        }
        HandlerResponse::error(status, self.public_message())
    }
}
