//! `PUT /edit/{task_id}`: overwrite fields of an existing task.

use super::database::DatabaseHandle;
use super::{
    Handler, HandlerError, HandlerRequest, HandlerResponse, InvocationContext, parse_body,
    path_task_id,
};
use crate::task::{
    domain::{TaskChanges, validate_payload},
    ports::TaskRepository,
};
use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::json;
use tracing::Instrument;

/// Applies the payload fields to the task named by the `task_id` path
/// parameter.
///
/// The payload must pass the same full validation as creation. Responds
/// `200 {"modified_count": n, "task_id": ...}`.
#[derive(Debug, Clone)]
pub struct UpdateTaskHandler<R>
where
    R: TaskRepository,
{
    database: DatabaseHandle<R>,
}

impl<R> UpdateTaskHandler<R>
where
    R: TaskRepository,
{
    /// Creates the handler around the injected database handle.
    #[must_use]
    pub const fn new(database: DatabaseHandle<R>) -> Self {
        Self { database }
    }

    async fn run(&self, request: &HandlerRequest) -> Result<HandlerResponse, HandlerError> {
        let service = self.database.service()?;
        let payload = parse_body(request)?;
        let fields = validate_payload(Some(&payload))?;
        let (raw_id, task_id) = path_task_id(request)?;

        let modified_count = service.update(task_id, &TaskChanges::from(fields)).await?;
        Ok(HandlerResponse::json(
            StatusCode::OK,
            &json!({ "modified_count": modified_count, "task_id": raw_id }),
        ))
    }
}

#[async_trait]
impl<R> Handler for UpdateTaskHandler<R>
where
    R: TaskRepository,
{
    async fn handle(
        &self,
        request: HandlerRequest,
        context: &InvocationContext,
    ) -> HandlerResponse {
        async {
            self.run(&request)
                .await
                .unwrap_or_else(HandlerError::into_response)
        }
        .instrument(context.span("update_task"))
        .await
    }
}
