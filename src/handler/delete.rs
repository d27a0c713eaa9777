//! `DELETE /delete/{task_id}`: permanently remove a task.

use super::database::DatabaseHandle;
use super::{
    Handler, HandlerError, HandlerRequest, HandlerResponse, InvocationContext, path_task_id,
};
use crate::task::ports::TaskRepository;
use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::json;
use tracing::Instrument;

/// Removes the task named by the `task_id` path parameter.
///
/// Responds `200 {"task_id": ...}`; a second delete of the same task
/// answers `404`.
#[derive(Debug, Clone)]
pub struct DeleteTaskHandler<R>
where
    R: TaskRepository,
{
    database: DatabaseHandle<R>,
}

impl<R> DeleteTaskHandler<R>
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
        let (raw_id, task_id) = path_task_id(request)?;
        service.delete(task_id).await?;
        Ok(HandlerResponse::json(StatusCode::OK, &json!({ "task_id": raw_id })))
    }
}

#[async_trait]
impl<R> Handler for DeleteTaskHandler<R>
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
        .instrument(context.span("delete_task"))
        .await
    }
}
