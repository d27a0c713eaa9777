//! `GET /`: list every stored task.

use super::database::DatabaseHandle;
use super::{Handler, HandlerError, HandlerRequest, HandlerResponse, InvocationContext};
use crate::task::ports::TaskRepository;
use async_trait::async_trait;
use axum::http::StatusCode;
use tracing::Instrument;

/// Returns all tasks as a JSON array.
///
/// An empty collection is reported as `404 {"error": "No tasks found"}`.
#[derive(Debug, Clone)]
pub struct GetTasksHandler<R>
where
    R: TaskRepository,
{
    database: DatabaseHandle<R>,
}

impl<R> GetTasksHandler<R>
where
    R: TaskRepository,
{
    /// Creates the handler around the injected database handle.
    #[must_use]
    pub const fn new(database: DatabaseHandle<R>) -> Self {
        Self { database }
    }

    async fn run(&self) -> Result<HandlerResponse, HandlerError> {
        let service = self.database.service()?;
        let tasks = service.list().await?;
        if tasks.is_empty() {
            return Err(HandlerError::NoTasks);
        }
        let body = serde_json::to_string(&tasks).map_err(HandlerError::Encoding)?;
        tracing::debug!(count = tasks.len(), "tasks listed");
        Ok(HandlerResponse::encoded(StatusCode::OK, body))
    }
}

#[async_trait]
impl<R> Handler for GetTasksHandler<R>
where
    R: TaskRepository,
{
    async fn handle(
        &self,
        _request: HandlerRequest,
        context: &InvocationContext,
    ) -> HandlerResponse {
        async { self.run().await.unwrap_or_else(HandlerError::into_response) }
            .instrument(context.span("get_tasks"))
            .await
    }
}
