//! `POST /create`: validate a payload and insert a new task.

use super::database::DatabaseHandle;
use super::{
    Handler, HandlerError, HandlerRequest, HandlerResponse, InvocationContext, parse_body,
};
use crate::task::{domain::validate_payload, ports::TaskRepository};
use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::json;
use tracing::Instrument;

/// Creates a task from the request body.
///
/// Responds `201 {"task_id": ...}` with the generated identifier.
#[derive(Debug, Clone)]
pub struct CreateTaskHandler<R>
where
    R: TaskRepository,
{
    database: DatabaseHandle<R>,
}

impl<R> CreateTaskHandler<R>
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
        let task = service.create(fields).await?;
        Ok(HandlerResponse::json(
            StatusCode::CREATED,
            &json!({ "task_id": task.id().to_string() }),
        ))
    }
}

#[async_trait]
impl<R> Handler for CreateTaskHandler<R>
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
        .instrument(context.span("create_task"))
        .await
    }
}
