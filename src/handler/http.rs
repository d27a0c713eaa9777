//! HTTP adapter mounting the task handlers on an `axum` router.
//!
//! Each route converts the incoming request into a [`HandlerRequest`],
//! invokes the matching handler, and copies the [`HandlerResponse`] back onto
//! the wire unchanged.

use super::{
    Handler, HandlerRequest, HandlerResponse, InvocationContext, TASK_ID_PARAMETER, TaskHandlers,
};
use crate::task::ports::TaskRepository;
use axum::{
    Router,
    body::Body,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Header carrying the caller's request identifier.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

type SharedHandlers<R> = Arc<TaskHandlers<R>>;

/// Builds the router for the four task routes.
pub fn router<R>(handlers: TaskHandlers<R>) -> Router
where
    R: TaskRepository + 'static,
{
    Router::new()
        .route("/", get(list_route::<R>))
        .route("/create", post(create_route::<R>))
        .route("/edit/{task_id}", put(update_route::<R>))
        .route("/delete/{task_id}", delete(delete_route::<R>))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(handlers))
}

async fn list_route<R>(State(handlers): State<SharedHandlers<R>>, headers: HeaderMap) -> Response
where
    R: TaskRepository + 'static,
{
    invoke(&handlers.get, HandlerRequest::new(), &headers).await
}

async fn create_route<R>(
    State(handlers): State<SharedHandlers<R>>,
    headers: HeaderMap,
    body: String,
) -> Response
where
    R: TaskRepository + 'static,
{
    invoke(&handlers.create, request_with_body(body), &headers).await
}

async fn update_route<R>(
    State(handlers): State<SharedHandlers<R>>,
    Path(task_id): Path<String>,
    headers: HeaderMap,
    body: String,
) -> Response
where
    R: TaskRepository + 'static,
{
    let request = request_with_body(body).with_path_parameter(TASK_ID_PARAMETER, task_id);
    invoke(&handlers.update, request, &headers).await
}

async fn delete_route<R>(
    State(handlers): State<SharedHandlers<R>>,
    Path(task_id): Path<String>,
    headers: HeaderMap,
) -> Response
where
    R: TaskRepository + 'static,
{
    let request = HandlerRequest::new().with_path_parameter(TASK_ID_PARAMETER, task_id);
    invoke(&handlers.delete, request, &headers).await
}

/// An empty HTTP body is an absent body.
fn request_with_body(body: String) -> HandlerRequest {
    if body.is_empty() {
        HandlerRequest::new()
    } else {
        HandlerRequest::new().with_body(body)
    }
}

async fn invoke<H>(handler: &H, request: HandlerRequest, headers: &HeaderMap) -> Response
where
    H: Handler + ?Sized,
{
    let context = context_from(headers);
    let response = handler.handle(request, &context).await;
    into_http_response(&response)
}

fn context_from(headers: &HeaderMap) -> InvocationContext {
    let request_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok());
    match request_id {
        Some(id) => InvocationContext::new().with_request_id(id),
        None => InvocationContext::new(),
    }
}

fn into_http_response(response: &HandlerResponse) -> Response {
    let status =
        StatusCode::from_u16(response.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let builder = response
        .headers()
        .iter()
        .fold(Response::builder().status(status), |builder, (name, value)| {
            builder.header(name.as_str(), value.as_str())
        });
    builder
        .body(Body::from(response.body().to_owned()))
        .unwrap_or_else(|err| {
            tracing::error!(error = %err, "failed to build HTTP response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        })
}
