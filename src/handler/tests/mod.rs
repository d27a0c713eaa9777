//! Unit tests for the task handlers.
//!
//! Handlers are driven directly with [`HandlerRequest`] values against the
//! in-memory repository; repository faults are simulated with mocks.


use super::{DatabaseHandle, HandlerRequest, HandlerResponse, TASK_ID_PARAMETER, TaskHandlers};
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskFields, TaskPriority, TaskStatus},
};
use serde_json::Value;
use std::sync::Arc;

pub(super) fn handlers_with(tasks: Vec<Task>) -> TaskHandlers<InMemoryTaskRepository> {
    let repository = InMemoryTaskRepository::with_tasks(tasks);
    TaskHandlers::new(&DatabaseHandle::connected(Arc::new(repository)))
}

pub(super) fn stored_task(title: &str) -> Task {
    Task::new(
        TaskFields::new(title, "details", TaskPriority::Medium, TaskStatus::Todo)
            .expect("valid task fields"),
    )
}

pub(super) fn json_request(body: &Value) -> HandlerRequest {
    HandlerRequest::new().with_body(body.to_string())
}

pub(super) fn for_task(request: HandlerRequest, task_id: impl Into<String>) -> HandlerRequest {
    request.with_path_parameter(TASK_ID_PARAMETER, task_id)
}

pub(super) fn body_of(response: &HandlerResponse) -> Value {
    response.body_json().expect("response body is JSON")
}
