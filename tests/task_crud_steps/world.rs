//! Shared world state for task CRUD BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use tasks_dashboard::handler::{
    DatabaseHandle, Handler, HandlerRequest, HandlerResponse, InvocationContext,
    TASK_ID_PARAMETER, TaskHandlers,
};
use tasks_dashboard::task::adapters::memory::InMemoryTaskRepository;

/// Scenario world for task CRUD behaviour tests.
pub struct TaskWorld {
    pub handlers: TaskHandlers<InMemoryTaskRepository>,
    pub current_task_id: Option<String>,
    pub last_response: Option<HandlerResponse>,
}

impl TaskWorld {
    /// Creates a world backed by an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let database = DatabaseHandle::connected(Arc::new(InMemoryTaskRepository::new()));
        Self {
            handlers: TaskHandlers::new(&database),
            current_task_id: None,
            last_response: None,
        }
    }

    /// Replaces the handlers with ones that have no database connection.
    pub fn disconnect(&mut self) {
        self.handlers = TaskHandlers::new(&DatabaseHandle::unavailable());
    }

    /// Returns the most recent response or an error when none was recorded.
    ///
    /// # Errors
    ///
    /// Returns an error when no handler has been invoked yet.
    pub fn response(&self) -> Result<&HandlerResponse, eyre::Report> {
        self.last_response
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing handler response in scenario world"))
    }

    /// Returns the identifier of the task under test.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn task_id(&self) -> Result<String, eyre::Report> {
        self.current_task_id
            .clone()
            .ok_or_else(|| eyre::eyre!("missing task identifier in scenario world"))
    }
}

impl Default for TaskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorld {
    TaskWorld::default()
}

/// Builds a handler request from an optional body and `task_id`.
#[must_use]
pub fn request(body: Option<String>, task_id: Option<&str>) -> HandlerRequest {
    let with_body = match body {
        Some(text) => HandlerRequest::new().with_body(text),
        None => HandlerRequest::new(),
    };
    match task_id {
        Some(id) => with_body.with_path_parameter(TASK_ID_PARAMETER, id),
        None => with_body,
    }
}

/// Invokes a handler within sync step definitions.
pub fn invoke(handler: &dyn Handler, request: HandlerRequest) -> HandlerResponse {
    run_async(handler.handle(request, &InvocationContext::new()))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
