//! Application services for task operations.

mod lifecycle;

pub use lifecycle::{TaskService, TaskServiceError, TaskServiceResult};
