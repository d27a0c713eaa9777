//! Domain model for the task resource.
//!
//! A task is a flat record of four caller-supplied fields plus a generated
//! identifier. Validation of inbound payloads lives here so that the create
//! and update paths share one set of rules.

mod error;
mod ids;
mod payload;
mod task;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use payload::{PayloadError, REQUIRED_FIELDS, is_valid_payload, validate_payload};
pub use task::{PersistedTaskData, Task, TaskChanges, TaskFields, TaskPriority, TaskStatus};
