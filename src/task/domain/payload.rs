//! Validation of decoded request payloads for task creation and update.
//!
//! The rules run in a fixed order and the first failure wins:
//!
//! 1. the payload must be present and non-empty
//! 2. `title`, `description`, `priority` and `status` must all be present
//! 3. `title` must be a non-empty string
//! 4. `description` must be a non-empty string
//! 5. `priority` must be one of `low`, `medium`, `high`
//! 6. `status` must be one of `todo`, `in-progress`, `in-review`, `done`,
//!    `blocked`
//!
//! Values are matched exactly as decoded from JSON: no trimming, case folding
//! or type coercion takes place.

use super::{TaskDomainError, TaskFields, TaskPriority, TaskStatus};
use serde_json::{Map, Value};
use std::num::FpCategory;
use thiserror::Error;

/// Keys every task payload must carry.
pub const REQUIRED_FIELDS: [&str; 4] = ["title", "description", "priority", "status"];

/// Reasons a payload is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PayloadError {
    /// No payload, or a payload with no content.
    #[error("payload is empty")]
    Empty,

    /// The payload is not a JSON object.
    #[error("payload must be a JSON object")]
    NotAnObject,

    /// A required key is absent.
    #[error("payload is missing required field '{0}'")]
    MissingField(&'static str),

    /// `title` is not a non-empty string.
    #[error("title must be a non-empty string")]
    InvalidTitle,

    /// `description` is not a non-empty string.
    #[error("description must be a non-empty string")]
    InvalidDescription,

    /// `priority` is outside the accepted set.
    #[error("priority {0} is not one of low, medium, high")]
    InvalidPriority(String),

    /// `status` is outside the accepted set.
    #[error("status {0} is not one of todo, in-progress, in-review, done, blocked")]
    InvalidStatus(String),

    /// The task fields were rejected for a reason not tied to a payload key.
    #[error(transparent)]
    InvalidFields(TaskDomainError),
}

impl From<TaskDomainError> for PayloadError {
    fn from(err: TaskDomainError) -> Self {
        match err {
            TaskDomainError::EmptyTitle => Self::InvalidTitle,
            TaskDomainError::EmptyDescription => Self::InvalidDescription,
            other @ TaskDomainError::InvalidTaskId(_) => Self::InvalidFields(other),
        }
    }
}

/// Validates a decoded payload and extracts the task fields.
///
/// Keys other than the four task fields are ignored.
///
/// # Errors
///
/// Returns the [`PayloadError`] for the first rule the payload breaks.
pub fn validate_payload(payload: Option<&Value>) -> Result<TaskFields, PayloadError> {
    let value = payload.filter(|candidate| !is_empty(candidate));
    let Some(present) = value else {
        return Err(PayloadError::Empty);
    };
    let object = present.as_object().ok_or(PayloadError::NotAnObject)?;

    if let Some(missing) = REQUIRED_FIELDS
        .into_iter()
        .find(|field| !object.contains_key(*field))
    {
        return Err(PayloadError::MissingField(missing));
    }

    let title = non_empty_str(object, "title").ok_or(PayloadError::InvalidTitle)?;
    let description =
        non_empty_str(object, "description").ok_or(PayloadError::InvalidDescription)?;
    let priority = enum_field(object, "priority", |raw| TaskPriority::try_from(raw).ok())
        .map_err(PayloadError::InvalidPriority)?;
    let status = enum_field(object, "status", |raw| TaskStatus::try_from(raw).ok())
        .map_err(PayloadError::InvalidStatus)?;

    Ok(TaskFields::new(title, description, priority, status)?)
}

/// Boolean form of [`validate_payload`].
#[must_use]
pub fn is_valid_payload(payload: Option<&Value>) -> bool {
    validate_payload(payload).is_ok()
}

/// JSON falsiness: `null`, `false`, zero, and empty strings, arrays or
/// objects.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number
            .as_f64()
            .is_some_and(|n| n.classify() == FpCategory::Zero),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
    }
}

fn non_empty_str<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object
        .get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

/// Parses a string-valued enum field, returning the raw JSON text on failure.
fn enum_field<T>(
    object: &Map<String, Value>,
    key: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, String> {
    let raw = object.get(key).unwrap_or(&Value::Null);
    raw.as_str().and_then(parse).ok_or_else(|| raw.to_string())
}
