//! Diesel row models for task persistence.

use super::schema::tasks;
use crate::task::domain::TaskChanges;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Priority in storage form.
    pub priority: String,
    /// Status in storage form.
    pub status: String,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Priority in storage form.
    pub priority: String,
    /// Status in storage form.
    pub status: String,
}

/// Partial update of a task row; `None` columns are left untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement priority.
    pub priority: Option<String>,
    /// Replacement status.
    pub status: Option<String>,
}

impl From<&TaskChanges> for TaskChangeset {
    fn from(changes: &TaskChanges) -> Self {
        Self {
            title: changes.title.clone(),
            description: changes.description.clone(),
            priority: changes.priority.map(|priority| priority.as_str().to_owned()),
            status: changes.status.map(|status| status.as_str().to_owned()),
        }
    }
}
