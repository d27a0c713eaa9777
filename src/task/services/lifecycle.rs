//! Service layer for task creation, listing, update and removal.

use crate::task::{
    domain::{Task, TaskChanges, TaskFields, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// No task has the requested identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The task was found but the delete removed nothing.
    #[error("task {0} was found but could not be deleted")]
    DeleteFailed(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Each operation maps to exactly one handler and performs its lookups and
/// writes as separate repository calls.
pub struct TaskService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for TaskService<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TaskService<R>
where
    R: TaskRepository,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stores a new task built from validated fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the repository rejects
    /// the insert.
    pub async fn create(&self, fields: TaskFields) -> TaskServiceResult<Task> {
        let task = Task::new(fields);
        self.repository.store(&task).await?;
        tracing::info!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Returns every stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the query fails.
    pub async fn list(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.list().await?)
    }

    /// Applies `changes` to an existing task.
    ///
    /// Returns the number of tasks whose stored values changed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist,
    /// or [`TaskServiceError::Repository`] when a repository call fails.
    pub async fn update(&self, id: TaskId, changes: &TaskChanges) -> TaskServiceResult<u64> {
        self.require(id).await?;
        let modified_count = self.repository.update(id, changes).await?;
        tracing::info!(task_id = %id, modified_count, "task updated");
        Ok(modified_count)
    }

    /// Permanently removes an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist,
    /// [`TaskServiceError::DeleteFailed`] when the lookup succeeded but the
    /// delete removed nothing, or [`TaskServiceError::Repository`] when a
    /// repository call fails.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        self.require(id).await?;
        let deleted_count = self.repository.delete(id).await?;
        if deleted_count == 0 {
            return Err(TaskServiceError::DeleteFailed(id));
        }
        tracing::info!(task_id = %id, "task deleted");
        Ok(())
    }

    async fn require(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }
}
