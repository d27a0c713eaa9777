//! The database capability injected into every handler.

use super::error::HandlerError;
use crate::task::{ports::TaskRepository, services::TaskService};
use std::fmt;
use std::sync::Arc;

/// Outcome of the one-time database connection made at startup.
///
/// A failed connection is recorded rather than retried: handlers built from
/// an unavailable handle answer every invocation with a server error.
pub struct DatabaseHandle<R>
where
    R: TaskRepository,
{
    service: Option<TaskService<R>>,
}

impl<R> DatabaseHandle<R>
where
    R: TaskRepository,
{
    /// Wraps an established repository.
    #[must_use]
    pub const fn connected(repository: Arc<R>) -> Self {
        Self {
            service: Some(TaskService::new(repository)),
        }
    }

    /// Records that no connection could be established.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self { service: None }
    }

    /// Records the outcome of a connection attempt, logging either way.
    #[must_use]
    pub fn from_connection<E: fmt::Display>(outcome: Result<R, E>) -> Self {
        match outcome {
            Ok(repository) => {
                tracing::info!("database connection successful");
                Self::connected(Arc::new(repository))
            }
            Err(err) => {
                tracing::error!(error = %err, "database connection error");
                Self::unavailable()
            }
        }
    }

    /// Returns `true` when the connection was established.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.service.is_some()
    }

    /// Returns the task service.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::DatabaseUnavailable`] when the connection was
    /// never established.
    pub const fn service(&self) -> Result<&TaskService<R>, HandlerError> {
        match &self.service {
            Some(service) => Ok(service),
            None => Err(HandlerError::DatabaseUnavailable),
        }
    }
}

impl<R> Clone for DatabaseHandle<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

impl<R> fmt::Debug for DatabaseHandle<R>
where
    R: TaskRepository,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseHandle")
            .field("connected", &self.is_connected())
            .finish()
    }
}
