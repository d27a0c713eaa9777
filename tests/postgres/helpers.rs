//! Shared test helpers for `PostgreSQL` integration tests.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use tasks_dashboard::task::{
    adapters::postgres::PostgresTaskRepository,
    domain::{Task, TaskFields, TaskPriority, TaskStatus},
};
use uuid::Uuid;

/// Boxed error type for fallible helpers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Environment variable naming the server used for these tests.
pub const TEST_DATABASE_URL_ENV: &str = "TASKS_TEST_DATABASE_URL";

/// SQL to create the task table.
pub const CREATE_TASKS_SQL: &str =
    include_str!("../../migrations/2026-10-19-000000_create_tasks/up.sql");

/// A schema that exists for the lifetime of one test.
///
/// The schema and everything in it are dropped when the value is dropped.
pub struct TestSchema {
    base_url: String,
    name: String,
}

impl TestSchema {
    /// Returns a connection URL whose sessions resolve tables in this schema.
    #[must_use]
    pub fn scoped_url(&self) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{separator}options=-csearch_path%3D{}",
            self.base_url, self.name
        )
    }

    /// Executes raw SQL inside this schema.
    ///
    /// # Errors
    ///
    /// Returns an error when the connection or statement fails.
    pub fn execute(&self, sql: &str) -> Result<(), BoxError> {
        let mut connection = PgConnection::establish(&self.scoped_url())?;
        connection.batch_execute(sql)?;
        Ok(())
    }
}

impl Drop for TestSchema {
    fn drop(&mut self) {
        if let Ok(mut connection) = PgConnection::establish(&self.base_url) {
            let statement = format!("DROP SCHEMA IF EXISTS {} CASCADE", self.name);
            if let Err(err) = connection.batch_execute(&statement) {
                tracing::warn!(error = %err, schema = %self.name, "failed to drop test schema");
            }
        }
    }
}

/// Creates a fresh schema holding the task table and a repository over it.
///
/// Returns `Ok(None)` when no test database is configured.
///
/// # Errors
///
/// Returns an error when schema creation or the repository connection fails.
pub async fn setup_repository() -> Result<Option<(TestSchema, PostgresTaskRepository)>, BoxError>
{
    let Ok(base_url) = std::env::var(TEST_DATABASE_URL_ENV) else {
        return Ok(None);
    };
    let schema = TestSchema {
        base_url,
        name: format!("tasks_test_{}", Uuid::new_v4().simple()),
    };

    let create_statement = format!("CREATE SCHEMA {}", schema.name);
    let admin_url = schema.base_url.clone();
    tokio::task::spawn_blocking(move || -> Result<(), BoxError> {
        let mut connection = PgConnection::establish(&admin_url)?;
        connection.batch_execute(&create_statement)?;
        Ok(())
    })
    .await??;

    let scoped_url = schema.scoped_url();
    tokio::task::spawn_blocking(move || -> Result<(), BoxError> {
        let mut connection = PgConnection::establish(&scoped_url)?;
        connection.batch_execute(CREATE_TASKS_SQL)?;
        Ok(())
    })
    .await??;

    let repository = PostgresTaskRepository::connect(schema.scoped_url()).await?;
    Ok(Some((schema, repository)))
}

/// Builds a task with valid fields.
///
/// # Errors
///
/// Returns an error when `title` is empty.
pub fn sample_task(title: &str) -> Result<Task, BoxError> {
    let fields = TaskFields::new(
        title,
        "stored in postgres",
        TaskPriority::High,
        TaskStatus::Todo,
    )?;
    Ok(Task::new(fields))
}
