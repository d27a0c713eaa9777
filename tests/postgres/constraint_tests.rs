//! Constraint enforcement in the `PostgreSQL` adapter.

use super::helpers::{BoxError, sample_task, setup_repository};
use tasks_dashboard::task::ports::{TaskRepository, TaskRepositoryError};

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_identifier_is_rejected() -> Result<(), BoxError> {
    let Some((_schema, repository)) = setup_repository().await? else {
        return Ok(());
    };
    let task = sample_task("Once")?;
    repository.store(&task).await?;

    let result = repository.store(&task).await;

    assert!(matches!(
        result,
        Err(TaskRepositoryError::DuplicateTask(id)) if id == task.id()
    ));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_stored_status_surfaces_as_persistence_error() -> Result<(), BoxError> {
    let Some((schema, repository)) = setup_repository().await? else {
        return Ok(());
    };
    let task = sample_task("Corrupt")?;
    repository.store(&task).await?;
    schema.execute(&format!(
        "ALTER TABLE tasks DROP CONSTRAINT tasks_status_check; \
         UPDATE tasks SET status = 'archived' WHERE id = '{}'",
        task.id()
    ))?;

    let result = repository.list().await;

    assert!(matches!(result, Err(TaskRepositoryError::Persistence(_))));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn schema_rejects_empty_title() -> Result<(), BoxError> {
    let Some((schema, _repository)) = setup_repository().await? else {
        return Ok(());
    };

    let result = schema.execute(
        "INSERT INTO tasks (id, title, description, priority, status) \
         VALUES (gen_random_uuid(), '', 'd', 'low', 'todo')",
    );

    assert!(result.is_err());
    Ok(())
}
