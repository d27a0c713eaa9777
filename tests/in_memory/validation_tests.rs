//! Payload rejection shared by the create and update handlers.

use super::helpers::{TestHandlers, create_task, handlers, invoke, list_tasks, task_payload};
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[case::empty(json!({}))]
#[case::missing_title(json!({"description": "d", "priority": "low", "status": "todo"}))]
#[case::blank_description(
    json!({"title": "t", "description": "", "priority": "low", "status": "todo"})
)]
#[case::capitalised_priority(task_payload("t", "Low", "todo"))]
#[case::underscore_status(task_payload("t", "low", "in_progress"))]
#[case::numeric_title(
    json!({"title": 5, "description": "d", "priority": "low", "status": "todo"})
)]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_payloads_leave_store_untouched(
    handlers: TestHandlers,
    #[case] payload: Value,
) -> Result<(), eyre::Report> {
    let existing = create_task(&handlers, &task_payload("Keep", "medium", "todo")).await?;

    let created = invoke(&handlers.create, Some(&payload), None).await;
    let updated = invoke(&handlers.update, Some(&payload), Some(&existing)).await;

    for response in [&created, &updated] {
        eyre::ensure!(
            response.status_code() == 400,
            "expected 400, got {}",
            response.status_code()
        );
        eyre::ensure!(
            response.body_json()? == json!({ "error": "Bad Request" }),
            "unexpected body: {}",
            response.body()
        );
    }

    let (_, body) = list_tasks(&handlers).await?;
    eyre::ensure!(
        body.as_array().map(Vec::len) == Some(1),
        "store changed: {body}"
    );
    eyre::ensure!(body[0]["title"] == "Keep", "task changed: {body}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_keys_are_not_stored(handlers: TestHandlers) -> Result<(), eyre::Report> {
    let mut payload = task_payload("Extra", "low", "todo");
    if let Some(object) = payload.as_object_mut() {
        object.insert("assignee".to_owned(), json!("alice"));
    }

    create_task(&handlers, &payload).await?;
    let (_, body) = list_tasks(&handlers).await?;

    eyre::ensure!(
        body[0].get("assignee").is_none(),
        "unknown key was stored: {body}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_status_value_is_accepted(handlers: TestHandlers) -> Result<(), eyre::Report> {
    for status in ["todo", "in-progress", "in-review", "done", "blocked"] {
        create_task(&handlers, &task_payload(status, "high", status)).await?;
    }

    let (_, body) = list_tasks(&handlers).await?;

    eyre::ensure!(
        body.as_array().map(Vec::len) == Some(5),
        "expected five tasks: {body}"
    );
    Ok(())
}
