//! Then steps for task CRUD BDD scenarios.

use super::world::{TaskWorld, invoke, request};
use rstest_bdd_macros::then;
use serde_json::{Value, json};

fn ensure_status(world: &TaskWorld, expected: u64) -> Result<(), eyre::Report> {
    let response = world.response()?;
    eyre::ensure!(
        u64::from(response.status_code()) == expected,
        "expected status {expected}, found {}: {}",
        response.status_code(),
        response.body()
    );
    Ok(())
}

#[then("the create response status is {status:u64}")]
fn create_status(world: &TaskWorld, status: u64) -> Result<(), eyre::Report> {
    ensure_status(world, status)
}

#[then("the delete response status is {status:u64}")]
fn delete_status(world: &TaskWorld, status: u64) -> Result<(), eyre::Report> {
    ensure_status(world, status)
}

#[then(r#"the response error is "{message}""#)]
fn response_error(world: &TaskWorld, message: String) -> Result<(), eyre::Report> {
    let body = world.response()?.body_json()?;
    eyre::ensure!(
        body == json!({ "error": message }),
        "unexpected error body: {body}"
    );
    Ok(())
}

#[then("the update response reports {count:u64} modified task")]
fn update_modified(world: &TaskWorld, count: u64) -> Result<(), eyre::Report> {
    ensure_status(world, 200)?;
    let body = world.response()?.body_json()?;
    let task_id = world.task_id()?;
    eyre::ensure!(
        body == json!({ "modified_count": count, "task_id": task_id }),
        "unexpected update body: {body}"
    );
    Ok(())
}

#[then("listing tasks returns {count:u64} task")]
fn listing_count(world: &TaskWorld, count: u64) -> Result<(), eyre::Report> {
    let response = invoke(&world.handlers.get, request(None, None));
    eyre::ensure!(response.status_code() == 200, "list: {}", response.body());
    let body = response.body_json()?;
    let listed = u64::try_from(body.as_array().map_or(0, Vec::len))?;
    eyre::ensure!(listed == count, "expected {count} tasks, found {listed}");
    Ok(())
}

#[then("listing tasks answers {status:u64}")]
fn listing_status(world: &TaskWorld, status: u64) -> Result<(), eyre::Report> {
    let response = invoke(&world.handlers.get, request(None, None));
    eyre::ensure!(
        u64::from(response.status_code()) == status,
        "expected {status}, found {}",
        response.status_code()
    );
    Ok(())
}

#[then(r#"the listed task has title "{title}""#)]
fn listed_title(world: &TaskWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    let response = invoke(&world.handlers.get, request(None, None));
    let body = response.body_json()?;
    let task = body
        .as_array()
        .and_then(|tasks| {
            tasks
                .iter()
                .find(|task| task.get("id").and_then(Value::as_str) == Some(task_id.as_str()))
        })
        .ok_or_else(|| eyre::eyre!("task {task_id} not listed: {body}"))?;
    eyre::ensure!(
        task.get("title").and_then(Value::as_str) == Some(title.as_str()),
        "unexpected task: {task}"
    );
    Ok(())
}
