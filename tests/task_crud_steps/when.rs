//! When steps for task CRUD BDD scenarios.

use super::world::{TaskWorld, invoke, request};
use rstest_bdd_macros::when;
use serde_json::{Value, json};

#[when(r#"a task titled "{title}" with priority "{priority}" and status "{status}" is created"#)]
fn create_task(world: &mut TaskWorld, title: String, priority: String, status: String) {
    let payload = json!({
        "title": title,
        "description": "created by scenario",
        "priority": priority,
        "status": status,
    });
    let response = invoke(
        &world.handlers.create,
        request(Some(payload.to_string()), None),
    );
    if let Some(task_id) = response
        .body_json()
        .ok()
        .and_then(|body| body.get("task_id").and_then(Value::as_str).map(str::to_owned))
    {
        world.current_task_id = Some(task_id);
    }
    world.last_response = Some(response);
}

#[when(r#"the task is updated with title "{title}" and status "{status}""#)]
fn update_task(world: &mut TaskWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    let payload = json!({
        "title": title,
        "description": "seeded by scenario",
        "priority": "medium",
        "status": status,
    });
    world.last_response = Some(invoke(
        &world.handlers.update,
        request(Some(payload.to_string()), Some(&task_id)),
    ));
    Ok(())
}

#[when("the task is deleted")]
fn delete_task(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    world.last_response = Some(invoke(&world.handlers.delete, request(None, Some(&task_id))));
    Ok(())
}
