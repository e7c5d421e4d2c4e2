//! When steps for task lifecycle BDD scenarios.

use super::world::TaskLifecycleWorld;
use axum::http::{Method, StatusCode};
use rstest_bdd_macros::when;
use serde_json::json;

#[when(r#"a task titled "{title}" described as "{description}" is created"#)]
fn create_task(
    world: &mut TaskLifecycleWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    let body = json!({ "title": title, "description": description });
    world.send(Method::POST, "/tasks", Some(&body))?;
    if world.last_status == Some(StatusCode::CREATED) {
        world.current_task_id = world
            .last_body
            .get("id")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned);
    }
    Ok(())
}

#[when("the task is read")]
fn read_task(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let uri = world.current_task_uri()?;
    world.send(Method::GET, &uri, None)
}

#[when("the task is deleted")]
fn delete_task(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let uri = world.current_task_uri()?;
    world.send(Method::DELETE, &uri, None)
}

#[when(r#"the task status is updated to "{status}""#)]
fn update_status(world: &mut TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let uri = world.current_task_uri()?;
    world.send(Method::PUT, &uri, Some(&json!({ "status": status })))
}

#[when("the tasks are listed")]
fn list_tasks(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    world.send(Method::GET, "/tasks", None)
}
