//! Request handlers for the task routes.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use super::{AppState, ApiError, CreateTaskBody, HealthResponse, UpdateTaskBody};
use crate::task::domain::{Task, TaskId, order_for_listing};

/// `GET /tasks`: every task, `TODO` before `DONE`.
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let mut tasks = state.repository().find_all().await?;
    order_for_listing(&mut tasks);
    Ok(Json(tasks))
}

/// `POST /tasks`: creates a task and returns it with its identifier.
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let Json(body) = payload?;
    let task = state.repository().create(body.into()).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `GET /tasks/{id}`.
pub async fn read_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let id = TaskId::parse(&raw_id)?;
    let task = state.repository().find_by_id(id).await?;
    Ok(Json(task))
}

/// `PUT /tasks/{id}`: applies the fields present in the body.
///
/// An unknown id is reported before a missing or undecodable body.
pub async fn update_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateTaskBody>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let id = TaskId::parse(&raw_id)?;
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            state.repository().find_by_id(id).await?;
            return Err(rejection.into());
        }
    };
    let task = state.repository().update_by_id(id, body.into()).await?;
    Ok(Json(task))
}

/// `DELETE /tasks/{id}`.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = TaskId::parse(&raw_id)?;
    state.repository().delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /health`.
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
    })
}
