//! Route table for the task API.

use axum::Router;
use axum::routing::get;

use super::AppState;
use super::handlers::{
    create_task, delete_task, health_check, list_tasks, read_task, update_task,
};

/// Creates the router with every task route bound to `state`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(read_task).put(update_task).delete(delete_task),
        )
        .route("/health", get(health_check))
        .with_state(state)
}
