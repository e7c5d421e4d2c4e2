//! HTTP surface for the task manager.
//!
//! Binds the task routes to a shared [`TaskRepository`] and maps its typed
//! failures to status codes.
//!
//! | Method | Path | Success | Failure |
//! |--------|------|---------|---------|
//! | GET | /tasks | 200, tasks with `TODO` before `DONE` | 500 |
//! | POST | /tasks | 201, created task | 422 |
//! | GET | /tasks/{id} | 200, task | 404, 422 |
//! | PUT | /tasks/{id} | 200, merged task | 404, 422 |
//! | DELETE | /tasks/{id} | 204 | 404, 422 |
//! | GET | /health | 200 | |

mod dto;
mod error;
mod handlers;
mod routes;

pub use dto::{CreateTaskBody, HealthResponse, UpdateTaskBody};
pub use error::{ApiError, ErrorResponse};
pub use routes::create_router;

use crate::task::{ports::TaskStore, services::TaskRepository};
use std::sync::Arc;

/// Repository type shared by every request handler.
pub type SharedTaskRepository = TaskRepository<dyn TaskStore>;

/// State injected into request handlers.
#[derive(Clone)]
pub struct AppState {
    repository: SharedTaskRepository,
}

impl AppState {
    /// Creates handler state over the given store.
    #[must_use]
    pub const fn new(store: Arc<dyn TaskStore>) -> Self {
        Self {
            repository: TaskRepository::new(store),
        }
    }

    /// Returns the task repository.
    #[must_use]
    pub const fn repository(&self) -> &SharedTaskRepository {
        &self.repository
    }
}
