//! Application services for task management.

mod repository;

pub use repository::{
    CreateTaskRequest, TaskRepository, TaskRepositoryError, TaskRepositoryResult,
    UpdateTaskRequest,
};
