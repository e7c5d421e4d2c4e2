//! Repository façade validating task input and normalizing store failures.

use crate::task::{
    domain::{
        NewTask, Task, TaskDescription, TaskDomainError, TaskId, TaskPatch, TaskStatus, TaskTitle,
    },
    ports::{TaskStore, TaskStoreError},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    status: Option<TaskStatus>,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: None,
        }
    }

    /// Sets the initial status; [`TaskStatus::Todo`] applies otherwise.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    fn validate(self) -> Result<NewTask, TaskDomainError> {
        let title = TaskTitle::new(self.title)?;
        let description = TaskDescription::new(self.description)?;
        Ok(NewTask::new(title, description).with_status(self.status.unwrap_or_default()))
    }
}

/// Request payload for a partial task update.
///
/// Only fields that were set are applied; unset fields keep their stored
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
}

impl UpdateTaskRequest {
    /// Creates an empty update request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    fn validate(self) -> Result<TaskPatch, TaskDomainError> {
        Ok(TaskPatch {
            title: self.title.map(TaskTitle::new).transpose()?,
            description: self.description.map(TaskDescription::new).transpose()?,
            status: self.status,
        })
    }
}

/// Errors returned by [`TaskRepository`] operations.
#[derive(Debug, Error)]
pub enum TaskRepositoryError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// No task has the requested identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The underlying store failed.
    #[error(transparent)]
    Storage(TaskStoreError),
}

impl From<TaskStoreError> for TaskRepositoryError {
    fn from(err: TaskStoreError) -> Self {
        match err {
            TaskStoreError::NotFound(id) => Self::NotFound(id),
            other @ TaskStoreError::Persistence(_) => Self::Storage(other),
        }
    }
}

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task repository façade over a [`TaskStore`].
///
/// Holds no state beyond a shared handle to the store, so clones are cheap
/// and observe the same tasks.
pub struct TaskRepository<S>
where
    S: TaskStore + ?Sized,
{
    store: Arc<S>,
}

impl<S> Clone for TaskRepository<S>
where
    S: TaskStore + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> TaskRepository<S>
where
    S: TaskStore + ?Sized,
{
    /// Creates a repository over the given store.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Validates and stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Validation`] when the title or
    /// description violate their length constraints, or
    /// [`TaskRepositoryError::Storage`] when the store rejects the insert.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn create(&self, request: CreateTaskRequest) -> TaskRepositoryResult<Task> {
        let new_task = request.validate()?;
        let task = self.store.insert(new_task).await?;
        tracing::debug!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Returns every task in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Storage`] when the store fails.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        Ok(self.store.list_all().await?)
    }

    /// Returns the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task has the
    /// identifier.
    #[tracing::instrument(level = "debug", skip_all, fields(task_id = %id))]
    pub async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Task> {
        self.store
            .find(id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(id))
    }

    /// Applies a partial update to the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Validation`] when a supplied field is
    /// invalid, or [`TaskRepositoryError::NotFound`] when no task has the
    /// identifier.
    #[tracing::instrument(level = "debug", skip_all, fields(task_id = %id))]
    pub async fn update_by_id(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskRepositoryResult<Task> {
        let patch = request.validate()?;
        Ok(self.store.apply_update(id, patch).await?)
    }

    /// Deletes the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task has the
    /// identifier.
    #[tracing::instrument(level = "debug", skip_all, fields(task_id = %id))]
    pub async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.store.remove(id).await?;
        tracing::debug!("task deleted");
        Ok(())
    }
}
