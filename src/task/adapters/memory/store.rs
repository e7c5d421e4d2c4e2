//! In-memory task store scoped to the process lifetime.

use async_trait::async_trait;
use std::sync::{Arc, PoisonError, RwLock};

use crate::task::{
    domain::{NewTask, Task, TaskId, TaskPatch},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Tasks are kept in insertion order. Clones share the same underlying
/// collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(err: PoisonError<T>) -> TaskStoreError {
    TaskStoreError::persistence(std::io::Error::other(err.to_string()))
}

fn position_of(tasks: &[Task], id: TaskId) -> TaskStoreResult<usize> {
    tasks
        .iter()
        .position(|task| task.id() == id)
        .ok_or(TaskStoreError::NotFound(id))
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn insert(&self, new_task: NewTask) -> TaskStoreResult<Task> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        let task = Task::from_new(TaskId::new(), new_task);
        tasks.push(task.clone());
        Ok(task)
    }

    async fn list_all(&self) -> TaskStoreResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        Ok(tasks.clone())
    }

    async fn find(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        Ok(tasks.iter().find(|task| task.id() == id).cloned())
    }

    async fn apply_update(&self, id: TaskId, patch: TaskPatch) -> TaskStoreResult<Task> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        let task = tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(TaskStoreError::NotFound(id))?;
        task.apply(patch);
        Ok(task.clone())
    }

    async fn remove(&self, id: TaskId) -> TaskStoreResult<()> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        let index = position_of(&tasks, id)?;
        tasks.remove(index);
        Ok(())
    }
}
