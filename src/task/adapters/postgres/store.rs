//! `PostgreSQL` store implementation for task persistence.
//!
//! Every operation checks a connection out of the pool inside
//! `spawn_blocking` and returns it when the closure exits. Mutating
//! operations run inside a single transaction that commits on success and
//! rolls back on any error.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{
        NewTask, PersistedTaskData, Task, TaskDescription, TaskId, TaskPatch, TaskStatus,
        TaskTitle,
    },
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error as DieselError;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Idempotent DDL creating the `tasks` table.
pub const TASKS_SCHEMA_SQL: &str =
    include_str!("../../../../migrations/2020-06-01-000000_create_tasks/up.sql");

/// `PostgreSQL`-backed task store.
#[derive(Debug, Clone)]
pub struct PostgresTaskStore {
    pool: TaskPgPool,
}

impl PostgresTaskStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskStoreError::persistence)?
    }
}

/// Applies [`TASKS_SCHEMA_SQL`] through the store's pool.
///
/// # Errors
///
/// Returns [`TaskStoreError::Persistence`] when no connection can be
/// acquired or the DDL fails.
pub async fn ensure_schema(store: &PostgresTaskStore) -> TaskStoreResult<()> {
    store
        .run_blocking(|connection| {
            connection
                .batch_execute(TASKS_SCHEMA_SQL)
                .map_err(TaskStoreError::persistence)
        })
        .await
}

impl From<DieselError> for TaskStoreError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
    async fn insert(&self, new_task: NewTask) -> TaskStoreResult<Task> {
        let new_row = to_new_row(&Task::from_new(TaskId::new(), new_task));

        self.run_blocking(move |connection| {
            connection.transaction::<_, TaskStoreError, _>(|tx| {
                let row = diesel::insert_into(tasks::table)
                    .values(&new_row)
                    .returning(TaskRow::as_returning())
                    .get_result::<TaskRow>(tx)?;
                row_to_task(row)
            })
        })
        .await
    }

    async fn list_all(&self) -> TaskStoreResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .order(tasks::position.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.into_inner())
                .select(TaskRow::as_select())
                .get_result::<TaskRow>(connection)
                .optional()?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn apply_update(&self, id: TaskId, patch: TaskPatch) -> TaskStoreResult<Task> {
        self.run_blocking(move |connection| {
            connection.transaction::<_, TaskStoreError, _>(|tx| {
                let row = tasks::table
                    .find(id.into_inner())
                    .select(TaskRow::as_select())
                    .for_update()
                    .get_result::<TaskRow>(tx)
                    .optional()?
                    .ok_or(TaskStoreError::NotFound(id))?;
                let mut task = row_to_task(row)?;
                if patch.is_empty() {
                    return Ok(task);
                }

                task.apply(patch);
                let updated = diesel::update(tasks::table.find(id.into_inner()))
                    .set(&to_changeset(&task))
                    .returning(TaskRow::as_returning())
                    .get_result::<TaskRow>(tx)?;
                row_to_task(updated)
            })
        })
        .await
    }

    async fn remove(&self, id: TaskId) -> TaskStoreResult<()> {
        self.run_blocking(move |connection| {
            connection.transaction::<_, TaskStoreError, _>(|tx| {
                let deleted = diesel::delete(tasks::table.find(id.into_inner())).execute(tx)?;
                if deleted == 0 {
                    return Err(TaskStoreError::NotFound(id));
                }
                Ok(())
            })
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
    }
}

fn to_changeset(task: &Task) -> TaskChangeset {
    TaskChangeset {
        title: task.title().as_str().to_owned(),
        description: task.description().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
    }
}

fn row_to_task(row: TaskRow) -> TaskStoreResult<Task> {
    let TaskRow {
        id,
        title: persisted_title,
        description: persisted_description,
        status: persisted_status,
    } = row;

    let title = TaskTitle::new(persisted_title).map_err(TaskStoreError::persistence)?;
    let description =
        TaskDescription::new(persisted_description).map_err(TaskStoreError::persistence)?;
    let status =
        TaskStatus::try_from(persisted_status.as_str()).map_err(TaskStoreError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        title,
        description,
        status,
    }))
}
