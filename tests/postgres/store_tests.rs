//! Store contract, durability, and constraint tests for `PostgresTaskStore`.

use crate::postgres::helpers::{
    PostgresCluster, StoreContext, TestDatabase, postgres_cluster, store_context, test_runtime,
};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sql_types::{Text, Uuid as SqlUuid};
use rstest::rstest;
use task_manager::task::{
    adapters::postgres::ensure_schema,
    domain::{NewTask, Task, TaskDescription, TaskId, TaskPatch, TaskStatus, TaskTitle},
    ports::{TaskStore, TaskStoreError},
};

#[derive(QueryableByName)]
struct StatusRow {
    #[diesel(sql_type = Text)]
    status: String,
}

fn new_task(title: &str) -> NewTask {
    NewTask::new(
        TaskTitle::new(title).expect("valid title"),
        TaskDescription::new("Description").expect("valid description"),
    )
}

#[rstest]
fn insert_then_find_returns_equal_task(store_context: Option<StoreContext>) {
    let Some(context) = store_context else { return };

    let created = context
        .rt
        .block_on(context.store.insert(new_task("Title")))
        .expect("insert");
    let found = context
        .rt
        .block_on(context.store.find(created.id()))
        .expect("find");

    assert_eq!(found, Some(created));
}

#[rstest]
fn find_unknown_id_returns_none(store_context: Option<StoreContext>) {
    let Some(context) = store_context else { return };

    let found = context
        .rt
        .block_on(context.store.find(TaskId::new()))
        .expect("find");

    assert_eq!(found, None);
}

#[rstest]
fn list_all_returns_storage_order(store_context: Option<StoreContext>) {
    let Some(context) = store_context else { return };

    let ids: Vec<TaskId> = ["First", "Second", "Third"]
        .into_iter()
        .map(|title| {
            context
                .rt
                .block_on(context.store.insert(new_task(title)))
                .expect("insert")
                .id()
        })
        .collect();
    let listed = context
        .rt
        .block_on(context.store.list_all())
        .expect("list");

    let listed_ids: Vec<TaskId> = listed.iter().map(|task| task.id()).collect();
    assert_eq!(listed_ids, ids);
}

#[rstest]
fn apply_update_persists_merged_fields(store_context: Option<StoreContext>) {
    let Some(context) = store_context else { return };

    let created = context
        .rt
        .block_on(context.store.insert(new_task("Title")))
        .expect("insert");
    let patch = TaskPatch {
        description: Some(TaskDescription::new("Updated").expect("valid description")),
        status: Some(TaskStatus::Done),
        ..TaskPatch::default()
    };
    let updated = context
        .rt
        .block_on(context.store.apply_update(created.id(), patch))
        .expect("update");

    assert_eq!(updated.title(), created.title());
    assert_eq!(updated.description().as_str(), "Updated");
    assert_eq!(updated.status(), TaskStatus::Done);
    let stored = context
        .rt
        .block_on(context.store.find(created.id()))
        .expect("find");
    assert_eq!(stored, Some(updated));
}

#[rstest]
fn apply_update_and_remove_report_missing_tasks(store_context: Option<StoreContext>) {
    let Some(context) = store_context else { return };
    let missing = TaskId::new();

    let update = context
        .rt
        .block_on(context.store.apply_update(missing, TaskPatch::default()));
    let removal = context.rt.block_on(context.store.remove(missing));

    assert!(matches!(update, Err(TaskStoreError::NotFound(id)) if id == missing));
    assert!(matches!(removal, Err(TaskStoreError::NotFound(id)) if id == missing));
}

#[rstest]
fn remove_deletes_row(store_context: Option<StoreContext>) {
    let Some(context) = store_context else { return };

    let created = context
        .rt
        .block_on(context.store.insert(new_task("Title")))
        .expect("insert");
    context
        .rt
        .block_on(context.store.remove(created.id()))
        .expect("remove");

    let listed = context
        .rt
        .block_on(context.store.list_all())
        .expect("list");
    assert!(listed.is_empty());
}

#[rstest]
fn tasks_survive_a_new_store(store_context: Option<StoreContext>) {
    let Some(context) = store_context else { return };

    let created = context
        .rt
        .block_on(context.store.insert(new_task("Durable")))
        .expect("insert");
    let reopened = context.database.store().expect("second store");

    let found = context
        .rt
        .block_on(reopened.find(created.id()))
        .expect("find through new store");
    assert_eq!(found, Some(created));
}

#[rstest]
fn ensure_schema_is_idempotent(store_context: Option<StoreContext>) {
    let Some(context) = store_context else { return };

    let created = context
        .rt
        .block_on(context.store.insert(new_task("Kept")))
        .expect("insert");
    context
        .rt
        .block_on(ensure_schema(&context.store))
        .expect("schema reapplied");

    let listed = context
        .rt
        .block_on(context.store.list_all())
        .expect("list");
    assert_eq!(listed, vec![created]);
}

#[rstest]
#[case("INSERT INTO tasks (id, title, description) VALUES (gen_random_uuid(), 'ab', '')")]
#[case("INSERT INTO tasks (id, title, description, status) VALUES (gen_random_uuid(), 'Title', '', 'WIP')")]
fn check_constraints_reject_invalid_rows(
    store_context: Option<StoreContext>,
    #[case] statement: &str,
) {
    let Some(context) = store_context else { return };

    let mut conn = PgConnection::establish(&context.database.url()).expect("connect");
    let result = conn.batch_execute(statement);

    assert!(result.is_err(), "constraint should reject: {statement}");
}

#[rstest]
fn rows_breaking_domain_rules_fail_reads_and_roll_back_updates(
    store_context: Option<StoreContext>,
) {
    let Some(context) = store_context else { return };
    let raw_id = uuid::Uuid::new_v4();
    let mut conn = PgConnection::establish(&context.database.url()).expect("connect");
    conn.batch_execute("ALTER TABLE tasks DROP CONSTRAINT tasks_title_length")
        .expect("drop title constraint");
    diesel::sql_query(
        "INSERT INTO tasks (id, title, description, status) VALUES ($1, 'ab', '', 'TODO')",
    )
    .bind::<SqlUuid, _>(raw_id)
    .execute(&mut conn)
    .expect("insert row with short title");
    let id = TaskId::from_uuid(raw_id);
    let patch = TaskPatch {
        status: Some(TaskStatus::Done),
        ..TaskPatch::default()
    };

    let listed = context.rt.block_on(context.store.list_all());
    let found = context.rt.block_on(context.store.find(id));
    let updated = context.rt.block_on(context.store.apply_update(id, patch));

    assert!(matches!(listed, Err(TaskStoreError::Persistence(_))));
    assert!(matches!(found, Err(TaskStoreError::Persistence(_))));
    assert!(matches!(updated, Err(TaskStoreError::Persistence(_))));
    let row = diesel::sql_query("SELECT status FROM tasks WHERE id = $1")
        .bind::<SqlUuid, _>(raw_id)
        .get_result::<StatusRow>(&mut conn)
        .expect("row still present");
    assert_eq!(row.status, "TODO");
    conn.batch_execute("SET lock_timeout = '2s'").expect("set lock timeout");
    diesel::sql_query("UPDATE tasks SET status = 'DONE' WHERE id = $1")
        .bind::<SqlUuid, _>(raw_id)
        .execute(&mut conn)
        .expect("row lock released after rollback");
}

#[rstest]
fn ensure_schema_upgrades_a_table_without_position(postgres_cluster: Option<PostgresCluster>) {
    let Some(cluster) = postgres_cluster else { return };
    let database = TestDatabase::create_empty(cluster).expect("empty database");
    let mut conn = PgConnection::establish(&database.url()).expect("connect");
    conn.batch_execute(
        "CREATE TYPE taskstatus AS ENUM ('TODO', 'DONE');
         CREATE TABLE tasks (
             id UUID PRIMARY KEY,
             title TEXT NOT NULL,
             description TEXT NOT NULL,
             status taskstatus NOT NULL
         );
         INSERT INTO tasks (id, title, description, status)
         VALUES (gen_random_uuid(), 'Existing', 'Created before upgrade', 'DONE');",
    )
    .expect("create table without position");
    let store = database.store().expect("store pool");
    let rt = test_runtime().expect("tokio runtime");

    rt.block_on(ensure_schema(&store)).expect("schema upgraded");
    rt.block_on(ensure_schema(&store)).expect("upgrade is idempotent");
    let created = rt
        .block_on(store.insert(new_task("Added after upgrade")))
        .expect("insert");
    let listed = rt.block_on(store.list_all()).expect("list");

    let titles: Vec<&str> = listed.iter().map(|task| task.title().as_str()).collect();
    assert_eq!(titles, vec!["Existing", "Added after upgrade"]);
    assert_eq!(listed.first().map(Task::status), Some(TaskStatus::Done));
    assert_eq!(listed.last(), Some(&created));
    let rejected = conn.batch_execute(
        "INSERT INTO tasks (id, title, description) VALUES (gen_random_uuid(), 'ab', '')",
    );
    assert!(rejected.is_err(), "upgraded table should check title length");
}
