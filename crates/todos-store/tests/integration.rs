//! Integration tests for todos-store against an in-memory SQLite database.

use sqlx::sqlite::SqlitePoolOptions;
use todos_store::{Error, SqliteStore, Store};

/// Create a migrated store over a single-connection in-memory pool.
///
/// A single connection is required: every `sqlite::memory:` connection
/// opens its own empty database.
async fn test_store() -> SqliteStore {
  let pool = SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("failed to open in-memory database");

  let store = SqliteStore::new(pool);
  store.migrate().await.expect("failed to run migrations");
  store
}

#[tokio::test]
async fn test_create_starts_not_completed() {
  let store = test_store().await;

  let todo = store.create("Buy milk").await.expect("create failed");
  assert_eq!(todo.task, "Buy milk");
  assert!(!todo.completed);

  let fetched = store.get(todo.id).await.expect("get failed");
  assert_eq!(fetched, todo);
}

#[tokio::test]
async fn test_create_accepts_empty_task() {
  let store = test_store().await;

  let todo = store.create("").await.expect("create failed");
  assert_eq!(todo.task, "");
}

#[tokio::test]
async fn test_create_assigns_unique_ids() {
  let store = test_store().await;

  let mut ids = Vec::new();
  for i in 0..5 {
    let todo = store.create(&format!("task {}", i)).await.expect("create failed");
    ids.push(todo.id);
  }

  let mut deduped = ids.clone();
  deduped.sort();
  deduped.dedup();
  assert_eq!(deduped.len(), ids.len());
}

#[tokio::test]
async fn test_list_all_desc_orders_most_recent_first() {
  let store = test_store().await;

  let first = store.create("first").await.expect("create failed");
  let second = store.create("second").await.expect("create failed");
  let third = store.create("third").await.expect("create failed");

  let todos = store.list_all_desc().await.expect("list failed");
  let ids: Vec<i64> = todos.iter().map(|t| t.id).collect();
  assert_eq!(ids, vec![third.id, second.id, first.id]);
}

#[tokio::test]
async fn test_set_completed_leaves_task_unchanged() {
  let store = test_store().await;

  let todo = store.create("Buy milk").await.expect("create failed");
  store
    .set_completed(todo.id, true)
    .await
    .expect("set_completed failed");

  let fetched = store.get(todo.id).await.expect("get failed");
  assert!(fetched.completed);
  assert_eq!(fetched.task, "Buy milk");

  // Completing twice is a no-op.
  store
    .set_completed(todo.id, true)
    .await
    .expect("second set_completed failed");
  let fetched = store.get(todo.id).await.expect("get failed");
  assert!(fetched.completed);
}

#[tokio::test]
async fn test_update_overwrites_both_fields() {
  let store = test_store().await;

  let todo = store.create("Buy milk").await.expect("create failed");
  let updated = store
    .update(todo.id, "Buy oat milk", true)
    .await
    .expect("update failed");

  assert_eq!(updated.task, "Buy oat milk");
  assert!(updated.completed);

  let fetched = store.get(todo.id).await.expect("get failed");
  assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_delete_removes_row() {
  let store = test_store().await;

  let keep = store.create("keep").await.expect("create failed");
  let gone = store.create("gone").await.expect("create failed");

  store.delete(gone.id).await.expect("delete failed");

  let todos = store.list_all_desc().await.expect("list failed");
  assert_eq!(todos.len(), 1);
  assert_eq!(todos[0].id, keep.id);

  let err = store.get(gone.id).await.expect_err("get should fail");
  assert!(matches!(err, Error::NotFound(_)));

  // Deleting twice errors on the second call.
  let err = store.delete(gone.id).await.expect_err("delete should fail");
  assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn test_missing_id_is_not_found() {
  let store = test_store().await;

  assert!(matches!(store.get(42).await, Err(Error::NotFound(_))));
  assert!(matches!(
    store.set_completed(42, true).await,
    Err(Error::NotFound(_))
  ));
  assert!(matches!(
    store.update(42, "task", false).await,
    Err(Error::NotFound(_))
  ));
  assert!(matches!(store.delete(42).await, Err(Error::NotFound(_))));
}
