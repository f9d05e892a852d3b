use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::{Error, Store, Todo};

/// SQLite-based store implementation.
pub struct SqliteStore {
  pool: SqlitePool,
}

impl SqliteStore {
  /// Create a new SQLite store with the given connection pool.
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }

  /// Run database migrations.
  pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(&self.pool).await
  }
}

#[async_trait]
impl Store for SqliteStore {
  async fn create(&self, task: &str) -> Result<Todo, Error> {
    let result = sqlx::query(
      r#"
            INSERT INTO todo (task, completed)
            VALUES (?, FALSE)
            "#,
    )
    .bind(task)
    .execute(&self.pool)
    .await?;

    Ok(Todo {
      id: result.last_insert_rowid(),
      task: task.to_string(),
      completed: false,
    })
  }

  async fn list_all_desc(&self) -> Result<Vec<Todo>, Error> {
    let todos = sqlx::query_as(
      r#"
            SELECT id, task, completed
            FROM todo
            ORDER BY id DESC
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    Ok(todos)
  }

  async fn get(&self, id: i64) -> Result<Todo, Error> {
    sqlx::query_as(
      r#"
            SELECT id, task, completed
            FROM todo
            WHERE id = ?
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?
    .ok_or_else(|| Error::NotFound(format!("todo {}", id)))
  }

  async fn set_completed(&self, id: i64, completed: bool) -> Result<(), Error> {
    let result = sqlx::query(
      r#"
            UPDATE todo
            SET completed = ?
            WHERE id = ?
            "#,
    )
    .bind(completed)
    .bind(id)
    .execute(&self.pool)
    .await?;

    if result.rows_affected() == 0 {
      return Err(Error::NotFound(format!("todo {}", id)));
    }

    Ok(())
  }

  async fn update(&self, id: i64, task: &str, completed: bool) -> Result<Todo, Error> {
    let result = sqlx::query(
      r#"
            UPDATE todo
            SET task = ?, completed = ?
            WHERE id = ?
            "#,
    )
    .bind(task)
    .bind(completed)
    .bind(id)
    .execute(&self.pool)
    .await?;

    if result.rows_affected() == 0 {
      return Err(Error::NotFound(format!("todo {}", id)));
    }

    Ok(Todo {
      id,
      task: task.to_string(),
      completed,
    })
  }

  async fn delete(&self, id: i64) -> Result<(), Error> {
    let result = sqlx::query(
      r#"
            DELETE FROM todo
            WHERE id = ?
            "#,
    )
    .bind(id)
    .execute(&self.pool)
    .await?;

    if result.rows_affected() == 0 {
      return Err(Error::NotFound(format!("todo {}", id)));
    }

    Ok(())
  }
}
