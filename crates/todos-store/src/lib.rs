//! Todos Store
//!
//! This crate provides the storage trait and SQLite implementation for todo
//! records. A todo is a single row: an id, its task text, and a completed
//! flag.
//!
//! The [`Store`] trait defines operations for:
//! - Creating a todo
//! - Listing todos most-recent-first
//! - Fetching, updating, completing, and deleting a todo by id

mod sqlite;
mod types;

pub use sqlite::SqliteStore;
pub use types::Todo;

use async_trait::async_trait;

/// Error type for storage operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// The requested record was not found.
  #[error("not found: {0}")]
  NotFound(String),

  /// A database error occurred.
  #[error("database error: {0}")]
  Database(#[from] sqlx::Error),
}

/// Storage trait for todo records.
///
/// Every mutation commits immediately; there are no multi-statement
/// transactions. Operations addressed by id return [`Error::NotFound`]
/// when no row matches.
#[async_trait]
pub trait Store: Send + Sync {
  /// Create a new todo with the given task text. The row starts out
  /// not completed; the returned [`Todo`] carries the assigned id.
  async fn create(&self, task: &str) -> Result<Todo, Error>;

  /// List every todo, most recently created first (id descending).
  async fn list_all_desc(&self) -> Result<Vec<Todo>, Error>;

  /// Get a todo by id.
  async fn get(&self, id: i64) -> Result<Todo, Error>;

  /// Set the completed flag on a todo, leaving its task text untouched.
  async fn set_completed(&self, id: i64, completed: bool) -> Result<(), Error>;

  /// Overwrite both fields of a todo unconditionally.
  async fn update(&self, id: i64, task: &str, completed: bool) -> Result<Todo, Error>;

  /// Delete a todo. Deleting an id that no longer exists is an error.
  async fn delete(&self, id: i64) -> Result<(), Error>;
}
