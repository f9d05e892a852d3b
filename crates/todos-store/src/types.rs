use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A todo as stored in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Todo {
  pub id: i64,
  pub task: String,
  pub completed: bool,
}
