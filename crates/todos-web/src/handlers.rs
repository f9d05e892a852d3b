//! Request handlers.
//!
//! One handler per (method, path). Reads render a template; writes call the
//! store and redirect back to the listing page with 303 See Other.

use axum::Form;
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::{Html, Redirect};
use minijinja::context;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::AppState;
use crate::error::WebError;

const STYLESHEET: &str = include_str!("../static/styles.css");

/// Form body for `POST /add`. The `task` field is required; requests
/// without it are rejected by the extractor before the handler runs.
#[derive(Debug, Deserialize)]
pub struct AddForm {
  task: String,
}

/// Form body for `POST /edit/{todo_id}`.
#[derive(Debug, Deserialize)]
pub struct EditForm {
  task: String,
  #[serde(default)]
  completed: Option<String>,
}

impl EditForm {
  /// Checkbox semantics: the field arrives as a truthy value when the box
  /// is checked and is absent otherwise. Absent means false.
  fn completed(&self) -> bool {
    matches!(
      self.completed.as_deref(),
      Some("true") | Some("on") | Some("1")
    )
  }
}

/// GET `/` - render the listing page, most recently created first.
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, WebError> {
  let todos = state.store.list_all_desc().await?;
  let body = state
    .templates
    .get_template("index.html")?
    .render(context! { todos })?;
  Ok(Html(body))
}

/// POST `/add` - create a todo and redirect to the listing page.
#[instrument(skip(state, form))]
pub async fn add(
  State(state): State<AppState>,
  Form(form): Form<AddForm>,
) -> Result<Redirect, WebError> {
  let todo = state.store.create(&form.task).await?;
  info!(todo_id = todo.id, "created todo");
  Ok(Redirect::to("/"))
}

/// GET `/complete/{todo_id}` - mark a todo complete and redirect.
#[instrument(skip(state))]
pub async fn complete(
  State(state): State<AppState>,
  Path(todo_id): Path<i64>,
) -> Result<Redirect, WebError> {
  state.store.set_completed(todo_id, true).await?;
  info!(todo_id, "marked todo complete");
  Ok(Redirect::to("/"))
}

/// GET `/edit/{todo_id}` - render the edit form pre-filled with the
/// current task text and completion state.
pub async fn edit_form(
  State(state): State<AppState>,
  Path(todo_id): Path<i64>,
) -> Result<Html<String>, WebError> {
  let todo = state.store.get(todo_id).await?;
  let body = state
    .templates
    .get_template("edit.html")?
    .render(context! { todo })?;
  Ok(Html(body))
}

/// POST `/edit/{todo_id}` - overwrite both fields and redirect.
#[instrument(skip(state, form))]
pub async fn edit_submit(
  State(state): State<AppState>,
  Path(todo_id): Path<i64>,
  Form(form): Form<EditForm>,
) -> Result<Redirect, WebError> {
  state
    .store
    .update(todo_id, &form.task, form.completed())
    .await?;
  info!(todo_id, "updated todo");
  Ok(Redirect::to("/"))
}

/// GET `/delete/{todo_id}` - remove a todo and redirect.
#[instrument(skip(state))]
pub async fn delete(
  State(state): State<AppState>,
  Path(todo_id): Path<i64>,
) -> Result<Redirect, WebError> {
  state.store.delete(todo_id).await?;
  info!(todo_id, "deleted todo");
  Ok(Redirect::to("/"))
}

/// GET `/static/styles.css` - the embedded stylesheet.
pub async fn stylesheet() -> ([(axum::http::HeaderName, &'static str); 1], &'static str) {
  ([(CONTENT_TYPE, "text/css")], STYLESHEET)
}
