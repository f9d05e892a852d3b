//! Todos Web
//!
//! This crate provides the HTTP surface of the application: an axum
//! [`Router`] with one named handler per (method, path), page templates
//! rendered with minijinja, and an error type that maps storage and
//! rendering failures onto HTTP responses.
//!
//! Reads render a page; writes answer with a 303 See Other redirect back
//! to the listing page so the browser re-fetches it with a fresh GET.

mod error;
mod handlers;
mod templates;

pub use error::WebError;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use minijinja::Environment;
use todos_store::Store;

/// Shared application state, injected into every handler.
///
/// The store handle and template environment are the only process-wide
/// resources; both are cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
  store: Arc<dyn Store>,
  templates: Arc<Environment<'static>>,
}

impl AppState {
  pub fn new(store: Arc<dyn Store>) -> Self {
    Self {
      store,
      templates: Arc::new(templates::environment()),
    }
  }
}

/// Build the application router over the given store.
pub fn router(store: Arc<dyn Store>) -> Router {
  let state = AppState::new(store);

  Router::new()
    .route("/", get(handlers::home))
    .route("/add", post(handlers::add))
    .route("/complete/{todo_id}", get(handlers::complete))
    .route(
      "/edit/{todo_id}",
      get(handlers::edit_form).post(handlers::edit_submit),
    )
    .route("/delete/{todo_id}", get(handlers::delete))
    .route("/static/styles.css", get(handlers::stylesheet))
    .with_state(state)
}
