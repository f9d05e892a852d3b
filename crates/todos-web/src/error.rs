//! Request handling errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

/// Errors that can occur while handling a request.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
  /// A storage operation failed.
  #[error(transparent)]
  Store(#[from] todos_store::Error),

  /// A page template failed to render.
  #[error("template rendering failed: {0}")]
  Template(#[from] minijinja::Error),
}

impl IntoResponse for WebError {
  fn into_response(self) -> Response {
    match &self {
      // A missing id on complete/edit/delete answers with an explicit 404
      // rather than surfacing a storage error.
      WebError::Store(todos_store::Error::NotFound(_)) => {
        (StatusCode::NOT_FOUND, self.to_string()).into_response()
      }
      _ => {
        error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
      }
    }
  }
}
