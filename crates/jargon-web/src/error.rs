//! Error types and axum `IntoResponse` implementation.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("not found")]
  NotFound,
  #[error("template error: {0}")]
  Template(#[from] minijinja::Error),
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Error::Store(Box::new(e))
  }
}

/// Whether an integrity violation appears anywhere in `e`'s source chain.
fn is_integrity(e: &(dyn std::error::Error + 'static)) -> bool {
  let mut cur = Some(e);
  while let Some(err) = cur {
    if let Some(jargon_core::Error::Integrity { .. }) =
      err.downcast_ref::<jargon_core::Error>()
    {
      return true;
    }
    cur = err.source();
  }
  false
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::NotFound => {
        (StatusCode::NOT_FOUND, "404 not found.").into_response()
      }
      Error::Template(e) => {
        tracing::error!(error = %e, "failed to render template");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
      }
      Error::Store(e) => {
        if is_integrity(e.as_ref()) {
          tracing::error!(
            error = %e,
            "refusing to serve inconsistent data; startup will fail until the database is repaired"
          );
        } else {
          tracing::error!(error = %e, "store error");
        }
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
      }
    }
  }
}
