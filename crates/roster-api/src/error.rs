//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

/// An error returned by an API handler.
///
/// Validation failures, duplicate nicknames and unparseable bodies all
/// collapse into `Unprocessable`; clients cannot tell them apart.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("unprocessable request")]
  Unprocessable,

  #[error("not found")]
  NotFound,

  #[error("bad request")]
  BadRequest,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Wrap a backend fault.
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    ApiError::Store(Box::new(e))
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
      ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
      ApiError::BadRequest => StatusCode::BAD_REQUEST.into_response(),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
      }
    }
  }
}
