//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use orgchart_core::{Error, ErrorKind};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

/// How service failures are turned into HTTP status codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusPolicy {
  /// Every failure is a `500 Internal Server Error`.
  #[default]
  Uniform,
  /// Each [`ErrorKind`] gets its own status.
  Specific,
}

impl StatusPolicy {
  pub fn status_for(self, kind: ErrorKind) -> StatusCode {
    match self {
      Self::Uniform => StatusCode::INTERNAL_SERVER_ERROR,
      Self::Specific => match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorKind::ReferentialIntegrity => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::CycleDetected => StatusCode::CONFLICT,
        ErrorKind::LimitExceeded => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::Store => StatusCode::INTERNAL_SERVER_ERROR,
      },
    }
  }
}

/// A service failure on its way out of a handler.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct ApiError {
  #[source]
  source: Error,
  policy: StatusPolicy,
}

impl ApiError {
  pub fn new(source: Error, policy: StatusPolicy) -> Self {
    Self { source, policy }
  }

  pub fn kind(&self) -> ErrorKind { self.source.kind() }

  pub fn status(&self) -> StatusCode { self.policy.status_for(self.kind()) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      tracing::error!(kind = ?self.kind(), "request failed: {}", self.source);
    } else {
      tracing::warn!(kind = ?self.kind(), "request rejected: {}", self.source);
    }
    (status, Json(json!({ "error": self.source.to_string() }))).into_response()
  }
}
