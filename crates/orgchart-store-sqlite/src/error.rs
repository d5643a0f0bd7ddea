//! Error type for `orgchart-store-sqlite`.

use orgchart_core::employee::EmployeeId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("decimal parse error: {0}")]
  Decimal(#[from] rust_decimal::Error),

  #[error("date parse error: {0}")]
  DateParse(String),

  /// `insert_employee` was called with an id that is already stored.
  #[error("employee {0} already exists")]
  DuplicateEmployee(EmployeeId),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
