//! Error types for `orgchart-core`.

use thiserror::Error;

use crate::employee::EmployeeId;

#[derive(Debug, Error)]
pub enum Error {
  #[error("employee not found: {0}")]
  EmployeeNotFound(EmployeeId),

  #[error("compensation not found for employee: {0}")]
  CompensationNotFound(EmployeeId),

  #[error("invalid input: {0}")]
  InvalidInput(String),

  /// A record refers to an employee that does not exist.
  #[error("no employee with id {0} exists")]
  UnknownEmployee(EmployeeId),

  /// The `directReports` graph reached the same employee twice.
  #[error("reporting structure contains a cycle at employee {0}")]
  CycleDetected(EmployeeId),

  /// The reporting tree below an employee is nested deeper than can be
  /// returned.
  #[error("reporting structure exceeds {limit} levels at employee {employee_id}")]
  HierarchyTooDeep { employee_id: EmployeeId, limit: usize },

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// The coarse category of an [`Error`], used by the HTTP layer to pick a
/// status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  NotFound,
  InvalidInput,
  ReferentialIntegrity,
  CycleDetected,
  LimitExceeded,
  Store,
}

impl Error {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::EmployeeNotFound(_) | Self::CompensationNotFound(_) => {
        ErrorKind::NotFound
      }
      Self::InvalidInput(_) => ErrorKind::InvalidInput,
      Self::UnknownEmployee(_) => ErrorKind::ReferentialIntegrity,
      Self::CycleDetected(_) => ErrorKind::CycleDetected,
      Self::HierarchyTooDeep { .. } => ErrorKind::LimitExceeded,
      Self::Store(_) => ErrorKind::Store,
    }
  }

  pub(crate) fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
