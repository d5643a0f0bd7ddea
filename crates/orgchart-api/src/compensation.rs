//! Handlers for `/compensation` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/compensation` | Body: [`Compensation`]; the employee must exist |
//! | `GET`  | `/compensation/{id}` | Latest record for employee `id` |

use axum::{
  Json,
  extract::{Path, State},
};
use orgchart_core::{
  compensation::Compensation,
  employee::EmployeeId,
  store::{CompensationStore, EmployeeStore},
};

use crate::{AppState, error::ApiError};

/// `POST /compensation`
pub async fn create<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<Compensation>,
) -> Result<Json<Compensation>, ApiError>
where
  S: EmployeeStore + CompensationStore,
{
  let compensation = state
    .payroll
    .create(body)
    .await
    .map_err(|e| ApiError::new(e, state.policy))?;
  Ok(Json(compensation))
}

/// `GET /compensation/{id}`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<EmployeeId>,
) -> Result<Json<Compensation>, ApiError>
where
  S: EmployeeStore + CompensationStore,
{
  let compensation = state
    .payroll
    .read(&id)
    .await
    .map_err(|e| ApiError::new(e, state.policy))?;
  Ok(Json(compensation))
}
