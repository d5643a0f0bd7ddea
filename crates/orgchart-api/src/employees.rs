//! Handlers for `/employee` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/employee` | Body: [`Employee`]; any `employeeId` is replaced |
//! | `GET`  | `/employee/{id}` | |
//! | `PUT`  | `/employee/{id}` | Full replace; the path id wins over the body |
//! | `GET`  | `/employee/{id}/reporting-structure` | |

use axum::{
  Json,
  extract::{Path, State},
};
use orgchart_core::{
  employee::{Employee, EmployeeId},
  reporting::ReportingStructure,
  store::{CompensationStore, EmployeeStore},
};

use crate::{AppState, error::ApiError};

/// `POST /employee`
pub async fn create<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<Employee>,
) -> Result<Json<Employee>, ApiError>
where
  S: EmployeeStore + CompensationStore,
{
  let employee = state
    .directory
    .create(body)
    .await
    .map_err(|e| ApiError::new(e, state.policy))?;
  Ok(Json(employee))
}

/// `GET /employee/{id}`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<EmployeeId>,
) -> Result<Json<Employee>, ApiError>
where
  S: EmployeeStore + CompensationStore,
{
  let employee = state
    .directory
    .read(&id)
    .await
    .map_err(|e| ApiError::new(e, state.policy))?;
  Ok(Json(employee))
}

/// `PUT /employee/{id}`
pub async fn update<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<EmployeeId>,
  Json(mut body): Json<Employee>,
) -> Result<Json<Employee>, ApiError>
where
  S: EmployeeStore + CompensationStore,
{
  body.employee_id = id;
  let employee = state
    .directory
    .update(body)
    .await
    .map_err(|e| ApiError::new(e, state.policy))?;
  Ok(Json(employee))
}

/// `GET /employee/{id}/reporting-structure`
pub async fn reporting_structure<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<EmployeeId>,
) -> Result<Json<ReportingStructure>, ApiError>
where
  S: EmployeeStore + CompensationStore,
{
  let structure = state
    .reporting
    .reporting_structure(&id)
    .await
    .map_err(|e| ApiError::new(e, state.policy))?;
  Ok(Json(structure))
}
