//! JSON REST API for the org-chart directory.
//!
//! Exposes an axum [`Router`] backed by any store implementing both
//! [`EmployeeStore`] and [`CompensationStore`]. Tracing layers, TLS, and the
//! listener are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = orgchart_api::api_router(AppState::new(store, StatusPolicy::Uniform));
//! ```

pub mod compensation;
pub mod employees;
pub mod error;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use orgchart_core::{
  directory::EmployeeDirectory,
  payroll::CompensationService,
  reporting::ReportingEngine,
  store::{CompensationStore, EmployeeStore},
};

pub use error::{ApiError, StatusPolicy};

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S> {
  pub directory: EmployeeDirectory<S>,
  pub payroll:   CompensationService<S>,
  pub reporting: ReportingEngine<S>,
  pub policy:    StatusPolicy,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      directory: self.directory.clone(),
      payroll:   self.payroll.clone(),
      reporting: self.reporting.clone(),
      policy:    self.policy,
    }
  }
}

impl<S> AppState<S>
where
  S: EmployeeStore + CompensationStore,
{
  pub fn new(store: Arc<S>, policy: StatusPolicy) -> Self {
    let directory = EmployeeDirectory::new(Arc::clone(&store));
    Self {
      payroll: CompensationService::new(store),
      reporting: ReportingEngine::new(directory.clone()),
      directory,
      policy,
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: AppState<S>) -> Router<()>
where
  S: EmployeeStore + CompensationStore + 'static,
{
  Router::new()
    // Employees
    .route("/employee", post(employees::create::<S>))
    .route(
      "/employee/{id}",
      get(employees::get_one::<S>).put(employees::update::<S>),
    )
    .route(
      "/employee/{id}/reporting-structure",
      get(employees::reporting_structure::<S>),
    )
    // Compensation
    .route("/compensation", post(compensation::create::<S>))
    .route("/compensation/{id}", get(compensation::get_one::<S>))
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
