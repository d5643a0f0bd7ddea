//! Server wiring for the org-chart directory: configuration, seed data, and
//! the top-level axum application.

pub mod seed;
pub mod settings;

use std::sync::Arc;

use axum::Router;
use orgchart_api::{AppState, StatusPolicy, api_router};
use orgchart_core::store::{CompensationStore, EmployeeStore};
use tower_http::trace::TraceLayer;

pub use settings::ServerConfig;

/// Build the full application: the API router plus request tracing.
pub fn app<S>(store: Arc<S>, policy: StatusPolicy) -> Router
where
  S: EmployeeStore + CompensationStore + 'static,
{
  api_router(AppState::new(store, policy)).layer(TraceLayer::new_for_http())
}
