//! Bootstrapping the directory from a JSON file of employees.

use std::path::Path;

use orgchart_core::{directory::EmployeeDirectory, employee::Employee, store::EmployeeStore};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
  #[error("failed to read seed file: {0}")]
  Io(#[from] std::io::Error),

  #[error("malformed seed data: {0}")]
  Json(#[from] serde_json::Error),

  #[error(transparent)]
  Directory(#[from] orgchart_core::Error),
}

/// Parse a JSON array of employee documents.
pub fn parse_seed(json: &str) -> Result<Vec<Employee>, SeedError> {
  Ok(serde_json::from_str(json)?)
}

/// Upsert every employee through the directory, keeping their ids. Returns
/// the number of records written.
pub async fn seed_directory<S: EmployeeStore>(
  directory: &EmployeeDirectory<S>,
  employees: Vec<Employee>,
) -> Result<usize, SeedError> {
  let count = employees.len();
  for employee in employees {
    directory.update(employee).await?;
  }
  Ok(count)
}

/// Read `path` and seed the directory with its contents.
pub async fn seed_from_file<S: EmployeeStore>(
  directory: &EmployeeDirectory<S>,
  path: &Path,
) -> Result<usize, SeedError> {
  let raw = tokio::fs::read_to_string(path).await?;
  let count = seed_directory(directory, parse_seed(&raw)?).await?;
  tracing::info!(count, path = %path.display(), "seeded employee directory");
  Ok(count)
}
