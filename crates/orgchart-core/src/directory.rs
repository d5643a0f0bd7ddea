//! [`EmployeeDirectory`] — create, read, and update employee records.

use std::sync::Arc;

use crate::{
  Error, Result,
  employee::{Employee, EmployeeId},
  store::EmployeeStore,
};

/// CRUD over an [`EmployeeStore`]. Owns id assignment for new employees.
///
/// Cloning is cheap; the store is reference-counted.
pub struct EmployeeDirectory<S> {
  store: Arc<S>,
}

impl<S> Clone for EmployeeDirectory<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: EmployeeStore> EmployeeDirectory<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  /// Persist `employee` under a freshly generated id, replacing whatever id
  /// the caller supplied.
  pub async fn create(&self, mut employee: Employee) -> Result<Employee> {
    employee.employee_id = EmployeeId::generate();
    tracing::debug!(employee_id = %employee.employee_id, "creating employee");

    self.store.insert_employee(employee).await.map_err(Error::store)
  }

  pub async fn read(&self, id: &EmployeeId) -> Result<Employee> {
    tracing::debug!(employee_id = %id, "reading employee");

    self
      .store
      .find_employee(id)
      .await
      .map_err(Error::store)?
      .ok_or_else(|| {
        tracing::warn!(employee_id = %id, "employee not found");
        Error::EmployeeNotFound(id.clone())
      })
  }

  /// Replace the stored record for `employee.employee_id`, creating it if
  /// absent.
  pub async fn update(&self, employee: Employee) -> Result<Employee> {
    tracing::debug!(employee_id = %employee.employee_id, "updating employee");

    self.store.save_employee(employee).await.map_err(Error::store)
  }
}
