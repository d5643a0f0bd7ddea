//! [`CompensationService`] — create and read compensation records.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::{
  Error, Result,
  compensation::Compensation,
  directory::EmployeeDirectory,
  employee::EmployeeId,
  store::{CompensationStore, EmployeeStore},
};

/// CRUD over a [`CompensationStore`], checking every new record against the
/// employee directory first.
pub struct CompensationService<S> {
  store:     Arc<S>,
  directory: EmployeeDirectory<S>,
}

impl<S> Clone for CompensationService<S> {
  fn clone(&self) -> Self {
    Self {
      store:     Arc::clone(&self.store),
      directory: self.directory.clone(),
    }
  }
}

impl<S> CompensationService<S>
where
  S: EmployeeStore + CompensationStore,
{
  pub fn new(store: Arc<S>) -> Self {
    Self {
      directory: EmployeeDirectory::new(Arc::clone(&store)),
      store,
    }
  }

  /// Validate and persist `compensation`, returning it unchanged.
  ///
  /// Fails with [`Error::InvalidInput`] for a blank employee id or a negative
  /// salary, and with [`Error::UnknownEmployee`] if the id does not name an
  /// existing employee.
  pub async fn create(&self, compensation: Compensation) -> Result<Compensation> {
    tracing::debug!(employee_id = %compensation.employee_id, "creating compensation");

    if compensation.employee_id.is_blank() {
      tracing::error!("compensation employee id is empty");
      return Err(Error::InvalidInput("employeeId must not be empty".into()));
    }
    if compensation.salary < Decimal::ZERO {
      tracing::error!(employee_id = %compensation.employee_id, "negative salary");
      return Err(Error::InvalidInput("salary must not be negative".into()));
    }

    match self.directory.read(&compensation.employee_id).await {
      Ok(_) => {}
      Err(Error::EmployeeNotFound(id)) => {
        tracing::error!(employee_id = %id, "compensation refers to unknown employee");
        return Err(Error::UnknownEmployee(id));
      }
      Err(e) => return Err(e),
    }

    self
      .store
      .insert_compensation(compensation)
      .await
      .map_err(Error::store)
  }

  pub async fn read(&self, employee_id: &EmployeeId) -> Result<Compensation> {
    tracing::debug!(%employee_id, "reading compensation");

    self
      .store
      .find_compensation(employee_id)
      .await
      .map_err(Error::store)?
      .ok_or_else(|| Error::CompensationNotFound(employee_id.clone()))
  }
}
