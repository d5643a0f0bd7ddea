//! The storage traits the services are written against.
//!
//! Traits are implemented by storage backends (e.g. `orgchart-store-sqlite`).
//! Neither trait enforces anything about the shape of the `directReports`
//! graph; that is checked at read time by the
//! [`ReportingEngine`](crate::reporting::ReportingEngine).

use std::future::Future;

use crate::{
  compensation::Compensation,
  employee::{Employee, EmployeeId},
};

/// Persistence for [`Employee`] records, keyed by [`EmployeeId`].
pub trait EmployeeStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Point lookup. Returns `None` if no record exists for `id`.
  fn find_employee<'a>(
    &'a self,
    id: &'a EmployeeId,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + 'a;

  /// Insert a new record. Returns an error if the id is already taken.
  fn insert_employee(
    &self,
    employee: Employee,
  ) -> impl Future<Output = Result<Employee, Self::Error>> + Send + '_;

  /// Full-document replace keyed by `employee.employee_id`; creates the
  /// record if it does not exist.
  fn save_employee(
    &self,
    employee: Employee,
  ) -> impl Future<Output = Result<Employee, Self::Error>> + Send + '_;
}

/// Persistence for [`Compensation`] records, keyed by [`EmployeeId`].
pub trait CompensationStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Append a record. Several records may exist for the same employee.
  fn insert_compensation(
    &self,
    compensation: Compensation,
  ) -> impl Future<Output = Result<Compensation, Self::Error>> + Send + '_;

  /// The most recently inserted record for `employee_id`, if any.
  fn find_compensation<'a>(
    &'a self,
    employee_id: &'a EmployeeId,
  ) -> impl Future<Output = Result<Option<Compensation>, Self::Error>> + Send + 'a;
}
