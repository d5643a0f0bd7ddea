//! Compensation records, keyed by the employee they belong to.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::employee::EmployeeId;

/// The salary an employee receives from `effective_date` onwards.
///
/// A missing or `null` `employeeId` deserialises to a blank id so that
/// [`CompensationService::create`](crate::payroll::CompensationService::create)
/// can reject it with a proper error instead of a body-parsing failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compensation {
  #[serde(default)]
  pub employee_id:    EmployeeId,
  pub salary:         Decimal,
  pub effective_date: NaiveDate,
}
