//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Report lists are stored as a compact JSON array of ids. Salaries are stored
//! as decimal text so no precision is lost; dates as ISO 8601 `YYYY-MM-DD`.

use std::str::FromStr as _;

use chrono::NaiveDate;
use orgchart_core::{
  compensation::Compensation,
  employee::{Employee, EmployeeId, EmployeeRef},
};
use rust_decimal::Decimal;

use crate::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

// ─── Direct reports ──────────────────────────────────────────────────────────

pub fn encode_reports(reports: &[EmployeeRef]) -> Result<String> {
  let ids: Vec<&str> = reports.iter().map(|r| r.employee_id.as_str()).collect();
  Ok(serde_json::to_string(&ids)?)
}

pub fn decode_reports(s: &str) -> Result<Vec<EmployeeRef>> {
  let ids: Vec<String> = serde_json::from_str(s)?;
  Ok(ids.into_iter().map(|id| EmployeeRef::from(EmployeeId::from(id))).collect())
}

// ─── Salary / date ───────────────────────────────────────────────────────────

pub fn encode_salary(salary: Decimal) -> String { salary.to_string() }

pub fn decode_salary(s: &str) -> Result<Decimal> { Ok(Decimal::from_str(s)?) }

pub fn encode_date(date: NaiveDate) -> String {
  date.format(DATE_FORMAT).to_string()
}

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Raw row types ───────────────────────────────────────────────────────────

/// An `employees` row exactly as read from SQLite.
pub struct RawEmployee {
  pub employee_id:    String,
  pub first_name:     String,
  pub last_name:      String,
  pub position:       String,
  pub department:     String,
  pub direct_reports: String,
}

impl RawEmployee {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      employee_id:    row.get(0)?,
      first_name:     row.get(1)?,
      last_name:      row.get(2)?,
      position:       row.get(3)?,
      department:     row.get(4)?,
      direct_reports: row.get(5)?,
    })
  }

  pub fn into_employee(self) -> Result<Employee> {
    Ok(Employee {
      direct_reports: decode_reports(&self.direct_reports)?,
      employee_id:    EmployeeId::from(self.employee_id),
      first_name:     self.first_name,
      last_name:      self.last_name,
      position:       self.position,
      department:     self.department,
    })
  }
}

/// A `compensations` row exactly as read from SQLite.
pub struct RawCompensation {
  pub employee_id:    String,
  pub salary:         String,
  pub effective_date: String,
}

impl RawCompensation {
  pub fn into_compensation(self) -> Result<Compensation> {
    Ok(Compensation {
      salary:         decode_salary(&self.salary)?,
      effective_date: decode_date(&self.effective_date)?,
      employee_id:    EmployeeId::from(self.employee_id),
    })
  }
}
