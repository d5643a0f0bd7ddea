//! [`SqliteStore`] — the SQLite implementation of the core store traits.

use std::path::Path;

use orgchart_core::{
  compensation::Compensation,
  employee::{Employee, EmployeeId},
  store::{CompensationStore, EmployeeStore},
};
use rusqlite::OptionalExtension as _;

use crate::{
  Error, Result,
  encode::{RawCompensation, RawEmployee, encode_date, encode_reports, encode_salary},
  schema::SCHEMA,
};

const EMPLOYEE_COLUMNS: &str =
  "employee_id, first_name, last_name, position, department, direct_reports";

// ─── Store ───────────────────────────────────────────────────────────────────

/// An employee and compensation store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    tracing::debug!(path = %path.as_ref().display(), "opening sqlite store");
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

/// Column values for one `employees` row, encoded ahead of the blocking call.
struct EmployeeParams {
  employee_id:    String,
  first_name:     String,
  last_name:      String,
  position:       String,
  department:     String,
  direct_reports: String,
}

impl EmployeeParams {
  fn encode(employee: &Employee) -> Result<Self> {
    Ok(Self {
      employee_id:    employee.employee_id.as_str().to_owned(),
      first_name:     employee.first_name.clone(),
      last_name:      employee.last_name.clone(),
      position:       employee.position.clone(),
      department:     employee.department.clone(),
      direct_reports: encode_reports(&employee.direct_reports)?,
    })
  }
}

// ─── EmployeeStore impl ──────────────────────────────────────────────────────

impl EmployeeStore for SqliteStore {
  type Error = Error;

  async fn find_employee(&self, id: &EmployeeId) -> Result<Option<Employee>> {
    let id_str = id.as_str().to_owned();

    let raw: Option<RawEmployee> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE employee_id = ?1"),
              rusqlite::params![id_str],
              RawEmployee::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawEmployee::into_employee).transpose()
  }

  async fn insert_employee(&self, employee: Employee) -> Result<Employee> {
    let p = EmployeeParams::encode(&employee)?;

    let rows = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          &format!(
            "INSERT OR IGNORE INTO employees ({EMPLOYEE_COLUMNS})
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)"
          ),
          rusqlite::params![
            p.employee_id,
            p.first_name,
            p.last_name,
            p.position,
            p.department,
            p.direct_reports,
          ],
        )?)
      })
      .await?;

    if rows == 0 {
      return Err(Error::DuplicateEmployee(employee.employee_id));
    }
    Ok(employee)
  }

  async fn save_employee(&self, employee: Employee) -> Result<Employee> {
    let p = EmployeeParams::encode(&employee)?;

    self
      .conn
      .call(move |conn| {
        conn.execute(
          &format!(
            "INSERT INTO employees ({EMPLOYEE_COLUMNS})
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT (employee_id) DO UPDATE SET
               first_name     = excluded.first_name,
               last_name      = excluded.last_name,
               position       = excluded.position,
               department     = excluded.department,
               direct_reports = excluded.direct_reports"
          ),
          rusqlite::params![
            p.employee_id,
            p.first_name,
            p.last_name,
            p.position,
            p.department,
            p.direct_reports,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(employee)
  }
}

// ─── CompensationStore impl ──────────────────────────────────────────────────

impl CompensationStore for SqliteStore {
  type Error = Error;

  async fn insert_compensation(&self, compensation: Compensation) -> Result<Compensation> {
    let employee_id = compensation.employee_id.as_str().to_owned();
    let salary      = encode_salary(compensation.salary);
    let date        = encode_date(compensation.effective_date);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO compensations (employee_id, salary, effective_date)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![employee_id, salary, date],
        )?;
        Ok(())
      })
      .await?;

    Ok(compensation)
  }

  async fn find_compensation(
    &self,
    employee_id: &EmployeeId,
  ) -> Result<Option<Compensation>> {
    let id_str = employee_id.as_str().to_owned();

    let raw: Option<RawCompensation> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT employee_id, salary, effective_date FROM compensations
               WHERE employee_id = ?1
               ORDER BY compensation_id DESC
               LIMIT 1",
              rusqlite::params![id_str],
              |row| {
                Ok(RawCompensation {
                  employee_id:    row.get(0)?,
                  salary:         row.get(1)?,
                  effective_date: row.get(2)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawCompensation::into_compensation).transpose()
  }
}
