//! SQL schema for the org-chart SQLite store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! schema revision so later migrations can be gated on it.

/// Full schema DDL; idempotent thanks to `CREATE ... IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One document per employee. Reports are embedded by key only; the store
-- does not check that they exist or that they form a tree.
CREATE TABLE IF NOT EXISTS employees (
    employee_id    TEXT PRIMARY KEY,
    first_name     TEXT NOT NULL DEFAULT '',
    last_name      TEXT NOT NULL DEFAULT '',
    position       TEXT NOT NULL DEFAULT '',
    department     TEXT NOT NULL DEFAULT '',
    direct_reports TEXT NOT NULL DEFAULT '[]'   -- JSON array of employee ids
);

-- Re-insertion for the same employee is allowed; reads return the newest row.
CREATE TABLE IF NOT EXISTS compensations (
    compensation_id INTEGER PRIMARY KEY AUTOINCREMENT,
    employee_id     TEXT NOT NULL,
    salary          TEXT NOT NULL,   -- decimal rendered as text, exact
    effective_date  TEXT NOT NULL    -- YYYY-MM-DD
);

CREATE INDEX IF NOT EXISTS compensations_employee_idx ON compensations(employee_id);

PRAGMA user_version = 1;
";
