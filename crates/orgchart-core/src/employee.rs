//! Employee records and the references that link them into a hierarchy.

use std::fmt;

use serde::{
  Deserialize, Deserializer, Serialize,
  de::{self, Visitor},
};
use uuid::Uuid;

// ─── Identifier ──────────────────────────────────────────────────────────────

/// An opaque employee identifier.
///
/// Freshly created employees get a hyphenated UUIDv4, but any string read back
/// from the store or supplied by a caller is accepted as-is. A JSON `null`
/// reads as the blank id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
  pub fn generate() -> Self { Self(Uuid::new_v4().hyphenated().to_string()) }

  pub fn as_str(&self) -> &str { &self.0 }

  pub fn is_blank(&self) -> bool { self.0.trim().is_empty() }
}

impl fmt::Display for EmployeeId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for EmployeeId {
  fn from(s: &str) -> Self { Self(s.to_owned()) }
}

impl From<String> for EmployeeId {
  fn from(s: String) -> Self { Self(s) }
}

impl<'de> Deserialize<'de> for EmployeeId {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    deserializer.deserialize_any(EmployeeIdVisitor)
  }
}

struct EmployeeIdVisitor;

impl<'de> Visitor<'de> for EmployeeIdVisitor {
  type Value = EmployeeId;

  fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("an employee id string or null")
  }

  fn visit_str<E: de::Error>(self, v: &str) -> Result<EmployeeId, E> {
    Ok(EmployeeId::from(v))
  }

  fn visit_string<E: de::Error>(self, v: String) -> Result<EmployeeId, E> {
    Ok(EmployeeId::from(v))
  }

  fn visit_unit<E: de::Error>(self) -> Result<EmployeeId, E> {
    Ok(EmployeeId::default())
  }

  fn visit_none<E: de::Error>(self) -> Result<EmployeeId, E> {
    Ok(EmployeeId::default())
  }

  fn visit_some<D>(self, deserializer: D) -> Result<EmployeeId, D::Error>
  where
    D: Deserializer<'de>,
  {
    EmployeeId::deserialize(deserializer)
  }
}

// ─── References ──────────────────────────────────────────────────────────────

/// An entry in an employee's `directReports` list.
///
/// Only the id is kept. A full employee document embedded in a parent's list
/// deserialises to the same reference as a bare `{"employeeId": ...}` stub, so
/// anything else the parent happened to embed is discarded rather than trusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRef {
  pub employee_id: EmployeeId,
}

impl From<EmployeeId> for EmployeeRef {
  fn from(employee_id: EmployeeId) -> Self { Self { employee_id } }
}

// ─── Employee ────────────────────────────────────────────────────────────────

/// A stored employee record. Missing or `null` fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Employee {
  pub employee_id:    EmployeeId,
  #[serde(deserialize_with = "null_as_default")]
  pub first_name:     String,
  #[serde(deserialize_with = "null_as_default")]
  pub last_name:      String,
  #[serde(deserialize_with = "null_as_default")]
  pub position:       String,
  #[serde(deserialize_with = "null_as_default")]
  pub department:     String,
  #[serde(deserialize_with = "null_as_default")]
  pub direct_reports: Vec<EmployeeRef>,
}

impl Employee {
  /// Ids of this employee's direct reports, in stored order.
  pub fn report_ids(&self) -> impl Iterator<Item = &EmployeeId> {
    self.direct_reports.iter().map(|r| &r.employee_id)
  }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
