//! Service and engine tests against a small in-memory store.

use std::{
  collections::HashMap,
  sync::{Arc, Mutex},
};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
  Error, ErrorKind,
  compensation::Compensation,
  directory::EmployeeDirectory,
  employee::{Employee, EmployeeId, EmployeeRef},
  payroll::CompensationService,
  reporting::{MAX_TREE_DEPTH, ReportingEngine, ReportingNode},
  store::{CompensationStore, EmployeeStore},
};

// ─── In-memory store ─────────────────────────────────────────────────────────

#[derive(Default)]
struct MemoryStore {
  employees:     Mutex<HashMap<EmployeeId, Employee>>,
  compensations: Mutex<Vec<Compensation>>,
}

#[derive(Debug, thiserror::Error)]
enum MemoryError {
  #[error("duplicate employee id: {0}")]
  Duplicate(EmployeeId),
}

impl EmployeeStore for MemoryStore {
  type Error = MemoryError;

  async fn find_employee(
    &self,
    id: &EmployeeId,
  ) -> Result<Option<Employee>, MemoryError> {
    Ok(self.employees.lock().unwrap().get(id).cloned())
  }

  async fn insert_employee(&self, employee: Employee) -> Result<Employee, MemoryError> {
    let mut employees = self.employees.lock().unwrap();
    if employees.contains_key(&employee.employee_id) {
      return Err(MemoryError::Duplicate(employee.employee_id));
    }
    employees.insert(employee.employee_id.clone(), employee.clone());
    Ok(employee)
  }

  async fn save_employee(&self, employee: Employee) -> Result<Employee, MemoryError> {
    self
      .employees
      .lock()
      .unwrap()
      .insert(employee.employee_id.clone(), employee.clone());
    Ok(employee)
  }
}

impl CompensationStore for MemoryStore {
  type Error = MemoryError;

  async fn insert_compensation(
    &self,
    compensation: Compensation,
  ) -> Result<Compensation, MemoryError> {
    self.compensations.lock().unwrap().push(compensation.clone());
    Ok(compensation)
  }

  async fn find_compensation(
    &self,
    employee_id: &EmployeeId,
  ) -> Result<Option<Compensation>, MemoryError> {
    Ok(
      self
        .compensations
        .lock()
        .unwrap()
        .iter()
        .rev()
        .find(|c| &c.employee_id == employee_id)
        .cloned(),
    )
  }
}

// ─── Fixtures ────────────────────────────────────────────────────────────────

fn store() -> Arc<MemoryStore> { Arc::new(MemoryStore::default()) }

fn employee(id: &str, reports: &[&str]) -> Employee {
  Employee {
    employee_id:    EmployeeId::from(id),
    first_name:     format!("{id}-first"),
    last_name:      format!("{id}-last"),
    position:       "Developer".into(),
    department:     "Engineering".into(),
    direct_reports: reports.iter().map(|r| EmployeeRef::from(EmployeeId::from(*r))).collect(),
  }
}

async fn seed(store: &MemoryStore, employees: Vec<Employee>) {
  for e in employees {
    store.save_employee(e).await.unwrap();
  }
}

/// `n0 -> n1 -> ... -> n{len - 1}`, each the single report of the previous.
fn chain(len: usize) -> Vec<Employee> {
  (0..len)
    .map(|i| {
      let id = format!("n{i}");
      if i + 1 < len {
        employee(&id, &[format!("n{}", i + 1).as_str()])
      } else {
        employee(&id, &[])
      }
    })
    .collect()
}

/// Node count and deepest level below `node`, walked without recursion.
fn tree_shape(node: &ReportingNode) -> (usize, usize) {
  let mut count = 0;
  let mut depth = 0;
  let mut pending = vec![(node, 0)];
  while let Some((n, level)) = pending.pop() {
    depth = depth.max(level);
    for child in &n.direct_reports {
      count += 1;
      pending.push((child, level + 1));
    }
  }
  (count, depth)
}

fn engine(store: &Arc<MemoryStore>) -> ReportingEngine<MemoryStore> {
  ReportingEngine::new(EmployeeDirectory::new(Arc::clone(store)))
}

fn compensation(id: &str, salary: i64) -> Compensation {
  Compensation {
    employee_id:    EmployeeId::from(id),
    salary:         Decimal::from(salary),
    effective_date: NaiveDate::from_ymd_opt(2018, 8, 25).unwrap(),
  }
}

// ─── Directory ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_assigns_fresh_id_and_reads_back() {
  let s = store();
  let directory = EmployeeDirectory::new(Arc::clone(&s));

  let input = employee("caller-supplied", &[]);
  let created = directory.create(input.clone()).await.unwrap();

  assert!(!created.employee_id.is_blank());
  assert_ne!(created.employee_id, input.employee_id);
  assert_eq!(created.first_name, input.first_name);
  assert_eq!(created.last_name, input.last_name);
  assert_eq!(created.position, input.position);
  assert_eq!(created.department, input.department);

  let read = directory.read(&created.employee_id).await.unwrap();
  assert_eq!(read, created);
}

#[tokio::test]
async fn create_twice_yields_distinct_ids() {
  let directory = EmployeeDirectory::new(store());
  let a = directory.create(employee("x", &[])).await.unwrap();
  let b = directory.create(employee("x", &[])).await.unwrap();
  assert_ne!(a.employee_id, b.employee_id);
}

#[tokio::test]
async fn read_missing_employee_is_not_found() {
  let directory = EmployeeDirectory::new(store());
  let err = directory.read(&EmployeeId::from("nobody")).await.unwrap_err();
  assert!(matches!(err, Error::EmployeeNotFound(ref id) if id.as_str() == "nobody"));
  assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn update_replaces_whole_record() {
  let directory = EmployeeDirectory::new(store());
  let mut created = directory.create(employee("x", &[])).await.unwrap();

  created.position = "Development Manager".into();
  created.direct_reports = vec![EmployeeRef::from(EmployeeId::from("someone"))];
  let updated = directory.update(created.clone()).await.unwrap();
  assert_eq!(updated, created);

  let read = directory.read(&created.employee_id).await.unwrap();
  assert_eq!(read.position, "Development Manager");
  assert_eq!(read.direct_reports.len(), 1);
}

#[tokio::test]
async fn update_creates_missing_record() {
  let directory = EmployeeDirectory::new(store());
  directory.update(employee("fresh", &[])).await.unwrap();
  assert!(directory.read(&EmployeeId::from("fresh")).await.is_ok());
}

// ─── Compensation ────────────────────────────────────────────────────────────

#[tokio::test]
async fn compensation_create_and_read() {
  let s = store();
  seed(&s, vec![employee("e1", &[])]).await;
  let service = CompensationService::new(Arc::clone(&s));

  let created = service.create(compensation("e1", 80_000)).await.unwrap();
  assert_eq!(created, compensation("e1", 80_000));

  let read = service.read(&EmployeeId::from("e1")).await.unwrap();
  assert_eq!(read, created);
}

#[tokio::test]
async fn compensation_blank_employee_id_is_invalid_input() {
  let service = CompensationService::new(store());
  let err = service.create(compensation("  ", 1)).await.unwrap_err();
  assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[tokio::test]
async fn compensation_negative_salary_is_invalid_input() {
  let s = store();
  seed(&s, vec![employee("e1", &[])]).await;
  let service = CompensationService::new(s);

  let err = service.create(compensation("e1", -1)).await.unwrap_err();
  assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[tokio::test]
async fn compensation_unknown_employee_is_referential_integrity() {
  let s = store();
  let service = CompensationService::new(Arc::clone(&s));

  let err = service
    .create(compensation("00000000-0000-0000-0000-000000000000", 70_000))
    .await
    .unwrap_err();
  assert!(matches!(err, Error::UnknownEmployee(_)));
  assert_eq!(err.kind(), ErrorKind::ReferentialIntegrity);
  assert!(s.compensations.lock().unwrap().is_empty());
}

#[tokio::test]
async fn compensation_read_missing_is_not_found() {
  let service = CompensationService::new(store());
  let err = service.read(&EmployeeId::from("e1")).await.unwrap_err();
  assert!(matches!(err, Error::CompensationNotFound(_)));
  assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn compensation_reinsert_reads_latest() {
  let s = store();
  seed(&s, vec![employee("e1", &[])]).await;
  let service = CompensationService::new(s);

  service.create(compensation("e1", 50_000)).await.unwrap();
  service.create(compensation("e1", 60_000)).await.unwrap();

  let read = service.read(&EmployeeId::from("e1")).await.unwrap();
  assert_eq!(read.salary, Decimal::from(60_000));
}

// ─── Reporting structure ─────────────────────────────────────────────────────

#[tokio::test]
async fn counts_transitive_reports() {
  let s = store();
  seed(&s, vec![
    employee("r", &["a", "b"]),
    employee("a", &["c"]),
    employee("b", &[]),
    employee("c", &[]),
  ])
  .await;
  let engine = engine(&s);

  let root = engine.reporting_structure(&"r".into()).await.unwrap();
  assert_eq!(root.number_of_reports, 3);

  let b = engine.reporting_structure(&"b".into()).await.unwrap();
  assert_eq!(b.number_of_reports, 0);
  assert!(b.employee.direct_reports.is_empty());

  let a = engine.reporting_structure(&"a".into()).await.unwrap();
  assert_eq!(a.number_of_reports, 1);
}

#[tokio::test]
async fn result_tree_is_fully_resolved() {
  let s = store();
  seed(&s, vec![
    employee("r", &["a", "b"]),
    employee("a", &["c"]),
    employee("b", &[]),
    employee("c", &[]),
  ])
  .await;

  let structure = engine(&s).reporting_structure(&"r".into()).await.unwrap();
  let root = &structure.employee;
  assert_eq!(root.first_name, "r-first");
  assert_eq!(root.direct_reports.len(), 2);
  assert_eq!(root.direct_reports[0].employee_id.as_str(), "a");
  assert_eq!(root.direct_reports[0].last_name, "a-last");
  assert_eq!(root.direct_reports[1].employee_id.as_str(), "b");
  assert_eq!(root.direct_reports[0].direct_reports[0].first_name, "c-first");
  assert_eq!(tree_shape(root), (structure.number_of_reports, 2));
}

#[tokio::test]
async fn stale_embedded_reports_are_ignored() {
  let s = store();
  // The parent document embeds an out-of-date copy of its report; only the
  // id survives and the child is resolved from its own record.
  let parent: Employee = serde_json::from_str(
    r#"{
      "employeeId": "p",
      "directReports": [
        {"employeeId": "c", "firstName": "Stale", "directReports": [{"employeeId": "gone"}]}
      ]
    }"#,
  )
  .unwrap();
  seed(&s, vec![parent, employee("c", &["g"]), employee("g", &[])]).await;

  let structure = engine(&s).reporting_structure(&"p".into()).await.unwrap();
  assert_eq!(structure.number_of_reports, 2);
  let child = &structure.employee.direct_reports[0];
  assert_eq!(child.first_name, "c-first");
  assert_eq!(child.direct_reports[0].employee_id.as_str(), "g");
}

#[tokio::test]
async fn deep_chain_counts_every_level() {
  let s = store();
  seed(&s, chain(50)).await;

  let structure = engine(&s).reporting_structure(&"n0".into()).await.unwrap();
  assert_eq!(structure.number_of_reports, 49);
  assert_eq!(tree_shape(&structure.employee), (49, 49));
}

#[tokio::test]
async fn chain_at_depth_limit_is_fully_nested() {
  let s = store();
  seed(&s, chain(MAX_TREE_DEPTH + 1)).await;

  let structure = engine(&s).reporting_structure(&"n0".into()).await.unwrap();
  assert_eq!(structure.number_of_reports, MAX_TREE_DEPTH);
  assert_eq!(
    tree_shape(&structure.employee),
    (MAX_TREE_DEPTH, MAX_TREE_DEPTH)
  );
}

#[tokio::test]
async fn very_deep_chain_is_rejected() {
  let s = store();
  seed(&s, chain(10_000)).await;

  let err = engine(&s).reporting_structure(&"n0".into()).await.unwrap_err();
  assert_eq!(err.kind(), ErrorKind::LimitExceeded);
  let expected = format!("n{}", MAX_TREE_DEPTH + 1);
  assert!(matches!(
    err,
    Error::HierarchyTooDeep { ref employee_id, limit }
      if employee_id.as_str() == expected && limit == MAX_TREE_DEPTH
  ));

  // Below the limit the same chain still answers.
  let inner = format!("n{}", 10_000 - 10);
  let structure = engine(&s).reporting_structure(&inner.into()).await.unwrap();
  assert_eq!(structure.number_of_reports, 9);
}

#[tokio::test]
async fn wide_hierarchy_is_not_limited() {
  let s = store();
  let ids: Vec<String> = (0..10_000).map(|i| format!("w{i}")).collect();
  let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
  let mut employees = vec![employee("boss", &refs)];
  employees.extend(refs.iter().map(|id| employee(id, &[])));
  seed(&s, employees).await;

  let structure = engine(&s).reporting_structure(&"boss".into()).await.unwrap();
  assert_eq!(structure.number_of_reports, 10_000);
  assert_eq!(tree_shape(&structure.employee), (10_000, 1));
}

#[test]
fn deeply_nested_tree_drops_cleanly() {
  let mut node = ReportingNode {
    employee_id:    "leaf".into(),
    first_name:     String::new(),
    last_name:      String::new(),
    position:       String::new(),
    department:     String::new(),
    direct_reports: Vec::new(),
  };
  for i in 0..200_000 {
    node = ReportingNode {
      employee_id:    format!("n{i}").into(),
      first_name:     String::new(),
      last_name:      String::new(),
      position:       String::new(),
      department:     String::new(),
      direct_reports: vec![node],
    };
  }
  drop(node);
}

#[tokio::test]
async fn missing_root_is_not_found() {
  let err = engine(&store())
    .reporting_structure(&"nobody".into())
    .await
    .unwrap_err();
  assert!(matches!(err, Error::EmployeeNotFound(ref id) if id.as_str() == "nobody"));
}

#[tokio::test]
async fn dangling_report_is_not_found() {
  let s = store();
  seed(&s, vec![employee("r", &["ghost"])]).await;

  let err = engine(&s).reporting_structure(&"r".into()).await.unwrap_err();
  assert!(matches!(err, Error::EmployeeNotFound(ref id) if id.as_str() == "ghost"));
}

#[tokio::test]
async fn direct_self_reference_is_a_cycle() {
  let s = store();
  seed(&s, vec![employee("r", &["r"])]).await;

  let err = engine(&s).reporting_structure(&"r".into()).await.unwrap_err();
  assert!(matches!(err, Error::CycleDetected(ref id) if id.as_str() == "r"));
  assert_eq!(err.kind(), ErrorKind::CycleDetected);
}

#[tokio::test]
async fn mutual_reports_are_a_cycle() {
  let s = store();
  seed(&s, vec![employee("parent", &["child"]), employee("child", &["parent"])]).await;

  let err = engine(&s)
    .reporting_structure(&"parent".into())
    .await
    .unwrap_err();
  assert!(matches!(err, Error::CycleDetected(ref id) if id.as_str() == "parent"));

  let err = engine(&s)
    .reporting_structure(&"child".into())
    .await
    .unwrap_err();
  assert!(matches!(err, Error::CycleDetected(ref id) if id.as_str() == "child"));
}

#[tokio::test]
async fn shared_report_under_two_managers_is_a_cycle() {
  let s = store();
  seed(&s, vec![
    employee("r", &["a", "b"]),
    employee("a", &["d"]),
    employee("b", &["d"]),
    employee("d", &[]),
  ])
  .await;

  let err = engine(&s).reporting_structure(&"r".into()).await.unwrap_err();
  assert!(matches!(err, Error::CycleDetected(ref id) if id.as_str() == "d"));
}

#[tokio::test]
async fn duplicate_sibling_entries_are_a_cycle() {
  let s = store();
  seed(&s, vec![employee("r", &["a", "a"]), employee("a", &[])]).await;

  let err = engine(&s).reporting_structure(&"r".into()).await.unwrap_err();
  assert!(matches!(err, Error::CycleDetected(ref id) if id.as_str() == "a"));
}

#[tokio::test]
async fn cycle_below_root_is_detected() {
  let s = store();
  seed(&s, vec![
    employee("r", &["a"]),
    employee("a", &["b"]),
    employee("b", &["a"]),
  ])
  .await;

  let err = engine(&s).reporting_structure(&"r".into()).await.unwrap_err();
  assert!(matches!(err, Error::CycleDetected(ref id) if id.as_str() == "a"));
}

// ─── Wire format ─────────────────────────────────────────────────────────────

#[test]
fn employee_accepts_stub_and_full_report_entries() {
  let json = r#"{
    "employeeId": "r",
    "firstName": "John",
    "directReports": [
      {"employeeId": "a"},
      {"employeeId": "b", "firstName": "Embedded", "directReports": [{"employeeId": "z"}]}
    ]
  }"#;
  let e: Employee = serde_json::from_str(json).unwrap();
  assert_eq!(e.first_name, "John");
  assert_eq!(e.last_name, "");
  let ids: Vec<&str> = e.report_ids().map(EmployeeId::as_str).collect();
  assert_eq!(ids, ["a", "b"]);
}

#[test]
fn employee_null_direct_reports_is_empty() {
  let e: Employee =
    serde_json::from_str(r#"{"employeeId": "x", "directReports": null}"#).unwrap();
  assert!(e.direct_reports.is_empty());
}

#[test]
fn compensation_without_employee_id_is_blank() {
  let c: Compensation =
    serde_json::from_str(r#"{"salary": 80000, "effectiveDate": "2018-08-25"}"#).unwrap();
  assert!(c.employee_id.is_blank());
  assert_eq!(c.salary, Decimal::from(80_000));
}

#[test]
fn employee_null_fields_read_as_empty() {
  let e: Employee = serde_json::from_str(
    r#"{"employeeId": null, "firstName": null, "lastName": "Doe", "position": null, "department": null}"#,
  )
  .unwrap();
  assert!(e.employee_id.is_blank());
  assert_eq!(e.first_name, "");
  assert_eq!(e.last_name, "Doe");
  assert_eq!(e.department, "");
}

#[tokio::test]
async fn compensation_null_employee_id_is_invalid_input() {
  let c: Compensation = serde_json::from_str(
    r#"{"employeeId": null, "salary": 70000, "effectiveDate": "2018-08-25"}"#,
  )
  .unwrap();
  assert!(c.employee_id.is_blank());

  let err = CompensationService::new(store()).create(c).await.unwrap_err();
  assert_eq!(err.kind(), ErrorKind::InvalidInput);
}
