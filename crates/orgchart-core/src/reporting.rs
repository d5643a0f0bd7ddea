//! Reporting structure: the transitive report count for an employee.
//!
//! The stored `directReports` relation is a mutable graph with nothing in the
//! store preventing cycles, so [`ReportingEngine`] checks every node it
//! reaches and fails on the first one it sees twice. Every employee is
//! expected to have exactly one supervisor path, which means an employee
//! listed by two managers is rejected the same way as a genuine cycle.
//!
//! The resolved tree is returned nested, so its depth is capped at
//! [`MAX_TREE_DEPTH`] levels below the root; deeper hierarchies fail with
//! [`Error::HierarchyTooDeep`] instead of producing a tree that cannot be
//! serialised.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  directory::EmployeeDirectory,
  employee::{Employee, EmployeeId},
  store::EmployeeStore,
};

/// Deepest level, counted from the root at `0`, that a reporting tree may
/// reach.
pub const MAX_TREE_DEPTH: usize = 256;

// ─── Result types ────────────────────────────────────────────────────────────

/// An employee with every direct report resolved to a full record,
/// recursively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingNode {
  pub employee_id:    EmployeeId,
  pub first_name:     String,
  pub last_name:      String,
  pub position:       String,
  pub department:     String,
  pub direct_reports: Vec<ReportingNode>,
}

impl ReportingNode {
  fn leaf(employee: Employee) -> Self {
    Self {
      employee_id:    employee.employee_id,
      first_name:     employee.first_name,
      last_name:      employee.last_name,
      position:       employee.position,
      department:     employee.department,
      direct_reports: Vec::new(),
    }
  }
}

// Drop children from a flat worklist rather than recursing once per level.
impl Drop for ReportingNode {
  fn drop(&mut self) {
    let mut pending = std::mem::take(&mut self.direct_reports);
    while let Some(mut node) = pending.pop() {
      pending.append(&mut node.direct_reports);
    }
  }
}

/// The computed, never-stored answer to "who reports to this employee".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingStructure {
  pub employee:          ReportingNode,
  /// Distinct employees reachable through `directReports`, excluding the
  /// root itself.
  pub number_of_reports: usize,
}

// ─── Engine ──────────────────────────────────────────────────────────────────

pub struct ReportingEngine<S> {
  directory: EmployeeDirectory<S>,
}

impl<S> Clone for ReportingEngine<S> {
  fn clone(&self) -> Self { Self { directory: self.directory.clone() } }
}

impl<S: EmployeeStore> ReportingEngine<S> {
  pub fn new(directory: EmployeeDirectory<S>) -> Self { Self { directory } }

  /// Walk the reports of `root_id` breadth-first and count them.
  ///
  /// Each reached id is resolved through the directory before its own reports
  /// are followed; the entries embedded in a parent's record are only ever
  /// used for their ids. Fails with [`Error::EmployeeNotFound`] if the root or
  /// any referenced report is missing, and with [`Error::CycleDetected`] as
  /// soon as an id is dequeued for the second time. A report more than
  /// [`MAX_TREE_DEPTH`] levels below the root fails with
  /// [`Error::HierarchyTooDeep`].
  pub async fn reporting_structure(
    &self,
    root_id: &EmployeeId,
  ) -> Result<ReportingStructure> {
    tracing::debug!(employee_id = %root_id, "computing reporting structure");

    let root = self.directory.read(root_id).await?;

    let mut visited  = HashSet::from([root_id.clone()]);
    let mut resolved = HashMap::new();
    let mut queue: VecDeque<(EmployeeId, usize)> =
      root.report_ids().map(|id| (id.clone(), 1)).collect();

    while let Some((current, depth)) = queue.pop_front() {
      if !visited.insert(current.clone()) {
        tracing::error!(
          root = %root_id,
          employee_id = %current,
          "reporting structure contains a cycle"
        );
        return Err(Error::CycleDetected(current));
      }
      if depth > MAX_TREE_DEPTH {
        tracing::warn!(
          root = %root_id,
          employee_id = %current,
          limit = MAX_TREE_DEPTH,
          "reporting structure too deep"
        );
        return Err(Error::HierarchyTooDeep {
          employee_id: current,
          limit:       MAX_TREE_DEPTH,
        });
      }

      let full = self.directory.read(&current).await?;
      queue.extend(full.report_ids().map(|id| (id.clone(), depth + 1)));
      resolved.insert(current, full);
    }

    let number_of_reports = resolved.len();
    let employee = assemble(root, &mut resolved);

    Ok(ReportingStructure { employee, number_of_reports })
  }
}

/// A node under construction and the report ids it has yet to link.
struct Frame {
  node:    ReportingNode,
  pending: std::vec::IntoIter<EmployeeId>,
}

impl Frame {
  fn new(employee: Employee) -> Self {
    let pending: Vec<EmployeeId> = employee.report_ids().cloned().collect();
    Self { node: ReportingNode::leaf(employee), pending: pending.into_iter() }
  }
}

/// Build the result tree by value, taking each resolved record out of
/// `resolved` as it is linked under its parent.
///
/// Every id occurs at most once across all `directReports` lists once the
/// traversal has succeeded, so each record is consumed exactly once. The walk
/// is depth-first with an explicit stack; a node is attached to its parent
/// once all of its own reports are linked.
fn assemble(
  root: Employee,
  resolved: &mut HashMap<EmployeeId, Employee>,
) -> ReportingNode {
  let mut stack: Vec<Frame> = Vec::new();
  let mut current = Frame::new(root);

  loop {
    match current.pending.next() {
      Some(id) => {
        if let Some(child) = resolved.remove(&id) {
          stack.push(current);
          current = Frame::new(child);
        }
      }
      None => match stack.pop() {
        Some(mut parent) => {
          parent.node.direct_reports.push(current.node);
          current = parent;
        }
        None => return current.node,
      },
    }
  }
}
