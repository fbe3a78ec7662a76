//! Validation rules for staged records.
//!
//! Every rule for a record is evaluated unconditionally, so a single pass
//! records every applicable diagnostic; the verdict is the fold of all
//! rule outcomes. Diagnostic wording is stable — downstream tooling
//! matches on it.

use crate::{
  employee::Employee, report::ValidationReport, work_time::WorkTime,
};

/// `true` when the name contains only Unicode letters and whitespace.
/// The empty string passes vacuously; emptiness is its own rule.
fn name_is_clean(name: &str) -> bool {
  name.chars().all(|c| c.is_alphabetic() || c.is_whitespace())
}

/// Validate one staged employee, appending a diagnostic per failed rule.
pub fn validate_employee(
  employee: &Employee,
  report: &mut ValidationReport,
) -> bool {
  let mut accepted = true;

  if employee.id < 0 {
    report.push(format!("Employee ID {} is invalid", employee.id));
    accepted = false;
  }

  if employee.full_name.is_empty() {
    report.push(format!(
      "Employee (id: {}); Employee full name is empty",
      employee.id
    ));
    accepted = false;
  }

  if !name_is_clean(&employee.full_name) {
    report.push(format!(
      "Employee (id: {}); Employee full name contains invalid characters",
      employee.id
    ));
    accepted = false;
  }

  accepted
}

/// Validate one staged work time for internal format correctness,
/// independent of any employee.
///
/// The ordering rule only runs when both instants parsed; comparing
/// against a placeholder instant would stack a spurious ordering
/// diagnostic on top of the parse diagnostic.
pub fn validate_work_time(
  work_time: &WorkTime,
  report: &mut ValidationReport,
) -> bool {
  let mut accepted = true;

  if work_time.id < 0 {
    report.push(format!("WorkTime ID {} is invalid", work_time.id));
    accepted = false;
  }

  if work_time.employee_id < 0 {
    report.push(format!(
      "WorkTime (id: {}); Employee ID {} is invalid",
      work_time.id, work_time.employee_id
    ));
    accepted = false;
  }

  let start = work_time.start_instant();
  if start.is_err() {
    report.push(format!(
      "WorkTime (id: {}); Start date and time is invalid",
      work_time.id
    ));
    accepted = false;
  }

  let stop = work_time.stop_instant();
  if stop.is_err() {
    report.push(format!(
      "WorkTime (id: {}); Stop date and time is invalid",
      work_time.id
    ));
    accepted = false;
  }

  if let (Ok(start), Ok(stop)) = (start, stop)
    && start > stop
  {
    report.push(format!(
      "WorkTime (id: {}); Start date and time is after stop date and time",
      work_time.id
    ));
    accepted = false;
  }

  accepted
}

/// Confirm a work time's employee reference resolves to a staged employee
/// that passed validation.
///
/// Scans the full staged employee set; an id that is absent and an id that
/// is present but rejected produce the same diagnostic. Callers only
/// invoke this after [`validate_work_time`] accepted the record.
pub fn check_integrity(
  work_time: &WorkTime,
  employees: &[Employee],
  report: &mut ValidationReport,
) -> bool {
  let found = employees
    .iter()
    .any(|e| e.id == work_time.employee_id && !report.is_rejected(e.id));

  if !found {
    report.push(format!(
      "WorkTime (id: {}); Employee ID {} does not exist",
      work_time.id, work_time.employee_id
    ));
  }

  found
}

// ─── Tests ───────────────────────────────────────────────────────────────────
