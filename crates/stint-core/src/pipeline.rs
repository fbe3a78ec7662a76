//! The migration pipeline — orchestrates one batch run end to end.
//!
//! Sequencing is load-bearing: every accepted employee is persisted before
//! any work time is examined, so the integrity check sees the final
//! accepted-employee set, and diagnostics flush last, in emission order.
//! There is exactly one logical worker; each record completes
//! (validate → persist) before the next begins.

use crate::{
  error::MigrationError,
  report::ValidationReport,
  store::MigrationStore,
  validate::{check_integrity, validate_employee, validate_work_time},
  work_time,
};

/// Per-entity accept/reject counts for one completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationSummary {
  pub employees_accepted:  usize,
  pub employees_rejected:  usize,
  pub work_times_accepted: usize,
  pub work_times_rejected: usize,
  pub diagnostics:         usize,
}

/// Run one batch to completion.
///
/// Any store error aborts immediately: rows already written stay written
/// and unflushed diagnostics are lost. The caller decides what to do with
/// the failure; there is no retry.
pub async fn run_migration<S: MigrationStore>(
  store: &S,
) -> Result<MigrationSummary, MigrationError<S::Error>> {
  let mut report = ValidationReport::new();
  let mut summary = MigrationSummary::default();

  let employees =
    store.fetch_employees().await.map_err(MigrationError::Store)?;
  tracing::debug!(staged = employees.len(), "fetched staged employees");

  for employee in &employees {
    if validate_employee(employee, &mut report) {
      store
        .save_employee(employee)
        .await
        .map_err(MigrationError::Store)?;
      summary.employees_accepted += 1;
    } else {
      report.reject_employee(employee.id);
      summary.employees_rejected += 1;
    }
  }

  let work_times =
    store.fetch_work_times().await.map_err(MigrationError::Store)?;
  tracing::debug!(staged = work_times.len(), "fetched staged work times");

  for work_time in &work_times {
    // Integrity is only consulted for rows whose own format checks all
    // passed.
    if !validate_work_time(work_time, &mut report)
      || !check_integrity(work_time, &employees, &mut report)
    {
      summary.work_times_rejected += 1;
      continue;
    }

    let start_date_iso = reformat(work_time.id, &work_time.start_date)?;
    let stop_date_iso = reformat(work_time.id, &work_time.stop_date)?;
    store
      .save_work_time(work_time, &start_date_iso, &stop_date_iso)
      .await
      .map_err(MigrationError::Store)?;
    summary.work_times_accepted += 1;
  }

  for message in report.diagnostics() {
    store
      .save_diagnostic(message)
      .await
      .map_err(MigrationError::Store)?;
  }
  summary.diagnostics = report.len();

  Ok(summary)
}

fn reformat<E>(id: i64, date: &str) -> Result<String, MigrationError<E>>
where
  E: std::error::Error + 'static,
{
  work_time::to_iso_date(date).map_err(|source| {
    MigrationError::DateReformat {
      id,
      value: date.to_string(),
      source,
    }
  })
}

// ─── Tests ───────────────────────────────────────────────────────────────────
