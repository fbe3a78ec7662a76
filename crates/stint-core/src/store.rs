//! The `MigrationStore` trait — the narrow contract to the relational
//! store.
//!
//! The trait is implemented by storage backends (e.g.
//! `stint-store-sqlite`). The pipeline and the binary depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::{employee::Employee, work_time::WorkTime};

/// Abstraction over the staging area and the permanent tables.
///
/// Reads return rows in storage order; the pipeline relies on that order
/// for reproducible diagnostics. Every method is fallible with the
/// backend's own error type, and any error is fatal to the run — the
/// pipeline never retries.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes.
pub trait MigrationStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Staging reads ─────────────────────────────────────────────────────

  /// Fetch every staged employee, in storage order.
  fn fetch_employees(
    &self,
  ) -> impl Future<Output = Result<Vec<Employee>, Self::Error>> + Send + '_;

  /// Fetch every staged work time, in storage order.
  fn fetch_work_times(
    &self,
  ) -> impl Future<Output = Result<Vec<WorkTime>, Self::Error>> + Send + '_;

  // ── Permanent writes ──────────────────────────────────────────────────

  /// Persist one accepted employee.
  fn save_employee<'a>(
    &'a self,
    employee: &'a Employee,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Persist one accepted work time. Both dates must already be
  /// reformatted to the canonical `YYYY-MM-DD` form by the caller.
  fn save_work_time<'a>(
    &'a self,
    work_time: &'a WorkTime,
    start_date_iso: &'a str,
    stop_date_iso: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Persist one validation diagnostic.
  fn save_diagnostic<'a>(
    &'a self,
    message: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
