//! Integration tests for `SqliteStore` against an in-memory database.

use stint_core::{
  employee::Employee,
  pipeline::{MigrationSummary, run_migration},
  store::MigrationStore,
  work_time::WorkTime,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn employee(id: i64, full_name: &str) -> Employee {
  Employee {
    id,
    full_name: full_name.to_string(),
  }
}

fn shift(id: i64, employee_id: i64) -> WorkTime {
  WorkTime {
    id,
    employee_id,
    start_date: "1.3.2024".to_string(),
    start_time: "09:00:00".to_string(),
    stop_date: "1.3.2024".to_string(),
    stop_time: "17:00:00".to_string(),
  }
}

// ─── Staging ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_staging_fetches_nothing() {
  let s = store().await;
  assert!(s.fetch_employees().await.unwrap().is_empty());
  assert!(s.fetch_work_times().await.unwrap().is_empty());
}

#[tokio::test]
async fn staged_rows_fetch_back_in_insertion_order() {
  let s = store().await;
  s.stage_employee(&employee(2, "John Roe")).await.unwrap();
  s.stage_employee(&employee(1, "Jane Doe")).await.unwrap();
  s.stage_work_time(&shift(11, 2)).await.unwrap();
  s.stage_work_time(&shift(10, 1)).await.unwrap();

  let employees = s.fetch_employees().await.unwrap();
  assert_eq!(employees, vec![
    employee(2, "John Roe"),
    employee(1, "Jane Doe"),
  ]);

  let work_times = s.fetch_work_times().await.unwrap();
  assert_eq!(work_times[0].id, 11);
  assert_eq!(work_times[1].id, 10);
}

#[tokio::test]
async fn staging_accepts_negative_and_duplicate_ids() {
  // Staging is a raw landing zone; bad rows must land so validation can
  // see them.
  let s = store().await;
  s.stage_employee(&employee(-1, "Bob")).await.unwrap();
  s.stage_employee(&employee(-1, "Bob")).await.unwrap();
  assert_eq!(s.fetch_employees().await.unwrap().len(), 2);
}

// ─── End-to-end migration ────────────────────────────────────────────────────

#[tokio::test]
async fn clean_batch_is_migrated_with_iso_dates() {
  let s = store().await;
  s.stage_employee(&employee(5, "Jane Doe")).await.unwrap();
  s.stage_work_time(&shift(10, 5)).await.unwrap();

  let summary = run_migration(&s).await.unwrap();
  assert_eq!(summary, MigrationSummary {
    employees_accepted:  1,
    employees_rejected:  0,
    work_times_accepted: 1,
    work_times_rejected: 0,
    diagnostics:         0,
  });

  assert_eq!(s.migrated_employees().await.unwrap(), vec![employee(
    5, "Jane Doe"
  )]);

  let migrated = s.migrated_work_times().await.unwrap();
  assert_eq!(migrated.len(), 1);
  assert_eq!(migrated[0].id, 10);
  assert_eq!(migrated[0].employee_id, 5);
  assert_eq!(migrated[0].start_date, "2024-03-01");
  assert_eq!(migrated[0].stop_date, "2024-03-01");
  assert_eq!(migrated[0].start_time, "09:00:00");
  assert_eq!(migrated[0].stop_time, "17:00:00");

  assert!(s.recorded_failures().await.unwrap().is_empty());
}

#[tokio::test]
async fn rejected_rows_stay_out_and_failures_are_logged_in_order() {
  let s = store().await;
  s.stage_employee(&employee(5, "Jane Doe")).await.unwrap();
  s.stage_employee(&employee(-1, "Bob")).await.unwrap();
  s.stage_employee(&employee(7, "J0hn")).await.unwrap();
  s.stage_work_time(&shift(10, 5)).await.unwrap();
  s.stage_work_time(&shift(11, -1)).await.unwrap();
  s.stage_work_time(&shift(12, 7)).await.unwrap();
  s.stage_work_time(&shift(13, 99)).await.unwrap();

  let summary = run_migration(&s).await.unwrap();
  assert_eq!(summary, MigrationSummary {
    employees_accepted:  1,
    employees_rejected:  2,
    work_times_accepted: 1,
    work_times_rejected: 3,
    diagnostics:         5,
  });

  // Only the clean employee and their shift were migrated.
  let employees = s.migrated_employees().await.unwrap();
  assert_eq!(employees, vec![employee(5, "Jane Doe")]);
  let work_times = s.migrated_work_times().await.unwrap();
  assert_eq!(work_times.len(), 1);
  assert_eq!(work_times[0].id, 10);

  // The failure log holds every diagnostic, in accumulation order: the
  // two employee failures first, then the work-time failures in fetch
  // order. The shift of the rejected employee 7 cascades to the same
  // wording as the dangling reference.
  assert_eq!(s.recorded_failures().await.unwrap(), vec![
    "Employee ID -1 is invalid".to_string(),
    "Employee (id: 7); Employee full name contains invalid characters"
      .to_string(),
    "WorkTime (id: 11); Employee ID -1 is invalid".to_string(),
    "WorkTime (id: 12); Employee ID 7 does not exist".to_string(),
    "WorkTime (id: 13); Employee ID 99 does not exist".to_string(),
  ]);
}

#[tokio::test]
async fn misordered_interval_is_rejected_before_integrity() {
  let s = store().await;
  s.stage_employee(&employee(5, "Jane Doe")).await.unwrap();
  s.stage_work_time(&WorkTime {
    start_date: "2.3.2024".to_string(),
    ..shift(14, 5)
  })
  .await
  .unwrap();

  let summary = run_migration(&s).await.unwrap();
  assert_eq!(summary.work_times_accepted, 0);
  assert_eq!(summary.work_times_rejected, 1);
  assert!(s.migrated_work_times().await.unwrap().is_empty());
  assert_eq!(s.recorded_failures().await.unwrap(), vec![
    "WorkTime (id: 14); Start date and time is after stop date and time"
      .to_string(),
  ]);
}
