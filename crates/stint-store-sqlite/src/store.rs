//! [`SqliteStore`] — the SQLite implementation of [`MigrationStore`].

use std::path::Path;

use stint_core::{
  employee::Employee, store::MigrationStore, work_time::WorkTime,
};

use crate::{Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A staging area and permanent store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
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

  // ── Staging loaders ───────────────────────────────────────────────────────

  /// Insert one raw employee row into the staging area.
  ///
  /// Staged rows are unvalidated by definition; nothing is checked here.
  pub async fn stage_employee(&self, employee: &Employee) -> Result<()> {
    let id = employee.id;
    let full_name = employee.full_name.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO staging_employees (id, full_name) VALUES (?1, ?2)",
          rusqlite::params![id, full_name],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Insert one raw work-time row into the staging area.
  pub async fn stage_work_time(&self, work_time: &WorkTime) -> Result<()> {
    let row = work_time.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO staging_work_times (
             id, employee_id, start_date, start_time, stop_date, stop_time
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            row.id,
            row.employee_id,
            row.start_date,
            row.start_time,
            row.stop_date,
            row.stop_time,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Inspection reads ──────────────────────────────────────────────────────

  /// All permanent employees, in insertion order.
  pub async fn migrated_employees(&self) -> Result<Vec<Employee>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt = conn
          .prepare("SELECT id, full_name FROM employees ORDER BY rowid")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(Employee {
              id:        row.get(0)?,
              full_name: row.get(1)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  /// All permanent work times, in insertion order. Dates in these rows are
  /// already in the canonical `YYYY-MM-DD` form.
  pub async fn migrated_work_times(&self) -> Result<Vec<WorkTime>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, employee_id, start_date, start_time, stop_date, stop_time
           FROM work_times ORDER BY rowid",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(WorkTime {
              id:          row.get(0)?,
              employee_id: row.get(1)?,
              start_date:  row.get(2)?,
              start_time:  row.get(3)?,
              stop_date:   row.get(4)?,
              stop_time:   row.get(5)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  /// All persisted diagnostics, in accumulation order.
  pub async fn recorded_failures(&self) -> Result<Vec<String>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT message FROM validation_failures ORDER BY failure_id",
        )?;
        let rows = stmt
          .query_map([], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }
}

// ─── MigrationStore impl ─────────────────────────────────────────────────────

impl MigrationStore for SqliteStore {
  type Error = crate::Error;

  // ── Staging reads ─────────────────────────────────────────────────────────

  async fn fetch_employees(&self) -> Result<Vec<Employee>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, full_name FROM staging_employees ORDER BY rowid",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(Employee {
              id:        row.get(0)?,
              full_name: row.get(1)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn fetch_work_times(&self) -> Result<Vec<WorkTime>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, employee_id, start_date, start_time, stop_date, stop_time
           FROM staging_work_times ORDER BY rowid",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(WorkTime {
              id:          row.get(0)?,
              employee_id: row.get(1)?,
              start_date:  row.get(2)?,
              start_time:  row.get(3)?,
              stop_date:   row.get(4)?,
              stop_time:   row.get(5)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  // ── Permanent writes ──────────────────────────────────────────────────────

  async fn save_employee(&self, employee: &Employee) -> Result<()> {
    let id = employee.id;
    let full_name = employee.full_name.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO employees (id, full_name) VALUES (?1, ?2)",
          rusqlite::params![id, full_name],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn save_work_time(
    &self,
    work_time: &WorkTime,
    start_date_iso: &str,
    stop_date_iso: &str,
  ) -> Result<()> {
    let id = work_time.id;
    let employee_id = work_time.employee_id;
    let start_date = start_date_iso.to_string();
    let start_time = work_time.start_time.clone();
    let stop_date = stop_date_iso.to_string();
    let stop_time = work_time.stop_time.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO work_times (
             id, employee_id, start_date, start_time, stop_date, stop_time
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            id,
            employee_id,
            start_date,
            start_time,
            stop_date,
            stop_time,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn save_diagnostic(&self, message: &str) -> Result<()> {
    let message = message.to_string();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO validation_failures (message) VALUES (?1)",
          rusqlite::params![message],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
