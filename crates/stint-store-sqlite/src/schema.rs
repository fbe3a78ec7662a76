//! SQL schema for the Stint SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated
//! on the `user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// Staging tables are raw landing zones: no keys, no constraints.
/// Duplicate or negative ids must surface as diagnostics, not as
/// constraint errors, so the permanent tables carry no keys either.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS staging_employees (
    id         INTEGER NOT NULL,
    full_name  TEXT    NOT NULL
);

CREATE TABLE IF NOT EXISTS staging_work_times (
    id          INTEGER NOT NULL,
    employee_id INTEGER NOT NULL,
    start_date  TEXT    NOT NULL,   -- D.M.YYYY
    start_time  TEXT    NOT NULL,   -- 24-hour H:M:S
    stop_date   TEXT    NOT NULL,
    stop_time   TEXT    NOT NULL
);

CREATE TABLE IF NOT EXISTS employees (
    id         INTEGER NOT NULL,
    full_name  TEXT    NOT NULL
);

CREATE TABLE IF NOT EXISTS work_times (
    id          INTEGER NOT NULL,
    employee_id INTEGER NOT NULL,
    start_date  TEXT    NOT NULL,   -- YYYY-MM-DD
    start_time  TEXT    NOT NULL,
    stop_date   TEXT    NOT NULL,
    stop_time   TEXT    NOT NULL
);

-- Flat text, one row per failed rule, in accumulation order.
CREATE TABLE IF NOT EXISTS validation_failures (
    failure_id INTEGER PRIMARY KEY AUTOINCREMENT,
    message    TEXT NOT NULL
);

PRAGMA user_version = 1;
";
