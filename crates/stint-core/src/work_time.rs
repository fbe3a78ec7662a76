//! WorkTime — a recorded work interval referencing an employee.
//!
//! Staged rows carry their dates and times as text in a fixed
//! day.month.year / 24-hour format. Both the validation rules and the
//! pre-persist ISO reformatting parse through the format definitions
//! below, so a row that validated cannot later reformat under different
//! rules.

use chrono::{NaiveDate, NaiveDateTime};

/// Combined date and time format of staged rows. Day and month accept one
/// or two digits, the year is four digits, the clock is 24-hour with
/// seconds.
pub const STAGING_DATETIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Date-only format of staged rows.
pub const STAGING_DATE_FORMAT: &str = "%d.%m.%Y";

/// Canonical date format written to the permanent tables.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A staged work interval. The date/time fields are kept as raw text until
/// validation; accepted rows are persisted with both dates reformatted to
/// [`ISO_DATE_FORMAT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkTime {
  pub id:          i64,
  pub employee_id: i64,
  pub start_date:  String,
  pub start_time:  String,
  pub stop_date:   String,
  pub stop_time:   String,
}

impl WorkTime {
  /// Parse the start date/time pair into an instant.
  pub fn start_instant(&self) -> Result<NaiveDateTime, chrono::ParseError> {
    parse_staging_datetime(&self.start_date, &self.start_time)
  }

  /// Parse the stop date/time pair into an instant.
  pub fn stop_instant(&self) -> Result<NaiveDateTime, chrono::ParseError> {
    parse_staging_datetime(&self.stop_date, &self.stop_time)
  }
}

/// Parse a staged date and time pair under [`STAGING_DATETIME_FORMAT`].
pub fn parse_staging_datetime(
  date: &str,
  time: &str,
) -> Result<NaiveDateTime, chrono::ParseError> {
  NaiveDateTime::parse_from_str(
    &format!("{date} {time}"),
    STAGING_DATETIME_FORMAT,
  )
}

/// Reformat a staged date to the canonical `YYYY-MM-DD` form.
pub fn to_iso_date(date: &str) -> Result<String, chrono::ParseError> {
  let parsed = NaiveDate::parse_from_str(date, STAGING_DATE_FORMAT)?;
  Ok(parsed.format(ISO_DATE_FORMAT).to_string())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
