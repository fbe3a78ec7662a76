//! Error type for a migration run.

use thiserror::Error;

/// A fatal infrastructure failure.
///
/// Validation failures are not errors — they become diagnostics — so
/// anything surfacing here aborts the run: rows already written stay
/// written, and diagnostics not yet flushed are lost.
#[derive(Debug, Error)]
pub enum MigrationError<E>
where
  E: std::error::Error + 'static,
{
  /// The staging source or the migration sink failed.
  #[error("store error: {0}")]
  Store(#[source] E),

  /// An accepted work time failed date reformatting at the persist step.
  /// Validation already parsed the same string under the same format, so
  /// this indicates the row changed between the two steps.
  #[error("work time {id}: cannot reformat date {value:?}: {source}")]
  DateReformat {
    id:     i64,
    value:  String,
    #[source]
    source: chrono::ParseError,
  },
}
