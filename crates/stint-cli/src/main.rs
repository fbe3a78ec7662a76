//! stint migration binary.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the
//! SQLite store, and runs one staging batch through the validation
//! pipeline. Exits nonzero on any infrastructure failure; validation
//! failures are recorded in the store's failure log and do not fail the
//! run.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use serde::Deserialize;
use stint_core::pipeline::run_migration;
use stint_store_sqlite::SqliteStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Runtime configuration, deserialised from `config.toml` and the
/// `STINT_*` environment.
#[derive(Deserialize, Clone)]
struct MigrateConfig {
  store_path: PathBuf,
}

#[derive(Parser)]
#[command(author, version, about = "Stint staging migration gate")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Override the store path from the configuration file.
  #[arg(long)]
  store: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("STINT"))
    .build()
    .context("failed to read config file")?;

  let migrate_cfg: MigrateConfig = settings
    .try_deserialize()
    .context("failed to deserialise MigrateConfig")?;

  let store_path =
    expand_tilde(&cli.store.unwrap_or(migrate_cfg.store_path));

  // Open SQLite store.
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  tracing::info!(store = %store_path.display(), "running migration");

  let summary = run_migration(&store).await.context("migration aborted")?;

  tracing::info!(
    employees_accepted = summary.employees_accepted,
    employees_rejected = summary.employees_rejected,
    work_times_accepted = summary.work_times_accepted,
    work_times_rejected = summary.work_times_rejected,
    diagnostics = summary.diagnostics,
    "migration complete"
  );

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
