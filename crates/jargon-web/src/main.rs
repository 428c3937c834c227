//! jargon server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! SQLite store, seeds the built-in terms, and serves the glossary over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use jargon_core::store::GlossaryStore;
use jargon_store_sqlite::SqliteStore;
use jargon_web::{AppState, ServerConfig, seed, templates};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Jargon glossary server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Skip inserting the built-in terms, overriding the config file.
  #[arg(long)]
  no_seed: bool,
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

  let mut server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load config from {:?}", cli.config))?;
  if cli.no_seed {
    server_cfg.seed = false;
  }

  // Schema failures are fatal here and nowhere else.
  let store = SqliteStore::open(&server_cfg.store_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", server_cfg.store_path))?;

  if server_cfg.seed {
    seed::seed(&store).await.context("failed to seed default entries")?;
  }

  // Refuse to start on a database whose ids no longer match their labels.
  let entries = store
    .list_entries()
    .await
    .context("integrity check over stored entries failed")?;
  tracing::info!(entries = entries.len(), "glossary loaded");

  let state = AppState {
    store:     Arc::new(store),
    templates: Arc::new(templates::environment().context("failed to load templates")?),
    config:    Arc::new(server_cfg.clone()),
  };

  let app = jargon_web::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
