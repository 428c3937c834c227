//! HTML front end for the Jargon glossary.
//!
//! Exposes an axum [`Router`] serving the glossary pages, static assets and
//! the JSON API, backed by any [`GlossaryStore`].

pub mod error;
pub mod handlers;
pub mod seed;
pub mod templates;

pub use error::Error;

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::{Router, routing::get};
use jargon_core::store::GlossaryStore;
use minijinja::Environment;
use serde::Deserialize;
use tower_http::{services::ServeDir, trace::TraceLayer};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `JARGON_*` environment variables.
#[derive(Deserialize, Clone, Debug)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
  pub static_dir: PathBuf,
  /// Insert the built-in terms at startup.
  pub seed:       bool,
}

impl ServerConfig {
  /// Layer the optional file at `path` and the environment over defaults.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "0.0.0.0")?
      .set_default("port", 8080_i64)?
      .set_default("store_path", "/tmp/jargon.db")?
      .set_default("static_dir", "./static")?
      .set_default("seed", true)?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("JARGON"))
      .build()?
      .try_deserialize()
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: GlossaryStore> {
  pub store:     Arc<S>,
  pub templates: Arc<Environment<'static>>,
  pub config:    Arc<ServerConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the application [`Router`]: HTML pages, `/static`, and the JSON API
/// under `/api`.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: GlossaryStore + Clone + 'static,
{
  let api = jargon_api::api_router(state.store.clone());
  let assets = ServeDir::new(&state.config.static_dir);

  Router::new()
    .route("/",          get(handlers::index::<S>))
    .route("/page/{id}", get(handlers::page::<S>))
    .with_state(state)
    .nest("/api", api)
    .nest_service("/static", assets)
    .fallback(handlers::not_found)
    .layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────
