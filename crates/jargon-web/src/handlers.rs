//! HTML page handlers.

use axum::{
  extract::{Path, State},
  response::Html,
};
use jargon_core::store::GlossaryStore;
use minijinja::context;

use crate::{AppState, error::Error};

/// `GET /` — every entry.
pub async fn index<S>(
  State(state): State<AppState<S>>,
) -> Result<Html<String>, Error>
where
  S: GlossaryStore + Clone + 'static,
{
  let entries = state.store.list_entries().await.map_err(Error::store)?;

  let html = state
    .templates
    .get_template("index.html")?
    .render(context! { entries => entries })?;
  Ok(Html(html))
}

/// `GET /page/{id}` — one entry with its tags. Ids that do not parse are
/// treated like unknown ids.
pub async fn page<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
) -> Result<Html<String>, Error>
where
  S: GlossaryStore + Clone + 'static,
{
  let id: u32 = id.parse().map_err(|_| Error::NotFound)?;

  let mut entry = state
    .store
    .get_entry(id)
    .await
    .map_err(Error::store)?
    .ok_or(Error::NotFound)?;

  entry.tags = state
    .store
    .entry_tags(id)
    .await
    .map_err(Error::store)?
    .into_iter()
    .collect();

  let html = state
    .templates
    .get_template("page.html")?
    .render(context! { entry => entry })?;
  Ok(Html(html))
}

/// Fallback for every unrouted path.
pub async fn not_found() -> Error { Error::NotFound }
