//! Handlers for `/entries` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/entries` | Every entry; `tags` is empty |
//! | `GET`  | `/entries/:id` | Single entry with tags; 404 if not found |
//! | `POST` | `/entries` | Body: [`NewEntryBody`]; 201 if inserted, 200 if already present |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use jargon_core::{
  Entry, Tag,
  store::{AddOutcome, GlossaryStore},
  tag::collect_unique,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /entries`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Entry>>, ApiError>
where
  S: GlossaryStore,
{
  let entries = store.list_entries().await.map_err(ApiError::from_store)?;
  Ok(Json(entries))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /entries/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<u32>,
) -> Result<Json<Entry>, ApiError>
where
  S: GlossaryStore,
{
  let mut entry = store
    .get_entry(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("entry {id} not found")))?;

  entry.tags = store
    .entry_tags(id)
    .await
    .map_err(ApiError::from_store)?
    .into_iter()
    .collect();

  Ok(Json(entry))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /entries`. The id is derived from `label`.
#[derive(Debug, Deserialize)]
pub struct NewEntryBody {
  pub label:       String,
  pub title:       String,
  #[serde(default)]
  pub description: String,
  /// Each tag at most once; repeats are rejected with 400.
  #[serde(default)]
  pub tags:        Vec<Tag>,
}

impl TryFrom<NewEntryBody> for Entry {
  type Error = jargon_core::Error;

  fn try_from(b: NewEntryBody) -> Result<Self, Self::Error> {
    let tags = collect_unique(b.tags)?;
    Ok(Entry::new(b.label, b.title, b.description, tags))
  }
}

#[derive(Debug, Serialize)]
pub struct CreateResponse {
  pub outcome: AddOutcome,
  pub entry:   Entry,
}

/// `POST /entries`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewEntryBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: GlossaryStore,
{
  if body.label.is_empty() {
    return Err(ApiError::BadRequest("label must not be empty".into()));
  }

  let entry = Entry::try_from(body)?;
  let outcome = store
    .add_entry(&entry)
    .await
    .map_err(ApiError::from_store)?;

  let status = match outcome {
    AddOutcome::Inserted => StatusCode::CREATED,
    AddOutcome::AlreadyExists => StatusCode::OK,
  };
  Ok((status, Json(CreateResponse { outcome, entry })))
}
