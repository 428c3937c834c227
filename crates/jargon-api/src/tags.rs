//! Handler for `GET /tags`.

use std::sync::Arc;

use axum::{Json, extract::State};
use jargon_core::store::GlossaryStore;
use serde::Serialize;

use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct TagBody {
  pub code:  u32,
  pub label: &'static str,
}

/// `GET /tags` — the tag table, in code order.
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<TagBody>>, ApiError>
where
  S: GlossaryStore,
{
  let tags = store
    .list_tags()
    .await
    .map_err(ApiError::from_store)?
    .into_iter()
    .map(|t| TagBody { code: t.code(), label: t.label() })
    .collect();
  Ok(Json(tags))
}
