//! JSON REST API for Jargon.
//!
//! Exposes an axum [`Router`] backed by any [`jargon_core::store::GlossaryStore`].
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", jargon_api::api_router(store.clone()))
//! ```

pub mod entries;
pub mod error;
pub mod tags;

use std::sync::Arc;

use axum::{Router, routing::get};
use jargon_core::store::GlossaryStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: GlossaryStore + 'static,
{
  Router::new()
    .route("/entries", get(entries::list::<S>).post(entries::create::<S>))
    .route("/entries/{id}", get(entries::get_one::<S>))
    .route("/tags", get(tags::list::<S>))
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
