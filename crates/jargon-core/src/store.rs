//! The `GlossaryStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `jargon-store-sqlite`).
//! Higher layers (`jargon-api`, `jargon-web`) depend on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use serde::Serialize;

use crate::{entry::Entry, tag::Tag};

/// Result of [`GlossaryStore::add_entry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
  /// The entry row and its tag rows were written.
  Inserted,
  /// A row with the same id and label was already present; nothing changed.
  AlreadyExists,
}

/// Abstraction over a Jargon glossary backend.
///
/// Entries are insert-only. There is no update or delete.
pub trait GlossaryStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Create the schema if absent and seed the tag table from the registry.
  /// Safe to call any number of times.
  fn init_schema(&self) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Atomically insert `entry` and one association row per tag.
  ///
  /// Inserting an entry whose id is already stored is a no-op reported as
  /// [`AddOutcome::AlreadyExists`], as long as the stored label matches.
  fn add_entry<'a>(
    &'a self,
    entry: &'a Entry,
  ) -> impl Future<Output = Result<AddOutcome, Self::Error>> + Send + 'a;

  /// Point lookup by id. Returns `None` if not found. Tags are left empty.
  fn get_entry(
    &self,
    id: u32,
  ) -> impl Future<Output = Result<Option<Entry>, Self::Error>> + Send + '_;

  /// Every stored entry, in storage order, with tags left empty.
  fn list_entries(
    &self,
  ) -> impl Future<Output = Result<Vec<Entry>, Self::Error>> + Send + '_;

  /// The tags associated with entry `id` (empty if the entry is unknown).
  fn entry_tags(
    &self,
    id: u32,
  ) -> impl Future<Output = Result<Vec<Tag>, Self::Error>> + Send + '_;

  /// The contents of the tag table.
  fn list_tags(
    &self,
  ) -> impl Future<Output = Result<Vec<Tag>, Self::Error>> + Send + '_;
}
